use crate::shared::state::ScrollState;

/// The two navbar themes. Selected by scroll position only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTheme {
    /// Dark gradient bar at the top of the page
    TopOfPage,
    /// Light, blurred bar once the page has scrolled
    Scrolled,
}

impl NavTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavTheme::TopOfPage => "top",
            NavTheme::Scrolled => "scrolled",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, NavTheme::TopOfPage)
    }

    pub fn all() -> [NavTheme; 2] {
        [NavTheme::TopOfPage, NavTheme::Scrolled]
    }

    /// Fixed bar container
    pub fn bar_class(&self) -> &'static str {
        match self {
            NavTheme::TopOfPage => "c-navbar c-navbar--top",
            NavTheme::Scrolled => "c-navbar c-navbar--scrolled",
        }
    }

    /// Desktop link
    pub fn item_class(&self) -> &'static str {
        match self {
            NavTheme::TopOfPage => "c-nav-item c-nav-item--top",
            NavTheme::Scrolled => "c-nav-item c-nav-item--scrolled",
        }
    }

    /// Bell, profile and hamburger triggers
    pub fn control_class(&self) -> &'static str {
        match self {
            NavTheme::TopOfPage => "c-navbar__control c-navbar__control--top",
            NavTheme::Scrolled => "c-navbar__control c-navbar__control--scrolled",
        }
    }

    pub fn logo_badge_class(&self) -> &'static str {
        match self {
            NavTheme::TopOfPage => "c-logo__badge c-logo__badge--top",
            NavTheme::Scrolled => "c-logo__badge c-logo__badge--scrolled",
        }
    }

    pub fn logo_title_class(&self) -> &'static str {
        match self {
            NavTheme::TopOfPage => "c-logo__title c-logo__title--top",
            NavTheme::Scrolled => "c-logo__title c-logo__title--scrolled",
        }
    }

    pub fn logo_subtitle_class(&self) -> &'static str {
        match self {
            NavTheme::TopOfPage => "c-logo__subtitle c-logo__subtitle--top",
            NavTheme::Scrolled => "c-logo__subtitle c-logo__subtitle--scrolled",
        }
    }
}

impl From<ScrollState> for NavTheme {
    fn from(state: ScrollState) -> Self {
        match state {
            ScrollState::Top => NavTheme::TopOfPage,
            ScrollState::Scrolled => NavTheme::Scrolled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_are_mutually_exclusive() {
        let [top, scrolled] = NavTheme::all();

        assert_ne!(top, scrolled);
        assert_ne!(top.bar_class(), scrolled.bar_class());
        assert_ne!(top.item_class(), scrolled.item_class());
        assert_ne!(top.control_class(), scrolled.control_class());
        assert!(top.is_dark());
        assert!(!scrolled.is_dark());
    }

    #[test]
    fn test_scroll_scenario() {
        let theme_at = |offset: f64| NavTheme::from(ScrollState::from_offset(offset));

        assert_eq!(theme_at(0.0), NavTheme::TopOfPage);
        assert_eq!(theme_at(50.0), NavTheme::Scrolled);
        assert_eq!(theme_at(0.0), NavTheme::TopOfPage);
    }

    #[test]
    fn test_classes_carry_modifier() {
        for theme in NavTheme::all() {
            let modifier = format!("--{}", theme.as_str());
            assert!(theme.bar_class().ends_with(&modifier));
            assert!(theme.logo_badge_class().ends_with(&modifier));
            assert!(theme.logo_title_class().ends_with(&modifier));
            assert!(theme.logo_subtitle_class().ends_with(&modifier));
        }
    }
}

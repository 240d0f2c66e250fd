use crate::domain::models::NavDestination;
use crate::shared::constants::SCROLL_THRESHOLD_PX;
use crate::shared::logging::{
    log_navigation, log_notice, log_notification_acknowledged, log_panel_visibility,
};
use crate::shared::state::Notice;

/// Whether the page has scrolled past the theme threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollState {
    #[default]
    Top,
    Scrolled,
}

impl ScrollState {
    pub fn from_offset(offset: f64) -> Self {
        if offset > SCROLL_THRESHOLD_PX {
            ScrollState::Scrolled
        } else {
            ScrollState::Top
        }
    }

    pub fn is_scrolled(&self) -> bool {
        matches!(self, ScrollState::Scrolled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollState::Top => "top",
            ScrollState::Scrolled => "scrolled",
        }
    }
}

/// Open/closed flag of a single overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Closed => Visibility::Open,
            Visibility::Open => Visibility::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Visibility::Open)
    }
}

/// The overlays owned by the navbar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    MobileMenu,
    UserDropdown,
    Notifications,
}

impl Panel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::MobileMenu => "mobile_menu",
            Panel::UserDropdown => "user_dropdown",
            Panel::Notifications => "notifications",
        }
    }
}

/// Visibility of every navbar overlay.
///
/// The flags are independent: opening one never closes another, and there is
/// no outside-click handling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
    mobile_menu: Visibility,
    user_dropdown: Visibility,
    notifications: Visibility,
}

impl NavbarState {
    pub fn visibility(&self, panel: Panel) -> Visibility {
        match panel {
            Panel::MobileMenu => self.mobile_menu,
            Panel::UserDropdown => self.user_dropdown,
            Panel::Notifications => self.notifications,
        }
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        self.visibility(panel).is_open()
    }

    fn slot(&mut self, panel: Panel) -> &mut Visibility {
        match panel {
            Panel::MobileMenu => &mut self.mobile_menu,
            Panel::UserDropdown => &mut self.user_dropdown,
            Panel::Notifications => &mut self.notifications,
        }
    }

    /// Flip a panel from its trigger button
    pub fn toggle(&mut self, panel: Panel) -> Visibility {
        let slot = self.slot(panel);
        *slot = slot.toggled();
        let next = *slot;
        log_panel_visibility(panel, next);
        next
    }

    pub fn close(&mut self, panel: Panel) {
        let slot = self.slot(panel);
        if slot.is_open() {
            *slot = Visibility::Closed;
            log_panel_visibility(panel, Visibility::Closed);
        }
    }

    /// Clicking a feed entry. The feed is read-only, so this only produces the notice.
    pub fn acknowledge_notification(&self, id: u32) -> Notice {
        log_notification_acknowledged(id);
        let notice = Notice::NotificationRead;
        log_notice(notice);
        notice
    }

    /// Simulated logout. Closes the panel it was triggered from; there is no session to end.
    pub fn logout(&mut self, origin: Panel) -> Notice {
        self.close(origin);
        let notice = Notice::LoggedOut;
        log_notice(notice);
        notice
    }

    /// A link inside the mobile menu was activated
    pub fn activate_mobile_link(&mut self, destination: NavDestination) -> NavDestination {
        log_navigation(destination, true);
        self.close(Panel::MobileMenu);
        destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PortalConfig;
    use crate::shared::state::ToastQueue;

    const ALL_PANELS: [Panel; 3] = [Panel::MobileMenu, Panel::UserDropdown, Panel::Notifications];

    #[test]
    fn test_scroll_threshold() {
        assert_eq!(ScrollState::from_offset(0.0), ScrollState::Top);
        assert_eq!(ScrollState::from_offset(10.0), ScrollState::Top);
        assert_eq!(ScrollState::from_offset(10.5), ScrollState::Scrolled);
        assert_eq!(ScrollState::from_offset(50.0), ScrollState::Scrolled);
    }

    #[test]
    fn test_scroll_state_matches_offset_everywhere() {
        for offset in (0..200).map(|o| o as f64 * 0.25) {
            assert_eq!(
                ScrollState::from_offset(offset).is_scrolled(),
                offset > 10.0,
                "offset {}",
                offset
            );
        }
    }

    #[test]
    fn test_initial_state_all_closed() {
        let state = NavbarState::default();
        for panel in ALL_PANELS {
            assert!(!state.is_open(panel));
        }
    }

    #[test]
    fn test_toggle_parity() {
        for panel in ALL_PANELS {
            let mut state = NavbarState::default();
            for clicks in 1..=6 {
                state.toggle(panel);
                assert_eq!(state.is_open(panel), clicks % 2 == 1);
            }
        }
    }

    #[test]
    fn test_flags_are_independent() {
        let mut state = NavbarState::default();
        state.toggle(Panel::Notifications);
        state.toggle(Panel::UserDropdown);

        assert!(state.is_open(Panel::Notifications));
        assert!(state.is_open(Panel::UserDropdown));
        assert!(!state.is_open(Panel::MobileMenu));
    }

    #[test]
    fn test_logout_closes_origin_regardless_of_prior_state() {
        for origin in [Panel::UserDropdown, Panel::MobileMenu] {
            let mut closed = NavbarState::default();
            assert_eq!(closed.logout(origin), Notice::LoggedOut);
            assert!(!closed.is_open(origin));

            let mut open = NavbarState::default();
            open.toggle(origin);
            assert_eq!(open.logout(origin), Notice::LoggedOut);
            assert!(!open.is_open(origin));
        }
    }

    #[test]
    fn test_desktop_logout_leaves_notifications_alone() {
        let mut state = NavbarState::default();
        state.toggle(Panel::Notifications);
        state.toggle(Panel::UserDropdown);

        state.logout(Panel::UserDropdown);

        assert!(!state.is_open(Panel::UserDropdown));
        assert!(state.is_open(Panel::Notifications));
    }

    #[test]
    fn test_mobile_link_closes_menu() {
        for destination in NavDestination::PRIMARY {
            let mut state = NavbarState::default();
            state.toggle(Panel::MobileMenu);

            assert_eq!(state.activate_mobile_link(destination), destination);
            assert!(!state.is_open(Panel::MobileMenu));
        }
    }

    #[test]
    fn test_acknowledge_keeps_panel_open() {
        let mut state = NavbarState::default();
        state.toggle(Panel::Notifications);
        let before = state;

        assert_eq!(state.acknowledge_notification(2), Notice::NotificationRead);
        assert_eq!(state, before);
    }

    #[test]
    fn test_notification_click_scenario() {
        let config = PortalConfig::default();
        let mut toasts = ToastQueue::default();
        let mut state = NavbarState::default();

        state.toggle(Panel::Notifications);
        let entry_before = config.notifications[1].clone();
        toasts.push_notice(state.acknowledge_notification(2));

        assert!(state.is_open(Panel::Notifications));
        assert_eq!(config.notification_count(), 3);
        assert!(config.has_notifications());
        assert_eq!(config.notifications[1], entry_before);
        assert_eq!(toasts.toasts()[0].message, "Notification marked as read");
    }

    #[test]
    fn test_user_panel_logout_scenario() {
        let mut toasts = ToastQueue::default();
        let mut state = NavbarState::default();

        state.toggle(Panel::UserDropdown);
        toasts.push_notice(state.logout(Panel::UserDropdown));

        assert!(!state.is_open(Panel::UserDropdown));
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.toasts()[0].message, "Logged out successfully");
    }
}

use serde::{Deserialize, Serialize};

/// Every page the navbar can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavDestination {
    Home,
    About,
    Contact,
    Profile,
    Settings,
}

impl NavDestination {
    /// Links shown in the bar and in the mobile menu, in display order
    pub const PRIMARY: [NavDestination; 3] = [
        NavDestination::Home,
        NavDestination::About,
        NavDestination::Contact,
    ];

    /// Links shown in the user dropdown
    pub const ACCOUNT: [NavDestination; 2] = [NavDestination::Profile, NavDestination::Settings];

    pub fn path(&self) -> &'static str {
        match self {
            NavDestination::Home => "/",
            NavDestination::About => "/about",
            NavDestination::Contact => "/contact",
            NavDestination::Profile => "/profile",
            NavDestination::Settings => "/settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavDestination::Home => "Home",
            NavDestination::About => "About",
            NavDestination::Contact => "Contact",
            NavDestination::Profile => "My Profile",
            NavDestination::Settings => "Settings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(NavDestination::Home.path(), "/");
        assert_eq!(NavDestination::About.path(), "/about");
        assert_eq!(NavDestination::Contact.path(), "/contact");
        assert_eq!(NavDestination::Profile.path(), "/profile");
        assert_eq!(NavDestination::Settings.path(), "/settings");
    }

    #[test]
    fn test_primary_order() {
        let labels: Vec<_> = NavDestination::PRIMARY.iter().map(|d| d.label()).collect();
        assert_eq!(labels, vec!["Home", "About", "Contact"]);
    }
}

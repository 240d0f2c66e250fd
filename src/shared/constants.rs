// Navbar behaviour constants

/// Offsets strictly above this switch the bar to the scrolled theme
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

/// How long a success toast stays on screen
pub const TOAST_DURATION_MS: u32 = 2000;

/// Environment variable naming a JSON file with the portal configuration
pub const CONFIG_ENV_VAR: &str = "CAMPUS_PORTAL_CONFIG";

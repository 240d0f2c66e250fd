// Pure navbar state, no framework dependencies
pub mod nav_theme;
pub mod navbar_state;
pub mod notice;

pub use nav_theme::NavTheme;
pub use navbar_state::{NavbarState, Panel, ScrollState, Visibility};
pub use notice::{Notice, Toast, ToastKind, ToastQueue};

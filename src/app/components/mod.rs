pub mod icons;
pub mod mobile_menu;
pub mod nav_item;
pub mod notification_panel;
pub mod toast;
pub mod user_menu;

pub use icons::{Icon, IconKind};
pub use mobile_menu::MobileMenu;
pub use nav_item::{MobileNavItem, NavItem};
pub use notification_panel::NotificationPanel;
pub use toast::ToastHost;
pub use user_menu::UserMenu;

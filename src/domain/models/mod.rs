// Domain models (portal entities)
// Pure Rust, no framework dependencies

pub mod navigation;
pub mod notification;
pub mod user;

pub use navigation::NavDestination;
pub use notification::Notification;
pub use user::{BrandInfo, UserIdentity};

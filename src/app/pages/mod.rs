pub mod placeholder;
pub mod portal_routes;

pub use portal_routes::{App, Route};

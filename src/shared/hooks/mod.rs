// Custom Dioxus hooks
pub mod use_scroll_state;
pub mod use_toaster;

pub use use_scroll_state::use_scroll_state;
pub use use_toaster::{use_toaster, use_toaster_provider, Toaster};

pub mod errors;
pub mod constants;
pub mod logging;

// Available in fullstack mode (both client and server)
pub mod hooks;
pub mod state;

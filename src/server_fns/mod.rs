//! Server functions for Dioxus Fullstack
//! These functions run on the server and are callable from the client

use dioxus::prelude::*;

use crate::config::PortalConfig;

/// Brand, identity and notification feed for the navbar.
///
/// Stands in for the identity and notification services: the payload is read
/// once per request from `CAMPUS_PORTAL_CONFIG` (or the defaults).
#[server]
pub async fn get_portal_config() -> Result<PortalConfig, ServerFnError> {
    tracing::debug!("get_portal_config called");

    crate::config::load_from_env()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

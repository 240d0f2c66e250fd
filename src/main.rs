//! CampusTools portal - main entry point
//!
//! Uses the dioxus::serve() pattern for dx serve compatibility.

use campus_portal::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting CampusTools portal...");

    // Surface a broken configuration file at startup instead of on first request
    if let Some(path) = std::env::var_os(campus_portal::shared::constants::CONFIG_ENV_VAR) {
        let path = std::path::PathBuf::from(path);
        match check_config_file(&path) {
            Ok(count) => tracing::info!(
                "Portal configuration {} OK ({} notifications)",
                path.display(),
                count
            ),
            Err(e) => tracing::error!("{:#}. Requests will fail until it is fixed.", e),
        }
    }

    dioxus::serve(|| async move {
        let router = dioxus::server::router(App);
        Ok(router)
    });
}

#[cfg(feature = "server")]
fn check_config_file(path: &std::path::Path) -> anyhow::Result<usize> {
    use anyhow::Context;
    use campus_portal::config::PortalConfig;

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read portal configuration {}", path.display()))?;
    let config = PortalConfig::from_json(&json)
        .with_context(|| format!("Invalid portal configuration {}", path.display()))?;

    Ok(config.notification_count())
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] CampusTools portal initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}

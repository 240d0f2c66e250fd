//! Portal configuration
//!
//! Identity, brand and notification feed are injected here instead of being
//! hardcoded in the navbar. The server reads an optional JSON file named by
//! `CAMPUS_PORTAL_CONFIG`; everything else falls back to the defaults.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::models::notification::default_notifications;
use crate::domain::models::{BrandInfo, Notification, UserIdentity};
use crate::shared::errors::{AppError, Result};

static DEFAULT_CONFIG: Lazy<PortalConfig> = Lazy::new(|| PortalConfig {
    brand: BrandInfo::default(),
    user: UserIdentity::default(),
    notifications: default_notifications(),
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub brand: BrandInfo,
    pub user: UserIdentity,
    pub notifications: Vec<Notification>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl PortalConfig {
    /// Parse and validate a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PortalConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.user.display_name.trim().is_empty() {
            return Err(AppError::Config("user display_name is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for notification in &self.notifications {
            if !seen.insert(notification.id) {
                return Err(AppError::Config(format!(
                    "duplicate notification id {}",
                    notification.id
                )));
            }
        }

        Ok(())
    }

    /// Drives the bell's unread dot. Acknowledging an entry never clears it.
    pub fn has_notifications(&self) -> bool {
        !self.notifications.is_empty()
    }

    pub fn notification_count(&self) -> usize {
        self.notifications.len()
    }
}

/// Load from `path`, or the defaults when no path is given
#[cfg(not(target_arch = "wasm32"))]
pub async fn load_from_path(path: Option<&std::path::Path>) -> Result<PortalConfig> {
    use crate::shared::logging::log_config_loaded;

    let Some(path) = path else {
        let config = PortalConfig::default();
        log_config_loaded("defaults", config.notification_count());
        return Ok(config);
    };

    let json = tokio::fs::read_to_string(path).await?;
    let config = PortalConfig::from_json(&json)?;
    log_config_loaded(&path.display().to_string(), config.notification_count());
    Ok(config)
}

/// Load using the `CAMPUS_PORTAL_CONFIG` environment variable
#[cfg(not(target_arch = "wasm32"))]
pub async fn load_from_env() -> Result<PortalConfig> {
    use crate::shared::constants::CONFIG_ENV_VAR;

    let path = std::env::var_os(CONFIG_ENV_VAR).map(std::path::PathBuf::from);
    load_from_path(path.as_deref()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PortalConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.notification_count(), 3);
        assert!(config.has_notifications());
        assert_eq!(config.user.display_name, "Alex Johnson");
        assert_eq!(config.brand.title, "CampusTools");
    }

    #[test]
    fn test_partial_json_falls_back_per_field() {
        let config = PortalConfig::from_json(r#"{"user": {"department": "Mathematics"}}"#).unwrap();

        assert_eq!(config.user.department, "Mathematics");
        assert_eq!(config.user.display_name, "Alex Johnson");
        assert_eq!(config.notification_count(), 3);
    }

    #[test]
    fn test_empty_feed_has_no_dot() {
        let config = PortalConfig::from_json(r#"{"notifications": []}"#).unwrap();
        assert!(!config.has_notifications());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{"notifications": [
            {"id": 1, "text": "a", "time": "now"},
            {"id": 1, "text": "b", "time": "now"}
        ]}"#;

        assert!(matches!(PortalConfig::from_json(json), Err(AppError::Config(_))));
    }

    #[test]
    fn test_empty_name_rejected() {
        let json = r#"{"user": {"display_name": "  "}}"#;
        assert!(matches!(PortalConfig::from_json(json), Err(AppError::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            PortalConfig::from_json("{ not json"),
            Err(AppError::Serialization(_))
        ));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn test_load_defaults_without_path() {
        let config = load_from_path(None).await.unwrap();
        assert_eq!(config, PortalConfig::default());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("campus-portal-{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(
            &path,
            r#"{"notifications": [{"id": 7, "text": "Library closes early", "time": "5m ago"}]}"#,
        )
        .await
        .unwrap();

        let config = load_from_path(Some(&path)).await.unwrap();
        let _ = tokio::fs::remove_file(&path).await;

        assert_eq!(config.notification_count(), 1);
        assert_eq!(config.notifications[0].text, "Library closes early");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join(format!("campus-portal-missing-{}.json", uuid::Uuid::new_v4()));
        assert!(matches!(load_from_path(Some(&path)).await, Err(AppError::Io(_))));
    }
}

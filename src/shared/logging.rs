//! Structured logging for the portal navbar
//!
//! Every UI transition worth tracing goes through one of these helpers so the
//! fields stay consistent (`operation`, `panel`, `open`, ...).

use crate::domain::models::NavDestination;
use crate::shared::errors::AppError;
use crate::shared::state::{Notice, Panel, ScrollState, Visibility};

/// Log operation categories
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    ScrollListener,
    PanelToggle,
    Notice,
    Navigation,
    Config,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::ScrollListener => "scroll_listener",
            LogOperation::PanelToggle => "panel_toggle",
            LogOperation::Notice => "notice",
            LogOperation::Navigation => "navigation",
            LogOperation::Config => "config",
        }
    }
}

/// Log scroll listener registration
pub fn log_scroll_listener_attached(initial_offset: f64) {
    tracing::debug!(
        operation = LogOperation::ScrollListener.as_str(),
        offset = initial_offset,
        "Scroll listener attached"
    );
}

/// Log scroll listener removal on unmount
pub fn log_scroll_listener_detached() {
    tracing::debug!(
        operation = LogOperation::ScrollListener.as_str(),
        "Scroll listener detached"
    );
}

/// Log a failed listener registration or removal
pub fn log_scroll_listener_error(error: &AppError) {
    tracing::warn!(
        operation = LogOperation::ScrollListener.as_str(),
        error = %error,
        "Scroll listener unavailable, navbar stays in top-of-page theme"
    );
}

/// Log a theme flip caused by scrolling
pub fn log_scroll_state_change(offset: f64, state: ScrollState) {
    tracing::trace!(
        operation = LogOperation::ScrollListener.as_str(),
        offset = offset,
        state = state.as_str(),
        "Scroll state changed"
    );
}

/// Log a panel visibility change
pub fn log_panel_visibility(panel: Panel, visibility: Visibility) {
    tracing::debug!(
        operation = LogOperation::PanelToggle.as_str(),
        panel = panel.as_str(),
        open = visibility.is_open(),
        "Panel visibility changed"
    );
}

/// Log a transient notice emission
pub fn log_notice(notice: Notice) {
    tracing::info!(
        operation = LogOperation::Notice.as_str(),
        notice = notice.as_str(),
        message = notice.message(),
        "Transient notice emitted"
    );
}

/// Log a notification acknowledgement (the feed itself is untouched)
pub fn log_notification_acknowledged(id: u32) {
    tracing::debug!(
        operation = LogOperation::Notice.as_str(),
        notification_id = id,
        "Notification acknowledged"
    );
}

/// Log a navigation request handed to the router
pub fn log_navigation(destination: NavDestination, from_mobile: bool) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        path = destination.path(),
        mobile = from_mobile,
        "Navigation requested"
    );
}

/// Log configuration load result
pub fn log_config_loaded(source: &str, notification_count: usize) {
    tracing::info!(
        operation = LogOperation::Config.as_str(),
        source = source,
        notification_count = notification_count,
        "Portal configuration loaded"
    );
}

/// Log a fallback to the built-in configuration
pub fn log_config_fallback(reason: &str) {
    tracing::warn!(
        operation = LogOperation::Config.as_str(),
        reason = reason,
        "Falling back to default portal configuration"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::ScrollListener.as_str(), "scroll_listener");
        assert_eq!(LogOperation::PanelToggle.as_str(), "panel_toggle");
        assert_eq!(LogOperation::Notice.as_str(), "notice");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::Config.as_str(), "config");
    }
}

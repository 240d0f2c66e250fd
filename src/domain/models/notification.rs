use serde::{Deserialize, Serialize};

/// A read-only notification shown in the bell panel.
///
/// `time` is a display label ("2h ago"), never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub text: String,
    pub time: String,
}

impl Notification {
    pub fn new(id: u32, text: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            time: time.into(),
        }
    }
}

/// Placeholder feed until a notification service exists
pub fn default_notifications() -> Vec<Notification> {
    vec![
        Notification::new(1, "Assignment due in 2 days", "2h ago"),
        Notification::new(2, "New grade posted", "1d ago"),
        Notification::new(3, "Class schedule updated", "3d ago"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_notifications() {
        let notifications = default_notifications();

        assert_eq!(notifications.len(), 3);
        assert_eq!(notifications[1].id, 2);
        assert_eq!(notifications[1].text, "New grade posted");
        assert_eq!(notifications[1].time, "1d ago");
    }
}

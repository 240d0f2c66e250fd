use uuid::Uuid;

/// Transient success messages the navbar can emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    NotificationRead,
    LoggedOut,
}

impl Notice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Notice::NotificationRead => "notification_read",
            Notice::LoggedOut => "logged_out",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::NotificationRead => "Notification marked as read",
            Notice::LoggedOut => "Logged out successfully",
        }
    }

    pub fn kind(&self) -> ToastKind {
        ToastKind::Success
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "c-toast c-toast--success",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Toasts currently on screen, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn push_notice(&mut self, notice: Notice) -> Uuid {
        self.push(notice.kind(), notice.message())
    }

    /// Removes the toast if it is still shown. Returns whether anything was removed.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_messages() {
        assert_eq!(Notice::NotificationRead.message(), "Notification marked as read");
        assert_eq!(Notice::LoggedOut.message(), "Logged out successfully");
    }

    #[test]
    fn test_queue_keeps_emission_order() {
        let mut queue = ToastQueue::default();
        queue.push_notice(Notice::NotificationRead);
        queue.push_notice(Notice::LoggedOut);

        let messages: Vec<_> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["Notification marked as read", "Logged out successfully"]);
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push_notice(Notice::LoggedOut);
        let second = queue.push_notice(Notice::LoggedOut);

        assert!(queue.dismiss(first));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.toasts()[0].id, second);

        // Already gone
        assert!(!queue.dismiss(first));
        assert_eq!(queue.len(), 1);
    }
}

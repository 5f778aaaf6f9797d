use crate::domain::NotificationLevel;

/// Port for surfacing transient notifications to the user.
pub trait NotificationPort: Send + Sync {
    /// Shows a notification.
    fn send(&self, title: &str, body: &str, level: NotificationLevel);
}

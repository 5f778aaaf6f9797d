use std::collections::VecDeque;
use std::time::Duration;

use crate::domain::{Notification, NotificationLevel};

/// FIFO queue of toasts; only the front one is on screen.
#[derive(Debug)]
pub struct NotificationManager {
    queue: VecDeque<Notification>,
    default_duration: Duration,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl NotificationManager {
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            default_duration,
        }
    }

    /// Queues a toast with the configured display duration.
    pub fn notify(
        &mut self,
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        let notification =
            Notification::new(level, title, message).with_duration(self.default_duration);
        self.queue.push_back(notification);
    }

    pub fn default_toast(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Default, title, message);
    }

    pub fn destructive(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Destructive, title, message);
    }

    /// Starts the front toast's timer and drops it once expired.
    ///
    /// Returns whether the visible toast changed.
    pub fn tick(&mut self) -> bool {
        let Some(front) = self.queue.front_mut() else {
            return false;
        };

        front.mark_displayed();
        if !front.is_expired() {
            return false;
        }

        self.queue.pop_front();
        if let Some(next) = self.queue.front_mut() {
            next.mark_displayed();
        }
        true
    }

    #[must_use]
    pub fn current_notification(&self) -> Option<&Notification> {
        self.queue.front()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.queue.is_empty()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

//! Notification adapters: in-app toasts, optional desktop mirror, fan-out.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::application::NotificationManager;
use crate::domain::NotificationLevel;
use crate::domain::ports::NotificationPort;

/// Pushes notifications into the shared toast queue drawn by the UI.
#[derive(Debug, Clone)]
pub struct ToastNotifier {
    manager: Arc<Mutex<NotificationManager>>,
}

impl ToastNotifier {
    #[must_use]
    pub fn new(manager: Arc<Mutex<NotificationManager>>) -> Self {
        Self { manager }
    }
}

impl NotificationPort for ToastNotifier {
    fn send(&self, title: &str, body: &str, level: NotificationLevel) {
        self.manager.lock().notify(level, title, body);
    }
}

/// Forwards every notification to each inner port in order.
#[derive(Default)]
pub struct CompositeNotifier {
    targets: Vec<Arc<dyn NotificationPort>>,
}

impl CompositeNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, target: Arc<dyn NotificationPort>) -> Self {
        self.targets.push(target);
        self
    }
}

impl NotificationPort for CompositeNotifier {
    fn send(&self, title: &str, body: &str, level: NotificationLevel) {
        for target in &self.targets {
            target.send(title, body, level);
        }
    }
}

/// Desktop notification service.
#[cfg(feature = "notify")]
mod notify_impl {
    use super::*;
    use notify_rust::Notification;

    #[derive(Debug, Clone, Default)]
    pub struct DesktopNotificationService {
        enabled: bool,
    }

    impl DesktopNotificationService {
        #[must_use]
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }
    }

    impl NotificationPort for DesktopNotificationService {
        fn send(&self, title: &str, body: &str, level: NotificationLevel) {
            if !self.enabled {
                return;
            }

            let title = match level {
                NotificationLevel::Default => title.to_string(),
                NotificationLevel::Destructive => format!("⚠ {title}"),
            };
            let body = body.to_string();

            tokio::task::spawn_blocking(move || {
                if let Err(e) = Notification::new()
                    .summary(&title)
                    .body(&body)
                    .appname("Galal Academy")
                    .show()
                {
                    tracing::warn!("Failed to show notification: {}", e);
                }
            });
        }
    }
}

/// Stub notification service when notify feature is disabled.
#[cfg(not(feature = "notify"))]
mod stub_impl {
    use super::*;

    #[derive(Debug, Clone, Default)]
    pub struct DesktopNotificationService {
        _enabled: bool,
    }

    impl DesktopNotificationService {
        #[must_use]
        pub fn new(_enabled: bool) -> Self {
            Self { _enabled: false }
        }
    }

    impl NotificationPort for DesktopNotificationService {
        fn send(&self, _title: &str, _body: &str, _level: NotificationLevel) {}
    }
}

#[cfg(feature = "notify")]
pub use notify_impl::DesktopNotificationService;
#[cfg(not(feature = "notify"))]
pub use stub_impl::DesktopNotificationService;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockNotificationPort;

    #[test]
    fn test_toast_notifier_enqueues() {
        let manager = Arc::new(Mutex::new(NotificationManager::default()));
        let notifier = ToastNotifier::new(manager.clone());

        notifier.send("Submission Failed", "Try again", NotificationLevel::Destructive);

        let guard = manager.lock();
        let current = guard.current_notification().unwrap();
        assert_eq!(current.title, "Submission Failed");
        assert!(current.is_destructive());
    }

    #[test]
    fn test_composite_fans_out() {
        let first = Arc::new(MockNotificationPort::new());
        let second = Arc::new(MockNotificationPort::new());
        let composite = CompositeNotifier::new()
            .with(first.clone())
            .with(second.clone());

        composite.send("Hi", "There", NotificationLevel::Default);

        assert_eq!(first.sent().len(), 1);
        assert_eq!(second.sent(), first.sent());
    }

    #[test]
    fn test_disabled_desktop_service_spawns_nothing() {
        // An enabled service would need a runtime for `spawn_blocking`.
        assert!(tokio::runtime::Handle::try_current().is_err());

        let service = DesktopNotificationService::new(false);
        service.send("Hi", "There", NotificationLevel::Default);
    }

    #[test]
    fn test_composite_includes_disabled_desktop() {
        let toasts = Arc::new(Mutex::new(NotificationManager::default()));
        let composite = CompositeNotifier::new()
            .with(Arc::new(ToastNotifier::new(toasts.clone())))
            .with(Arc::new(DesktopNotificationService::new(false)));

        composite.send("Saved", "Done", NotificationLevel::Default);

        assert_eq!(toasts.lock().len(), 1);
    }
}

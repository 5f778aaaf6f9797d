//! Infrastructure layer with configuration and adapters for external collaborators.

/// Application configuration.
pub mod config;
/// Toast and desktop notifications.
pub mod notifications;
/// Submission transports.
pub mod submission;

pub use config::{AppConfig, CliArgs, ConfigStore, LogLevel};
pub use notifications::{CompositeNotifier, DesktopNotificationService, ToastNotifier};
pub use submission::{SimulatedSubmission, WebhookSubmission, submission_port_from_config};

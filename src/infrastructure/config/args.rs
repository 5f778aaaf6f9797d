use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "memberform",
    version,
    about = "Galal Academy membership signup form",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Webhook receiving submitted forms as JSON.
    #[arg(long, value_name = "URL", env = "MEMBERFORM_WEBHOOK_URL")]
    pub webhook_url: Option<String>,

    /// Delay of simulated delivery in milliseconds (used without a webhook).
    #[arg(long, value_name = "MS")]
    pub simulated_delay_ms: Option<u64>,

    /// Toast duration in seconds.
    #[arg(long)]
    pub notification_duration: Option<u64>,

    /// Mirror toasts as desktop notifications.
    #[arg(long)]
    pub desktop_notifications: Option<bool>,
}

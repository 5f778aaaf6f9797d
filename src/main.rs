use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use parking_lot::Mutex;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use memberform::application::{NotificationManager, SubmitMembershipUseCase};
use memberform::domain::ports::NotificationPort;
use memberform::infrastructure::{
    AppConfig, CliArgs, CompositeNotifier, ConfigStore, DesktopNotificationService, ToastNotifier,
    submission_port_from_config,
};
use memberform::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let store = ConfigStore::new()?;
    let mut config = store.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    Ok(config)
}

fn create_app() -> Result<App> {
    let config = load_config()?;

    init_logging(&config)?;

    info!(version = memberform::VERSION, "Starting membership form");

    let submission_port = submission_port_from_config(&config.submission)?;
    let submit_use_case = SubmitMembershipUseCase::new(submission_port);

    let toasts = Arc::new(Mutex::new(NotificationManager::new(
        config.notifications.duration(),
    )));
    let notifier: Arc<dyn NotificationPort> = Arc::new(
        CompositeNotifier::new()
            .with(Arc::new(ToastNotifier::new(toasts.clone())))
            .with(Arc::new(DesktopNotificationService::new(
                config.notifications.desktop,
            ))),
    );

    Ok(App::new(submit_use_case, notifier, toasts))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}

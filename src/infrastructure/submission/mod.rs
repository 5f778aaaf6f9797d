//! Submission adapters.

mod simulated;
mod webhook;

use std::sync::Arc;

use tracing::info;

pub use simulated::SimulatedSubmission;
pub use webhook::WebhookSubmission;

use crate::domain::errors::SubmissionError;
use crate::domain::ports::SubmissionPort;
use crate::infrastructure::config::SubmissionConfig;

/// Picks the webhook adapter when a URL is configured, the simulated one otherwise.
///
/// # Errors
/// Returns error if the HTTP client cannot be built.
pub fn submission_port_from_config(
    config: &SubmissionConfig,
) -> Result<Arc<dyn SubmissionPort>, SubmissionError> {
    match config.webhook_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => {
            info!(url, "Delivering submissions to webhook");
            Ok(Arc::new(WebhookSubmission::new(url, config.timeout())?))
        }
        _ => {
            info!(
                delay_ms = config.simulated_delay_ms,
                "No webhook configured, simulating delivery"
            );
            Ok(Arc::new(SimulatedSubmission::new(config.simulated_delay())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_url_falls_back_to_simulation() {
        let config = SubmissionConfig {
            webhook_url: Some("   ".to_string()),
            ..SubmissionConfig::default()
        };
        assert!(submission_port_from_config(&config).is_ok());
    }
}

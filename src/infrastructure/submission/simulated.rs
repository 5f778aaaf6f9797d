//! Submission adapter used while no endpoint is assigned.

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::domain::MembershipForm;
use crate::domain::errors::SubmissionError;
use crate::domain::ports::SubmissionPort;

/// Logs the payload and acknowledges after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedSubmission {
    delay: Duration,
}

impl SimulatedSubmission {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmission {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait]
impl SubmissionPort for SimulatedSubmission {
    async fn submit(&self, form: &MembershipForm) -> Result<(), SubmissionError> {
        let payload = serde_json::to_string(form)?;
        info!(%payload, delay = ?self.delay, "Simulating form delivery");

        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

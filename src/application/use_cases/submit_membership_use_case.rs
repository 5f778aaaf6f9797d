//! Membership submission use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::errors::SubmissionError;
use crate::domain::ports::SubmissionPort;
use crate::domain::{FormField, MembershipForm};

/// Delivers a validated form through the submission port.
#[derive(Clone)]
pub struct SubmitMembershipUseCase {
    submission_port: Arc<dyn SubmissionPort>,
}

impl SubmitMembershipUseCase {
    /// Creates new submission use case.
    #[must_use]
    pub const fn new(submission_port: Arc<dyn SubmissionPort>) -> Self {
        Self { submission_port }
    }

    /// Executes the submission.
    ///
    /// # Errors
    /// Returns error if the collaborator fails or rejects the form.
    pub async fn execute(&self, form: &MembershipForm) -> Result<(), SubmissionError> {
        debug!(
            youtube_name = %form.get(FormField::YoutubeName),
            has_suggestions = !form.get(FormField::Suggestions).is_empty(),
            "Submitting membership application"
        );

        self.submission_port.submit(form).await.map_err(|e| {
            warn!(error = %e, "Membership submission failed");
            e
        })?;

        info!(
            youtube_name = %form.get(FormField::YoutubeName),
            "Membership application submitted"
        );
        Ok(())
    }
}

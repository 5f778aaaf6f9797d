//! Membership form controller.
//!
//! Owns the field values, the validation messages and the in-flight flag.
//! Hosts drive it with [`FormController::set_field`] and either the one-shot
//! [`FormController::submit`] or the split [`FormController::begin_submit`] /
//! [`FormController::finish_submit`] pair when delivery runs on another task.

use tracing::{debug, info, warn};

use crate::application::services::FormValidator;
use crate::application::use_cases::SubmitMembershipUseCase;
use crate::domain::errors::SubmissionError;
use crate::domain::ports::NotificationPort;
use crate::domain::{FieldErrors, FormField, MembershipForm, NotificationLevel};

pub const SUCCESS_TITLE: &str = "Application Submitted Successfully!";
pub const SUCCESS_MESSAGE: &str = "Welcome to Galal Academy! We'll be in touch soon.";
pub const FAILURE_TITLE: &str = "Submission Failed";
pub const FAILURE_MESSAGE: &str = "Please try again later or contact support.";

/// Result of asking the controller to start a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeginSubmit {
    /// A submission is already outstanding; nothing changed.
    InFlight,
    /// Validation failed; errors are now populated.
    Invalid,
    /// Flag raised; deliver this snapshot.
    Ready(MembershipForm),
}

/// How a submit attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Ignored; another submission was outstanding.
    InFlight,
    /// Aborted with field errors shown.
    Invalid,
    /// Delivered; the form was reset.
    Submitted,
    /// Delivery failed; the form was kept.
    Failed,
}

/// Owns the form values, their errors and the in-flight flag.
#[derive(Debug, Default)]
pub struct FormController {
    form: MembershipForm,
    errors: FieldErrors,
    submitting: bool,
}

impl FormController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn form(&self) -> &MembershipForm {
        &self.form
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        self.form.get(field)
    }

    #[must_use]
    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Returns whether a submission is outstanding. Inputs are disabled meanwhile.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Updates a field and drops its stale error without re-validating.
    ///
    /// Returns `false` when the edit was refused because inputs are disabled.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> bool {
        if self.submitting {
            debug!(%field, "Ignoring edit while submission is in flight");
            return false;
        }

        self.form.set(field, value);
        if self.errors.clear(field) {
            debug!(%field, "Cleared field error on edit");
        }
        true
    }

    /// Recomputes every field error from scratch.
    pub fn validate(&mut self) -> bool {
        self.errors = FormValidator::validate(&self.form);
        if !self.errors.is_empty() {
            debug!(failing = self.errors.len(), "Form validation failed");
        }
        self.errors.is_empty()
    }

    /// Validates and, when valid, raises the in-flight flag.
    pub fn begin_submit(&mut self) -> BeginSubmit {
        if self.submitting {
            debug!("Submit ignored, submission already in flight");
            return BeginSubmit::InFlight;
        }

        if !self.validate() {
            return BeginSubmit::Invalid;
        }

        self.submitting = true;
        BeginSubmit::Ready(self.form.clone())
    }

    /// Applies the delivery result: notifies, resets on success and lowers the flag.
    pub fn finish_submit(
        &mut self,
        result: &Result<(), SubmissionError>,
        notifier: &dyn NotificationPort,
    ) -> SubmitOutcome {
        if !self.submitting {
            warn!("Submission result arrived with no submission in flight");
        }

        let outcome = match result {
            Ok(()) => {
                info!("Submission succeeded, resetting form");
                notifier.send(SUCCESS_TITLE, SUCCESS_MESSAGE, NotificationLevel::Default);
                self.form.clear();
                SubmitOutcome::Submitted
            }
            Err(e) => {
                warn!(error = %e, "Submission failed, keeping form for retry");
                notifier.send(FAILURE_TITLE, FAILURE_MESSAGE, NotificationLevel::Destructive);
                SubmitOutcome::Failed
            }
        };

        self.submitting = false;
        outcome
    }

    /// Runs a whole submission: validate, deliver, then report.
    pub async fn submit(
        &mut self,
        use_case: &SubmitMembershipUseCase,
        notifier: &dyn NotificationPort,
    ) -> SubmitOutcome {
        let form = match self.begin_submit() {
            BeginSubmit::Ready(form) => form,
            BeginSubmit::InFlight => return SubmitOutcome::InFlight,
            BeginSubmit::Invalid => return SubmitOutcome::Invalid,
        };

        let result = use_case.execute(&form).await;
        self.finish_submit(&result, notifier)
    }
}

//! Submission port definition.

use async_trait::async_trait;

use crate::domain::entities::MembershipForm;
use crate::domain::errors::SubmissionError;

/// Port delivering a completed form to whoever processes applications.
#[async_trait]
pub trait SubmissionPort: Send + Sync {
    /// Delivers the form and waits for acknowledgment.
    async fn submit(&self, form: &MembershipForm) -> Result<(), SubmissionError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    /// Mock submission port for testing.
    pub struct MockSubmissionPort {
        should_succeed: Arc<AtomicBool>,
        received: Arc<Mutex<Vec<MembershipForm>>>,
    }

    impl MockSubmissionPort {
        /// Creates new mock.
        pub fn new(should_succeed: bool) -> Self {
            Self {
                should_succeed: Arc::new(AtomicBool::new(should_succeed)),
                received: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Sets success behavior.
        pub fn set_should_succeed(&self, value: bool) {
            self.should_succeed.store(value, Ordering::SeqCst);
        }

        /// Returns every form delivered so far.
        pub fn received(&self) -> Vec<MembershipForm> {
            self.received.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SubmissionPort for MockSubmissionPort {
        async fn submit(&self, form: &MembershipForm) -> Result<(), SubmissionError> {
            self.received.lock().unwrap().push(form.clone());
            if self.should_succeed.load(Ordering::SeqCst) {
                Ok(())
            } else {
                Err(SubmissionError::network("mock failure"))
            }
        }
    }
}

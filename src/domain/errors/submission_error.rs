//! Submission error types.

use thiserror::Error;

/// Submission error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum SubmissionError {
    #[error("network error during submission: {message}")]
    NetworkError { message: String },

    #[error("submission rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("failed to encode submission: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("unexpected submission error: {message}")]
    Unexpected { message: String },
}

impl SubmissionError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError {
            message: message.into(),
        }
    }

    /// Creates rejection error.
    #[must_use]
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::NetworkError { .. })
    }
}

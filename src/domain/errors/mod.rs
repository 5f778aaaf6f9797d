//! Domain error types.

mod submission_error;

pub use submission_error::SubmissionError;

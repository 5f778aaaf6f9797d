mod notification_port;
mod submission_port;

pub use notification_port::NotificationPort;
pub use submission_port::SubmissionPort;

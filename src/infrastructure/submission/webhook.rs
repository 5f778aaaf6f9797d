//! HTTP webhook submission adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::domain::MembershipForm;
use crate::domain::errors::SubmissionError;
use crate::domain::ports::SubmissionPort;

const USER_AGENT: &str = concat!("memberform/", env!("CARGO_PKG_VERSION"));

/// POSTs the form as JSON to a webhook URL.
pub struct WebhookSubmission {
    client: Client,
    url: String,
}

impl WebhookSubmission {
    /// Creates a webhook client.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SubmissionError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                SubmissionError::unexpected(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl SubmissionPort for WebhookSubmission {
    async fn submit(&self, form: &MembershipForm) -> Result<(), SubmissionError> {
        debug!(url = %self.url, "Posting form to webhook");

        let response = self
            .client
            .post(&self.url)
            .json(form)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach webhook");
                if e.is_timeout() {
                    SubmissionError::network("request timed out")
                } else if e.is_connect() {
                    SubmissionError::network("failed to connect to webhook")
                } else {
                    SubmissionError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "Webhook accepted form");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string()
        } else {
            body
        };
        Err(SubmissionError::rejected(status.as_u16(), message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FormField;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned response and returns the raw request it received.
    async fn serve_once(response: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/webhook", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0_u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
                if request_complete(&request) {
                    break;
                }
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&request).into_owned()
        });

        (url, handle)
    }

    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some((head, body)) = text.split_once("\r\n\r\n") else {
            return false;
        };
        let length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        body.len() >= length
    }

    fn form() -> MembershipForm {
        MembershipForm::new()
            .with(FormField::FullName, "Ada Lovelace")
            .with(FormField::YoutubeName, "ada-codes")
            .with(FormField::Gmail, "ada@gmail.com")
    }

    #[tokio::test]
    async fn test_posts_json_payload() {
        let (url, server) =
            serve_once("HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n").await;
        let adapter = WebhookSubmission::new(url, Duration::from_secs(5)).unwrap();

        let result = adapter.submit(&form()).await;
        assert!(result.is_ok());

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /webhook"));
        let (_, body) = request.split_once("\r\n\r\n").unwrap();
        let payload: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(payload["fullName"], "Ada Lovelace");
        assert_eq!(payload["youtubeName"], "ada-codes");
        assert_eq!(payload["gmail"], "ada@gmail.com");
        assert_eq!(payload["suggestions"], "");
    }

    #[tokio::test]
    async fn test_non_success_status_is_rejection() {
        let (url, server) = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 4\r\nConnection: close\r\n\r\nnope",
        )
        .await;
        let adapter = WebhookSubmission::new(url, Duration::from_secs(5)).unwrap();

        let result = adapter.submit(&form()).await;
        server.await.unwrap();

        match result {
            Err(SubmissionError::Rejected { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "nope");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_webhook_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/webhook", listener.local_addr().unwrap());
        drop(listener);

        let adapter = WebhookSubmission::new(url, Duration::from_secs(5)).unwrap();
        let result = adapter.submit(&form()).await;

        assert!(matches!(result, Err(SubmissionError::NetworkError { .. })));
    }
}

//! Contact form submission.
//!
//! The form posts name, email, and message as multipart form data to the
//! configured endpoint, asking for a JSON reply. The endpoint is an opaque
//! collaborator; only three outcomes surface to the user: sent, rejected by
//! the server, or the request never completed.

use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::multipart::Form;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::config::ContactConfig;
use crate::{Error, Result};

/// A filled-in contact form
#[derive(Debug, Clone, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Server-visible result of a completed submission. A request that never
/// completed surfaces as `Err` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx reply
    Sent,
    /// Server answered with a non-success status
    Rejected(StatusCode),
}

/// User-facing notice for a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitNotice {
    Sent,
    Rejected,
    NetworkError,
}

impl SubmitNotice {
    pub fn from_result(result: &Result<SubmitOutcome>) -> Self {
        match result {
            Ok(SubmitOutcome::Sent) => Self::Sent,
            Ok(SubmitOutcome::Rejected(_)) => Self::Rejected,
            Err(_) => Self::NetworkError,
        }
    }

    /// The literal text shown in the notification popup
    pub fn message(&self) -> &'static str {
        match self {
            Self::Sent => "Message sent successfully! I will get back to you soon.",
            Self::Rejected => "Oops! Something went wrong. Please try again.",
            Self::NetworkError => "Network error. Please try again later.",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// HTTP client for the contact endpoint
pub struct ContactClient {
    client: Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(config: &ContactConfig) -> Result<Self> {
        let endpoint = config
            .endpoint
            .clone()
            .ok_or_else(|| Error::Config("contact endpoint is not configured".into()))?;
        Url::parse(&endpoint)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(Error::Http)?;

        Ok(Self { client, endpoint })
    }

    /// Post the form. `Ok` means the server answered; transport failures
    /// come back as `Err` and map to the network-error notice.
    pub async fn submit(&self, message: &ContactMessage) -> Result<SubmitOutcome> {
        let form = Form::new()
            .text("name", message.name.clone())
            .text("email", message.email.clone())
            .text("message", message.message.clone());

        tracing::info!("Submitting contact form to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(SubmitOutcome::Sent)
        } else {
            tracing::warn!("Contact endpoint rejected submission: HTTP {}", status);
            Ok(SubmitOutcome::Rejected(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_mapping() {
        assert_eq!(
            SubmitNotice::from_result(&Ok(SubmitOutcome::Sent)),
            SubmitNotice::Sent
        );
        assert_eq!(
            SubmitNotice::from_result(&Ok(SubmitOutcome::Rejected(
                StatusCode::UNPROCESSABLE_ENTITY
            ))),
            SubmitNotice::Rejected
        );
        assert_eq!(
            SubmitNotice::from_result(&Err(Error::Other("connection refused".into()))),
            SubmitNotice::NetworkError
        );
    }

    #[test]
    fn test_notice_messages_are_distinct() {
        let texts = [
            SubmitNotice::Sent.message(),
            SubmitNotice::Rejected.message(),
            SubmitNotice::NetworkError.message(),
        ];
        assert_ne!(texts[0], texts[1]);
        assert_ne!(texts[1], texts[2]);
        assert_ne!(texts[0], texts[2]);
        assert!(SubmitNotice::Sent.is_success());
        assert!(!SubmitNotice::Rejected.is_success());
    }

    #[test]
    fn test_client_requires_endpoint() {
        let config = ContactConfig::default();
        assert!(ContactClient::new(&config).is_err());
    }

    #[test]
    fn test_client_rejects_invalid_endpoint() {
        let config = ContactConfig {
            endpoint: Some("not a url".into()),
            ..Default::default()
        };
        assert!(ContactClient::new(&config).is_err());
    }
}

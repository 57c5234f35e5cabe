//! Client for the downstream feedback API.

use async_trait::async_trait;
use axum::http::StatusCode;
use serde::Serialize;

/// Structured feedback record accepted by the feedback API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackMessage {
    pub is_page_useful: bool,
    pub is_general_feedback: bool,
    pub ons_url: String,
    pub feedback: String,
    pub name: String,
    pub email_address: String,
}

/// Errors from a feedback submission, classified for status propagation.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The API could not be reached at all.
    #[error("feedback API unreachable: {0}")]
    Unreachable(String),

    /// The API answered with a non-success status (400 bad data, 401
    /// unauthorized, 500 upstream-internal).
    #[error("feedback API responded with status {0}")]
    Status(u16),
}

impl BackendError {
    /// Status the controller responds with when this submission fails: the
    /// upstream code where one exists, 502 for transport failures.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unreachable(_) => StatusCode::BAD_GATEWAY,
            Self::Status(code) => {
                StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

/// The external service that durably records submitted feedback.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackBackend: Send + Sync {
    /// Submits one validated, normalized feedback record.
    ///
    /// A failure is terminal for the request; the controller never retries.
    async fn post_feedback(&self, message: &FeedbackMessage) -> Result<(), BackendError>;

    /// Whether the API is currently reachable, for the health endpoint.
    async fn health_check(&self) -> bool;
}

/// HTTP implementation posting to the feedback API behind the API router.
pub struct HttpFeedbackBackend {
    client: reqwest::Client,
    base_url: String,
    service_auth_token: String,
}

impl HttpFeedbackBackend {
    pub fn new(base_url: String, service_auth_token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            service_auth_token,
        }
    }
}

#[async_trait]
impl FeedbackBackend for HttpFeedbackBackend {
    async fn post_feedback(&self, message: &FeedbackMessage) -> Result<(), BackendError> {
        let response = self
            .client
            .post(format!("{}/feedback", self.base_url))
            .bearer_auth(&self.service_auth_token)
            .json(message)
            .send()
            .await
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }

        Ok(())
    }

    async fn health_check(&self) -> bool {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }
}

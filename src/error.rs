use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::clients::{BackendError, RenderError};

/// Request-terminal failures of the submission path.
///
/// Validation outcomes are not errors; they re-render the form with a 200.
/// Everything here maps straight to a status code, with rendering of the
/// user-facing error page left to the upstream router.
#[derive(Debug)]
pub enum AppError {
    /// Malformed form body or query encoding. Transport-level, never shown
    /// as field errors.
    FormParse(String),
    /// The parsed fields could not be decoded into a form.
    FormDecode(String),
    /// The rendering collaborator failed.
    Render(RenderError),
    /// The feedback API rejected or never received the submission.
    Backend(BackendError),
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

impl From<BackendError> for AppError {
    fn from(e: BackendError) -> Self {
        Self::Backend(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::FormParse(reason) => {
                tracing::error!(reason = %reason, "unable to parse request form");
                StatusCode::BAD_REQUEST
            }
            AppError::FormDecode(reason) => {
                tracing::error!(reason = %reason, "unable to decode request form");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Render(e) => {
                tracing::error!(error = %e, "failed to build page");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Backend(e) => {
                let status = e.status_code();
                tracing::error!(error = %e, status = status.as_u16(), "feedback submission failed");
                status
            }
        };

        status.into_response()
    }
}

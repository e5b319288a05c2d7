//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use relay_core::{CoreError, ErrorBody, INTERNAL_ERROR_MESSAGE, MISSING_CREDENTIAL_MESSAGE};

use crate::backend::BackendError;

/// Errors that can occur while relaying a result request.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RelayError {
    /// The request carried no `Authorization` header, or an empty one.
    #[error("authorization credential missing")]
    MissingCredential,

    /// The path parameter could not be extracted, e.g. invalid UTF-8.
    #[error("invalid job id: {0}")]
    InvalidPath(String),

    /// The job identifier in the path is unusable.
    #[error(transparent)]
    InvalidJobId(CoreError),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {message}")]
    Backend { status: StatusCode, message: String },

    /// The backend could not be reached or its reply could not be read.
    #[error("backend transport failed: {0}")]
    Transport(#[from] BackendError),

    /// The backend reported success but the body is not JSON.
    #[error("backend success body is not JSON: {0}")]
    MalformedReply(CoreError),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RelayError::MissingCredential => {
                (StatusCode::UNAUTHORIZED, MISSING_CREDENTIAL_MESSAGE.to_owned())
            }
            RelayError::InvalidPath(reason) => {
                (StatusCode::BAD_REQUEST, format!("invalid job id: {reason}"))
            }
            RelayError::InvalidJobId(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            RelayError::Backend { status, message } => (status, message),
            err @ (RelayError::Transport(_) | RelayError::MalformedReply(_)) => {
                tracing::error!(error = %err, "failed to fetch analysis result");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE.to_owned())
            }
        };
        (status, Json(ErrorBody::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(resp: Response) -> ErrorBody {
        let bytes = match axum::body::to_bytes(resp.into_body(), 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        match serde_json::from_slice(&bytes) {
            Ok(b) => b,
            Err(e) => panic!("invalid error body: {e}"),
        }
    }

    #[tokio::test]
    async fn missing_credential_maps_to_401() {
        let resp = RelayError::MissingCredential.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_of(resp).await, ErrorBody::new("Authorization token required"));
    }

    #[tokio::test]
    async fn backend_error_mirrors_status_and_message() {
        let err = RelayError::Backend {
            status: StatusCode::CONFLICT,
            message: "job still running".to_owned(),
        };
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(body_of(resp).await, ErrorBody::new("job still running"));
    }

    #[tokio::test]
    async fn transport_error_hides_details_behind_500() {
        let err = RelayError::Transport(BackendError::Request("connection refused".to_owned()));
        let resp = err.into_response();
        assert_eq!(
            resp.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "transport errors must map to 500"
        );
        let body = body_of(resp).await;
        assert_eq!(body, ErrorBody::new("Internal server error"));
        assert!(!body.error.contains("refused"), "cause must not leak to the caller");
    }

    #[tokio::test]
    async fn invalid_path_maps_to_json_400() {
        let resp = RelayError::InvalidPath("Invalid UTF-8 in `job_id`".to_owned()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(resp).await, ErrorBody::new("invalid job id: Invalid UTF-8 in `job_id`"));
    }

    #[test]
    fn relay_error_display_includes_cause() {
        let err = RelayError::Transport(BackendError::Body("unexpected eof".to_owned()));
        assert!(err.to_string().contains("unexpected eof"), "Display must include the cause");
    }
}

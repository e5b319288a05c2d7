//! Backend analysis service abstraction.
//!
//! The route talks to the backend only through [`ResultBackend`], so the
//! outbound transport can be swapped for a recording fake in tests.

use async_trait::async_trait;
use axum::{body::Bytes, http::StatusCode};
use relay_core::JobId;

use crate::credential::Credential;

/// A backend reply as received, before any normalization.
#[derive(Debug, Clone)]
pub struct BackendReply {
    /// Status code chosen by the backend.
    pub status: StatusCode,
    /// Raw response body.
    pub body: Bytes,
}

/// Errors raised while talking to the backend.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BackendError {
    /// The outbound URL could not be turned into a request URI.
    #[error("invalid backend URI {uri}: {reason}")]
    InvalidUri { uri: String, reason: String },

    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Request(String),

    /// The response body could not be read.
    #[error("read response body: {0}")]
    Body(String),
}

/// Source of analysis job results.
///
/// Implementations must be `Send + Sync` to be shared across request tasks.
#[async_trait]
pub trait ResultBackend: Send + Sync {
    /// Fetch the result of `job_id`, presenting `credential` to the backend.
    ///
    /// Any status the backend answers with is a successful fetch; only
    /// failures to obtain a reply at all are errors.
    ///
    /// # Errors
    /// Returns [`BackendError`] if no complete reply could be obtained.
    async fn fetch_result(
        &self,
        job_id: &JobId,
        credential: &Credential,
    ) -> Result<BackendReply, BackendError>;
}

//! Axum route handlers for the result relay.

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use relay_core::{backend_error_message, try_parse_json, JobId};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{backend::ResultBackend, credential::Credential, error::RelayError};

// ── Shared state ─────────────────────────────────────────────────────────────

type Backend = Arc<dyn ResultBackend>;

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router around the given backend.
pub fn create_router(backend: Backend) -> Router {
    Router::new()
        .route("/analysis/jobs/{job_id}/result", get(job_result))
        .route("/health", get(health))
        .with_state(backend)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /analysis/jobs/{job_id}/result` — relay a job result from the backend.
///
/// A 2xx backend reply is returned as 200 with the backend's JSON body.
/// Any other backend status is mirrored with a `{ "error": ... }` body.
///
/// # Errors
/// Returns [`RelayError::MissingCredential`] if the request has no
/// credential, checked before the path. Returns [`RelayError::InvalidPath`]
/// or [`RelayError::InvalidJobId`] if the job id is unusable,
/// [`RelayError::Backend`] for non-success backend replies, and
/// [`RelayError::Transport`] or [`RelayError::MalformedReply`] when no
/// usable reply was obtained.
pub async fn job_result(
    State(backend): State<Backend>,
    credential: Credential,
    job_id: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, RelayError> {
    let Path(job_id) = job_id.map_err(|e| RelayError::InvalidPath(e.body_text()))?;
    let job_id = JobId::new(job_id).map_err(RelayError::InvalidJobId)?;
    let reply = backend.fetch_result(&job_id, &credential).await?;

    if !reply.status.is_success() {
        let message = backend_error_message(&reply.body);
        tracing::debug!(job_id = %job_id, status = %reply.status, "backend rejected result request");
        return Err(RelayError::Backend { status: reply.status, message });
    }

    let payload = try_parse_json(&reply.body).map_err(RelayError::MalformedReply)?;
    Ok(Json(payload))
}

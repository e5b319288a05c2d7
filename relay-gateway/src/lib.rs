//! HTTP relay for analysis job results.
//!
//! Exposes `GET /analysis/jobs/{job_id}/result`, which forwards the
//! caller's `Authorization` credential to the backend analysis service and
//! normalizes the reply into a JSON payload or an `{ "error": ... }` body.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod backend;
pub mod cli;
pub mod client;
pub mod credential;
pub mod error;
pub mod routes;

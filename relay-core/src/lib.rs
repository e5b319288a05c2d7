//! Core types for the analysis result relay.
//!
//! Defines the transport-independent pieces of the result proxy: job
//! identifiers, backend location and result-URL construction, and the
//! policy for turning backend bodies into caller-facing JSON.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod body;
pub mod config;
pub mod error;
pub mod id;

pub use body::{
    backend_error_message, parse_or_empty, try_parse_json, ErrorBody, FALLBACK_ERROR_MESSAGE,
    INTERNAL_ERROR_MESSAGE, MISSING_CREDENTIAL_MESSAGE,
};
pub use config::{BackendUrl, RelayConfig, DEFAULT_BACKEND_URL, DEFAULT_LISTEN_ADDR};
pub use error::CoreError;
pub use id::JobId;

//! The caller's `Authorization` credential.

use std::fmt;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderValue},
};

use crate::error::RelayError;

/// Raw `Authorization` header value, forwarded to the backend byte-for-byte.
///
/// Rejects with [`RelayError::MissingCredential`] when extracted from a
/// request that has no `Authorization` header or an empty one.
#[derive(Clone)]
pub struct Credential(HeaderValue);

impl Credential {
    /// Wrap a header value, returning `None` if it is empty.
    #[must_use]
    pub fn from_header(value: &HeaderValue) -> Option<Self> {
        if value.is_empty() {
            return None;
        }
        let mut value = value.clone();
        value.set_sensitive(true);
        Some(Self(value))
    }

    /// The header value to forward.
    #[must_use]
    pub fn header_value(&self) -> &HeaderValue {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

impl<S> FromRequestParts<S> for Credential
where
    S: Send + Sync,
{
    type Rejection = RelayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(AUTHORIZATION)
            .and_then(Self::from_header)
            .ok_or(RelayError::MissingCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(req: Request<()>) -> Result<Credential, RelayError> {
        let (mut parts, ()) = req.into_parts();
        Credential::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn credential_is_taken_verbatim() {
        let req = match Request::builder().header("authorization", "Bearer xyz").body(()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        let cred = match extract(req).await {
            Ok(c) => c,
            Err(e) => panic!("extraction failed: {e}"),
        };
        assert_eq!(cred.header_value(), "Bearer xyz");
        assert!(cred.header_value().is_sensitive(), "forwarded value must be marked sensitive");
    }

    #[tokio::test]
    async fn missing_or_empty_header_is_rejected() {
        let bare = match Request::builder().body(()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        assert!(matches!(extract(bare).await, Err(RelayError::MissingCredential)));

        let empty = match Request::builder().header("authorization", "").body(()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        };
        assert!(matches!(extract(empty).await, Err(RelayError::MissingCredential)));
    }

    #[test]
    fn debug_output_redacts_token() {
        let cred = match Credential::from_header(&HeaderValue::from_static("Bearer secret")) {
            Some(c) => c,
            None => panic!("non-empty header rejected"),
        };
        let shown = format!("{cred:?}");
        assert!(!shown.contains("secret"), "Debug must not print the token: {shown}");
    }
}

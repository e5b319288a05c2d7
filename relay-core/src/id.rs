use std::fmt;

use crate::CoreError;

/// Identifies an analysis job whose result is being fetched.
///
/// The value is opaque to the relay: it is never interpreted, only carried
/// from the inbound path to the outbound one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct JobId(String);

impl JobId {
    /// Creates a `JobId` from any string-like value.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidJobId`] if the value is empty, contains a
    /// control character, or is a `.`/`..` dot segment. None of these can be
    /// carried as a single outbound path segment.
    pub fn new(id: impl Into<String>) -> Result<Self, CoreError> {
        let id = id.into();
        if id.is_empty() {
            return Err(CoreError::InvalidJobId { reason: "must not be empty".to_owned() });
        }
        if id.chars().any(char::is_control) {
            return Err(CoreError::InvalidJobId {
                reason: "must not contain control characters".to_owned(),
            });
        }
        if id == "." || id == ".." {
            return Err(CoreError::InvalidJobId {
                reason: format!("'{id}' is a dot segment"),
            });
        }
        Ok(Self(id))
    }

    /// Returns the identifier as received.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

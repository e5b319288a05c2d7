//! Relay configuration: backend location and listen address.
//!
//! Values are validated once at startup and then handed to the gateway
//! explicitly, so request handling never consults process environment.

use std::{fmt, net::SocketAddr};

use url::Url;

use crate::{CoreError, JobId};

/// Backend base URL used when none is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Listen address used when none is configured.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Validated base URL of the backend analysis service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendUrl(Url);

impl BackendUrl {
    /// Parse and validate a backend base URL.
    ///
    /// The base may carry a path prefix (`http://host/api`), which is kept in
    /// front of the result path. Only plain `http` is accepted.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidBackendUrl`] if the value does not parse,
    /// uses a scheme other than `http`, or carries a query or fragment.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let invalid = |reason: String| CoreError::InvalidBackendUrl { url: raw.to_owned(), reason };

        let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
        if url.scheme() != "http" {
            return Err(invalid(format!("unsupported scheme '{}'; expected 'http'", url.scheme())));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed".to_owned()));
        }
        Ok(Self(url))
    }

    /// Resolve an optional setting, falling back to [`DEFAULT_BACKEND_URL`]
    /// when it is unset or blank.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidBackendUrl`] if a non-blank value is invalid.
    pub fn from_setting(setting: Option<&str>) -> Result<Self, CoreError> {
        match setting.map(str::trim) {
            Some(raw) if !raw.is_empty() => Self::parse(raw),
            _ => Self::parse(DEFAULT_BACKEND_URL),
        }
    }

    /// Build `<base>/analysis/jobs/<job_id>/result`.
    ///
    /// The job id is percent-encoded as exactly one path segment.
    #[must_use]
    pub fn result_url(&self, job_id: &JobId) -> Url {
        let mut url = self.0.clone();
        // `http` URLs always have a hierarchical path, so this cannot fail.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["analysis", "jobs", job_id.as_str(), "result"]);
        }
        url
    }
}

impl Default for BackendUrl {
    #[allow(clippy::expect_used, reason = "the default is a valid literal")]
    fn default() -> Self {
        Self(Url::parse(DEFAULT_BACKEND_URL).expect("default backend url is valid"))
    }
}

impl fmt::Display for BackendUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Runtime configuration for the relay service.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct RelayConfig {
    /// Base URL of the backend analysis service.
    pub backend_url: BackendUrl,

    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,
}

impl RelayConfig {
    /// Create a config from already-validated parts.
    #[must_use]
    pub fn new(backend_url: BackendUrl, listen_addr: SocketAddr) -> Self {
        Self { backend_url, listen_addr }
    }

    /// Build a config from raw settings, applying defaults for unset values.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidBackendUrl`] or
    /// [`CoreError::InvalidListenAddr`] if a provided value is invalid.
    pub fn from_settings(backend_url: Option<&str>, listen_addr: Option<&str>) -> Result<Self, CoreError> {
        let backend_url = BackendUrl::from_setting(backend_url)?;
        let raw_addr = listen_addr.map(str::trim).filter(|a| !a.is_empty()).unwrap_or(DEFAULT_LISTEN_ADDR);
        let listen_addr = raw_addr.parse().map_err(|e: std::net::AddrParseError| {
            CoreError::InvalidListenAddr { addr: raw_addr.to_owned(), reason: e.to_string() }
        })?;
        Ok(Self::new(backend_url, listen_addr))
    }
}

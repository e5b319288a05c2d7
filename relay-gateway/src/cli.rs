//! Command-line and environment configuration for the relay binary.

use clap::Parser;
use relay_core::{CoreError, RelayConfig};

/// Relay analysis job results from the backend service.
#[derive(Debug, Parser)]
#[command(name = "analysis-relay", version)]
pub struct Cli {
    /// Base URL of the backend analysis service [default: http://localhost:8080]
    #[arg(long, env = "BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Socket address to listen on [default: 127.0.0.1:3000]
    #[arg(long, env = "RELAY_LISTEN_ADDR")]
    pub listen: Option<String>,
}

impl Cli {
    /// Validate the parsed arguments into a [`RelayConfig`].
    ///
    /// # Errors
    /// Returns [`CoreError`] if the backend URL or listen address is invalid.
    pub fn into_config(self) -> Result<RelayConfig, CoreError> {
        RelayConfig::from_settings(self.backend_url.as_deref(), self.listen.as_deref())
    }
}

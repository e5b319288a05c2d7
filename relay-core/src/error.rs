/// Errors produced by the `relay-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A job identifier was empty or otherwise unusable.
    #[error("invalid job id: {reason}")]
    InvalidJobId { reason: String },

    /// The configured backend base URL could not be used.
    #[error("invalid backend url '{url}': {reason}")]
    InvalidBackendUrl { url: String, reason: String },

    /// The configured listen address is not a valid socket address.
    #[error("invalid listen address '{addr}': {reason}")]
    InvalidListenAddr { addr: String, reason: String },

    /// A body that was expected to hold JSON did not parse.
    #[error("malformed JSON body: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

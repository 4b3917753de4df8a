use thiserror::Error;

/// Errors produced by the upstream platform clients.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network or TLS failure, or a non-2xx upstream status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body did not match the platform's expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL could not be parsed.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

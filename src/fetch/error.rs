use thiserror::Error;

/// Failure to obtain or decode one page of coins.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// The configured base URL does not form a valid endpoint.
    #[error("Invalid endpoint '{url}': {message}")]
    InvalidEndpoint { url: String, message: String },

    /// Request could not be sent or the body could not be read.
    #[error("Connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// Source answered with a non-success status.
    #[error("Source returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not a coin page.
    #[error("Malformed page payload: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Short machine-readable kind for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Client { .. } => "client",
            FetchError::InvalidEndpoint { .. } => "invalid_endpoint",
            FetchError::Connection { .. } => "connection",
            FetchError::Status { .. } => "status",
            FetchError::Malformed { .. } => "malformed",
        }
    }
}

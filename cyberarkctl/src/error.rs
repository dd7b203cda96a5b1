//! Error types for the HTTP client and the dispatcher

use cyberark_core::ConfigError;
use thiserror::Error;

/// Failures from [`crate::client::ApiClient`] requests.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed
    #[error("failed to create HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request could not be assembled (bad URL, invalid header value)
    #[error("failed to create request for {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The request was sent but no response arrived (network, timeout)
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response arrived but its body could not be read
    #[error("failed to read response from {url}: {source}")]
    ReadBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The payload could not be encoded as JSON
    #[error("failed to marshal payload: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The response body is not the JSON shape the caller asked for
    #[error("failed to parse response JSON: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// The server answered outside the 2xx range
    #[error("API error (status {status}): {body}")]
    Status { status: u16, body: String },
}

impl ApiError {
    /// HTTP status code, when the server answered with a non-2xx status.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failures while routing a command line to a workflow.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Global flags could not be parsed
    #[error("{0}")]
    Args(#[from] clap::Error),

    #[error("workflow name required")]
    MissingWorkflow,

    #[error("failed to load config: {0}")]
    Config(#[from] ConfigError),

    #[error("unknown workflow '{0}'")]
    UnknownWorkflow(String),

    /// The workflow ran and returned an error
    #[error("workflow '{name}' failed: {cause:#}")]
    Workflow { name: String, cause: anyhow::Error },

    /// Writing usage or results to the output stream failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl DispatchError {
    /// Whether the global usage text should follow the error message.
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            DispatchError::MissingWorkflow | DispatchError::UnknownWorkflow(_)
        )
    }
}

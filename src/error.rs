use thiserror::Error;
use tracing::error;

use crate::graphql::MutationRoot;

#[derive(Debug, Error, PartialEq)]
pub enum CustomerError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The serialized top-level `errors` of the response
    #[error("{0}")]
    Protocol(String),

    /// The serialized `customerUserErrors` or `userErrors` of the payload
    #[error("{0}")]
    UserErrors(String),

    #[error("The {0} mutation failed due to an unknown error.")]
    Unknown(MutationRoot),

    #[error("Could not find `{0}` in the response")]
    MissingField(String),

    #[error("Provided data was malformed")]
    MalformedData,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    #[error("Failed to connect to the storefront: {0}")]
    Connection(String),

    #[error("The request to the storefront timed out")]
    Timeout,

    #[error("The storefront responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("The storefront response could not be parsed: {0}")]
    MalformedResponse(String),

    #[error("Failed to build the request: {0}")]
    Client(String),
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to attach logs to tracing")]
    Logger(#[from] tracing_log::log::SetLoggerError),

    #[error("failed to set global subscriber")]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

impl CustomerError {
    /// Whether the storefront rejected the input, rather than the request failing
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::UserErrors(_))
    }
}

impl From<serde_json::Error> for CustomerError {
    fn from(e: serde_json::Error) -> CustomerError {
        use serde_json::error::Category::*;
        error!(err = ?e, "JSON Serde error occurred");

        match e.classify() {
            Syntax | Data | Eof => CustomerError::MalformedData,
            Io => CustomerError::Transport(TransportError::MalformedResponse(e.to_string())),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> TransportError {
        error!(
            err = ?e,
            url = ?e.url().map(|u| u.as_str()),
            status = ?e.status(),
            "HTTP transport error occurred"
        );

        if e.is_timeout() {
            TransportError::Timeout
        } else if e.is_connect() {
            TransportError::Connection(e.to_string())
        } else if e.is_decode() || e.is_body() {
            TransportError::MalformedResponse(e.to_string())
        } else if let Some(status) = e.status() {
            TransportError::Status {
                status: status.as_u16(),
                body: String::new(),
            }
        } else {
            TransportError::Client(e.to_string())
        }
    }
}

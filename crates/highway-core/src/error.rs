//! Shared error type across highway crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed config.
    BadRequest,
    /// No supported response format could be negotiated.
    NotAcceptable,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotAcceptable => "NOT_ACCEPTABLE",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, HighwayError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum HighwayError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not acceptable: {0}")]
    NotAcceptable(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl HighwayError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            HighwayError::BadRequest(_) => ClientCode::BadRequest,
            HighwayError::NotAcceptable(_) => ClientCode::NotAcceptable,
            HighwayError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            HighwayError::Internal(_) => ClientCode::Internal,
        }
    }
}

//! Shared error type across gauge exporter crates.

use bytes::Bytes;
use thiserror::Error;

/// Boxed error produced by an HTTP capability.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Stable error kinds (for logs and exit codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed metric name or labels.
    Validation,
    /// Connection-level failure reported by the HTTP capability.
    Transport,
    /// The collector answered with a status other than 200.
    BadResponse,
    /// Request body could not be serialized.
    Encode,
    /// Configuration could not be read or parsed.
    Config,
    /// Unsupported configuration version.
    UnsupportedVersion,
}

impl ErrorKind {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "VALIDATION",
            ErrorKind::Transport => "TRANSPORT",
            ErrorKind::BadResponse => "BAD_RESPONSE",
            ErrorKind::Encode => "ENCODE",
            ErrorKind::Config => "CONFIG",
            ErrorKind::UnsupportedVersion => "UNSUPPORTED_VERSION",
        }
    }
}

/// Failure raised by an HTTP capability before a response was received
/// (DNS, TCP, TLS, timeout).
#[derive(Debug, Error)]
#[error("transport failed: {source}")]
pub struct TransportError {
    source: BoxError,
}

impl TransportError {
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self { source: source.into() }
    }

    /// Unwrap the underlying client error.
    pub fn into_inner(self) -> BoxError {
        self.source
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type used by core and client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("validation: {0}")]
    Validation(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("bad response: status {}", .0.status())]
    BadResponse(Box<http::Response<Bytes>>),
    #[error("encode failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
}

impl Error {
    /// Map to a stable kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::Transport(_) => ErrorKind::Transport,
            Error::BadResponse(_) => ErrorKind::BadResponse,
            Error::Encode(_) => ErrorKind::Encode,
            Error::Config(_) => ErrorKind::Config,
            Error::UnsupportedVersion => ErrorKind::UnsupportedVersion,
        }
    }

    /// The full collector response, when the failure is a bad status.
    pub fn response(&self) -> Option<&http::Response<Bytes>> {
        match self {
            Error::BadResponse(resp) => Some(&**resp),
            _ => None,
        }
    }
}

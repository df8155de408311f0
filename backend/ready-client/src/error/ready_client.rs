//! Failures surfaced by the client.
//!
//! Key design decisions:
//! - One tagged enum; callers branch on [`ErrorKind`] rather than on variants
//! - HTTP status codes and raw bodies stored as received
//! - Cancellation is its own kind, never folded into a status-based failure
//! - All errors include ErrorLocation, captured with `#[track_caller]`

use crate::error::config::ConfigError;

use common::{ErrorLocation, HttpStatusCode};

use std::fmt;
use std::panic::Location;

use reqwest::header::InvalidHeaderValue;
use thiserror::Error as ThisError;

/// What went wrong, independent of where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Rejected request or server-side failure (400, 402, 404, 500, other non-2xx).
    Operation,
    /// Invalid session token or login credentials (401).
    Authentication,
    /// The current user lacks the required access rights (403).
    Authorization,
    /// The caller cancelled before the exchange completed.
    Cancelled,
    /// Connection, TLS, timeout or body-read failure below HTTP.
    Transport,
    Serialization,
    Deserialization,
    InvalidUrl,
    InvalidHeader,
    /// The client was closed.
    Closed,
    Config,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Operation => "operation",
            ErrorKind::Authentication => "authentication",
            ErrorKind::Authorization => "authorization",
            ErrorKind::Cancelled => "cancelled",
            ErrorKind::Transport => "transport",
            ErrorKind::Serialization => "serialization",
            ErrorKind::Deserialization => "deserialization",
            ErrorKind::InvalidUrl => "invalid_url",
            ErrorKind::InvalidHeader => "invalid_header",
            ErrorKind::Closed => "closed",
            ErrorKind::Config => "config",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, ThisError)]
pub enum ReadyClientError {
    #[error("API Error ({kind}): HTTP {status} {path} - {message} {location}")]
    Api {
        kind: ErrorKind,
        message: String,
        path: String,
        status: HttpStatusCode,
        body: String,
        location: ErrorLocation,
    },

    #[error("Request Cancelled: {path} {location}")]
    Cancelled {
        path: String,
        location: ErrorLocation,
    },

    #[error("HTTP Error: {message} {location}")]
    Transport {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("JSON Serialization Error: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Deserialization Error: {message} {location}")]
    Deserialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    InvalidUrl {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Header Error: {message} {location}")]
    InvalidHeader {
        message: String,
        location: ErrorLocation,
    },

    #[error("Client Closed Error {location}")]
    Closed { location: ErrorLocation },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ReadyClientError {
    #[track_caller]
    pub fn api(
        kind: ErrorKind,
        message: impl Into<String>,
        path: impl Into<String>,
        status: HttpStatusCode,
        body: impl Into<String>,
    ) -> Self {
        ReadyClientError::Api {
            kind,
            message: message.into(),
            path: path.into(),
            status,
            body: body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn cancelled(path: impl Into<String>) -> Self {
        ReadyClientError::Cancelled {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn closed() -> Self {
        ReadyClientError::Closed {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn serialization(message: impl fmt::Display) -> Self {
        ReadyClientError::Serialization {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn deserialization(message: impl fmt::Display) -> Self {
        ReadyClientError::Deserialization {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ReadyClientError::Api { kind, .. } => *kind,
            ReadyClientError::Cancelled { .. } => ErrorKind::Cancelled,
            ReadyClientError::Transport { .. } => ErrorKind::Transport,
            ReadyClientError::Serialization { .. } => ErrorKind::Serialization,
            ReadyClientError::Deserialization { .. } => ErrorKind::Deserialization,
            ReadyClientError::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            ReadyClientError::InvalidHeader { .. } => ErrorKind::InvalidHeader,
            ReadyClientError::Closed { .. } => ErrorKind::Closed,
            ReadyClientError::Config(_) => ErrorKind::Config,
        }
    }

    /// Human-readable message, without location.
    pub fn message(&self) -> String {
        match self {
            ReadyClientError::Api { message, .. }
            | ReadyClientError::Transport { message, .. }
            | ReadyClientError::Serialization { message, .. }
            | ReadyClientError::Deserialization { message, .. }
            | ReadyClientError::InvalidUrl { message, .. }
            | ReadyClientError::InvalidHeader { message, .. } => message.clone(),
            ReadyClientError::Cancelled { path, .. } => format!("request to {path} was cancelled"),
            ReadyClientError::Closed { .. } => String::from("client has been closed"),
            ReadyClientError::Config(error) => error.to_string(),
        }
    }

    /// Relative request path (with query) for API failures and cancellations.
    pub fn path(&self) -> Option<&str> {
        match self {
            ReadyClientError::Api { path, .. } => Some(path),
            ReadyClientError::Cancelled { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn status_code(&self) -> Option<HttpStatusCode> {
        match self {
            ReadyClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body exactly as the server sent it.
    pub fn body(&self) -> Option<&str> {
        match self {
            ReadyClientError::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.kind() == ErrorKind::Cancelled
    }

    /// Get error category for logs.
    pub fn error_category(&self) -> &'static str {
        match self {
            ReadyClientError::Api { status, .. } if status.is_server_error() => "server_error",
            ReadyClientError::Transport { is_timeout: true, .. } => "timeout",
            ReadyClientError::Transport { is_connection: true, .. } => "connection",
            other => other.kind().as_str(),
        }
    }
}

impl From<url::ParseError> for ReadyClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ReadyClientError::InvalidUrl {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ReadyClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return ReadyClientError::Deserialization {
                message: error.to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        ReadyClientError::Transport {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<InvalidHeaderValue> for ReadyClientError {
    #[track_caller]
    fn from(error: InvalidHeaderValue) -> Self {
        ReadyClientError::InvalidHeader {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ReadyClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ReadyClientError::Deserialization {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

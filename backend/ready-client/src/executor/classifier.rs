//! Maps failed responses onto [`ReadyClientError::Api`].
//!
//! The body is kept verbatim. An error envelope is parsed from it when
//! possible; a body that is not an envelope simply contributes no message.

use crate::error::{ErrorKind, ReadyClientError};
use crate::json::JsonOptions;

use common::HttpStatusCode;
use models::ErrorEnvelope;

use log::warn;
use reqwest::Response;

pub const BAD_REQUEST_MESSAGE: &str = "request rejected, possibly missing a required parameter";
pub const UNAUTHORIZED_MESSAGE: &str = "invalid session key or login credentials";
pub const PAYMENT_REQUIRED_MESSAGE: &str = "parameters valid but request failed";
pub const FORBIDDEN_MESSAGE: &str = "current user lacks required access rights";
pub const NOT_FOUND_MESSAGE: &str = "path does not exist";
pub const SERVER_ERROR_MESSAGE: &str = "error occurred on the remote service";

pub fn kind_for_status(status: HttpStatusCode) -> ErrorKind {
    match status {
        HttpStatusCode::UNAUTHORIZED => ErrorKind::Authentication,
        HttpStatusCode::FORBIDDEN => ErrorKind::Authorization,
        _ => ErrorKind::Operation,
    }
}

/// Message used for a status when the body carries none.
pub fn default_message(status: HttpStatusCode) -> Option<&'static str> {
    match status {
        HttpStatusCode::BAD_REQUEST => Some(BAD_REQUEST_MESSAGE),
        HttpStatusCode::UNAUTHORIZED => Some(UNAUTHORIZED_MESSAGE),
        HttpStatusCode::PAYMENT_REQUIRED => Some(PAYMENT_REQUIRED_MESSAGE),
        HttpStatusCode::FORBIDDEN => Some(FORBIDDEN_MESSAGE),
        HttpStatusCode::NOT_FOUND => Some(NOT_FOUND_MESSAGE),
        HttpStatusCode::INTERNAL_SERVER_ERROR => Some(SERVER_ERROR_MESSAGE),
        _ => None,
    }
}

/// Reads the body and classifies. A body that cannot be read is recorded
/// as empty.
pub async fn classify_response(
    json: &JsonOptions,
    path: &str,
    response: Response,
    fallback_message: &str,
) -> ReadyClientError {
    let status = HttpStatusCode(response.status().as_u16());
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!("Failed to read error body for {path}: {e}");
            String::new()
        }
    };

    classify(json, path, status, body, fallback_message)
}

pub fn classify(
    json: &JsonOptions,
    path: &str,
    status: HttpStatusCode,
    body: String,
    fallback_message: &str,
) -> ReadyClientError {
    let envelope = json.decode::<ErrorEnvelope>(&body).ok();
    let extracted = envelope
        .as_ref()
        .and_then(ErrorEnvelope::first_message)
        .map(str::to_string);

    let message = match (default_message(status), extracted) {
        (Some(_), Some(extracted)) => extracted,
        (Some(default), None) => default.to_string(),
        (None, Some(extracted)) => format!("{fallback_message} - {extracted}"),
        (None, None) => fallback_message.to_string(),
    };
    let kind = kind_for_status(status);

    warn!("{kind} failure: HTTP {status} {path} - {message}");

    ReadyClientError::api(kind, message, path, status, body)
}

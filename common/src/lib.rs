//! Shared primitives for the UKG Ready client workspace.
//!
//! This crate holds the small building blocks every other crate leans on:
//! error locations, HTTP status helpers, redacted secrets and the serde
//! value converters used by the wire models.
//!
//! ## Architecture
//!
//! - **common** (this crate): Cross-cutting primitives
//! - **models**: Wire shapes exchanged with the remote service
//! - **ready-client**: Session handling and the request pipeline
//!
//! Nothing in here performs I/O.

pub mod converters;
pub mod error;
pub mod http_status;
pub mod redacted_secret;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;

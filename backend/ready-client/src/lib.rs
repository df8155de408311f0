pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod json;
pub mod query;
pub mod session;

#[cfg(test)]
mod tests;

pub use client::{EmployeeFilter, ReadyClient};
pub use config::ClientConfig;
pub use error::{ConfigError, ErrorKind, ReadyClientError};
pub use json::{JsonOptions, ValueConverter};
pub use query::{QueryParams, QueryValue};
pub use session::{AuthScheme, Credentials};

pub use models;
pub use tokio_util::sync::CancellationToken;

pub const USER_AGENT: &str = const_format::concatcp!("UkgReadyApiClient/", env!("CARGO_PKG_VERSION"));

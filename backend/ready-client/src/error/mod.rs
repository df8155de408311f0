pub mod config;
pub mod ready_client;

pub use config::ConfigError;
pub use ready_client::{ErrorKind, ReadyClientError};

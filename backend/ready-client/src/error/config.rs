use std::path::PathBuf;

use common::ErrorLocation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config Validation Error: {reason} {location}")]
    ValidationError {
        location: ErrorLocation,
        reason: String,
    },

    #[error("Config Environment Error: {variable}: {reason} {location}")]
    EnvVarError {
        location: ErrorLocation,
        variable: String,
        reason: String,
    },

    #[error("Config Env File Error: {path}: {reason} {location}")]
    EnvFileError {
        location: ErrorLocation,
        path: PathBuf,
        reason: String,
    },
}

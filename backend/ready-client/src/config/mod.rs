//! Client construction parameters.
//!
//! Built in code with the `with_*` setters, or read from the process
//! environment (optionally seeded from a `.env` file):
//!
//! | Variable | Field |
//! |---|---|
//! | `READY_BASE_URL` | `base_url` |
//! | `READY_API_KEY` | `api_key` |
//! | `READY_USERNAME` | `username` |
//! | `READY_PASSWORD` | `password` |
//! | `READY_COMPANY` | `company` |
//! | `READY_ALLOW_INVALID_CERTS` | `allow_invalid_certificates` |
//! | `READY_TIMEOUT_SECS` | `timeout` |

use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::env::{self, VarError};
use std::fmt;
use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use log::{debug, info};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://secure3.saashr.com/ta/rest/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_BASE_URL: &str = "READY_BASE_URL";
pub const ENV_API_KEY: &str = "READY_API_KEY";
pub const ENV_USERNAME: &str = "READY_USERNAME";
pub const ENV_PASSWORD: &str = "READY_PASSWORD";
pub const ENV_COMPANY: &str = "READY_COMPANY";
pub const ENV_ALLOW_INVALID_CERTS: &str = "READY_ALLOW_INVALID_CERTS";
pub const ENV_TIMEOUT_SECS: &str = "READY_TIMEOUT_SECS";

#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub username: String,
    pub password: String,
    /// Company short name.
    pub company: String,
    /// Skip server certificate validation. Trusted test environments only.
    pub allow_invalid_certificates: bool,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            username: String::new(),
            password: String::new(),
            company: String::new(),
            allow_invalid_certificates: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("company", &self.company)
            .field("allow_invalid_certificates", &self.allow_invalid_certificates)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self.company = company.into();
        self
    }

    pub fn with_allow_invalid_certificates(mut self, allow: bool) -> Self {
        self.allow_invalid_certificates = allow;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads the environment after loading `.env` from the working
    /// directory, if there is one. Variables already set take precedence
    /// over the file.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded .env from: {:?}", path),
            Err(e) => debug!("No .env loaded: {e}"),
        }

        Self::from_lookup(env_var)
    }

    /// Like [`ClientConfig::from_env`] but with an explicit file, which must exist.
    #[track_caller]
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        dotenvy::from_path(path).map_err(|e| ConfigError::EnvFileError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        info!("Loaded .env from: {:?}", path);

        Self::from_lookup(env_var)
    }

    /// Builds a config from any variable source. Unset variables keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<Option<String>, ConfigError>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL)? {
            config.base_url = base_url;
        }
        config.api_key = lookup(ENV_API_KEY)?;
        if let Some(username) = lookup(ENV_USERNAME)? {
            config.username = username;
        }
        if let Some(password) = lookup(ENV_PASSWORD)? {
            config.password = password;
        }
        if let Some(company) = lookup(ENV_COMPANY)? {
            config.company = company;
        }
        if let Some(value) = lookup(ENV_ALLOW_INVALID_CERTS)? {
            config.allow_invalid_certificates = parse_bool(ENV_ALLOW_INVALID_CERTS, &value)?;
        }
        if let Some(value) = lookup(ENV_TIMEOUT_SECS)? {
            let seconds = value.trim().parse::<u64>().map_err(|e| {
                env_error(ENV_TIMEOUT_SECS, format!("expected whole seconds: {e}"))
            })?;
            config.timeout = Duration::from_secs(seconds);
        }

        config.validate()?;
        Ok(config)
    }

    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(self.base_url.trim()).map_err(|e| ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("invalid base url '{}': {e}", self.base_url),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("unsupported base url scheme '{}'", url.scheme()),
            });
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("timeout must be greater than zero"),
            });
        }

        Ok(())
    }
}

fn env_var(name: &str) -> Result<Option<String>, ConfigError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(env_error(name, "contains invalid unicode")),
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(env_error(name, format!("expected a boolean, got '{other}'"))),
    }
}

#[track_caller]
fn env_error(variable: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::EnvVarError {
        location: ErrorLocation::from(Location::caller()),
        variable: variable.to_string(),
        reason: reason.into(),
    }
}

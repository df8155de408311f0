//! `POST v1/login` request and response bodies.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// `{"credentials": {"username", "password", "company"}}`
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub credentials: LoginCredentials,
}

impl LoginRequest {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            credentials: LoginCredentials {
                username: username.into(),
                password: password.into(),
                company: company.into(),
            },
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("credentials", &self.credentials)
            .finish()
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
    pub company: String,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("company", &self.company)
            .finish()
    }
}

/// Session token issued by a successful login.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "ttl", default)]
    pub time_to_live: i64,
    #[serde(rename = "units", default)]
    pub time_to_live_units: Option<String>,
}

impl LoginResponse {
    /// Token lifetime, when the units are ones we recognize.
    pub fn time_to_live_duration(&self) -> Option<Duration> {
        let amount = u64::try_from(self.time_to_live).ok()?;
        let units = self.time_to_live_units.as_deref()?.trim().to_ascii_lowercase();

        match units.as_str() {
            "milliseconds" | "ms" => Some(Duration::from_millis(amount)),
            "seconds" | "second" | "s" => Some(Duration::from_secs(amount)),
            "minutes" | "minute" | "m" => Some(Duration::from_secs(amount.checked_mul(60)?)),
            "hours" | "hour" | "h" => Some(Duration::from_secs(amount.checked_mul(3600)?)),
            _ => None,
        }
    }
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("token", &"[REDACTED]")
            .field("time_to_live", &self.time_to_live)
            .field("time_to_live_units", &self.time_to_live_units)
            .finish()
    }
}

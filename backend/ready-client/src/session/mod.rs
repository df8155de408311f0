//! Credential and session-token state.
//!
//! # Invariant
//! At most one authorization header is active: `Authorization: Bearer` while
//! a session token is held, otherwise `Api-Key` when a key is configured.
//! The token and the derived header set are replaced together under one
//! lock, so a reader never observes a half-applied swap. The lock is held
//! only for the swap, never across a network call.

pub mod manager;

pub use manager::SessionManager;

use crate::error::ReadyClientError;

use common::RedactedSecret;

use std::sync::{Mutex, MutexGuard, PoisonError};

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};

pub const API_KEY_HEADER: &str = "api-key";
const BEARER_PREFIX: &str = "Bearer ";

/// Which authorization header requests currently carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    None,
    ApiKey,
    Bearer,
}

/// Account credentials. The API key identifies the calling application;
/// username, password and company identify the user logging in.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: Option<RedactedSecret>,
    pub username: String,
    pub password: RedactedSecret,
    pub company: String,
}

impl Credentials {
    /// Blank API keys are treated as absent.
    pub fn new(
        api_key: Option<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            api_key: RedactedSecret::non_blank(api_key),
            username: username.into(),
            password: RedactedSecret::new(password),
            company: company.into(),
        }
    }
}

struct SessionInner {
    credentials: Credentials,
    token: Option<RedactedSecret>,
    headers: HeaderMap,
}

pub struct CredentialState {
    inner: Mutex<SessionInner>,
}

impl CredentialState {
    pub fn new(credentials: Credentials) -> Result<Self, ReadyClientError> {
        let headers = authorization_headers(credentials.api_key.as_ref(), None)?;

        Ok(Self {
            inner: Mutex::new(SessionInner {
                credentials,
                token: None,
                headers,
            }),
        })
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces all four credential fields. Any session token belongs to the
    /// previous credentials and is dropped; the API-key header is reinstated.
    pub fn set_credentials(&self, credentials: Credentials) -> Result<(), ReadyClientError> {
        let headers = authorization_headers(credentials.api_key.as_ref(), None)?;

        let mut inner = self.lock();
        inner.credentials = credentials;
        inner.token = None;
        inner.headers = headers;
        Ok(())
    }

    /// The single mutation point for the session token. `None` (or a blank
    /// token) ends the session and falls back to the API key.
    ///
    /// On error the previous token and headers stay in place.
    pub fn set_token(&self, token: Option<String>) -> Result<(), ReadyClientError> {
        let token = RedactedSecret::non_blank(token);

        let mut inner = self.lock();
        let headers = authorization_headers(inner.credentials.api_key.as_ref(), token.as_ref())?;
        inner.token = token;
        inner.headers = headers;
        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        self.lock()
            .token
            .as_ref()
            .map(|token| token.as_str().to_string())
    }

    pub fn has_token(&self) -> bool {
        self.lock().token.is_some()
    }

    /// Snapshot of the authorization headers for one request.
    pub fn auth_headers(&self) -> HeaderMap {
        self.lock().headers.clone()
    }

    pub fn auth_scheme(&self) -> AuthScheme {
        let inner = self.lock();
        if inner.headers.contains_key(AUTHORIZATION) {
            AuthScheme::Bearer
        } else if inner.headers.contains_key(API_KEY_HEADER) {
            AuthScheme::ApiKey
        } else {
            AuthScheme::None
        }
    }

    pub fn credentials(&self) -> Credentials {
        self.lock().credentials.clone()
    }

    pub fn username(&self) -> String {
        self.lock().credentials.username.clone()
    }

    pub fn company(&self) -> String {
        self.lock().credentials.company.clone()
    }
}

fn authorization_headers(
    api_key: Option<&RedactedSecret>,
    token: Option<&RedactedSecret>,
) -> Result<HeaderMap, ReadyClientError> {
    let mut headers = HeaderMap::new();

    match (token, api_key) {
        (Some(token), _) => {
            let mut value = HeaderValue::from_str(&format!("{BEARER_PREFIX}{}", token.as_str()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        (None, Some(api_key)) => {
            let mut value = HeaderValue::from_str(api_key.as_str())?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        }
        (None, None) => {}
    }

    Ok(headers)
}

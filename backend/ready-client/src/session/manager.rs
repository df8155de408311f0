//! Login orchestration.

use crate::error::ReadyClientError;
use crate::executor::RequestExecutor;
use crate::session::{CredentialState, Credentials};

use models::{LoginRequest, LoginResponse};

use std::sync::Arc;

use log::info;
use tokio_util::sync::CancellationToken;

pub const LOGIN_PATH: &str = "v1/login";

pub struct SessionManager {
    executor: Arc<RequestExecutor>,
    state: Arc<CredentialState>,
}

impl SessionManager {
    pub fn new(executor: Arc<RequestExecutor>, state: Arc<CredentialState>) -> Self {
        Self { executor, state }
    }

    /// Logs in with the configured username, password and company and
    /// installs the issued token. Failures propagate unchanged; nothing is
    /// retried.
    pub async fn login(&self, cancel: &CancellationToken) -> Result<(), ReadyClientError> {
        let credentials = self.state.credentials();
        let request = LoginRequest::new(
            credentials.username.as_str(),
            credentials.password.as_str(),
            credentials.company.as_str(),
        );

        let response: LoginResponse = self.executor.post(LOGIN_PATH, &request, cancel).await?;

        if response.token.trim().is_empty() {
            return Err(ReadyClientError::deserialization(
                "login response did not contain a token",
            ));
        }

        self.state.set_token(Some(response.token.clone()))?;

        info!(
            "Logged in as '{}' for company '{}' (token ttl: {} {})",
            credentials.username,
            credentials.company,
            response.time_to_live,
            response.time_to_live_units.as_deref().unwrap_or("unknown units")
        );

        Ok(())
    }

    /// Replaces the credentials (which drops any current session and
    /// reinstates the API-key header), then logs in.
    pub async fn login_with(
        &self,
        credentials: Credentials,
        cancel: &CancellationToken,
    ) -> Result<(), ReadyClientError> {
        self.state.set_credentials(credentials)?;
        self.login(cancel).await
    }

    /// Forgets the session token locally.
    pub fn clear(&self) -> Result<(), ReadyClientError> {
        self.state.set_token(None)
    }
}

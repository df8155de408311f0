//! Public entry point.
//!
//! [`ReadyClient`] owns one transport for its lifetime and exposes the
//! company-scoped operations of the Ready REST API. Every operation takes
//! a [`CancellationToken`]; cancelling it aborts the exchange, body read
//! included.

pub mod filters;

pub use filters::EmployeeFilter;

use crate::USER_AGENT;
use crate::config::ClientConfig;
use crate::error::ReadyClientError;
use crate::executor::RequestExecutor;
use crate::json::JsonOptions;
use crate::query::QueryParams;
use crate::session::{AuthScheme, CredentialState, Credentials, SessionManager};

use models::{Employee, EmployeesResponse, TimeEntriesResponse, TimeEntrySet};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tokio_util::sync::CancellationToken;

const COMPANIES_ENDPOINT: &str = "v2/companies";
const EMPLOYEES_ENDPOINT: &str = "employees";
const TIME_ENTRIES_ENDPOINT: &str = "time-entries";

pub const START_DATE_PARAM: &str = "start_date";
pub const END_DATE_PARAM: &str = "end_date";
pub const IS_LIGHT_PARAM: &str = "is_light";

pub struct ReadyClient {
    executor: Arc<RequestExecutor>,
    session: SessionManager,
    state: Arc<CredentialState>,
    closed: AtomicBool,
}

impl ReadyClient {
    pub fn new(config: ClientConfig) -> Result<Self, ReadyClientError> {
        Self::with_json_options(config, JsonOptions::web())
    }

    pub fn with_json_options(
        config: ClientConfig,
        json: JsonOptions,
    ) -> Result<Self, ReadyClientError> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let transport = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(default_headers)
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.allow_invalid_certificates)
            .build()?;

        let credentials = Credentials::new(
            config.api_key,
            config.username,
            config.password,
            config.company,
        );
        let state = Arc::new(CredentialState::new(credentials)?);
        let executor = Arc::new(RequestExecutor::new(
            &config.base_url,
            transport,
            json,
            Arc::clone(&state),
        )?);
        let session = SessionManager::new(Arc::clone(&executor), Arc::clone(&state));

        debug!("Ready client created for {}", executor.base_url());

        Ok(Self {
            executor,
            session,
            state,
            closed: AtomicBool::new(false),
        })
    }

    pub fn token(&self) -> Option<String> {
        self.state.token()
    }

    pub fn auth_scheme(&self) -> AuthScheme {
        self.state.auth_scheme()
    }

    pub fn auth_headers(&self) -> HeaderMap {
        self.state.auth_headers()
    }

    pub fn username(&self) -> String {
        self.state.username()
    }

    pub fn company(&self) -> String {
        self.state.company()
    }

    /// Replaces the credentials without logging in. Any current session
    /// token is dropped.
    pub fn set_credentials(&self, credentials: Credentials) -> Result<(), ReadyClientError> {
        self.state.set_credentials(credentials)
    }

    /// Direct access to the authenticated pipeline for endpoints without a
    /// dedicated operation.
    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    pub async fn login(&self, cancel: &CancellationToken) -> Result<(), ReadyClientError> {
        self.session.login(cancel).await
    }

    pub async fn login_with(
        &self,
        credentials: Credentials,
        cancel: &CancellationToken,
    ) -> Result<(), ReadyClientError> {
        self.session.login_with(credentials, cancel).await
    }

    /// Employees the current user may view, optionally narrowed by
    /// employer (EIN) and termination status.
    pub async fn employees(
        &self,
        filter: &EmployeeFilter,
        cancel: &CancellationToken,
    ) -> Result<Vec<Employee>, ReadyClientError> {
        let path = format!("{}/{EMPLOYEES_ENDPOINT}", self.company_path());
        let response: EmployeesResponse = self
            .executor
            .get(&path, &filter.to_query(), cancel)
            .await?;
        Ok(response.employees)
    }

    /// Time entries for every visible employee between `start_date` and
    /// `end_date`. The service limits the range to 31 days.
    pub async fn time_entries(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        is_light: Option<bool>,
        cancel: &CancellationToken,
    ) -> Result<Vec<TimeEntrySet>, ReadyClientError> {
        let path = format!("{}/{TIME_ENTRIES_ENDPOINT}", self.company_path());
        let query = QueryParams::new()
            .push(START_DATE_PARAM, start_date)
            .push(END_DATE_PARAM, end_date)
            .push_opt(IS_LIGHT_PARAM, is_light);

        let response: TimeEntriesResponse = self.executor.get(&path, &query, cancel).await?;
        Ok(response.time_entry_sets)
    }

    pub async fn employee_time_entries(
        &self,
        account_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        cancel: &CancellationToken,
    ) -> Result<TimeEntrySet, ReadyClientError> {
        let path = format!(
            "{}/{EMPLOYEES_ENDPOINT}/{account_id}/{TIME_ENTRIES_ENDPOINT}",
            self.company_path()
        );
        let query = QueryParams::new()
            .push(START_DATE_PARAM, start_date)
            .push(END_DATE_PARAM, end_date);

        self.executor.get(&path, &query, cancel).await
    }

    /// Ends the local session and releases the transport. Safe to call
    /// more than once.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }

        if let Err(e) = self.session.clear() {
            warn!("Failed to clear session token on close: {e}");
        }
        self.executor.release();

        debug!("Ready client closed");
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// `v2/companies/|{company}`; the company short name is percent-encoded.
    fn company_path(&self) -> String {
        let company = self.state.company();
        format!("{COMPANIES_ENDPOINT}/|{}", urlencoding::encode(&company))
    }
}

impl Drop for ReadyClient {
    fn drop(&mut self) {
        self.close();
    }
}

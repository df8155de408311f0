//! Authenticated request pipeline.
//!
//! Resolves relative paths against the base address, attaches the active
//! authorization header, serializes bodies through the shared
//! [`JsonOptions`], and decodes success bodies. Non-2xx responses are
//! handed to [`classifier`] and returned as failures. Every call races the
//! caller's [`CancellationToken`] for its whole duration, including the
//! body read.

pub mod classifier;

use crate::error::ReadyClientError;
use crate::json::JsonOptions;
use crate::query::QueryParams;
use crate::session::CredentialState;

use common::HttpStatusCode;

use std::sync::{Arc, PoisonError, RwLock};

use log::debug;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use url::Url;

const JSON_CONTENT_TYPE: &str = "application/json";

pub const GET_FAILED_MESSAGE: &str = "Failed to complete HTTP GET request.";
pub const POST_FAILED_MESSAGE: &str = "Failed to complete HTTP POST request.";
pub const PUT_FAILED_MESSAGE: &str = "Failed to complete HTTP PUT request.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to complete HTTP DELETE request.";

/// Appends the trailing `/` that relative resolution depends on.
pub fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

pub struct RequestExecutor {
    base_url: Url,
    transport: RwLock<Option<Client>>,
    json: JsonOptions,
    state: Arc<CredentialState>,
}

impl RequestExecutor {
    pub fn new(
        base_url: &str,
        transport: Client,
        json: JsonOptions,
        state: Arc<CredentialState>,
    ) -> Result<Self, ReadyClientError> {
        let base_url = Url::parse(&normalize_base_url(base_url))?;

        Ok(Self {
            base_url,
            transport: RwLock::new(Some(transport)),
            json,
            state,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn json(&self) -> &JsonOptions {
        &self.json
    }

    /// Absolute URL for a relative path (which may carry a query string).
    /// A leading `/` is ignored so the base path is never replaced.
    pub fn resolve(&self, relative: &str) -> Result<Url, ReadyClientError> {
        Ok(self.base_url.join(relative.trim_start_matches('/'))?)
    }

    pub async fn get<T>(
        &self,
        path: &str,
        query: &QueryParams,
        cancel: &CancellationToken,
    ) -> Result<T, ReadyClientError>
    where
        T: DeserializeOwned,
    {
        let relative = query.append_to(path);
        let text = self
            .execute(Method::GET, &relative, None, GET_FAILED_MESSAGE, cancel)
            .await?;
        self.json.decode(&text)
    }

    pub async fn post<B, T>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> Result<T, ReadyClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = self.json.encode(body)?;
        let text = self
            .execute(Method::POST, path, Some(payload), POST_FAILED_MESSAGE, cancel)
            .await?;
        self.json.decode(&text)
    }

    /// Body-less POST with a decoded response.
    pub async fn post_empty<T>(
        &self,
        path: &str,
        cancel: &CancellationToken,
    ) -> Result<T, ReadyClientError>
    where
        T: DeserializeOwned,
    {
        let text = self
            .execute(Method::POST, path, None, POST_FAILED_MESSAGE, cancel)
            .await?;
        self.json.decode(&text)
    }

    /// POST whose response body is ignored.
    pub async fn post_discard<B>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> Result<(), ReadyClientError>
    where
        B: Serialize + ?Sized,
    {
        let payload = self.json.encode(body)?;
        self.execute(Method::POST, path, Some(payload), POST_FAILED_MESSAGE, cancel)
            .await
            .map(|_| ())
    }

    /// Fire-and-forget POST: no body either way.
    pub async fn post_empty_discard(
        &self,
        path: &str,
        cancel: &CancellationToken,
    ) -> Result<(), ReadyClientError> {
        self.execute(Method::POST, path, None, POST_FAILED_MESSAGE, cancel)
            .await
            .map(|_| ())
    }

    pub async fn put<B>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> Result<(), ReadyClientError>
    where
        B: Serialize + ?Sized,
    {
        let payload = self.json.encode(body)?;
        self.execute(Method::PUT, path, Some(payload), PUT_FAILED_MESSAGE, cancel)
            .await
            .map(|_| ())
    }

    pub async fn put_empty(
        &self,
        path: &str,
        cancel: &CancellationToken,
    ) -> Result<(), ReadyClientError> {
        self.execute(Method::PUT, path, None, PUT_FAILED_MESSAGE, cancel)
            .await
            .map(|_| ())
    }

    pub async fn delete(
        &self,
        path: &str,
        cancel: &CancellationToken,
    ) -> Result<(), ReadyClientError> {
        self.execute(Method::DELETE, path, None, DELETE_FAILED_MESSAGE, cancel)
            .await
            .map(|_| ())
    }

    /// Drops the transport. Returns `false` when it was already released.
    pub(crate) fn release(&self) -> bool {
        self.transport
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some()
    }

    fn transport(&self) -> Result<Client, ReadyClientError> {
        self.transport
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or_else(|| ReadyClientError::closed())
    }

    async fn execute(
        &self,
        method: Method,
        relative: &str,
        body: Option<Vec<u8>>,
        fallback_message: &str,
        cancel: &CancellationToken,
    ) -> Result<String, ReadyClientError> {
        let url = self.resolve(relative)?;
        let transport = self.transport()?;

        let mut request = transport
            .request(method.clone(), url)
            .headers(self.state.auth_headers());
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
                .body(body);
        }

        debug!("{method} {relative}");

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("{method} {relative} cancelled");
                Err(ReadyClientError::cancelled(relative))
            }
            result = self.exchange(request, &method, relative, fallback_message) => result,
        }
    }

    async fn exchange(
        &self,
        request: RequestBuilder,
        method: &Method,
        relative: &str,
        fallback_message: &str,
    ) -> Result<String, ReadyClientError> {
        let response = request.send().await?;
        let status = HttpStatusCode(response.status().as_u16());

        debug!("{method} {relative} -> HTTP {status}");

        if !status.is_success() {
            return Err(
                classifier::classify_response(&self.json, relative, response, fallback_message)
                    .await,
            );
        }

        Ok(response.text().await?)
    }
}

//! Shared fixtures for the mock-server tests.
//!
//! Every client points at `{mock}/ta/rest` without a trailing slash so the
//! base-address normalization is exercised by every test.

use ready_client::{ClientConfig, ReadyClient};

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_USERNAME: &str = "jdoe";
pub const TEST_PASSWORD: &str = "s3cret";
pub const TEST_COMPANY: &str = "ACME";
pub const TEST_TOKEN: &str = "abc123";

pub const LOGIN_PATH: &str = "/ta/rest/v1/login";

/// `/ta/rest/v2/companies/|ACME{suffix}`, accepting `|` raw or escaped.
pub fn company_path_regex(suffix: &str) -> String {
    format!(r"^/ta/rest/v2/companies/(\||%7C){TEST_COMPANY}{suffix}$")
}

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::default()
        .with_base_url(format!("{}/ta/rest", server.uri()))
        .with_api_key(TEST_API_KEY)
        .with_credentials(TEST_USERNAME, TEST_PASSWORD, TEST_COMPANY)
}

pub fn client_for(server: &MockServer) -> ReadyClient {
    ReadyClient::new(config_for(server)).expect("Failed to build client")
}

pub fn login_response() -> Value {
    json!({"token": TEST_TOKEN, "ttl": 3600000, "units": "MILLISECONDS"})
}

/// Mounts a successful login answering with [`TEST_TOKEN`].
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_response()))
        .mount(server)
        .await;
}

pub fn error_body(message: &str) -> Value {
    json!({"errors": [{"code": 1, "message": message}], "user_messages": []})
}

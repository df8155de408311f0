use crate::helpers::{
    LOGIN_PATH, TEST_API_KEY, TEST_COMPANY, TEST_PASSWORD, TEST_TOKEN, TEST_USERNAME, client_for,
    company_path_regex, login_response, mount_login,
};

use ready_client::executor::classifier::UNAUTHORIZED_MESSAGE;
use ready_client::{AuthScheme, CancellationToken, Credentials, EmployeeFilter, ErrorKind};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the full login round trip.
///
/// **WHY THIS MATTERS**: Login is the gate to every other operation. The
/// request must carry the API key and credential body, and later requests
/// must carry the bearer token instead of the key.
///
/// **BUG THIS CATCHES**: Would catch a wrong body shape, the key header
/// missing on login, or the key lingering next to the bearer header.
#[tokio::test]
async fn given_valid_credentials_when_login_then_bearer_header_replaces_api_key() {
    // GIVEN: A server accepting the configured credentials
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .and(header("api-key", TEST_API_KEY))
        .and(body_json(json!({
            "credentials": {
                "username": TEST_USERNAME,
                "password": TEST_PASSWORD,
                "company": TEST_COMPANY
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(login_response()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(company_path_regex("/employees")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"employees": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();
    assert_eq!(client.auth_scheme(), AuthScheme::ApiKey);

    // WHEN: Logging in and issuing a follow-up request
    client.login(&cancel).await.unwrap();
    client.employees(&EmployeeFilter::all(), &cancel).await.unwrap();

    // THEN: The token is installed and only the bearer header is sent
    assert_eq!(client.token().as_deref(), Some(TEST_TOKEN));
    assert_eq!(client.auth_scheme(), AuthScheme::Bearer);

    let requests = server.received_requests().await.unwrap();
    let follow_up = requests.last().unwrap();
    assert_eq!(
        follow_up.headers.get("authorization").unwrap(),
        &format!("Bearer {TEST_TOKEN}")
    );
    assert!(follow_up.headers.get("api-key").is_none());
}

#[tokio::test]
async fn given_rejected_credentials_when_login_then_authentication_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string(""))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let error = client.login(&CancellationToken::new()).await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Authentication);
    assert_eq!(error.message(), UNAUTHORIZED_MESSAGE);
    assert_eq!(error.path(), Some("v1/login"));
    assert_eq!(client.token(), None);
    assert_eq!(client.auth_scheme(), AuthScheme::ApiKey);
}

#[tokio::test]
async fn given_success_without_token_when_login_then_deserialization_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "", "ttl": 0})))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let error = client.login(&CancellationToken::new()).await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Deserialization);
    assert!(client.token().is_none());
}

/// **VALUE**: Verifies logging in with new credentials uses them everywhere.
///
/// **WHY THIS MATTERS**: Switching tenants at runtime must not leak the
/// previous key or session into the new one.
///
/// **BUG THIS CATCHES**: Would catch the old API key being sent with the new
/// credentials.
#[tokio::test]
async fn given_new_credentials_when_login_with_then_new_key_and_body_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .and(header("api-key", "other-key"))
        .and(body_json(json!({
            "credentials": {"username": "asmith", "password": "pw", "company": "GLOBEX"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "xyz789"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let credentials = Credentials::new(Some("other-key".to_string()), "asmith", "pw", "GLOBEX");

    client
        .login_with(credentials, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(client.token().as_deref(), Some("xyz789"));
    assert_eq!(client.username(), "asmith");
    assert_eq!(client.company(), "GLOBEX");
}

#[tokio::test]
async fn given_active_session_when_credentials_replaced_then_session_dropped() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let client = client_for(&server);
    client.login(&CancellationToken::new()).await.unwrap();

    client
        .set_credentials(Credentials::new(
            Some(TEST_API_KEY.to_string()),
            "asmith",
            "pw",
            "GLOBEX",
        ))
        .unwrap();

    assert_eq!(client.token(), None);
    assert_eq!(client.auth_scheme(), AuthScheme::ApiKey);
    assert_eq!(
        client.auth_headers().get("api-key").unwrap(),
        TEST_API_KEY
    );
}

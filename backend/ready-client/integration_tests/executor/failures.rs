use crate::helpers::{client_for, company_path_regex, error_body};

use ready_client::executor::GET_FAILED_MESSAGE;
use ready_client::executor::classifier::{
    FORBIDDEN_MESSAGE, NOT_FOUND_MESSAGE, PAYMENT_REQUIRED_MESSAGE, SERVER_ERROR_MESSAGE,
};
use ready_client::{
    CancellationToken, ClientConfig, EmployeeFilter, ErrorKind, ReadyClient, ReadyClientError,
};

use common::HttpStatusCode;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn employees_failure(template: ResponseTemplate) -> ReadyClientError {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(company_path_regex("/employees")))
        .respond_with(template)
        .mount(&server)
        .await;

    client_for(&server)
        .employees(&EmployeeFilter::all(), &CancellationToken::new())
        .await
        .unwrap_err()
}

/// **VALUE**: Verifies each tabled status surfaces with its kind and the
/// default message when the body carries none.
///
/// **WHY THIS MATTERS**: Callers decide between re-login, permission
/// prompts and plain failure based on the kind alone.
///
/// **BUG THIS CATCHES**: Would catch status mapping drifting between the
/// classifier and the live pipeline.
#[tokio::test]
async fn given_tabled_statuses_when_request_fails_then_kind_and_default_message() {
    let cases = [
        (402, ErrorKind::Operation, PAYMENT_REQUIRED_MESSAGE),
        (403, ErrorKind::Authorization, FORBIDDEN_MESSAGE),
        (404, ErrorKind::Operation, NOT_FOUND_MESSAGE),
        (500, ErrorKind::Operation, SERVER_ERROR_MESSAGE),
    ];

    for (code, kind, message) in cases {
        let error = employees_failure(ResponseTemplate::new(code)).await;

        assert_eq!(error.kind(), kind, "kind for {code}");
        assert_eq!(error.message(), message, "message for {code}");
        assert_eq!(error.status_code(), Some(HttpStatusCode(code)));
    }
}

#[tokio::test]
async fn given_error_envelope_when_request_fails_then_server_message_and_body_kept() {
    let body = error_body("Company not found");

    let error =
        employees_failure(ResponseTemplate::new(404).set_body_json(body.clone())).await;

    assert_eq!(error.kind(), ErrorKind::Operation);
    assert_eq!(error.message(), "Company not found");
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(error.body().unwrap()).unwrap(),
        body
    );
    assert!(error.path().unwrap().ends_with("/employees"));
}

#[tokio::test]
async fn given_html_error_page_when_request_fails_then_raw_body_retained() {
    let html = "<html><body>Service Unavailable</body></html>";

    let error = employees_failure(ResponseTemplate::new(500).set_body_string(html)).await;

    assert_eq!(error.message(), SERVER_ERROR_MESSAGE);
    assert_eq!(error.body(), Some(html));
}

#[tokio::test]
async fn given_untabled_status_when_request_fails_then_verb_fallback_prefixes_message() {
    let error =
        employees_failure(ResponseTemplate::new(429).set_body_json(error_body("Too many calls")))
            .await;

    assert_eq!(error.kind(), ErrorKind::Operation);
    assert_eq!(
        error.message(),
        format!("{GET_FAILED_MESSAGE} - Too many calls")
    );
}

#[tokio::test]
async fn given_malformed_success_body_when_decoded_then_deserialization_failure() {
    let error = employees_failure(
        ResponseTemplate::new(200).set_body_json(json!({"employees": "not-an-array"})),
    )
    .await;

    assert_eq!(error.kind(), ErrorKind::Deserialization);
    assert_eq!(error.status_code(), None);
}

/// **VALUE**: Verifies a pre-cancelled token stops the call before any
/// exchange result is reported.
///
/// **WHY THIS MATTERS**: Shutdown paths cancel everything at once; work
/// started after that point must not proceed.
///
/// **BUG THIS CATCHES**: Would catch the cancel branch losing the `biased`
/// race against an instantly ready response.
#[tokio::test]
async fn given_cancelled_token_when_request_issued_then_cancelled_kind() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let error = client
        .employees(&EmployeeFilter::all(), &cancel)
        .await
        .unwrap_err();

    assert!(error.is_cancelled());
    assert_eq!(error.kind(), ErrorKind::Cancelled);
}

#[tokio::test]
async fn given_slow_server_when_cancelled_mid_flight_then_cancelled_kind() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(company_path_regex("/employees")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"employees": []}))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let started = std::time::Instant::now();
    let error = client
        .employees(&EmployeeFilter::all(), &cancel)
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Cancelled);
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn given_unreachable_server_when_request_issued_then_transport_failure() {
    let config = ClientConfig::default()
        .with_base_url("http://127.0.0.1:1/ta/rest")
        .with_credentials("jdoe", "s3cret", "ACME")
        .with_timeout(Duration::from_secs(5));
    let client = ReadyClient::new(config).unwrap();

    let error = client
        .employees(&EmployeeFilter::all(), &CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Transport);
}

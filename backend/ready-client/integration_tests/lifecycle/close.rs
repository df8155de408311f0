use crate::helpers::{TEST_API_KEY, client_for, mount_login};

use ready_client::{AuthScheme, CancellationToken, EmployeeFilter, ErrorKind};

use wiremock::MockServer;

/// **VALUE**: Verifies closing twice is harmless and restores the API key.
///
/// **WHY THIS MATTERS**: Close runs from explicit calls and from `Drop`;
/// both may happen for the same client.
///
/// **BUG THIS CATCHES**: Would catch a second close panicking or the token
/// surviving the first.
#[tokio::test]
async fn given_logged_in_client_when_closed_twice_then_token_cleared_once() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let client = client_for(&server);
    client.login(&CancellationToken::new()).await.unwrap();
    assert_eq!(client.auth_scheme(), AuthScheme::Bearer);

    client.close();
    client.close();

    assert!(client.is_closed());
    assert_eq!(client.token(), None);
    assert_eq!(client.auth_scheme(), AuthScheme::ApiKey);
    assert_eq!(client.auth_headers().get("api-key").unwrap(), TEST_API_KEY);
}

#[tokio::test]
async fn given_closed_client_when_operation_called_then_closed_kind() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    client.close();

    let error = client
        .employees(&EmployeeFilter::all(), &CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Closed);

    let login = client.login(&CancellationToken::new()).await.unwrap_err();
    assert_eq!(login.kind(), ErrorKind::Closed);
}

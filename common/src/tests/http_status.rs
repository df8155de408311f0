use crate::HttpStatusCode;

#[test]
fn given_status_ranges_when_categorized_then_matches_http_classes() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(204).is_success());
    assert!(!HttpStatusCode(301).is_success());

    assert!(HttpStatusCode::UNAUTHORIZED.is_client_error());
    assert!(!HttpStatusCode::UNAUTHORIZED.is_server_error());

    assert!(HttpStatusCode::INTERNAL_SERVER_ERROR.is_server_error());
    assert!(HttpStatusCode(503).is_server_error());
}

#[test]
fn given_status_when_displayed_then_shows_bare_code() {
    assert_eq!(HttpStatusCode::from(404).to_string(), "404");
    assert_eq!(HttpStatusCode(418).as_u16(), 418);
}

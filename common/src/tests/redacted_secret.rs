use crate::RedactedSecret;

/// **VALUE**: Verifies secrets never leak through Debug or Display.
///
/// **WHY THIS MATTERS**: Credentials travel inside client state that gets logged on
/// failure paths. A derived Debug would print the password in plain text.
///
/// **BUG THIS CATCHES**: Would catch someone replacing the manual impls with `#[derive(Debug)]`.
#[test]
fn given_secret_when_formatted_then_value_is_redacted() {
    // GIVEN: A secret
    let secret = RedactedSecret::new("hunter2-password");

    // WHEN: Formatting it both ways
    let debug = format!("{:?}", secret);
    let display = format!("{}", secret);

    // THEN: Neither contains the value
    assert!(!debug.contains("hunter2"));
    assert!(!display.contains("hunter2"));
    assert_eq!(secret.as_str(), "hunter2-password");
    assert_eq!(secret.len(), 16);
}

#[test]
fn given_secret_when_serialized_then_fails() {
    let secret = RedactedSecret::new("abc");

    let result = serde_json::to_string(&secret);

    assert!(result.is_err(), "Secrets must be passed explicitly via as_str()");
}

#[test]
fn given_blank_values_when_wrapping_non_blank_then_returns_none() {
    assert!(RedactedSecret::non_blank(None).is_none());
    assert!(RedactedSecret::non_blank(Some(String::new())).is_none());
    assert!(RedactedSecret::non_blank(Some("   ".to_string())).is_none());
    assert!(RedactedSecret::non_blank(Some("key".to_string())).is_some());
}

// Unit tests for JsonOptions
// Case-insensitive decoding, blank bodies, converter hooks

use crate::error::ErrorKind;
use crate::json::lenient::{match_field, parse_number};
use crate::json::{JsonOptions, ValueConverter};

use models::{Employee, ErrorEnvelope, LoginResponse, TimeEntrySet};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// **VALUE**: Verifies property names match regardless of case.
///
/// **WHY THIS MATTERS**: The service is not consistent about key casing
/// across endpoints. Web defaults must accept `Token` and `TTL`.
///
/// **BUG THIS CATCHES**: Would catch field matching being skipped or applied only at
/// the top level.
#[test]
fn given_mixed_case_keys_when_decoded_with_web_options_then_fields_bind() {
    let body = r#"{"Token":"abc123","TTL":3600000,"Units":"MILLISECONDS"}"#;

    let response: LoginResponse = JsonOptions::web().decode(body).unwrap();

    assert_eq!(response.token, "abc123");
    assert_eq!(response.time_to_live, 3_600_000);
    assert_eq!(response.time_to_live_units.as_deref(), Some("MILLISECONDS"));
}

#[test]
fn given_nested_mixed_case_keys_when_decoded_then_nested_fields_bind() {
    let body = r#"{
        "Employee": {"Account_Id": 12, "First_Name": "Ada"},
        "Start_Date": "2024-03-01",
        "END_DATE": "2024-03-31",
        "Time_Entries": []
    }"#;

    let set: TimeEntrySet = JsonOptions::web().decode(body).unwrap();

    let employee = set.employee.unwrap();
    assert_eq!(employee.account_id, 12);
    assert_eq!(employee.first_name.as_deref(), Some("Ada"));
    assert!(set.time_entries.is_empty());
}

#[test]
fn given_mixed_case_keys_when_decoded_with_strict_options_then_deserialization_fails() {
    let body = r#"{"Token":"abc123"}"#;

    let error = JsonOptions::strict().decode::<LoginResponse>(body).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Deserialization);
}

/// **VALUE**: Verifies an empty success body reads as absent for `Option<T>`.
///
/// **WHY THIS MATTERS**: Some endpoints answer 200 with no body. Callers
/// detect that through `None` rather than a decode error.
///
/// **BUG THIS CATCHES**: Would catch blank text reaching `serde_json::from_str`.
#[test]
fn given_blank_body_when_decoded_as_option_then_none() {
    let options = JsonOptions::web();

    assert_eq!(options.decode::<Option<LoginResponse>>("").unwrap().map(|r| r.token), None);
    assert!(options.decode::<Option<Value>>("  \n").unwrap().is_none());
}

#[test]
fn given_blank_body_when_decoded_as_struct_then_deserialization_error() {
    let error = JsonOptions::web().decode::<LoginResponse>("").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Deserialization);
}

#[test]
fn given_keys_when_matched_to_fields_then_exact_match_preferred() {
    const FIELDS: &[&str] = &["token", "ttl", "units"];

    assert_eq!(match_field("token".to_string(), FIELDS), "token");
    assert_eq!(match_field("TTL".to_string(), FIELDS), "ttl");
    assert_eq!(match_field("Extra".to_string(), FIELDS), "Extra");
}

/// **VALUE**: Verifies free-form objects keep the key casing the server sent.
///
/// **WHY THIS MATTERS**: `details` carries field names the caller maps back
/// to its own inputs (`startDate`). Lowercasing them breaks that lookup.
///
/// **BUG THIS CATCHES**: Would catch case-insensitive matching being applied
/// to every object key instead of only to struct fields.
#[test]
fn given_user_message_details_when_decoded_then_detail_keys_keep_their_case() {
    let body = r#"{"User_Messages":[{"Text":"Invalid range","Details":{"fieldName":"startDate","Max":{"daySpan":31}}}]}"#;

    let envelope: ErrorEnvelope = JsonOptions::web().decode(body).unwrap();

    let message = &envelope.user_messages[0];
    assert_eq!(message.text.as_deref(), Some("Invalid range"));
    assert_eq!(
        message.details,
        Some(json!({"fieldName": "startDate", "Max": {"daySpan": 31}}))
    );
}

#[test]
fn given_map_target_when_decoded_then_keys_untouched() {
    let decoded: HashMap<String, i64> = JsonOptions::web().decode(r#"{"Alpha":1,"beta":2}"#).unwrap();

    assert_eq!(decoded.get("Alpha"), Some(&1));
    assert_eq!(decoded.get("alpha"), None);
    assert_eq!(decoded.get("beta"), Some(&2));
}

/// **VALUE**: Verifies numeric fields accept numbers written as strings.
///
/// **WHY THIS MATTERS**: Some endpoints quote identifiers (`"id": "42"`).
/// Rejecting them fails the whole call with a deserialization error.
///
/// **BUG THIS CATCHES**: Would catch web options treating quoted numbers as
/// type errors, or string fields being turned into numbers.
#[test]
fn given_quoted_numbers_when_decoded_with_web_options_then_numeric_fields_bind() {
    let body = r#"{"id":"42","username":"jdoe","employee_id":"101","primary_account_id":"7"}"#;

    let employee: Employee = JsonOptions::web().decode(body).unwrap();

    assert_eq!(employee.id, 42);
    assert_eq!(employee.primary_account_id, Some(7));
    assert_eq!(employee.employee_id.as_deref(), Some("101"));
}

#[test]
fn given_quoted_numbers_when_decoded_with_strict_options_then_deserialization_fails() {
    let error = JsonOptions::strict()
        .decode::<Employee>(r#"{"id":"42"}"#)
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Deserialization);
}

#[test]
fn given_non_numeric_strings_when_parsed_then_rejected() {
    assert_eq!(parse_number("42").map(|n| n.as_i64()), Some(Some(42)));
    assert!(parse_number("-1.5e3").is_some());
    assert!(parse_number(" 42").is_none());
    assert!(parse_number("NaN").is_none());
    assert!(parse_number("").is_none());

    let error = JsonOptions::web()
        .decode::<Employee>(r#"{"id":"forty-two"}"#)
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Deserialization);
}

struct UppercaseStatus;

impl ValueConverter for UppercaseStatus {
    fn name(&self) -> &str {
        "uppercase-status"
    }

    fn read(&self, value: &mut Value) {
        if let Some(Value::String(status)) = value.get_mut("status") {
            *status = status.to_ascii_uppercase();
        }
    }

    fn write(&self, value: &mut Value) {
        if let Some(Value::String(status)) = value.get_mut("status") {
            *status = status.to_ascii_lowercase();
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct StatusHolder {
    status: String,
}

/// **VALUE**: Verifies registered converters run on both directions.
///
/// **WHY THIS MATTERS**: Converters are the extension point for wire formats
/// the models cannot express. They must see every payload.
///
/// **BUG THIS CATCHES**: Would catch converters registered but never invoked.
#[test]
fn given_custom_converter_when_encoding_and_decoding_then_hooks_apply() {
    let options = JsonOptions::web().with_converter(UppercaseStatus);

    let decoded: StatusHolder = options.decode(r#"{"status":"active"}"#).unwrap();
    assert_eq!(decoded.status, "ACTIVE");

    let encoded = options
        .encode(&StatusHolder {
            status: "Terminated".to_string(),
        })
        .unwrap();
    assert_eq!(
        serde_json::from_slice::<Value>(&encoded).unwrap(),
        json!({"status": "terminated"})
    );

    assert_eq!(options.converter_names(), vec!["uppercase-status"]);
    assert!(options.is_case_insensitive());
    assert!(options.reads_numbers_from_strings());
}

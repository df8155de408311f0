use crate::{TimeEntriesResponse, TimeEntrySet};

use chrono::{NaiveDate, TimeDelta};
use serde_json::{Value, json};

fn entry(id: i64, total: i64) -> Value {
    json!({
        "id": id,
        "date": "2024-03-01",
        "type": "TIME_ENTRY",
        "start_time": "2024-03-01T08:00:00",
        "end_time": "2024-03-01T12:00:00",
        "total": total,
        "is_raw": true,
        "is_calc": false,
        "pay_category": { "id": 3, "name": "Regular" }
    })
}

/// **VALUE**: Verifies set totals sum raw entry milliseconds.
///
/// **WHY THIS MATTERS**: Callers report hours per employee from `total()`; a wrong
/// unit (seconds vs milliseconds) would inflate payroll figures by 1000x.
#[test]
fn given_time_entry_set_when_totaled_then_sums_entry_durations() {
    // GIVEN: Two entries of 4h and 30m
    let payload = json!({
        "employee": { "account_id": 42 },
        "start_date": "2024-03-01",
        "end_date": "2024-03-01",
        "time_entries": [entry(1, 4 * 3_600_000), entry(2, 1_800_000)]
    });

    // WHEN: Deserializing and totaling
    let set: TimeEntrySet = serde_json::from_value(payload).expect("deserializes");

    // THEN: Total is 4.5 hours
    assert_eq!(set.total(), TimeDelta::minutes(270));
    assert_eq!(set.employee.as_ref().map(|e| e.account_id), Some(42));
    assert_eq!(set.start_date, NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid"));

    let first = &set.time_entries[0];
    assert_eq!(first.entry_type.as_deref(), Some("TIME_ENTRY"));
    assert_eq!(first.total(), TimeDelta::hours(4));
    assert_eq!(first.calc_total(), TimeDelta::zero());
    assert!(first.is_raw);
    assert_eq!(
        first.pay_category.as_ref().and_then(|node| node.name.as_deref()),
        Some("Regular")
    );
    assert_eq!(
        first.start_time.map(|t| t.to_string()).as_deref(),
        Some("2024-03-01 08:00:00")
    );
}

#[test]
fn given_set_without_entries_when_totaled_then_zero() {
    let payload = json!({
        "start_date": "2024-03-01",
        "end_date": "2024-03-07"
    });

    let set: TimeEntrySet = serde_json::from_value(payload).expect("deserializes");

    assert!(set.time_entries.is_empty());
    assert_eq!(set.total(), TimeDelta::zero());
}

#[test]
fn given_time_entries_envelope_when_deserialized_then_unwraps_sets() {
    let payload = json!({
        "time_entry_sets": [{
            "employee": { "account_id": 1 },
            "start_date": "2024-03-01",
            "end_date": "2024-03-02",
            "time_entries": []
        }]
    });

    let response: TimeEntriesResponse = serde_json::from_value(payload).expect("deserializes");

    assert_eq!(response.time_entry_sets.len(), 1);
}

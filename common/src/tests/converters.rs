// Unit tests for the serde field adapters.

use crate::converters::{Described, Displayed, date_only, date_time};

use std::fmt;
use std::str::FromStr;

use chrono::{FixedOffset, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PayPeriod {
    Weekly,
    BiWeekly,
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayPeriod::Weekly => write!(f, "WEEKLY"),
            PayPeriod::BiWeekly => write!(f, "BI_WEEKLY"),
        }
    }
}

impl FromStr for PayPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WEEKLY" => Ok(PayPeriod::Weekly),
            "BI_WEEKLY" => Ok(PayPeriod::BiWeekly),
            other => Err(format!("unknown pay period '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Worked,
    TimeOff,
}

impl Described for EntryKind {
    const VARIANTS: &'static [Self] = &[EntryKind::Worked, EntryKind::TimeOff];

    fn description(&self) -> &'static str {
        match self {
            EntryKind::Worked => "Worked Time",
            EntryKind::TimeOff => "Time Off",
        }
    }
}

impl Displayed for EntryKind {
    const VARIANTS: &'static [Self] = &[EntryKind::Worked, EntryKind::TimeOff];

    fn display_name(&self) -> &'static str {
        match self {
            EntryKind::Worked => "Worked",
            EntryKind::TimeOff => "PTO",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Sample {
    #[serde(with = "crate::converters::string_enum")]
    period: PayPeriod,
    #[serde(with = "crate::converters::enum_description")]
    described: EntryKind,
    #[serde(with = "crate::converters::enum_display")]
    displayed: EntryKind,
    #[serde(with = "crate::converters::date_only")]
    day: NaiveDate,
    #[serde(with = "crate::converters::date_only::option", default)]
    maybe_day: Option<NaiveDate>,
}

fn march_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
}

/// **VALUE**: Verifies every adapter writes the documented wire text.
///
/// **BUG THIS CATCHES**: An enum falling back to serde's variant name ("BiWeekly")
/// or a date written with a time component would be rejected by the service.
#[test]
fn given_adapted_fields_when_serialized_then_writes_wire_text() {
    // GIVEN: A value using every adapter
    let sample = Sample {
        period: PayPeriod::BiWeekly,
        described: EntryKind::TimeOff,
        displayed: EntryKind::TimeOff,
        day: march_first(),
        maybe_day: None,
    };

    // WHEN: Serializing
    let value = serde_json::to_value(&sample).expect("serializes");

    // THEN: Each field uses its adapter's text
    assert_eq!(
        value,
        json!({
            "period": "BI_WEEKLY",
            "described": "Time Off",
            "displayed": "PTO",
            "day": "2024-03-01",
            "maybe_day": null
        })
    );
}

#[test]
fn given_wire_text_when_deserialized_then_restores_values() {
    let value = json!({
        "period": "WEEKLY",
        "described": "worked time",
        "displayed": " pto ",
        "day": "2024-03-01T17:45:00",
        "maybe_day": ""
    });

    let sample: Sample = serde_json::from_value(value).expect("deserializes");

    assert_eq!(sample.period, PayPeriod::Weekly);
    assert_eq!(sample.described, EntryKind::Worked);
    assert_eq!(sample.displayed, EntryKind::TimeOff);
    assert_eq!(sample.day, march_first());
    assert_eq!(sample.maybe_day, None);
}

#[test]
fn given_unknown_label_when_deserialized_then_fails() {
    let value = json!({
        "period": "MONTHLY",
        "described": "Worked Time",
        "displayed": "Worked",
        "day": "2024-03-01"
    });

    assert!(serde_json::from_value::<Sample>(value).is_err());
}

/// **VALUE**: Date-only output is taken in UTC, not in the value's own zone.
///
/// **WHY THIS MATTERS**: A date range built late in the evening west of UTC must not
/// request the previous day, and one built east of UTC must not request the next.
#[test]
fn given_zoned_timestamp_when_formatted_utc_then_uses_utc_date() {
    let east = FixedOffset::east_opt(10 * 3600).expect("valid offset");
    let early_morning = east
        .with_ymd_and_hms(2024, 3, 2, 6, 0, 0)
        .single()
        .expect("unambiguous");

    let west = FixedOffset::west_opt(5 * 3600).expect("valid offset");
    let evening = west
        .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .single()
        .expect("unambiguous");

    assert_eq!(date_only::format_utc(&early_morning), "2024-03-01");
    assert_eq!(date_only::format_utc(&evening), "2024-03-01");
}

#[test]
fn given_various_timestamp_shapes_when_parsed_then_accepted() {
    assert_eq!(date_only::parse("2024-03-01"), Some(march_first()));
    assert_eq!(date_only::parse("2024-03-01T08:30:00-05:00"), Some(march_first()));
    assert_eq!(date_only::parse("not a date"), None);

    let parsed = date_time::parse("2024-03-01T08:30:00+02:00").expect("parses");
    assert_eq!(parsed.to_string(), "2024-03-01 08:30:00");
    assert!(date_time::parse("2024-03-01T08:30").is_some());
    assert!(date_time::parse("yesterday").is_none());
}

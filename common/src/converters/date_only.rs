//! Calendar dates on the wire as `yyyy-MM-dd`.
//!
//! Zoned date-times are normalized to UTC before the date is taken, so the
//! written value never depends on the local time zone. Reading accepts a
//! bare date or a full timestamp and keeps the date as written.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

pub fn format(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_utc<Tz: TimeZone>(value: &DateTime<Tz>) -> String {
    format(&value.with_timezone(&Utc).date_naive())
}

pub fn parse(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    if let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
        return Some(date);
    }

    if let Ok(value) = DateTime::parse_from_rfc3339(text) {
        return Some(value.date_naive());
    }

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|value| value.date())
}

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(date))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse(&text).ok_or_else(|| D::Error::custom(format!("invalid date '{text}'")))
}

/// Same format for optional fields; `null` and blank strings read as `None`.
pub mod option {
    use chrono::NaiveDate;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => super::serialize(date, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) if !text.trim().is_empty() => super::parse(&text)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date '{text}'"))),
            _ => Ok(None),
        }
    }
}

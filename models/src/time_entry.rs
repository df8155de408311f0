use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// A single time entry. Durations arrive as whole milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: i64,
    #[serde(with = "common::converters::date_only")]
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    #[serde(with = "common::converters::date_time::option", default)]
    pub start_time: Option<NaiveDateTime>,
    #[serde(with = "common::converters::date_time::option", default)]
    pub end_time: Option<NaiveDateTime>,
    #[serde(rename = "total", default)]
    pub total_milliseconds: i64,
    pub time_off: Option<TimeEntryNode>,
    pub pay_category: Option<TimeEntryNode>,
    pub premium_shift: Option<TimeEntryNode>,
    #[serde(default)]
    pub is_raw: bool,
    #[serde(default)]
    pub is_calc: bool,
    #[serde(with = "common::converters::date_time::option", default)]
    pub calc_start_time: Option<NaiveDateTime>,
    #[serde(with = "common::converters::date_time::option", default)]
    pub calc_end_time: Option<NaiveDateTime>,
    #[serde(rename = "calc_total", default)]
    pub calc_total_milliseconds: i64,
    pub calc_pay_category: Option<TimeEntryNode>,
    pub calc_premium_shift: Option<TimeEntryNode>,
    #[serde(default)]
    pub piecework: i64,
    #[serde(default)]
    pub amount: i64,
}

impl TimeEntry {
    pub fn total(&self) -> TimeDelta {
        TimeDelta::milliseconds(self.total_milliseconds)
    }

    /// Server-calculated duration; zero for light requests.
    pub fn calc_total(&self) -> TimeDelta {
        TimeDelta::milliseconds(self.calc_total_milliseconds)
    }
}

/// Reference to a named lookup (time-off type, pay category, premium shift).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeEntryNode {
    pub id: Option<i64>,
    pub name: Option<String>,
}

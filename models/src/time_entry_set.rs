use crate::time_entry::TimeEntry;

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

/// One employee's time entries over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntrySet {
    pub employee: Option<TimeEntrySetEmployee>,
    #[serde(with = "common::converters::date_only")]
    pub start_date: NaiveDate,
    #[serde(with = "common::converters::date_only")]
    pub end_date: NaiveDate,
    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,
}

impl TimeEntrySet {
    /// Sum of the raw entry totals.
    pub fn total(&self) -> TimeDelta {
        self.time_entries
            .iter()
            .fold(TimeDelta::zero(), |sum, entry| sum + entry.total())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeEntrySetEmployee {
    pub account_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub employee_id: Option<String>,
    pub external_id: Option<String>,
}

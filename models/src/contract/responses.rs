//! Outer envelopes that only exist for wire shape.

use crate::employee::Employee;
use crate::time_entry_set::TimeEntrySet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeesResponse {
    #[serde(default)]
    pub employees: Vec<Employee>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeEntriesResponse {
    #[serde(default)]
    pub time_entry_sets: Vec<TimeEntrySet>,
}

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Basic information about an employee the current user may view, with
/// links to the detail APIs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub employee_id: Option<String>,
    pub external_id: Option<String>,
    pub primary_account_id: Option<i64>,
    pub ein_name: Option<String>,
    pub dates: Option<EmployeeDates>,
    #[serde(with = "common::converters::string_enum::option", default)]
    pub status: Option<EmployeeStatus>,
    #[serde(rename = "_links")]
    pub links: Option<EmployeeLinks>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDates {
    #[serde(with = "common::converters::date_only::option", default)]
    pub hired: Option<NaiveDate>,
    #[serde(with = "common::converters::date_only::option", default)]
    pub re_hired: Option<NaiveDate>,
    #[serde(with = "common::converters::date_only::option", default)]
    pub started: Option<NaiveDate>,
    #[serde(with = "common::converters::date_only::option", default)]
    pub terminated: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeLinks {
    #[serde(rename = "self")]
    pub self_link: Option<String>,
    pub demographics: Option<String>,
    #[serde(rename = "pay-info")]
    pub pay_info: Option<String>,
    pub badges: Option<String>,
    pub profiles: Option<String>,
    #[serde(rename = "hcm-profiles")]
    pub hcm_profiles: Option<String>,
    #[serde(rename = "hcm-fields")]
    pub hcm_fields: Option<String>,
}

/// Employment status. Values the client does not know are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeStatus {
    Active,
    Inactive,
    Terminated,
    Other(String),
}

impl EmployeeStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, EmployeeStatus::Active)
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeStatus::Active => f.write_str("Active"),
            EmployeeStatus::Inactive => f.write_str("Inactive"),
            EmployeeStatus::Terminated => f.write_str("Terminated"),
            EmployeeStatus::Other(status) => f.write_str(status),
        }
    }
}

impl FromStr for EmployeeStatus {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let status = match text.trim().to_ascii_lowercase().as_str() {
            "active" => EmployeeStatus::Active,
            "inactive" => EmployeeStatus::Inactive,
            "terminated" => EmployeeStatus::Terminated,
            _ => EmployeeStatus::Other(text.to_string()),
        };
        Ok(status)
    }
}

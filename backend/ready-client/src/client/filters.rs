use crate::query::QueryParams;

pub const EIN_ID_PARAM: &str = "ein_id";
pub const TERMINATED_PARAM: &str = "terminated";

/// Optional filters for the employee listing. Unset filters are left out
/// of the request entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub ein_id: Option<i64>,
    pub terminated: Option<bool>,
}

impl EmployeeFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_ein_id(mut self, ein_id: i64) -> Self {
        self.ein_id = Some(ein_id);
        self
    }

    pub fn terminated_only(mut self) -> Self {
        self.terminated = Some(true);
        self
    }

    pub fn active_only(mut self) -> Self {
        self.terminated = Some(false);
        self
    }

    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .push_opt(EIN_ID_PARAM, self.ein_id)
            .push_opt(TERMINATED_PARAM, self.terminated)
    }
}

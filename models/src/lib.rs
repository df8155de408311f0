//! Wire models for the UKG Ready REST API.
//!
//! Pure data structures: the records the service returns and the request
//! and response envelopes the client exchanges with it. Models have no
//! behavior beyond small derived values (entry totals, token lifetime).
//!
//! Field names are declared as the service spells them; the client matches
//! them case-insensitively on decode.

pub mod contract;
pub mod employee;
pub mod time_entry;
pub mod time_entry_set;

#[cfg(test)]
mod tests;

pub use contract::error_envelope::{ErrorEntry, ErrorEnvelope, UserMessage};
pub use contract::login::{LoginCredentials, LoginRequest, LoginResponse};
pub use contract::responses::{EmployeesResponse, TimeEntriesResponse};
pub use employee::{Employee, EmployeeDates, EmployeeLinks, EmployeeStatus};
pub use time_entry::{TimeEntry, TimeEntryNode};
pub use time_entry_set::{TimeEntrySet, TimeEntrySetEmployee};

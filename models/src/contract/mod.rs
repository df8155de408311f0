pub mod error_envelope;
pub mod login;
pub mod responses;

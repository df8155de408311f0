//! Serde field adapters for the value formats the remote service uses.
//!
//! Each adapter is attached per field with `#[serde(with = "...")]`:
//!
//! - [`string_enum`]: enums written as their `Display` text, read through `FromStr`
//! - [`enum_description`]: enums written as their [`Described`] text
//! - [`enum_display`]: enums written as their [`Displayed`] name
//! - [`date_only`]: calendar dates written as `yyyy-MM-dd`
//! - [`date_time`]: timestamps read leniently, with or without an offset

pub mod date_only;
pub mod date_time;
pub mod enum_description;
pub mod enum_display;
pub mod string_enum;

pub use enum_description::Described;
pub use enum_display::Displayed;

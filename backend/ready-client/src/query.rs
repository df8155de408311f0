//! Query-string assembly.
//!
//! Absent values are dropped entirely rather than sent as `name=`. Names
//! and values are percent-encoded per RFC 3986 (unreserved characters
//! pass through, everything else is escaped, spaces become `%20`).

use chrono::{DateTime, NaiveDate, TimeZone};
use common::converters::date_only;

/// A value that can appear in a query string.
pub trait QueryValue {
    fn to_query_value(&self) -> String;
}

impl QueryValue for bool {
    fn to_query_value(&self) -> String {
        String::from(if *self { "true" } else { "false" })
    }
}

macro_rules! display_query_value {
    ($($ty:ty),*) => {
        $(
            impl QueryValue for $ty {
                fn to_query_value(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_query_value!(i32, i64, u32, u64, usize, str, String);

impl QueryValue for NaiveDate {
    fn to_query_value(&self) -> String {
        date_only::format(self)
    }
}

impl<Tz: TimeZone> QueryValue for DateTime<Tz> {
    fn to_query_value(&self) -> String {
        date_only::format_utc(self)
    }
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn to_query_value(&self) -> String {
        (**self).to_query_value()
    }
}

/// Ordered query parameters for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, name: impl Into<String>, value: impl QueryValue) -> Self {
        self.pairs.push((name.into(), value.to_query_value()));
        self
    }

    /// Adds the parameter only when a value is present.
    pub fn push_opt<V: QueryValue>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.push(name, value),
            None => self,
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encoded query string without the leading `?`, or `None` when empty.
    pub fn encode(&self) -> Option<String> {
        if self.pairs.is_empty() {
            return None;
        }

        let encoded = self
            .pairs
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");

        Some(encoded)
    }

    /// `path` with the encoded query appended.
    pub fn append_to(&self, path: &str) -> String {
        match self.encode() {
            Some(query) if path.contains('?') => format!("{path}&{query}"),
            Some(query) => format!("{path}?{query}"),
            None => path.to_string(),
        }
    }
}

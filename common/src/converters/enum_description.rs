//! Enums written as a human-readable description.

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};

/// An enum whose wire form is a fixed description per variant.
pub trait Described: Sized + Copy + 'static {
    const VARIANTS: &'static [Self];

    fn description(&self) -> &'static str;

    /// Matches case-insensitively, ignoring surrounding whitespace.
    fn from_description(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.description().eq_ignore_ascii_case(text))
    }
}

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Described,
    S: Serializer,
{
    serializer.serialize_str(value.description())
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Described,
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    T::from_description(&text)
        .ok_or_else(|| D::Error::custom(format!("unknown description '{text}'")))
}

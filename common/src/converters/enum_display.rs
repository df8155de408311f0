//! Enums written as their display name.

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};

/// An enum whose wire form is the name shown to users.
pub trait Displayed: Sized + Copy + 'static {
    const VARIANTS: &'static [Self];

    fn display_name(&self) -> &'static str;

    fn from_display_name(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.display_name().eq_ignore_ascii_case(text))
    }
}

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Displayed,
    S: Serializer,
{
    serializer.serialize_str(value.display_name())
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Displayed,
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    T::from_display_name(&text)
        .ok_or_else(|| D::Error::custom(format!("unknown display name '{text}'")))
}

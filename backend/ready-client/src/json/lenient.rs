//! Lenient reading of a parsed JSON tree.
//!
//! [`LenientValue`] wraps a [`Value`] as a deserializer that can match
//! struct fields without regard to ASCII case and read numbers written as
//! JSON strings. Both rules apply only where the target type asks for them:
//! field matching happens for struct keys, never for map keys, so free-form
//! objects (`HashMap`s, `Value` fields) reach the target exactly as sent.
//! A string becomes a number only when a numeric field requests one.

use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::{Error, Map, Number, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Leniency {
    pub case_insensitive: bool,
    pub numbers_from_strings: bool,
}

impl Leniency {
    pub fn is_relaxed(&self) -> bool {
        self.case_insensitive || self.numbers_from_strings
    }
}

/// Field name a key binds to: an exact match first, then the first field
/// equal to it ignoring ASCII case. Unknown keys are returned unchanged.
pub fn match_field(key: String, fields: &'static [&'static str]) -> String {
    if fields.contains(&key.as_str()) {
        return key;
    }

    fields
        .iter()
        .find(|field| field.eq_ignore_ascii_case(&key))
        .map(|field| field.to_string())
        .unwrap_or(key)
}

/// Re-keys an object for a struct. When two keys land on the same field,
/// the last one visited wins.
fn match_fields(map: Map<String, Value>, fields: &'static [&'static str]) -> Map<String, Value> {
    let mut matched = Map::with_capacity(map.len());
    for (key, value) in map {
        matched.insert(match_field(key, fields), value);
    }
    matched
}

/// A JSON number spelled as a string. Whitespace and named literals
/// (`NaN`, `Infinity`) are not numbers.
pub fn parse_number(text: &str) -> Option<Number> {
    let numeric = !text.is_empty()
        && text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'-' | b'+' | b'.' | b'e' | b'E'));
    if !numeric {
        return None;
    }

    serde_json::from_str(text).ok()
}

pub struct LenientValue {
    value: Value,
    leniency: Leniency,
}

impl LenientValue {
    pub fn new(value: Value, leniency: Leniency) -> Self {
        Self { value, leniency }
    }
}

macro_rules! delegate {
    ($($method:ident)*) => {
        $(
            fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
                self.value.$method(visitor)
            }
        )*
    };
}

macro_rules! lenient_number {
    ($($method:ident)*) => {
        $(
            fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
                match self.value {
                    Value::String(text) if self.leniency.numbers_from_strings => {
                        match parse_number(&text) {
                            Some(number) => Value::Number(number).$method(visitor),
                            None => Value::String(text).$method(visitor),
                        }
                    }
                    value => value.$method(visitor),
                }
            }
        )*
    };
}

impl<'de> Deserializer<'de> for LenientValue {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        match self.value {
            Value::Array(items) => visitor.visit_seq(LenientSeq::new(items, self.leniency)),
            Value::Object(map) => visitor.visit_map(LenientMap::new(map, self.leniency)),
            value => value.deserialize_any(visitor),
        }
    }

    lenient_number! {
        deserialize_i8 deserialize_i16 deserialize_i32 deserialize_i64 deserialize_i128
        deserialize_u8 deserialize_u16 deserialize_u32 deserialize_u64 deserialize_u128
        deserialize_f32 deserialize_f64
    }

    delegate! {
        deserialize_bool deserialize_char deserialize_str deserialize_string
        deserialize_bytes deserialize_byte_buf deserialize_unit
        deserialize_identifier deserialize_ignored_any
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        match self.value {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Error> {
        self.value.deserialize_unit_struct(name, visitor)
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Error> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        match self.value {
            Value::Array(items) => visitor.visit_seq(LenientSeq::new(items, self.leniency)),
            value => value.deserialize_seq(visitor),
        }
    }

    fn deserialize_tuple<V: Visitor<'de>>(self, _len: usize, visitor: V) -> Result<V::Value, Error> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, Error> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        match self.value {
            Value::Object(map) => visitor.visit_map(LenientMap::new(map, self.leniency)),
            value => value.deserialize_map(visitor),
        }
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        match self.value {
            Value::Object(map) => {
                let map = if self.leniency.case_insensitive {
                    match_fields(map, fields)
                } else {
                    map
                };
                visitor.visit_map(LenientMap::new(map, self.leniency))
            }
            value => value.deserialize_struct(name, fields, visitor),
        }
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        self.value.deserialize_enum(name, variants, visitor)
    }
}

struct LenientSeq {
    items: std::vec::IntoIter<Value>,
    leniency: Leniency,
}

impl LenientSeq {
    fn new(items: Vec<Value>, leniency: Leniency) -> Self {
        Self {
            items: items.into_iter(),
            leniency,
        }
    }
}

impl<'de> SeqAccess<'de> for LenientSeq {
    type Error = Error;

    fn next_element_seed<T: DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, Error> {
        self.items
            .next()
            .map(|value| seed.deserialize(LenientValue::new(value, self.leniency)))
            .transpose()
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.items.len())
    }
}

struct LenientMap {
    entries: serde_json::map::IntoIter,
    pending: Option<Value>,
    leniency: Leniency,
}

impl LenientMap {
    fn new(map: Map<String, Value>, leniency: Leniency) -> Self {
        Self {
            entries: map.into_iter(),
            pending: None,
            leniency,
        }
    }
}

impl<'de> MapAccess<'de> for LenientMap {
    type Error = Error;

    fn next_key_seed<K: DeserializeSeed<'de>>(
        &mut self,
        seed: K,
    ) -> Result<Option<K::Value>, Error> {
        match self.entries.next() {
            Some((key, value)) => {
                self.pending = Some(value);
                seed.deserialize(LenientValue::new(Value::String(key), self.leniency))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<T: DeserializeSeed<'de>>(&mut self, seed: T) -> Result<T::Value, Error> {
        let value = self
            .pending
            .take()
            .ok_or_else(|| de::Error::custom("map value requested before its key"))?;
        seed.deserialize(LenientValue::new(value, self.leniency))
    }

    fn size_hint(&self) -> Option<usize> {
        self.entries.size_hint().1
    }
}

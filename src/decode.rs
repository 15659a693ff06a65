//! Best-effort decoding of JSON content into the typed content records.
//!
//! Sub-structures of the wrong shape are skipped instead of failing the whole
//! diagram. Every skip is recorded as a [`Warning`] with the dotted path of the
//! offending value:
//!
//! - a list field that is absent or `null` decodes as empty, silently
//! - a list field of any other non-list type decodes as empty, with a warning
//! - a list element that does not fit its record is dropped, with a warning

use crate::types::{is_truthy, Warning};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A decoded value together with everything that was skipped on the way
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub content: T,
    pub warnings: Vec<Warning>,
}

/// Content records that can be built from a JSON value
pub trait DecodeContent: Sized {
    /// Decode `value`, reporting skipped parts to `decoder`.
    fn decode_with(value: &Value, decoder: &mut Decoder) -> Self;

    fn from_value(value: &Value) -> Decoded<Self> {
        let mut decoder = Decoder::default();
        let content = Self::decode_with(value, &mut decoder);
        decoder.finish(content)
    }
}

/// Warning collector shared by the per-diagram decoders
#[derive(Debug, Default)]
pub struct Decoder {
    warnings: Vec<Warning>,
}

impl Decoder {
    pub fn warn(&mut self, path: &str, message: impl Into<String>) {
        self.warnings.push(Warning::new(path, message));
    }

    pub fn finish<T>(self, content: T) -> Decoded<T> {
        Decoded {
            content,
            warnings: self.warnings,
        }
    }

    /// The value as an object, or a warning
    pub fn object<'a>(&mut self, value: &'a Value, path: &str) -> Option<&'a Map<String, Value>> {
        match value {
            Value::Object(map) => Some(map),
            other => {
                self.warn(path, format!("expected an object, found {}", describe(other)));
                None
            }
        }
    }

    /// Items of the list under `key`; empty when absent or not a list
    pub fn list<'a>(&mut self, obj: &'a Map<String, Value>, key: &str, path: &str) -> &'a [Value] {
        match obj.get(key) {
            None | Some(Value::Null) => &[],
            Some(Value::Array(items)) => items,
            Some(other) => {
                self.warn(
                    &format!("{}.{}", path, key),
                    format!("expected a list, found {}", describe(other)),
                );
                &[]
            }
        }
    }

    /// Deserialize a single record, or a warning
    pub fn record<T: DeserializeOwned>(&mut self, value: &Value, path: &str) -> Option<T> {
        match T::deserialize(value) {
            Ok(record) => Some(record),
            Err(err) => {
                self.warn(path, format!("skipped: {}", err));
                None
            }
        }
    }

    /// Decode every element of the list under `key` as a flat record
    pub fn records<T: DeserializeOwned>(
        &mut self,
        obj: &Map<String, Value>,
        key: &str,
        path: &str,
    ) -> Vec<T> {
        self.records_with(obj, key, path, |_, _, _, _| Ok(()))
    }

    /// Decode every element of the list under `key`, then let `fill` populate
    /// nested parts from the element's object. An `Err` from `fill` drops the
    /// element with that message.
    pub fn records_with<T, F>(
        &mut self,
        obj: &Map<String, Value>,
        key: &str,
        path: &str,
        mut fill: F,
    ) -> Vec<T>
    where
        T: DeserializeOwned,
        F: FnMut(&mut Decoder, &mut T, &Map<String, Value>, &str) -> Result<(), String>,
    {
        let list_path = format!("{}.{}", path, key);
        let items = self.list(obj, key, path);
        let mut records = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            let item_path = format!("{}[{}]", list_path, index);
            let Some(mut record) = self.record::<T>(item, &item_path) else {
                continue;
            };
            let filled = match item {
                Value::Object(map) => fill(self, &mut record, map, &item_path),
                _ => Ok(()),
            };
            match filled {
                Ok(()) => records.push(record),
                Err(message) => self.warn(&item_path, format!("skipped: {}", message)),
            }
        }

        records
    }
}

/// Short name of a JSON value's type for warning messages
fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Scalar JSON value as text. Numbers and booleans are accepted the way a
/// template string would print them.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `deserialize_with` helper for required text fields
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    scalar_text(&value).ok_or_else(|| D::Error::custom(format!("expected text, found {}", describe(&value))))
}

/// Optional scalar as text; falsy values (`null`, `false`, `0`, `""`) are absent
pub fn truthy_text(value: &Value) -> Option<String> {
    if is_truthy(value) {
        scalar_text(value)
    } else {
        None
    }
}

/// `deserialize_with` helper for optional text fields; falsy values are absent
pub fn opt_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    if !is_truthy(&value) {
        return Ok(None);
    }
    scalar_text(&value)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("expected text, found {}", describe(&value))))
}

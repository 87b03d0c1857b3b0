use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Field values reported by the torrent client for a single torrent at one
/// polling instant.
///
/// Values are loosely typed: the client mostly reports strings (flags are
/// `"0"` or `"1"`, numbers are decimal strings) but numbers, booleans and
/// nulls are accepted too. Readers never fail, they fall back to empty or
/// `NaN` values.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct RawSnapshot(Map<String, Value>);

impl RawSnapshot {
    /// Parse a snapshot from a JSON object document.
    ///
    /// # Errors
    ///
    /// - `Error::Json` when the document is not valid JSON.
    /// - `Error::NotAnObject` when the document is valid JSON but not an
    ///   object.
    pub fn from_json(data: &str) -> Result<Self> {
        match serde_json::from_str(data)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(Error::NotAnObject {
                kind: value_kind(&other),
            }),
        }
    }

    /// Set a field value, replacing any previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Builder flavour of [`RawSnapshot::insert`].
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// The untouched value of a field, `Value::Null` when missing.
    pub fn raw(&self, field: &str) -> Value {
        self.0.get(field).cloned().unwrap_or(Value::Null)
    }

    /// The textual form of a field.
    ///
    /// Booleans are rendered the way the client encodes flags (`"1"` and
    /// `"0"`), missing and null values are rendered as an empty string.
    pub fn text(&self, field: &str) -> Cow<'_, str> {
        match self.0.get(field) {
            Some(Value::String(inner)) => Cow::Borrowed(inner.as_str()),
            Some(Value::Number(inner)) => Cow::Owned(inner.to_string()),
            Some(Value::Bool(true)) => Cow::Borrowed("1"),
            Some(Value::Bool(false)) => Cow::Borrowed("0"),
            Some(Value::Null) | None => Cow::Borrowed(""),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    /// Reads a `"0"`/`"1"` flag. Any other value yields `None`.
    pub fn flag(&self, field: &str) -> Option<bool> {
        match self.text(field).as_ref() {
            "1" => Some(true),
            "0" => Some(false),
            _ => None,
        }
    }

    /// Reads a numeric field, `NaN` when missing or not a number.
    pub fn number(&self, field: &str) -> f64 {
        match self.0.get(field) {
            Some(Value::Number(inner)) => inner.as_f64().unwrap_or(f64::NAN),
            Some(Value::String(inner)) => inner.trim().parse().unwrap_or(f64::NAN),
            _ => f64::NAN,
        }
    }
}

impl From<Map<String, Value>> for RawSnapshot {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RawSnapshot {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn should_read_flags_from_strings_and_booleans() {
        let snapshot = RawSnapshot::default()
            .with("isOpen", "1")
            .with("state", "0")
            .with("isComplete", true)
            .with("isHashChecking", "yes");
        assert_eq!(snapshot.flag("isOpen"), Some(true));
        assert_eq!(snapshot.flag("state"), Some(false));
        assert_eq!(snapshot.flag("isComplete"), Some(true));
        assert_eq!(snapshot.flag("isHashChecking"), None);
        assert_eq!(snapshot.flag("missing"), None);
    }

    #[test]
    fn should_read_numbers() {
        let snapshot = RawSnapshot::default()
            .with("bytesDone", " 512 ")
            .with("sizeBytes", 2048)
            .with("downloadRate", "fast");
        assert_eq!(snapshot.number("bytesDone"), 512.0);
        assert_eq!(snapshot.number("sizeBytes"), 2048.0);
        assert!(snapshot.number("downloadRate").is_nan());
        assert!(snapshot.number("missing").is_nan());
    }

    #[test]
    fn should_render_text() {
        let snapshot = RawSnapshot::default()
            .with("uploadRate", 0)
            .with("message", json!(null));
        assert_eq!(snapshot.text("uploadRate"), "0");
        assert_eq!(snapshot.text("message"), "");
        assert_eq!(snapshot.text("missing"), "");
    }

    #[test]
    fn should_pass_raw_values_through() {
        let snapshot = RawSnapshot::default().with("ratio", 1.5);
        assert_eq!(snapshot.raw("ratio"), json!(1.5));
        assert_eq!(snapshot.raw("missing"), Value::Null);
    }

    #[test]
    fn should_parse_json_documents() {
        let snapshot = RawSnapshot::from_json(r#"{"hash":"abc","isOpen":"1"}"#).unwrap();
        assert_eq!(snapshot.text("hash"), "abc");

        let err = RawSnapshot::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, Error::NotAnObject { kind: "an array" }));

        let err = RawSnapshot::from_json("{").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}

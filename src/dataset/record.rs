// src/dataset/record.rs

use bevy::log::warn;
use serde_json::Value;

use super::error::{DatasetError, DatasetResult};

/// Key of the identifier field. Never editable once loaded.
pub const IDENTIFIER_KEY: &str = "id";

/// A single field value as loaded from JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    /// Stored as `f64` so a failed integer parse can keep `NaN`.
    Number(f64),
    Text(String),
    /// null, arrays and nested objects. Shown as their JSON text.
    Other(Value),
}

impl FieldValue {
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Number(n) => FieldValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => FieldValue::Text(s),
            other => FieldValue::Other(other),
        }
    }

    /// Text form used by read-only displays.
    pub fn display_text(&self) -> String {
        match self {
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Number(n) => format_number(*n),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Other(v) => v.to_string(),
        }
    }

    /// Same equality as `PartialEq`, except that two NaNs compare equal.
    pub(crate) fn same_as(&self, other: &FieldValue) -> bool {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) if a.is_nan() && b.is_nan() => true,
            _ => self == other,
        }
    }
}

/// Formats a number the way the grid shows it: integers without a fraction,
/// `NaN` for failed parses.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n.is_sign_positive() { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else {
        n.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: String,
    pub value: FieldValue,
}

/// One row of the dataset, fields kept in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<Field>,
}

impl Record {
    /// Builds a record from the `index`-th element of the source array.
    ///
    /// A missing or non-string identifier is logged but kept; the record still
    /// loads and its identifier shows as JSON text.
    pub fn from_json(index: usize, value: Value) -> DatasetResult<Self> {
        let Value::Object(map) = value else {
            return Err(DatasetError::NotAnObject { index });
        };
        match map.get(IDENTIFIER_KEY) {
            Some(Value::String(_)) => {}
            Some(other) => warn!("Record {} has a non-string '{}': {}", index, IDENTIFIER_KEY, other),
            None => warn!("Record {} has no '{}' field", index, IDENTIFIER_KEY),
        }
        let fields = map
            .into_iter()
            .map(|(key, value)| Field { key, value: FieldValue::from_json(value) })
            .collect();
        Ok(Self { fields })
    }

    /// Identifier as displayed; empty when the record has none.
    pub fn id(&self) -> String {
        self.get(IDENTIFIER_KEY).map(FieldValue::display_text).unwrap_or_default()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.key == key).map(|f| &f.value)
    }

    /// Replaces (or appends) a field. Returns `true` when the stored value changed.
    /// Callers are responsible for keeping the identifier out of here.
    pub(crate) fn set(&mut self, key: &str, value: FieldValue) -> bool {
        match self.fields.iter_mut().find(|f| f.key == key) {
            Some(field) if field.value.same_as(&value) => false,
            Some(field) => {
                field.value = value;
                true
            }
            None => {
                self.fields.push(Field { key: key.to_string(), value });
                true
            }
        }
    }
}

/// Parses a JSON array body into records.
pub fn parse_records(body: &str) -> DatasetResult<Vec<Record>> {
    let value: Value = serde_json::from_str(body)?;
    records_from_value(value)
}

pub fn records_from_value(value: Value) -> DatasetResult<Vec<Record>> {
    let Value::Array(items) = value else {
        return Err(DatasetError::NotAnArray);
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| Record::from_json(index, item))
        .collect()
}

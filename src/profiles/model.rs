//! Data structures backing character profile documents.
//!
//! A profile is the persisted unit: a named, versioned, segment-keyed map of
//! field values. Segment keys and field names are unconstrained strings so
//! the representation tolerates vocabulary growth in the content-producing
//! panels without schema changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Scalar value carried by a panel control and stored in profile fields.
///
/// `Other` preserves legacy or foreign JSON values verbatim so that loading
/// and re-saving an old document never loses data a migration rule has not
/// claimed yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    Other(Value),
}

impl FieldValue {
    /// Returns the string content for text values, `None` otherwise.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(flag) => FieldValue::Bool(flag),
            Value::Number(number) => match number.as_f64() {
                Some(number) => FieldValue::Number(number),
                None => FieldValue::Other(Value::Number(number)),
            },
            Value::String(text) => FieldValue::Text(text),
            other => FieldValue::Other(other),
        }
    }
}

/// Field name to value map for one segment.
pub type SegmentFields = BTreeMap<String, FieldValue>;

/// Segment-keyed document data. Ordered maps keep the serialized form
/// deterministic across saves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileData(pub BTreeMap<String, SegmentFields>);

impl ProfileData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields collected for the given segment, if any panel contributed one.
    pub fn segment(&self, key: &str) -> Option<&SegmentFields> {
        self.0.get(key)
    }

    /// Inserts a field value, creating the segment entry on first use.
    pub fn insert_field(
        &mut self,
        segment: impl Into<String>,
        field: impl Into<String>,
        value: FieldValue,
    ) {
        self.0
            .entry(segment.into())
            .or_default()
            .insert(field.into(), value);
    }

    /// Total number of stored fields across all segments.
    pub fn field_count(&self) -> usize {
        self.0.values().map(|fields| fields.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SegmentFields)> {
        self.0.iter()
    }
}

/// The persisted unit: a named, versioned character document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterProfile {
    pub name: String,
    #[serde(rename = "schemaVersion")]
    pub schema_version: String,
    /// Refreshed on every save; absent on documents predating the stamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    pub data: ProfileData,
}

/// A document as it arrived from the persistence backend, before migration.
///
/// `data` stays an untyped JSON value here: legacy documents may hold shapes
/// (bare strings, retired segment keys) that only become the current form
/// once the schema migrator has run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    #[serde(default)]
    pub name: String,
    #[serde(
        rename = "schemaVersion",
        alias = "violet_tools_version",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub schema_version: Option<String>,
    /// Legacy stamps were free-form strings; kept untyped and re-parsed on load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Value>,
    #[serde(default)]
    pub data: Value,
}

impl RawDocument {
    /// Parses the creation stamp when it is an RFC 3339 string; legacy
    /// free-form stamps yield `None`.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let text = self.created.as_ref()?.as_str()?;
        DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|stamp| stamp.with_timezone(&Utc))
    }
}

//! Schema migration for stored character documents.
//!
//! Documents written by older releases are brought up to the current shape on
//! load by an ordered list of pure rules. Each rule handles the absence of
//! anything it expects to transform, so running the chain over any input is
//! total, and running it over an already-current document changes nothing.

mod rules;

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::warn;

use crate::profiles::{ProfileData, RawDocument, SegmentFields};

/// Schema version stamped on every document this release writes.
pub const CURRENT_SCHEMA_VERSION: &str = "2.0.0";

/// A single upgrade step. `applies_below` is the first schema version that no
/// longer needs the transform; the transform itself is pure and total over
/// the raw segment map.
pub struct MigrationRule {
    pub applies_below: &'static str,
    pub transform: fn(Map<String, Value>) -> Map<String, Value>,
}

/// Result of migrating one raw document.
#[derive(Debug, Clone)]
pub struct MigrationOutcome {
    pub data: ProfileData,
    /// True when the normalized form differs from what the backend returned,
    /// i.e. the store should write the document back.
    pub changed: bool,
}

/// Ordered rule driver: applies every rule newer than the document's version,
/// ascending, then stamps [`CURRENT_SCHEMA_VERSION`].
pub struct SchemaMigrator {
    rules: Vec<MigrationRule>,
}

impl SchemaMigrator {
    pub fn new() -> Self {
        Self {
            rules: rules::all(),
        }
    }

    #[cfg(test)]
    fn with_rules(rules: Vec<MigrationRule>) -> Self {
        Self { rules }
    }

    pub fn migrate(&self, raw: &RawDocument) -> MigrationOutcome {
        let mut working = match &raw.data {
            Value::Object(map) => map.clone(),
            Value::Null => Map::new(),
            other => {
                warn!(
                    name = %raw.name,
                    "character document data is not an object ({}), treating as empty",
                    json_kind(other)
                );
                Map::new()
            }
        };

        // Missing or unparseable versions sort as oldest, so every rule runs.
        let mut version = raw
            .schema_version
            .clone()
            .unwrap_or_else(|| "0".to_string());
        for rule in &self.rules {
            if version_lt(&version, rule.applies_below) {
                working = (rule.transform)(working);
                version = rule.applies_below.to_string();
            }
        }

        let data = typed_data(&raw.name, working);
        let changed = raw.schema_version.as_deref() != Some(CURRENT_SCHEMA_VERSION)
            || serde_json::to_value(&data).unwrap_or(Value::Null) != raw.data;
        MigrationOutcome { data, changed }
    }
}

impl Default for SchemaMigrator {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts the post-rule segment map into typed data. Segment entries that
/// are still not field maps after every rule ran are dropped rather than
/// failing the load.
fn typed_data(name: &str, working: Map<String, Value>) -> ProfileData {
    let mut segments = BTreeMap::new();
    for (segment, value) in working {
        match value {
            Value::Object(fields) => {
                let typed: SegmentFields = fields
                    .into_iter()
                    .map(|(field, value)| (field, value.into()))
                    .collect();
                segments.insert(segment, typed);
            }
            other => {
                warn!(
                    name = %name,
                    segment = %segment,
                    "dropping unmigratable segment entry ({})",
                    json_kind(&other)
                );
            }
        }
    }
    ProfileData(segments)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Orders dotted numeric versions: "1.2" < "1.10" < "2.0.0". Non-numeric
/// components sort as zero, so garbage versions behave like the oldest.
fn version_lt(a: &str, b: &str) -> bool {
    let left = version_key(a);
    let right = version_key(b);
    let len = left.len().max(right.len());
    for index in 0..len {
        let l = left.get(index).copied().unwrap_or(0);
        let r = right.get(index).copied().unwrap_or(0);
        if l != r {
            return l < r;
        }
    }
    false
}

fn version_key(version: &str) -> Vec<u64> {
    version
        .split('.')
        .map(|part| part.trim().parse::<u64>().unwrap_or(0))
        .collect()
}

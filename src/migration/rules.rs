//! The ordered upgrade rules, oldest first.

use serde_json::{json, Map, Value};

use super::MigrationRule;

pub(crate) fn all() -> Vec<MigrationRule> {
    vec![
        MigrationRule {
            applies_below: "1.3.0",
            transform: wrap_bare_text,
        },
        MigrationRule {
            applies_below: "2.0.0",
            transform: rename_nullifier,
        },
    ]
}

/// Pre-1.3.0 documents stored a segment as a bare prompt string instead of a
/// field map. Wrap it under the `text` key the current panels read.
fn wrap_bare_text(mut data: Map<String, Value>) -> Map<String, Value> {
    for value in data.values_mut() {
        if let Value::String(text) = value {
            *value = json!({ "text": std::mem::take(text) });
        }
    }
    data
}

/// The negative segment was keyed `nullifier` before 2.0.0. An existing
/// `negative` entry wins; the stale key is discarded either way.
fn rename_nullifier(mut data: Map<String, Value>) -> Map<String, Value> {
    if let Some(value) = data.remove("nullifier") {
        data.entry("negative".to_string()).or_insert(value);
    }
    data
}

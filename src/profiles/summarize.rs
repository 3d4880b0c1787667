use super::model::{CharacterProfile, FieldValue};
use crate::panels::classifier::segment_label;

/// Human-readable digest of a loaded profile, shown as the load status.
#[derive(Debug, Clone)]
pub struct ProfileSummary {
    pub highlights: Vec<String>,
    pub fields: Vec<(String, String)>,
}

impl ProfileSummary {
    pub fn new() -> Self {
        Self {
            highlights: Vec::new(),
            fields: Vec::new(),
        }
    }
}

impl Default for ProfileSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the per-segment summary for a profile: one highlight per segment
/// that carries a text preview, plus a field-count entry per segment.
pub fn summarize_profile(profile: &CharacterProfile) -> ProfileSummary {
    let mut summary = ProfileSummary::new();
    summary.highlights.push(format!(
        "Loaded '{}' (schema {})",
        profile.name, profile.schema_version
    ));
    for (segment, fields) in profile.data.iter() {
        let label = segment_label(segment).unwrap_or(segment.as_str());
        if let Some(preview) = text_preview(fields) {
            summary.highlights.push(format!("{label}: {preview}"));
        }
        summary.fields.push((
            segment.clone(),
            format!(
                "{} field{}",
                fields.len(),
                if fields.len() == 1 { "" } else { "s" }
            ),
        ));
    }
    if summary.fields.is_empty() {
        summary.highlights.push("(No character data found)".into());
    }
    summary
}

/// Preferred preview field order mirrors what panels expose: a composed
/// `text` output first, then the free-form `extra` input.
fn text_preview(fields: &super::model::SegmentFields) -> Option<&str> {
    for key in ["text", "extra"] {
        if let Some(FieldValue::Text(text)) = fields.get(key) {
            if !text.trim().is_empty() {
                return Some(text);
            }
        }
    }
    None
}

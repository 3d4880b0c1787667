//! Static classification of panel types into content segments.
//!
//! Each participating panel type declares its segment here instead of being
//! discovered by name pattern matching at runtime. A panel type absent from
//! the table is invisible to the collector and applier.

use super::{Control, ControlKind};

/// Name of the profile-selector control injected into participating panels.
/// It chooses which saved document to sync from and is never itself content.
pub const PROFILE_SELECTOR_CONTROL: &str = "character";

/// Panel-type identifier (class id or display alias) to segment key.
///
/// Display aliases resolve to the same segment as the class id so panels keep
/// syncing when the host reports them under their human-facing title.
const SEGMENT_TABLE: &[(&str, &str)] = &[
    ("QualityQueen", "quality"),
    ("Quality Queen", "quality"),
    ("SceneSeductress", "scene"),
    ("Scene Seductress", "scene"),
    ("GlamourGoddess", "glamour"),
    ("Glamour Goddess", "glamour"),
    ("BodyBard", "body"),
    ("Body Bard", "body"),
    ("AestheticAlchemist", "aesthetic"),
    ("Aesthetic Alchemist", "aesthetic"),
    ("PosePriestess", "pose"),
    ("Pose Priestess", "pose"),
    ("NegativityNullifier", "negative"),
    ("Negativity Nullifier", "negative"),
];

/// Human-facing label per segment, used in profile summaries.
const SEGMENT_LABELS: &[(&str, &str)] = &[
    ("quality", "Quality Queen"),
    ("scene", "Scene Seductress"),
    ("glamour", "Glamour Goddess"),
    ("body", "Body Bard"),
    ("aesthetic", "Aesthetic Alchemist"),
    ("pose", "Pose Priestess"),
    ("negative", "Negativity Nullifier"),
];

/// Resolves a panel type to its segment key, or `None` when the type does not
/// participate in profile sync.
pub fn segment_for(panel_type_id: &str) -> Option<&'static str> {
    SEGMENT_TABLE
        .iter()
        .find(|(type_id, _)| *type_id == panel_type_id)
        .map(|(_, segment)| *segment)
}

/// Display label for a known segment key.
pub fn segment_label(segment: &str) -> Option<&'static str> {
    SEGMENT_LABELS
        .iter()
        .find(|(key, _)| *key == segment)
        .map(|(_, label)| *label)
}

/// Whether a control carries content a profile should capture. Action
/// triggers and the profile selector itself are transient UI state.
pub fn is_content_control(control: &Control) -> bool {
    control.kind == ControlKind::Field && control.name != PROFILE_SELECTOR_CONTROL
}

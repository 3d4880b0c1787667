use crate::panels::{is_content_control, segment_for, Panel};
use crate::profiles::ProfileData;

/// Collects content-field values from every classified panel into a
/// segment-keyed document.
///
/// Panels without a segment mapping are skipped. When two panels feed the
/// same segment, later panels overwrite earlier ones for identical field
/// names; duplicate panels of one type are unusual but never an error. No
/// entry is allocated for a segment that contributed zero fields.
pub fn collect_panels(panels: &[Panel]) -> ProfileData {
    let mut data = ProfileData::new();
    for panel in panels {
        let Some(segment) = segment_for(&panel.type_id) else {
            continue;
        };
        for control in &panel.controls {
            if !is_content_control(control) {
                continue;
            }
            data.insert_field(segment, control.name.clone(), control.value.clone());
        }
    }
    data
}

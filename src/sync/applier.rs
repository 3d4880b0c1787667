use tracing::debug;

use crate::panels::{is_content_control, segment_for, Panel, RedrawSink};
use crate::profiles::ProfileData;

/// Writes stored values into every live panel with a matching segment.
/// Returns the number of fields applied.
///
/// Total over the cross product of document keys and panels: a field without
/// a matching control, a panel without a segment in the document, and a
/// segment without any live panel are all normal outcomes, never errors.
/// Zero applied fields is a valid, silent result. Stored values are applied
/// verbatim with no type coercion.
pub fn apply_profile(
    data: &ProfileData,
    panels: &mut [Panel],
    redraw: &mut dyn RedrawSink,
) -> usize {
    let mut applied = 0;
    for panel in panels.iter_mut() {
        applied += apply_to_panel(data, panel, redraw);
    }
    debug!(applied, panels = panels.len(), "applied profile data");
    applied
}

/// Single-panel apply pass, used for the panel-added trigger. Requests a
/// redraw from the host only when at least one control changed hands.
pub fn apply_to_panel(data: &ProfileData, panel: &mut Panel, redraw: &mut dyn RedrawSink) -> usize {
    let Some(segment) = segment_for(&panel.type_id) else {
        return 0;
    };
    let Some(fields) = data.segment(segment) else {
        return 0;
    };
    let mut applied = 0;
    for (name, value) in fields {
        if let Some(control) = panel.control_mut(name) {
            if !is_content_control(control) {
                continue;
            }
            control.value = value.clone();
            applied += 1;
        }
    }
    if applied > 0 {
        redraw.request_redraw(panel.id);
    }
    applied
}

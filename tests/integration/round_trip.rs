use characterbase::panels::NullRedraw;
use characterbase::profiles::{FieldValue, ProfileData};
use characterbase::sync::{apply_profile, collect_panels};

use crate::support::{body_panel, negative_panel, pose_panel, unmapped_panel, RecordingRedraw};

#[test]
fn collect_then_apply_is_a_fixed_point() {
    let mut panels = vec![
        body_panel("olive"),
        pose_panel("standing"),
        negative_panel("blurry"),
    ];
    let before = panels.clone();

    let data = collect_panels(&panels);
    // 2 body + 3 pose + 2 negative content fields; selector/action excluded.
    assert_eq!(data.field_count(), 7);

    let applied = apply_profile(&data, &mut panels, &mut NullRedraw);
    assert_eq!(applied, 7);
    assert_eq!(panels, before);
}

#[test]
fn collector_skips_transient_controls_and_unmapped_panels() {
    let panels = vec![body_panel("olive"), unmapped_panel()];
    let data = collect_panels(&panels);

    let body = data.segment("body").expect("body segment collected");
    assert!(!body.contains_key("character"));
    assert!(!body.contains_key("save_character"));
    assert!(data.segment("quality").is_none());
    // The unmapped panel contributes nothing at all.
    assert_eq!(data.iter().count(), 1);
}

#[test]
fn duplicate_panels_of_one_segment_are_last_write_wins() {
    let panels = vec![pose_panel("standing"), pose_panel("sitting")];
    let data = collect_panels(&panels);
    assert_eq!(
        data.segment("pose").unwrap().get("general_pose"),
        Some(&FieldValue::Text("sitting".into()))
    );

    // Applying back over both panels must not throw; each matching control
    // counts individually.
    let mut panels = panels;
    let applied = apply_profile(&data, &mut panels, &mut NullRedraw);
    assert_eq!(applied, 6);
    for panel in &panels {
        assert_eq!(
            panel.control("general_pose").unwrap().value,
            FieldValue::Text("sitting".into())
        );
    }
}

#[test]
fn unknown_stored_fields_do_not_disturb_valid_ones() {
    let mut data = ProfileData::new();
    data.insert_field("pose", "general_pose", "kneeling".into());
    data.insert_field("pose", "wingspan", FieldValue::Number(2.5));

    let mut panels = vec![pose_panel("standing")];
    let applied = apply_profile(&data, &mut panels, &mut NullRedraw);

    // `wingspan` matches no control and is skipped silently.
    assert_eq!(applied, 1);
    assert_eq!(
        panels[0].control("general_pose").unwrap().value,
        FieldValue::Text("kneeling".into())
    );
}

#[test]
fn applying_to_a_partial_panel_set_touches_only_the_intersection() {
    let full = vec![body_panel("olive"), pose_panel("standing")];
    let data = collect_panels(&full);

    let mut partial = vec![pose_panel("sitting")];
    let untouched = body_panel("pale");
    let mut redraw = RecordingRedraw::default();
    let applied = apply_profile(&data, &mut partial, &mut redraw);

    // Only the three pose fields exist on the partial set.
    assert_eq!(applied, 3);
    assert_eq!(
        partial[0].control("general_pose").unwrap().value,
        FieldValue::Text("standing".into())
    );
    assert_eq!(redraw.requests, vec![partial[0].id]);
    // A panel that was never passed in is, by definition, untouched.
    assert_eq!(
        untouched.control("skin_tone").unwrap().value,
        FieldValue::Text("pale".into())
    );
}

#[test]
fn zero_applied_fields_is_a_silent_outcome() {
    let mut panels = vec![unmapped_panel()];
    let mut redraw = RecordingRedraw::default();
    let applied = apply_profile(&ProfileData::new(), &mut panels, &mut redraw);
    assert_eq!(applied, 0);
    assert!(redraw.requests.is_empty());
}

#[test]
fn collector_allocates_no_entry_for_fieldless_segments() {
    use characterbase::panels::{Control, Panel, PROFILE_SELECTOR_CONTROL};

    // A classified panel whose only controls are transient.
    let panel = Panel::with_controls(
        "QualityQueen",
        vec![
            Control::field(PROFILE_SELECTOR_CONTROL, "None"),
            Control::action("refresh"),
        ],
    );
    let data = collect_panels(&[panel]);
    assert!(data.is_empty());
}

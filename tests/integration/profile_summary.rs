use characterbase::profiles::{summarize_profile, ProfileData};

use crate::StoreHarness;

#[test]
fn summaries_report_segments_with_text_previews() {
    let harness = StoreHarness::new();
    let store = harness.store();

    let mut data = ProfileData::new();
    data.insert_field("pose", "text", "standing, arms crossed".into());
    data.insert_field("pose", "general_pose_strength", 1.2.into());
    data.insert_field("negative", "extra", "blurry".into());
    data.insert_field("quality", "include_boilerplate", true.into());
    store.save("Aria", data).expect("save");

    let profile = store.get("Aria").expect("get");
    let summary = summarize_profile(&profile);

    assert_eq!(summary.highlights[0], "Loaded 'Aria' (schema 2.0.0)");
    assert!(summary
        .highlights
        .contains(&"Pose Priestess: standing, arms crossed".to_string()));
    assert!(summary
        .highlights
        .contains(&"Negativity Nullifier: blurry".to_string()));
    // Quality has no text-bearing field, so it only shows in the counts.
    assert!(summary
        .fields
        .contains(&("quality".to_string(), "1 field".to_string())));
    assert_eq!(summary.fields.len(), 3);
}

#[test]
fn empty_profiles_say_so() {
    let profile = characterbase::profiles::CharacterProfile {
        name: "Blank".into(),
        schema_version: characterbase::CURRENT_SCHEMA_VERSION.into(),
        created: None,
        data: ProfileData::new(),
    };
    let summary = summarize_profile(&profile);
    assert!(summary
        .highlights
        .contains(&"(No character data found)".to_string()));
    assert!(summary.fields.is_empty());
}

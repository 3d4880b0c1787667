use std::fs;

use characterbase::migration::CURRENT_SCHEMA_VERSION;
use characterbase::store::StoreError;

use crate::StoreHarness;

fn write_document(harness: &StoreHarness, stem: &str, contents: &str) {
    fs::create_dir_all(harness.characters_dir()).expect("create characters dir");
    fs::write(harness.document_path(stem), contents).expect("write raw document");
}

#[test]
fn legacy_nullifier_documents_upgrade_and_write_back() {
    let harness = StoreHarness::new();
    write_document(
        &harness,
        "Legacy",
        r#"{
            "name": "Legacy",
            "schemaVersion": "1.2",
            "data": { "nullifier": { "default_negative": "blurry" } }
        }"#,
    );

    let profile = harness.store().get("Legacy").expect("get Legacy");
    assert_eq!(profile.schema_version, CURRENT_SCHEMA_VERSION);
    assert!(profile.data.segment("nullifier").is_none());
    assert_eq!(
        profile
            .data
            .segment("negative")
            .unwrap()
            .get("default_negative")
            .and_then(|value| value.as_text()),
        Some("blurry")
    );

    // The persisted copy was rewritten to the normalized form.
    let on_disk = fs::read_to_string(harness.document_path("Legacy")).expect("read back");
    assert!(on_disk.contains("\"negative\""));
    assert!(!on_disk.contains("nullifier"));
    assert!(on_disk.contains(CURRENT_SCHEMA_VERSION));
}

#[test]
fn versionless_documents_run_the_whole_chain() {
    let harness = StoreHarness::new();
    write_document(
        &harness,
        "Ancient",
        r#"{ "name": "Ancient", "data": { "nullifier": "blurry, jpeg artifacts" } }"#,
    );

    let profile = harness.store().get("Ancient").expect("get Ancient");
    assert_eq!(
        profile
            .data
            .segment("negative")
            .unwrap()
            .get("text")
            .and_then(|value| value.as_text()),
        Some("blurry, jpeg artifacts")
    );
}

#[test]
fn version_stamps_from_old_releases_are_recognized() {
    let harness = StoreHarness::new();
    write_document(
        &harness,
        "Aria",
        r#"{
            "name": "Aria",
            "violet_tools_version": "1.5.0",
            "data": { "pose": { "general_pose": "standing" } }
        }"#,
    );

    let profile = harness.store().get("Aria").expect("get Aria");
    assert_eq!(profile.schema_version, CURRENT_SCHEMA_VERSION);
    assert_eq!(
        profile
            .data
            .segment("pose")
            .unwrap()
            .get("general_pose")
            .and_then(|value| value.as_text()),
        Some("standing")
    );
}

#[test]
fn corrupt_documents_degrade_to_empty_instead_of_failing() {
    let harness = StoreHarness::new();
    write_document(&harness, "Broken", "not valid json {{{");

    let profile = harness.store().get("Broken").expect("get Broken");
    assert_eq!(profile.schema_version, CURRENT_SCHEMA_VERSION);
    assert!(profile.data.is_empty());

    // The degraded load normalized the file; it parses cleanly from now on.
    let second = harness.store().get("Broken").expect("second get");
    assert_eq!(second.data, profile.data);
}

#[test]
fn loading_a_current_document_does_not_rewrite_it() {
    let harness = StoreHarness::new();
    let store = harness.store();
    let mut data = characterbase::profiles::ProfileData::new();
    data.insert_field("quality", "style", "painterly".into());
    store.save("Stable", data).expect("save");

    let first_bytes = fs::read(harness.document_path("Stable")).expect("read after save");
    let profile = store.get("Stable").expect("get");
    let second_bytes = fs::read(harness.document_path("Stable")).expect("read after get");

    assert_eq!(first_bytes, second_bytes);
    assert_eq!(profile.schema_version, CURRENT_SCHEMA_VERSION);
}

#[test]
fn missing_documents_are_not_found() {
    let harness = StoreHarness::new();
    assert!(matches!(
        harness.store().get("Ghost"),
        Err(StoreError::NotFound(_))
    ));
}

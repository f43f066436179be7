use serde_json::json;

use crate::{
    ManifestError, ManifestSources, load_constants_from_bytes, load_constants_from_path,
    load_manifest_from_bytes, load_manifest_from_path,
};

#[test]
fn manifest_bytes_must_be_an_object() {
    let map = load_manifest_from_bytes(br#"{"scheme":"a"}"#).expect("object");
    assert_eq!(map["scheme"], json!("a"));

    let err = load_manifest_from_bytes(b"[1, 2]").unwrap_err();
    assert!(matches!(
        err,
        ManifestError::NotAnObject {
            found: "array",
            ..
        }
    ));
    assert!(matches!(
        load_manifest_from_bytes(b"{not json").unwrap_err(),
        ManifestError::Json(_)
    ));
}

#[test]
fn missing_manifest_file_reports_path() {
    let dir = tempfile::tempdir().expect("tmpdir");
    let path = dir.path().join("absent.json");
    let err = load_manifest_from_path(&path).unwrap_err();
    match err {
        ManifestError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn constants_document_splits_into_sources() {
    let sources = load_constants_from_bytes(
        br#"{
            "manifest": { "scheme": "legacy" },
            "manifest2": null,
            "executionEnvironment": "bare"
        }"#,
    )
    .expect("constants");
    assert_eq!(sources.str_field(&["scheme"]), Some("legacy"));
    assert!(sources.modern().is_none());
    assert!(sources.has_any_keys());
}

#[test]
fn constants_file_round_trips_through_disk() {
    let dir = tempfile::tempdir().expect("tmpdir");
    let path = dir.path().join("constants.json");
    std::fs::write(
        &path,
        r#"{ "manifest2": { "extra": { "expoClient": { "scheme": "modern" } } } }"#,
    )
    .expect("write constants");
    let sources = load_constants_from_path(&path).expect("load constants");
    assert!(sources.legacy().is_none());
    assert_eq!(sources.str_field(&["scheme"]), Some("modern"));
}

#[test]
fn non_object_sources_are_rejected() {
    let err = ManifestSources::from_values(Some(json!("scheme")), None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "manifest must be a JSON object, found string"
    );
    let err = ManifestSources::from_values(None, Some(json!(3))).unwrap_err();
    assert!(err.to_string().starts_with("manifest2 must be"));
}

#[test]
fn field_walk_stops_at_non_objects() {
    let sources = ManifestSources::from_values(
        Some(json!({ "ios": "not-an-object" })),
        Some(json!({ "extra": { "expoClient": { "ios": { "scheme": "fallback" } } } })),
    )
    .expect("sources");
    // The legacy walk fails on the string, so the new format answers.
    assert_eq!(sources.str_field(&["ios", "scheme"]), Some("fallback"));
}

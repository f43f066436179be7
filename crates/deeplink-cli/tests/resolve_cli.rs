use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

const ENV_VARS: &[&str] = &[
    "DEEPLINK_MANIFEST",
    "DEEPLINK_MANIFEST2",
    "DEEPLINK_CONSTANTS",
    "DEEPLINK_EXECUTION_ENV",
    "DEEPLINK_PLATFORM",
    "DEEPLINK_DEV",
    "RUST_LOG",
];

fn deeplink(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("deeplink"));
    cmd.current_dir(dir);
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn resolves_primary_scheme_from_manifest() {
    let tmp = tempdir().expect("tmpdir");
    fs::write(tmp.path().join("app.json"), r#"{ "scheme": ["myapp"] }"#).unwrap();

    deeplink(tmp.path())
        .args(["--manifest", "app.json", "resolve"])
        .assert()
        .success()
        .stdout("myapp\n");
}

#[test]
fn json_output_includes_ignored_scheme_warning() {
    let tmp = tempdir().expect("tmpdir");
    fs::write(
        tmp.path().join("app.json"),
        r#"{ "scheme": ["a", "b"], "android": { "package": "com.x" } }"#,
    )
    .unwrap();

    let output = deeplink(tmp.path())
        .args(["--manifest", "app.json", "--json", "resolve"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let doc: serde_json::Value = serde_json::from_slice(&output).expect("json");
    assert_eq!(doc["data"]["scheme"], "a");
    let warning = doc["warnings"][0].as_str().expect("warning");
    assert!(warning.contains("b, com.x"), "{warning}");
}

#[test]
fn quiet_drops_warnings_from_json() {
    let tmp = tempdir().expect("tmpdir");
    fs::write(tmp.path().join("app.json"), r#"{ "scheme": ["a", "b"] }"#).unwrap();

    let output = deeplink(tmp.path())
        .args(["--manifest", "app.json", "--json", "--quiet", "resolve"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let doc: serde_json::Value = serde_json::from_slice(&output).expect("json");
    assert!(doc.get("warnings").is_none());
}

#[test]
fn missing_scheme_fails_in_standalone() {
    let tmp = tempdir().expect("tmpdir");
    fs::write(tmp.path().join("app.json"), r#"{ "name": "app" }"#).unwrap();

    deeplink(tmp.path())
        .args(["--manifest", "app.json", "--env", "standalone", "resolve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no custom scheme defined"));
}

#[test]
fn missing_manifest_is_reported() {
    let tmp = tempdir().expect("tmpdir");

    deeplink(tmp.path())
        .args(["--env", "bare", "resolve", "--scheme", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("app manifest"));
}

#[test]
fn store_client_honors_allowed_override_from_env() {
    let tmp = tempdir().expect("tmpdir");
    fs::write(
        tmp.path().join(".env"),
        "DEEPLINK_EXECUTION_ENV=store-client\nDEEPLINK_PLATFORM=ios\nDEEPLINK_DEV=true\n",
    )
    .unwrap();

    deeplink(tmp.path())
        .args(["resolve", "--scheme", "fb1696089354000816", "--silent"])
        .assert()
        .success()
        .stdout("fb1696089354000816\n");
}

#[test]
fn schemes_lists_candidates_from_constants() {
    let tmp = tempdir().expect("tmpdir");
    fs::write(
        tmp.path().join("constants.json"),
        r#"{
          "manifest": null,
          "manifest2": { "extra": { "expoClient": {
            "scheme": "root",
            "detach": { "scheme": "detached" },
            "ios": { "scheme": "iosonly", "bundleIdentifier": "com.acme" }
          } } }
        }"#,
    )
    .unwrap();

    let output = deeplink(tmp.path())
        .args(["--constants", "constants.json", "--platform", "ios", "--json", "schemes"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let doc: serde_json::Value = serde_json::from_slice(&output).expect("json");
    assert_eq!(
        doc["data"]["schemes"],
        serde_json::json!(["root", "detached", "iosonly"])
    );
    assert_eq!(doc["data"]["native_app_id"], "com.acme");
}

#[test]
fn check_reports_custom_scheme() {
    let tmp = tempdir().expect("tmpdir");
    fs::write(tmp.path().join("app.json"), r#"{ "name": "app" }"#).unwrap();

    let output = deeplink(tmp.path())
        .args(["--manifest", "app.json", "--env", "standalone", "--json", "check"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let doc: serde_json::Value = serde_json::from_slice(&output).expect("json");
    assert_eq!(doc["data"]["has_custom_scheme"], false);
    assert_eq!(doc["data"]["has_constants_manifest"], true);
    assert_eq!(doc["data"]["environment"], "standalone");
}

#[test]
fn constants_conflicts_with_manifest_flags() {
    let tmp = tempdir().expect("tmpdir");

    deeplink(tmp.path())
        .args(["--constants", "c.json", "--manifest", "m.json", "schemes"])
        .assert()
        .failure();
}

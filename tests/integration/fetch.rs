use predicates::prelude::*;
use serde_json::json;

use crate::common::{TestProject, serve_once};

fn party_pack() -> serde_json::Value {
    json!([
        {"name": "party", "reference": "https://cdn.example.com/party.png"},
        {"name": "tada", "reference": "alias:party"},
        {"name": "hooray", "reference": "alias:tada", "backupReference": "https://cdn.example.com/hooray.png"},
        {"name": "loop-a", "reference": "alias:loop-b"},
        {"name": "loop-b", "reference": "alias:loop-a"},
        {"name": "ghost", "reference": "alias:nobody"},
        {"reference": "https://cdn.example.com/nameless.png"},
        42
    ])
}

fn project_with_party_pack() -> TestProject {
    let project = TestProject::new().unwrap();
    let path = project.write_pack("party", &party_pack()).unwrap();
    project.register_packs(&[("party", path.to_str().unwrap())], Some("party")).unwrap();
    project
}

#[test]
fn test_fetch_resolves_aliases() {
    let project = project_with_party_pack();

    let output = project.run_emojipack(&["fetch", "party"]).unwrap();
    output.assert_success();

    assert_eq!(
        output.json(),
        json!({
            "party": {"reference": "https://cdn.example.com/party.png"},
            "tada": {"reference": "https://cdn.example.com/party.png"},
            "hooray": {
                "reference": "https://cdn.example.com/party.png",
                "backupReference": "https://cdn.example.com/hooray.png"
            }
        })
    );
}

#[test]
fn test_fetch_default_keyword() {
    let project = project_with_party_pack();

    let output = project.run_emojipack(&["fetch", "default", "--compact"]).unwrap();
    output.assert_success();
    assert_eq!(output.stdout.trim().lines().count(), 1);
    assert_eq!(output.json().as_object().unwrap().len(), 3);
}

#[test]
fn test_fetch_to_output_file() {
    let project = project_with_party_pack();
    let output_path = project.root().join("emoji.json");

    project
        .command()
        .args(["fetch", "party", "--output", output_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(written["tada"]["reference"], "https://cdn.example.com/party.png");
}

#[test]
fn test_fetch_unknown_location_suggests_pack() {
    let project = project_with_party_pack();

    project
        .run_emojipack(&["fetch", "pary"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("'pary' is not a registered emoji pack")
        .assert_stderr_contains("Did you mean 'party'?");
}

/// Plain paths are only reachable through the registry
#[test]
fn test_fetch_rejects_bare_path() {
    let project = project_with_party_pack();
    let path = project.root().join("packs").join("party.json");

    project
        .command()
        .args(["fetch", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a registered emoji pack"));
}

#[test]
fn test_fetch_non_list_manifest() {
    let project = TestProject::new().unwrap();
    let path = project.write_pack("object", &json!({"party": "https://x/p.png"})).unwrap();
    project.register_packs(&[("object", path.to_str().unwrap())], None).unwrap();

    project
        .run_emojipack(&["fetch", "object"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("expected a JSON array, found object");
}

#[test]
fn test_fetch_invalid_json_is_upstream_error() {
    let project = TestProject::new().unwrap();
    let path = project.write_raw_pack("broken", "[{\"name\": ").unwrap();
    project.register_packs(&[("broken", path.to_str().unwrap())], None).unwrap();

    project
        .run_emojipack(&["fetch", "broken"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Failed to fetch emoji pack manifest")
        .assert_stderr_contains("did not return valid JSON");
}

#[test]
fn test_fetch_missing_file_is_upstream_error() {
    let project = TestProject::new().unwrap();
    let missing = project.root().join("packs").join("missing.json");
    project.register_packs(&[("missing", missing.to_str().unwrap())], None).unwrap();

    project
        .run_emojipack(&["fetch", "missing"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("Failed to fetch emoji pack manifest");
}

#[test]
fn test_fetch_over_http() {
    let project = TestProject::new().unwrap();
    project.register_packs(&[], None).unwrap();
    let url = serve_once(
        200,
        r#"[{"name":"wave","reference":"https://x/wave.png"},{"name":"hi","reference":"alias:wave"}]"#,
    );

    let output = project.run_emojipack(&["fetch", &url]).unwrap();
    output.assert_success();
    assert_eq!(
        output.json(),
        json!({
            "wave": {"reference": "https://x/wave.png"},
            "hi": {"reference": "https://x/wave.png"}
        })
    );
}

#[test]
fn test_fetch_http_not_found() {
    let project = TestProject::new().unwrap();
    project.register_packs(&[], None).unwrap();
    let url = serve_once(404, "no such pack");

    project
        .run_emojipack(&["fetch", &url])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("HTTP 404")
        .assert_stderr_contains("Check that the manifest URL is correct");
}

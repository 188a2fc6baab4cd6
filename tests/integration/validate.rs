use predicates::prelude::*;
use serde_json::json;

use crate::common::TestProject;

fn project_with_pack(document: serde_json::Value) -> TestProject {
    let project = TestProject::new().unwrap();
    let path = project.write_pack("team", &document).unwrap();
    project.register_packs(&[("team", path.to_str().unwrap())], None).unwrap();
    project
}

fn messy_pack() -> serde_json::Value {
    json!([
        {"name": "ok", "reference": "https://x/ok.png"},
        {"name": "no-reference"},
        "not a record",
        {"name": "self", "reference": "alias:self"},
        {"name": "dangling", "reference": "alias:gone"}
    ])
}

#[test]
fn test_validate_text_report() {
    let project = project_with_pack(messy_pack());

    project
        .command()
        .args(["validate", "team"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 of 5 records dropped as malformed"))
        .stdout(predicate::str::contains("2 entries could not be resolved"))
        .stdout(predicate::str::contains("self: alias chain loops back to 'self'"))
        .stdout(predicate::str::contains("dangling: alias target 'gone' does not exist"))
        .stdout(predicate::str::contains("1 emoji in resolved set"));
}

#[test]
fn test_validate_json_report() {
    let project = project_with_pack(messy_pack());

    let output = project.run_emojipack(&["validate", "team", "--format", "json"]).unwrap();
    output.assert_success();

    let report = output.json();
    assert_eq!(report["valid"], false);
    assert_eq!(report["total_records"], 5);
    assert_eq!(report["dropped_records"], 2);
    assert_eq!(report["emoji"], 1);

    let kinds: Vec<&str> = report["failures"]
        .as_array()
        .unwrap()
        .iter()
        .map(|failure| failure["reason"]["kind"].as_str().unwrap())
        .collect();
    assert!(kinds.contains(&"cycle"));
    assert!(kinds.contains(&"missing_target"));
}

#[test]
fn test_validate_strict_fails_on_problems() {
    let project = project_with_pack(messy_pack());

    let output = project.run_emojipack(&["validate", "team", "--strict"]).unwrap();
    output.assert_failure().assert_stderr_contains("failed strict validation");
    assert_eq!(output.code, Some(1));
}

#[test]
fn test_validate_strict_clean_pack() {
    let project = project_with_pack(json!([
        {"name": "a", "reference": "https://x/a.png"},
        {"name": "b", "reference": "alias:a"}
    ]));

    project
        .run_emojipack(&["validate", "team", "--strict"])
        .unwrap()
        .assert_success()
        .assert_stdout_contains("✓ 2 records, all well-formed")
        .assert_stdout_contains("✓ All aliases resolved");
}

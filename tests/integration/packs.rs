use predicates::prelude::*;

use crate::common::TestProject;

/// Without a config file only the built-in pack is listed, marked default
#[test]
fn test_packs_lists_builtin() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .arg("packs")
        .assert()
        .success()
        .stdout(predicate::str::contains("* epk-emoji-store"))
        .stdout(predicate::str::contains("https://storage.googleapis.com/epk-emoji-store"));
}

/// Configured packs are merged in and `default_pack` moves the marker
#[test]
fn test_packs_json_with_config() {
    let project = TestProject::new().unwrap();
    project
        .register_packs(&[("team", "https://cdn.example.com/team.json")], Some("team"))
        .unwrap();

    let output = project.run_emojipack(&["packs", "--format", "json"]).unwrap();
    output.assert_success();

    let listing = output.json();
    let listing = listing.as_array().unwrap();
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0]["name"], "epk-emoji-store");
    assert_eq!(listing[0]["default"], false);
    assert_eq!(listing[1]["name"], "team");
    assert_eq!(listing[1]["location"], "https://cdn.example.com/team.json");
    assert_eq!(listing[1]["default"], true);
}

/// `--config` wins over `EMOJIPACK_CONFIG`
#[test]
fn test_config_flag_overrides_env() {
    let project = TestProject::new().unwrap();
    let other = project.root().join("other.toml");
    std::fs::write(&other, "[packs]\nelsewhere = \"https://x/elsewhere.json\"\n").unwrap();

    project
        .command()
        .args(["--config", other.to_str().unwrap(), "packs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("elsewhere"));
}

#[test]
fn test_unknown_default_pack_is_config_error() {
    let project = TestProject::new().unwrap();
    project.write_raw_config("default_pack = \"missing\"\n").unwrap();

    project
        .run_emojipack(&["packs"])
        .unwrap()
        .assert_failure()
        .assert_stderr_contains("default_pack 'missing' is not a registered pack");
}

#[test]
fn test_invalid_config_toml() {
    let project = TestProject::new().unwrap();
    project.write_raw_config("packs = [not toml").unwrap();

    let output = project.run_emojipack(&["packs"]).unwrap();
    output.assert_failure().assert_stderr_contains("Failed to parse config");
    assert_eq!(output.code, Some(1));
}

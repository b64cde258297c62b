//! Integration tests for the `storynest` binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn storynest(data_dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("storynest"));
    cmd.env_remove("STORYNEST_DATA_DIR")
        .env("NO_COLOR", "1")
        .arg("--data-dir")
        .arg(data_dir.path());
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("storynest"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("onboarding"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("storynest"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_args_shows_status() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    storynest(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Resume at: goals"));
    Ok(())
}

#[test]
fn cli_fresh_user_resumes_at_entry() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    storynest(&temp)
        .arg("resume")
        .assert()
        .success()
        .stdout("entry\n");
    Ok(())
}

#[test]
fn cli_answers_move_resume_forward() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    storynest(&temp)
        .args(["set", "goals", "bedtime,confidence"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved goals"));
    storynest(&temp)
        .args(["set", "childName", "Emma"])
        .assert()
        .success();
    storynest(&temp)
        .args(["set", "childAge", "4-5"])
        .assert()
        .success();

    storynest(&temp)
        .arg("resume")
        .assert()
        .success()
        .stdout("step child-gender\n");

    let saved = fs::read_to_string(temp.path().join("onboarding-data.json"))?;
    assert!(saved.contains("\"childName\": \"Emma\""));
    Ok(())
}

#[test]
fn cli_status_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    storynest(&temp)
        .args(["set", "goals", "bedtime"])
        .assert()
        .success();

    let output = storynest(&temp).args(["status", "--json"]).output()?;
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["resume_step"], "child-info");
    assert_eq!(report["completed"], 1);
    assert_eq!(report["has_progress"], true);
    Ok(())
}

#[test]
fn cli_quiet_still_prints_resume() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    storynest(&temp)
        .args(["--quiet", "resume"])
        .assert()
        .success()
        .stdout("entry\n");
    Ok(())
}

#[test]
fn cli_skip_and_reset() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    storynest(&temp)
        .args(["skip", "goals"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Next: step child-info"));

    storynest(&temp).arg("reset").assert().success();
    assert!(!temp.path().join("onboarding-data.json").exists());

    storynest(&temp)
        .arg("resume")
        .assert()
        .success()
        .stdout("entry\n");
    Ok(())
}

#[test]
fn cli_unknown_field_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    storynest(&temp)
        .args(["set", "crystals", "5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown field: crystals"));
    Ok(())
}

#[test]
fn cli_blank_answer_keeps_earlier_answer() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    storynest(&temp)
        .args(["set", "goals", "bedtime"])
        .assert()
        .success();

    storynest(&temp)
        .args(["set", "goals", ""])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must not be blank"));
    storynest(&temp)
        .args(["set", "childName", "   "])
        .assert()
        .code(2);

    storynest(&temp)
        .arg("resume")
        .assert()
        .success()
        .stdout("step child-info\n");
    Ok(())
}

#[test]
fn cli_failed_save_is_not_reported_as_saved() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "")?;

    let mut cmd = Command::new(cargo_bin("storynest"));
    cmd.env_remove("STORYNEST_DATA_DIR")
        .env("NO_COLOR", "1")
        .arg("--data-dir")
        .arg(&blocker)
        .args(["set", "childName", "Emma"]);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Saved").not())
        .stderr(predicate::str::contains("childName was not saved"));
    Ok(())
}

#[test]
fn cli_unknown_step_exits_2() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    storynest(&temp)
        .args(["skip", "wishing-well"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown step: wishing-well"));
    Ok(())
}

#[test]
fn cli_malformed_record_starts_over() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("onboarding-data.json"), "not json")?;
    storynest(&temp)
        .arg("resume")
        .assert()
        .success()
        .stdout("entry\n")
        .stderr(predicate::str::contains("starting over"));
    Ok(())
}

#[test]
fn cli_rejects_storage_override() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let outside = TempDir::new()?;
    fs::write(
        temp.path().join("config.yml"),
        format!("storage_file: {}\n", outside.path().join("outside.json").display()),
    )?;
    storynest(&temp)
        .args(["set", "childName", "Leo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
    assert!(!outside.path().join("outside.json").exists());
    assert!(!temp.path().join("onboarding-data.json").exists());
    Ok(())
}

#[test]
fn cli_malformed_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("config.yml"), "save_debounce_ms: [")?;
    storynest(&temp)
        .arg("status")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn cli_steps_lists_registry() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    storynest(&temp)
        .arg("steps")
        .assert()
        .success()
        .stdout(predicate::str::contains("aggression-frequency"))
        .stdout(predicate::str::contains("childName + childAge"));
    Ok(())
}

#[test]
fn cli_generates_completions() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("storynest"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("storynest"));
    Ok(())
}

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a Command with plain output and no provisioning delay
fn onboard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("onboard").expect("Failed to find onboard binary");
    cmd.args(["--no-color", "--submit-delay-ms", "0"]);
    cmd
}

const COMPLETE_RUN: &str = "\
set firstName Jane
set lastName Doe
set email jane@example.com
next
set companyName Acme Inc.
set companySize 11-50
set industry technology
set role ceo
next
set primaryGoal increase-productivity
check Automation
check Analytics & Reporting
set monthlyBudget 201-500
next
notify sms on
set dataProcessing yes
submit
";

#[test]
fn test_cli_shows_first_step() {
    onboard_cmd()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Step 1 of 4: Personal Information"))
        .stdout(predicate::str::contains("Progress: ●○○○ 25%"))
        .stdout(predicate::str::contains("Setup not completed."));
}

#[test]
fn test_cli_complete_run() {
    onboard_cmd()
        .write_stdin(COMPLETE_RUN)
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Updated firstName"))
        .stdout(predicate::str::contains("# Step 4 of 4: Preferences"))
        .stdout(predicate::str::contains("- **Name:** Jane Doe"))
        .stdout(predicate::str::contains("- **Role:** ceo"))
        .stdout(predicate::str::contains("- **Primary Goal:** increase productivity"))
        .stdout(predicate::str::contains(
            "- **Interested Features:** Automation, Analytics & Reporting",
        ))
        .stdout(predicate::str::contains("Creating Account..."))
        .stdout(predicate::str::contains("# Welcome aboard!"))
        .stdout(predicate::str::contains("Setup not completed.").not());
}

#[test]
fn test_cli_commands_after_completion_are_ignored() {
    let input = format!("{COMPLETE_RUN}back\nset firstName John\n");

    onboard_cmd()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Welcome aboard!"))
        .stdout(predicate::str::contains("Updated firstName").count(1));
}

#[test]
fn test_cli_json_output() {
    onboard_cmd()
        .arg("--json")
        .write_stdin(COMPLETE_RUN)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"companyName\""))
        .stdout(predicate::str::contains("Acme Inc."))
        .stdout(predicate::str::contains("\"monthlyBudget\""))
        .stdout(predicate::str::contains("201-500"));
}

#[test]
fn test_cli_script_file() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let script = temp_dir.path().join("setup.txt");
    fs::write(&script, format!("# scripted setup\n\n{COMPLETE_RUN}")).unwrap();

    onboard_cmd()
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Welcome aboard!"));
}

#[test]
fn test_cli_missing_script_file() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");

    onboard_cmd()
        .arg("--script")
        .arg(temp_dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open script"));
}

#[test]
fn test_cli_submit_requires_last_step() {
    onboard_cmd()
        .write_stdin("set dataProcessing yes\nsubmit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Setup can only be completed from the last step",
        ))
        .stdout(predicate::str::contains("Setup not completed."));
}

#[test]
fn test_cli_submit_requires_consent() {
    onboard_cmd()
        .write_stdin("next\nnext\nnext\nsubmit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Consent to data processing is required"))
        .stdout(predicate::str::contains("Welcome aboard!").not());
}

#[test]
fn test_cli_navigation_bounds() {
    onboard_cmd()
        .write_stdin("back\nnext\nnext\nnext\nnext\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Already on the first step"))
        .stdout(predicate::str::contains("Error: Already on the last step"));
}

#[test]
fn test_cli_bad_input_does_not_stop_session() {
    onboard_cmd()
        .write_stdin("dance\nset shoeSize 42\nset industry mining\nnext\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Unknown command 'dance'"))
        .stdout(predicate::str::contains("Error: Unknown field 'shoeSize'"))
        .stdout(predicate::str::contains("# Step 2 of 4: Company Details"));
}

#[test]
fn test_cli_feature_selection_messages() {
    onboard_cmd()
        .write_stdin("check automation\ncheck automation\nuncheck automation\nuncheck automation\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Selected Automation"))
        .stdout(predicate::str::contains("Error: Automation is already selected"))
        .stdout(predicate::str::contains("Success: Deselected Automation"))
        .stdout(predicate::str::contains("Error: Automation is not selected"));
}

#[test]
fn test_cli_quit() {
    onboard_cmd()
        .write_stdin("quit\nnext\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 2 of 4").not())
        .stdout(predicate::str::contains("Setup not completed."));
}

#[test]
fn test_cli_help() {
    onboard_cmd()
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Commands"))
        .stdout(predicate::str::contains("notify <email|sms|push> <on|off>"));
}

#[test]
fn test_cli_rejects_excessive_delay() {
    Command::cargo_bin("onboard")
        .expect("Failed to find onboard binary")
        .args(["--no-color", "--submit-delay-ms", "600000"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize wizard"));
}

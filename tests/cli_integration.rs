//! CLI integration tests for Slate
//!
//! These tests drive the built binary in one-shot mode, verifying the
//! printed messages, exit codes, and the fact that no state survives
//! between invocations.

use predicates::prelude::*;

/// Get a command instance for the slate binary
fn slate_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("slate"))
}

// =============================================================================
// Add
// =============================================================================

#[test]
fn test_add_prints_assigned_id_and_description() {
    slate_cmd()
        .args(["add", "Buy milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task 1 added: Buy milk"));
}

#[test]
fn test_add_trims_surrounding_whitespace() {
    slate_cmd()
        .args(["add", "  spaced out  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task 1 added: spaced out"));
}

#[test]
fn test_add_rejects_blank_description() {
    for blank in ["", "   ", "\t"] {
        slate_cmd()
            .args(["add", blank])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains(
                "Error: Task description cannot be empty",
            ));
    }
}

#[test]
fn test_add_json_emits_task_object() {
    let output = slate_cmd()
        .args(["--format", "json", "add", "Buy milk"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["description"], "Buy milk");
    assert_eq!(json["completed"], false);
}

// =============================================================================
// List
// =============================================================================

#[test]
fn test_list_on_fresh_store_reports_no_tasks() {
    slate_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_list_json_emits_empty_array() {
    slate_cmd()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

// =============================================================================
// Referencing ids (no state crosses invocations)
// =============================================================================

#[test]
fn test_complete_unknown_id_fails_with_not_found() {
    slate_cmd()
        .args(["complete", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Task with ID 1 not found"));
}

#[test]
fn test_update_unknown_id_fails_with_not_found() {
    slate_cmd()
        .args(["update", "3", "New description"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Task with ID 3 not found"));
}

#[test]
fn test_update_validates_description_before_lookup() {
    // A blank description is a validation failure even when the id
    // does not exist
    slate_cmd()
        .args(["update", "3", "   "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Task description cannot be empty",
        ));
}

#[test]
fn test_delete_unknown_id_fails_with_not_found() {
    slate_cmd()
        .args(["delete", "2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Task with ID 2 not found"));
}

// =============================================================================
// Argument handling
// =============================================================================

#[test]
fn test_non_numeric_id_is_rejected() {
    slate_cmd()
        .args(["complete", "abc"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid task ID"));
}

#[test]
fn test_unrecognized_command_exits_one() {
    slate_cmd().arg("bogus").assert().failure().code(1);
}

#[test]
fn test_flags_without_command_print_help_and_fail() {
    slate_cmd()
        .arg("--verbose")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_help_exits_zero() {
    slate_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn test_version_exits_zero() {
    slate_cmd().arg("--version").assert().success();
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn test_verbose_writes_debug_lines_to_stderr() {
    slate_cmd()
        .args(["--verbose", "add", "Buy milk"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[verbose:add]"));
}

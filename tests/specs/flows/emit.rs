//! `relay emit` specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn matching_event_runs_log_action_once() {
    let project = Project::with_flows(LOG_WRITES);

    let outcome = project
        .relay()
        .args(&["emit", "hook:tool-use", "--data", r#"{"tool_name":"Write"}"#])
        .passes()
        .stdout_has("log-writes");

    assert_eq!(outcome.stdout.matches("Tool: Write").count(), 1);
}

#[test]
fn condition_mismatch_triggers_nothing() {
    Project::with_flows(LOG_WRITES)
        .relay()
        .args(&["emit", "hook:tool-use", "--data", r#"{"tool_name":"Read"}"#])
        .passes()
        .stdout_has("No flows triggered")
        .stdout_lacks("Tool:");
}

#[test]
fn lifecycle_namespace_never_triggers() {
    let project = Project::with_flows(
        r#"
[[flows]]
name = "everything"
trigger = { pattern = "*" }
actions = [{ type = "log", message = "saw {{type}}" }]
"#,
    );

    project
        .relay()
        .args(&["emit", "flow:completed"])
        .passes()
        .stdout_has("No flows triggered");
}

#[test]
fn future_gate_records_gated_run() {
    let project = Project::with_flows(
        r#"
[[flows]]
name = "next-year"
trigger = { pattern = "deploy:completed" }
gate = { after = 2999-01-01T00:00:00Z }
actions = [{ type = "log", message = "too early" }]
"#,
    );

    let records = project
        .relay()
        .args(&["emit", "deploy:completed", "--format", "json"])
        .passes()
        .json();

    assert_eq!(records[0]["flow"], "next-year");
    assert_eq!(records[0]["gated"], "time");
    assert_eq!(records[0]["actions_executed"], 0);
}

#[test]
fn journal_action_appends_to_project_journal() {
    let project = Project::with_flows(
        r#"
[[flows]]
name = "record-deploys"
trigger = { pattern = "deploy:completed" }

[[flows.actions]]
type = "journal"
entry_type = "deploy"
title = "Deployed {{data.version}}"
summary = "via {{source}}"
"#,
    );

    project
        .relay()
        .args(&["emit", "deploy:completed", "--source", "ci", "--data", r#"{"version":"1.4.0"}"#])
        .passes();

    let journal = project.read(".relay/journal.jsonl");
    let entry: serde_json::Value = serde_json::from_str(journal.lines().next().unwrap()).unwrap();
    assert_eq!(entry["entry_type"], "deploy");
    assert_eq!(entry["title"], "Deployed 1.4.0");
    assert_eq!(entry["summary"], "via ci");
}

#[test]
fn no_journal_skips_journal_writes() {
    let project = Project::with_flows(
        r#"
[[flows]]
name = "record-deploys"
trigger = { pattern = "deploy:completed" }
actions = [{ type = "journal", title = "Deployed" }]
"#,
    );

    project
        .relay()
        .args(&["emit", "deploy:completed", "--no-journal"])
        .passes()
        .stdout_has("record-deploys")
        .stdout_lacks("failed");

    assert!(!project.path().join(".relay/journal.jsonl").exists());
}

#[test]
fn failing_command_is_counted_and_later_actions_run() {
    let project = Project::with_flows(
        r#"
[[flows]]
name = "best-effort"
trigger = { pattern = "x:go" }

[[flows.actions]]
type = "command"
command = "false"

[[flows.actions]]
type = "log"
message = "still here"
"#,
    );

    let outcome = project
        .relay()
        .args(&["emit", "x:go", "--format", "json"])
        .passes();

    assert!(outcome.stdout.starts_with("still here\n"));
    let json_start = outcome.stdout.find('[').unwrap();
    let records: serde_json::Value = serde_json::from_str(&outcome.stdout[json_start..]).unwrap();
    assert_eq!(records[0]["actions_executed"], 2);
    assert_eq!(records[0]["actions_failed"], 1);
}

#[test]
fn invalid_data_fails() {
    Project::with_flows(LOG_WRITES)
        .relay()
        .args(&["emit", "hook:tool-use", "--data", "not json"])
        .fails()
        .stderr_has("--data must be valid JSON");
}

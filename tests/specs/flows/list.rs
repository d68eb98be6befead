//! `relay flows` specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn no_flows_file_lists_nothing() {
    Project::empty()
        .relay()
        .args(&["flows"])
        .passes()
        .stdout_has("No flows");
}

#[test]
fn lists_enabled_and_disabled_flows() {
    let project = Project::with_flows(&format!(
        "{LOG_WRITES}\n{}",
        r#"
[[flows]]
name = "paused"
enabled = false
trigger = { pattern = "deploy:completed" }
"#
    ));

    project
        .relay()
        .args(&["flows"])
        .passes()
        .stdout_has("NAME")
        .stdout_has("log-writes")
        .stdout_has("paused")
        .stdout_has("deploy:completed");
}

#[test]
fn json_format_describes_each_flow() {
    let project = Project::with_flows(LOG_WRITES);

    let flows = project.relay().args(&["flows", "--format", "json"]).passes().json();

    assert_eq!(
        flows,
        serde_json::json!([{
            "name": "log-writes",
            "description": "Echo every Write tool use",
            "enabled": true,
            "pattern": "hook:*",
            "condition": "data.tool_name == \"Write\"",
            "gated": false,
            "actions": ["log"],
        }])
    );
}

#[test]
fn malformed_file_lists_nothing() {
    let project = Project::with_flows("[[flows]\nname =");

    project
        .relay()
        .args(&["flows"])
        .passes()
        .stdout_has("No flows");
}

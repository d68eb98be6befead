//! `relay check` specs

use crate::prelude::*;

#[test]
fn valid_expression_passes() {
    Project::empty()
        .relay()
        .args(&["check", r#"data.x == "y""#])
        .passes()
        .stdout_has("valid: data.x == \"y\"");
}

#[test]
fn bare_field_is_invalid() {
    Project::empty()
        .relay()
        .args(&["check", "data.x"])
        .fails()
        .stdout_has("invalid:");
}

#[test]
fn empty_expression_is_invalid() {
    Project::empty()
        .relay()
        .args(&["check", ""])
        .fails()
        .stdout_has("invalid:");
}

#[test]
fn clean_flows_file_passes() {
    Project::with_flows(LOG_WRITES)
        .relay()
        .args(&["check"])
        .passes()
        .stdout_has("1 flows loaded (1 enabled), 0 rejected");
}

#[test]
fn rejected_records_fail_the_check() {
    let project = Project::with_flows(&format!(
        "{LOG_WRITES}\n{}",
        r#"
[[flows]]
description = "no name"
trigger = { pattern = "*" }

[[flows]]
name = "never-matches"
trigger = { pattern = "*", condition = "data.x" }
"#
    ));

    project
        .relay()
        .args(&["check"])
        .fails()
        .stdout_has("rejected flow #2: missing required field: name")
        .stdout_has("flow 'never-matches': invalid condition")
        .stdout_has("2 flows loaded (2 enabled), 1 rejected");
}

#[test]
fn unparseable_flows_file_fails_the_check() {
    Project::with_flows("[[flows]\nname =")
        .relay()
        .args(&["check"])
        .fails()
        .stdout_has("flows.toml");
}

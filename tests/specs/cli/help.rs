//! CLI help specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    Project::empty()
        .relay()
        .args(&["--help"])
        .passes()
        .stdout_has("flows")
        .stdout_has("check")
        .stdout_has("emit");
}

#[test]
fn version_prints_name() {
    Project::empty()
        .relay()
        .args(&["--version"])
        .passes()
        .stdout_has("relay");
}

#[test]
fn unknown_command_fails() {
    Project::empty().relay().args(&["frobnicate"]).fails();
}

#[test]
fn emit_help_documents_data_flag() {
    use predicates::prelude::*;

    let mut cmd = assert_cmd::Command::cargo_bin("relay").unwrap();
    cmd.args(["emit", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--data").and(predicate::str::contains("--source")));
}

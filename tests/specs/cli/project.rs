//! Project root resolution specs

use crate::prelude::*;

#[test]
fn discovers_project_from_subdirectory() {
    let project = Project::with_flows(LOG_WRITES);
    project.file("src/lib/.keep", "");

    project
        .relay()
        .current_dir(&project.path().join("src/lib"))
        .args(&["flows"])
        .passes()
        .stdout_has("log-writes");
}

#[test]
fn project_flag_overrides_cwd() {
    let project = Project::with_flows(LOG_WRITES);
    let elsewhere = Project::empty();

    elsewhere
        .relay()
        .args(&["--project", project.path().to_str().unwrap(), "flows"])
        .passes()
        .stdout_has("log-writes");
}

#[test]
fn env_var_overrides_discovery() {
    let project = Project::with_flows(LOG_WRITES);
    let elsewhere = Project::empty();

    elsewhere
        .relay()
        .env("RELAY_PROJECT_ROOT", project.path())
        .args(&["flows"])
        .passes()
        .stdout_has("log-writes");
}

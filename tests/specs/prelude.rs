//! Shared helpers for CLI specs

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub use similar_asserts::assert_eq;

pub const LOG_WRITES: &str = r#"
[[flows]]
name = "log-writes"
description = "Echo every Write tool use"

[flows.trigger]
pattern = "hook:*"
condition = 'data.tool_name == "Write"'

[[flows.actions]]
type = "log"
message = "Tool: {{data.tool_name}}"
"#;

/// A throwaway project directory
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// A project whose `.relay/flows.toml` holds `flows`
    pub fn with_flows(flows: &str) -> Self {
        let project = Self::empty();
        project.file(".relay/flows.toml", flows);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, relative: &str, content: &str) {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(relative)).unwrap()
    }

    /// The relay binary, run from the project root
    pub fn relay(&self) -> CliBuilder {
        let mut cmd = Command::cargo_bin("relay").unwrap();
        cmd.current_dir(self.path()).env_remove("RELAY_PROJECT_ROOT").env_remove("RUST_LOG");
        CliBuilder { cmd }
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    pub fn passes(mut self) -> Outcome {
        let output = self.cmd.assert().success().get_output().clone();
        Outcome::from(output)
    }

    pub fn fails(mut self) -> Outcome {
        let output = self.cmd.assert().failure().get_output().clone();
        Outcome::from(output)
    }
}

pub struct Outcome {
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for Outcome {
    fn from(output: std::process::Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Outcome {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout should contain {:?}\nstdout:\n{}\nstderr:\n{}",
            needle,
            self.stdout,
            self.stderr
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout should not contain {:?}\nstdout:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr should contain {:?}\nstderr:\n{}",
            needle,
            self.stderr
        );
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}

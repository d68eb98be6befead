// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process adapter backed by tokio's `Command`

use super::{ProcessAdapter, ProcessError, ProcessOutput, ProcessRequest};
use async_trait::async_trait;
use tokio::process::Command;

/// Runs commands directly, without a shell
#[derive(Clone, Copy, Debug, Default)]
pub struct ShellProcessAdapter;

impl ShellProcessAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessAdapter for ShellProcessAdapter {
    async fn run(&self, request: ProcessRequest) -> Result<ProcessOutput, ProcessError> {
        let output = Command::new(&request.command)
            .args(&request.args)
            .current_dir(&request.cwd)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| ProcessError::SpawnFailed {
                command: request.command.clone(),
                message: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            return Err(ProcessError::NonZeroExit {
                command: request.command,
                code: output.status.code(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(ProcessOutput { stdout, stderr })
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! External process adapters

mod shell;

pub use shell::ShellProcessAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeProcessAdapter;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from process operations
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to spawn '{command}': {message}")]
    SpawnFailed { command: String, message: String },
    #[error("'{command}' exited with {}: {stderr}", exit_label(.code))]
    NonZeroExit {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

/// A command to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRequest {
    pub command: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// Captured output of a successful run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Adapter for running external commands
#[async_trait]
pub trait ProcessAdapter: Clone + Send + Sync + 'static {
    /// Run to completion. A non-zero exit is an error.
    async fn run(&self, request: ProcessRequest) -> Result<ProcessOutput, ProcessError>;
}

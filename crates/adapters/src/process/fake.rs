// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake process adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ProcessAdapter, ProcessError, ProcessOutput, ProcessRequest};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Fake process adapter for testing
///
/// Every command exits 0 unless an exit code was scripted for it.
#[derive(Clone, Default)]
pub struct FakeProcessAdapter {
    calls: Arc<Mutex<Vec<ProcessRequest>>>,
    exit_codes: Arc<Mutex<HashMap<String, i32>>>,
}

impl FakeProcessAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the exit code for a command name
    pub fn set_exit_code(&self, command: &str, code: i32) {
        self.exit_codes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(command.to_string(), code);
    }

    /// Get all recorded requests
    pub fn calls(&self) -> Vec<ProcessRequest> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl ProcessAdapter for FakeProcessAdapter {
    async fn run(&self, request: ProcessRequest) -> Result<ProcessOutput, ProcessError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());

        let code = self
            .exit_codes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&request.command)
            .copied()
            .unwrap_or(0);

        if code != 0 {
            return Err(ProcessError::NonZeroExit {
                command: request.command,
                code: Some(code),
                stderr: String::new(),
            });
        }
        Ok(ProcessOutput::default())
    }
}

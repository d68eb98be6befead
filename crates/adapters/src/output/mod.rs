// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console output adapters for `log` actions

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeOutputAdapter;

use std::io::Write;

/// Sink for operator-facing lines
pub trait OutputAdapter: Clone + Send + Sync + 'static {
    fn line(&self, text: &str);
}

/// Writes each line to stdout
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutOutput;

impl OutputAdapter for StdoutOutput {
    fn line(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        // A closed stdout must not take down the engine
        let _ = writeln!(stdout, "{}", text);
        let _ = stdout.flush();
    }
}

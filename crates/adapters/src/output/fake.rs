// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake output adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::OutputAdapter;
use std::sync::{Arc, Mutex};

/// Captures lines in memory
#[derive(Clone, Default)]
pub struct FakeOutputAdapter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl FakeOutputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl OutputAdapter for FakeOutputAdapter {
    fn line(&self, text: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(text.to_string());
    }
}

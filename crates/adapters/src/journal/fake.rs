// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake journal adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{JournalAdapter, JournalEntry, JournalError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Fake journal adapter for testing
#[derive(Clone, Default)]
pub struct FakeJournalAdapter {
    entries: Arc<Mutex<Vec<JournalEntry>>>,
    fail: Arc<AtomicBool>,
}

impl FakeJournalAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent appends fail
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Get all recorded entries, including failed attempts
    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl JournalAdapter for FakeJournalAdapter {
    async fn append(&self, entry: JournalEntry) -> Result<(), JournalError> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(entry);

        if self.fail.load(Ordering::SeqCst) {
            return Err(JournalError::WriteFailed("fake failure".to_string()));
        }
        Ok(())
    }
}

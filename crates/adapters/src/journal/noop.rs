// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op journal adapter for when journaling is disabled.

use super::{JournalAdapter, JournalEntry, JournalError};
use async_trait::async_trait;

/// Journal adapter that discards entries.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpJournalAdapter;

impl NoOpJournalAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl JournalAdapter for NoOpJournalAdapter {
    async fn append(&self, _entry: JournalEntry) -> Result<(), JournalError> {
        Ok(())
    }
}

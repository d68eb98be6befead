// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Journal adapters

mod file;
mod noop;

pub use file::{FileJournal, JOURNAL_FILE};
pub use noop::NoOpJournalAdapter;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeJournalAdapter;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from journal operations
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("journal write failed: {0}")]
    WriteFailed(String),
    #[error("journal entry could not be encoded: {0}")]
    Encode(String),
}

/// One journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub entry_type: String,
    pub title: String,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

/// Adapter for the project journal
#[async_trait]
pub trait JournalAdapter: Clone + Send + Sync + 'static {
    /// Append an entry
    async fn append(&self, entry: JournalEntry) -> Result<(), JournalError>;
}

/// The journal a project writes to, or none when journaling is disabled
#[derive(Clone, Debug)]
pub enum ProjectJournal {
    File(FileJournal),
    Disabled(NoOpJournalAdapter),
}

#[async_trait]
impl JournalAdapter for ProjectJournal {
    async fn append(&self, entry: JournalEntry) -> Result<(), JournalError> {
        match self {
            ProjectJournal::File(journal) => journal.append(entry).await,
            ProjectJournal::Disabled(journal) => journal.append(entry).await,
        }
    }
}

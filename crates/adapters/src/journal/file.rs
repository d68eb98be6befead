// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSONL journal under the project's `.relay/` directory

use super::{JournalAdapter, JournalEntry, JournalError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Location of the journal relative to the project root
pub const JOURNAL_FILE: &str = ".relay/journal.jsonl";

/// Journal that appends one JSON object per line
#[derive(Clone, Debug)]
pub struct FileJournal {
    path: PathBuf,
}

impl FileJournal {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn for_project(project_root: &Path) -> Self {
        Self::new(project_root.join(JOURNAL_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl JournalAdapter for FileJournal {
    async fn append(&self, entry: JournalEntry) -> Result<(), JournalError> {
        let mut line =
            serde_json::to_string(&entry).map_err(|e| JournalError::Encode(e.to_string()))?;
        line.push('\n');

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| JournalError::WriteFailed(e.to_string()))?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| JournalError::WriteFailed(e.to_string()))?;
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| JournalError::WriteFailed(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| JournalError::WriteFailed(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;

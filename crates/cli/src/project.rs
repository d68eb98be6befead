// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Project root discovery

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment override for the project root
pub const PROJECT_ROOT_ENV: &str = "RELAY_PROJECT_ROOT";

/// Find the project root.
///
/// Checks RELAY_PROJECT_ROOT first, then walks up from the current
/// directory looking for a `.relay` directory.
pub fn find_project_root() -> Result<PathBuf> {
    if let Ok(root) = std::env::var(PROJECT_ROOT_ENV) {
        if !root.is_empty() {
            return Ok(PathBuf::from(root));
        }
    }

    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    Ok(discover_from(&cwd))
}

/// Nearest ancestor of `start` containing `.relay/`, else `start` itself
pub fn discover_from(start: &Path) -> PathBuf {
    let mut current = start.to_path_buf();
    loop {
        if current.join(".relay").is_dir() {
            return current;
        }
        if !current.pop() {
            // No .relay directory found, use the starting directory
            return start.to_path_buf();
        }
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;

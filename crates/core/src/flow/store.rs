// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flow store: reads flow definitions from the project
//!
//! Definitions live in `<project>/.relay/flows.toml` as an array of
//! `[[flows]]` tables. Each record is validated on its own: a bad record
//! is dropped and logged, its siblings still load. A document that cannot
//! be read or parsed at all yields zero flows.

use super::types::{FlowDefinition, FlowError};
use crate::condition::{validate_condition, ConditionError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Location of the flows document relative to the project root
pub const FLOWS_FILE: &str = ".relay/flows.toml";

/// Errors reading the flows document as a whole
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

/// A record that failed validation
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// Position in the `flows` array
    pub index: usize,
    pub error: FlowError,
}

/// Outcome of loading the flows document
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub flows: Vec<FlowDefinition>,
    pub rejected: Vec<Rejection>,
    /// Kept flows whose condition can never evaluate true
    pub invalid_conditions: Vec<(String, ConditionError)>,
}

/// Parse a flows document
pub fn parse_flows(content: &str) -> Result<LoadReport, StoreError> {
    let table: toml::Table = toml::from_str(content)?;

    let records = match table.get("flows") {
        None => return Ok(LoadReport::default()),
        Some(toml::Value::Array(records)) => records.clone(),
        Some(_) => {
            return Err(StoreError::InvalidFormat(
                "'flows' must be an array of tables".to_string(),
            ))
        }
    };

    let mut report = LoadReport::default();
    for (index, value) in records.into_iter().enumerate() {
        match FlowDefinition::from_toml(value) {
            Ok(flow) => {
                if let Some(expr) = &flow.trigger.condition {
                    if let Err(e) = validate_condition(expr) {
                        report.invalid_conditions.push((flow.name.clone(), e));
                    }
                }
                report.flows.push(flow);
            }
            Err(error) => report.rejected.push(Rejection { index, error }),
        }
    }
    Ok(report)
}

/// Reads flow definitions for one project
#[derive(Debug, Clone)]
pub struct FlowStore {
    path: PathBuf,
}

impl FlowStore {
    pub fn for_project(project_root: &Path) -> Self {
        Self {
            path: project_root.join(FLOWS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate, reporting every rejected record.
    ///
    /// A missing file is an empty report, not an error.
    pub fn load_report(&self) -> Result<LoadReport, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no flows file");
                return Ok(LoadReport::default());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        parse_flows(&content)
    }

    /// Load valid flows, absorbing every error.
    ///
    /// Document errors log and yield no flows; bad records log and are skipped.
    pub fn load(&self) -> Vec<FlowDefinition> {
        let report = match self.load_report() {
            Ok(report) => report,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to load flows");
                return Vec::new();
            }
        };

        for rejection in &report.rejected {
            tracing::warn!(
                path = %self.path.display(),
                index = rejection.index,
                error = %rejection.error,
                "skipping invalid flow"
            );
        }
        for (flow, error) in &report.invalid_conditions {
            tracing::warn!(flow, error = %error, "flow condition is invalid and will never match");
        }

        tracing::info!(
            path = %self.path.display(),
            loaded = report.flows.len(),
            rejected = report.rejected.len(),
            "loaded flows"
        );
        report.flows
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

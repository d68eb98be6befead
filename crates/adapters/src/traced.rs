// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::journal::{JournalAdapter, JournalEntry, JournalError};
use crate::process::{ProcessAdapter, ProcessError, ProcessOutput, ProcessRequest};
use crate::webhook::{WebhookAdapter, WebhookError};
use async_trait::async_trait;
use serde_json::Value;
use tracing::Instrument;

/// Wrapper that adds tracing to any JournalAdapter
#[derive(Clone)]
pub struct TracedJournalAdapter<J> {
    inner: J,
}

impl<J> TracedJournalAdapter<J> {
    pub fn new(inner: J) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<J: JournalAdapter> JournalAdapter for TracedJournalAdapter<J> {
    async fn append(&self, entry: JournalEntry) -> Result<(), JournalError> {
        let span = tracing::info_span!(
            "journal.append",
            entry_type = %entry.entry_type,
            title = %entry.title
        );

        async {
            let start = std::time::Instant::now();
            let result = self.inner.append(entry).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(()) => tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "appended"),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "append failed"
                ),
            }
            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any ProcessAdapter
#[derive(Clone)]
pub struct TracedProcessAdapter<P> {
    inner: P,
}

impl<P> TracedProcessAdapter<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<P: ProcessAdapter> ProcessAdapter for TracedProcessAdapter<P> {
    async fn run(&self, request: ProcessRequest) -> Result<ProcessOutput, ProcessError> {
        let span = tracing::info_span!(
            "process.run",
            command = %request.command,
            cwd = %request.cwd.display()
        );

        async {
            tracing::info!(args = request.args.len(), "starting");

            // Precondition: cwd must exist
            if !request.cwd.exists() {
                tracing::error!("working directory does not exist");
                return Err(ProcessError::SpawnFailed {
                    command: request.command.clone(),
                    message: format!(
                        "working directory does not exist: {}",
                        request.cwd.display()
                    ),
                });
            }

            let start = std::time::Instant::now();
            let result = self.inner.run(request).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(output) => tracing::info!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    stdout_len = output.stdout.len(),
                    "process exited"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "process failed"
                ),
            }
            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any WebhookAdapter
#[derive(Clone)]
pub struct TracedWebhookAdapter<W> {
    inner: W,
}

impl<W> TracedWebhookAdapter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<W: WebhookAdapter> WebhookAdapter for TracedWebhookAdapter<W> {
    async fn post(&self, url: &str, body: &Value) -> Result<(), WebhookError> {
        let span = tracing::info_span!("webhook.post", url);

        async {
            tracing::info!("posting");

            let start = std::time::Instant::now();
            let result = self.inner.post(url, body).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "delivered"),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "delivery failed"
                ),
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action executor

use crate::ActionError;
use relay_adapters::{
    Adapters, JournalAdapter, JournalEntry, OutputAdapter, ProcessAdapter, ProcessRequest,
    WebhookAdapter,
};
use relay_core::{interpolate, interpolate_value, Action, Clock, Event, EventBus, IdGen};
use serde_json::Value;
use std::path::PathBuf;
use tracing::Instrument;

/// Executes flow actions using the configured adapters
pub struct ActionExecutor<A, C, I> {
    adapters: A,
    bus: EventBus,
    project_root: PathBuf,
    clock: C,
    id_gen: I,
}

impl<A, C, I> ActionExecutor<A, C, I>
where
    A: Adapters,
    C: Clock,
    I: IdGen,
{
    pub fn new(adapters: A, bus: EventBus, project_root: PathBuf, clock: C, id_gen: I) -> Self {
        Self {
            adapters,
            bus,
            project_root,
            clock,
            id_gen,
        }
    }

    /// Execute a single action with tracing
    ///
    /// `flow` names the owning flow; derived events are published with
    /// source `flow:<flow>`.
    pub async fn execute(&self, action: &Action, event: &Event, flow: &str) -> Result<(), ActionError> {
        let span = tracing::info_span!("action", action = action.kind(), flow, event_id = %event.id);

        async {
            tracing::debug!("executing");

            let start = std::time::Instant::now();
            let result = self.execute_inner(action, event, flow).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "completed"),
                Err(e) => tracing::warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "failed"
                ),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn execute_inner(&self, action: &Action, event: &Event, flow: &str) -> Result<(), ActionError> {
        match action {
            Action::Log { message } => {
                self.adapters.output().line(&interpolate(message, event));
                Ok(())
            }

            Action::Emit { event_type, data } => {
                let data = interpolate_value(&Value::Object(data.clone()), event);
                let derived = Event::new(event_type.clone(), format!("flow:{}", flow))
                    .with_id(self.id_gen.next())
                    .with_data(data);
                let delivered = self.bus.emit(&derived);
                tracing::debug!(event_type = %derived.event_type, delivered, "derived event emitted");
                Ok(())
            }

            Action::Journal {
                entry_type,
                title,
                summary,
            } => {
                let entry = JournalEntry {
                    entry_type: interpolate(entry_type, event),
                    title: interpolate(title, event),
                    summary: interpolate(summary, event),
                    created_at: self.clock.now(),
                };
                self.adapters.journal().append(entry).await?;
                Ok(())
            }

            Action::Webhook { url, body } => {
                let url = interpolate(url, event);
                let body = match body {
                    Some(body) => interpolate_value(body, event),
                    None => serde_json::to_value(event)?,
                };
                self.adapters.webhook().post(&url, &body).await?;
                Ok(())
            }

            Action::Command { command, args } => {
                let request = ProcessRequest {
                    command: command.clone(),
                    args: args.iter().map(|arg| interpolate(arg, event)).collect(),
                    cwd: self.project_root.clone(),
                };
                let output = self.adapters.process().run(request).await?;
                tracing::debug!(stdout_len = output.stdout.len(), "command finished");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;

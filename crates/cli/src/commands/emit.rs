// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `relay emit <type>` - run one event through the project's flows

use crate::output::{self, OutputFormat};
use anyhow::Context;
use clap::Args;
use relay_adapters::RealAdapters;
use relay_core::{Event, EventBus, ExecutionRecord};
use relay_engine::FlowEngine;
use serde::Serialize;
use std::fmt;
use std::path::Path;

#[derive(Args)]
pub struct EmitArgs {
    /// Event type, e.g. hook:tool-use
    pub event_type: String,

    /// Event source
    #[arg(long, default_value = "cli")]
    pub source: String,

    /// Event data as JSON
    #[arg(short, long, default_value = "{}")]
    pub data: String,

    /// Skip writing journal entries
    #[arg(long)]
    pub no_journal: bool,

    /// Output format for the resulting executions
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
#[serde(transparent)]
struct ExecutionRow(ExecutionRecord);

impl fmt::Display for ExecutionRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = &self.0;
        let status = match (record.gated, record.actions_failed) {
            (Some(kind), _) => format!("gated ({})", kind.as_str()),
            (None, 0) => "ok".to_string(),
            (None, _) => "failed".to_string(),
        };
        write!(
            f,
            "{:<24} {:<10} {:<8} {:<8} {}",
            record.flow, status, record.actions_executed, record.actions_failed,
            record.error.as_deref().unwrap_or("")
        )
    }
}

pub async fn handle(args: EmitArgs, project_root: &Path) -> anyhow::Result<bool> {
    let data: serde_json::Value =
        serde_json::from_str(&args.data).context("--data must be valid JSON")?;

    let bus = EventBus::new();
    let mut adapters = RealAdapters::for_project(project_root);
    if args.no_journal {
        adapters = adapters.without_journal();
    }
    let engine = FlowEngine::new(bus.clone(), project_root, adapters);
    let subscribed = engine.start().await;

    let event = Event::new(args.event_type, args.source).with_data(data);
    tracing::info!(event_type = %event.event_type, event_id = %event.id, subscribed, "emitting");
    bus.emit(&event);
    engine.wait_idle().await;

    let rows: Vec<ExecutionRow> = engine.executions().into_iter().map(ExecutionRow).collect();
    engine.stop();

    let header = format!(
        "{:<24} {:<10} {:<8} {:<8} ERROR",
        "FLOW", "STATUS", "EXECUTED", "FAILED"
    );
    output::print_list(&rows, args.format, &header, "No flows triggered");
    Ok(true)
}

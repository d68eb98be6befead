// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `relay check` - validate conditions and the flows file

use clap::Args;
use relay_core::{validate_condition, FlowStore};
use std::path::Path;

#[derive(Args)]
pub struct CheckArgs {
    /// Condition expression to validate; omit to validate the flows file
    pub expression: Option<String>,
}

pub fn handle(args: CheckArgs, project_root: &Path) -> anyhow::Result<bool> {
    match args.expression {
        Some(expression) => Ok(check_expression(&expression)),
        None => check_flows(project_root),
    }
}

fn check_expression(expression: &str) -> bool {
    match validate_condition(expression) {
        Ok(condition) => {
            println!("valid: {}", condition);
            true
        }
        Err(e) => {
            println!("invalid: {}", e);
            false
        }
    }
}

fn check_flows(project_root: &Path) -> anyhow::Result<bool> {
    let store = FlowStore::for_project(project_root);
    let report = match store.load_report() {
        Ok(report) => report,
        Err(e) => {
            println!("{}: {}", store.path().display(), e);
            return Ok(false);
        }
    };

    for rejection in &report.rejected {
        println!("rejected flow #{}: {}", rejection.index + 1, rejection.error);
    }
    for (flow, error) in &report.invalid_conditions {
        println!("flow '{}': invalid condition: {}", flow, error);
    }

    let enabled = report.flows.iter().filter(|f| f.enabled).count();
    println!(
        "{} flows loaded ({} enabled), {} rejected",
        report.flows.len(),
        enabled,
        report.rejected.len()
    );

    Ok(report.rejected.is_empty() && report.invalid_conditions.is_empty())
}

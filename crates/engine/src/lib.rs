// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! relay flow engine

mod engine;
mod error;
mod executor;

pub use engine::{FlowDeps, FlowEngine, ENGINE_SOURCE};
pub use error::ActionError;
pub use executor::ActionExecutor;

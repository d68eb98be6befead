// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for action execution

use relay_adapters::{JournalError, ProcessError, WebhookError};
use thiserror::Error;

/// Errors that can occur while executing a single action
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("journal error: {0}")]
    Journal(#[from] JournalError),
    #[error("process error: {0}")]
    Process(#[from] ProcessError),
    #[error("webhook error: {0}")]
    Webhook(#[from] WebhookError),
    #[error("cannot encode event: {0}")]
    Encode(#[from] serde_json::Error),
}

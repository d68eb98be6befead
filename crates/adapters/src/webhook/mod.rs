// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Webhook adapters

mod http;

pub use http::{HttpWebhookAdapter, WEBHOOK_TIMEOUT};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeWebhookAdapter, WebhookCall};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors from webhook delivery
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("webhook to {url} timed out")]
    Timeout { url: String },
    #[error("webhook to {url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("webhook to {url} failed: {message}")]
    Request { url: String, message: String },
}

/// Adapter for outbound HTTP notifications
#[async_trait]
pub trait WebhookAdapter: Clone + Send + Sync + 'static {
    /// POST `body` as JSON. Any non-2xx response is an error.
    async fn post(&self, url: &str, body: &Value) -> Result<(), WebhookError>;
}

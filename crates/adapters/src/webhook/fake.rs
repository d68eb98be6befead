// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake webhook adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{WebhookAdapter, WebhookError};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Recorded webhook delivery
#[derive(Debug, Clone)]
pub struct WebhookCall {
    pub url: String,
    pub body: Value,
}

/// Fake webhook adapter for testing
#[derive(Clone, Default)]
pub struct FakeWebhookAdapter {
    calls: Arc<Mutex<Vec<WebhookCall>>>,
    fail: Arc<AtomicBool>,
}

impl FakeWebhookAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent posts fail as if the endpoint returned 503
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Get all recorded deliveries
    pub fn calls(&self) -> Vec<WebhookCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl WebhookAdapter for FakeWebhookAdapter {
    async fn post(&self, url: &str, body: &Value) -> Result<(), WebhookError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(WebhookCall {
                url: url.to_string(),
                body: body.clone(),
            });

        if self.fail.load(Ordering::SeqCst) {
            return Err(WebhookError::Status {
                url: url.to_string(),
                status: 503,
            });
        }
        Ok(())
    }
}

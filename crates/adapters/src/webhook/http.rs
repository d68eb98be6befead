// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Webhook adapter backed by a blocking ureq agent

use super::{WebhookAdapter, WebhookError};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Upper bound on a single webhook request, connect through body
pub const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// POSTs JSON with a global per-request timeout
#[derive(Clone)]
pub struct HttpWebhookAdapter {
    agent: ureq::Agent,
    timeout: Duration,
}

impl HttpWebhookAdapter {
    pub fn new() -> Self {
        Self::with_timeout(WEBHOOK_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();
        Self { agent, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for HttpWebhookAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn map_error(url: &str, error: ureq::Error) -> WebhookError {
    match error {
        ureq::Error::StatusCode(status) => WebhookError::Status {
            url: url.to_string(),
            status,
        },
        ureq::Error::Timeout(_) => WebhookError::Timeout {
            url: url.to_string(),
        },
        other => WebhookError::Request {
            url: url.to_string(),
            message: other.to_string(),
        },
    }
}

#[async_trait]
impl WebhookAdapter for HttpWebhookAdapter {
    async fn post(&self, url: &str, body: &Value) -> Result<(), WebhookError> {
        let agent = self.agent.clone();
        let target = url.to_string();
        let payload = body.to_string();

        let result = tokio::task::spawn_blocking(move || {
            agent
                .post(target.as_str())
                .header("Content-Type", "application/json")
                .send(payload)
                .map(|_| ())
                .map_err(|e| map_error(&target, e))
        })
        .await;

        match result {
            Ok(outcome) => outcome,
            Err(join) => Err(WebhookError::Request {
                url: url.to_string(),
                message: join.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;

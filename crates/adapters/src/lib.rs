// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O performed by flow actions

pub mod bundle;
pub mod journal;
pub mod output;
pub mod process;
pub mod traced;
pub mod webhook;

pub use bundle::{Adapters, RealAdapters};
pub use journal::{FileJournal, JournalAdapter, JournalEntry, JournalError, NoOpJournalAdapter,
    ProjectJournal,
};
pub use output::{OutputAdapter, StdoutOutput};
pub use process::{ProcessAdapter, ProcessError, ProcessOutput, ProcessRequest, ShellProcessAdapter};
pub use traced::{TracedJournalAdapter, TracedProcessAdapter, TracedWebhookAdapter};
pub use webhook::{HttpWebhookAdapter, WebhookAdapter, WebhookError, WEBHOOK_TIMEOUT};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use bundle::FakeAdapters;
#[cfg(any(test, feature = "test-support"))]
pub use journal::FakeJournalAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use output::FakeOutputAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use process::FakeProcessAdapter;
#[cfg(any(test, feature = "test-support"))]
pub use webhook::{FakeWebhookAdapter, WebhookCall};

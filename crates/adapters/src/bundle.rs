// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The adapter set an engine runs against

use crate::journal::{FileJournal, JournalAdapter, NoOpJournalAdapter, ProjectJournal};
use crate::output::{OutputAdapter, StdoutOutput};
use crate::process::{ProcessAdapter, ShellProcessAdapter};
use crate::traced::{TracedJournalAdapter, TracedProcessAdapter, TracedWebhookAdapter};
use crate::webhook::{HttpWebhookAdapter, WebhookAdapter};
use std::path::Path;

/// Bundle of adapters for action execution
pub trait Adapters: Clone + Send + Sync + 'static {
    type Journal: JournalAdapter;
    type Process: ProcessAdapter;
    type Webhook: WebhookAdapter;
    type Output: OutputAdapter;

    fn journal(&self) -> Self::Journal;
    fn process(&self) -> Self::Process;
    fn webhook(&self) -> Self::Webhook;
    fn output(&self) -> Self::Output;
}

/// Production adapters, each wrapped for tracing
#[derive(Clone)]
pub struct RealAdapters {
    journal: TracedJournalAdapter<ProjectJournal>,
    process: TracedProcessAdapter<ShellProcessAdapter>,
    webhook: TracedWebhookAdapter<HttpWebhookAdapter>,
    output: StdoutOutput,
}

impl RealAdapters {
    pub fn for_project(project_root: &Path) -> Self {
        Self::with_webhook(project_root, HttpWebhookAdapter::new())
    }

    pub fn with_webhook(project_root: &Path, webhook: HttpWebhookAdapter) -> Self {
        Self {
            journal: TracedJournalAdapter::new(ProjectJournal::File(FileJournal::for_project(
                project_root,
            ))),
            process: TracedProcessAdapter::new(ShellProcessAdapter::new()),
            webhook: TracedWebhookAdapter::new(webhook),
            output: StdoutOutput,
        }
    }

    /// Discard journal entries instead of writing them
    pub fn without_journal(mut self) -> Self {
        self.journal = TracedJournalAdapter::new(ProjectJournal::Disabled(NoOpJournalAdapter::new()));
        self
    }
}

impl Adapters for RealAdapters {
    type Journal = TracedJournalAdapter<ProjectJournal>;
    type Process = TracedProcessAdapter<ShellProcessAdapter>;
    type Webhook = TracedWebhookAdapter<HttpWebhookAdapter>;
    type Output = StdoutOutput;

    fn journal(&self) -> Self::Journal {
        self.journal.clone()
    }

    fn process(&self) -> Self::Process {
        self.process.clone()
    }

    fn webhook(&self) -> Self::Webhook {
        self.webhook.clone()
    }

    fn output(&self) -> Self::Output {
        self.output
    }
}

#[cfg(test)]
#[path = "bundle_tests.rs"]
mod tests;

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeAdapters;

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::Adapters;
    use crate::journal::FakeJournalAdapter;
    use crate::output::FakeOutputAdapter;
    use crate::process::FakeProcessAdapter;
    use crate::webhook::FakeWebhookAdapter;

    /// Recording fakes sharing state across clones
    #[derive(Clone, Default)]
    pub struct FakeAdapters {
        pub journal: FakeJournalAdapter,
        pub process: FakeProcessAdapter,
        pub webhook: FakeWebhookAdapter,
        pub output: FakeOutputAdapter,
    }

    impl FakeAdapters {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl Adapters for FakeAdapters {
        type Journal = FakeJournalAdapter;
        type Process = FakeProcessAdapter;
        type Webhook = FakeWebhookAdapter;
        type Output = FakeOutputAdapter;

        fn journal(&self) -> Self::Journal {
            self.journal.clone()
        }

        fn process(&self) -> Self::Process {
            self.process.clone()
        }

        fn webhook(&self) -> Self::Webhook {
            self.webhook.clone()
        }

        fn output(&self) -> Self::Output {
            self.output.clone()
        }
    }
}

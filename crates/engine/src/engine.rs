// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flow engine
//!
//! On `start` the engine loads the project's flows and subscribes one bus
//! listener per enabled flow. Listeners run on the emitter's thread and
//! only apply the cheap filters (namespace, source, condition); accepted
//! deliveries are queued for a single dispatcher task that gates, runs
//! actions in order, records the run and republishes lifecycle events.

use crate::executor::ActionExecutor;
use relay_adapters::Adapters;
use relay_core::{
    Clock, ClientId, Condition, ConditionError, Event, EventBus, ExecutionHistory,
    ExecutionRecord, FlowDefinition, FlowStore, IdGen, Subscription, SystemClock, UuidIdGen,
    FLOW_COMPLETED, FLOW_TRIGGERED,
};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, Notify};
use tokio::task::JoinHandle;

/// Source stamped on `flow:triggered` and `flow:completed`
pub const ENGINE_SOURCE: &str = "flow-engine";

static NEXT_ENGINE: AtomicU64 = AtomicU64::new(1);

/// Engine dependencies, for injecting a clock and id generator
pub struct FlowDeps<A, C, I> {
    pub bus: EventBus,
    pub project_root: PathBuf,
    pub adapters: A,
    pub clock: C,
    pub id_gen: I,
}

/// A matched event waiting for the dispatcher
struct Delivery {
    flow: Arc<FlowDefinition>,
    event: Event,
    received_at: DateTime<Utc>,
}

/// Tracks deliveries that have been accepted but not fully handled
#[derive(Default)]
struct Idle {
    pending: AtomicUsize,
    notify: Notify,
}

impl Idle {
    fn begin(&self) {
        self.pending.fetch_add(1, Ordering::SeqCst);
    }

    fn finish(&self) {
        if self.pending.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.notify.notify_waiters();
        }
    }
}

struct Inner<A, C, I> {
    bus: EventBus,
    project_root: PathBuf,
    store: FlowStore,
    executor: ActionExecutor<A, C, I>,
    clock: C,
    id_gen: I,
    client_id: ClientId,
    flows: Mutex<Vec<FlowDefinition>>,
    history: Mutex<ExecutionHistory>,
    subscribed: AtomicUsize,
    idle: Arc<Idle>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

/// Loads flows, subscribes them to the bus, and runs matching actions
pub struct FlowEngine<A, C = SystemClock, I = UuidIdGen> {
    inner: Arc<Inner<A, C, I>>,
}

impl<A, C, I> Clone for FlowEngine<A, C, I> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: Adapters> FlowEngine<A> {
    pub fn new(bus: EventBus, project_root: impl Into<PathBuf>, adapters: A) -> Self {
        Self::with_deps(FlowDeps {
            bus,
            project_root: project_root.into(),
            adapters,
            clock: SystemClock,
            id_gen: UuidIdGen,
        })
    }
}

impl<A, C, I> FlowEngine<A, C, I>
where
    A: Adapters,
    C: Clock,
    I: IdGen,
{
    pub fn with_deps(deps: FlowDeps<A, C, I>) -> Self {
        let client_id = ClientId(format!(
            "flow-engine-{}",
            NEXT_ENGINE.fetch_add(1, Ordering::Relaxed)
        ));
        let executor = ActionExecutor::new(
            deps.adapters,
            deps.bus.clone(),
            deps.project_root.clone(),
            deps.clock.clone(),
            deps.id_gen.clone(),
        );
        Self {
            inner: Arc::new(Inner {
                store: FlowStore::for_project(&deps.project_root),
                bus: deps.bus,
                project_root: deps.project_root,
                executor,
                clock: deps.clock,
                id_gen: deps.id_gen,
                client_id,
                flows: Mutex::new(Vec::new()),
                history: Mutex::new(ExecutionHistory::new()),
                subscribed: AtomicUsize::new(0),
                idle: Arc::new(Idle::default()),
                worker: Mutex::new(None),
            }),
        }
    }

    /// Check a condition expression without loading any flows
    pub fn validate_condition(expression: &str) -> Result<Condition, ConditionError> {
        relay_core::validate_condition(expression)
    }

    pub fn project_root(&self) -> &Path {
        &self.inner.project_root
    }

    /// Subscription owner for everything this engine registers
    pub fn client_id(&self) -> &ClientId {
        &self.inner.client_id
    }

    /// (Re)load flows and subscribe every enabled one.
    ///
    /// Any previous run is stopped and drained first. Returns the number
    /// of flows subscribed.
    pub async fn start(&self) -> usize {
        self.stop();
        let previous = self
            .inner
            .worker
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take();
        if let Some(handle) = previous {
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "previous flow dispatcher failed");
            }
        }

        let flows = self.inner.store.load();
        self.inner
            .history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();

        if self.inner.bus.is_destroyed() {
            tracing::warn!("event bus destroyed, no flows subscribed");
            *self.inner.flows.lock().unwrap_or_else(|e| e.into_inner()) = flows;
            return 0;
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let mut subscribed = 0;
        for flow in flows.iter().filter(|f| f.enabled) {
            for event_type in flow.self_triggering_emits() {
                tracing::warn!(
                    flow = %flow.name,
                    event_type,
                    "emit action matches its own trigger and may loop"
                );
            }
            let definition = Arc::new(flow.clone());
            let tx = tx.clone();
            let idle = Arc::clone(&self.inner.idle);
            let clock = self.inner.clock.clone();

            let subscription = Subscription::new(
                self.inner.client_id.0.clone(),
                vec![flow.pattern()],
                move |event: &Event| {
                    if !definition.accepts(event) {
                        return;
                    }
                    idle.begin();
                    let delivery = Delivery {
                        flow: Arc::clone(&definition),
                        event: event.clone(),
                        received_at: clock.now(),
                    };
                    if tx.send(delivery).is_err() {
                        idle.finish();
                    }
                },
            )
            .with_description(format!("flow {}", flow.name));

            self.inner.bus.subscribe(subscription);
            tracing::debug!(flow = %flow.name, pattern = %flow.trigger.pattern, "flow subscribed");
            subscribed += 1;
        }
        drop(tx);

        tracing::info!(
            loaded = flows.len(),
            subscribed,
            client = %self.inner.client_id.0,
            "flow engine started"
        );

        *self.inner.flows.lock().unwrap_or_else(|e| e.into_inner()) = flows;
        self.inner.subscribed.store(subscribed, Ordering::SeqCst);

        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move { inner.dispatch(rx).await });
        *self.inner.worker.lock().unwrap_or_else(|e| e.into_inner()) = Some(handle);

        subscribed
    }

    /// Unsubscribe everything this engine registered.
    ///
    /// Queued deliveries still drain. Calling `stop` twice is a no-op.
    pub fn stop(&self) {
        let removed = self.inner.bus.unsubscribe(&self.inner.client_id);
        let previous = self.inner.subscribed.swap(0, Ordering::SeqCst);
        if removed > 0 || previous > 0 {
            tracing::info!(removed, "flow engine stopped");
        }
    }

    /// Resolve once every accepted delivery has been fully handled,
    /// including deliveries caused by `emit` actions along the way.
    pub async fn wait_idle(&self) {
        let idle = &self.inner.idle;
        loop {
            let notified = idle.notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if idle.pending.load(Ordering::SeqCst) == 0 {
                return;
            }
            notified.await;
        }
    }

    /// Every structurally valid flow from the last start, enabled or not
    pub fn flows(&self) -> Vec<FlowDefinition> {
        self.inner
            .flows
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Execution records in append order
    pub fn executions(&self) -> Vec<ExecutionRecord> {
        self.inner
            .history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .records()
    }

    pub fn subscribed_count(&self) -> usize {
        self.inner.subscribed.load(Ordering::SeqCst)
    }
}

impl<A, C, I> Inner<A, C, I>
where
    A: Adapters,
    C: Clock,
    I: IdGen,
{
    async fn dispatch(&self, mut rx: mpsc::UnboundedReceiver<Delivery>) {
        while let Some(delivery) = rx.recv().await {
            self.run(&delivery).await;
            self.idle.finish();
        }
        tracing::debug!(client = %self.client_id.0, "flow dispatcher exited");
    }

    async fn run(&self, delivery: &Delivery) {
        let (flow, event) = (&delivery.flow, &delivery.event);
        // Gate on delivery time, not dequeue time
        let mut record = ExecutionRecord::open(&flow.name, event, delivery.received_at);
        record.gated = flow.gate.as_ref().and_then(|gate| gate.check(record.started_at));

        let mut triggered = json!({ "flow_name": flow.name });
        if let Some(kind) = record.gated {
            triggered["gated"] = Value::from(kind.as_str());
        }
        self.publish(FLOW_TRIGGERED, triggered);

        match record.gated {
            Some(kind) => {
                tracing::info!(
                    flow = %flow.name,
                    event_id = %event.id,
                    gated = kind.as_str(),
                    "flow gated"
                );
            }
            None => {
                tracing::info!(
                    flow = %flow.name,
                    event_type = %event.event_type,
                    event_id = %event.id,
                    actions = flow.actions.len(),
                    "flow triggered"
                );

                for action in &flow.actions {
                    record.actions_executed += 1;
                    if let Err(e) = self.executor.execute(action, event, &flow.name).await {
                        record.actions_failed += 1;
                        tracing::warn!(
                            flow = %flow.name,
                            action = action.kind(),
                            error = %e,
                            "action failed"
                        );
                        if record.error.is_none() {
                            record.error = Some(e.to_string());
                        }
                    }
                }

                self.publish(
                    FLOW_COMPLETED,
                    json!({
                        "flow_name": flow.name,
                        "actions_executed": record.actions_executed,
                        "actions_failed": record.actions_failed,
                    }),
                );
                record.completed_at = Some(self.clock.now());
            }
        }

        let evicted = self
            .history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(record);
        if let Some(old) = evicted {
            tracing::trace!(flow = %old.flow, event_id = %old.trigger_event_id, "execution evicted");
        }
    }

    fn publish(&self, event_type: &str, data: Value) {
        let event = Event::new(event_type, ENGINE_SOURCE)
            .with_id(self.id_gen.next())
            .with_data(data);
        self.bus.emit(&event);
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;

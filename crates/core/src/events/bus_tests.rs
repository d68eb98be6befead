// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::events::EventPattern;
use std::sync::Mutex;

/// Subscription that records the types it receives
fn recorder(client: &str, pattern: &str) -> (Subscription, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let sub = Subscription::new(client, vec![EventPattern::new(pattern)], move |e: &Event| {
        sink.lock().unwrap().push(e.event_type.clone());
    });
    (sub, seen)
}

#[test]
fn emit_to_matching_subscribers() {
    let bus = EventBus::new();
    let (sub, seen) = recorder("deploy-watcher", "deploy:*");
    bus.subscribe(sub);

    assert_eq!(bus.emit(&Event::new("deploy:completed", "ci")), 1);
    assert_eq!(*seen.lock().unwrap(), vec!["deploy:completed"]);
}

#[test]
fn non_matching_events_not_delivered() {
    let bus = EventBus::new();
    let (sub, seen) = recorder("deploy-watcher", "deploy:*");
    bus.subscribe(sub);

    assert_eq!(bus.emit(&Event::new("hook:tool-use", "claude")), 0);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn callback_runs_once_even_when_several_patterns_match() {
    let bus = EventBus::new();
    let count = Arc::new(Mutex::new(0));
    let sink = Arc::clone(&count);
    bus.subscribe(Subscription::new(
        "multi",
        vec![EventPattern::new("*"), EventPattern::new("hook:*")],
        move |_| *sink.lock().unwrap() += 1,
    ));

    bus.emit(&Event::new("hook:tool-use", "claude"));
    assert_eq!(*count.lock().unwrap(), 1);
}

#[test]
fn shared_patterns_are_not_deduplicated() {
    let bus = EventBus::new();
    let (a, seen_a) = recorder("a", "*");
    let (b, seen_b) = recorder("b", "*");
    bus.subscribe(a);
    bus.subscribe(b);

    assert_eq!(bus.emit(&Event::new("x:y", "test")), 2);
    assert_eq!(seen_a.lock().unwrap().len(), 1);
    assert_eq!(seen_b.lock().unwrap().len(), 1);
}

#[test]
fn panicking_subscriber_does_not_block_others() {
    let bus = EventBus::new();
    bus.subscribe(Subscription::new(
        "faulty",
        vec![EventPattern::new("*")],
        |_| panic!("boom"),
    ));
    let (sub, seen) = recorder("healthy", "*");
    bus.subscribe(sub);

    assert_eq!(bus.emit(&Event::new("x:y", "test")), 1);
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn unsubscribe_removes_all_client_subscriptions() {
    let bus = EventBus::new();
    let (a1, _) = recorder("engine", "a:*");
    let (a2, _) = recorder("engine", "b:*");
    let (other, _) = recorder("other", "*");
    bus.subscribe(a1);
    bus.subscribe(a2);
    bus.subscribe(other);

    assert_eq!(bus.subscriber_count(), 3);
    assert_eq!(bus.unsubscribe(&ClientId("engine".to_string())), 2);
    assert_eq!(bus.subscriber_count(), 1);
    assert_eq!(bus.clients(), vec![ClientId("other".to_string())]);

    // Second call is a no-op
    assert_eq!(bus.unsubscribe(&ClientId("engine".to_string())), 0);
}

#[test]
fn callbacks_may_emit_reentrantly() {
    let bus = EventBus::new();
    let inner = bus.clone();
    bus.subscribe(Subscription::new(
        "relay",
        vec![EventPattern::new("ping")],
        move |_| {
            inner.emit(&Event::new("pong", "relay"));
        },
    ));
    let (sub, seen) = recorder("listener", "pong");
    bus.subscribe(sub);

    bus.emit(&Event::new("ping", "test"));
    assert_eq!(*seen.lock().unwrap(), vec!["pong"]);
}

#[test]
fn destroy_drops_subscriptions_and_silences_emit() {
    let bus = EventBus::new();
    let (sub, seen) = recorder("c", "*");
    bus.subscribe(sub);

    bus.destroy();
    assert!(bus.is_destroyed());
    assert_eq!(bus.subscriber_count(), 0);
    assert_eq!(bus.emit(&Event::new("x:y", "test")), 0);

    let (late, _) = recorder("late", "*");
    bus.subscribe(late);
    assert_eq!(bus.subscriber_count(), 0);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn clone_shares_state() {
    let bus1 = EventBus::new();
    let bus2 = bus1.clone();

    let (sub, _) = recorder("test-sub", "*");
    bus1.subscribe(sub);

    assert_eq!(bus1.subscriber_count(), 1);
    assert_eq!(bus2.subscriber_count(), 1);
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Template interpolation against events

use crate::event::Event;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// Regex pattern for {{path}} - this is a constant valid pattern
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([^{}]*?)\s*\}\}").expect("constant regex pattern is valid")
});

/// Replace every `{{path}}` with the resolved value from the event.
///
/// Paths follow the condition grammar (`type`, `source`, `data.a.b`).
/// Unresolvable paths become the empty string.
pub fn interpolate(template: &str, event: &Event) -> String {
    if !template.contains("{{") {
        return template.to_string();
    }

    PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures| {
            event.resolve(&caps[1]).unwrap_or_default()
        })
        .into_owned()
}

/// Interpolate every string leaf of a JSON value
pub fn interpolate_value(value: &Value, event: &Event) -> Value {
    match value {
        Value::String(s) => Value::String(interpolate(s, event)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| interpolate_value(item, event))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), interpolate_value(v, event)))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;

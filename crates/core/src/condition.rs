// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trigger condition language
//!
//! A condition is exactly three tokens: `<field> <op> "<value>"`.
//!
//! - field: `type`, `source`, or `data.<key>[.<key>...]`
//! - op: `==`, `!=`, `contains`
//! - value: a double-quoted string (no escapes)
//!
//! Evaluation never fails: anything that does not parse is `false`.
//! [`validate_condition`] reports why an expression is rejected.

use crate::event::Event;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Why an expression is not a valid condition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionError {
    #[error("condition is empty")]
    Empty,
    #[error("'{0}' is a bare field; expected <field> <op> \"<value>\", e.g. {0} == \"value\"")]
    BareField(String),
    #[error("{0} is a bare literal; a condition must start with type, source or data.<key>")]
    BareLiteral(String),
    #[error("unknown field '{0}'; expected type, source or data.<key>")]
    UnknownField(String),
    #[error("unknown operator '{0}'; expected ==, != or contains")]
    UnknownOperator(String),
    #[error("missing quoted value after '{0}'")]
    MissingValue(String),
    #[error("value must be a double-quoted string, got {0}")]
    UnquotedValue(String),
    #[error("unexpected input after value: {0}")]
    TrailingInput(String),
}

/// Comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Contains,
}

impl Operator {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "==" => Some(Operator::Eq),
            "!=" => Some(Operator::Ne),
            "contains" => Some(Operator::Contains),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Contains => "contains",
        }
    }
}

/// A parsed condition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub field: String,
    pub op: Operator,
    pub value: String,
}

impl Condition {
    /// Evaluate against an event.
    ///
    /// An unresolved field is never `==` and never `contains`, and is `!=`
    /// every value.
    pub fn matches(&self, event: &Event) -> bool {
        let resolved = event.resolve(&self.field);
        match self.op {
            Operator::Eq => resolved.as_deref() == Some(self.value.as_str()),
            Operator::Ne => resolved.as_deref() != Some(self.value.as_str()),
            Operator::Contains => resolved.is_some_and(|v| v.contains(&self.value)),
        }
    }
}

impl FromStr for Condition {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ConditionError::Empty);
        }
        if input.starts_with('"') || input.starts_with('\'') {
            return Err(ConditionError::BareLiteral(input.to_string()));
        }

        let (field, rest) = split_token(input);
        if !is_field(field) {
            return Err(ConditionError::UnknownField(field.to_string()));
        }
        if rest.is_empty() {
            return Err(ConditionError::BareField(field.to_string()));
        }

        let (op_token, rest) = split_token(rest);
        let op = Operator::parse(op_token)
            .ok_or_else(|| ConditionError::UnknownOperator(op_token.to_string()))?;
        if rest.is_empty() {
            return Err(ConditionError::MissingValue(op_token.to_string()));
        }

        let quoted = rest
            .strip_prefix('"')
            .ok_or_else(|| ConditionError::UnquotedValue(rest.to_string()))?;
        let close = quoted
            .find('"')
            .ok_or_else(|| ConditionError::UnquotedValue(rest.to_string()))?;
        let (value, tail) = quoted.split_at(close);
        let tail = tail[1..].trim();
        if !tail.is_empty() {
            return Err(ConditionError::TrailingInput(tail.to_string()));
        }

        Ok(Condition {
            field: field.to_string(),
            op,
            value: value.to_string(),
        })
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} \"{}\"", self.field, self.op.as_str(), self.value)
    }
}

/// Split off the first whitespace-delimited token
fn split_token(input: &str) -> (&str, &str) {
    match input.find(char::is_whitespace) {
        Some(idx) => (&input[..idx], input[idx..].trim_start()),
        None => (input, ""),
    }
}

fn is_field(token: &str) -> bool {
    match token {
        "type" | "source" => true,
        _ => token
            .strip_prefix("data.")
            .is_some_and(|rest| rest.split('.').all(|seg| !seg.is_empty())),
    }
}

/// Check an expression at authoring time
pub fn validate_condition(expression: &str) -> Result<Condition, ConditionError> {
    expression.parse()
}

/// Evaluate an expression against an event; malformed expressions are `false`
pub fn evaluate(expression: &str, event: &Event) -> bool {
    match expression.parse::<Condition>() {
        Ok(condition) => condition.matches(event),
        Err(e) => {
            tracing::trace!(expression, error = %e, "condition did not parse");
            false
        }
    }
}

#[cfg(test)]
#[path = "condition_tests.rs"]
mod tests;

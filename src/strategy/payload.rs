//! Payload extraction helpers for strategies.
//!
//! A payload is either the bare value (`true`, `"abc"`, `4.0`) or an object
//! carrying it under a named field (`{"hovered": true}`).

use super::result::{InteractionResult, INVALID_PAYLOAD};
use crate::core::EngineError;
use serde_json::Value;

static MISSING: Value = Value::Null;

fn field<'a>(payload: &'a Value, name: &str) -> &'a Value {
    match payload {
        Value::Object(map) => map.get(name).unwrap_or(&MISSING),
        other => other,
    }
}

pub fn bool_field(kind: &str, payload: &Value, name: &str) -> Result<bool, EngineError> {
    field(payload, name)
        .as_bool()
        .ok_or_else(|| EngineError::invalid_payload(kind, &format!("a boolean `{name}`")))
}

pub fn str_field<'a>(kind: &str, payload: &'a Value, name: &str) -> Result<&'a str, EngineError> {
    field(payload, name)
        .as_str()
        .ok_or_else(|| EngineError::invalid_payload(kind, &format!("a string `{name}`")))
}

pub fn number_field(kind: &str, payload: &Value, name: &str) -> Result<f64, EngineError> {
    field(payload, name)
        .as_f64()
        .filter(|n| n.is_finite())
        .ok_or_else(|| EngineError::invalid_payload(kind, &format!("a number `{name}`")))
}

/// Log a payload error and turn it into a prevented result.
pub fn reject(err: &EngineError) -> InteractionResult {
    tracing::warn!("{err}");
    InteractionResult::prevented(INVALID_PAYLOAD)
}

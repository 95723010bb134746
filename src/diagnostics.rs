//! Rendering helpers for values and accumulated errors.

use serde_json::Value;

use crate::error::ValidationErrors;

/// Classifies the runtime kind of a possibly-absent value.
///
/// Used by type-mismatch messages. Absence (the `undefined` of
/// dynamically-typed inputs) is its own kind, distinct from `null`.
pub fn runtime_kind(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

/// Renders a possibly-absent value for inclusion in error messages.
///
/// Present values use compact JSON rendering (strings come out quoted),
/// absence renders as `undefined`.
pub fn value_string(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(value) => value.to_string(),
    }
}

/// Renders accumulated errors as newline-joined debug lines.
///
/// Each line has the form `At [{context}] {message}`.
///
/// # Example
///
/// ```rust
/// use verdict::{error_debug_string, Validator, ValidatorLike};
/// use serde_json::json;
///
/// let validator = Validator::object().field("name", Validator::string());
/// let errors = validator.validate(&json!({ "name": 3 })).into_result().unwrap_err();
///
/// assert_eq!(
///     error_debug_string(&errors),
///     "At [root / name] Expected string, got number"
/// );
/// ```
pub fn error_debug_string(errors: &ValidationErrors) -> String {
    errors.to_string()
}

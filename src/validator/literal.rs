//! Exact-value and key-set validators.

use indexmap::IndexSet;
use serde_json::Value;
use stillwater::Validation;

use crate::config::Config;
use crate::diagnostics::value_string;
use crate::error::{failure, ValidationErrors};
use crate::path::Context;
use crate::validator::traits::ValidatorLike;

/// Validates that the input equals one fixed value.
///
/// # Example
///
/// ```rust
/// use verdict::{Validator, ValidatorLike};
/// use serde_json::json;
///
/// let validator = Validator::literal("on");
/// assert!(validator.validate(&json!("on")).is_success());
///
/// let errors = validator.validate(&json!("off")).into_result().unwrap_err();
/// assert_eq!(errors.first().message, "Expected \"on\", got \"off\"");
/// ```
#[derive(Debug, Clone)]
pub struct LiteralValidator {
    expected: Value,
}

impl LiteralValidator {
    /// Creates a validator accepting exactly the given value.
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl ValidatorLike for LiteralValidator {
    type Output = Value;

    fn validate_at(
        &self,
        value: Option<&Value>,
        _config: &Config,
        context: &Context,
    ) -> Validation<Value, ValidationErrors> {
        match value {
            Some(v) if *v == self.expected => Validation::Success(v.clone()),
            other => failure(
                context,
                format!(
                    "Expected {}, got {}",
                    value_string(Some(&self.expected)),
                    value_string(other)
                ),
            ),
        }
    }

    fn validate_value_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Option<Value>, ValidationErrors> {
        self.validate_at(value, config, context).map(Some)
    }
}

/// Validates that the input is one of a fixed set of string keys.
///
/// Keys keep their first-occurrence order, which is the order the failure
/// message lists them in.
///
/// # Example
///
/// ```rust
/// use verdict::{Validator, ValidatorLike};
/// use serde_json::json;
///
/// let validator = Validator::key_of(["red", "green", "blue"]);
/// assert_eq!(validator.validate(&json!("green")).into_result().unwrap(), "green");
///
/// let errors = validator.validate(&json!("mauve")).into_result().unwrap_err();
/// assert_eq!(
///     errors.first().message,
///     "Expected one of [red, green, blue], got \"mauve\""
/// );
/// ```
#[derive(Debug, Clone)]
pub struct KeyOfValidator {
    keys: IndexSet<String>,
}

impl KeyOfValidator {
    /// Creates a validator accepting any of the given keys.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    fn keys_list(&self) -> String {
        self.keys
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl ValidatorLike for KeyOfValidator {
    type Output = String;

    fn validate_at(
        &self,
        value: Option<&Value>,
        _config: &Config,
        context: &Context,
    ) -> Validation<String, ValidationErrors> {
        match value {
            Some(Value::String(s)) if self.keys.contains(s.as_str()) => {
                Validation::Success(s.clone())
            }
            other => failure(
                context,
                format!(
                    "Expected one of [{}], got {}",
                    self.keys_list(),
                    value_string(other)
                ),
            ),
        }
    }

    fn validate_value_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Option<Value>, ValidationErrors> {
        self.validate_at(value, config, context)
            .map(|s| Some(Value::String(s)))
    }
}

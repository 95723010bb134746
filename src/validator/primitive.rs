//! Primitive validators for the scalar runtime kinds.

use serde_json::Value;
use stillwater::Validation;

use crate::config::Config;
use crate::error::{failure, type_failure, ValidationErrors};
use crate::path::Context;
use crate::validator::traits::ValidatorLike;

/// Validates JSON strings, producing an owned `String`.
///
/// # Example
///
/// ```rust
/// use verdict::{Validator, ValidatorLike};
/// use serde_json::json;
///
/// let validator = Validator::string();
/// assert_eq!(validator.validate(&json!("hi")).into_result().unwrap(), "hi");
/// assert!(validator.validate(&json!(42)).is_failure());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StringValidator;

impl StringValidator {
    /// Creates a new string validator.
    pub fn new() -> Self {
        Self
    }
}

impl ValidatorLike for StringValidator {
    type Output = String;

    fn validate_at(
        &self,
        value: Option<&Value>,
        _config: &Config,
        context: &Context,
    ) -> Validation<String, ValidationErrors> {
        match value {
            Some(Value::String(s)) => Validation::Success(s.clone()),
            other => type_failure(other, context, "string"),
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

/// Validates JSON numbers representable as `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberValidator;

impl NumberValidator {
    /// Creates a new number validator.
    pub fn new() -> Self {
        Self
    }
}

impl ValidatorLike for NumberValidator {
    type Output = f64;

    fn validate_at(
        &self,
        value: Option<&Value>,
        _config: &Config,
        context: &Context,
    ) -> Validation<f64, ValidationErrors> {
        match value {
            Some(Value::Number(n)) => match n.as_f64() {
                Some(f) => Validation::Success(f),
                None => failure(context, format!("Expected number, got {}", n)),
            },
            other => type_failure(other, context, "number"),
        }
    }

    fn validate_value_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Option<Value>, ValidationErrors> {
        // Pass the original number through rather than re-encoding the f64.
        self.validate_at(value, config, context)
            .map(|_| value.cloned())
    }
}

/// Validates JSON booleans.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanValidator;

impl BooleanValidator {
    /// Creates a new boolean validator.
    pub fn new() -> Self {
        Self
    }
}

impl ValidatorLike for BooleanValidator {
    type Output = bool;

    fn validate_at(
        &self,
        value: Option<&Value>,
        _config: &Config,
        context: &Context,
    ) -> Validation<bool, ValidationErrors> {
        match value {
            Some(Value::Bool(b)) => Validation::Success(*b),
            other => type_failure(other, context, "boolean"),
        }
    }

    fn validate_value_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Option<Value>, ValidationErrors> {
        self.validate_at(value, config, context)
            .map(|b| Some(Value::Bool(b)))
    }
}

/// Validates exactly `null`.
///
/// Absence is not `null`: validating an absent value fails with
/// `Expected null, got undefined`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullValidator;

impl NullValidator {
    /// Creates a new null validator.
    pub fn new() -> Self {
        Self
    }
}

impl ValidatorLike for NullValidator {
    type Output = ();

    fn validate_at(
        &self,
        value: Option<&Value>,
        _config: &Config,
        context: &Context,
    ) -> Validation<(), ValidationErrors> {
        match value {
            Some(Value::Null) => Validation::Success(()),
            other => type_failure(other, context, "null"),
        }
    }

    fn validate_value_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Option<Value>, ValidationErrors> {
        self.validate_at(value, config, context)
            .map(|_| Some(Value::Null))
    }
}

/// Validates exactly absence.
///
/// The dynamic output is the absent sentinel, so an object field validated
/// with this validator is omitted from the object's output.
#[derive(Debug, Clone, Copy, Default)]
pub struct UndefinedValidator;

impl UndefinedValidator {
    /// Creates a new undefined validator.
    pub fn new() -> Self {
        Self
    }
}

impl ValidatorLike for UndefinedValidator {
    type Output = ();

    fn validate_at(
        &self,
        value: Option<&Value>,
        _config: &Config,
        context: &Context,
    ) -> Validation<(), ValidationErrors> {
        match value {
            None => Validation::Success(()),
            other => type_failure(other, context, "undefined"),
        }
    }

    fn validate_value_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Option<Value>, ValidationErrors> {
        self.validate_at(value, config, context).map(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn at_root<V: ValidatorLike>(
        validator: &V,
        value: Option<&Value>,
    ) -> Validation<V::Output, ValidationErrors> {
        validator.validate_at(value, &Config::default(), &Context::root())
    }

    #[test]
    fn test_string_accepts_only_strings() {
        let validator = StringValidator::new();
        assert!(at_root(&validator, Some(&json!("x"))).is_success());
        assert!(at_root(&validator, Some(&json!(1))).is_failure());
        assert!(at_root(&validator, Some(&Value::Null)).is_failure());
        assert!(at_root(&validator, None).is_failure());
    }

    #[test]
    fn test_number_accepts_only_numbers() {
        let validator = NumberValidator::new();
        assert!(at_root(&validator, Some(&json!(1.5))).is_success());
        assert!(at_root(&validator, Some(&json!("1.5"))).is_failure());
    }

    #[test]
    fn test_boolean_accepts_only_booleans() {
        let validator = BooleanValidator::new();
        assert!(at_root(&validator, Some(&json!(true))).is_success());
        assert!(at_root(&validator, Some(&json!(0))).is_failure());
    }

    #[test]
    fn test_null_rejects_absence() {
        let validator = NullValidator::new();
        assert!(at_root(&validator, Some(&Value::Null)).is_success());

        let errors = at_root(&validator, None).into_result().unwrap_err();
        assert_eq!(errors.first().message, "Expected null, got undefined");
    }

    #[test]
    fn test_undefined_rejects_null() {
        let validator = UndefinedValidator::new();
        assert!(at_root(&validator, None).is_success());

        let errors = at_root(&validator, Some(&Value::Null))
            .into_result()
            .unwrap_err();
        assert_eq!(errors.first().message, "Expected undefined, got null");
    }

    #[test]
    fn test_undefined_dynamic_output_is_absent() {
        let validator = UndefinedValidator::new();
        let result = validator.validate_value_at(None, &Config::default(), &Context::root());
        match result {
            Validation::Success(output) => assert_eq!(output, None),
            Validation::Failure(errors) => panic!("unexpected failure: {}", errors),
        }
    }
}

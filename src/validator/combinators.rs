//! Algebraic validator combinators: union, intersection, optional,
//! nullable.

use std::sync::Arc;

use serde_json::Value;
use stillwater::Validation;

use crate::config::Config;
use crate::diagnostics::error_debug_string;
use crate::error::{failure, ValidationErrors};
use crate::path::Context;
use crate::validator::traits::{ValidatorLike, ValueValidator};

/// A validator accepting whatever any one of its alternatives accepts.
///
/// Alternatives are tried in order against the same value and context; the
/// first success wins and its output is returned untouched. When every
/// alternative fails, the union reports exactly one error at its own
/// context whose message embeds each alternative's rendered errors under a
/// `Union type #{i}` heading. The alternatives' own contexts appear only
/// inside that embedded text.
///
/// # Example
///
/// ```rust
/// use verdict::{boxed, Validator, ValidatorLike};
/// use serde_json::json;
///
/// let validator = Validator::union(vec![
///     boxed(Validator::string()),
///     boxed(Validator::number()),
/// ]);
///
/// assert!(validator.validate(&json!("x")).is_success());
/// assert!(validator.validate(&json!(1)).is_success());
///
/// let errors = validator.validate(&json!(true)).into_result().unwrap_err();
/// assert_eq!(errors.len(), 1);
/// assert!(errors.first().message.contains("Union type #0"));
/// assert!(errors.first().message.contains("Union type #1"));
/// ```
pub struct UnionValidator {
    alternatives: Vec<Arc<dyn ValueValidator>>,
}

impl UnionValidator {
    /// Creates a new union validator over the given alternatives.
    pub fn new(alternatives: Vec<Box<dyn ValueValidator>>) -> Self {
        Self {
            alternatives: alternatives.into_iter().map(Arc::from).collect(),
        }
    }
}

impl ValidatorLike for UnionValidator {
    type Output = Value;

    fn validate_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Value, ValidationErrors> {
        self.validate_value_at(value, config, context)
            .map(|v| v.unwrap_or(Value::Null))
    }

    fn validate_value_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Option<Value>, ValidationErrors> {
        let mut failures = Vec::new();
        for alternative in &self.alternatives {
            match alternative.validate_value(value, config, context) {
                Validation::Success(v) => return Validation::Success(v),
                Validation::Failure(e) => failures.push(e),
            }
        }

        let mut message = String::from("None of the union alternatives matched the value:");
        for (index, errors) in failures.iter().enumerate() {
            message.push_str(&format!(
                "\nUnion type #{} failed with:\n{}",
                index,
                error_debug_string(errors)
            ));
        }
        failure(context, message)
    }
}

/// A validator requiring every part to accept the same value.
///
/// Parts run in order; the first failure short-circuits and is returned
/// verbatim, so later parts never see the value. When all parts succeed,
/// their dynamic outputs merge shallowly: objects merge key-by-key with
/// later parts winning collisions, a later non-object output replaces the
/// accumulator, and an absent later output leaves it alone.
///
/// # Example
///
/// ```rust
/// use verdict::{boxed, Validator, ValidatorLike};
/// use serde_json::json;
///
/// let validator = Validator::intersection(vec![
///     boxed(Validator::object().field("a", Validator::number())),
///     boxed(Validator::object().field("b", Validator::string())),
/// ]);
///
/// let output = validator
///     .validate(&json!({ "a": 1, "b": "x" }))
///     .into_result()
///     .unwrap();
/// assert_eq!(output, json!({ "a": 1, "b": "x" }));
/// ```
pub struct IntersectionValidator {
    parts: Vec<Arc<dyn ValueValidator>>,
}

impl IntersectionValidator {
    /// Creates a new intersection validator over the given parts.
    pub fn new(parts: Vec<Box<dyn ValueValidator>>) -> Self {
        Self {
            parts: parts.into_iter().map(Arc::from).collect(),
        }
    }
}

fn merge_shallow(acc: Option<Value>, next: Option<Value>) -> Option<Value> {
    match (acc, next) {
        (Some(Value::Object(mut left)), Some(Value::Object(right))) => {
            for (key, value) in right {
                left.insert(key, value);
            }
            Some(Value::Object(left))
        }
        (acc, None) => acc,
        (_, next) => next,
    }
}

impl ValidatorLike for IntersectionValidator {
    type Output = Value;

    fn validate_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Value, ValidationErrors> {
        self.validate_value_at(value, config, context)
            .map(|v| v.unwrap_or(Value::Null))
    }

    fn validate_value_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Option<Value>, ValidationErrors> {
        let mut merged: Option<Value> = None;
        for part in &self.parts {
            match part.validate_value(value, config, context) {
                Validation::Success(v) => merged = merge_shallow(merged, v),
                Validation::Failure(e) => return Validation::Failure(e),
            }
        }
        Validation::Success(merged)
    }
}

/// A validator accepting absence in addition to its inner validator.
///
/// Absent input succeeds with `None` (typed) and the absent sentinel
/// (dynamic). Any present value, `null` included, goes to the inner
/// validator.
pub struct OptionalValidator<V> {
    inner: V,
}

impl<V: ValidatorLike> OptionalValidator<V> {
    /// Creates a new optional validator around the given inner validator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V: ValidatorLike> ValidatorLike for OptionalValidator<V> {
    type Output = Option<V::Output>;

    fn validate_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Option<V::Output>, ValidationErrors> {
        match value {
            None => Validation::Success(None),
            some => self.inner.validate_at(some, config, context).map(Some),
        }
    }

    fn validate_value_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Option<Value>, ValidationErrors> {
        match value {
            None => Validation::Success(None),
            some => self.inner.validate_value_at(some, config, context),
        }
    }
}

/// A validator accepting `null` in addition to its inner validator.
///
/// A `null` input succeeds with `None` (typed) while the dynamic output
/// keeps the `null`. Anything else, absence included, goes to the inner
/// validator.
pub struct NullableValidator<V> {
    inner: V,
}

impl<V: ValidatorLike> NullableValidator<V> {
    /// Creates a new nullable validator around the given inner validator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V: ValidatorLike> ValidatorLike for NullableValidator<V> {
    type Output = Option<V::Output>;

    fn validate_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Option<V::Output>, ValidationErrors> {
        match value {
            Some(Value::Null) => Validation::Success(None),
            other => self.inner.validate_at(other, config, context).map(Some),
        }
    }

    fn validate_value_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Option<Value>, ValidationErrors> {
        match value {
            Some(Value::Null) => Validation::Success(Some(Value::Null)),
            other => self.inner.validate_value_at(other, config, context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{boxed, Validator};
    use serde_json::json;

    #[test]
    fn test_union_first_success_wins() {
        let validator = UnionValidator::new(vec![
            boxed(Validator::literal("a")),
            boxed(Validator::string()),
        ]);

        assert_eq!(validator.validate(&json!("a")).into_result().unwrap(), json!("a"));
        assert_eq!(validator.validate(&json!("b")).into_result().unwrap(), json!("b"));
    }

    #[test]
    fn test_union_failure_is_one_error_with_embedded_traces() {
        let validator = UnionValidator::new(vec![
            boxed(Validator::string()),
            boxed(Validator::number()),
        ]);

        let errors = validator.validate(&json!(true)).into_result().unwrap_err();
        assert_eq!(errors.len(), 1);

        let message = &errors.first().message;
        assert!(message.starts_with("None of the union alternatives matched the value:"));
        assert!(message.contains("Union type #0 failed with:\nAt [root] Expected string, got boolean"));
        assert!(message.contains("Union type #1 failed with:\nAt [root] Expected number, got boolean"));
    }

    #[test]
    fn test_intersection_merges_objects_later_wins() {
        let validator = IntersectionValidator::new(vec![
            boxed(Validator::object().field("a", Validator::number())),
            boxed(Validator::object().field("b", Validator::string())),
        ]);

        let output = validator
            .validate(&json!({ "a": 1, "b": "x", "ignored": true }))
            .into_result()
            .unwrap();
        assert_eq!(output, json!({ "a": 1, "b": "x" }));
    }

    #[test]
    fn test_intersection_short_circuits_verbatim() {
        let validator = IntersectionValidator::new(vec![
            boxed(Validator::object().field("a", Validator::number())),
            boxed(Validator::object().field("b", Validator::string())),
        ]);

        let errors = validator
            .validate(&json!({ "b": "x" }))
            .into_result()
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().context.to_string(), "root / a");
    }

    #[test]
    fn test_optional_accepts_absence_but_not_null() {
        let validator = OptionalValidator::new(Validator::string());

        let absent = validator.validate_at(None, &Config::default(), &Context::root());
        assert_eq!(absent.into_result().unwrap(), None);

        // null still goes to the inner validator.
        let errors = validator.validate(&json!(null)).into_result().unwrap_err();
        assert_eq!(errors.first().message, "Expected string, got null");
    }

    #[test]
    fn test_nullable_accepts_null_but_not_absence() {
        let validator = NullableValidator::new(Validator::string());

        assert_eq!(validator.validate(&json!(null)).into_result().unwrap(), None);
        assert_eq!(
            validator.validate(&json!("x")).into_result().unwrap(),
            Some("x".to_string())
        );

        let absent = validator.validate_at(None, &Config::default(), &Context::root());
        let errors = absent.into_result().unwrap_err();
        assert_eq!(errors.first().message, "Expected string, got undefined");
    }
}

//! Fixed-arity positional validation.

use std::sync::Arc;

use serde_json::Value;
use stillwater::Validation;

use crate::config::Config;
use crate::error::{failure, type_failure, ValidationErrors};
use crate::path::Context;
use crate::validator::traits::{ValidatorLike, ValueValidator};

/// A validator for arrays of exact length with one validator per position.
///
/// A length mismatch is reported as a single failure at the tuple's own
/// context; when the length matches, every slot is validated at its indexed
/// context and all failures are accumulated.
///
/// # Example
///
/// ```rust
/// use verdict::{boxed, Validator, ValidatorLike};
/// use serde_json::json;
///
/// let validator = Validator::tuple(vec![
///     boxed(Validator::string()),
///     boxed(Validator::number()),
/// ]);
///
/// assert!(validator.validate(&json!(["x", 1])).is_success());
///
/// let errors = validator.validate(&json!(["x"])).into_result().unwrap_err();
/// assert_eq!(errors.first().message, "Expected Tuple2, got Tuple1");
/// ```
pub struct TupleValidator {
    slots: Vec<Arc<dyn ValueValidator>>,
}

impl TupleValidator {
    /// Creates a new tuple validator from one validator per position.
    ///
    /// An empty slot list accepts exactly the empty array.
    pub fn new(slots: Vec<Box<dyn ValueValidator>>) -> Self {
        Self {
            slots: slots.into_iter().map(Arc::from).collect(),
        }
    }

    /// Returns the arity of this tuple.
    pub fn arity(&self) -> usize {
        self.slots.len()
    }
}

impl ValidatorLike for TupleValidator {
    type Output = Vec<Value>;

    fn validate_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Vec<Value>, ValidationErrors> {
        let items = match value {
            Some(Value::Array(items)) => items,
            other => return type_failure(other, context, "array"),
        };

        if items.len() != self.slots.len() {
            return failure(
                context,
                format!("Expected Tuple{}, got Tuple{}", self.slots.len(), items.len()),
            );
        }

        let mut errors = Vec::new();
        let mut output = Vec::with_capacity(items.len());
        for (index, (slot, item)) in self.slots.iter().zip(items).enumerate() {
            let slot_context = context.push_index(index);
            match slot.validate_value(Some(item), config, &slot_context) {
                Validation::Success(v) => output.push(v.unwrap_or(Value::Null)),
                Validation::Failure(e) => errors.extend(e.into_iter()),
            }
        }

        if errors.is_empty() {
            Validation::Success(output)
        } else {
            Validation::Failure(ValidationErrors::from_vec(errors))
        }
    }

    fn validate_value_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Option<Value>, ValidationErrors> {
        self.validate_at(value, config, context)
            .map(|output| Some(Value::Array(output)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::Validator;
    use crate::validator::{boxed, is};
    use serde_json::json;

    #[test]
    fn test_arity_mismatch_is_one_error() {
        let validator = TupleValidator::new(vec![
            boxed(Validator::string()),
            boxed(Validator::number()),
            boxed(Validator::boolean()),
        ]);

        let errors = validator
            .validate(&json!(["only", 1]))
            .into_result()
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().message, "Expected Tuple3, got Tuple2");
        assert!(errors.first().context.is_root());
    }

    #[test]
    fn test_slot_errors_accumulate() {
        let validator = TupleValidator::new(vec![
            boxed(Validator::string()),
            boxed(Validator::number()),
        ]);

        let errors = validator.validate(&json!([1, "x"])).into_result().unwrap_err();
        assert_eq!(errors.len(), 2);
        let contexts: Vec<_> = errors.iter().map(|e| e.context.to_string()).collect();
        assert_eq!(contexts, vec!["root / 0", "root / 1"]);
    }

    #[test]
    fn test_empty_tuple_accepts_empty_array() {
        let validator = TupleValidator::new(vec![]);
        assert!(is(&json!([]), &validator));
        assert!(!is(&json!([1]), &validator));
    }
}

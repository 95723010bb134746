//! Homogeneous array validation.

use serde_json::Value;
use stillwater::Validation;

use crate::config::Config;
use crate::error::{type_failure, ValidationErrors};
use crate::path::Context;
use crate::validator::traits::ValidatorLike;

/// A validator for arrays whose items all satisfy one item validator.
///
/// Every item is validated at its own indexed context and all failures are
/// accumulated; a bad item never hides the ones after it.
///
/// # Example
///
/// ```rust
/// use verdict::{Validator, ValidatorLike};
/// use serde_json::json;
///
/// let validator = Validator::array(Validator::number());
///
/// let result = validator.validate(&json!([1, 2, 3]));
/// assert_eq!(result.into_result().unwrap(), vec![1.0, 2.0, 3.0]);
///
/// // Both bad items are reported.
/// let errors = validator.validate(&json!([1, "x", null])).into_result().unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
pub struct ArrayValidator<V> {
    item: V,
}

impl<V: ValidatorLike> ArrayValidator<V> {
    /// Creates a new array validator with the given item validator.
    pub fn new(item: V) -> Self {
        Self { item }
    }
}

impl<V: ValidatorLike> ValidatorLike for ArrayValidator<V> {
    type Output = Vec<V::Output>;

    fn validate_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Vec<V::Output>, ValidationErrors> {
        let items = match value {
            Some(Value::Array(items)) => items,
            other => return type_failure(other, context, "array"),
        };

        let mut errors = Vec::new();
        let mut output = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let item_context = context.push_index(index);
            match self.item.validate_at(Some(item), config, &item_context) {
                Validation::Success(v) => output.push(v),
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
        let items = match value {
            Some(Value::Array(items)) => items,
            other => return type_failure(other, context, "array"),
        };

        let mut errors = Vec::new();
        let mut output = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let item_context = context.push_index(index);
            match self
                .item
                .validate_value_at(Some(item), config, &item_context)
            {
                // An absent item output has no way to be omitted from a
                // positional collection, so it collapses to null.
                Validation::Success(v) => output.push(v.unwrap_or(Value::Null)),
                Validation::Failure(e) => errors.extend(e.into_iter()),
            }
        }

        if errors.is_empty() {
            Validation::Success(Some(Value::Array(output)))
        } else {
            Validation::Failure(ValidationErrors::from_vec(errors))
        }
    }
}

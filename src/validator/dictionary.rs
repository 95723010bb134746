//! Homogeneous map validation.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use stillwater::Validation;

use crate::config::Config;
use crate::error::{type_failure, ValidationErrors};
use crate::path::Context;
use crate::validator::traits::ValidatorLike;

/// A validator for objects whose keys and values are each homogeneous.
///
/// Every entry is checked on both sides at the entry's context: the key is
/// validated as a string value by the key validator, the value by the value
/// validator. The two sides are independent, so a bad key does not hide a
/// bad value. Key-side failures get the message prefix `key error: `,
/// value-side failures `value error: `.
///
/// An entry reaches the output only when both sides succeed; the VALIDATED
/// key (the key validator may transform it) is what stores the value.
///
/// # Example
///
/// ```rust
/// use verdict::{Validator, ValidatorLike};
/// use serde_json::json;
///
/// let validator = Validator::dictionary(Validator::string(), Validator::number());
///
/// let output = validator
///     .validate(&json!({ "a": 1, "b": 2 }))
///     .into_result()
///     .unwrap();
/// assert_eq!(output.get("a"), Some(&1.0));
///
/// let errors = validator.validate(&json!({ "a": "x" })).into_result().unwrap_err();
/// assert_eq!(errors.first().message, "value error: Expected number, got string");
/// ```
pub struct DictionaryValidator<K, C> {
    key: K,
    value: C,
}

impl<K, C> DictionaryValidator<K, C>
where
    K: ValidatorLike<Output = String>,
    C: ValidatorLike,
{
    /// Creates a new dictionary validator from a key validator and a value
    /// validator.
    pub fn new(key: K, value: C) -> Self {
        Self { key, value }
    }
}

impl<K, C> ValidatorLike for DictionaryValidator<K, C>
where
    K: ValidatorLike<Output = String>,
    C: ValidatorLike,
{
    type Output = IndexMap<String, C::Output>;

    fn validate_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<IndexMap<String, C::Output>, ValidationErrors> {
        let entries = match value {
            Some(Value::Object(entries)) => entries,
            other => return type_failure(other, context, "object"),
        };

        let mut errors = Vec::new();
        let mut output = IndexMap::new();
        for (entry_key, entry_value) in entries {
            let entry_context = context.push_field(entry_key);
            let key_value = Value::String(entry_key.clone());

            let validated_key =
                match self.key.validate_at(Some(&key_value), config, &entry_context) {
                    Validation::Success(k) => Some(k),
                    Validation::Failure(e) => {
                        errors.extend(e.with_message_prefix("key error: ").into_iter());
                        None
                    }
                };
            let validated_value =
                match self.value.validate_at(Some(entry_value), config, &entry_context) {
                    Validation::Success(v) => Some(v),
                    Validation::Failure(e) => {
                        errors.extend(e.with_message_prefix("value error: ").into_iter());
                        None
                    }
                };

            if let (Some(k), Some(v)) = (validated_key, validated_value) {
                output.insert(k, v);
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
        let entries = match value {
            Some(Value::Object(entries)) => entries,
            other => return type_failure(other, context, "object"),
        };

        let mut errors = Vec::new();
        let mut output = Map::new();
        for (entry_key, entry_value) in entries {
            let entry_context = context.push_field(entry_key);
            let key_value = Value::String(entry_key.clone());

            let validated_key =
                match self.key.validate_at(Some(&key_value), config, &entry_context) {
                    Validation::Success(k) => Some(k),
                    Validation::Failure(e) => {
                        errors.extend(e.with_message_prefix("key error: ").into_iter());
                        None
                    }
                };
            let validated_value = match self
                .value
                .validate_value_at(Some(entry_value), config, &entry_context)
            {
                Validation::Success(v) => Some(v),
                Validation::Failure(e) => {
                    errors.extend(e.with_message_prefix("value error: ").into_iter());
                    None
                }
            };

            if let (Some(k), Some(entry_output)) = (validated_key, validated_value) {
                // An absent entry output is omitted, as in objects.
                if let Some(entry_output) = entry_output {
                    output.insert(k, entry_output);
                }
            }
        }

        if errors.is_empty() {
            Validation::Success(Some(Value::Object(output)))
        } else {
            Validation::Failure(ValidationErrors::from_vec(errors))
        }
    }
}

//! Object validation with declaration-ordered fields.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use stillwater::Validation;

use crate::config::Config;
use crate::error::{type_failure, ValidationErrors};
use crate::path::Context;
use crate::validator::traits::{ValidatorLike, ValueValidator};

/// A validator for objects with a fixed set of declared fields.
///
/// Fields are validated in declaration order and every failing field is
/// reported. Objects are open: input keys that were never declared are
/// ignored rather than rejected.
///
/// When a configuration sets `transform_object_keys`, the declared name is
/// transformed before the input lookup, and the transformed name is what
/// error contexts show; the output object always uses the declared name.
///
/// A field whose validator succeeds with the absent sentinel is omitted
/// from the output entirely, which is how optional fields disappear.
///
/// # Example
///
/// ```rust
/// use verdict::{Validator, ValidatorLike};
/// use serde_json::json;
///
/// let validator = Validator::object()
///     .field("name", Validator::string())
///     .field("age", Validator::number());
///
/// assert!(validator.validate(&json!({ "name": "ada", "age": 36 })).is_success());
///
/// // Both bad fields are reported.
/// let errors = validator.validate(&json!({ "name": 1, "age": "x" })).into_result().unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
#[derive(Default)]
pub struct ObjectValidator {
    props: IndexMap<String, Arc<dyn ValueValidator>>,
}

impl ObjectValidator {
    /// Creates an object validator with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field and returns self for chaining.
    ///
    /// Declaring the same name twice replaces the earlier validator while
    /// keeping the original position.
    pub fn field<V>(mut self, name: impl Into<String>, validator: V) -> Self
    where
        V: ValidatorLike + 'static,
    {
        self.props.insert(name.into(), Arc::new(validator));
        self
    }

    /// Returns the declared fields and their validators in declaration
    /// order.
    ///
    /// This is the introspection surface for tooling that walks a
    /// validator's shape; the returned validators can be driven directly
    /// through [`ValueValidator::validate_value`].
    pub fn props(&self) -> impl Iterator<Item = (&str, &Arc<dyn ValueValidator>)> {
        self.props
            .iter()
            .map(|(name, validator)| (name.as_str(), validator))
    }

    /// Returns the declared field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }

    /// Returns the number of declared fields.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Returns true if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

impl ValidatorLike for ObjectValidator {
    type Output = Map<String, Value>;

    fn validate_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Map<String, Value>, ValidationErrors> {
        let entries = match value {
            Some(Value::Object(entries)) => entries,
            other => return type_failure(other, context, "object"),
        };

        let mut errors = Vec::new();
        let mut output = Map::new();
        for (name, validator) in &self.props {
            let lookup_key = config.transform_key(name);
            let field_context = context.push_field(lookup_key.as_ref());
            let field_value = entries.get(lookup_key.as_ref());
            match validator.validate_value(field_value, config, &field_context) {
                Validation::Success(Some(v)) => {
                    output.insert(name.clone(), v);
                }
                // Absent output: the key is omitted from the result.
                Validation::Success(None) => {}
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
            .map(|output| Some(Value::Object(output)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::snake_case_transformation;
    use crate::validator::Validator;
    use serde_json::json;

    #[test]
    fn test_extra_keys_are_ignored() {
        let validator = ObjectValidator::new().field("a", Validator::number());
        let output = validator
            .validate(&json!({ "a": 1, "extra": true }))
            .into_result()
            .unwrap();

        assert_eq!(output.len(), 1);
        assert_eq!(output.get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_absent_success_is_omitted() {
        let validator = ObjectValidator::new()
            .field("a", Validator::number())
            .field("b", Validator::undefined());

        let output = validator.validate(&json!({ "a": 1 })).into_result().unwrap();
        assert!(output.contains_key("a"));
        assert!(!output.contains_key("b"));
    }

    #[test]
    fn test_null_is_not_an_object() {
        let validator = ObjectValidator::new().field("a", Validator::number());
        let errors = validator.validate(&json!(null)).into_result().unwrap_err();
        assert_eq!(errors.first().message, "Expected object, got null");
    }

    #[test]
    fn test_missing_field_is_absent_for_the_child() {
        let validator = ObjectValidator::new().field("a", Validator::number());
        let errors = validator.validate(&json!({})).into_result().unwrap_err();
        assert_eq!(errors.first().message, "Expected number, got undefined");
        assert_eq!(errors.first().context.to_string(), "root / a");
    }

    #[test]
    fn test_key_transform_reads_renamed_and_writes_declared() {
        let validator = ObjectValidator::new().field("fieldName", Validator::string());
        let config = Config::new().with_transform_object_keys(snake_case_transformation);

        let output = validator
            .validate_with(&json!({ "field_name": "v" }), &config)
            .into_result()
            .unwrap();
        assert_eq!(output.get("fieldName"), Some(&json!("v")));
        assert!(!output.contains_key("field_name"));

        // Error contexts use the renamed key.
        let errors = validator
            .validate_with(&json!({ "field_name": 1 }), &config)
            .into_result()
            .unwrap_err();
        assert_eq!(errors.first().context.to_string(), "root / field_name");
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let validator = ObjectValidator::new()
            .field("z", Validator::number())
            .field("a", Validator::number());

        let names: Vec<_> = validator.field_names().collect();
        assert_eq!(names, vec!["z", "a"]);
    }
}

//! Validation error types.
//!
//! This module provides [`ValidationError`] for single validation failures,
//! [`ValidationErrors`] for accumulating multiple errors, and the
//! constructors [`failure`] and [`type_failure`] that every validator routes
//! its failures through.

use std::fmt::{self, Display};

use serde_json::Value;
use stillwater::prelude::*;
use stillwater::Validation;

use crate::diagnostics::runtime_kind;
use crate::path::Context;

/// A single validation error.
///
/// `ValidationError` pairs the context at which validation failed with a
/// human-readable message. It renders as `At [{context}] {message}`, the
/// line format used by debug output.
///
/// # Example
///
/// ```rust
/// use verdict::{Context, ValidationError};
///
/// let error = ValidationError::new(
///     Context::root().push_field("email"),
///     "Expected string, got number",
/// );
///
/// assert_eq!(error.to_string(), "At [root / email] Expected string, got number");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("At [{context}] {message}")]
pub struct ValidationError {
    /// The context at which validation failed.
    pub context: Context,
    /// Human-readable error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error with the given context and message.
    pub fn new(context: Context, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }
}

// ValidationError is Send + Sync since all fields are owned types
// (Context with Vec<PathSegment>, String). This is automatically derived,
// but we add these assertions to ensure it remains true if the types change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

/// A non-empty collection of validation errors.
///
/// `ValidationErrors` wraps a `NonEmptyVec<ValidationError>` to guarantee
/// that at least one error is present. This is essential for use with
/// `Validation<T, ValidationErrors>` since a failure must have at least one
/// error. Errors preserve the order in which they were discovered.
///
/// # Combining Errors
///
/// `ValidationErrors` implements `Semigroup`, allowing errors from multiple
/// validations to be combined:
///
/// ```rust
/// use verdict::{Context, ValidationError, ValidationErrors};
/// use stillwater::prelude::*;
///
/// let errors1 = ValidationErrors::single(
///     ValidationError::new(Context::root().push_field("name"), "Expected string, got null")
/// );
/// let errors2 = ValidationErrors::single(
///     ValidationError::new(Context::root().push_field("email"), "Expected string, got number")
/// );
///
/// let combined = errors1.combine(errors2);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(NonEmptyVec<ValidationError>);

impl ValidationErrors {
    /// Creates a `ValidationErrors` containing a single error.
    pub fn single(error: ValidationError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `ValidationErrors` from a `NonEmptyVec` of errors.
    pub fn from_non_empty(errors: NonEmptyVec<ValidationError>) -> Self {
        Self(errors)
    }

    /// Creates a `ValidationErrors` from a `Vec<ValidationError>`.
    ///
    /// Use this when you're certain the vec contains at least one error.
    ///
    /// # Panics
    ///
    /// Panics if the provided vec is empty.
    pub fn from_vec(errors: Vec<ValidationError>) -> Self {
        Self(NonEmptyVec::from_vec(errors).expect("ValidationErrors requires at least one error"))
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false since this collection is guaranteed non-empty.
    ///
    /// This method exists for API consistency but always returns false.
    pub fn is_empty(&self) -> bool {
        false // NonEmptyVec is never empty
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Returns all errors at the specified context.
    pub fn at_context(&self, context: &Context) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| &e.context == context).collect()
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &ValidationError {
        self.0.head()
    }

    /// Converts this collection into a `Vec<ValidationError>`.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0.into_vec()
    }

    /// Returns a new collection with every message prefixed by the given
    /// string. Contexts and order are preserved.
    pub fn with_message_prefix(self, prefix: &str) -> Self {
        let errors: Vec<ValidationError> = self
            .into_iter()
            .map(|error| ValidationError {
                message: format!("{}{}", prefix, error.message),
                ..error
            })
            .collect();
        Self::from_vec(errors)
    }
}

impl Semigroup for ValidationErrors {
    fn combine(self, other: Self) -> Self {
        ValidationErrors(self.0.combine(other.0))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = Box<dyn Iterator<Item = &'a ValidationError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

// ValidationErrors is Send + Sync since it only contains ValidationError
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationErrors>();
    assert_sync::<ValidationErrors>();
};

/// Builds a single-error failure at the given context.
///
/// Every validator in this crate reports plain failures through this
/// constructor, which keeps message handling in one place.
pub fn failure<T>(context: &Context, message: impl Into<String>) -> Validation<T, ValidationErrors> {
    Validation::Failure(ValidationErrors::single(ValidationError::new(
        context.clone(),
        message,
    )))
}

/// Builds a type-mismatch failure at the given context.
///
/// The message has the form `Expected {expected}, got {kind}` where `kind`
/// classifies the runtime kind of the offending value (`undefined`, `null`,
/// `boolean`, `number`, `string`, `array`, `object`).
pub fn type_failure<T>(
    value: Option<&Value>,
    context: &Context,
    expected: &str,
) -> Validation<T, ValidationErrors> {
    failure(
        context,
        format!("Expected {}, got {}", expected, runtime_kind(value)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_creation() {
        let error = ValidationError::new(
            Context::root().push_field("name"),
            "Expected string, got null",
        );

        assert_eq!(error.context, Context::root().push_field("name"));
        assert_eq!(error.message, "Expected string, got null");
    }

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::new(
            Context::root().push_field("email"),
            "Expected string, got number",
        );

        assert_eq!(
            error.to_string(),
            "At [root / email] Expected string, got number"
        );
    }

    #[test]
    fn test_validation_error_display_root() {
        let error = ValidationError::new(Context::root(), "Expected object, got null");
        assert_eq!(error.to_string(), "At [root] Expected object, got null");
    }

    #[test]
    fn test_validation_errors_single() {
        let error = ValidationError::new(Context::root(), "test");
        let errors = ValidationErrors::single(error.clone());

        assert_eq!(errors.len(), 1);
        assert!(!errors.is_empty());
        assert_eq!(errors.first(), &error);
    }

    #[test]
    fn test_validation_errors_combine() {
        let error1 = ValidationError::new(Context::root().push_field("a"), "error 1");
        let error2 = ValidationError::new(Context::root().push_field("b"), "error 2");

        let errors1 = ValidationErrors::single(error1);
        let errors2 = ValidationErrors::single(error2);
        let combined = errors1.combine(errors2);

        assert_eq!(combined.len(), 2);
    }

    #[test]
    fn test_validation_errors_at_context() {
        let context_a = Context::root().push_field("a");
        let context_b = Context::root().push_field("b");

        let error1 = ValidationError::new(context_a.clone(), "error 1");
        let error2 = ValidationError::new(context_a.clone(), "error 2");
        let error3 = ValidationError::new(context_b.clone(), "error 3");

        let errors = ValidationErrors::single(error1)
            .combine(ValidationErrors::single(error2))
            .combine(ValidationErrors::single(error3));

        let at_a = errors.at_context(&context_a);
        assert_eq!(at_a.len(), 2);

        let at_b = errors.at_context(&context_b);
        assert_eq!(at_b.len(), 1);
    }

    #[test]
    fn test_validation_errors_iteration() {
        let error1 = ValidationError::new(Context::root().push_field("a"), "error 1");
        let error2 = ValidationError::new(Context::root().push_field("b"), "error 2");

        let errors = ValidationErrors::single(error1).combine(ValidationErrors::single(error2));

        let collected: Vec<_> = errors.iter().collect();
        assert_eq!(collected.len(), 2);
    }

    #[test]
    fn test_validation_errors_into_iter() {
        let error1 = ValidationError::new(Context::root().push_field("a"), "error 1");
        let error2 = ValidationError::new(Context::root().push_field("b"), "error 2");

        let errors = ValidationErrors::single(error1).combine(ValidationErrors::single(error2));

        let collected: Vec<ValidationError> = errors.into_iter().collect();
        assert_eq!(collected.len(), 2);
    }

    #[test]
    fn test_validation_errors_display_joins_lines() {
        let error1 = ValidationError::new(Context::root().push_field("name"), "required");
        let error2 = ValidationError::new(Context::root().push_field("email"), "invalid");

        let errors = ValidationErrors::single(error1).combine(ValidationErrors::single(error2));

        assert_eq!(
            errors.to_string(),
            "At [root / name] required\nAt [root / email] invalid"
        );
    }

    #[test]
    fn test_with_message_prefix() {
        let error1 = ValidationError::new(Context::root().push_field("a"), "error 1");
        let error2 = ValidationError::new(Context::root().push_field("b"), "error 2");

        let errors = ValidationErrors::single(error1).combine(ValidationErrors::single(error2));
        let prefixed = errors.with_message_prefix("key error: ");

        let messages: Vec<_> = prefixed.iter().map(|e| e.message.clone()).collect();
        assert_eq!(messages, vec!["key error: error 1", "key error: error 2"]);
        assert_eq!(
            prefixed.first().context,
            Context::root().push_field("a")
        );
    }

    #[test]
    fn test_semigroup_associativity() {
        let e1 = ValidationErrors::single(ValidationError::new(Context::root(), "1"));
        let e2 = ValidationErrors::single(ValidationError::new(Context::root(), "2"));
        let e3 = ValidationErrors::single(ValidationError::new(Context::root(), "3"));

        // (e1 <> e2) <> e3
        let left = e1.clone().combine(e2.clone()).combine(e3.clone());
        // e1 <> (e2 <> e3)
        let right = e1.combine(e2.combine(e3));

        // Should have same errors (associativity)
        assert_eq!(left.len(), right.len());
        let left_msgs: Vec<_> = left.iter().map(|e| &e.message).collect();
        let right_msgs: Vec<_> = right.iter().map(|e| &e.message).collect();
        assert_eq!(left_msgs, right_msgs);
    }

    #[test]
    fn test_failure_constructor() {
        let result: Validation<(), ValidationErrors> =
            failure(&Context::root().push_field("x"), "boom");
        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors.first().message, "boom");
                assert_eq!(errors.first().context.to_string(), "root / x");
            }
            Validation::Success(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn test_type_failure_kinds() {
        let cases: Vec<(Option<Value>, &str)> = vec![
            (None, "Expected string, got undefined"),
            (Some(Value::Null), "Expected string, got null"),
            (Some(serde_json::json!(true)), "Expected string, got boolean"),
            (Some(serde_json::json!(1)), "Expected string, got number"),
            (Some(serde_json::json!([])), "Expected string, got array"),
            (Some(serde_json::json!({})), "Expected string, got object"),
        ];

        for (value, expected_message) in cases {
            let result: Validation<(), ValidationErrors> =
                type_failure(value.as_ref(), &Context::root(), "string");
            match result {
                Validation::Failure(errors) => {
                    assert_eq!(errors.first().message, expected_message);
                }
                Validation::Success(_) => panic!("expected failure"),
            }
        }
    }
}

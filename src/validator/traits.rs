//! Traits for validator polymorphism.
//!
//! This module provides the [`ValidatorLike`] trait that every validator
//! implements, along with the type-erased [`ValueValidator`] used wherever
//! validators with different output types must be mixed.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use stillwater::Validation;

use crate::config::Config;
use crate::error::ValidationErrors;
use crate::path::Context;
use crate::validator::combinators::OptionalValidator;
use crate::validator::transform::{TaggedValidator, TransformError, TransformValidator};

/// A validator that checks a dynamically-typed value and produces a typed
/// output.
///
/// Validators are immutable and pure: validating never changes the
/// validator, and the same value, configuration, and context always produce
/// the same result. The `Send + Sync` bounds allow validators to be shared
/// across threads behind an `Arc`.
///
/// Two channels exist. [`validate_at`](ValidatorLike::validate_at) is the
/// typed channel, producing `Self::Output`.
/// [`validate_value_at`](ValidatorLike::validate_value_at) is the dynamic
/// channel used when validators of different output types are composed; it
/// produces `Option<Value>`, where `None` is the absent sentinel (the
/// `undefined` of dynamically-typed inputs, distinct from `null`).
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
/// assert!(validator.validate(&json!({ "name": 1, "age": "x" })).is_failure());
/// ```
pub trait ValidatorLike: Send + Sync {
    /// The typed output produced by successful validation.
    type Output: 'static;

    /// Validates a possibly-absent value at the given context.
    ///
    /// `None` means the value is absent. Returns `Validation::Success` with
    /// the typed output on success, or `Validation::Failure` with every
    /// accumulated error on failure.
    fn validate_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Self::Output, ValidationErrors>;

    /// Validates a possibly-absent value and returns the dynamic form of
    /// the output.
    ///
    /// `Success(None)` is the absent sentinel: the output exists but is
    /// absent, and a containing object omits the key entirely. This method
    /// allows validators with different output types to be used uniformly
    /// inside structural combinators.
    fn validate_value_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Option<Value>, ValidationErrors>;

    /// Validates a value with the default configuration at the root
    /// context.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Validator, ValidatorLike};
    /// use serde_json::json;
    ///
    /// let result = Validator::string().validate(&json!("hello"));
    /// assert_eq!(result.into_result().unwrap(), "hello");
    /// ```
    fn validate(&self, value: &Value) -> Validation<Self::Output, ValidationErrors> {
        self.validate_at(Some(value), &Config::default(), &Context::root())
    }

    /// Validates a value with the given configuration at the root context.
    fn validate_with(
        &self,
        value: &Value,
        config: &Config,
    ) -> Validation<Self::Output, ValidationErrors> {
        self.validate_at(Some(value), config, &Context::root())
    }

    /// Wraps this validator with a function that inspects the full
    /// validation outcome, successes and failures alike.
    ///
    /// This is the primitive the rest of the monadic layer derives from.
    /// Because the function receives the whole `Validation`, it can recover
    /// from failures. An `Err(TransformError::Message(...))` becomes a
    /// single failure at the current context; an
    /// `Err(TransformError::Errors(...))` is propagated verbatim with its
    /// original contexts.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Validator, ValidatorLike};
    /// use serde_json::json;
    /// use stillwater::Validation;
    ///
    /// // Recover from failures with a default.
    /// let validator = Validator::number().transform(|result| match result {
    ///     Validation::Success(n) => Ok(n),
    ///     Validation::Failure(_) => Ok(0.0),
    /// });
    ///
    /// assert_eq!(validator.validate(&json!("oops")).into_result().unwrap(), 0.0);
    /// ```
    fn transform<B, F>(self, f: F) -> TransformValidator<Self, B>
    where
        Self: Sized,
        B: Serialize + Send + Sync + 'static,
        F: Fn(Validation<Self::Output, ValidationErrors>) -> Result<B, TransformError>
            + Send
            + Sync
            + 'static,
    {
        TransformValidator::new(self, f)
    }

    /// Chains a fallible conversion onto this validator.
    ///
    /// Failures of the inner validator pass through untouched; on success
    /// the function runs, and an `Err(message)` becomes a failure at the
    /// current context.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Validator, ValidatorLike};
    /// use serde_json::json;
    ///
    /// let port = Validator::string().flat_map(|s| {
    ///     s.parse::<u16>().map_err(|e| format!("not a port: {}", e))
    /// });
    ///
    /// assert_eq!(port.validate(&json!("8080")).into_result().unwrap(), 8080);
    /// assert!(port.validate(&json!("eighty")).is_failure());
    /// ```
    fn flat_map<B, F>(self, f: F) -> TransformValidator<Self, B>
    where
        Self: Sized,
        B: Serialize + Send + Sync + 'static,
        F: Fn(Self::Output) -> Result<B, String> + Send + Sync + 'static,
    {
        self.transform(move |result| match result {
            Validation::Success(output) => f(output).map_err(TransformError::Message),
            Validation::Failure(errors) => Err(TransformError::Errors(errors)),
        })
    }

    /// Chains an infallible conversion onto this validator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Validator, ValidatorLike};
    /// use serde_json::json;
    ///
    /// let length = Validator::string().map(|s| s.len());
    /// assert_eq!(length.validate(&json!("hello")).into_result().unwrap(), 5);
    /// ```
    fn map<B, F>(self, f: F) -> TransformValidator<Self, B>
    where
        Self: Sized,
        B: Serialize + Send + Sync + 'static,
        F: Fn(Self::Output) -> B + Send + Sync + 'static,
    {
        self.flat_map(move |output| Ok(f(output)))
    }

    /// Keeps successful outputs that satisfy the predicate and fails the
    /// rest.
    ///
    /// A rejected output produces a failure at the current context with the
    /// message `filter error: {output:?}`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Validator, ValidatorLike};
    /// use serde_json::json;
    ///
    /// let positive = Validator::number().filter(|n| *n > 0.0);
    /// assert!(positive.validate(&json!(3)).is_success());
    /// assert!(positive.validate(&json!(-3)).is_failure());
    /// ```
    fn filter<F>(self, predicate: F) -> TransformValidator<Self, Self::Output>
    where
        Self: Sized,
        Self::Output: fmt::Debug + Serialize + Send + Sync,
        F: Fn(&Self::Output) -> bool + Send + Sync + 'static,
    {
        self.flat_map(move |output| {
            if predicate(&output) {
                Ok(output)
            } else {
                Err(format!("filter error: {:?}", output))
            }
        })
    }

    /// Replaces any failure of this validator with the given value.
    fn fallback(self, value: Self::Output) -> TransformValidator<Self, Self::Output>
    where
        Self: Sized,
        Self::Output: Clone + Serialize + Send + Sync,
    {
        self.transform(move |result| match result {
            Validation::Success(output) => Ok(output),
            Validation::Failure(_) => Ok(value.clone()),
        })
    }

    /// Brands the output with a zero-cost marker type, without
    /// re-validating.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Validator, ValidatorLike};
    /// use serde_json::json;
    ///
    /// struct UserId;
    ///
    /// let validator = Validator::string().tagged::<UserId>();
    /// let id = validator.validate(&json!("u-1")).into_result().unwrap();
    /// assert_eq!(*id, "u-1");
    /// ```
    fn tagged<Tag>(self) -> TaggedValidator<Self, Tag>
    where
        Self: Sized,
        Tag: Send + Sync + 'static,
    {
        TaggedValidator::new(self)
    }

    /// Accepts absence in addition to whatever this validator accepts.
    ///
    /// Absent input succeeds with `None`; any present value, including
    /// `null`, goes to this validator.
    fn optional(self) -> OptionalValidator<Self>
    where
        Self: Sized,
    {
        OptionalValidator::new(self)
    }
}

/// A type-erased trait for validators used through the dynamic channel.
///
/// `ValueValidator` provides type erasure for validators with different
/// output types, allowing them to be mixed in heterogeneous combinators
/// such as tuples, unions, and object fields. Any type that implements
/// [`ValidatorLike`] automatically implements `ValueValidator`.
///
/// # Example
///
/// ```rust
/// use verdict::{boxed, Validator, ValueValidator};
///
/// // Different validator types can ride together type-erased.
/// let validators: Vec<Box<dyn ValueValidator>> = vec![
///     boxed(Validator::string()),
///     boxed(Validator::number()),
/// ];
/// ```
pub trait ValueValidator: Send + Sync {
    /// Validates a possibly-absent value through the dynamic channel.
    fn validate_value(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Option<Value>, ValidationErrors>;
}

/// Blanket implementation of `ValueValidator` for all `ValidatorLike`
/// types.
impl<V: ValidatorLike> ValueValidator for V {
    fn validate_value(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Option<Value>, ValidationErrors> {
        self.validate_value_at(value, config, context)
    }
}

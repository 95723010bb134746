//! Validator types and the [`Validator`] factory.
//!
//! Each validator checks a dynamically-typed value and produces a typed
//! output, accumulating every error it finds rather than short-circuiting
//! on the first failure.
//!
//! # Example
//!
//! ```rust
//! use verdict::{Validator, ValidatorLike};
//! use serde_json::json;
//!
//! let validator = Validator::object()
//!     .field("name", Validator::string())
//!     .field("tags", Validator::array(Validator::string()));
//!
//! let result = validator.validate(&json!({ "name": "crate", "tags": ["a", "b"] }));
//! assert!(result.is_success());
//! ```

mod array;
mod combinators;
mod dictionary;
mod literal;
mod object;
mod primitive;
mod recursive;
mod traits;
mod transform;
mod tuple;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

pub use array::ArrayValidator;
pub use combinators::{
    IntersectionValidator, NullableValidator, OptionalValidator, UnionValidator,
};
pub use dictionary::DictionaryValidator;
pub use literal::{KeyOfValidator, LiteralValidator};
pub use object::ObjectValidator;
pub use primitive::{
    BooleanValidator, NullValidator, NumberValidator, StringValidator, UndefinedValidator,
};
pub use recursive::RecursiveValidator;
pub use traits::{ValidatorLike, ValueValidator};
pub use transform::{Tagged, TaggedValidator, TransformError, TransformValidator};
pub use tuple::TupleValidator;

/// Entry point for creating validators.
///
/// `Validator` provides factory methods for every validator in the crate.
/// Primitives validate single runtime kinds, structural combinators walk
/// arrays and objects collecting every error, and algebraic combinators
/// compose alternatives.
///
/// # Example
///
/// ```rust
/// use verdict::{Validator, ValidatorLike};
/// use serde_json::json;
///
/// let validator = Validator::object()
///     .field("id", Validator::number())
///     .field("role", Validator::key_of(["admin", "user"]));
///
/// assert!(validator.validate(&json!({ "id": 1, "role": "admin" })).is_success());
/// ```
pub struct Validator;

impl Validator {
    /// Creates a string validator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Validator, ValidatorLike};
    /// use serde_json::json;
    ///
    /// assert!(Validator::string().validate(&json!("hi")).is_success());
    /// assert!(Validator::string().validate(&json!(42)).is_failure());
    /// ```
    pub fn string() -> StringValidator {
        StringValidator::new()
    }

    /// Creates a number validator producing `f64`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Validator, ValidatorLike};
    /// use serde_json::json;
    ///
    /// let result = Validator::number().validate(&json!(1.5));
    /// assert_eq!(result.into_result().unwrap(), 1.5);
    /// ```
    pub fn number() -> NumberValidator {
        NumberValidator::new()
    }

    /// Creates a boolean validator.
    pub fn boolean() -> BooleanValidator {
        BooleanValidator::new()
    }

    /// Creates a validator accepting exactly `null`.
    pub fn null() -> NullValidator {
        NullValidator::new()
    }

    /// Creates a validator accepting exactly absence.
    pub fn undefined() -> UndefinedValidator {
        UndefinedValidator::new()
    }

    /// Creates a validator accepting one exact value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Validator, ValidatorLike};
    /// use serde_json::json;
    ///
    /// let version = Validator::literal(2);
    /// assert!(version.validate(&json!(2)).is_success());
    /// assert!(version.validate(&json!(3)).is_failure());
    /// ```
    pub fn literal(expected: impl Into<Value>) -> LiteralValidator {
        LiteralValidator::new(expected)
    }

    /// Creates a validator accepting any string among the given keys.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Validator, ValidatorLike};
    /// use serde_json::json;
    ///
    /// let color = Validator::key_of(["red", "green", "blue"]);
    /// assert!(color.validate(&json!("red")).is_success());
    /// assert!(color.validate(&json!("mauve")).is_failure());
    /// ```
    pub fn key_of<I, S>(keys: I) -> KeyOfValidator
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        KeyOfValidator::new(keys)
    }

    /// Creates an array validator with the given item validator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Validator, ValidatorLike};
    /// use serde_json::json;
    ///
    /// let numbers = Validator::array(Validator::number());
    /// assert!(numbers.validate(&json!([1, 2, 3])).is_success());
    ///
    /// // Every bad item is reported.
    /// let errors = numbers.validate(&json!([1, "x", null])).into_result().unwrap_err();
    /// assert_eq!(errors.len(), 2);
    /// ```
    pub fn array<V: ValidatorLike>(item: V) -> ArrayValidator<V> {
        ArrayValidator::new(item)
    }

    /// Creates a tuple validator with one validator per position.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{boxed, Validator, ValidatorLike};
    /// use serde_json::json;
    ///
    /// let pair = Validator::tuple(vec![
    ///     boxed(Validator::string()),
    ///     boxed(Validator::number()),
    /// ]);
    ///
    /// assert!(pair.validate(&json!(["x", 1])).is_success());
    /// assert!(pair.validate(&json!(["x"])).is_failure());
    /// ```
    pub fn tuple(slots: Vec<Box<dyn ValueValidator>>) -> TupleValidator {
        TupleValidator::new(slots)
    }

    /// Creates an object validator with no fields; declare fields with
    /// [`ObjectValidator::field`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Validator, ValidatorLike};
    /// use serde_json::json;
    ///
    /// let user = Validator::object()
    ///     .field("name", Validator::string())
    ///     .field("age", Validator::number());
    ///
    /// assert!(user.validate(&json!({ "name": "ada", "age": 36 })).is_success());
    /// ```
    pub fn object() -> ObjectValidator {
        ObjectValidator::new()
    }

    /// Creates a dictionary validator from a key validator and a value
    /// validator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Validator, ValidatorLike};
    /// use serde_json::json;
    ///
    /// let scores = Validator::dictionary(Validator::string(), Validator::number());
    /// assert!(scores.validate(&json!({ "alice": 10, "bob": 7 })).is_success());
    /// ```
    pub fn dictionary<K, C>(key: K, value: C) -> DictionaryValidator<K, C>
    where
        K: ValidatorLike<Output = String>,
        C: ValidatorLike,
    {
        DictionaryValidator::new(key, value)
    }

    /// Creates a union validator trying each alternative in order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{boxed, Validator, ValidatorLike};
    /// use serde_json::json;
    ///
    /// let id = Validator::union(vec![
    ///     boxed(Validator::string()),
    ///     boxed(Validator::number()),
    /// ]);
    ///
    /// assert!(id.validate(&json!("u-1")).is_success());
    /// assert!(id.validate(&json!(17)).is_success());
    /// assert!(id.validate(&json!(true)).is_failure());
    /// ```
    pub fn union(alternatives: Vec<Box<dyn ValueValidator>>) -> UnionValidator {
        UnionValidator::new(alternatives)
    }

    /// Creates a union of literal validators, one per given value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Validator, ValidatorLike};
    /// use serde_json::json;
    ///
    /// let level = Validator::one_of(["debug", "info", "warn", "error"]);
    /// assert!(level.validate(&json!("info")).is_success());
    /// assert!(level.validate(&json!("silly")).is_failure());
    /// ```
    pub fn one_of<I, V>(values: I) -> UnionValidator
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let alternatives: Vec<Box<dyn ValueValidator>> = values
            .into_iter()
            .map(|value| Box::new(LiteralValidator::new(value)) as Box<dyn ValueValidator>)
            .collect();
        UnionValidator::new(alternatives)
    }

    /// Creates an intersection validator requiring every part to accept
    /// the value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{boxed, Validator, ValidatorLike};
    /// use serde_json::json;
    ///
    /// let entity = Validator::intersection(vec![
    ///     boxed(Validator::object().field("id", Validator::number())),
    ///     boxed(Validator::object().field("name", Validator::string())),
    /// ]);
    ///
    /// let output = entity
    ///     .validate(&json!({ "id": 1, "name": "a" }))
    ///     .into_result()
    ///     .unwrap();
    /// assert_eq!(output, json!({ "id": 1, "name": "a" }));
    /// ```
    pub fn intersection(parts: Vec<Box<dyn ValueValidator>>) -> IntersectionValidator {
        IntersectionValidator::new(parts)
    }

    /// Wraps a validator so that absence also succeeds.
    ///
    /// Equivalent to [`ValidatorLike::optional`].
    pub fn optional<V: ValidatorLike>(inner: V) -> OptionalValidator<V> {
        OptionalValidator::new(inner)
    }

    /// Wraps a validator so that `null` also succeeds.
    pub fn nullable<V: ValidatorLike>(inner: V) -> NullableValidator<V> {
        NullableValidator::new(inner)
    }

    /// Builds a self-referential validator in two phases.
    ///
    /// The definition function receives a forward reference and returns
    /// the validator it resolves to; see [`RecursiveValidator`].
    pub fn recursion<F, V>(definition: F) -> RecursiveValidator
    where
        F: FnOnce(RecursiveValidator) -> V,
        V: ValidatorLike + 'static,
    {
        RecursiveValidator::new(definition)
    }

    /// Creates a validator for RFC 3339 date strings, producing
    /// `chrono::DateTime<FixedOffset>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::{Validator, ValidatorLike};
    /// use serde_json::json;
    ///
    /// let date = Validator::iso_date();
    /// assert!(date.validate(&json!("2018-12-25T10:00:00Z")).is_success());
    ///
    /// let errors = date.validate(&json!("not a date")).into_result().unwrap_err();
    /// assert_eq!(errors.first().message, "Expected ISO date, got: \"not a date\"");
    /// ```
    pub fn iso_date() -> TransformValidator<StringValidator, DateTime<FixedOffset>> {
        Self::string().flat_map(|text| {
            DateTime::parse_from_rfc3339(&text)
                .map_err(|_| format!("Expected ISO date, got: {}", Value::String(text)))
        })
    }
}

/// Boxes a validator as a type-erased [`ValueValidator`].
///
/// Heterogeneous combinators (`tuple`, `union`, `intersection`) take their
/// children in this form.
pub fn boxed<V: ValidatorLike + 'static>(validator: V) -> Box<dyn ValueValidator> {
    Box::new(validator)
}

/// Tests whether a value satisfies a validator, discarding the details.
///
/// # Example
///
/// ```rust
/// use verdict::{is, Validator};
/// use serde_json::json;
///
/// assert!(is(&json!("x"), &Validator::string()));
/// assert!(!is(&json!(1), &Validator::string()));
/// ```
pub fn is<V: ValidatorLike>(value: &Value, validator: &V) -> bool {
    validator.validate(value).is_success()
}

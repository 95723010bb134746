//! # Verdict
//!
//! Composable validators for dynamically-typed values that accumulate ALL
//! errors, with every error carrying the full path to where it occurred.
//!
//! ## Overview
//!
//! A validator both checks a value's shape and produces a typed output, so
//! validation doubles as safe decoding. Structural combinators (arrays,
//! tuples, objects, dictionaries) validate every member and report every
//! failure rather than short-circuiting on the first, using stillwater's
//! `Validation` type for applicative error accumulation. A monadic layer
//! (`transform`, `flat_map`, `map`, `filter`) refines outputs, and
//! recursion support handles self-referential shapes.
//!
//! ## Core Types
//!
//! - [`Validator`]: Entry point for creating validators
//! - [`ValidatorLike`]: The trait every validator implements
//! - [`Context`]: The path to the value being validated (e.g., `root / users / 0 / email`)
//! - [`ValidationError`]: A single error with its context
//! - [`ValidationErrors`]: A non-empty collection of errors
//! - [`Config`]: Per-run options such as object-key transformation
//!
//! ## Example
//!
//! ```rust
//! use verdict::{error_debug_string, Validator, ValidatorLike};
//! use serde_json::json;
//!
//! let user = Validator::object()
//!     .field("name", Validator::string())
//!     .field("age", Validator::number())
//!     .field("email", Validator::string().optional());
//!
//! // Valid input decodes to an output object.
//! let result = user.validate(&json!({ "name": "ada", "age": 36 }));
//! assert!(result.is_success());
//!
//! // Invalid input reports every failing field with its path.
//! let errors = user
//!     .validate(&json!({ "name": 1, "age": "x" }))
//!     .into_result()
//!     .unwrap_err();
//! assert_eq!(
//!     error_debug_string(&errors),
//!     "At [root / name] Expected string, got number\n\
//!      At [root / age] Expected number, got string"
//! );
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod path;
pub mod validator;

pub use config::{snake_case_transformation, Config, KeyTransform};
pub use diagnostics::{error_debug_string, runtime_kind, value_string};
pub use error::{failure, type_failure, ValidationError, ValidationErrors};
pub use path::{Context, PathSegment};
pub use validator::{
    boxed, is, ArrayValidator, BooleanValidator, DictionaryValidator, IntersectionValidator,
    KeyOfValidator, LiteralValidator, NullValidator, NullableValidator, NumberValidator,
    ObjectValidator, OptionalValidator, RecursiveValidator, StringValidator, Tagged,
    TaggedValidator, TransformError, TransformValidator, TupleValidator, UndefinedValidator,
    UnionValidator, Validator, ValidatorLike, ValueValidator,
};

/// Type alias for validation results using ValidationErrors
pub type ValidationResult<T> = stillwater::Validation<T, ValidationErrors>;

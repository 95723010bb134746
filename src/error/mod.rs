//! Error types for validation failures.
//!
//! This module provides types for representing validation errors with the
//! context at which they occurred, plus the centralized failure
//! constructors validators report through.

mod validation_error;

pub use validation_error::{failure, type_failure, ValidationError, ValidationErrors};

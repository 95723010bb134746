//! Self-referential validators.

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use stillwater::Validation;

use crate::config::Config;
use crate::error::{failure, ValidationErrors};
use crate::path::Context;
use crate::validator::traits::{ValidatorLike, ValueValidator};

type RecursionCell = Arc<RwLock<Option<Arc<dyn ValueValidator>>>>;

/// A validator that delegates to a late-bound definition, enabling
/// self-reference.
///
/// Built in two phases: a forward reference sharing a write-once cell is
/// handed to the definition function, which returns the real validator
/// closing over it; the cell is then bound. Clones share the cell, so the
/// forward reference inside the definition and the value returned to the
/// caller are the same validator.
///
/// Validating a forward reference that escaped before its definition was
/// bound produces a failure, not a panic.
///
/// # Example
///
/// ```rust
/// use verdict::{Validator, ValidatorLike};
/// use serde_json::json;
///
/// let tree = Validator::recursion(|tree| {
///     Validator::object()
///         .field("value", Validator::number())
///         .field("children", Validator::array(tree).optional())
/// });
///
/// let input = json!({ "value": 1, "children": [{ "value": 2 }] });
/// assert!(tree.validate(&input).is_success());
/// ```
#[derive(Clone)]
pub struct RecursiveValidator {
    target: RecursionCell,
}

impl RecursiveValidator {
    /// Builds a self-referential validator from a definition function.
    ///
    /// The definition receives the forward reference and returns the
    /// validator it resolves to.
    pub fn new<F, V>(definition: F) -> Self
    where
        F: FnOnce(RecursiveValidator) -> V,
        V: ValidatorLike + 'static,
    {
        let cell: RecursionCell = Arc::new(RwLock::new(None));
        let forward = RecursiveValidator {
            target: Arc::clone(&cell),
        };
        let target = definition(forward);
        *cell.write() = Some(Arc::new(target));
        RecursiveValidator { target: cell }
    }
}

impl ValidatorLike for RecursiveValidator {
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
        // Clone the target out so the lock is not held while recursing.
        let target = self.target.read().clone();
        match target {
            Some(validator) => validator.validate_value(value, config, context),
            None => failure(
                context,
                "recursive validator used before its definition was bound",
            ),
        }
    }
}

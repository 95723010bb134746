//! The transform primitive and branded outputs.
//!
//! [`TransformValidator`] wraps an inner validator with a stored function
//! that inspects the whole validation outcome. `flat_map`, `map`, `filter`,
//! and `fallback` on [`ValidatorLike`] all reduce to it.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use stillwater::Validation;

use crate::config::Config;
use crate::error::{failure, ValidationErrors};
use crate::path::Context;
use crate::validator::traits::ValidatorLike;

/// The stored transformation function of a [`TransformValidator`].
type TransformFn<A, B> =
    Arc<dyn Fn(Validation<A, ValidationErrors>) -> Result<B, TransformError> + Send + Sync>;

/// The error half of a transformation function's result.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// A plain message, reported as a single failure at the context where
    /// the transform runs.
    #[error("{0}")]
    Message(String),
    /// Already-located errors, propagated verbatim.
    #[error(transparent)]
    Errors(#[from] ValidationErrors),
}

impl From<String> for TransformError {
    fn from(message: String) -> Self {
        TransformError::Message(message)
    }
}

impl From<&str> for TransformError {
    fn from(message: &str) -> Self {
        TransformError::Message(message.to_string())
    }
}

/// A validator wrapping another with an outcome-inspecting function.
///
/// Built by [`ValidatorLike::transform`] and the combinators derived from
/// it. The inner validator runs exactly once; the stored function then
/// decides the outcome, which lets it recover from failures as well as
/// refine successes.
pub struct TransformValidator<V: ValidatorLike, B> {
    inner: V,
    f: TransformFn<V::Output, B>,
}

impl<V, B> TransformValidator<V, B>
where
    V: ValidatorLike,
    B: Serialize + Send + Sync + 'static,
{
    pub(crate) fn new<F>(inner: V, f: F) -> Self
    where
        F: Fn(Validation<V::Output, ValidationErrors>) -> Result<B, TransformError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            inner,
            f: Arc::new(f),
        }
    }
}

impl<V, B> Clone for TransformValidator<V, B>
where
    V: ValidatorLike + Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            f: Arc::clone(&self.f),
        }
    }
}

impl<V, B> ValidatorLike for TransformValidator<V, B>
where
    V: ValidatorLike,
    B: Serialize + Send + Sync + 'static,
{
    type Output = B;

    fn validate_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<B, ValidationErrors> {
        let inner = self.inner.validate_at(value, config, context);
        match (self.f)(inner) {
            Ok(output) => Validation::Success(output),
            Err(TransformError::Message(message)) => failure(context, message),
            Err(TransformError::Errors(errors)) => Validation::Failure(errors),
        }
    }

    fn validate_value_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Option<Value>, ValidationErrors> {
        match self.validate_at(value, config, context) {
            Validation::Success(output) => match serde_json::to_value(&output) {
                Ok(value) => Validation::Success(Some(value)),
                Err(err) => failure(
                    context,
                    format!("transformed value is not representable as JSON: {}", err),
                ),
            },
            Validation::Failure(errors) => Validation::Failure(errors),
        }
    }
}

/// A value branded with a zero-cost marker type.
///
/// `Tagged<T, Tag>` stores a `T` and nothing else; the marker exists only
/// in the type system, so two otherwise-identical values with different
/// tags cannot be mixed up. Derefs to `T`.
#[repr(transparent)]
pub struct Tagged<T, Tag> {
    value: T,
    _tag: PhantomData<Tag>,
}

impl<T, Tag> Tagged<T, Tag> {
    /// Brands a value.
    pub fn new(value: T) -> Self {
        Self {
            value,
            _tag: PhantomData,
        }
    }

    /// Unwraps the branded value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, Tag> Deref for Tagged<T, Tag> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: Clone, Tag> Clone for Tagged<T, Tag> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _tag: PhantomData,
        }
    }
}

impl<T: fmt::Debug, Tag> fmt::Debug for Tagged<T, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

impl<T: PartialEq, Tag> PartialEq for Tagged<T, Tag> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, Tag> Eq for Tagged<T, Tag> {}

impl<T: Serialize, Tag> Serialize for Tagged<T, Tag> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

/// A validator that brands its inner validator's output.
///
/// Built by [`ValidatorLike::tagged`]. The brand is a compile-time relabel:
/// the typed output becomes [`Tagged<Inner, Tag>`](Tagged) while the
/// dynamic channel passes through untouched.
pub struct TaggedValidator<V, Tag> {
    inner: V,
    _tag: PhantomData<Tag>,
}

impl<V, Tag> TaggedValidator<V, Tag> {
    pub(crate) fn new(inner: V) -> Self {
        Self {
            inner,
            _tag: PhantomData,
        }
    }
}

impl<V: Clone, Tag> Clone for TaggedValidator<V, Tag> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _tag: PhantomData,
        }
    }
}

impl<V, Tag> ValidatorLike for TaggedValidator<V, Tag>
where
    V: ValidatorLike,
    Tag: Send + Sync + 'static,
{
    type Output = Tagged<V::Output, Tag>;

    fn validate_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Self::Output, ValidationErrors> {
        self.inner.validate_at(value, config, context).map(Tagged::new)
    }

    fn validate_value_at(
        &self,
        value: Option<&Value>,
        config: &Config,
        context: &Context,
    ) -> Validation<Option<Value>, ValidationErrors> {
        self.inner.validate_value_at(value, config, context)
    }
}

//! Validation contexts: paths locating values in nested input.
//!
//! This module provides [`Context`] and [`PathSegment`] types for tracking
//! where in a nested structure a validator is currently looking. Every
//! validation error carries the context at which it was produced.

use std::fmt::{self, Display};

/// A segment of a validation context.
///
/// Contexts are built from segments that represent either field access or
/// array indexing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A field/property access (e.g., `user`, `email`)
    Field(String),
    /// An array index access (e.g., `0`, `42`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, "{}", name),
            PathSegment::Index(idx) => write!(f, "{}", idx),
        }
    }
}

/// The location a validator is currently validating.
///
/// A `Context` is the path from the root of the input down to the current
/// value. It renders as `root` followed by ` / `-separated segments, the
/// form used in error messages.
///
/// # Example
///
/// ```rust
/// use verdict::Context;
///
/// let context = Context::root()
///     .push_field("users")
///     .push_index(0)
///     .push_field("email");
///
/// assert_eq!(context.to_string(), "root / users / 0 / email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Context {
    segments: Vec<PathSegment>,
}

impl Context {
    /// Creates an empty context representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new context with a field segment appended.
    ///
    /// This method does not modify the original context; it returns a new one.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new context with an index segment appended.
    ///
    /// This method does not modify the original context; it returns a new one.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns true if this is the root context (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this context.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this context has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the context's segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the parent context (all segments except the last), or None
    /// if this is the root.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            None
        } else {
            Some(Self {
                segments: self.segments[..self.segments.len() - 1].to_vec(),
            })
        }
    }

    /// Returns the last segment, or None if this is the root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root")?;
        for segment in &self.segments {
            write!(f, " / {}", segment)?;
        }
        Ok(())
    }
}

//! Validation configuration.
//!
//! A [`Config`] is threaded through every validation call. Its only
//! recognized option is `transform_object_keys`, which rewrites declared
//! object field names before they are looked up in the input.

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;

/// A key-transformation function shared by every validator in a run.
pub type KeyTransform = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Options controlling a validation run.
///
/// The default configuration applies no key transformation. Configurations
/// are cheap to clone and safe to share across threads.
///
/// # Example
///
/// ```rust
/// use verdict::{snake_case_transformation, Config, Validator, ValidatorLike};
/// use serde_json::json;
///
/// let validator = Validator::object().field("userName", Validator::string());
/// let config = Config::new().with_transform_object_keys(snake_case_transformation);
///
/// // The declared key `userName` reads the input key `user_name`.
/// let result = validator.validate_with(&json!({ "user_name": "ada" }), &config);
/// assert!(result.is_success());
/// ```
#[derive(Clone, Default)]
pub struct Config {
    transform_object_keys: Option<KeyTransform>,
}

impl Config {
    /// Creates a configuration with no options set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the object-key transformation and returns self for chaining.
    pub fn with_transform_object_keys<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.transform_object_keys = Some(Arc::new(transform));
        self
    }

    /// Applies the configured key transformation to a declared field name.
    ///
    /// Returns the name unchanged when no transformation is configured.
    pub fn transform_key<'k>(&self, key: &'k str) -> Cow<'k, str> {
        match &self.transform_object_keys {
            Some(transform) => Cow::Owned(transform(key)),
            None => Cow::Borrowed(key),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "transform_object_keys",
                &self.transform_object_keys.as_ref().map(|_| "<fn>"),
            )
            .finish()
    }
}

static UPPER_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());
static LOWER_UPPER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").unwrap());

/// Rewrites a camelCase key as snake_case.
///
/// Underscores are inserted between an uppercase run and a following
/// capitalized word, and between a lowercase letter or digit and a
/// following uppercase letter; the result is lowercased.
///
/// # Example
///
/// ```rust
/// use verdict::snake_case_transformation;
///
/// assert_eq!(snake_case_transformation("fieldName"), "field_name");
/// assert_eq!(snake_case_transformation("XMLHttpRequest"), "xml_http_request");
/// ```
pub fn snake_case_transformation(key: &str) -> String {
    let pass = UPPER_RUN_RE.replace_all(key, "${1}_${2}");
    let pass = LOWER_UPPER_RE.replace_all(&pass, "${1}_${2}");
    pass.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_keeps_keys() {
        let config = Config::default();
        assert_eq!(config.transform_key("fieldName"), "fieldName");
    }

    #[test]
    fn test_configured_transform_applies() {
        let config = Config::new().with_transform_object_keys(snake_case_transformation);
        assert_eq!(config.transform_key("fieldName"), "field_name");
    }

    #[test]
    fn test_custom_transform() {
        let config = Config::new().with_transform_object_keys(|key: &str| key.to_uppercase());
        assert_eq!(config.transform_key("name"), "NAME");
    }

    #[test]
    fn test_snake_case_transformation() {
        assert_eq!(snake_case_transformation("fieldName"), "field_name");
        assert_eq!(snake_case_transformation("Field"), "field");
        assert_eq!(snake_case_transformation("already_snake"), "already_snake");
        assert_eq!(snake_case_transformation("XMLHttpRequest"), "xml_http_request");
        assert_eq!(snake_case_transformation("IOStream"), "io_stream");
        assert_eq!(snake_case_transformation("field1Name"), "field1_name");
        assert_eq!(snake_case_transformation(""), "");
    }
}

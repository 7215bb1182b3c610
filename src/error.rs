//! Validation error values
//!
//! Rules report failures as [`RuleError`], a short machine-readable tag such
//! as `"required"` or `"email"`. Membership and length rules attach
//! parameters, which are rendered after a `|` separator (`"in|[1 2]"`).
//!
//! The textual form is the contract: callers match on `err.to_string()` or
//! [`RuleError::code`], and translate or localise the tag themselves.
//!
//! [`Errors`] collects the first failure of each named field.
//!
//! # Example
//!
//! ```
//! use tideline::{Errors, RuleError};
//!
//! let err = RuleError::with_params("in", "[1 2]");
//! assert_eq!(err.code(), "in");
//! assert_eq!(err.to_string(), "in|[1 2]");
//!
//! let mut errors = Errors::new();
//! errors.insert("name", RuleError::new("required"));
//! errors.insert("email", RuleError::new("email"));
//! assert_eq!(errors.to_string(), "email: email; name: required.");
//! ```

use std::borrow::Cow;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;

/// A tagged validation failure.
///
/// Equality compares both the code and the parameters, so two errors are
/// equal exactly when their textual forms are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{code}{}", params_suffix(.params))]
pub struct RuleError {
    code: Cow<'static, str>,
    params: Option<String>,
}

fn params_suffix(params: &Option<String>) -> String {
    match params {
        Some(params) => format!("|{params}"),
        None => String::new(),
    }
}

impl RuleError {
    /// Create an error carrying only a tag.
    ///
    /// # Example
    ///
    /// ```
    /// use tideline::RuleError;
    ///
    /// assert_eq!(RuleError::new("email").to_string(), "email");
    /// ```
    pub fn new(code: impl Into<Cow<'static, str>>) -> Self {
        RuleError {
            code: code.into(),
            params: None,
        }
    }

    /// Create an error with a tag and a parameter string.
    ///
    /// # Example
    ///
    /// ```
    /// use tideline::RuleError;
    ///
    /// let err = RuleError::with_params("length", "3|10");
    /// assert_eq!(err.to_string(), "length|3|10");
    /// ```
    pub fn with_params(code: impl Into<Cow<'static, str>>, params: impl Into<String>) -> Self {
        RuleError {
            code: code.into(),
            params: Some(params.into()),
        }
    }

    /// The tag without parameters.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The parameters, if the rule attached any.
    pub fn params(&self) -> Option<&str> {
        self.params.as_deref()
    }
}

/// First failure per field, ordered by field name.
///
/// Produced by [`Fields`](crate::Fields) and returned from
/// [`Validatable::validate`](crate::Validatable::validate).
///
/// The `Display` form lists every field as `name: tag`, separated by `; ` and
/// terminated by a period.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors(BTreeMap<String, RuleError>);

impl Errors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Errors(BTreeMap::new())
    }

    /// Record a failure for `field`.
    ///
    /// A field keeps its first failure; later inserts for the same field are
    /// ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use tideline::{Errors, RuleError};
    ///
    /// let mut errors = Errors::new();
    /// errors.insert("age", RuleError::new("required"));
    /// errors.insert("age", RuleError::new("number_integer"));
    /// assert_eq!(errors.get("age").map(|e| e.code()), Some("required"));
    /// ```
    pub fn insert(&mut self, field: impl Into<String>, error: RuleError) {
        self.0.entry(field.into()).or_insert(error);
    }

    /// The failure recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&RuleError> {
        self.0.get(field)
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(field, error)` pairs in field order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, RuleError> {
        self.0.iter()
    }

    /// Move every failure of `other` into `self`, prefixing each field name
    /// with `prefix.`.
    ///
    /// # Example
    ///
    /// ```
    /// use tideline::{Errors, RuleError};
    ///
    /// let mut inner = Errors::new();
    /// inner.insert("city", RuleError::new("required"));
    ///
    /// let mut outer = Errors::new();
    /// outer.merge_nested("address", inner);
    /// assert!(outer.get("address.city").is_some());
    /// ```
    pub fn merge_nested(&mut self, prefix: &str, other: Errors) {
        for (field, error) in other {
            self.insert(format!("{prefix}.{field}"), error);
        }
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Errors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        for (i, (field, error)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {error}")?;
        }
        write!(f, ".")
    }
}

impl StdError for Errors {}

impl IntoIterator for Errors {
    type Item = (String, RuleError);
    type IntoIter = btree_map::IntoIter<String, RuleError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = (&'a String, &'a RuleError);
    type IntoIter = btree_map::Iter<'a, String, RuleError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, RuleError)> for Errors {
    fn from_iter<I: IntoIterator<Item = (K, RuleError)>>(iter: I) -> Self {
        let mut errors = Errors::new();
        for (field, error) in iter {
            errors.insert(field, error);
        }
        errors
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::ser::SerializeMap;
    use serde::{Serialize, Serializer};

    use super::{Errors, RuleError};

    impl Serialize for RuleError {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl Serialize for Errors {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (field, error) in self {
                map.serialize_entry(field, error)?;
            }
            map.end()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_params() {
        assert_eq!(RuleError::new("required").to_string(), "required");
    }

    #[test]
    fn test_display_with_params() {
        let err = RuleError::with_params("in", "[]");
        assert_eq!(err.to_string(), "in|[]");
        assert_eq!(err.code(), "in");
        assert_eq!(err.params(), Some("[]"));
    }

    #[test]
    fn test_equality_follows_text() {
        assert_eq!(RuleError::new("email"), RuleError::new(String::from("email")));
        assert_ne!(RuleError::new("in"), RuleError::with_params("in", "[1]"));
    }

    #[test]
    fn test_errors_keep_first_failure() {
        let mut errors = Errors::new();
        errors.insert("name", RuleError::new("required"));
        errors.insert("name", RuleError::new("alpha"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some(&RuleError::new("required")));
    }

    #[test]
    fn test_errors_display_sorted() {
        let errors: Errors = [
            ("zip", RuleError::new("digits")),
            ("city", RuleError::new("required")),
        ]
        .into_iter()
        .collect();
        assert_eq!(errors.to_string(), "city: required; zip: digits.");
    }

    #[test]
    fn test_empty_errors() {
        let errors = Errors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.to_string(), "");
        assert_eq!(errors.into_result(), Ok(()));
    }

    #[test]
    fn test_merge_nested_prefixes_fields() {
        let inner: Errors = [("street", RuleError::new("required"))].into_iter().collect();
        let mut outer = Errors::new();
        outer.insert("name", RuleError::new("required"));
        outer.merge_nested("address", inner);

        let fields: Vec<&str> = outer.iter().map(|(field, _)| field.as_str()).collect();
        assert_eq!(fields, vec!["address.street", "name"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_as_tags() {
        let mut errors = Errors::new();
        errors.insert("role", RuleError::with_params("in", "[admin user]"));
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"role":"in|[admin user]"}"#);
    }
}

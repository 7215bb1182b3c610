//! Validation rules
//!
//! A [`Rule`] checks one value and returns `Ok(())` or a tagged
//! [`RuleError`]. Rules are immutable: [`WithMessage::with_message`] returns a
//! sibling rule with a different tag and leaves the original untouched, so
//! the `const` rules exported by this crate can be shared freely.
//!
//! Every rule accepts the value itself and its optional or pointer forms
//! (see [`Inspect`](crate::Inspect)); `None` means the value is absent.
//!
//! | rule | absent | empty | otherwise |
//! |------|--------|-------|-----------|
//! | [`REQUIRED`] | fails | fails | passes |
//! | [`NIL_OR_NOT_EMPTY`] | passes | fails | passes |
//! | [`NOT_NIL`] | fails | passes | passes |
//! | [`is_in`] | passes | passes | membership |
//! | [`StringRule`] | passes | passes | predicate |
//! | [`length`] | passes | passes | length bounds |
//!
//! # Example
//!
//! ```
//! use tideline::rule::{validate, Rule, WithMessage, REQUIRED};
//! use tideline::is;
//!
//! let email = String::from("ada@example.com");
//! assert!(validate(&email, &[&REQUIRED, &is::EMAIL]).is_ok());
//!
//! let missing = String::new();
//! let err = validate(&missing, &[&REQUIRED.with_message("email_missing"), &is::EMAIL]);
//! assert_eq!(err.unwrap_err().to_string(), "email_missing");
//! ```

mod by;
mod in_set;
mod length;
mod required;
mod string;

use std::borrow::Cow;

use crate::RuleError;

pub use by::{by, FnRule};
pub use in_set::{is_in, InRule};
pub use length::{length, LengthRule};
pub use required::{NotNilRule, RequiredRule, NIL_OR_NOT_EMPTY, NOT_NIL, REQUIRED};
pub use string::{matches, StringRule};

/// A check applied to a single value.
///
/// Implementations must be pure: the same value always yields the same
/// result and nothing is mutated.
pub trait Rule<T: ?Sized>: Send + Sync {
    /// Validate `value`, returning the rule's tagged error on failure.
    fn validate(&self, value: &T) -> Result<(), RuleError>;
}

impl<T: ?Sized, R: Rule<T> + ?Sized> Rule<T> for &R {
    #[inline]
    fn validate(&self, value: &T) -> Result<(), RuleError> {
        (**self).validate(value)
    }
}

impl<T: ?Sized, R: Rule<T> + ?Sized> Rule<T> for Box<R> {
    #[inline]
    fn validate(&self, value: &T) -> Result<(), RuleError> {
        (**self).validate(value)
    }
}

/// Rules whose failure tag can be replaced.
pub trait WithMessage: Sized {
    /// The tag reported on failure.
    fn message(&self) -> &str;

    /// A copy of this rule that reports `message` instead.
    ///
    /// # Example
    ///
    /// ```
    /// use tideline::rule::{Rule, WithMessage, REQUIRED};
    ///
    /// let custom = REQUIRED.with_message("name_missing");
    /// assert_eq!(custom.validate("").unwrap_err().to_string(), "name_missing");
    /// assert_eq!(REQUIRED.message(), "required");
    /// ```
    #[must_use]
    fn with_message(&self, message: impl Into<Cow<'static, str>>) -> Self;
}

/// Apply `rules` to `value` in order, stopping at the first failure.
///
/// # Example
///
/// ```
/// use tideline::rule::{validate, REQUIRED};
/// use tideline::is;
///
/// let port = String::from("99999");
/// let err = validate(&port, &[&REQUIRED, &is::DIGIT, &is::PORT]).unwrap_err();
/// assert_eq!(err.to_string(), "port");
/// ```
pub fn validate<T: ?Sized>(value: &T, rules: &[&dyn Rule<T>]) -> Result<(), RuleError> {
    for rule in rules {
        if let Err(err) = rule.validate(value) {
            #[cfg(feature = "tracing")]
            tracing::trace!(error = %err, "rule rejected value");
            return Err(err);
        }
    }
    Ok(())
}

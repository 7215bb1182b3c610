//! String predicate rules

use std::borrow::Cow;
use std::fmt;

use regex::Regex;

use super::{Rule, WithMessage};
use crate::predicate::{Matches, Predicate};
use crate::{Inspect, RuleError};

/// Applies a string predicate to non-empty text.
///
/// Empty text and absent values pass, and so do values that are not text at
/// all; presence is [`REQUIRED`](super::REQUIRED)'s concern. Every rule in
/// the [`is`](crate::is) catalog is a `StringRule`.
#[derive(Clone)]
pub struct StringRule<P = fn(&str) -> bool> {
    predicate: P,
    message: Cow<'static, str>,
}

impl<P> StringRule<P> {
    /// Wrap `predicate`, reporting `tag` when it fails.
    ///
    /// # Example
    ///
    /// ```
    /// use tideline::rule::{Rule, StringRule};
    ///
    /// fn is_even_length(value: &str) -> bool {
    ///     value.len() % 2 == 0
    /// }
    ///
    /// const EVEN: StringRule = StringRule::new(is_even_length, "even_length");
    ///
    /// assert!(EVEN.validate("ab").is_ok());
    /// assert!(EVEN.validate("").is_ok());
    /// assert_eq!(EVEN.validate("abc").unwrap_err().to_string(), "even_length");
    /// ```
    pub const fn new(predicate: P, tag: &'static str) -> Self {
        StringRule {
            predicate,
            message: Cow::Borrowed(tag),
        }
    }

    /// The wrapped predicate.
    pub fn predicate(&self) -> &P {
        &self.predicate
    }
}

impl<P> fmt::Debug for StringRule<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringRule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl<T, P> Rule<T> for StringRule<P>
where
    T: Inspect + ?Sized,
    P: Predicate<str>,
{
    fn validate(&self, value: &T) -> Result<(), RuleError> {
        match value.as_text() {
            Some(text) if !text.is_empty() && !self.predicate.check(text) => {
                Err(RuleError::new(self.message.clone()))
            }
            _ => Ok(()),
        }
    }
}

impl<P: Clone> WithMessage for StringRule<P> {
    fn message(&self) -> &str {
        &self.message
    }

    fn with_message(&self, message: impl Into<Cow<'static, str>>) -> Self {
        StringRule {
            predicate: self.predicate.clone(),
            message: message.into(),
        }
    }
}

/// Create a rule requiring non-empty text to match `pattern`.
///
/// Fails with `match`.
///
/// # Example
///
/// ```
/// use regex::Regex;
/// use tideline::rule::{matches, Rule};
///
/// let sku = matches(Regex::new(r"^[A-Z]{3}-[0-9]{4}$").unwrap());
/// assert!(sku.validate("ABC-1234").is_ok());
/// assert_eq!(sku.validate("abc-1234").unwrap_err().to_string(), "match");
/// ```
pub fn matches(pattern: Regex) -> StringRule<Matches> {
    StringRule::new(Matches(pattern), "match")
}

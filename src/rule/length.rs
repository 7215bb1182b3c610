//! Length bounds

use std::borrow::Cow;

use super::{Rule, WithMessage};
use crate::{Inspect, RuleError};

/// Passes when the length of a string (in chars) or collection lies within
/// `min..=max`. A `max` of zero means no upper bound.
///
/// Absent and empty values pass, as do values without a length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthRule {
    min: usize,
    max: usize,
    message: Cow<'static, str>,
}

/// Create a length rule. Fails with `length|min|max`.
///
/// # Example
///
/// ```
/// use tideline::rule::{length, Rule};
///
/// let rule = length(2, 4);
/// assert!(rule.validate("abc").is_ok());
/// assert!(rule.validate("").is_ok());
/// assert_eq!(rule.validate("abcde").unwrap_err().to_string(), "length|2|4");
/// assert!(rule.validate(&vec![1, 2]).is_ok());
///
/// let at_least_three = length(3, 0);
/// assert!(at_least_three.validate(&"x".repeat(500)).is_ok());
/// ```
pub const fn length(min: usize, max: usize) -> LengthRule {
    LengthRule {
        min,
        max,
        message: Cow::Borrowed("length"),
    }
}

impl LengthRule {
    /// Lower bound, inclusive.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Upper bound, inclusive; zero when unbounded.
    pub fn max(&self) -> usize {
        self.max
    }
}

impl<T: Inspect + ?Sized> Rule<T> for LengthRule {
    fn validate(&self, value: &T) -> Result<(), RuleError> {
        if value.is_empty_value() {
            return Ok(());
        }
        let Some(len) = value.length() else {
            return Ok(());
        };
        if len < self.min || (self.max > 0 && len > self.max) {
            return Err(RuleError::with_params(
                self.message.clone(),
                format!("{}|{}", self.min, self.max),
            ));
        }
        Ok(())
    }
}

impl WithMessage for LengthRule {
    fn message(&self) -> &str {
        &self.message
    }

    fn with_message(&self, message: impl Into<Cow<'static, str>>) -> Self {
        LengthRule {
            message: message.into(),
            ..self.clone()
        }
    }
}

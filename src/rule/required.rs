//! Presence rules

use std::borrow::Cow;

use super::{Rule, WithMessage};
use crate::{Inspect, RuleError};

/// Fails on empty values, and on absent values unless `skip_nil` is set.
///
/// Use the [`REQUIRED`] and [`NIL_OR_NOT_EMPTY`] constants; derive variants
/// with [`WithMessage::with_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredRule {
    message: Cow<'static, str>,
    skip_nil: bool,
}

/// Rejects absent values and present-but-empty values.
///
/// # Example
///
/// ```
/// use tideline::rule::{Rule, REQUIRED};
///
/// assert!(REQUIRED.validate(&123).is_ok());
/// assert_eq!(REQUIRED.validate("").unwrap_err().to_string(), "required");
/// assert_eq!(REQUIRED.validate(&None::<&str>).unwrap_err().to_string(), "required");
/// ```
pub const REQUIRED: RequiredRule = RequiredRule {
    message: Cow::Borrowed("required"),
    skip_nil: false,
};

/// Accepts absent values but rejects present-but-empty values.
///
/// # Example
///
/// ```
/// use tideline::rule::{Rule, NIL_OR_NOT_EMPTY};
///
/// assert!(NIL_OR_NOT_EMPTY.validate(&None::<String>).is_ok());
/// assert!(NIL_OR_NOT_EMPTY.validate(&Some(String::new())).is_err());
/// ```
pub const NIL_OR_NOT_EMPTY: RequiredRule = RequiredRule {
    message: Cow::Borrowed("required"),
    skip_nil: true,
};

impl RequiredRule {
    /// Whether absent values pass.
    pub fn skip_nil(&self) -> bool {
        self.skip_nil
    }

    fn reject(&self) -> RuleError {
        RuleError::new(self.message.clone())
    }
}

impl<T: Inspect + ?Sized> Rule<T> for RequiredRule {
    fn validate(&self, value: &T) -> Result<(), RuleError> {
        if value.is_nil() {
            return if self.skip_nil {
                Ok(())
            } else {
                Err(self.reject())
            };
        }
        if value.is_empty_value() {
            return Err(self.reject());
        }
        Ok(())
    }
}

impl WithMessage for RequiredRule {
    fn message(&self) -> &str {
        &self.message
    }

    fn with_message(&self, message: impl Into<Cow<'static, str>>) -> Self {
        RequiredRule {
            message: message.into(),
            skip_nil: self.skip_nil,
        }
    }
}

/// Fails only on absent values; present-but-empty values pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotNilRule {
    message: Cow<'static, str>,
}

/// Rejects absent values.
///
/// # Example
///
/// ```
/// use tideline::rule::{Rule, NOT_NIL};
///
/// assert!(NOT_NIL.validate(&Some(0)).is_ok());
/// assert_eq!(NOT_NIL.validate(&None::<i32>).unwrap_err().to_string(), "not_nil");
/// ```
pub const NOT_NIL: NotNilRule = NotNilRule {
    message: Cow::Borrowed("not_nil"),
};

impl<T: Inspect + ?Sized> Rule<T> for NotNilRule {
    fn validate(&self, value: &T) -> Result<(), RuleError> {
        if value.is_nil() {
            Err(RuleError::new(self.message.clone()))
        } else {
            Ok(())
        }
    }
}

impl WithMessage for NotNilRule {
    fn message(&self) -> &str {
        &self.message
    }

    fn with_message(&self, message: impl Into<Cow<'static, str>>) -> Self {
        NotNilRule {
            message: message.into(),
        }
    }
}

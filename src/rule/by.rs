//! Closure-backed rules

use std::fmt;

use super::Rule;
use crate::RuleError;

/// A rule built from a closure. See [`by`].
#[derive(Clone, Copy)]
pub struct FnRule<F>(F);

impl<F> fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FnRule").finish_non_exhaustive()
    }
}

/// Turn a closure into a [`Rule`].
///
/// The closure decides its own tags, so `FnRule` does not implement
/// [`WithMessage`](super::WithMessage).
///
/// # Example
///
/// ```
/// use tideline::rule::{by, Rule};
/// use tideline::RuleError;
///
/// let even = by(|n: &i32| {
///     if n % 2 == 0 {
///         Ok(())
///     } else {
///         Err(RuleError::new("even"))
///     }
/// });
///
/// assert!(even.validate(&4).is_ok());
/// assert_eq!(even.validate(&3).unwrap_err().to_string(), "even");
/// ```
pub fn by<F>(f: F) -> FnRule<F> {
    FnRule(f)
}

impl<T, F> Rule<T> for FnRule<F>
where
    T: ?Sized,
    F: Fn(&T) -> Result<(), RuleError> + Send + Sync,
{
    #[inline]
    fn validate(&self, value: &T) -> Result<(), RuleError> {
        (self.0)(value)
    }
}

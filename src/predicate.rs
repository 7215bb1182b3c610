//! Boolean predicates and their combinators
//!
//! A [`Predicate`] is the check inside a [`StringRule`](crate::StringRule):
//! a pure function from a borrowed value to `bool`. Plain functions and
//! closures are predicates through a blanket impl, and predicates combine
//! with [`and`](PredicateExt::and), [`or`](PredicateExt::or) and
//! [`not`](PredicateExt::not).
//!
//! # Example
//!
//! ```rust
//! use tideline::predicate::*;
//!
//! let identifier = all_chars(|c: char| c.is_ascii_alphanumeric() || c == '_')
//!     .and(|s: &str| !s.starts_with(|c: char| c.is_ascii_digit()));
//!
//! assert!(identifier.check("user_id"));
//! assert!(!identifier.check("1st"));
//! assert!(!identifier.check("user-id"));
//! ```

use regex::Regex;

/// A composable check over values of type `T`.
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// True if `value` satisfies the predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Method chaining for predicates.
///
/// # Example
///
/// ```rust
/// use tideline::predicate::*;
///
/// let short_or_numeric = (|s: &str| s.len() < 4).or(all_chars(|c: char| c.is_ascii_digit()));
/// assert!(short_or_numeric.check("abc"));
/// assert!(short_or_numeric.check("123456"));
/// assert!(!short_or_numeric.check("abcdef"));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Both predicates must hold. `other` is not evaluated when `self` fails.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Either predicate must hold. `other` is not evaluated when `self` holds.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// Both predicates must hold.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// Either predicate must hold.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// The inner predicate must not hold.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

/// Every character satisfies the inner check.
#[derive(Clone, Copy, Debug)]
pub struct AllChars<F>(pub F);

impl<F: Fn(char) -> bool + Send + Sync> Predicate<str> for AllChars<F> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().all(&self.0)
    }
}

/// Create a predicate that holds when every character satisfies `f`.
///
/// Holds vacuously for the empty string.
///
/// # Example
///
/// ```rust
/// use tideline::predicate::*;
///
/// assert!(all_chars(char::is_numeric).check("１２３"));
/// assert!(!all_chars(char::is_numeric).check("12a"));
/// ```
pub fn all_chars<F: Fn(char) -> bool + Send + Sync>(f: F) -> AllChars<F> {
    AllChars(f)
}

/// At least one character satisfies the inner check.
#[derive(Clone, Copy, Debug)]
pub struct AnyChar<F>(pub F);

impl<F: Fn(char) -> bool + Send + Sync> Predicate<str> for AnyChar<F> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.chars().any(&self.0)
    }
}

/// Create a predicate that holds when some character satisfies `f`.
///
/// # Example
///
/// ```rust
/// use tideline::predicate::*;
///
/// assert!(any_char(|c: char| !c.is_ascii()).check("abcｄ"));
/// assert!(!any_char(|c: char| !c.is_ascii()).check("abcd"));
/// ```
pub fn any_char<F: Fn(char) -> bool + Send + Sync>(f: F) -> AnyChar<F> {
    AnyChar(f)
}

/// Text matches a regular expression.
///
/// The pattern is used as written; anchor it with `^…$` to match the whole
/// string.
#[derive(Clone, Debug)]
pub struct Matches(pub Regex);

impl Predicate<str> for Matches {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_short(value: &str) -> bool {
        value.len() < 4
    }

    fn is_lower(value: &str) -> bool {
        value.chars().all(char::is_lowercase)
    }

    #[test]
    fn test_fn_items_are_predicates() {
        assert!(is_short.check("abc"));
        assert!(!is_short.check("abcd"));
    }

    #[test]
    fn test_and_or_not() {
        assert!(is_short.and(is_lower).check("abc"));
        assert!(!is_short.and(is_lower).check("Abc"));
        assert!(is_short.or(is_lower).check("abcdef"));
        assert!(!is_short.or(is_lower).check("ABCDEF"));
        assert!(is_short.not().check("abcdef"));
    }

    #[test]
    fn test_or_short_circuits() {
        let never = |_: &str| -> bool { panic!("second predicate evaluated") };
        assert!(is_short.or(never).check("ab"));
    }

    #[test]
    fn test_all_chars_and_any_char() {
        assert!(all_chars(|c: char| c.is_ascii_digit()).check("0123"));
        assert!(all_chars(|c: char| c.is_ascii_digit()).check(""));
        assert!(!all_chars(|c: char| c.is_ascii_digit()).check("01a3"));
        assert!(any_char(char::is_whitespace).check("a b"));
        assert!(!any_char(char::is_whitespace).check("ab"));
    }

    #[test]
    fn test_matches() {
        let hex = Matches(Regex::new("^[0-9a-f]+$").unwrap());
        assert!(hex.check("deadbeef"));
        assert!(!hex.check("xyz"));
    }
}

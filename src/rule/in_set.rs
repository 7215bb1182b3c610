//! Membership rule

use std::borrow::{Borrow, Cow};
use std::fmt::{self, Display};

use super::{Rule, WithMessage};
use crate::{Inspect, RuleError};

/// Passes when the value equals one of an allowed set.
///
/// Absent and empty values pass; pair with [`REQUIRED`](super::REQUIRED) to
/// make the value mandatory. The failure reads `in|[a b c]`, listing the
/// allowed values in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InRule<V> {
    values: Vec<V>,
    message: Cow<'static, str>,
}

/// Create a rule accepting only the given values.
///
/// Values are compared with the resolved value of the input, so string
/// literals match `String` fields and numbers match `Option<number>` fields.
///
/// # Example
///
/// ```
/// use tideline::rule::{is_in, Rule};
///
/// let rule = is_in([1, 2]);
/// assert!(rule.validate(&1).is_ok());
/// assert!(rule.validate(&Some(2)).is_ok());
/// assert_eq!(rule.validate(&3).unwrap_err().to_string(), "in|[1 2]");
///
/// let role = is_in(["admin", "user"]);
/// assert!(role.validate(&String::from("admin")).is_ok());
/// assert_eq!(role.validate("root").unwrap_err().to_string(), "in|[admin user]");
/// ```
pub fn is_in<V>(values: impl IntoIterator<Item = V>) -> InRule<V> {
    InRule {
        values: values.into_iter().collect(),
        message: Cow::Borrowed("in"),
    }
}

impl<V> InRule<V> {
    /// The allowed values, in the order given.
    pub fn values(&self) -> &[V] {
        &self.values
    }
}

struct Listing<'a, V>(&'a [V]);

impl<V: Display> Display for Listing<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

impl<T, V> Rule<T> for InRule<V>
where
    T: Inspect + ?Sized,
    T::Target: PartialEq,
    V: Borrow<T::Target> + Display + Send + Sync,
{
    fn validate(&self, value: &T) -> Result<(), RuleError> {
        let Some(resolved) = value.resolve() else {
            return Ok(());
        };
        if value.is_empty_value() {
            return Ok(());
        }
        if self
            .values
            .iter()
            .any(|allowed| <V as Borrow<T::Target>>::borrow(allowed) == resolved)
        {
            return Ok(());
        }
        Err(RuleError::with_params(
            self.message.clone(),
            Listing(&self.values).to_string(),
        ))
    }
}

impl<V: Clone> WithMessage for InRule<V> {
    fn message(&self) -> &str {
        &self.message
    }

    fn with_message(&self, message: impl Into<Cow<'static, str>>) -> Self {
        InRule {
            values: self.values.clone(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag<T: ?Sized, R: Rule<T>>(rule: &R, value: &T) -> Option<String> {
        rule.validate(value).err().map(|e| e.to_string())
    }

    #[test]
    fn test_in() {
        let v: i32 = 1;
        let v2: Option<&i32> = None;
        let rule = is_in([1_i32, 2]);

        assert_eq!(tag(&rule, &0_i32), None);
        assert_eq!(tag(&rule, &1_i32), None);
        assert_eq!(tag(&rule, &2_i32), None);
        assert_eq!(tag(&rule, &3_i32), Some("in|[1 2]".into()));
        assert_eq!(tag(&rule, &Some(&v)), None);
        assert_eq!(tag(&rule, &v2), None);
    }

    #[test]
    fn test_in_empty_set() {
        let rule = is_in(Vec::<i32>::new());
        assert_eq!(tag(&rule, &3_i32), Some("in|[]".into()));
        assert_eq!(tag(&rule, &None::<i32>), None);
    }

    #[test]
    fn test_in_strings() {
        let rule = is_in(vec![String::from("red"), String::from("green")]);
        assert_eq!(tag(&rule, "red"), None);
        assert_eq!(tag(&rule, &String::from("green")), None);
        assert_eq!(tag(&rule, &Some("blue")), Some("in|[red green]".into()));
        assert_eq!(tag(&rule, ""), None);
    }

    #[test]
    fn test_in_rule_with_message() {
        let r = is_in([1_i32, 2, 3]);
        assert_eq!(r.message(), "in");
        let r2 = r.with_message("123");
        assert_eq!(r.message(), "in");
        assert_eq!(r2.message(), "123");
        assert_eq!(r2.values(), &[1, 2, 3]);
        assert_eq!(tag(&r2, &4_i32), Some("123|[1 2 3]".into()));
    }
}

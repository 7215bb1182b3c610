//! Assertion macros for testing rules and validated types
//!
//! # Examples
//!
//! ```rust
//! use tideline::{assert_rejects, assert_valid, is};
//!
//! assert_valid!(is::EMAIL, "ada@example.com");
//! assert_rejects!(is::EMAIL, "example.com", "email");
//! ```

/// Assert that a rule accepts a value.
///
/// The value is passed by reference, so both `str` literals and owned
/// values work. Panics with the rejection tag otherwise.
///
/// # Example
///
/// ```rust
/// use tideline::{assert_valid, is, REQUIRED};
///
/// assert_valid!(REQUIRED, "x");
/// assert_valid!(is::PORT, &String::from("8080"));
/// assert_valid!(is::PORT, &None::<String>);
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($rule:expr, $value:expr) => {
        match $crate::Rule::validate(&$rule, $value) {
            ::std::result::Result::Ok(()) => {}
            ::std::result::Result::Err(e) => {
                panic!("Expected value to pass, got rejection: {}", e);
            }
        }
    };
}

/// Assert that a rule rejects a value, optionally with a specific tag.
///
/// The tag is compared with the full textual form of the error, so for
/// membership and length rules it includes the parameters.
///
/// # Example
///
/// ```rust
/// use tideline::{assert_rejects, is, is_in, REQUIRED};
///
/// assert_rejects!(REQUIRED, "");
/// assert_rejects!(is_in([1, 2]), &3, "in|[1 2]");
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($rule:expr, $value:expr) => {
        if let ::std::result::Result::Ok(()) = $crate::Rule::validate(&$rule, $value) {
            panic!("Expected rejection, value passed");
        }
    };
    ($rule:expr, $value:expr, $tag:expr) => {
        match $crate::Rule::validate(&$rule, $value) {
            ::std::result::Result::Err(e) => {
                assert_eq!(e.to_string(), $tag);
            }
            ::std::result::Result::Ok(()) => {
                panic!("Expected rejection with {:?}, value passed", $tag);
            }
        }
    };
}

/// Assert that a [`Validatable`](crate::Validatable) value fails on exactly
/// the given `(field, tag)` pairs.
///
/// # Example
///
/// ```rust
/// use tideline::{assert_field_errors, Errors, Fields, Validatable, REQUIRED};
///
/// struct Signup {
///     name: String,
///     email: String,
/// }
///
/// impl Validatable for Signup {
///     fn validate(&self) -> Result<(), Errors> {
///         Fields::new()
///             .field("name", &self.name, &[&REQUIRED])
///             .field("email", &self.email, &[&REQUIRED])
///             .finish()
///     }
/// }
///
/// let signup = Signup { name: "Ada".into(), email: String::new() };
/// assert_field_errors!(signup, [("email", "required")]);
/// ```
#[macro_export]
macro_rules! assert_field_errors {
    ($value:expr, [$(($field:expr, $tag:expr)),* $(,)?]) => {
        match $crate::Validatable::validate(&$value) {
            ::std::result::Result::Err(errors) => {
                let actual: ::std::vec::Vec<(::std::string::String, ::std::string::String)> = errors
                    .iter()
                    .map(|(field, error)| (field.clone(), error.to_string()))
                    .collect();
                let mut expected: ::std::vec::Vec<(::std::string::String, ::std::string::String)> =
                    ::std::vec![$((::std::string::String::from($field), ::std::string::String::from($tag))),*];
                expected.sort();
                assert_eq!(actual, expected);
            }
            ::std::result::Result::Ok(()) => {
                panic!("Expected field errors, value passed");
            }
        }
    };
}

//! Validating several named fields at once
//!
//! [`Fields`] runs a list of rules per field, keeps the first failure of
//! each field, and returns everything that failed as one [`Errors`] value.
//! Types that know how to check themselves implement [`Validatable`], which
//! lets them be nested inside a parent's field list.
//!
//! # Example
//!
//! ```
//! use tideline::{is, is_in, length, Errors, Fields, Validatable, REQUIRED};
//!
//! struct Address {
//!     city: String,
//!     zip: String,
//! }
//!
//! impl Validatable for Address {
//!     fn validate(&self) -> Result<(), Errors> {
//!         Fields::new()
//!             .field("city", &self.city, &[&REQUIRED])
//!             .field("zip", &self.zip, &[&REQUIRED, &is::DIGIT, &length(5, 5)])
//!             .finish()
//!     }
//! }
//!
//! struct Customer {
//!     name: String,
//!     tier: Option<String>,
//!     address: Address,
//! }
//!
//! impl Validatable for Customer {
//!     fn validate(&self) -> Result<(), Errors> {
//!         let tiers = is_in(["gold", "silver"]);
//!         Fields::new()
//!             .field("name", &self.name, &[&REQUIRED])
//!             .field("tier", &self.tier, &[&tiers])
//!             .nested("address", &self.address)
//!             .finish()
//!     }
//! }
//!
//! let customer = Customer {
//!     name: String::new(),
//!     tier: Some("bronze".into()),
//!     address: Address { city: "Oslo".into(), zip: "12a45".into() },
//! };
//!
//! let errors = customer.validate().unwrap_err();
//! assert_eq!(
//!     errors.to_string(),
//!     "address.zip: digits; name: required; tier: in|[gold silver]."
//! );
//! ```

use crate::rule::{validate, Rule};
use crate::Errors;

/// Types that validate themselves into per-field [`Errors`].
pub trait Validatable {
    /// Check every field, returning all failures.
    fn validate(&self) -> Result<(), Errors>;
}

impl<V: Validatable + ?Sized> Validatable for &V {
    fn validate(&self) -> Result<(), Errors> {
        (**self).validate()
    }
}

impl<V: Validatable + ?Sized> Validatable for Box<V> {
    fn validate(&self) -> Result<(), Errors> {
        (**self).validate()
    }
}

/// An absent nested value has nothing to check.
impl<V: Validatable> Validatable for Option<V> {
    fn validate(&self) -> Result<(), Errors> {
        match self {
            Some(value) => value.validate(),
            None => Ok(()),
        }
    }
}

/// Builder collecting the first failure of each field.
#[derive(Debug, Clone, Default)]
pub struct Fields {
    errors: Errors,
}

impl Fields {
    /// Start with no failures.
    pub fn new() -> Self {
        Fields {
            errors: Errors::new(),
        }
    }

    /// Apply `rules` to `value` in order. The first failing rule is
    /// recorded under `name`; the remaining rules for that field are
    /// skipped.
    #[must_use]
    pub fn field<T: ?Sized>(mut self, name: &str, value: &T, rules: &[&dyn Rule<T>]) -> Self {
        match validate(value, rules) {
            Ok(()) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(field = name, "field passed");
            }
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(field = name, error = %err, "field rejected");
                self.errors.insert(name, err);
            }
        }
        self
    }

    /// Validate a nested value, recording its failures as `name.field`.
    #[must_use]
    pub fn nested<V: Validatable + ?Sized>(mut self, name: &str, value: &V) -> Self {
        if let Err(errors) = value.validate() {
            #[cfg(feature = "tracing")]
            tracing::debug!(field = name, failures = errors.len(), "nested value rejected");
            self.errors.merge_nested(name, errors);
        }
        self
    }

    /// Failures recorded so far.
    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    /// `Ok(())` when every field passed.
    pub fn finish(self) -> Result<(), Errors> {
        self.errors.into_result()
    }
}

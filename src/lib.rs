//! # Tideline
//!
//! Composable validation rules and a catalog of string format checks.
//!
//! A [`Rule`] checks one value and returns `Ok(())` or a [`RuleError`]
//! carrying a short tag such as `"required"` or `"email"`. Rules are
//! immutable values: customising a rule's tag with
//! [`WithMessage::with_message`] returns a new rule and leaves the shared
//! constant untouched.
//!
//! Every rule takes the bare value and its optional or pointer forms
//! uniformly. `None` is absence: only the presence rules ([`REQUIRED`],
//! [`NOT_NIL`]) reject it, and format rules treat absent or empty text as
//! nothing to check.
//!
//! ## Quick Example
//!
//! ```rust
//! use tideline::prelude::*;
//! use tideline::is;
//!
//! struct Signup {
//!     email: String,
//!     website: Option<String>,
//!     plan: String,
//! }
//!
//! impl Validatable for Signup {
//!     fn validate(&self) -> Result<(), Errors> {
//!         Fields::new()
//!             .field("email", &self.email, &[&REQUIRED, &is::EMAIL])
//!             .field("website", &self.website, &[&NIL_OR_NOT_EMPTY, &is::URL])
//!             .field("plan", &self.plan, &[&REQUIRED, &is_in(["free", "pro"])])
//!             .finish()
//!     }
//! }
//!
//! let signup = Signup {
//!     email: "ada@example".into(),
//!     website: None,
//!     plan: "enterprise".into(),
//! };
//!
//! let errors = signup.validate().unwrap_err();
//! assert_eq!(errors.to_string(), "email: email; plan: in|[free pro].");
//! ```
//!
//! ## Features
//!
//! - `tracing`: log rejected fields at `debug` and rejected rule lists at
//!   `trace` through the [`tracing`](https://docs.rs/tracing) crate.
//! - `serde`: `Serialize` for [`RuleError`] (as its tag) and [`Errors`] (as a
//!   map of field to tag).

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod fields;
pub mod inspect;
pub mod is;
pub mod predicate;
pub mod rule;
pub mod testing;

// Re-exports
pub use error::{Errors, RuleError};
pub use fields::{Fields, Validatable};
pub use inspect::Inspect;
pub use predicate::{Predicate, PredicateExt};
pub use rule::{
    by, is_in, length, matches, validate, InRule, LengthRule, Rule, StringRule, WithMessage,
    NIL_OR_NOT_EMPTY, NOT_NIL, REQUIRED,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Errors, RuleError};
    pub use crate::fields::{Fields, Validatable};
    pub use crate::inspect::Inspect;
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::rule::{
        by, is_in, length, matches, validate, Rule, StringRule, WithMessage, NIL_OR_NOT_EMPTY,
        NOT_NIL, REQUIRED,
    };
}

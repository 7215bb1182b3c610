//! Presence, membership and length rules through the public API.

use std::rc::Rc;
use std::sync::Arc;

use tideline::prelude::*;
use tideline::{assert_field_errors, assert_rejects, assert_valid, is};

#[test]
fn required_rejects_missing_and_empty() {
    let present = String::from("123");
    let empty = String::new();

    assert_valid!(REQUIRED, &123);
    assert_rejects!(REQUIRED, "", "required");
    assert_valid!(REQUIRED, &Some(&present));
    assert_rejects!(REQUIRED, &Some(&empty), "required");
    assert_rejects!(REQUIRED, &None::<&str>, "required");
}

#[test]
fn nil_or_not_empty_accepts_missing() {
    let present = String::from("123");
    let empty = String::new();

    assert_valid!(NIL_OR_NOT_EMPTY, &123);
    assert_rejects!(NIL_OR_NOT_EMPTY, "", "required");
    assert_valid!(NIL_OR_NOT_EMPTY, &Some(&present));
    assert_rejects!(NIL_OR_NOT_EMPTY, &Some(&empty), "required");
    assert_valid!(NIL_OR_NOT_EMPTY, &None::<&str>);
}

#[test]
fn with_message_leaves_constants_alone() {
    let custom = REQUIRED.with_message("123");
    assert_eq!(REQUIRED.message(), "required");
    assert!(!REQUIRED.skip_nil());
    assert_eq!(custom.message(), "123");
    assert!(!custom.skip_nil());

    let custom = NIL_OR_NOT_EMPTY.with_message("123");
    assert_eq!(NIL_OR_NOT_EMPTY.message(), "required");
    assert!(NIL_OR_NOT_EMPTY.skip_nil());
    assert_eq!(custom.message(), "123");
    assert!(custom.skip_nil());
    assert_valid!(custom, &None::<String>);
    assert_rejects!(custom, "", "123");
}

#[test]
fn required_zero_values() {
    assert_rejects!(REQUIRED, &0);
    assert_rejects!(REQUIRED, &0.0);
    assert_rejects!(REQUIRED, &false);
    assert_rejects!(REQUIRED, &Vec::<u8>::new());
    assert_valid!(REQUIRED, &vec![0_u8]);
    assert_valid!(REQUIRED, &true);
}

#[test]
fn not_nil_only_checks_presence() {
    assert_valid!(NOT_NIL, "");
    assert_valid!(NOT_NIL, &Some(0));
    assert_rejects!(NOT_NIL, &None::<i32>, "not_nil");
    assert_rejects!(NOT_NIL.with_message("missing"), &None::<i32>, "missing");
}

#[test]
fn in_membership() {
    let rule = is_in([1, 2]);
    let present = 1;
    let absent: Option<&i32> = None;

    assert_valid!(rule, &0);
    assert_valid!(rule, &1);
    assert_valid!(rule, &2);
    assert_rejects!(rule, &3, "in|[1 2]");
    assert_rejects!(is_in(Vec::<i32>::new()), &3, "in|[]");
    assert_valid!(rule, &Some(&present));
    assert_valid!(rule, &absent);
}

#[test]
fn in_with_message() {
    let rule = is_in([1, 2, 3]);
    assert_eq!(rule.message(), "in");
    let custom = rule.with_message("123");
    assert_eq!(rule.message(), "in");
    assert_eq!(custom.message(), "123");
    assert_eq!(custom.values(), &[1, 2, 3]);
    assert_rejects!(custom, &4, "123|[1 2 3]");
}

#[test]
fn in_strings_through_pointers() {
    let colors = is_in(["red", "green"]);
    assert_valid!(colors, &String::from("red"));
    assert_valid!(colors, &Box::new(String::from("green")));
    assert_valid!(colors, &Rc::new(Some(String::from("red"))));
    assert_rejects!(colors, &Arc::new(String::from("blue")), "in|[red green]");
}

#[test]
fn length_rule() {
    let rule = length(2, 5);
    assert_valid!(rule, "abc");
    assert_valid!(rule, "");
    assert_rejects!(rule, "abcdef", "length|2|5");
    assert_rejects!(rule, &vec![1], "length|2|5");
    assert_valid!(rule, &None::<Vec<i32>>);
}

#[test]
fn matches_and_by() {
    let sku = matches(regex::Regex::new(r"^[A-Z]{3}-[0-9]{3}$").unwrap());
    assert_valid!(sku, "ABC-123");
    assert_rejects!(sku, "abc-123", "match");

    let positive = by(|n: &i64| {
        if *n > 0 {
            Ok(())
        } else {
            Err(RuleError::new("positive"))
        }
    });
    assert_valid!(positive, &5_i64);
    assert_rejects!(positive, &-5_i64, "positive");
}

#[test]
fn validate_short_circuits() {
    let value = String::from("12ab");
    let err = validate(&value, &[&REQUIRED, &is::DIGIT, &length(10, 0)]).unwrap_err();
    assert_eq!(err.to_string(), "digits");
}

struct Account {
    username: String,
    email: Option<String>,
    role: String,
    profile: Option<Profile>,
}

struct Profile {
    age: Option<u32>,
    homepage: String,
}

impl Validatable for Profile {
    fn validate(&self) -> Result<(), Errors> {
        let adult = by(|age: &Option<u32>| match age {
            Some(age) if *age < 18 => Err(RuleError::new("adult")),
            _ => Ok(()),
        });
        Fields::new()
            .field("age", &self.age, &[&NOT_NIL, &adult])
            .field("homepage", &self.homepage, &[&is::URL])
            .finish()
    }
}

impl Validatable for Account {
    fn validate(&self) -> Result<(), Errors> {
        let roles = is_in(["admin", "member"]);
        Fields::new()
            .field("username", &self.username, &[&REQUIRED, &is::ALPHANUMERIC, &length(3, 16)])
            .field("email", &self.email, &[&NIL_OR_NOT_EMPTY, &is::EMAIL])
            .field("role", &self.role, &[&REQUIRED, &roles])
            .nested("profile", &self.profile)
            .finish()
    }
}

#[test]
fn account_passes() {
    let account = Account {
        username: "ada".into(),
        email: None,
        role: "admin".into(),
        profile: Some(Profile {
            age: Some(36),
            homepage: "https://example.com".into(),
        }),
    };
    assert_eq!(account.validate(), Ok(()));
}

#[test]
fn account_collects_every_field() {
    let account = Account {
        username: "a!".into(),
        email: Some("ada".into()),
        role: "root".into(),
        profile: Some(Profile {
            age: Some(12),
            homepage: "not a url".into(),
        }),
    };
    assert_field_errors!(
        account,
        [
            ("username", "alphanumeric"),
            ("email", "email"),
            ("role", "in|[admin member]"),
            ("profile.age", "adult"),
            ("profile.homepage", "url"),
        ]
    );
}

#[test]
fn account_without_profile() {
    let account = Account {
        username: String::new(),
        email: Some(String::new()),
        role: String::new(),
        profile: None,
    };
    let errors = account.validate().unwrap_err();
    assert_eq!(errors.to_string(), "email: required; role: required; username: required.");
}

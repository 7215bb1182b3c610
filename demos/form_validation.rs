//! Form validation example - validating a signup form field by field
//!
//! Run with `cargo run --example form_validation --features tracing` to see
//! the pipeline's debug logs.

use tideline::prelude::*;
use tideline::is;

// Raw input from form
struct SignupForm {
    username: String,
    email: String,
    password: String,
    password_confirm: String,
    age: Option<String>,
    country: String,
    website: Option<String>,
    address: Option<Address>,
}

struct Address {
    street: String,
    zip: String,
}

impl Validatable for Address {
    fn validate(&self) -> Result<(), Errors> {
        Fields::new()
            .field("street", &self.street, &[&REQUIRED])
            .field("zip", &self.zip, &[&REQUIRED, &is::DIGIT, &length(5, 5)])
            .finish()
    }
}

impl Validatable for SignupForm {
    fn validate(&self) -> Result<(), Errors> {
        let adult = by(|age: &Option<String>| match age.as_deref().map(str::parse::<u8>) {
            Some(Ok(age)) if age < 18 => Err(RuleError::with_params("min_age", "18")),
            _ => Ok(()),
        });
        let confirmed = by(|confirm: &String| {
            if *confirm == self.password {
                Ok(())
            } else {
                Err(RuleError::new("password_mismatch"))
            }
        });

        Fields::new()
            .field(
                "username",
                &self.username,
                &[&REQUIRED, &is::ALPHANUMERIC, &length(3, 20)],
            )
            .field("email", &self.email, &[&REQUIRED, &is::EMAIL])
            .field(
                "password",
                &self.password,
                &[&REQUIRED, &length(8, 0).with_message("password_too_short")],
            )
            .field("password_confirm", &self.password_confirm, &[&confirmed])
            .field("age", &self.age, &[&NIL_OR_NOT_EMPTY, &is::INT, &adult])
            .field(
                "country",
                &self.country,
                &[&REQUIRED, &is::COUNTRY_CODE2, &is_in(["DE", "FR", "NO", "US"])],
            )
            .field("website", &self.website, &[&is::URL])
            .nested("address", &self.address)
            .finish()
    }
}

fn report(label: &str, form: &SignupForm) {
    match form.validate() {
        Ok(()) => println!("{label}: accepted"),
        Err(errors) => {
            println!("{label}: rejected ({} fields)", errors.len());
            for (field, error) in &errors {
                println!("  {field:<18} {error}");
            }
        }
    }
}

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    println!("=== Signup Form Validation ===\n");

    let valid = SignupForm {
        username: "ada1815".into(),
        email: "ada@example.com".into(),
        password: "analytical-engine".into(),
        password_confirm: "analytical-engine".into(),
        age: Some("36".into()),
        country: "US".into(),
        website: None,
        address: Some(Address {
            street: "12 St James's Square".into(),
            zip: "10001".into(),
        }),
    };
    report("valid form", &valid);

    let invalid = SignupForm {
        username: "a!".into(),
        email: "ada@".into(),
        password: "short".into(),
        password_confirm: "shorter".into(),
        age: Some("12".into()),
        country: "XY".into(),
        website: Some("not a url".into()),
        address: Some(Address {
            street: String::new(),
            zip: "1234".into(),
        }),
    };
    println!();
    report("invalid form", &invalid);

    let sparse = SignupForm {
        username: String::new(),
        email: String::new(),
        password: String::new(),
        password_confirm: String::new(),
        age: None,
        country: "JP".into(),
        website: None,
        address: None,
    };
    println!();
    report("sparse form", &sparse);
}

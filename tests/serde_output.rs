//! JSON rendering of validation failures
#![cfg(feature = "serde")]

use serde::Serialize;
use tideline::{is, is_in, Errors, Fields, RuleError, REQUIRED};

#[derive(Serialize)]
struct Rejection {
    status: u16,
    errors: Errors,
}

#[test]
fn errors_embed_in_response_body() {
    let errors = Fields::new()
        .field("email", "nope", &[&REQUIRED, &is::EMAIL])
        .field("plan", "gold", &[&is_in(["free", "pro"])])
        .field("name", "Ada", &[&REQUIRED])
        .finish()
        .unwrap_err();

    let body = serde_json::to_value(Rejection { status: 422, errors }).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "status": 422,
            "errors": { "email": "email", "plan": "in|[free pro]" }
        })
    );
}

#[test]
fn rule_error_serializes_as_text() {
    let json = serde_json::to_string(&RuleError::with_params("length", "1|5")).unwrap();
    assert_eq!(json, "\"length|1|5\"");
}

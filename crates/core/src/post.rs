//! Validation rules for post payloads.
//!
//! Payload types expose their fields to the engine under [`TITLE_FIELD`] and
//! [`CONTENT_FIELD`]; the rule set itself is built once per process.

use std::sync::LazyLock;

use crate::error::CoreError;
use crate::validation::{length, required, Fields, Validator};

pub const TITLE_FIELD: &str = "Title";
pub const CONTENT_FIELD: &str = "Content";

pub const TITLE_MAX_LEN: usize = 255;
pub const CONTENT_MAX_LEN: usize = 500;

static POST_VALIDATOR: LazyLock<Validator> = LazyLock::new(|| {
    Validator::builder()
        .rule(TITLE_FIELD, required())
        .rule(TITLE_FIELD, length(1, TITLE_MAX_LEN))
        .rule(CONTENT_FIELD, required())
        .rule(CONTENT_FIELD, length(1, CONTENT_MAX_LEN))
        .build()
});

/// The shared rule set for create and update payloads.
pub fn post_validator() -> &'static Validator {
    &POST_VALIDATOR
}

/// Validate a post payload, failing with every field error at once.
pub fn validate_post<T: Fields + ?Sized>(payload: &T) -> Result<(), CoreError> {
    post_validator().validate(payload).into_result()?;
    Ok(())
}

//! Rule type and the built-in rule library.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::value::FieldValue;

/// Message for string-only rules applied to a non-string value.
pub const NOT_A_STRING: &str = "is not a valid string";

/// Structural email check: `something@something.something`, no whitespace.
const EMAIL_PATTERN: &str = r"^\S+@\S+\.\S+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

type Check = dyn Fn(&FieldValue<'_>) -> Option<String> + Send + Sync;

/// A named, pure check of one field value.
///
/// Returns the failure message, or `None` when the value passes. Rules never
/// see the field name; the [`Validator`](super::Validator) attaches it.
pub struct Rule {
    kind: &'static str,
    check: Box<Check>,
}

impl Rule {
    pub fn new<F>(kind: &'static str, check: F) -> Self
    where
        F: Fn(&FieldValue<'_>) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            kind,
            check: Box::new(check),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn evaluate(&self, value: &FieldValue<'_>) -> Option<String> {
        (self.check)(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("kind", &self.kind).finish()
    }
}

/// Fails on null and on the empty string; any other value passes.
pub fn required() -> Rule {
    Rule::new("required", |value| match value {
        FieldValue::Null => Some("is required".to_string()),
        FieldValue::String(s) if s.is_empty() => Some("is required".to_string()),
        _ => None,
    })
}

/// String length in bytes within `min..=max`.
///
/// # Panics
///
/// Panics if `min > max`.
pub fn length(min: usize, max: usize) -> Rule {
    assert!(min <= max, "length rule requires min <= max, got {min} > {max}");
    Rule::new("length", move |value| {
        let Some(s) = value.as_str() else {
            return Some(NOT_A_STRING.to_string());
        };
        let len = s.len();
        if len < min || len > max {
            return Some(format!("must be between {min} and {max} characters"));
        }
        None
    })
}

/// Permissive structural email check; not RFC 5322.
pub fn email() -> Rule {
    Rule::new("email", |value| {
        let Some(s) = value.as_str() else {
            return Some(NOT_A_STRING.to_string());
        };
        if EMAIL_RE.is_match(s) {
            None
        } else {
            Some("is not a valid email address".to_string())
        }
    })
}

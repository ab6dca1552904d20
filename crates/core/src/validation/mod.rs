//! Declarative validation engine.
//!
//! Rules are attached to field names on a [`ValidatorBuilder`], frozen into an
//! immutable [`Validator`], and evaluated against any value implementing
//! [`Fields`]. The engine knows nothing about HTTP, JSON or SQL.

pub mod error;
pub mod rules;
pub mod validator;
pub mod value;

pub use error::{ValidationError, ValidationErrors};
pub use rules::{email, length, required, Rule};
pub use validator::{Validator, ValidatorBuilder};
pub use value::{FieldValue, Fields};

/// Derive macro generating a [`Fields`] implementation for a struct.
pub use postboard_fields_derive::Fields;

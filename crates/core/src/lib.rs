//! Postboard domain layer.
//!
//! Pure logic shared by the database and HTTP crates: identifiers, domain
//! errors, the declarative validation engine, and the post payload rule set.

pub mod error;
pub mod post;
pub mod types;
pub mod validation;

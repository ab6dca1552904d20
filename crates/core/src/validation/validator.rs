//! Rule registry and the validate entry point.
//!
//! Registration happens on [`ValidatorBuilder`]; [`ValidatorBuilder::build`]
//! freezes the registry into a [`Validator`] that only reads it, so a single
//! validator can be shared across request tasks without locking.

use std::collections::HashMap;
use std::fmt;

use super::error::{ValidationError, ValidationErrors};
use super::rules::Rule;
use super::value::Fields;

/// Collects rules per field name before freezing them into a [`Validator`].
#[derive(Default)]
pub struct ValidatorBuilder {
    rules: HashMap<String, Vec<Rule>>,
}

impl ValidatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `rule` to the rules of `field`. Rules run in registration order.
    pub fn register(&mut self, field: impl Into<String>, rule: Rule) -> &mut Self {
        self.rules.entry(field.into()).or_default().push(rule);
        self
    }

    /// Chaining form of [`register`](Self::register).
    pub fn rule(mut self, field: impl Into<String>, rule: Rule) -> Self {
        self.register(field, rule);
        self
    }

    pub fn build(self) -> Validator {
        Validator { rules: self.rules }
    }
}

impl fmt::Debug for ValidatorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorBuilder")
            .field("rules", &self.rules)
            .finish()
    }
}

/// An immutable field-name → rules registry.
#[derive(Default)]
pub struct Validator {
    rules: HashMap<String, Vec<Rule>>,
}

impl Validator {
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// Validate `target`, returning at most one error per field.
    ///
    /// Fields are visited in the target's declaration order. Fields without
    /// registered rules are skipped. Within a field the first failing rule
    /// wins and the remaining rules for that field are not evaluated.
    ///
    /// # Panics
    ///
    /// Panics if `target` lists a field in `field_names()` that
    /// `field_value()` cannot read. That is a broken [`Fields`]
    /// implementation, not invalid data.
    pub fn validate<T: Fields + ?Sized>(&self, target: &T) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        for &name in target.field_names() {
            let Some(rules) = self.rules.get(name) else {
                continue;
            };

            let value = target.field_value(name).unwrap_or_else(|| {
                panic!(
                    "{} lists field `{name}` but does not expose its value",
                    std::any::type_name::<T>()
                )
            });

            if let Some(message) = rules.iter().find_map(|rule| rule.evaluate(&value)) {
                errors.push(ValidationError::new(name, message));
            }
        }

        errors
    }

    pub fn is_valid<T: Fields + ?Sized>(&self, target: &T) -> bool {
        self.validate(target).is_empty()
    }

    /// Number of rules registered for `field`.
    pub fn rule_count(&self, field: &str) -> usize {
        self.rules.get(field).map_or(0, Vec::len)
    }

    /// Field names with at least one registered rule, in no particular order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules)
            .finish()
    }
}

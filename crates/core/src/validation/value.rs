//! Field introspection: the capability a value needs to be validated.

use std::rc::Rc;
use std::sync::Arc;

use crate::types::Timestamp;

/// The runtime value of a single field, borrowed from the target object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Null,
    String(&'a str),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Timestamp(Timestamp),
}

impl<'a> FieldValue<'a> {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// The string slice, if this is a string value.
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::String(value)
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::String(value)
    }
}

impl<'a, 'b: 'a> From<&'a &'b str> for FieldValue<'a> {
    fn from(value: &'a &'b str) -> Self {
        FieldValue::String(value)
    }
}

macro_rules! integer_field_value {
    ($($ty:ty),*) => {
        $(
            impl<'a> From<&'a $ty> for FieldValue<'a> {
                fn from(value: &'a $ty) -> Self {
                    FieldValue::Integer(i64::from(*value))
                }
            }
        )*
    };
}

integer_field_value!(i8, i16, i32, i64, u8, u16, u32);

impl<'a> From<&'a f32> for FieldValue<'a> {
    fn from(value: &'a f32) -> Self {
        FieldValue::Float(f64::from(*value))
    }
}

impl<'a> From<&'a f64> for FieldValue<'a> {
    fn from(value: &'a f64) -> Self {
        FieldValue::Float(*value)
    }
}

impl<'a> From<&'a bool> for FieldValue<'a> {
    fn from(value: &'a bool) -> Self {
        FieldValue::Boolean(*value)
    }
}

impl<'a> From<&'a Timestamp> for FieldValue<'a> {
    fn from(value: &'a Timestamp) -> Self {
        FieldValue::Timestamp(*value)
    }
}

// `None` is the engine's null.
macro_rules! option_field_value {
    ($($ty:ty),*) => {
        $(
            impl<'a> From<&'a Option<$ty>> for FieldValue<'a> {
                fn from(value: &'a Option<$ty>) -> Self {
                    match value {
                        Some(inner) => FieldValue::from(inner),
                        None => FieldValue::Null,
                    }
                }
            }
        )*
    };
}

option_field_value!(String, i8, i16, i32, i64, u8, u16, u32, f32, f64, bool, Timestamp);

impl<'a, 'b: 'a> From<&'a Option<&'b str>> for FieldValue<'a> {
    fn from(value: &'a Option<&'b str>) -> Self {
        match value {
            Some(s) => FieldValue::String(s),
            None => FieldValue::Null,
        }
    }
}

/// Read access to a struct's fields by name.
///
/// Usually generated with `#[derive(Fields)]`; hand-written adapters are fine
/// as long as every name returned by [`field_names`](Fields::field_names) is
/// readable through [`field_value`](Fields::field_value).
pub trait Fields {
    /// Field names in declaration order.
    fn field_names(&self) -> &'static [&'static str];

    /// Current value of the named field, or `None` if no such field exists.
    fn field_value(&self, name: &str) -> Option<FieldValue<'_>>;
}

impl<T: Fields + ?Sized> Fields for &T {
    fn field_names(&self) -> &'static [&'static str] {
        (**self).field_names()
    }

    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field_value(name)
    }
}

impl<T: Fields + ?Sized> Fields for Box<T> {
    fn field_names(&self) -> &'static [&'static str] {
        (**self).field_names()
    }

    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field_value(name)
    }
}

impl<T: Fields + ?Sized> Fields for Rc<T> {
    fn field_names(&self) -> &'static [&'static str] {
        (**self).field_names()
    }

    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field_value(name)
    }
}

impl<T: Fields + ?Sized> Fields for Arc<T> {
    fn field_names(&self) -> &'static [&'static str] {
        (**self).field_names()
    }

    fn field_value(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field_value(name)
    }
}

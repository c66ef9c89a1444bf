/*!
This module contains the value domain that field accessors produce. Sorting never inspects items
directly; it orders the [`FieldValue`]s extracted for the active field and leaves the items
themselves opaque.

The domain is deliberately closed. Keeping the set of kinds fixed is what lets the default
comparison rule state exactly which pairs of values it can order and report the rest as
comparison failures instead of silently producing an arbitrary order.
*/

use std::fmt;

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;

/**
A single orderable value extracted from an item by a field accessor.

The variants cover the value types a grid column commonly displays: text, signed and unsigned
integers, floating point numbers, booleans, and points in time. Floating point values are wrapped
in [`OrderedFloat`] so that every pair of values of the same kind has a total order; `NaN`
compares greater than every other float.

Two values of different present kinds have no ordering relative to each other under the default
comparison rule. [`FieldValue::Missing`] is the exception; it represents an empty cell and
orders before any present value.
*/
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldValue {
    /// No value is present for the field on this item.
    Missing,

    /// A boolean value. `false` orders before `true`.
    Boolean(bool),

    /// A signed integer value.
    Integer(i64),

    /// An unsigned integer value, typically a count or a size.
    Unsigned(u64),

    /// A floating point value with a total order.
    Float(OrderedFloat<f64>),

    /// A point in time.
    Timestamp(DateTime<Utc>),

    /// A textual value.
    Text(String),
}

/// Public methods
impl FieldValue {
    /// Get the runtime kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Missing => ValueKind::Missing,
            FieldValue::Boolean(_) => ValueKind::Boolean,
            FieldValue::Integer(_) => ValueKind::Integer,
            FieldValue::Unsigned(_) => ValueKind::Unsigned,
            FieldValue::Float(_) => ValueKind::Float,
            FieldValue::Timestamp(_) => ValueKind::Timestamp,
            FieldValue::Text(_) => ValueKind::Text,
        }
    }

    /// Returns `true` if no value is present.
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Unsigned(u64::from(value))
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Unsigned(value)
    }
}

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        FieldValue::Float(OrderedFloat(f64::from(value)))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(OrderedFloat(value))
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl<V> From<Option<V>> for FieldValue
where
    V: Into<FieldValue>,
{
    /// Convert an optional value. `None` becomes [`FieldValue::Missing`].
    fn from(value: Option<V>) -> Self {
        match value {
            None => FieldValue::Missing,
            Some(inner) => inner.into(),
        }
    }
}

/**
The runtime kind of a [`FieldValue`].

Kinds select the applicable comparison rule and describe the operands of a failed comparison in
error reports.
*/
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    /// The kind of [`FieldValue::Missing`].
    Missing,
    /// The kind of [`FieldValue::Boolean`].
    Boolean,
    /// The kind of [`FieldValue::Integer`].
    Integer,
    /// The kind of [`FieldValue::Unsigned`].
    Unsigned,
    /// The kind of [`FieldValue::Float`].
    Float,
    /// The kind of [`FieldValue::Timestamp`].
    Timestamp,
    /// The kind of [`FieldValue::Text`].
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Missing => "missing",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Unsigned => "unsigned",
            ValueKind::Float => "float",
            ValueKind::Timestamp => "timestamp",
            ValueKind::Text => "text",
        };

        write!(f, "{}", name)
    }
}

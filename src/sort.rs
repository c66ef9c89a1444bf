/*!
This module contains the sorting vocabulary of the crate: the direction a field is ordered in,
serializable sort descriptions, the comparator contract that sorting runs against, and the
default field comparator implementing the built-in comparison rules.

Useful for sorting by properties different from the natural ordering provided by ordering traits
e.g. [`PartialOrd`]. Items stay opaque during a sort; only the values their field accessors
produce are ordered.
*/

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::{ComparisonErrorMetadata, GridListError, GridListResult};
use crate::fields::{FieldDescriptor, FieldKind};
use crate::utils::text;
use crate::values::FieldValue;

/// The direction a field is ordered in.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest values first. This is the direction a list starts out with.
    #[default]
    Ascending,

    /// Largest values first.
    Descending,
}

/// Public methods
impl SortDirection {
    /**
    Orient a raw ascending ordering to this direction.

    Comparison rules always produce ascending outcomes. Descending sorts reverse the outcome
    here, after the rule has run, so a rule never needs to know the requested direction.
    */
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        };

        write!(f, "{}", name)
    }
}

/**
A serializable snapshot of a list's active sort.

Grids persist sort descriptions to restore a view's ordering in a later session and replay them
with [`SortableList::apply_sort`](crate::SortableList).
*/
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SortDescription {
    /// The name of the field the list is sorted by.
    pub field: String,

    /// The direction the field is sorted in.
    pub direction: SortDirection,
}

/**
An interface for structs intended to be used as a comparator during a sort.

A comparator orders whole items. The default comparator, [`FieldComparator`], does so by
extracting and comparing the values of a single field, but custom comparators installed through
[`SortableList::set_comparator_factory`](crate::SortableList::set_comparator_factory) are free
to inspect items however they like.

A comparison may fail, for example when a field accessor cannot produce a value or when two
extracted values have no ordering relative to each other. The first failure aborts the sort that
requested it and the list keeps its previous order.
*/
pub trait Comparator<T> {
    /**
    Return an ordering obtained by comparing `a` and `b`.

    Invariants:

    1. Returns [`Ordering::Less`] if `a` sorts before `b`
    1. Returns [`Ordering::Equal`] if `a` and `b` are tied. Tied items keep the relative order
       they had before the sort
    1. Returns [`Ordering::Greater`] if `a` sorts after `b`
    */
    fn compare(&self, a: &T, b: &T) -> GridListResult<Ordering>;
}

/**
Factory producing the comparator a sort will run against.

The factory is consulted once per sort request with the resolved field descriptor and the
requested direction. The returned comparator is responsible for honoring the direction; wrap raw
ascending outcomes with [`SortDirection::apply`] the way [`FieldComparator`] does.
*/
pub type ComparatorFactory<T> =
    Arc<dyn Fn(&FieldDescriptor<T>, SortDirection) -> Box<dyn Comparator<T>> + Send + Sync>;

/**
The default comparator. Orders items by the values a single field extracts from them.

Two comparison rules exist and the field's [`FieldKind`] selects between them:

1. Text fields order values lexicographically ignoring letter case
1. Comparable fields order values of the same kind by their natural order

Under both rules a missing value sorts before any present value and two missing values are tied.
Any other pairing of value kinds has no defined ordering and fails the comparison.
*/
pub struct FieldComparator<T> {
    /// The field whose values are compared.
    field: FieldDescriptor<T>,

    /// The direction raw comparison outcomes are oriented to.
    direction: SortDirection,
}

/// Public methods
impl<T> FieldComparator<T> {
    /// Create a new instance of [`FieldComparator`].
    pub fn new(field: FieldDescriptor<T>, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

/// Private methods
impl<T> FieldComparator<T> {
    /// Order two extracted values with the rule selected by the field's kind.
    fn compare_values(&self, a: &FieldValue, b: &FieldValue) -> GridListResult<Ordering> {
        match self.field.kind() {
            FieldKind::Text => self.compare_text(a, b),
            FieldKind::Comparable => self.compare_natural(a, b),
        }
    }

    /// The comparison rule for text fields.
    fn compare_text(&self, a: &FieldValue, b: &FieldValue) -> GridListResult<Ordering> {
        match (a, b) {
            (FieldValue::Missing, FieldValue::Missing) => Ok(Ordering::Equal),
            (FieldValue::Missing, _) => Ok(Ordering::Less),
            (_, FieldValue::Missing) => Ok(Ordering::Greater),
            (FieldValue::Text(a), FieldValue::Text(b)) => Ok(text::caseless_cmp(a, b)),
            _ => Err(self.unorderable(a, b)),
        }
    }

    /// The comparison rule for comparable fields.
    fn compare_natural(&self, a: &FieldValue, b: &FieldValue) -> GridListResult<Ordering> {
        match (a, b) {
            (FieldValue::Missing, FieldValue::Missing) => Ok(Ordering::Equal),
            (FieldValue::Missing, _) => Ok(Ordering::Less),
            (_, FieldValue::Missing) => Ok(Ordering::Greater),
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => Ok(a.cmp(b)),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => Ok(a.cmp(b)),
            (FieldValue::Unsigned(a), FieldValue::Unsigned(b)) => Ok(a.cmp(b)),
            (FieldValue::Float(a), FieldValue::Float(b)) => Ok(a.cmp(b)),
            (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => Ok(a.cmp(b)),
            (FieldValue::Text(a), FieldValue::Text(b)) => Ok(a.cmp(b)),
            _ => Err(self.unorderable(a, b)),
        }
    }

    /// Build the error reported when two values have no ordering relative to each other.
    fn unorderable(&self, a: &FieldValue, b: &FieldValue) -> GridListError {
        ComparisonErrorMetadata::new(self.field.name(), a.kind(), b.kind()).into()
    }
}

impl<T> Comparator<T> for FieldComparator<T> {
    fn compare(&self, a: &T, b: &T) -> GridListResult<Ordering> {
        let value_a = self.field.value_of(a)?;
        let value_b = self.field.value_of(b)?;
        let raw = self.compare_values(&value_a, &value_b)?;

        Ok(self.direction.apply(raw))
    }
}

impl<T> fmt::Debug for FieldComparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldComparator")
            .field("field", &self.field)
            .field("direction", &self.direction)
            .finish()
    }
}

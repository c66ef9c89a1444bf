/*!
This module contains field descriptors. A field descriptor is the sortable-column metadata for an
item type: a stable name that sort requests refer to, the comparison rule family the field belongs
to, and an accessor that extracts the field's value from an item.

Descriptors stay decoupled from the items they describe. The list never requires item types to
implement an extraction trait; a grid hands the list whatever descriptors its visible columns
need.
*/

use std::fmt;
use std::sync::Arc;

use crate::errors::{FieldAccessErrorMetadata, GridListResult};
use crate::values::FieldValue;

/// The error type field accessors may raise.
pub type AccessorError = Box<dyn std::error::Error + Send + Sync>;

type Accessor<T> = Arc<dyn Fn(&T) -> Result<FieldValue, AccessorError> + Send + Sync>;

/**
The comparison rule family a field belongs to.

The kind is declared on the descriptor rather than inferred from extracted values so that a
field's rule is fixed for the whole list. Values only determine the outcome of individual
comparisons.
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    /// Values are ordered lexicographically ignoring letter case.
    Text,

    /// Values of the same kind are ordered by their natural order.
    Comparable,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Text => "text",
            FieldKind::Comparable => "comparable",
        };

        write!(f, "{}", name)
    }
}

/**
Metadata describing one sortable field of an item type.

A descriptor pairs a field name with the accessor that extracts the field's [`FieldValue`] from
an item. Descriptors are cheap to clone; clones share the accessor.
*/
pub struct FieldDescriptor<T> {
    /// The name sort requests use to refer to the field.
    name: String,

    /// The comparison rule family the field belongs to.
    kind: FieldKind,

    /// Closure extracting the field's value from an item.
    accessor: Accessor<T>,
}

/// Public methods
impl<T> FieldDescriptor<T> {
    /// Create a new [`FieldDescriptor`] with an accessor that can fail.
    pub fn new<F>(name: &str, kind: FieldKind, accessor: F) -> Self
    where
        F: Fn(&T) -> Result<FieldValue, AccessorError> + Send + Sync + 'static,
    {
        Self {
            name: name.to_owned(),
            kind,
            accessor: Arc::new(accessor),
        }
    }

    /// Create a descriptor for a text field from an accessor that cannot fail.
    pub fn text<F>(name: &str, accessor: F) -> Self
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        Self::new(name, FieldKind::Text, move |item| Ok(accessor(item)))
    }

    /// Create a descriptor for a comparable field from an accessor that cannot fail.
    pub fn comparable<F>(name: &str, accessor: F) -> Self
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        Self::new(name, FieldKind::Comparable, move |item| Ok(accessor(item)))
    }

    /// The name sort requests use to refer to the field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The comparison rule family the field belongs to.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /**
    Extract the field's value from an item.

    Accessor failures are reported as [`GridListError::FieldAccess`](crate::GridListError) with
    the field's name attached.
    */
    pub fn value_of(&self, item: &T) -> GridListResult<FieldValue> {
        (self.accessor)(item)
            .map_err(|err| FieldAccessErrorMetadata::new(&self.name, err).into())
    }
}

impl<T> Clone for FieldDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind,
            accessor: Arc::clone(&self.accessor),
        }
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

impl<T> PartialEq for FieldDescriptor<T> {
    /// Descriptors are compared by name and kind. Accessor identity is not observable.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind == other.kind
    }
}

impl<T> Eq for FieldDescriptor<T> {}

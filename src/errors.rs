/*!
This module contains error types specific to GridList as well as `From` implementations to enable
error propagation.
*/

use std::fmt;

use crate::values::ValueKind;

/// Result that wraps [`GridListError`].
pub type GridListResult<T> = Result<T, GridListError>;

/// Top-level list errors.
#[derive(Debug)]
pub enum GridListError {
    /// Variant for sort requests made against a binding that does not support sorting.
    SortNotSupported(String),

    /// Variant for comparisons between values that have no ordering relative to each other.
    InvalidComparison(ComparisonErrorMetadata),

    /// Variant for failures reading a field value from an item.
    FieldAccess(FieldAccessErrorMetadata),
}

impl std::error::Error for GridListError {}

impl fmt::Display for GridListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridListError::SortNotSupported(msg) => write!(f, "{}", msg),
            GridListError::InvalidComparison(err_metadata) => write!(f, "{}", err_metadata),
            GridListError::FieldAccess(err_metadata) => write!(f, "{}", err_metadata),
        }
    }
}

impl From<ComparisonErrorMetadata> for GridListError {
    fn from(err: ComparisonErrorMetadata) -> Self {
        GridListError::InvalidComparison(err)
    }
}

impl From<FieldAccessErrorMetadata> for GridListError {
    fn from(err: FieldAccessErrorMetadata) -> Self {
        GridListError::FieldAccess(err)
    }
}

/// Metadata describing a pair of values that could not be ordered.
#[derive(Debug)]
pub struct ComparisonErrorMetadata {
    field: String,
    left: ValueKind,
    right: ValueKind,
}

/// Crate-only methods
impl ComparisonErrorMetadata {
    /// Create a new instance of [`ComparisonErrorMetadata`].
    pub(crate) fn new(field: &str, left: ValueKind, right: ValueKind) -> Self {
        Self {
            field: field.to_owned(),
            left,
            right,
        }
    }
}

/// Public methods
impl ComparisonErrorMetadata {
    /// The name of the field the values were extracted for.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The kind of the left-hand value.
    pub fn left(&self) -> ValueKind {
        self.left
    }

    /// The kind of the right-hand value.
    pub fn right(&self) -> ValueKind {
        self.right
    }
}

impl fmt::Display for ComparisonErrorMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Values of field `{}` have no ordering relative to each other. The value kinds were {} and {}",
            self.field, self.left, self.right
        )
    }
}

/// Metadata describing a failure to read a field value from an item.
#[derive(Debug)]
pub struct FieldAccessErrorMetadata {
    field: String,
    source: Box<dyn std::error::Error + Send + Sync>,
}

/// Crate-only methods
impl FieldAccessErrorMetadata {
    /// Create a new instance of [`FieldAccessErrorMetadata`].
    pub(crate) fn new(field: &str, source: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self {
            field: field.to_owned(),
            source,
        }
    }
}

/// Public methods
impl FieldAccessErrorMetadata {
    /// The name of the field that was being read.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The error raised by the field accessor.
    pub fn source(&self) -> &(dyn std::error::Error + Send + Sync) {
        self.source.as_ref()
    }
}

impl fmt::Display for FieldAccessErrorMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to read field `{}` from an item. The original error was {}",
            self.field, self.source
        )
    }
}

/*!
GridList is a generic bindable list with column-based sorting, the data model half of a desktop
data grid. A [`SortableList`] owns its items in display order, publishes a change notification
after every mutation so a bound view can refresh itself, and reorders itself when a sort is
requested for one of its fields.

Items stay plain Rust values. The list learns which parts of an item are sortable through
[`FieldDescriptor`]s, so no trait implementation is required of the item type itself. Sorting is
strict: a comparison that cannot produce an ordering aborts the whole sort and the list keeps
its previous order.

This project strives to uphold a high standard of code clarity and to have extensive
documentation on the design and intentions of code. With regard to this, we have configured the
project such that `rustdoc` generates output even for private methods.
*/

#![warn(missing_debug_implementations, missing_docs)]

mod bindable;
pub use bindable::{BindableList, ListChanged};

mod errors;
pub use errors::{
    ComparisonErrorMetadata, FieldAccessErrorMetadata, GridListError, GridListResult,
};

mod fields;
pub use fields::{AccessorError, FieldDescriptor, FieldKind};

mod list;
pub use list::SortableList;

pub mod sort;
pub use sort::{Comparator, ComparatorFactory, FieldComparator, SortDescription, SortDirection};

mod utils;

mod values;
pub use values::{FieldValue, ValueKind};

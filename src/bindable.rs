/*!
This module contains the binding contract that grid views consume and the change notifications
bindings publish.

The contract has two parts. The mutable sequence surface is required of every binding. The
sorting surface is optional and ships defaults describing a binding that cannot sort; a binding
opts in by overriding the sorting methods together. Grids are expected to check
[`BindableList::supports_sorting`] before offering column sorting in their headers.
*/

use crate::errors::{GridListError, GridListResult};
use crate::fields::FieldDescriptor;
use crate::sort::SortDirection;

/**
A change to the contents of a binding.

Bindings publish a notification after each mutation so views can refresh themselves without
polling. Index-carrying variants locate the affected item at the time the notification fired.
*/
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListChanged {
    /// The binding changed too broadly to describe item by item. Views should redraw fully.
    Reset,

    /// An item was added at `index`.
    ItemAdded {
        /// Position of the new item.
        index: usize,
    },

    /// The item at `index` was removed.
    ItemRemoved {
        /// Position the item occupied before removal.
        index: usize,
    },

    /// The item at `index` was replaced.
    ItemChanged {
        /// Position of the replaced item.
        index: usize,
    },
}

/**
The contract between a list of items and the grid view bound to it.

Every binding is a mutable sequence of items with change notifications. The sorting methods have
defaults describing a binding that cannot sort: [`supports_sorting`](Self::supports_sorting) is
`false`, no field is active, the direction reads ascending, and
[`apply_sort`](Self::apply_sort) fails with [`GridListError::SortNotSupported`]. A sortable
binding such as [`SortableList`](crate::SortableList) overrides all of them. The defaults double
as the baseline state a sortable binding reports after [`remove_sort`](Self::remove_sort).
*/
pub trait BindableList<T> {
    /// The number of items in the binding.
    fn len(&self) -> usize;

    /// Get a reference to the item at `index` or [`None`] if the index is out of range.
    fn get(&self, index: usize) -> Option<&T>;

    /// Append an item to the end of the binding. Notifies [`ListChanged::ItemAdded`].
    fn push(&mut self, item: T);

    /**
    Insert an item at `index`, shifting the items after it. Notifies [`ListChanged::ItemAdded`].

    # Panics

    Panics if `index` is greater than the binding's length.
    */
    fn insert(&mut self, index: usize, item: T);

    /**
    Remove and return the item at `index`, shifting the items after it. Notifies
    [`ListChanged::ItemRemoved`].

    # Panics

    Panics if `index` is out of range.
    */
    fn remove(&mut self, index: usize) -> T;

    /**
    Replace the item at `index` and return the previous item. Notifies
    [`ListChanged::ItemChanged`].

    # Panics

    Panics if `index` is out of range.
    */
    fn replace(&mut self, index: usize, item: T) -> T;

    /// Remove every item. Notifies [`ListChanged::Reset`].
    fn clear(&mut self);

    /**
    Register the callback that receives change notifications. A binding carries at most one
    listener; registering replaces the previous one.
    */
    fn set_change_listener(&mut self, listener: Box<dyn FnMut(ListChanged)>);

    /// Remove the registered change listener, if any.
    fn clear_change_listener(&mut self);

    /// Returns `true` if the binding holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this binding supports sorting at all.
    fn supports_sorting(&self) -> bool {
        false
    }

    /// Whether a sort is currently active.
    fn is_sorted(&self) -> bool {
        false
    }

    /// The field the binding is sorted by, while a sort is active.
    fn sort_field(&self) -> Option<&FieldDescriptor<T>> {
        None
    }

    /// The direction of the active sort. Reads ascending while no sort is active.
    fn sort_direction(&self) -> SortDirection {
        SortDirection::Ascending
    }

    /**
    Reorder the binding by `field` in `direction`.

    Fails with [`GridListError::SortNotSupported`] unless the binding overrides the sorting
    surface. When a supported sort fails for another reason, for example a comparison failure,
    the binding keeps the order and sort state it had before the request.
    */
    fn apply_sort(
        &mut self,
        _field: FieldDescriptor<T>,
        _direction: SortDirection,
    ) -> GridListResult<()> {
        Err(GridListError::SortNotSupported(String::from(
            "This binding does not support sorting",
        )))
    }

    /**
    Return the binding to its unsorted baseline so the sorting queries read their defaults
    again. Items keep the order they are currently in. Does nothing on a binding that never
    sorts.
    */
    fn remove_sort(&mut self) {}
}

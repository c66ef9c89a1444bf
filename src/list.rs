/*!
This module contains the sortable list, the crate's primary binding implementation.

The list owns its items in a [`Vec`] kept in display order. Sorting reorders that vector in
place; there is no separate view layer, so iteration, indexed access, and change notifications
all observe the same ordering a bound grid renders.
*/

use std::cmp::Ordering;
use std::fmt;
use std::slice::Iter;

use crate::bindable::{BindableList, ListChanged};
use crate::errors::GridListResult;
use crate::fields::FieldDescriptor;
use crate::sort::{
    Comparator, ComparatorFactory, FieldComparator, SortDescription, SortDirection,
};
use crate::utils::reorder;

/**
A bindable list of items that can sort itself by one field at a time.

The list implements the full [`BindableList`] contract including the sorting surface. Sorting is
stable, so items that tie under the active comparator keep the relative order they had before
the sort, and re-applying the active sort leaves the list unchanged.

# Sorting

A sort request names a [`FieldDescriptor`] and a [`SortDirection`]. The comparator for the
request comes from the installed [`ComparatorFactory`] when one is present and otherwise from
the built-in [`FieldComparator`] rules. Sorts are all or nothing: the first failed comparison
aborts the request, the items keep their previous order, and the sort state keeps describing
whatever sort was active before the request.

# Change notifications

At most one change listener is registered at a time. The listener fires after each mutation,
including a [`ListChanged::Reset`] after every successful sort. Removing a sort fires nothing
because the items do not move.

# Examples

```
use gridlist::{BindableList, FieldDescriptor, SortDirection, SortableList};

struct Track {
    title: String,
    plays: u64,
}

# fn main() -> gridlist::GridListResult<()> {
let mut list = SortableList::from_items(vec![
    Track { title: String::from("Blue"), plays: 40 },
    Track { title: String::from("alpha"), plays: 9 },
]);

let title = FieldDescriptor::text("title", |track: &Track| track.title.as_str().into());
list.apply_sort(title, SortDirection::Ascending)?;

assert!(list.is_sorted());
assert_eq!(list.get(0).map(|track| track.title.as_str()), Some("alpha"));
# Ok(())
# }
```
*/
pub struct SortableList<T> {
    /// The items in display order.
    items: Vec<T>,

    /// The field of the active sort or `None` while the list is unsorted.
    sort_field: Option<FieldDescriptor<T>>,

    /// The direction of the active sort. Ascending while the list is unsorted.
    sort_direction: SortDirection,

    /// Factory overriding how sort comparators are built.
    comparator_factory: Option<ComparatorFactory<T>>,

    /// The registered change listener.
    change_listener: Option<Box<dyn FnMut(ListChanged)>>,
}

/// Public methods
impl<T> SortableList<T> {
    /// Create an empty [`SortableList`].
    pub fn new() -> Self {
        Self {
            items: vec![],
            sort_field: None,
            sort_direction: SortDirection::Ascending,
            comparator_factory: None,
            change_listener: None,
        }
    }

    /// Create a [`SortableList`] holding `items` in their iteration order.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new();
        list.items.extend(items);

        list
    }

    /**
    Replace the whole contents of the list with `items`.

    The list returns to its unsorted baseline; an active sort is not re-applied to the new
    items. Notifies [`ListChanged::Reset`].
    */
    pub fn reset_items<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.clear();
        self.items.extend(items);
        self.reset_sort_state();
        self.notify(ListChanged::Reset);
    }

    /**
    Install a factory that builds the comparator for each sort request.

    The factory replaces the built-in comparison rules for every subsequent request. The active
    sort is not re-applied.
    */
    pub fn set_comparator_factory(&mut self, factory: ComparatorFactory<T>) {
        self.comparator_factory = Some(factory);
    }

    /// Remove the installed comparator factory and return to the built-in comparison rules.
    pub fn clear_comparator_factory(&mut self) {
        self.comparator_factory = None;
    }

    /// Get an iterator over references to the items in display order.
    pub fn iter(&self) -> Iter<T> {
        self.items.iter()
    }

    /// View the items in display order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /**
    Describe the active sort in a serializable form, or [`None`] while the list is unsorted.

    Feed a persisted description back through [`BindableList::apply_sort`] with a matching
    descriptor to restore the ordering in a later session.
    */
    pub fn sort_description(&self) -> Option<SortDescription> {
        self.sort_field.as_ref().map(|field| SortDescription {
            field: field.name().to_owned(),
            direction: self.sort_direction,
        })
    }
}

/// Private methods
impl<T> SortableList<T> {
    /// Return the sort state to the unsorted baseline. The items do not move.
    fn reset_sort_state(&mut self) {
        self.sort_field = None;
        self.sort_direction = SortDirection::Ascending;
    }

    /// Invoke the change listener, if one is registered.
    fn notify(&mut self, change: ListChanged) {
        if let Some(listener) = self.change_listener.as_mut() {
            listener(change);
        }
    }

    /**
    Compute the order the items would take under `comparator` without moving them.

    The sort runs over a scratch list of item indices so a failure cannot leave the items in a
    half-sorted state. Returns the indices of the items in sorted order or the first comparison
    failure.
    */
    fn sorted_permutation(&self, comparator: &dyn Comparator<T>) -> GridListResult<Vec<usize>> {
        let indices: Vec<usize> = (0..self.items.len()).collect();

        self.merge_sort_indices(indices, comparator)
    }

    /**
    Stable merge sort over item indices with a comparator that can fail.

    [`slice::sort_by`] cannot surface an error out of its comparison closure, so the recursion
    is done by hand. Ties take from the left run first, which is what keeps the sort stable.
    */
    fn merge_sort_indices(
        &self,
        mut indices: Vec<usize>,
        comparator: &dyn Comparator<T>,
    ) -> GridListResult<Vec<usize>> {
        if indices.len() <= 1 {
            return Ok(indices);
        }

        let upper_half = indices.split_off(indices.len() / 2);
        let left = self.merge_sort_indices(indices, comparator)?;
        let right = self.merge_sort_indices(upper_half, comparator)?;

        let mut merged = Vec::with_capacity(left.len() + right.len());
        let mut left_iter = left.into_iter().peekable();
        let mut right_iter = right.into_iter().peekable();
        while let (Some(&left_index), Some(&right_index)) = (left_iter.peek(), right_iter.peek())
        {
            let ordering =
                comparator.compare(&self.items[left_index], &self.items[right_index])?;
            if ordering == Ordering::Greater {
                merged.push(right_index);
                right_iter.next();
            } else {
                merged.push(left_index);
                left_iter.next();
            }
        }
        merged.extend(left_iter);
        merged.extend(right_iter);

        Ok(merged)
    }
}

impl<T> BindableList<T> for SortableList<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn push(&mut self, item: T) {
        self.items.push(item);
        self.notify(ListChanged::ItemAdded {
            index: self.items.len() - 1,
        });
    }

    fn insert(&mut self, index: usize, item: T) {
        self.items.insert(index, item);
        self.notify(ListChanged::ItemAdded { index });
    }

    fn remove(&mut self, index: usize) -> T {
        let removed = self.items.remove(index);
        self.notify(ListChanged::ItemRemoved { index });

        removed
    }

    fn replace(&mut self, index: usize, item: T) -> T {
        let previous = std::mem::replace(&mut self.items[index], item);
        self.notify(ListChanged::ItemChanged { index });

        previous
    }

    fn clear(&mut self) {
        self.items.clear();
        self.notify(ListChanged::Reset);
    }

    fn set_change_listener(&mut self, listener: Box<dyn FnMut(ListChanged)>) {
        self.change_listener = Some(listener);
    }

    fn clear_change_listener(&mut self) {
        self.change_listener = None;
    }

    fn supports_sorting(&self) -> bool {
        true
    }

    fn is_sorted(&self) -> bool {
        self.sort_field.is_some()
    }

    fn sort_field(&self) -> Option<&FieldDescriptor<T>> {
        self.sort_field.as_ref()
    }

    fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    fn apply_sort(
        &mut self,
        field: FieldDescriptor<T>,
        direction: SortDirection,
    ) -> GridListResult<()> {
        log::debug!(
            "Sorting {} items by the {} field under the {} rule in {} order.",
            self.items.len(),
            field.name(),
            field.kind(),
            direction
        );

        let built_comparator;
        let default_rule;
        let comparator: &dyn Comparator<T> = match self.comparator_factory.as_ref() {
            Some(factory) => {
                built_comparator = factory(&field, direction);
                built_comparator.as_ref()
            }
            None => {
                default_rule = FieldComparator::new(field.clone(), direction);
                &default_rule
            }
        };

        let permutation = match self.sorted_permutation(comparator) {
            Ok(permutation) => permutation,
            Err(error) => {
                log::warn!(
                    "Sorting was aborted and the list keeps its previous order. Original error: {}",
                    error
                );

                return Err(error);
            }
        };

        let items = std::mem::take(&mut self.items);
        self.items = reorder::apply_permutation(items, &permutation);
        self.sort_field = Some(field);
        self.sort_direction = direction;
        self.notify(ListChanged::Reset);

        Ok(())
    }

    fn remove_sort(&mut self) {
        self.reset_sort_state();
    }
}

impl<T> Default for SortableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SortableList<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_items(iter)
    }
}

impl<T: fmt::Debug> fmt::Debug for SortableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortableList")
            .field("items", &self.items)
            .field("sort_field", &self.sort_field)
            .field("sort_direction", &self.sort_direction)
            .finish()
    }
}

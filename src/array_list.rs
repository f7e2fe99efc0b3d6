use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display, Formatter},
    slice,
};

use itertools::Itertools;
use thiserror::Error;

use crate::sort;

/// Capacity of a freshly constructed list.
pub const DEFAULT_CAPACITY: usize = 10;

/// Contiguous storage for the occupied prefix of an [`ArrayList`].
///
/// Stores trust their caller: indices are checked by the list before any
/// call reaches the store.
pub trait SlotStore {
    type Item;
    fn with_capacity(capacity: usize) -> Self;
    /// Make room for at least `capacity` elements, keeping the existing ones.
    fn grow(&mut self, capacity: usize);
    fn len(&self) -> usize;
    fn insert(&mut self, index: usize, value: Self::Item);
    fn remove(&mut self, index: usize) -> Self::Item;
    fn clear(&mut self);
    fn as_slice(&self) -> &[Self::Item];
    fn as_mut_slice(&mut self) -> &mut [Self::Item];
}

pub trait SlotStoreType {
    type Store<T>: SlotStore<Item = T>;
}

mod vec_store;
pub use vec_store::*;
mod unchecked_store;
pub use unchecked_store::*;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Index: {index}, Size: {size}")]
pub struct OutOfRange {
    pub index: usize,
    pub size: usize,
}

/// A growable array with doubling capacity.
pub struct ArrayList<T, S: SlotStoreType = VecStoreType> {
    slots: S::Store<T>,
    capacity: usize,
}

impl<T, S: SlotStoreType> ArrayList<T, S> {
    pub fn new() -> Self {
        ArrayList {
            slots: S::Store::<T>::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Doubles the backing store if it is full.
    pub fn ensure_capacity(&mut self) {
        if self.len() == self.capacity {
            self.capacity *= 2;
            self.slots.grow(self.capacity);
        }
    }

    /// Checks that `index` addresses a live element.
    pub fn check_index(&self, index: usize) -> Result<(), OutOfRange> {
        if index >= self.len() {
            return Err(self.out_of_range(index));
        }
        Ok(())
    }

    /// Checks that `index` is a valid insertion point, `len()` included.
    pub fn check_index_for_add(&self, index: usize) -> Result<(), OutOfRange> {
        if index > self.len() {
            return Err(self.out_of_range(index));
        }
        Ok(())
    }

    fn out_of_range(&self, index: usize) -> OutOfRange {
        OutOfRange {
            index,
            size: self.len(),
        }
    }

    pub fn push(&mut self, element: T) {
        self.ensure_capacity();
        let end = self.len();
        self.slots.insert(end, element);
    }

    /// Inserts `element` at `index`, shifting everything after it to the right.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), OutOfRange> {
        self.check_index_for_add(index)?;
        self.ensure_capacity();
        self.slots.insert(index, element);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&T, OutOfRange> {
        self.check_index(index)?;
        Ok(&self.slots.as_slice()[index])
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    pub fn remove(&mut self, index: usize) -> Result<T, OutOfRange> {
        self.check_index(index)?;
        Ok(self.slots.remove(index))
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        self.slots.clear()
    }

    /// Sorts with the standard library sort. Stable.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.slots.as_mut_slice().sort_by(compare)
    }

    /// Sorts with a last-element-pivot quicksort. Not stable.
    pub fn quick_sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        sort::quick_sort_by(self.slots.as_mut_slice(), &mut compare)
    }

    pub fn as_slice(&self) -> &[T] {
        self.slots.as_slice()
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T, S: SlotStoreType> Default for ArrayList<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, S: SlotStoreType> IntoIterator for &'a ArrayList<T, S> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S: SlotStoreType> Extend<T> for ArrayList<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<T, S: SlotStoreType> FromIterator<T> for ArrayList<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Display, S: SlotStoreType> Display for ArrayList<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().format(", "))
    }
}

impl<T: Debug, S: SlotStoreType> Debug for ArrayList<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::error::FixedListError;

/// Capacity used by [`FixedList::new`] and [`Default`].
pub const DEFAULT_MAX_SIZE: usize = 10;

/// Test behaviour for injecting failures in `FixedList` operations.
///
/// This is only available with the `test_utils` feature and allows users
/// to test error handling paths in their code by injecting failures.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// #[cfg(test)]
/// mod tests {
///     use fixed_list::{FixedList, FixedListBehaviour, FixedListError};
///
///     #[test]
///     fn test_handles_capacity_exceeded() -> Result<(), FixedListError> {
///         let mut list = FixedList::with_capacity(10);
///
///         // Inject failure
///         list.change_behaviour(FixedListBehaviour::FailAtInsert);
///
///         // This will fail even though capacity allows it
///         assert!(list.push_back(1u8).is_err());
///
///         // Reset to normal behaviour
///         list.change_behaviour(FixedListBehaviour::None);
///
///         // Now it works
///         list.push_back(1u8)?;
///         Ok(())
///     }
/// }
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedListBehaviour {
    /// Normal behaviour - no injected failures.
    None,
    /// Every insertion fails with `CapacityExceeded`.
    FailAtInsert,
    /// Every `pop*()` call fails with `EmptyList`.
    FailAtPop,
}

#[cfg(any(test, feature = "test_utils"))]
impl Default for FixedListBehaviour {
    fn default() -> Self {
        Self::None
    }
}

/// Fixed-capacity list backed by a single allocation that is never resized.
///
/// The storage holds exactly `max_size` slots. Slots `[0, len)` are occupied;
/// the remaining slots hold `T::default()` and carry no value.
///
/// Every fallible operation validates its arguments before touching the
/// storage, so a failed call leaves the list unchanged.
///
/// # Example
///
/// ```rust
/// use fixed_list::{FixedList, FixedListError};
///
/// fn example() -> Result<(), FixedListError> {
///     let mut list = FixedList::with_capacity(3);
///     list.push_back(1)?;
///     list.push_back(2)?;
///     list.push_back(3)?;
///
///     assert!(list.is_full());
///     assert_eq!(list.push_back(4), Err(FixedListError::CapacityExceeded));
///
///     assert_eq!(list.pop_front()?, 1);
///     assert_eq!(list.len(), 2);
///     assert_eq!(list.find(&2)?, 0);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
#[derive(Clone)]
pub struct FixedList<T> {
    contents: Box<[T]>,
    len: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: FixedListBehaviour,
}

impl<T> FixedList<T>
where
    T: Default,
{
    /// Creates an empty list with [`DEFAULT_MAX_SIZE`] slots.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_list::{FixedList, DEFAULT_MAX_SIZE};
    ///
    /// let list: FixedList<u8> = FixedList::new();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.max_size(), DEFAULT_MAX_SIZE);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_SIZE)
    }

    /// Creates an empty list with exactly `max_size` slots.
    ///
    /// The whole storage is allocated here and filled with `T::default()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_list::FixedList;
    ///
    /// let list: FixedList<u8> = FixedList::with_capacity(4);
    /// assert!(list.is_empty());
    /// assert_eq!(list.max_size(), 4);
    /// ```
    pub fn with_capacity(max_size: usize) -> Self {
        let contents: Box<[T]> = (0..max_size).map(|_| T::default()).collect();

        Self {
            contents,
            len: 0,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: FixedListBehaviour::default(),
        }
    }

    /// Removes every element, keeping the storage.
    ///
    /// Occupied slots are reset to `T::default()` so the removed values are
    /// dropped immediately.
    pub fn clear(&mut self) {
        self.contents[..self.len]
            .iter_mut()
            .for_each(|slot| *slot = T::default());
        self.len = 0;
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// # Errors
    ///
    /// - [`FixedListError::EmptyList`] if the list has no elements.
    /// - [`FixedListError::InvalidIndex`] if `index >= len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_list::{FixedList, FixedListError};
    ///
    /// fn example() -> Result<(), FixedListError> {
    ///     let mut list = FixedList::with_capacity(4);
    ///     list.push_back('a')?;
    ///     list.push_back('b')?;
    ///     list.push_back('c')?;
    ///
    ///     assert_eq!(list.pop(1)?, 'b');
    ///     assert_eq!(list.as_slice(), &['a', 'c']);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn pop(&mut self, index: usize) -> Result<T, FixedListError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, FixedListBehaviour::FailAtPop) {
            return Err(FixedListError::EmptyList);
        }

        if self.is_empty() {
            return Err(FixedListError::EmptyList);
        }

        if index >= self.len {
            return Err(FixedListError::InvalidIndex {
                index,
                len: self.len,
            });
        }

        let value = core::mem::take(&mut self.contents[index]);
        // The vacated slot travels to the end of the occupied range.
        self.contents[index..self.len].rotate_left(1);
        self.len -= 1;

        Ok(value)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`FixedListError::EmptyList`] if the list has no elements.
    pub fn pop_back(&mut self) -> Result<T, FixedListError> {
        let last = self.len.checked_sub(1).ok_or(FixedListError::EmptyList)?;
        self.pop(last)
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`FixedListError::EmptyList`] if the list has no elements.
    pub fn pop_front(&mut self) -> Result<T, FixedListError> {
        self.pop(0)
    }

    /// Removes every element equal to `value` and returns how many were removed.
    ///
    /// The remaining elements keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`FixedListError::EmptyList`] if the list has no elements.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_list::{FixedList, FixedListError};
    ///
    /// fn example() -> Result<(), FixedListError> {
    ///     let mut list = FixedList::with_capacity(5);
    ///     for value in [1, 2, 2, 3, 2] {
    ///         list.push_back(value)?;
    ///     }
    ///
    ///     assert_eq!(list.remove(&2)?, 3);
    ///     assert_eq!(list.as_slice(), &[1, 3]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<usize, FixedListError>
    where
        T: PartialEq,
    {
        if self.is_empty() {
            return Err(FixedListError::EmptyList);
        }

        let mut kept = 0;
        for i in 0..self.len {
            if self.contents[i] != *value {
                self.contents.swap(kept, i);
                kept += 1;
            }
        }

        let removed = self.len - kept;
        self.contents[kept..self.len]
            .iter_mut()
            .for_each(|slot| *slot = T::default());
        self.len = kept;

        Ok(removed)
    }
}

impl<T> FixedList<T> {
    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// # Errors
    ///
    /// - [`FixedListError::CapacityExceeded`] if the list is full.
    /// - [`FixedListError::InvalidIndex`] if `index > len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_list::{FixedList, FixedListError};
    ///
    /// fn example() -> Result<(), FixedListError> {
    ///     let mut list = FixedList::with_capacity(3);
    ///     list.insert(1, 0)?;
    ///     list.insert(3, 1)?;
    ///     list.insert(2, 1)?;
    ///
    ///     assert_eq!(list.as_slice(), &[1, 2, 3]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn insert(&mut self, value: T, index: usize) -> Result<(), FixedListError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, FixedListBehaviour::FailAtInsert) {
            return Err(FixedListError::CapacityExceeded);
        }

        if self.is_full() {
            return Err(FixedListError::CapacityExceeded);
        }

        if index > self.len {
            return Err(FixedListError::InvalidIndex {
                index,
                len: self.len,
            });
        }

        // Slot `len` is free (not full); rotate it down to `index`.
        self.contents[index..=self.len].rotate_right(1);
        self.contents[index] = value;
        self.len += 1;

        Ok(())
    }

    /// Appends `value` after the last element.
    ///
    /// # Errors
    ///
    /// Returns [`FixedListError::CapacityExceeded`] if the list is full.
    pub fn push_back(&mut self, value: T) -> Result<(), FixedListError> {
        self.insert(value, self.len)
    }

    /// Inserts `value` before the first element.
    ///
    /// # Errors
    ///
    /// Returns [`FixedListError::CapacityExceeded`] if the list is full.
    pub fn push_front(&mut self, value: T) -> Result<(), FixedListError> {
        self.insert(value, 0)
    }

    /// Inserts `value` before the first element that is not less than it.
    ///
    /// The scan is linear from the front. A list built only through this
    /// method stays in non-decreasing order.
    ///
    /// # Errors
    ///
    /// Returns [`FixedListError::CapacityExceeded`] if the list is full.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_list::{FixedList, FixedListError};
    ///
    /// fn example() -> Result<(), FixedListError> {
    ///     let mut list = FixedList::with_capacity(4);
    ///     for value in [5, 1, 4, 2] {
    ///         list.insert_sorted(value)?;
    ///     }
    ///
    ///     assert_eq!(list.as_slice(), &[1, 2, 4, 5]);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn insert_sorted(&mut self, value: T) -> Result<(), FixedListError>
    where
        T: PartialOrd,
    {
        if self.is_full() {
            return Err(FixedListError::CapacityExceeded);
        }

        let index = self
            .as_slice()
            .iter()
            .take_while(|item| value > **item)
            .count();

        self.insert(value, index)
    }

    /// Returns `true` if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.max_size()
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if an occupied slot equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(value)
    }

    /// Returns the index of the first element equal to `value`.
    ///
    /// When no element matches, returns `len()`, which is never a valid index.
    ///
    /// # Errors
    ///
    /// Returns [`FixedListError::EmptyList`] if the list has no elements.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_list::{FixedList, FixedListError};
    ///
    /// fn example() -> Result<(), FixedListError> {
    ///     let mut list = FixedList::with_capacity(3);
    ///     list.push_back(7)?;
    ///     list.push_back(8)?;
    ///
    ///     assert_eq!(list.find(&8)?, 1);
    ///     assert_eq!(list.find(&9)?, list.len());
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn find(&self, value: &T) -> Result<usize, FixedListError>
    where
        T: PartialEq,
    {
        if self.is_empty() {
            return Err(FixedListError::EmptyList);
        }

        Ok(self
            .as_slice()
            .iter()
            .position(|item| item == value)
            .unwrap_or(self.len))
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the fixed capacity chosen at construction.
    #[inline]
    pub fn max_size(&self) -> usize {
        self.contents.len()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// - [`FixedListError::EmptyList`] if the list has no elements.
    /// - [`FixedListError::InvalidIndex`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, FixedListError> {
        self.check_occupied(index)?;
        Ok(&self.contents[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// - [`FixedListError::EmptyList`] if the list has no elements.
    /// - [`FixedListError::InvalidIndex`] if `index >= len()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fixed_list::{FixedList, FixedListError};
    ///
    /// fn example() -> Result<(), FixedListError> {
    ///     let mut list = FixedList::with_capacity(2);
    ///     list.push_back(1)?;
    ///
    ///     *list.at_mut(0)? = 42;
    ///     assert_eq!(list.at(0)?, &42);
    ///     assert!(list.at_mut(1).is_err());
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, FixedListError> {
        self.check_occupied(index)?;
        Ok(&mut self.contents[index])
    }

    /// Returns the occupied slots as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.contents[..self.len]
    }

    /// Changes the test behaviour for this list.
    ///
    /// This is only available with the `test_utils` feature and allows injecting
    /// failures for testing error handling paths.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: FixedListBehaviour) {
        self.behaviour = behaviour;
    }

    /// Returns a reference to the slot at `index` without any bounds check.
    ///
    /// # Safety
    ///
    /// This method is only available with the `unsafe` feature.
    /// The caller must ensure `index < max_size()`. Slots at or beyond
    /// `len()` hold `T::default()` or whatever was last written through
    /// `IndexMut`.
    #[cfg(any(test, feature = "unsafe"))]
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: caller guarantees `index < max_size()`.
        unsafe { self.contents.get_unchecked(index) }
    }

    /// Returns a mutable reference to the slot at `index` without any bounds check.
    ///
    /// # Safety
    ///
    /// This method is only available with the `unsafe` feature.
    /// The caller must ensure `index < max_size()`.
    #[cfg(any(test, feature = "unsafe"))]
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: caller guarantees `index < max_size()`.
        unsafe { self.contents.get_unchecked_mut(index) }
    }

    /// Returns the whole backing storage, regardless of len.
    ///
    /// This method is only available with the `unsafe` feature.
    /// Slots beyond `len()` carry no logical value.
    #[cfg(any(test, feature = "unsafe"))]
    #[inline(always)]
    pub fn as_capacity_slice(&self) -> &[T] {
        &self.contents
    }

    fn check_occupied(&self, index: usize) -> Result<(), FixedListError> {
        if self.is_empty() {
            return Err(FixedListError::EmptyList);
        }

        if index >= self.len {
            return Err(FixedListError::InvalidIndex {
                index,
                len: self.len,
            });
        }

        Ok(())
    }
}

impl<T> Default for FixedList<T>
where
    T: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FixedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedList")
            .field("data", &self.as_slice())
            .field("len", &self.len)
            .field("max_size", &self.max_size())
            .finish()
    }
}

// Capacity and unoccupied slots do not take part in equality.
impl<T> PartialEq for FixedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> Eq for FixedList<T> where T: Eq {}

/// Direct access to the backing storage.
///
/// The index is checked against `max_size()` only, never against `len()`:
/// reading a slot at or beyond `len()` yields a value with no meaning.
/// Use [`FixedList::at`] for a checked lookup.
impl<T> Index<usize> for FixedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.contents[index]
    }
}

impl<T> IndexMut<usize> for FixedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.contents[index]
    }
}

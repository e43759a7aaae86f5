// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-capacity list backed by a single allocation that never grows.
//!
//! `FixedList<T>` reserves all of its slots at construction and keeps them for
//! its whole lifetime:
//!
//! - **Fixed capacity**: `max_size()` is chosen once (default [`DEFAULT_MAX_SIZE`])
//!   and the storage is never reallocated
//! - **Ordered**: insertions and removals shift neighbours and keep relative order
//! - **Fallible operations**: every insertion, removal and checked lookup returns
//!   a [`FixedListError`] instead of panicking, and never mutates on failure
//!
//! # Example
//!
//! ```rust
//! use fixed_list::{FixedList, FixedListError};
//!
//! fn example() -> Result<(), FixedListError> {
//!     let mut list = FixedList::with_capacity(4);
//!     list.push_back(20)?;
//!     list.push_front(10)?;
//!     list.insert_sorted(15)?;
//!
//!     assert_eq!(list.as_slice(), &[10, 15, 20]);
//!     assert!(list.contains(&15));
//!
//!     assert_eq!(list.pop_back()?, 20);
//!     assert_eq!(list.len(), 2);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Features
//!
//! - `test_utils`: exposes [`FixedListBehaviour`] to inject failures when testing
//!   error handling paths in downstream code.
//! - `unsafe`: exposes `get_unchecked()`, `get_unchecked_mut()` and
//!   `as_capacity_slice()`.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod fixed_list;

#[cfg(test)]
mod tests;

pub use error::FixedListError;
pub use fixed_list::{DEFAULT_MAX_SIZE, FixedList};

#[cfg(any(test, feature = "test_utils"))]
pub use fixed_list::FixedListBehaviour;

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for fixed-list.

use thiserror::Error;

/// Error type for `FixedList` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum FixedListError {
    /// Attempted to insert into a list that is already at capacity.
    #[error("Capacity exceeded: list is full")]
    CapacityExceeded,

    /// Index is outside the valid range for the requested operation.
    ///
    /// `len` is the number of occupied slots at the time of the call.
    #[error("Invalid index {index} for list of length {len}")]
    InvalidIndex {
        /// The rejected index.
        index: usize,
        /// Length of the list when the call was made.
        len: usize,
    },

    /// Attempted to remove or look up an element in an empty list.
    #[error("List is empty")]
    EmptyList,
}

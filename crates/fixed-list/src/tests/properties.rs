// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::{FixedList, FixedListError};

proptest! {
    #[test]
    fn push_back_fills_exactly_to_capacity(
        max_size in 0..=32usize,
        values in proptest::collection::vec(any::<u16>(), 0..=48)
    ) {
        let mut list = FixedList::with_capacity(max_size);

        for value in values {
            let before = list.len();
            let was_full = list.is_full();

            match list.push_back(value) {
                Ok(()) => {
                    prop_assert!(!was_full);
                    prop_assert_eq!(list.len(), before + 1);
                }
                Err(err) => {
                    prop_assert!(was_full);
                    prop_assert_eq!(err, FixedListError::CapacityExceeded);
                    prop_assert_eq!(list.len(), before);
                }
            }

            prop_assert_eq!(list.is_full(), list.len() == list.max_size());
        }
    }

    #[test]
    fn pop_back_returns_last_push(
        prefix in proptest::collection::vec(any::<i32>(), 0..=15),
        value in any::<i32>()
    ) {
        let mut list = FixedList::with_capacity(16);
        for item in &prefix {
            list.push_back(*item).expect("Failed to push_back(..)");
        }

        list.push_back(value).expect("Failed to push_back(value)");
        let len = list.len();

        prop_assert_eq!(list.pop_back(), Ok(value));
        prop_assert_eq!(list.len(), len - 1);
        prop_assert_eq!(list.as_slice(), prefix.as_slice());
    }

    #[test]
    fn insert_sorted_keeps_non_decreasing_order(
        values in proptest::collection::vec(any::<i16>(), 0..=40)
    ) {
        let mut list = FixedList::with_capacity(40);

        for value in &values {
            list.insert_sorted(*value).expect("Failed to insert_sorted(..)");
        }

        let mut expected = values.clone();
        expected.sort();

        prop_assert!(list.as_slice().windows(2).all(|pair| pair[0] <= pair[1]));
        prop_assert_eq!(list.as_slice(), expected.as_slice());
    }

    #[test]
    fn insert_then_pop_at_same_index_round_trips(
        values in proptest::collection::vec(any::<u8>(), 0..=19),
        value in any::<u8>(),
        position in any::<prop::sample::Index>()
    ) {
        let mut list = FixedList::with_capacity(20);
        for item in &values {
            list.push_back(*item).expect("Failed to push_back(..)");
        }

        let index = position.index(values.len() + 1);

        list.insert(value, index).expect("Failed to insert(..)");
        prop_assert_eq!(list.at(index), Ok(&value));
        prop_assert_eq!(list.pop(index), Ok(value));

        prop_assert_eq!(list.len(), values.len());
        prop_assert_eq!(list.as_slice(), values.as_slice());
    }

    #[test]
    fn remove_matches_retain(
        values in proptest::collection::vec(0..4u8, 1..=24),
        target in 0..4u8
    ) {
        let mut list = FixedList::with_capacity(24);
        for item in &values {
            list.push_back(*item).expect("Failed to push_back(..)");
        }

        let mut expected = values.clone();
        expected.retain(|item| *item != target);

        prop_assert_eq!(list.remove(&target), Ok(values.len() - expected.len()));
        prop_assert_eq!(list.as_slice(), expected.as_slice());
        prop_assert!(!list.contains(&target));
    }

    #[test]
    fn find_agrees_with_position(
        values in proptest::collection::vec(0..8u8, 1..=16),
        target in 0..8u8
    ) {
        let mut list = FixedList::with_capacity(16);
        for item in &values {
            list.push_back(*item).expect("Failed to push_back(..)");
        }

        let expected = values
            .iter()
            .position(|item| *item == target)
            .unwrap_or(values.len());

        prop_assert_eq!(list.find(&target), Ok(expected));
        prop_assert_eq!(list.contains(&target), expected < values.len());
    }

    #[test]
    fn empty_list_rejects_removal_and_lookup(
        max_size in 0..=8usize,
        index in 0..=8usize,
        value in any::<u8>()
    ) {
        let mut list: FixedList<u8> = FixedList::with_capacity(max_size);

        prop_assert_eq!(list.pop(index), Err(FixedListError::EmptyList));
        prop_assert_eq!(list.pop_back(), Err(FixedListError::EmptyList));
        prop_assert_eq!(list.pop_front(), Err(FixedListError::EmptyList));
        prop_assert_eq!(list.remove(&value), Err(FixedListError::EmptyList));
        prop_assert_eq!(list.find(&value), Err(FixedListError::EmptyList));
        prop_assert_eq!(list.at(index), Err(FixedListError::EmptyList));
        prop_assert_eq!(list.at_mut(index), Err(FixedListError::EmptyList));
    }
}

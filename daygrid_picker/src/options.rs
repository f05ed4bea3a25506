// Copyright 2025 the Daygrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picker configuration.

/// Behavior switches shared by both picker variants.
///
/// The defaults match the conservative surface: committed ranges stay
/// separate even when adjacent, and only the range-level callback fires.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PickerOptions {
    /// Union overlapping or back-to-back ranges after every commit, and let
    /// hover previews visually fuse with adjacent saved ranges.
    pub merge_ranges: bool,
    /// Also report the flattened per-day expansion of the committed set via
    /// [`SelectionObserver::days_changed`](crate::SelectionObserver::days_changed).
    pub individual_days: bool,
}

impl PickerOptions {
    /// Options with range merging enabled.
    #[must_use]
    pub const fn merging() -> Self {
        Self {
            merge_ranges: true,
            individual_days: false,
        }
    }
}

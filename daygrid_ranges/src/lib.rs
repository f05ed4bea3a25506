// Copyright 2025 the Daygrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=daygrid_ranges --heading-base-level=0

//! Daygrid Ranges: pure algebra over day-granularity date ranges.
//!
//! This crate maintains a collection of inclusive `[start, end]` calendar-day
//! ranges under toggle-style selection semantics, as used by drag-to-select
//! calendar widgets:
//!
//! - [`DayRange`]: an inclusive, normalized pair of [`chrono::NaiveDate`]s.
//! - [`find_overlapping_ranges`]: which stored ranges a selection touches.
//! - [`update_ranges_with_selection`]: the central toggle. A selection that
//!   touches nothing inserts a new range; a selection that touches anything
//!   deletes every touched range whole.
//! - [`merge_overlapping_ranges`]: union overlapping or back-to-back ranges
//!   into contiguous blocks.
//! - [`individual_days`]: flatten ranges into one date per covered day.
//!
//! All functions are pure: they take the current set and return a new one,
//! never mutating in place. The set itself is owned by the caller (typically
//! a host widget), which makes the algebra reusable across presentation
//! layers: a single-calendar drag surface and a two-field picker with chips
//! can share it unchanged.
//!
//! Deleting always removes a touched range *entirely*. There is no interval
//! subtraction and a deletion can never split one range into two fragments;
//! dragging across an existing range erases it.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use daygrid_ranges::{DayRange, update_ranges_with_selection};
//!
//! let d = |m, day| NaiveDate::from_ymd_opt(2025, m, day).unwrap();
//!
//! // First sweep inserts a range; endpoints may arrive in either order.
//! let ranges = update_ranges_with_selection(&[], DayRange::new(d(1, 3), d(1, 1)), false);
//! assert_eq!(ranges, vec![DayRange::new(d(1, 1), d(1, 3))]);
//!
//! // Sweeping over it again removes the whole range.
//! let ranges = update_ranges_with_selection(&ranges, DayRange::new(d(1, 2), d(1, 2)), false);
//! assert!(ranges.is_empty());
//! ```
//!
//! With merging enabled, a selection that lands back-to-back with an existing
//! range fuses into one contiguous block:
//!
//! ```rust
//! use chrono::NaiveDate;
//! use daygrid_ranges::{DayRange, update_ranges_with_selection};
//!
//! let d = |m, day| NaiveDate::from_ymd_opt(2025, m, day).unwrap();
//!
//! let ranges = vec![DayRange::new(d(1, 1), d(1, 5))];
//! let ranges = update_ranges_with_selection(&ranges, DayRange::new(d(1, 6), d(1, 10)), true);
//! assert_eq!(ranges, vec![DayRange::new(d(1, 1), d(1, 10))]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod algebra;
mod range;

pub use algebra::{
    find_overlapping_ranges, individual_days, is_day_in_ranges, merge_overlapping_ranges,
    remove_range_by_index, update_ranges_with_selection,
};
pub use range::DayRange;

// Copyright 2025 the Daygrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=daygrid_picker --heading-base-level=0

//! Daygrid Picker: host-facing multi-range selection cores.
//!
//! This crate wires the Daygrid building blocks (range algebra, continuity
//! geometry, and drag gesture tracking) into two small controllers a host
//! widget can own:
//!
//! - [`MultiRangePicker`]: a single-calendar drag surface. Pointer events go
//!   in; once per completed gesture the toggled range set comes back out
//!   through a [`SelectionObserver`].
//! - [`ProRangePicker`]: the same surface plus a two-field picker pair and a
//!   chip row: pair commits, per-chip deletion, and composite highlighting.
//!
//! Both variants consume one shared algebra; neither re-derives it. The
//! controllers know nothing about widget trees, theming, or pointer capture:
//! the host resolves pointer positions to days (see `daygrid_hit`), forwards
//! lifecycle events, and renders from [`MultiRangePicker::day_visual`] /
//! [`ProRangePicker::day_edges`] between events.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use daygrid_picker::{MultiRangePicker, PickerOptions, SelectionObserver};
//! use daygrid_ranges::DayRange;
//!
//! #[derive(Default)]
//! struct Latest(Vec<DayRange>);
//!
//! impl SelectionObserver for Latest {
//!     fn ranges_changed(&mut self, ranges: &[DayRange]) {
//!         self.0 = ranges.to_vec();
//!     }
//! }
//!
//! let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
//! let mut picker = MultiRangePicker::new(PickerOptions::default());
//! let mut latest = Latest::default();
//!
//! picker.pointer_down(d(15));
//! picker.pointer_move(d(18));
//! picker.pointer_up(&mut latest);
//!
//! assert_eq!(latest.0, vec![DayRange::new(d(15), d(18))]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod commit;
mod multi;
mod observer;
mod options;
mod pro;

pub use commit::commit_selection;
pub use multi::MultiRangePicker;
pub use observer::SelectionObserver;
pub use options::PickerOptions;
pub use pro::ProRangePicker;

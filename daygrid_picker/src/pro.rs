// Copyright 2025 the Daygrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The Pro controller: two-field range picking with a chip row.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use chrono::NaiveDate;
use daygrid_continuity::{RoundedEdges, day_edges_composite, is_day_in_composite};
use daygrid_event_state::drag::DragState;
use daygrid_ranges::{DayRange, is_day_in_ranges, remove_range_by_index};
use log::debug;

use crate::commit::{commit_selection, notify};
use crate::observer::SelectionObserver;
use crate::options::PickerOptions;

/// A two-field picker's in-progress endpoint pair.
///
/// Either endpoint may be unset while the user fills the fields, and a full
/// pair may arrive inverted; it is normalized at commit time.
pub type PickerPair = (Option<NaiveDate>, Option<NaiveDate>);

/// Controller for the Pro picker surface.
///
/// Extends the drag-to-select flow with the two other ways a range enters or
/// leaves the set on this surface: committing the two-field picker pair
/// through the same toggle, and deleting a saved range from its chip. Saved
/// ranges, the pending pair, and the drag preview all highlight through one
/// composite selection, so the calendar reads as a single surface.
#[derive(Debug, Default)]
pub struct ProRangePicker {
    ranges: Vec<DayRange>,
    pair: PickerPair,
    drag: DragState,
    options: PickerOptions,
}

impl ProRangePicker {
    /// Create an empty Pro picker with the given options.
    #[must_use]
    pub fn new(options: PickerOptions) -> Self {
        Self {
            ranges: Vec::new(),
            pair: (None, None),
            drag: DragState::new(),
            options,
        }
    }

    /// The committed range set.
    #[must_use]
    pub fn ranges(&self) -> &[DayRange] {
        &self.ranges
    }

    /// The pending two-field pair.
    #[must_use]
    pub const fn pair(&self) -> PickerPair {
        self.pair
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Begin a drag gesture on the pressed day.
    pub fn pointer_down(&mut self, day: NaiveDate) {
        self.drag.on_down(day);
    }

    /// Advance the drag gesture; `true` when the preview changed.
    pub fn pointer_move(&mut self, day: NaiveDate) -> bool {
        self.drag.on_move(day)
    }

    /// Finish the drag gesture and toggle its span into the range set.
    ///
    /// The pending pair is left untouched: a drag and a half-filled field
    /// entry can coexist. Returns `true` when a commit happened.
    pub fn pointer_up<O: SelectionObserver>(&mut self, observer: &mut O) -> bool {
        let Some(span) = self.drag.on_up() else {
            return false;
        };
        self.ranges = commit_selection(&self.ranges, span, self.options, observer);
        true
    }

    /// Pointer cancellation commits exactly like [`ProRangePicker::pointer_up`].
    pub fn pointer_cancel<O: SelectionObserver>(&mut self, observer: &mut O) -> bool {
        self.pointer_up(observer)
    }

    /// Record a change to the two-field picker pair.
    ///
    /// Ignored entirely while a drag is active, so field churn cannot
    /// interfere with an in-flight gesture. A half-filled pair is stored for
    /// highlighting only. Once both endpoints are set the pair is committed
    /// through the same toggle as a drag, observers fire, and the pair
    /// resets. Returns `true` when the range set changed.
    pub fn pair_changed<O: SelectionObserver>(
        &mut self,
        pair: PickerPair,
        observer: &mut O,
    ) -> bool {
        if self.drag.is_dragging() {
            return false;
        }
        self.pair = pair;

        let (Some(a), Some(b)) = pair else {
            return false;
        };
        self.ranges = commit_selection(&self.ranges, DayRange::new(a, b), self.options, observer);
        self.pair = (None, None);
        true
    }

    /// Delete the range behind a chip.
    ///
    /// Observers receive the updated set either way; an out-of-bounds index
    /// leaves the set unchanged, mirroring the defensive behavior of the
    /// rest of the core.
    pub fn remove_range<O: SelectionObserver>(&mut self, index: usize, observer: &mut O) {
        debug!("removing range chip {index} of {}", self.ranges.len());
        self.ranges = remove_range_by_index(&self.ranges, index);
        notify(&self.ranges, self.options, observer);
    }

    /// Chip labels for the saved ranges, in set order.
    pub fn chips(&self) -> impl Iterator<Item = String> {
        self.ranges
            .iter()
            .map(|r| format!("{} - {}", r.start(), r.end()))
    }

    /// Whether `day` is highlighted by any part of the composite selection:
    /// saved ranges, the pending pair, or the drag preview.
    #[must_use]
    pub fn is_day_selected(&self, day: NaiveDate) -> bool {
        is_day_in_ranges(day, &self.ranges)
            || is_day_in_composite(day, self.pair, self.drag.hover_span())
    }

    /// Edge rounding for one day cell on the composite selection surface.
    #[must_use]
    pub fn day_edges(&self, day: NaiveDate) -> RoundedEdges {
        day_edges_composite(day, &self.ranges, self.pair, self.drag.hover_span())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::commit::test_support::Recorder;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn full_pair_commits_and_resets() {
        let mut picker = ProRangePicker::new(PickerOptions::default());
        let mut recorder = Recorder::default();

        assert!(picker.pair_changed((Some(d(10)), Some(d(14))), &mut recorder));

        assert_eq!(picker.ranges(), &[DayRange::new(d(10), d(14))]);
        assert_eq!(picker.pair(), (None, None));
        assert_eq!(recorder.ranges_calls.len(), 1);
    }

    #[test]
    fn inverted_pair_normalizes() {
        let mut picker = ProRangePicker::new(PickerOptions::default());
        let mut recorder = Recorder::default();

        picker.pair_changed((Some(d(14)), Some(d(10))), &mut recorder);
        assert_eq!(picker.ranges(), &[DayRange::new(d(10), d(14))]);
    }

    #[test]
    fn half_pair_highlights_but_does_not_commit() {
        let mut picker = ProRangePicker::new(PickerOptions::default());
        let mut recorder = Recorder::default();

        assert!(!picker.pair_changed((Some(d(10)), None), &mut recorder));
        assert_eq!(picker.pair(), (Some(d(10)), None));
        assert!(picker.ranges().is_empty());
        assert!(recorder.ranges_calls.is_empty());
    }

    #[test]
    fn pair_changes_are_ignored_mid_drag() {
        let mut picker = ProRangePicker::new(PickerOptions::default());
        let mut recorder = Recorder::default();

        picker.pointer_down(d(1));
        assert!(!picker.pair_changed((Some(d(10)), Some(d(14))), &mut recorder));
        assert_eq!(picker.pair(), (None, None));
        assert!(recorder.ranges_calls.is_empty());

        picker.pointer_up(&mut recorder);
        assert_eq!(picker.ranges(), &[DayRange::single(d(1))]);
    }

    #[test]
    fn pair_commit_toggles_against_existing_ranges() {
        let mut picker = ProRangePicker::new(PickerOptions::default());
        let mut recorder = Recorder::default();

        picker.pair_changed((Some(d(10)), Some(d(14))), &mut recorder);
        // A pair overlapping the saved range erases it, same as a drag.
        picker.pair_changed((Some(d(12)), Some(d(20))), &mut recorder);
        assert!(picker.ranges().is_empty());
    }

    #[test]
    fn drag_flow_matches_free_variant() {
        let mut picker = ProRangePicker::new(PickerOptions::default());
        let mut recorder = Recorder::default();

        picker.pointer_down(d(3));
        assert!(picker.pointer_move(d(6)));
        assert!(picker.pointer_up(&mut recorder));
        assert_eq!(picker.ranges(), &[DayRange::new(d(3), d(6))]);
        assert!(!picker.pointer_up(&mut recorder));
    }

    #[test]
    fn remove_range_deletes_by_chip_index() {
        let mut picker = ProRangePicker::new(PickerOptions::default());
        let mut recorder = Recorder::default();

        picker.pair_changed((Some(d(1)), Some(d(3))), &mut recorder);
        picker.pair_changed((Some(d(10)), Some(d(12))), &mut recorder);
        picker.remove_range(0, &mut recorder);

        assert_eq!(picker.ranges(), &[DayRange::new(d(10), d(12))]);
        assert_eq!(recorder.last_ranges(), picker.ranges());
    }

    #[test]
    fn remove_range_out_of_bounds_keeps_set() {
        let mut picker = ProRangePicker::new(PickerOptions::default());
        let mut recorder = Recorder::default();

        picker.pair_changed((Some(d(1)), Some(d(3))), &mut recorder);
        picker.remove_range(5, &mut recorder);
        assert_eq!(picker.ranges(), &[DayRange::new(d(1), d(3))]);
        // Observers still hear about the (unchanged) set.
        assert_eq!(recorder.ranges_calls.len(), 2);
    }

    #[test]
    fn chips_label_each_range() {
        let mut picker = ProRangePicker::new(PickerOptions::default());
        let mut recorder = Recorder::default();

        picker.pair_changed((Some(d(1)), Some(d(3))), &mut recorder);
        picker.pair_changed((Some(d(10)), Some(d(12))), &mut recorder);

        let chips: Vec<String> = picker.chips().collect();
        assert_eq!(chips, vec!["2025-01-01 - 2025-01-03", "2025-01-10 - 2025-01-12"]);
    }

    #[test]
    fn composite_highlight_covers_pair_and_drag() {
        let mut picker = ProRangePicker::new(PickerOptions::default());
        let mut recorder = Recorder::default();

        picker.pair_changed((Some(d(10)), None), &mut recorder);
        assert!(!picker.is_day_selected(d(10)));

        picker.pair_changed((Some(d(10)), Some(d(12))), &mut recorder);
        // Pair committed into a saved range.
        assert!(picker.is_day_selected(d(11)));

        picker.pointer_down(d(20));
        picker.pointer_move(d(22));
        assert!(picker.is_day_selected(d(21)));
        assert_eq!(picker.day_edges(d(20)), RoundedEdges::LEFT);
        assert_eq!(picker.day_edges(d(21)), RoundedEdges::empty());
        assert_eq!(picker.day_edges(d(22)), RoundedEdges::RIGHT);
    }
}

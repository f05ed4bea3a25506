// Copyright 2025 the Daygrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single-calendar drag-to-select controller.

use alloc::vec::Vec;

use chrono::NaiveDate;
use daygrid_continuity::{DayVisual, day_visual};
use daygrid_event_state::drag::DragState;
use daygrid_ranges::DayRange;
use log::trace;

use crate::commit::commit_selection;
use crate::observer::SelectionObserver;
use crate::options::PickerOptions;

/// Controller for a drag-to-select multi-range calendar.
///
/// Owns the committed range set, the active drag gesture, and the picker
/// options. The host forwards pointer lifecycle events (with positions
/// already resolved to days) and renders day cells from
/// [`MultiRangePicker::day_visual`]; committed updates flow back through a
/// [`SelectionObserver`].
///
/// The controller does not render, capture pointers, or schedule work; it is
/// a plain synchronous state machine the host drives.
#[derive(Debug, Default)]
pub struct MultiRangePicker {
    ranges: Vec<DayRange>,
    drag: DragState,
    options: PickerOptions,
}

impl MultiRangePicker {
    /// Create an empty picker with the given options.
    #[must_use]
    pub fn new(options: PickerOptions) -> Self {
        Self {
            ranges: Vec::new(),
            drag: DragState::new(),
            options,
        }
    }

    /// Create a picker with a pre-selected range set, for example when
    /// restoring host state.
    #[must_use]
    pub fn with_ranges(options: PickerOptions, ranges: Vec<DayRange>) -> Self {
        Self {
            ranges,
            drag: DragState::new(),
            options,
        }
    }

    /// The committed range set.
    #[must_use]
    pub fn ranges(&self) -> &[DayRange] {
        &self.ranges
    }

    /// Replace the committed range set without firing observers.
    pub fn set_ranges(&mut self, ranges: Vec<DayRange>) {
        self.ranges = ranges;
    }

    /// The configured options.
    #[must_use]
    pub const fn options(&self) -> PickerOptions {
        self.options
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Begin a gesture on the pressed day.
    pub fn pointer_down(&mut self, day: NaiveDate) {
        trace!("pointer down on {day}");
        self.drag.on_down(day);
    }

    /// Advance the gesture to the day now under the pointer.
    ///
    /// Returns `true` when the hover preview changed and the host should
    /// re-render. Moves while idle, and moves that stay within the current
    /// head day, return `false`.
    pub fn pointer_move(&mut self, day: NaiveDate) -> bool {
        let advanced = self.drag.on_move(day);
        if advanced {
            trace!("drag head advanced to {day}");
        }
        advanced
    }

    /// Finish the gesture: toggle the dragged span into the range set and
    /// notify the observer.
    ///
    /// Returns `true` when a commit happened. A release without an active
    /// gesture is a no-op: no state change, no callbacks.
    pub fn pointer_up<O: SelectionObserver>(&mut self, observer: &mut O) -> bool {
        let Some(span) = self.drag.on_up() else {
            return false;
        };
        self.ranges = commit_selection(&self.ranges, span, self.options, observer);
        true
    }

    /// Pointer cancellation commits exactly like [`MultiRangePicker::pointer_up`].
    pub fn pointer_cancel<O: SelectionObserver>(&mut self, observer: &mut O) -> bool {
        self.pointer_up(observer)
    }

    /// Visual continuity state for one day cell in the next render pass.
    #[must_use]
    pub fn day_visual(&self, day: NaiveDate) -> DayVisual {
        day_visual(
            day,
            &self.ranges,
            self.drag.hover_span(),
            self.options.merge_ranges,
        )
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use daygrid_continuity::RoundedEdges;

    use super::*;
    use crate::commit::test_support::Recorder;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn full_gesture_commits_one_range() {
        let mut picker = MultiRangePicker::new(PickerOptions::default());
        let mut recorder = Recorder::default();

        picker.pointer_down(d(15));
        assert!(picker.pointer_move(d(18)));
        assert!(picker.pointer_up(&mut recorder));

        assert_eq!(picker.ranges(), &[DayRange::new(d(15), d(18))]);
        assert_eq!(recorder.ranges_calls.len(), 1);
        assert!(!picker.is_dragging());
    }

    #[test]
    fn dragging_back_over_a_range_erases_it() {
        let mut picker = MultiRangePicker::with_ranges(
            PickerOptions::default(),
            vec![DayRange::new(d(15), d(18))],
        );
        let mut recorder = Recorder::default();

        picker.pointer_down(d(16));
        picker.pointer_up(&mut recorder);

        assert!(picker.ranges().is_empty());
        assert_eq!(recorder.last_ranges(), &[]);
    }

    #[test]
    fn release_without_press_is_a_silent_no_op() {
        let mut picker = MultiRangePicker::new(PickerOptions::default());
        let mut recorder = Recorder::default();

        assert!(!picker.pointer_up(&mut recorder));
        assert!(recorder.ranges_calls.is_empty());
        assert!(picker.ranges().is_empty());
    }

    #[test]
    fn moves_while_idle_change_nothing() {
        let mut picker = MultiRangePicker::new(PickerOptions::default());
        assert!(!picker.pointer_move(d(10)));
        assert!(!picker.is_dragging());
    }

    #[test]
    fn cancel_commits_like_up() {
        let mut picker = MultiRangePicker::new(PickerOptions::default());
        let mut recorder = Recorder::default();

        picker.pointer_down(d(3));
        picker.pointer_move(d(5));
        assert!(picker.pointer_cancel(&mut recorder));

        assert_eq!(picker.ranges(), &[DayRange::new(d(3), d(5))]);
    }

    #[test]
    fn individual_days_callback_follows_opt_in() {
        let options = PickerOptions {
            individual_days: true,
            ..PickerOptions::default()
        };
        let mut picker = MultiRangePicker::new(options);
        let mut recorder = Recorder::default();

        picker.pointer_down(d(1));
        picker.pointer_move(d(3));
        picker.pointer_up(&mut recorder);

        assert_eq!(recorder.days_calls, vec![vec![d(1), d(2), d(3)]]);
    }

    #[test]
    fn hover_preview_reflects_the_active_gesture() {
        let mut picker = MultiRangePicker::new(PickerOptions::default());

        picker.pointer_down(d(10));
        picker.pointer_move(d(12));

        let visual = picker.day_visual(d(11));
        assert!(visual.hovered);
        assert!(!visual.in_range);
        assert_eq!(visual.edges, RoundedEdges::empty());
        assert_eq!(picker.day_visual(d(10)).edges, RoundedEdges::LEFT);
        assert_eq!(picker.day_visual(d(12)).edges, RoundedEdges::RIGHT);
    }

    #[test]
    fn merge_mode_fuses_consecutive_gestures() {
        let mut picker = MultiRangePicker::new(PickerOptions::merging());
        let mut recorder = Recorder::default();

        picker.pointer_down(d(1));
        picker.pointer_move(d(5));
        picker.pointer_up(&mut recorder);

        picker.pointer_down(d(6));
        picker.pointer_move(d(10));
        picker.pointer_up(&mut recorder);

        assert_eq!(picker.ranges(), &[DayRange::new(d(1), d(10))]);
    }

    #[test]
    fn set_ranges_does_not_notify() {
        let mut picker = MultiRangePicker::new(PickerOptions::default());
        picker.set_ranges(vec![DayRange::new(d(1), d(2))]);
        assert_eq!(picker.ranges().len(), 1);
    }
}

// Copyright 2025 the Daygrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Commit helpers shared by both picker variants.

use alloc::vec::Vec;

use daygrid_ranges::{DayRange, individual_days, update_ranges_with_selection};
use log::debug;

use crate::observer::SelectionObserver;
use crate::options::PickerOptions;

/// Apply a completed selection span to the range set and notify the host.
///
/// Runs the toggle update (with the post-merge pass when configured), then
/// fires [`SelectionObserver::ranges_changed`] and, when the host opted in,
/// [`SelectionObserver::days_changed`] with the flattened expansion. Returns
/// the updated set for the caller to store.
pub fn commit_selection<O: SelectionObserver>(
    ranges: &[DayRange],
    selection: DayRange,
    options: PickerOptions,
    observer: &mut O,
) -> Vec<DayRange> {
    let updated = update_ranges_with_selection(ranges, selection, options.merge_ranges);
    debug!(
        "committed span {}..{}: {} -> {} ranges",
        selection.start(),
        selection.end(),
        ranges.len(),
        updated.len()
    );
    notify(&updated, options, observer);
    updated
}

/// Fire the host callbacks for an already-updated range set.
pub(crate) fn notify<O: SelectionObserver>(
    updated: &[DayRange],
    options: PickerOptions,
    observer: &mut O,
) {
    observer.ranges_changed(updated);
    if options.individual_days {
        observer.days_changed(&individual_days(updated));
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use alloc::vec::Vec;

    use chrono::NaiveDate;
    use daygrid_ranges::DayRange;

    use crate::observer::SelectionObserver;

    /// Records every callback invocation for assertions.
    #[derive(Default)]
    pub(crate) struct Recorder {
        pub(crate) ranges_calls: Vec<Vec<DayRange>>,
        pub(crate) days_calls: Vec<Vec<NaiveDate>>,
    }

    impl Recorder {
        pub(crate) fn last_ranges(&self) -> &[DayRange] {
            self.ranges_calls.last().map(Vec::as_slice).unwrap_or(&[])
        }
    }

    impl SelectionObserver for Recorder {
        fn ranges_changed(&mut self, ranges: &[DayRange]) {
            self.ranges_calls.push(ranges.to_vec());
        }

        fn days_changed(&mut self, days: &[NaiveDate]) {
            self.days_calls.push(days.to_vec());
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use chrono::NaiveDate;

    use super::test_support::Recorder;
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn commit_fires_ranges_only_by_default() {
        let mut recorder = Recorder::default();
        let updated = commit_selection(
            &[],
            DayRange::new(d(1), d(3)),
            PickerOptions::default(),
            &mut recorder,
        );
        assert_eq!(updated, vec![DayRange::new(d(1), d(3))]);
        assert_eq!(recorder.ranges_calls.len(), 1);
        assert!(recorder.days_calls.is_empty());
    }

    #[test]
    fn commit_reports_individual_days_when_opted_in() {
        let options = PickerOptions {
            individual_days: true,
            ..PickerOptions::default()
        };
        let mut recorder = Recorder::default();
        commit_selection(&[], DayRange::new(d(1), d(3)), options, &mut recorder);
        assert_eq!(recorder.days_calls, vec![vec![d(1), d(2), d(3)]]);
    }

    #[test]
    fn commit_merge_pass_follows_options() {
        let existing = [DayRange::new(d(1), d(5))];
        let mut recorder = Recorder::default();
        let updated = commit_selection(
            &existing,
            DayRange::new(d(6), d(10)),
            PickerOptions::merging(),
            &mut recorder,
        );
        assert_eq!(updated, vec![DayRange::new(d(1), d(10))]);
        assert_eq!(recorder.last_ranges(), updated.as_slice());
    }
}

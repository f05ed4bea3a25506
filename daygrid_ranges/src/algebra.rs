// Copyright 2025 the Daygrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Set-level operations over `[DayRange]` collections.

use alloc::vec::Vec;

use chrono::NaiveDate;
use smallvec::SmallVec;

use crate::range::DayRange;

/// Whether `day` falls within any of the given ranges.
#[must_use]
pub fn is_day_in_ranges(day: NaiveDate, ranges: &[DayRange]) -> bool {
    ranges.iter().any(|r| r.contains(day))
}

/// Indices of every range the selection touches.
///
/// A range counts as touched when the selection's start or end falls inside
/// it, *or* when the range's own start or end falls inside the selection.
/// The symmetric test catches a selection that fully contains a range (the
/// range's endpoints are found inside the selection) as well as a selection
/// fully contained within one range.
#[must_use]
pub fn find_overlapping_ranges(ranges: &[DayRange], selection: DayRange) -> SmallVec<[usize; 4]> {
    ranges
        .iter()
        .enumerate()
        .filter(|(_, range)| {
            range.contains(selection.start())
                || range.contains(selection.end())
                || selection.contains(range.start())
                || selection.contains(range.end())
        })
        .map(|(index, _)| index)
        .collect()
}

/// Union overlapping or exactly adjacent ranges into contiguous blocks.
///
/// Sorts a copy by start date and sweeps once left to right. Two ranges
/// merge when the next range starts on or before the day after the current
/// range's end, i.e. overlapping or back-to-back; a gap of two or more days
/// stays a gap. The merged end is the later of the two ends, so a range
/// nested inside an earlier, larger one is absorbed. Zero or one input
/// ranges are returned unchanged.
#[must_use]
pub fn merge_overlapping_ranges(ranges: &[DayRange]) -> Vec<DayRange> {
    if ranges.len() <= 1 {
        return ranges.to_vec();
    }

    let mut sorted = ranges.to_vec();
    sorted.sort_by_key(DayRange::start);

    let mut merged = Vec::with_capacity(sorted.len());
    let mut iter = sorted.into_iter();
    // Non-empty after the length check above.
    let Some(mut current) = iter.next() else {
        return merged;
    };

    for next in iter {
        // A range ending on the last representable day absorbs everything.
        let touches = match current.end().succ_opt() {
            Some(limit) => next.start() <= limit,
            None => true,
        };
        if touches {
            current = DayRange::new(current.start(), current.end().max(next.end()));
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);

    merged
}

/// Flatten ranges into one date per covered day, in range order.
///
/// Both endpoints are included. Expansion does not deduplicate: overlapping
/// input produces duplicate days. Range sets that have been through a toggle
/// or merge pass are non-overlapping, so callers on that path get each day
/// once.
#[must_use]
pub fn individual_days(ranges: &[DayRange]) -> Vec<NaiveDate> {
    ranges.iter().flat_map(DayRange::days).collect()
}

/// Apply a completed selection to the range set, toggle-style.
///
/// If the selection touches any existing ranges, every touched range is
/// deleted whole: sweeping over something that exists erases it. A deletion
/// never clips: there is no partial subtraction and no split-range result.
/// If the selection touches nothing, it is inserted as a new range. With
/// `merge` set, the result is passed through [`merge_overlapping_ranges`]
/// before returning.
#[must_use]
pub fn update_ranges_with_selection(
    ranges: &[DayRange],
    selection: DayRange,
    merge: bool,
) -> Vec<DayRange> {
    let overlapping = find_overlapping_ranges(ranges, selection);

    let updated: Vec<DayRange> = if overlapping.is_empty() {
        let mut with_new = ranges.to_vec();
        with_new.push(selection);
        with_new
    } else {
        ranges
            .iter()
            .enumerate()
            .filter(|(index, _)| !overlapping.contains(index))
            .map(|(_, range)| *range)
            .collect()
    };

    if merge {
        merge_overlapping_ranges(&updated)
    } else {
        updated
    }
}

/// Copy of the set without the range at `index`.
///
/// An out-of-bounds index returns the set unchanged.
#[must_use]
pub fn remove_range_by_index(ranges: &[DayRange], index: usize) -> Vec<DayRange> {
    ranges
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, range)| *range)
        .collect()
}

// Copyright 2025 the Daygrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Daygrid Continuity: adjacency and hover geometry for day grids.
//!
//! Given the saved range set and an optional in-progress hover span, this
//! crate decides, per day cell, whether the cell is selected or hovered and
//! whether its left/right edge sits at the boundary of a contiguous block.
//! Renderers use the edge flags to round the outer corners of a block and
//! keep interior cells square, so a multi-day range reads as one continuous
//! shape.
//!
//! The crate computes geometry only. It does not paint, measure, or know
//! about any widget system; callers map [`DayVisual`] onto whatever styling
//! mechanism they have.
//!
//! ## Continuity rules
//!
//! For a day that is part of the hover span, an edge rounds **unless** the
//! neighbor on that side is also hovered, or (in merge mode) the neighbor
//! belongs to a saved range. For a saved-range day that is not hovered, an
//! edge rounds **unless** the neighbor is in the *same* saved range, or (in
//! merge mode) the neighbor is inside the hover span. The two rules are
//! symmetric: in merge mode a hover span that touches an existing range
//! previews as one fused block from both sides; outside merge mode the
//! preview never visually fuses with saved ranges. Two saved ranges that
//! happen to sit back-to-back without merging keep their facing edges
//! rounded, because same-range membership, not mere adjacency, is what
//! removes a boundary.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use daygrid_continuity::{RoundedEdges, day_visual};
//! use daygrid_ranges::DayRange;
//!
//! let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
//! let ranges = [DayRange::new(d(10), d(12))];
//!
//! // Interior day: square on both sides.
//! assert_eq!(day_visual(d(11), &ranges, None, false).edges, RoundedEdges::empty());
//! // Block boundaries round outward.
//! assert_eq!(day_visual(d(10), &ranges, None, false).edges, RoundedEdges::LEFT);
//! assert_eq!(day_visual(d(12), &ranges, None, false).edges, RoundedEdges::RIGHT);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use chrono::NaiveDate;
use daygrid_ranges::{DayRange, is_day_in_ranges};

/// Which side of a day cell a neighbor query looks at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The previous calendar day.
    Left,
    /// The next calendar day.
    Right,
}

bitflags::bitflags! {
    /// Edges of a day cell that should render rounded.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RoundedEdges: u8 {
        /// The leading (earlier-day) edge is a block boundary.
        const LEFT = 0b01;
        /// The trailing (later-day) edge is a block boundary.
        const RIGHT = 0b10;
    }
}

/// Per-day visual state for one render pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DayVisual {
    /// Edges at a contiguous-block boundary.
    pub edges: RoundedEdges,
    /// Day belongs to a saved range.
    pub in_range: bool,
    /// Day belongs to the in-progress hover span.
    pub hovered: bool,
}

impl DayVisual {
    /// Day is neither saved nor hovered; callers typically render a plain
    /// circle for these.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        !self.in_range && !self.hovered
    }
}

/// The calendar day immediately before or after `day`.
///
/// Month and year boundaries roll over per the calendar. `None` at the edge
/// of the representable date span.
#[must_use]
pub fn adjacent_day(day: NaiveDate, direction: Direction) -> Option<NaiveDate> {
    match direction {
        Direction::Left => day.pred_opt(),
        Direction::Right => day.succ_opt(),
    }
}

/// Whether one single range contains both days.
///
/// Distinguishes two selected neighbors that belong to different, non-merged
/// ranges from two days inside one contiguous range.
#[must_use]
pub fn days_in_same_range(d1: NaiveDate, d2: NaiveDate, ranges: &[DayRange]) -> bool {
    ranges.iter().any(|r| r.contains(d1) && r.contains(d2))
}

/// Whether the neighboring day in `direction` belongs to any saved range.
#[must_use]
pub fn has_adjacent_selected_day(
    day: NaiveDate,
    direction: Direction,
    ranges: &[DayRange],
) -> bool {
    match adjacent_day(day, direction) {
        Some(neighbor) => is_day_in_ranges(neighbor, ranges),
        None => false,
    }
}

/// Whether `day` falls inside the active hover span.
///
/// `hover` is `None` when no drag is in progress, which is always a miss.
#[must_use]
pub fn is_day_in_hover_span(day: NaiveDate, hover: Option<DayRange>) -> bool {
    hover.is_some_and(|span| span.contains(day))
}

/// Compute the visual continuity state of one day cell.
///
/// `hover` is the normalized span of the in-progress drag, or `None` when
/// idle. `merge_mode` mirrors the range set's merge configuration: when on,
/// the hover preview fuses with adjacent saved ranges (and vice versa) ahead
/// of the merge the commit will perform.
#[must_use]
pub fn day_visual(
    day: NaiveDate,
    ranges: &[DayRange],
    hover: Option<DayRange>,
    merge_mode: bool,
) -> DayVisual {
    let in_range = is_day_in_ranges(day, ranges);
    let hovered = is_day_in_hover_span(day, hover);

    if !in_range && !hovered {
        return DayVisual {
            edges: RoundedEdges::empty(),
            in_range,
            hovered,
        };
    }

    let mut edges = RoundedEdges::empty();
    if side_rounds(day, Direction::Left, ranges, hover, merge_mode, in_range, hovered) {
        edges |= RoundedEdges::LEFT;
    }
    if side_rounds(day, Direction::Right, ranges, hover, merge_mode, in_range, hovered) {
        edges |= RoundedEdges::RIGHT;
    }

    DayVisual {
        edges,
        in_range,
        hovered,
    }
}

/// One side of the continuity rule; see the crate docs for the contract.
fn side_rounds(
    day: NaiveDate,
    direction: Direction,
    ranges: &[DayRange],
    hover: Option<DayRange>,
    merge_mode: bool,
    in_range: bool,
    hovered: bool,
) -> bool {
    let neighbor = adjacent_day(day, direction);
    let neighbor_selected = neighbor.is_some_and(|n| is_day_in_ranges(n, ranges));
    let neighbor_hovered = neighbor.is_some_and(|n| is_day_in_hover_span(n, hover));

    // A saved-range day sitting next to (but outside) the hover span.
    let hover_abuts = in_range && !hovered && neighbor_hovered;
    // Same-range membership only matters off the hover path.
    let same_range =
        !hovered && neighbor_selected && neighbor.is_some_and(|n| days_in_same_range(day, n, ranges));

    if hovered {
        !neighbor_hovered && !(merge_mode && neighbor_selected)
    } else {
        in_range && !same_range && !(merge_mode && hover_abuts)
    }
}

/// Whether `day` is selected by the composite picker selection: the picker's
/// current (possibly half-filled, possibly inverted) pair, or the hover span.
///
/// Used by two-field picker surfaces where an in-progress field pair
/// highlights alongside drag state. A half-filled pair selects nothing.
#[must_use]
pub fn is_day_in_composite(
    day: NaiveDate,
    pair: (Option<NaiveDate>, Option<NaiveDate>),
    hover: Option<DayRange>,
) -> bool {
    if let (Some(a), Some(b)) = pair {
        if DayRange::new(a, b).contains(day) {
            return true;
        }
    }
    is_day_in_hover_span(day, hover)
}

/// Whether the neighbor in `direction` is selected by saved ranges or by the
/// composite picker selection.
#[must_use]
pub fn has_adjacent_composite_day(
    day: NaiveDate,
    direction: Direction,
    ranges: &[DayRange],
    pair: (Option<NaiveDate>, Option<NaiveDate>),
    hover: Option<DayRange>,
) -> bool {
    match adjacent_day(day, direction) {
        Some(neighbor) => {
            is_day_in_ranges(neighbor, ranges) || is_day_in_composite(neighbor, pair, hover)
        }
        None => false,
    }
}

/// Edge rounding for two-field picker calendars.
///
/// Saved ranges, the picker pair, and the hover span are treated as one
/// selection surface: an edge rounds exactly when the neighbor on that side
/// is not selected by any of them. There is no merge-mode asymmetry here:
/// the pair preview always reads as continuous with whatever it touches.
#[must_use]
pub fn day_edges_composite(
    day: NaiveDate,
    ranges: &[DayRange],
    pair: (Option<NaiveDate>, Option<NaiveDate>),
    hover: Option<DayRange>,
) -> RoundedEdges {
    let selected = is_day_in_ranges(day, ranges) || is_day_in_composite(day, pair, hover);
    if !selected {
        return RoundedEdges::empty();
    }

    let mut edges = RoundedEdges::empty();
    if !has_adjacent_composite_day(day, Direction::Left, ranges, pair, hover) {
        edges |= RoundedEdges::LEFT;
    }
    if !has_adjacent_composite_day(day, Direction::Right, ranges, pair, hover) {
        edges |= RoundedEdges::RIGHT;
    }
    edges
}

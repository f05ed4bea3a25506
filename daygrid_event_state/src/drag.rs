// Copyright 2025 the Daygrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-select gesture tracking over calendar days.
//!
//! This module tracks a single press-drag-release gesture across a day grid
//! and reports the selected span when the gesture ends. It converts a stream
//! of already-resolved days (pointer position → day is the caller's concern)
//! into at most one committed span per gesture.
//!
//! ## Lifecycle
//!
//! Idle → pointer down on a valid day → dragging → pointer up or cancel →
//! Idle. Up and cancel behave identically: both consume the gesture and
//! return its span. There are no other states.
//!
//! ## Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use daygrid_event_state::drag::DragState;
//!
//! let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
//! let mut drag = DragState::new();
//!
//! drag.on_down(d(15));
//! assert!(drag.is_dragging());
//!
//! // Moving to a different day advances the head…
//! assert!(drag.on_move(d(16)));
//! // …while re-reporting the same day is a no-op, so hosts can skip a
//! // re-render for pointer jitter within one cell.
//! assert!(!drag.on_move(d(16)));
//!
//! let span = drag.on_up().unwrap();
//! assert_eq!((span.start(), span.end()), (d(15), d(16)));
//! assert!(!drag.is_dragging());
//! ```
//!
//! A release without a preceding press yields nothing:
//!
//! ```
//! use daygrid_event_state::drag::DragState;
//!
//! let mut drag = DragState::new();
//! assert!(drag.on_up().is_none());
//! ```
//!
//! ## Concurrency
//!
//! One gesture at a time: the state is a single slot, and events are expected
//! in down → moves → up/cancel order for one active pointer. A second press
//! while dragging restarts the gesture at the new day; multi-touch is not
//! supported.

use chrono::NaiveDate;
use daygrid_ranges::DayRange;

/// The endpoints of an in-progress gesture.
///
/// `anchor` is the pressed day and never moves; `head` follows the pointer.
/// The head may be on either side of the anchor; [`ActiveDrag::span`]
/// normalizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ActiveDrag {
    anchor: NaiveDate,
    head: NaiveDate,
}

impl ActiveDrag {
    /// The day where the gesture started.
    #[must_use]
    pub const fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// The day the pointer was last resolved to.
    #[must_use]
    pub const fn head(&self) -> NaiveDate {
        self.head
    }

    /// The normalized span between anchor and head, inclusive.
    #[must_use]
    pub fn span(&self) -> DayRange {
        DayRange::new(self.anchor, self.head)
    }
}

/// Single-gesture drag state machine.
///
/// Owns nothing beyond the active gesture slot. Hosts keep one of these per
/// selection surface, mutate it from pointer events, and read
/// [`DragState::hover_span`] during render passes.
#[derive(Clone, Debug, Default)]
pub struct DragState {
    active: Option<ActiveDrag>,
}

impl DragState {
    /// Create an idle drag state.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Record a pointer press on `day` and begin a gesture.
    ///
    /// Anchor and head both start at the pressed day. A press while a
    /// gesture is already active restarts tracking at the new day; the
    /// previous gesture is discarded without committing.
    pub fn on_down(&mut self, day: NaiveDate) {
        self.active = Some(ActiveDrag {
            anchor: day,
            head: day,
        });
    }

    /// Advance the gesture head to `day`.
    ///
    /// Ignored when idle. Returns `true` only when the head actually moved
    /// to a different calendar day, the signal hosts use to recompute the
    /// hover preview. Repeated moves within the current head day return
    /// `false` and change nothing.
    pub fn on_move(&mut self, day: NaiveDate) -> bool {
        match &mut self.active {
            Some(drag) if drag.head != day => {
                drag.head = day;
                true
            }
            _ => false,
        }
    }

    /// End the gesture and return its normalized span.
    ///
    /// `None` when no gesture is active, which covers a release delivered
    /// without a preceding valid press. The state is reset either way.
    pub fn on_up(&mut self) -> Option<DayRange> {
        self.active.take().map(|drag| drag.span())
    }

    /// Cancel behaves exactly like [`DragState::on_up`]: the gesture's span
    /// is still reported so hosts can apply their commit policy uniformly.
    pub fn cancel(&mut self) -> Option<DayRange> {
        self.on_up()
    }

    /// Whether a gesture is currently active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// The active gesture, if any.
    #[must_use]
    pub const fn active(&self) -> Option<&ActiveDrag> {
        self.active.as_ref()
    }

    /// The normalized span to highlight as the hover preview, if dragging.
    #[must_use]
    pub fn hover_span(&self) -> Option<DayRange> {
        self.active.as_ref().map(ActiveDrag::span)
    }
}

// Copyright 2025 the Daygrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Daygrid Hit: pointer-to-date resolution for day grids.
//!
//! During a drag the pointer wanders across day cells, and the gesture layer
//! needs to know which calendar day is currently under it. This crate owns
//! that mapping and nothing else:
//!
//! - [`DayButtons`]: a registry from calendar day to an opaque UI-element
//!   handle, populated by the rendering layer as day cells mount and
//!   unmount. The core only reads it.
//! - [`ElementAt`]: the capability the rendering layer supplies: "what
//!   element occupies this screen point" plus parent lookup, so a hit on a
//!   label nested inside a day button still resolves to the button.
//! - [`find_day_at_point`]: the query that combines the two.
//!
//! Every failure mode (no element under the point, an element no button
//! claims, a handle that went stale) resolves to `None`, which gesture
//! layers treat as a no-op move.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use kurbo::{Point, Rect};
//! use daygrid_hit::{DayButtons, ElementAt, find_day_at_point};
//!
//! // A toy surface: two day cells side by side, no nesting.
//! struct Cells(Vec<(Rect, u32)>);
//!
//! impl ElementAt for Cells {
//!     type Element = u32;
//!     fn element_at(&self, point: Point) -> Option<u32> {
//!         self.0.iter().find(|(r, _)| r.contains(point)).map(|(_, id)| *id)
//!     }
//!     fn parent(&self, _element: &u32) -> Option<u32> {
//!         None
//!     }
//! }
//!
//! let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
//! let cells = Cells(vec![
//!     (Rect::new(0.0, 0.0, 36.0, 36.0), 1),
//!     (Rect::new(40.0, 0.0, 76.0, 36.0), 2),
//! ]);
//!
//! let mut buttons = DayButtons::new();
//! buttons.insert(d(15), 1_u32);
//! buttons.insert(d(16), 2_u32);
//!
//! assert_eq!(find_day_at_point(Point::new(50.0, 10.0), &buttons, &cells), Some(d(16)));
//! // The gap between cells resolves to nothing.
//! assert_eq!(find_day_at_point(Point::new(38.0, 10.0), &buttons, &cells), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use chrono::NaiveDate;
use hashbrown::HashMap;
use kurbo::Point;

/// Upper bound on the ancestor walk in [`find_day_at_point`].
///
/// Guards against malformed parent chains (cycles, or a "parent" relation
/// that never terminates). Real day-grid DOMs are a handful of levels deep.
const ANCESTOR_WALK_LIMIT: usize = 64;

/// The capability a rendering layer supplies for point resolution.
///
/// Implementations wrap whatever the host UI stack offers: an
/// element-from-point query over a retained tree, a scene graph, or a test
/// fixture. Handles are opaque to this crate; only equality and parent
/// lookup are needed.
pub trait ElementAt {
    /// Opaque handle to a UI element.
    type Element: PartialEq;

    /// The topmost interactive element at a screen point, if any.
    fn element_at(&self, point: Point) -> Option<Self::Element>;

    /// The parent of `element`, or `None` at the root.
    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;
}

/// Registry mapping calendar days to the UI elements that render them.
///
/// Owned conceptually by the rendering layer: it inserts an entry when a day
/// cell mounts and removes (or clears) as the visible month changes. The
/// resolution side only scans it.
#[derive(Clone, Debug, Default)]
pub struct DayButtons<E> {
    buttons: HashMap<NaiveDate, E>,
}

impl<E> DayButtons<E> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buttons: HashMap::new(),
        }
    }

    /// Register the element handle for `day`, returning any previous handle.
    pub fn insert(&mut self, day: NaiveDate, element: E) -> Option<E> {
        self.buttons.insert(day, element)
    }

    /// Register a handle under a canonical `YYYY-MM-DD` day key.
    ///
    /// Rendering layers that only carry string keys use this entry point.
    /// An unparseable key is skipped and `false` is returned; nothing is
    /// stored.
    pub fn insert_key(&mut self, key: &str, element: E) -> bool {
        match NaiveDate::parse_from_str(key, "%Y-%m-%d") {
            Ok(day) => {
                self.buttons.insert(day, element);
                true
            }
            Err(_) => false,
        }
    }

    /// Remove the entry for `day`, returning its handle.
    pub fn remove(&mut self, day: NaiveDate) -> Option<E> {
        self.buttons.remove(&day)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.buttons.clear();
    }

    /// The registered handle for `day`, if any.
    #[must_use]
    pub fn get(&self, day: NaiveDate) -> Option<&E> {
        self.buttons.get(&day)
    }

    /// Number of registered day cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Iterate over `(day, handle)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &E)> {
        self.buttons.iter().map(|(day, element)| (*day, element))
    }
}

impl<E: PartialEq> DayButtons<E> {
    /// The day whose registered handle is `element`, via linear scan.
    #[must_use]
    pub fn day_of(&self, element: &E) -> Option<NaiveDate> {
        self.buttons
            .iter()
            .find(|(_, candidate)| *candidate == element)
            .map(|(day, _)| *day)
    }
}

/// Resolve the calendar day under a screen point.
///
/// Asks `source` for the element at `point`, then walks that element's
/// ancestor chain looking for a registered day button, so a hit on content
/// nested inside a button still resolves to the button's day. Returns `None`
/// when nothing is under the point, or when neither the element nor any
/// ancestor is registered.
#[must_use]
pub fn find_day_at_point<S: ElementAt>(
    point: Point,
    buttons: &DayButtons<S::Element>,
    source: &S,
) -> Option<NaiveDate> {
    let mut node = source.element_at(point)?;
    for _ in 0..ANCESTOR_WALK_LIMIT {
        if let Some(day) = buttons.day_of(&node) {
            return Some(day);
        }
        node = source.parent(&node)?;
    }
    None
}

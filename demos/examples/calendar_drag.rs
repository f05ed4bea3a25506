// Copyright 2025 the Daygrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-select session over a simulated month grid.
//!
//! This example shows the full pipeline working together:
//! - `daygrid_hit` to resolve pointer positions to calendar days,
//! - `daygrid_event_state` (via the picker) to track the gesture,
//! - `daygrid_ranges` to toggle the committed set,
//! - `daygrid_continuity` to derive the per-day visuals.
//!
//! Run:
//! - `cargo run -p daygrid_demos --example calendar_drag`

use chrono::NaiveDate;
use daygrid_hit::{DayButtons, ElementAt, find_day_at_point};
use daygrid_picker::{MultiRangePicker, PickerOptions, SelectionObserver};
use daygrid_ranges::DayRange;
use kurbo::{Point, Rect};

const CELL: f64 = 36.0;
const GAP: f64 = 4.0;

/// A seven-column month grid of day cells, ids counted row-major.
struct MonthGrid {
    cells: Vec<(Rect, u32)>,
}

impl MonthGrid {
    fn new(days: u32) -> Self {
        let cells = (0..days)
            .map(|i| {
                let col = f64::from(i % 7);
                let row = f64::from(i / 7);
                let x = col * (CELL + GAP);
                let y = row * (CELL + GAP);
                (Rect::new(x, y, x + CELL, y + CELL), i + 1)
            })
            .collect();
        Self { cells }
    }

    /// Center of a day cell, for scripting pointer positions.
    fn center_of(&self, id: u32) -> Point {
        let (rect, _) = self.cells[(id - 1) as usize];
        rect.center()
    }
}

impl ElementAt for MonthGrid {
    type Element = u32;

    fn element_at(&self, point: Point) -> Option<u32> {
        self.cells
            .iter()
            .find(|(rect, _)| rect.contains(point))
            .map(|(_, id)| *id)
    }

    fn parent(&self, _element: &u32) -> Option<u32> {
        None
    }
}

struct PrintObserver;

impl SelectionObserver for PrintObserver {
    fn ranges_changed(&mut self, ranges: &[DayRange]) {
        if ranges.is_empty() {
            println!("  -> selection cleared");
        }
        for range in ranges {
            println!("  -> {} .. {}", range.start(), range.end());
        }
    }
}

/// Render the month as one strip: `(` and `)` mark rounded block edges.
fn strip(picker: &MultiRangePicker, days: u32) -> String {
    use daygrid_continuity::RoundedEdges;

    let mut out = String::new();
    for day in 1..=days {
        let date = NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
        let v = picker.day_visual(date);
        if v.is_plain() {
            out.push_str(" . ");
            continue;
        }
        out.push(if v.edges.contains(RoundedEdges::LEFT) { '(' } else { '=' });
        out.push(if v.hovered { '~' } else { '#' });
        out.push(if v.edges.contains(RoundedEdges::RIGHT) { ')' } else { '=' });
    }
    out
}

fn main() {
    let grid = MonthGrid::new(31);
    let mut buttons = DayButtons::new();
    for day in 1..=31 {
        let date = NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
        buttons.insert(date, day);
    }

    let mut picker = MultiRangePicker::new(PickerOptions::merging());
    let mut observer = PrintObserver;

    // Gesture one: press on the 6th, sweep to the 10th, release.
    println!("drag 6 -> 10:");
    let mut pointer = grid.center_of(6);
    if let Some(day) = find_day_at_point(pointer, &buttons, &grid) {
        picker.pointer_down(day);
    }
    for target in 7..=10 {
        pointer = grid.center_of(target);
        if let Some(day) = find_day_at_point(pointer, &buttons, &grid) {
            picker.pointer_move(day);
        }
    }
    println!("  preview: {}", strip(&picker, 31));
    picker.pointer_up(&mut observer);

    // Gesture two: back-to-back with the first; merge mode fuses them.
    println!("drag 11 -> 13 (merges):");
    if let Some(day) = find_day_at_point(grid.center_of(11), &buttons, &grid) {
        picker.pointer_down(day);
    }
    for target in [12, 13] {
        if let Some(day) = find_day_at_point(grid.center_of(target), &buttons, &grid) {
            picker.pointer_move(day);
        }
    }
    picker.pointer_up(&mut observer);

    // Gesture three: sweep across the block to erase it whole.
    println!("drag 8 -> 12 (erases):");
    if let Some(day) = find_day_at_point(grid.center_of(8), &buttons, &grid) {
        picker.pointer_down(day);
    }
    if let Some(day) = find_day_at_point(grid.center_of(12), &buttons, &grid) {
        picker.pointer_move(day);
    }
    picker.pointer_up(&mut observer);

    println!("final:   {}", strip(&picker, 31));
}

// Copyright 2025 the Daygrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pro picker session: two-field pair commits and chip management.
//!
//! The Pro surface feeds ranges into the same toggle algebra from two
//! directions, a paired date-range field and drag gestures, and removes
//! them from a third, the chip row.
//!
//! Run:
//! - `cargo run -p daygrid_demos --example pro_chips`

use chrono::NaiveDate;
use daygrid_picker::{PickerOptions, ProRangePicker, SelectionObserver};
use daygrid_ranges::DayRange;

struct PrintObserver;

impl SelectionObserver for PrintObserver {
    fn ranges_changed(&mut self, ranges: &[DayRange]) {
        println!("  ranges now: {}", ranges.len());
    }

    fn days_changed(&mut self, days: &[NaiveDate]) {
        println!("  covered days: {}", days.len());
    }
}

fn main() {
    let d = |m: u32, day: u32| NaiveDate::from_ymd_opt(2025, m, day).unwrap();

    let options = PickerOptions {
        individual_days: true,
        ..PickerOptions::default()
    };
    let mut picker = ProRangePicker::new(options);
    let mut observer = PrintObserver;

    // Two ranges arrive from the paired field.
    println!("pair commit 2025-01-10 .. 2025-01-14:");
    picker.pair_changed((Some(d(1, 10)), Some(d(1, 14))), &mut observer);
    println!("pair commit 2025-02-03 .. 2025-02-05 (entered inverted):");
    picker.pair_changed((Some(d(2, 5)), Some(d(2, 3))), &mut observer);

    println!("chips:");
    for (index, label) in picker.chips().enumerate() {
        println!("  [{index}] {label}");
    }

    // A drag across the January range erases it whole.
    println!("drag 2025-01-12 .. 2025-01-20:");
    picker.pointer_down(d(1, 12));
    picker.pointer_move(d(1, 20));
    picker.pointer_up(&mut observer);

    // The February chip goes through its delete affordance.
    println!("delete chip 0:");
    picker.remove_range(0, &mut observer);

    println!("chips left: {}", picker.chips().count());
}

// Copyright 2025 the Daygrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The outbound callback seam between picker cores and their host.

use chrono::NaiveDate;
use daygrid_ranges::DayRange;

/// Receives the updated selection after every committed action.
///
/// Callbacks fire synchronously, at most once per committed gesture, pair
/// commit, or chip removal, and always carry the full updated state rather
/// than a delta. Hosts typically store the ranges and schedule a re-render.
pub trait SelectionObserver {
    /// The range set after a commit.
    fn ranges_changed(&mut self, ranges: &[DayRange]);

    /// The per-day expansion of the committed set, in range order.
    ///
    /// Only called when the host opted in via
    /// [`PickerOptions::individual_days`](crate::PickerOptions::individual_days);
    /// the default implementation ignores it.
    fn days_changed(&mut self, days: &[NaiveDate]) {
        let _ = days;
    }
}

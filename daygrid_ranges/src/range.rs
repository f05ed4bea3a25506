// Copyright 2025 the Daygrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The inclusive day-range value type.

use chrono::NaiveDate;

/// An inclusive range of calendar days.
///
/// A `DayRange` is normalized at construction: [`DayRange::new`] orders its
/// endpoints, so `start <= end` always holds and an inverted range is
/// unrepresentable. Comparisons are at day granularity by construction;
/// there is no time-of-day component to truncate.
///
/// The same type doubles as the ephemeral *selection span* of an in-progress
/// gesture: either endpoint of a drag may be chronologically first, and
/// normalization happens here, once, rather than at every comparison site.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DayRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DayRange {
    /// Create a range from two endpoints in either order.
    #[must_use]
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Create a single-day range.
    #[must_use]
    pub const fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// The first day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// The last day of the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `day` falls within the range, inclusive at both boundaries.
    #[inline]
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Number of days covered, counting both endpoints.
    #[must_use]
    pub fn num_days(&self) -> u64 {
        // start <= end, so the signed difference is non-negative.
        (self.end - self.start).num_days().unsigned_abs() + 1
    }

    /// Iterate over every covered day in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).unwrap()
    }

    #[test]
    fn new_normalizes_endpoint_order() {
        let r = DayRange::new(d(1, 9), d(1, 2));
        assert_eq!(r.start(), d(1, 2));
        assert_eq!(r.end(), d(1, 9));
        assert_eq!(r, DayRange::new(d(1, 2), d(1, 9)));
    }

    #[test]
    fn contains_is_inclusive_at_both_boundaries() {
        let r = DayRange::new(d(3, 10), d(3, 14));
        assert!(r.contains(r.start()));
        assert!(r.contains(r.end()));
        assert!(r.contains(d(3, 12)));
        assert!(!r.contains(d(3, 9)));
        assert!(!r.contains(d(3, 15)));
    }

    #[test]
    fn single_day_range() {
        let r = DayRange::single(d(6, 1));
        assert_eq!(r.start(), r.end());
        assert_eq!(r.num_days(), 1);
        assert!(r.contains(d(6, 1)));
        assert!(!r.contains(d(6, 2)));
    }

    #[test]
    fn days_crosses_month_boundary() {
        let r = DayRange::new(d(1, 30), d(2, 2));
        let days: Vec<_> = r.days().collect();
        assert_eq!(days, vec![d(1, 30), d(1, 31), d(2, 1), d(2, 2)]);
        assert_eq!(r.num_days(), 4);
    }
}

//! Weekly running-days masks.
//!
//! The trains API describes which weekdays a train operates on as a
//! 7-character string of `'0'`/`'1'`, Monday first. Calendar code (and
//! most platforms) number weekdays Sunday first, so every lookup goes
//! through [`mask_index_for_weekday`].

use chrono::{Datelike, NaiveDate};

/// Number of days in a running-days mask.
pub const DAYS_IN_WEEK: usize = 7;

/// Short weekday labels in mask order.
pub const DAY_LABELS: [&str; DAYS_IN_WEEK] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Convert a Sunday-based weekday (Sunday = 0 .. Saturday = 6) to a
/// Monday-based mask index (Monday = 0 .. Sunday = 6).
///
/// Values above 6 are taken modulo 7.
///
/// ```
/// use train_search::domain::mask_index_for_weekday;
///
/// assert_eq!(mask_index_for_weekday(0), 6); // Sunday
/// assert_eq!(mask_index_for_weekday(1), 0); // Monday
/// assert_eq!(mask_index_for_weekday(6), 5); // Saturday
/// ```
pub fn mask_index_for_weekday(sunday_based: u32) -> usize {
    let weekday = (sunday_based % 7) as usize;
    if weekday == 0 { 6 } else { weekday - 1 }
}

/// Mask index for a calendar date.
pub fn mask_index(date: NaiveDate) -> usize {
    mask_index_for_weekday(date.weekday().num_days_from_sunday())
}

/// A parsed running-days mask.
///
/// Construction never fails: anything that is not exactly seven
/// `'0'`/`'1'` characters becomes [`RunningDays::NEVER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RunningDays([bool; DAYS_IN_WEEK]);

impl RunningDays {
    /// A train that never runs.
    pub const NEVER: RunningDays = RunningDays([false; DAYS_IN_WEEK]);

    /// A train that runs every day.
    pub const DAILY: RunningDays = RunningDays([true; DAYS_IN_WEEK]);

    /// Parse a mask such as `"1010100"`.
    ///
    /// ```
    /// use train_search::domain::RunningDays;
    ///
    /// let days = RunningDays::from_mask(Some("1010100"));
    /// assert!(days.runs_on(0));
    /// assert!(!days.runs_on(1));
    ///
    /// assert_eq!(RunningDays::from_mask(None), RunningDays::NEVER);
    /// assert_eq!(RunningDays::from_mask(Some("10101")), RunningDays::NEVER);
    /// ```
    pub fn from_mask(mask: Option<&str>) -> Self {
        let Some(mask) = mask else {
            return Self::NEVER;
        };

        let bytes = mask.as_bytes();
        if bytes.len() != DAYS_IN_WEEK {
            return Self::NEVER;
        }

        let mut days = [false; DAYS_IN_WEEK];
        for (slot, &b) in days.iter_mut().zip(bytes) {
            match b {
                b'1' => *slot = true,
                b'0' => {}
                _ => return Self::NEVER,
            }
        }
        Self(days)
    }

    /// Whether the train runs on the given mask index.
    ///
    /// Out-of-range indexes report `false`.
    pub fn runs_on(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Whether the train runs on the given calendar date.
    pub fn runs_on_date(&self, date: NaiveDate) -> bool {
        self.runs_on(mask_index(date))
    }

    /// Per-day flags, Monday first.
    pub fn days(&self) -> [bool; DAYS_IN_WEEK] {
        self.0
    }

    /// Whether the train never runs.
    pub fn is_never(&self) -> bool {
        self.0.iter().all(|d| !d)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every weekday maps into the mask
        #[test]
        fn index_in_range(weekday in 0u32..7) {
            prop_assert!(mask_index_for_weekday(weekday) < DAYS_IN_WEEK);
        }

        /// The conversion agrees with chrono's Monday-based numbering
        #[test]
        fn agrees_with_chrono(days_since_epoch in 0i64..40_000) {
            let d = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
                + chrono::Duration::days(days_since_epoch);
            prop_assert_eq!(mask_index(d), d.weekday().num_days_from_monday() as usize);
        }

        /// Absent masks never run on any date
        #[test]
        fn absent_mask_never_runs(days_since_epoch in 0i64..40_000) {
            let d = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
                + chrono::Duration::days(days_since_epoch);
            prop_assert!(!RunningDays::from_mask(None).runs_on_date(d));
        }

        /// Well-formed masks parse slot by slot
        #[test]
        fn well_formed_parses(mask in "[01]{7}") {
            let days = RunningDays::from_mask(Some(&mask));
            for (i, c) in mask.chars().enumerate() {
                prop_assert_eq!(days.runs_on(i), c == '1');
            }
        }
    }
}

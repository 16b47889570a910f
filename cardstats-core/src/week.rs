//! Week bucketing: map any timestamp to its Sunday-to-Saturday calendar week.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a calendar week: the Sunday that starts it.
///
/// Ordering follows the calendar, so sorting keys sorts weeks chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekKey(NaiveDate);

impl WeekKey {
    /// Week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let back = u64::from(date.weekday().num_days_from_sunday());
        // Only fails at NaiveDate::MIN, where there is no earlier Sunday to find.
        WeekKey(date.checked_sub_days(Days::new(back)).unwrap_or(date))
    }

    pub fn start(&self) -> NaiveDate {
        self.0
    }

    /// The Saturday closing this week.
    pub fn last_day(&self) -> NaiveDate {
        self.0.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX)
    }

    /// Sunday after this week, clamped at `NaiveDate::MAX`.
    pub fn end_exclusive(&self) -> NaiveDate {
        self.0.checked_add_days(Days::new(7)).unwrap_or(NaiveDate::MAX)
    }

    /// Human label, e.g. `Sun Jan 01 2023 to Sat Jan 07 2023`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.0.format("%a %b %d %Y"),
            self.last_day().format("%a %b %d %Y")
        )
    }
}

/// Week details for one timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub key: WeekKey,
    /// Sunday, local midnight
    pub start: NaiveDateTime,
    /// Following Sunday, local midnight
    pub end_exclusive: NaiveDateTime,
    pub label: String,
}

/// Bucket a timestamp into its week. `date` is taken by value and left untouched.
pub fn week_of(date: NaiveDateTime) -> Week {
    let key = WeekKey::containing(date.date());
    Week {
        key,
        start: key.start().and_time(NaiveTime::MIN),
        end_exclusive: key.end_exclusive().and_time(NaiveTime::MIN),
        label: key.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 15, 0)
            .unwrap()
    }

    #[test]
    fn test_week_starts_on_sunday_midnight() {
        // 2023-01-04 is a Wednesday
        let week = week_of(at(2023, 1, 4, 18));
        let sunday = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        assert_eq!(week.start, sunday.and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(week.end_exclusive, week.start + Duration::days(7));
        assert_eq!(week.label, "Sun Jan 01 2023 to Sat Jan 07 2023");
    }

    #[test]
    fn test_sunday_is_its_own_week_start() {
        let key = WeekKey::containing(NaiveDate::from_ymd_opt(2023, 1, 8).unwrap());
        assert_eq!(key.start(), NaiveDate::from_ymd_opt(2023, 1, 8).unwrap());
    }

    #[test]
    fn test_same_week_for_six_days_then_new_week() {
        // Sunday 2023-03-05 through Saturday 2023-03-11
        let d = at(2023, 3, 5, 9);
        let base = week_of(d).label;
        for offset in 1..=6 {
            assert_eq!(week_of(d + Duration::days(offset)).label, base);
        }
        assert_ne!(week_of(d + Duration::days(7)).label, base);
    }

    #[test]
    fn test_week_crosses_year_boundary() {
        let week = week_of(at(2024, 1, 2, 8));
        assert_eq!(week.label, "Sun Dec 31 2023 to Sat Jan 06 2024");
    }

    #[test]
    fn test_idempotent_and_ordered() {
        let key = WeekKey::containing(NaiveDate::from_ymd_opt(2023, 5, 17).unwrap());
        assert_eq!(WeekKey::containing(key.start()), key);

        let later = WeekKey::containing(NaiveDate::from_ymd_opt(2023, 5, 25).unwrap());
        assert!(key < later);
    }

    #[test]
    fn test_last_week_of_calendar_clamps() {
        let key = WeekKey::containing(NaiveDate::MAX);
        assert!(key.last_day() <= NaiveDate::MAX);
        assert_eq!(key.end_exclusive(), NaiveDate::MAX);
    }

    #[test]
    fn test_input_is_not_modified() {
        let date = at(2023, 1, 4, 18);
        let _ = week_of(date);
        assert_eq!(date, at(2023, 1, 4, 18));
    }
}

//! Reminder window calculation.
//!
//! A document gets a reminder when its expiry date lands exactly on one of
//! four boundaries ahead of today. The store query compares with
//! set-membership equality, so these must be exact calendar dates, not
//! ranges.

use chrono::{Days, NaiveDate};

/// Fixed lead times, in days, at which a reminder is due.
pub const REMINDER_OFFSETS_DAYS: [u64; 4] = [120, 30, 7, 3];

/// The four exact calendar dates checked by one dispatch run.
///
/// Ephemeral: computed fresh per invocation, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderWindow {
    /// today + 120 days
    pub four_months: NaiveDate,
    /// today + 30 days
    pub one_month: NaiveDate,
    /// today + 7 days
    pub one_week: NaiveDate,
    /// today + 3 days
    pub three_days: NaiveDate,
}

impl ReminderWindow {
    /// Derive the window from the given calendar day.
    ///
    /// Pure calendar arithmetic; no time-of-day component can drift the
    /// result across a day boundary.
    pub fn compute(today: NaiveDate) -> Self {
        Self {
            four_months: today + Days::new(120),
            one_month: today + Days::new(30),
            one_week: today + Days::new(7),
            three_days: today + Days::new(3),
        }
    }

    /// The four dates, farthest boundary first.
    pub fn dates(&self) -> [NaiveDate; 4] {
        [
            self.four_months,
            self.one_month,
            self.one_week,
            self.three_days,
        ]
    }

    /// ISO `YYYY-MM-DD` renderings for the store's equality comparison.
    pub fn iso_dates(&self) -> [String; 4] {
        self.dates().map(|d| d.format("%Y-%m-%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_offsets() {
        let window = ReminderWindow::compute(date(2025, 1, 15));
        assert_eq!(window.three_days, date(2025, 1, 18));
        assert_eq!(window.one_week, date(2025, 1, 22));
        assert_eq!(window.one_month, date(2025, 2, 14));
        assert_eq!(window.four_months, date(2025, 5, 15));
    }

    #[test]
    fn test_window_crosses_year_boundary() {
        let window = ReminderWindow::compute(date(2024, 12, 30));
        assert_eq!(window.three_days, date(2025, 1, 2));
        assert_eq!(window.one_week, date(2025, 1, 6));
        assert_eq!(window.one_month, date(2025, 1, 29));
        assert_eq!(window.four_months, date(2025, 4, 29));
    }

    #[test]
    fn test_window_handles_leap_day() {
        let window = ReminderWindow::compute(date(2024, 2, 26));
        assert_eq!(window.three_days, date(2024, 2, 29));
        // 2024-02-26 + 7 days passes over the leap day
        assert_eq!(window.one_week, date(2024, 3, 4));
    }

    #[test]
    fn test_window_offsets_hold_for_arbitrary_dates() {
        for today in [
            date(2023, 1, 1),
            date(2024, 2, 29),
            date(2025, 6, 17),
            date(2025, 12, 31),
            date(2030, 7, 4),
        ] {
            let window = ReminderWindow::compute(today);
            let [d120, d30, d7, d3] = window.dates();
            assert_eq!((d120 - today).num_days(), 120);
            assert_eq!((d30 - today).num_days(), 30);
            assert_eq!((d7 - today).num_days(), 7);
            assert_eq!((d3 - today).num_days(), 3);
        }
    }

    #[test]
    fn test_iso_dates_format() {
        let window = ReminderWindow::compute(date(2025, 1, 5));
        assert_eq!(
            window.iso_dates(),
            [
                "2025-05-05".to_string(),
                "2025-02-04".to_string(),
                "2025-01-12".to_string(),
                "2025-01-08".to_string(),
            ]
        );
    }
}

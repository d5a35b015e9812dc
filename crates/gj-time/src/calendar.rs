//! `Calendar` trait and the weekend-only calendar.
//!
//! A calendar knows which dates are business days and can adjust dates
//! according to a [`BusinessDayConvention`].

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;

/// A working-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a non-business day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Adjust `date` according to the given business-day convention.
    ///
    /// # Panics
    /// Panics if the walk leaves the supported date range, which cannot
    /// happen for [`WeekendsOnly`] since both range ends are weekdays.
    fn adjust(&self, mut date: Date, convention: BusinessDayConvention) -> Date {
        match convention {
            BusinessDayConvention::Unadjusted => date,
            BusinessDayConvention::Following => {
                while self.is_holiday(date) {
                    date += 1;
                }
                date
            }
            BusinessDayConvention::Preceding => {
                while self.is_holiday(date) {
                    date = date - 1;
                }
                date
            }
        }
    }

    /// Count weekend days met when walking from `start` to `end` one day at
    /// a time.
    ///
    /// `start` is always visited (so it counts even when `end < start`),
    /// followed by every day strictly after it up to and including `end`.
    fn weekends_between(&self, start: Date, end: Date) -> i32 {
        let mut count = i32::from(self.is_weekend(start));
        let mut serial = start.serial() + 1;
        while serial <= end.serial() {
            if Date::from_serial(serial).is_ok_and(|d| self.is_weekend(d)) {
                count += 1;
            }
            serial += 1;
        }
        count
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days,
/// with no holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekends_only_saturday() {
        let cal = WeekendsOnly;
        // 2023-09-02 is a Saturday
        assert!(!cal.is_business_day(date(2023, 9, 2)));
        assert!(cal.is_business_day(date(2023, 9, 4)));
    }

    #[test]
    fn adjust_following() {
        let cal = WeekendsOnly;
        let sat = date(2023, 9, 2);
        assert_eq!(cal.adjust(sat, BusinessDayConvention::Following), date(2023, 9, 4));
    }

    #[test]
    fn adjust_preceding() {
        let cal = WeekendsOnly;
        let sat = date(2023, 9, 2);
        let sun = date(2023, 9, 3);
        assert_eq!(cal.adjust(sat, BusinessDayConvention::Preceding), date(2023, 9, 1));
        assert_eq!(cal.adjust(sun, BusinessDayConvention::Preceding), date(2023, 9, 1));
        assert_eq!(cal.adjust(sun, BusinessDayConvention::Unadjusted), sun);
    }

    #[test]
    fn weekends_between_counts_start() {
        let cal = WeekendsOnly;
        let sat = date(2024, 1, 13);
        assert_eq!(cal.weekends_between(sat, sat), 1);
        assert_eq!(cal.weekends_between(sat, date(2024, 1, 14)), 2);
        // end before start: only start is visited
        assert_eq!(cal.weekends_between(sat, date(2024, 1, 1)), 1);
        // Wednesday 10th .. Thursday 25th: 13, 14, 20, 21
        assert_eq!(cal.weekends_between(date(2024, 1, 10), date(2024, 1, 25)), 4);
    }
}

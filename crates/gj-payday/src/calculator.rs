//! Payday countdown arithmetic.
//!
//! Every function here is pure: results depend only on the arguments, so
//! callers may share them freely across threads.  `today` and the payday
//! day-of-month are always supplied by the caller; nothing reads the clock
//! or the stored preference.
//!
//! Month-length policy: a day-of-month the target month lacks is clamped to
//! the month's last day, for both the current-month and the next-month
//! candidate.  A payday on the 31st therefore lands on April 30 and on
//! February 28 or 29.

use std::cmp::Ordering;

use gj_core::{Integer, Result};
use gj_time::{BusinessDayConvention, Calendar, Date, Weekday, WeekendsOnly};

use crate::stats::{PaydayStats, PaydayWindow, Remaining};

// ── Primitives ────────────────────────────────────────────────────────────────

/// Signed count of calendar days from `start` (exclusive) to `end`
/// (inclusive).
pub fn days_between(start: Date, end: Date) -> Integer {
    start.days_between(end)
}

/// Return `true` if `date` is a Saturday or Sunday.
pub fn is_weekend(date: Date) -> bool {
    WeekendsOnly.is_weekend(date)
}

/// Weekend days in the walk from `start` to `end`, `start` included.
///
/// See [`Calendar::weekends_between`].
pub fn weekends_between(start: Date, end: Date) -> Integer {
    WeekendsOnly.weekends_between(start, end)
}

/// `days_between - weekends_between`, saturating at zero.
///
/// Because the weekend count visits `start` while the day count does not,
/// a walk starting on a weekend can count more weekend days than it spans
/// (Saturday to Sunday: one day, two weekend days).  Such spans hold no
/// working day, so the result is zero rather than negative.
pub fn workdays_between(start: Date, end: Date) -> Integer {
    (days_between(start, end) - weekends_between(start, end)).max(0)
}

// ── Payday candidates ─────────────────────────────────────────────────────────

/// `today`'s month with the day replaced by `day_of_month`.
pub fn nominal_payday_for(today: Date, day_of_month: u8) -> Date {
    today.with_day_clamped(day_of_month)
}

/// The following month with the day replaced by `day_of_month`.
///
/// Fails only when the following month is past [`Date::MAX`].
pub fn next_month_payday_for(today: Date, day_of_month: u8) -> Result<Date> {
    Ok(today.add_months(1)?.with_day_clamped(day_of_month))
}

/// The nominal payday the countdown refers to: this month's candidate while
/// it has not passed, otherwise next month's.
pub fn upcoming_payday(today: Date, day_of_month: u8) -> Result<Date> {
    let current = nominal_payday_for(today, day_of_month);
    match today.cmp(&current) {
        Ordering::Less | Ordering::Equal => Ok(current),
        Ordering::Greater => next_month_payday_for(today, day_of_month),
    }
}

fn remaining_until(
    today: Date,
    payday: Option<Date>,
    count: fn(Date, Date) -> Integer,
) -> Remaining {
    match payday {
        Some(payday) if payday == today => Remaining::Known(0),
        Some(payday) => Remaining::Known(count(today, payday)),
        None => Remaining::Indeterminate,
    }
}

/// Calendar days until the upcoming payday; zero on payday itself.
pub fn days_ahead(today: Date, day_of_month: u8) -> Remaining {
    remaining_until(today, upcoming_payday(today, day_of_month).ok(), days_between)
}

/// Working days until the upcoming payday; zero on payday itself.
pub fn workdays_ahead(today: Date, day_of_month: u8) -> Remaining {
    remaining_until(today, upcoming_payday(today, day_of_month).ok(), workdays_between)
}

/// Weekend days until the upcoming payday; zero on payday itself.
pub fn weekends_ahead(today: Date, day_of_month: u8) -> Remaining {
    remaining_until(today, upcoming_payday(today, day_of_month).ok(), weekends_between)
}

// ── Week placement ────────────────────────────────────────────────────────────
//
// Week numbers start on Sunday, so a Sunday payday sits one week number
// after the Monday–Saturday before it.  The Sunday rules below attribute it
// back to the week it closes.

fn week_gap(today: Date, payday: Date) -> i32 {
    payday.week_index(Weekday::Sunday) - today.week_index(Weekday::Sunday)
}

fn payday_on_this_week(today: Date, payday: Date) -> bool {
    let gap = week_gap(today, payday);
    let sunday = payday.weekday() == Weekday::Sunday;
    (today < payday && gap == 0) || (sunday && gap == 1)
}

fn payday_on_next_week(today: Date, payday: Date) -> bool {
    let gap = week_gap(today, payday);
    let sunday = payday.weekday() == Weekday::Sunday;
    (today < payday && gap == 1 && !sunday) || (sunday && gap == 2)
}

/// `true` if the upcoming payday is still ahead within today's week.
pub fn is_payday_on_this_week(today: Date, day_of_month: u8) -> bool {
    upcoming_payday(today, day_of_month).is_ok_and(|payday| payday_on_this_week(today, payday))
}

/// `true` if the upcoming payday falls in the week after today's.
pub fn is_payday_on_next_week(today: Date, day_of_month: u8) -> bool {
    upcoming_payday(today, day_of_month).is_ok_and(|payday| payday_on_next_week(today, payday))
}

// ── Weekend adjustment ────────────────────────────────────────────────────────

/// Saturday moves back one day, Sunday two; weekdays are unchanged.
pub fn previous_weekday(date: Date) -> Date {
    WeekendsOnly.adjust(date, BusinessDayConvention::Preceding)
}

/// The day the salary actually arrives for a nominal payday `date`.
pub fn actual_payday(date: Date) -> Date {
    if is_weekend(date) {
        previous_weekday(date)
    } else {
        date
    }
}

/// `true` if `lo <= date <= hi`.
pub fn is_between_inclusive(lo: Date, hi: Date, date: Date) -> bool {
    lo <= date && date <= hi
}

// ── Assembly ──────────────────────────────────────────────────────────────────

/// Compute every payday statistic for `today` and `day_of_month`.
///
/// `day_of_month` is expected in `1..=31`; validation belongs to the caller
/// (see [`PaydayConfig`](crate::PaydayConfig)).
pub fn compute_stats(today: Date, day_of_month: u8) -> PaydayStats {
    let origin = upcoming_payday(today, day_of_month).ok();
    let payday = origin.map(PaydayWindow::for_origin);

    PaydayStats {
        today,
        day_of_month,
        days_ahead: remaining_until(today, origin, days_between),
        workdays_ahead: remaining_until(today, origin, workdays_between),
        weekends_ahead: remaining_until(today, origin, weekends_between),
        is_payday_on_this_week: origin.is_some_and(|o| payday_on_this_week(today, o)),
        is_payday_on_next_week: origin.is_some_and(|o| payday_on_next_week(today, o)),
        is_payday_on_weekend: origin.is_some_and(is_weekend),
        is_weekend_today: is_weekend(today),
        is_payday: payday.is_some_and(|w| w.contains(today)),
        payday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn days_between_is_signed() {
        let a = date(2024, 1, 10);
        let b = date(2024, 1, 25);
        assert_eq!(days_between(a, a), 0);
        assert_eq!(days_between(a, b), 15);
        assert_eq!(days_between(b, a), -15);
    }

    #[test]
    fn workdays_from_friday_to_monday() {
        // Fri 2024-01-12 → Mon 2024-01-15: Sat, Sun, Mon
        assert_eq!(workdays_between(date(2024, 1, 12), date(2024, 1, 15)), 1);
    }

    #[test]
    fn workdays_saturate_on_weekend_start() {
        let sat = date(2024, 1, 13);
        assert_eq!(workdays_between(sat, sat), 0);
        assert_eq!(workdays_between(sat, date(2024, 1, 14)), 0);
    }

    #[test]
    fn candidates_clamp_to_month_end() {
        let today = date(2024, 4, 10);
        assert_eq!(nominal_payday_for(today, 31), date(2024, 4, 30));
        assert_eq!(next_month_payday_for(today, 31).unwrap(), date(2024, 5, 31));
        let jan = date(2023, 1, 31);
        assert_eq!(next_month_payday_for(jan, 30).unwrap(), date(2023, 2, 28));
    }

    #[test]
    fn previous_weekday_shifts_weekends_only() {
        assert_eq!(previous_weekday(date(2024, 1, 27)), date(2024, 1, 26));
        assert_eq!(previous_weekday(date(2024, 1, 28)), date(2024, 1, 26));
        assert_eq!(previous_weekday(date(2024, 1, 25)), date(2024, 1, 25));
    }

    #[test]
    fn indeterminate_past_supported_range() {
        let today = date(2199, 12, 20);
        assert_eq!(days_ahead(today, 5), Remaining::Indeterminate);
        assert_eq!(workdays_ahead(today, 5), Remaining::Indeterminate);
        assert!(!is_payday_on_this_week(today, 5));
        let stats = compute_stats(today, 5);
        assert!(stats.payday.is_none());
        assert!(!stats.is_payday);
        // Still determined while this month's candidate is ahead.
        assert_eq!(days_ahead(today, 25), Remaining::Known(5));
    }
}

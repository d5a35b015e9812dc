//! `Date` type.
//!
//! Dates are stored as a serial day number so that ordering, differences
//! and day offsets are plain integer arithmetic.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The valid date range is 1900-01-01 to 2199-12-31.
//! * Conversion to and from year/month/day uses the proleptic Gregorian
//!   calendar.

use chrono::Datelike;
use gj_core::errors::{Error, Result};
use serde::{Serialize, Serializer};

use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

/// Serial number of 1970-01-01.
const UNIX_EPOCH_SERIAL: i32 = 25_568;

const MIN_YEAR: i32 = 1900;
const MAX_YEAR: i32 = 2199;

/// Weekday of serial `1 + k` for `k = 0..7`.
const WEEK: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&serial) {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&i32::from(year)) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Today's date on the host's local calendar.
    pub fn today() -> Result<Self> {
        Date::try_from(chrono::Local::now().date_naive())
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        // ymd_from_serial only yields months in 1..=12
        Month::from_number(self.month()).unwrap_or(Month::January)
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the number of days in this date's month.
    pub fn days_in_month(&self) -> u8 {
        let (y, m, _) = ymd_from_serial(self.0);
        days_in_month(y, m)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        WEEK[(self.0 - 1).rem_euclid(7) as usize]
    }

    /// Return a continuous week ordinal for weeks beginning on `first_day`.
    ///
    /// Dates in the same week share an index and consecutive weeks differ by
    /// exactly one, across month and year boundaries alike.
    pub fn week_index(&self, first_day: Weekday) -> i32 {
        (self.0 - i32::from(first_day.ordinal())).div_euclid(7)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("date arithmetic: {self:?} + {n} overflows")))
            .and_then(Date::from_serial)
    }

    /// Advance by `n` whole months, clamping the day to the end of the
    /// target month (January 31 + 1 month = February 28 or 29).
    pub fn add_months(self, n: i32) -> Result<Self> {
        let (y, m, d) = ymd_from_serial(self.0);
        let total = i32::from(y) * 12 + i32::from(m) - 1 + n;
        let new_y = total.div_euclid(12);
        if !(MIN_YEAR..=MAX_YEAR).contains(&new_y) {
            return Err(Error::Date(format!("year {new_y} out of range")));
        }
        let new_y = new_y as u16;
        let new_m = (total.rem_euclid(12) + 1) as u8;
        let new_d = d.min(days_in_month(new_y, new_m));
        Ok(Date(serial_from_ymd(new_y, new_m, new_d)))
    }

    /// Replace the day of the month, clamping to `1..=days_in_month()`.
    pub fn with_day_clamped(self, day: u8) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, day.clamp(1, days_in_month(y, m))))
    }

    /// Return the number of calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    // ── Formatting ────────────────────────────────────────────────────────────

    /// Render as `YYYY-MM-DD`.
    pub fn to_iso_string(&self) -> String {
        let (y, m, d) = ymd_from_serial(self.0);
        format!("{y:04}-{m:02}-{d:02}")
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(date: chrono::NaiveDate) -> Result<Self> {
        let year = u16::try_from(date.year())
            .map_err(|_| Error::Date(format!("year {} out of range", date.year())))?;
        // chrono guarantees month in 1..=12 and day in 1..=31
        Date::from_ymd(year, date.month() as u8, date.day() as u8)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

/// # Panics
/// Panics if the result leaves the supported range; use
/// [`Date::add_days`] to handle that case.
impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

/// # Panics
/// Panics if the result leaves the supported range.
impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

// ── Display / serde ───────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.day_of_month(),
            self.month_of_year(),
            self.year()
        )
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.to_iso_string())
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string())
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Convert (year, month, day) to a serial number.
///
/// Counts days from 1970-01-01 in 400-year eras with March-based years, so
/// the leap day falls at the end of each computational year.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let (m, d) = (i32::from(month), i32::from(day));
    let y = i32::from(year) - i32::from(m <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let doy = (153 * ((m + 9) % 12) + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468 + UNIX_EPOCH_SERIAL
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let z = serial - UNIX_EPOCH_SERIAL + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i32::from(m <= 2);
    (y as u16, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1900, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(d.weekday(), Weekday::Monday);
        assert_eq!(Date::from_ymd(1970, 1, 1).unwrap().serial(), UNIX_EPOCH_SERIAL);
        assert_eq!(Date::from_ymd(2199, 12, 31).unwrap(), Date::MAX);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 2, 28),
            (1900, 3, 1),
            (2000, 2, 29),
            (2100, 2, 28),
            (2024, 1, 25),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_invalid_dates() {
        assert!(Date::from_ymd(1900, 2, 29).is_err());
        assert!(Date::from_ymd(2023, 4, 31).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
        assert!(Date::from_ymd(2200, 1, 1).is_err());
        assert!(Date::from_serial(0).is_err());
        assert!(Date::MAX.add_days(1).is_err());
    }

    #[test]
    fn test_weekday() {
        // 2024-01-10 is a Wednesday
        let d = Date::from_ymd(2024, 1, 10).unwrap();
        assert_eq!(d.weekday(), Weekday::Wednesday);
        // 2024-01-27 is a Saturday
        let d2 = Date::from_ymd(2024, 1, 27).unwrap();
        assert_eq!(d2.weekday(), Weekday::Saturday);
    }

    #[test]
    fn test_add_months_clamps() {
        let d = Date::from_ymd(2023, 1, 31).unwrap();
        assert_eq!(d.add_months(1).unwrap(), Date::from_ymd(2023, 2, 28).unwrap());
        let d = Date::from_ymd(2024, 12, 15).unwrap();
        assert_eq!(d.add_months(1).unwrap(), Date::from_ymd(2025, 1, 15).unwrap());
        assert!(Date::from_ymd(2199, 12, 1).unwrap().add_months(1).is_err());
    }

    #[test]
    fn test_with_day_clamped() {
        let apr = Date::from_ymd(2024, 4, 10).unwrap();
        assert_eq!(apr.with_day_clamped(31), Date::from_ymd(2024, 4, 30).unwrap());
        assert_eq!(apr.with_day_clamped(0), Date::from_ymd(2024, 4, 1).unwrap());
        let feb = Date::from_ymd(2024, 2, 1).unwrap();
        assert_eq!(feb.with_day_clamped(30).day_of_month(), 29);
    }

    #[test]
    fn test_week_index() {
        // Sunday 2024-01-14 opens a new Sunday-first week
        let sat = Date::from_ymd(2024, 1, 13).unwrap();
        let sun = Date::from_ymd(2024, 1, 14).unwrap();
        assert_eq!(sun.week_index(Weekday::Sunday), sat.week_index(Weekday::Sunday) + 1);
        // ...but closes the Monday-first week
        assert_eq!(sun.week_index(Weekday::Monday), sat.week_index(Weekday::Monday));
    }

    #[test]
    fn test_formatting() {
        let d = Date::from_ymd(2024, 1, 5).unwrap();
        assert_eq!(d.to_iso_string(), "2024-01-05");
        assert_eq!(d.to_string(), "5 January 2024");
        assert_eq!(format!("{d:?}"), "Date(2024-01-05)");
    }

    #[test]
    fn test_from_chrono() {
        let naive = chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(Date::try_from(naive).unwrap(), Date::from_ymd(2024, 2, 29).unwrap());
        let far = chrono::NaiveDate::from_ymd_opt(2300, 1, 1).unwrap();
        assert!(Date::try_from(far).is_err());
    }
}

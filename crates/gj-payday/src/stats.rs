//! `PaydayStats` — the flat record handed to the presentation layer.

use gj_core::Integer;
use gj_time::Date;
use serde::Serialize;

/// A day count that may be undetermined.
///
/// `Indeterminate` appears when the upcoming payday cannot be represented
/// (it would fall past [`Date::MAX`]).  Callers must suppress the count in
/// that case instead of printing a placeholder number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Remaining {
    /// A determined, non-negative count.
    Known(Integer),
    /// The count could not be computed; serialized as `null`.
    Indeterminate,
}

impl Remaining {
    /// Return the count, or `None` when indeterminate.
    pub fn known(self) -> Option<Integer> {
        match self {
            Remaining::Known(n) => Some(n),
            Remaining::Indeterminate => None,
        }
    }
}

/// The nominal payday together with its weekend-adjusted "actual" payday.
///
/// Invariant: `actual <= origin`, and they differ only when `origin` falls
/// on a weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaydayWindow {
    origin: Date,
    actual: Date,
    origin_name: &'static str,
    actual_name: &'static str,
}

impl PaydayWindow {
    /// Build the window for a nominal payday.
    pub fn for_origin(origin: Date) -> Self {
        let actual = crate::calculator::actual_payday(origin);
        Self {
            origin,
            actual,
            origin_name: origin.weekday().indonesian_name(),
            actual_name: actual.weekday().indonesian_name(),
        }
    }

    /// The nominal payday.
    pub fn origin(&self) -> Date {
        self.origin
    }

    /// The payday moved back to the preceding Friday when `origin` is a
    /// weekend.
    pub fn actual(&self) -> Date {
        self.actual
    }

    /// Indonesian day name of the nominal payday.
    pub fn origin_name(&self) -> &'static str {
        self.origin_name
    }

    /// Indonesian day name of the actual payday.
    pub fn actual_name(&self) -> &'static str {
        self.actual_name
    }

    /// `true` when the payday was moved earlier because of a weekend.
    pub fn is_advanced(&self) -> bool {
        self.origin != self.actual
    }

    /// `true` when `date` lies in `[actual, origin]`.
    pub fn contains(&self, date: Date) -> bool {
        crate::calculator::is_between_inclusive(self.actual, self.origin, date)
    }
}

/// Everything the presentation layer needs to describe payday proximity.
///
/// Derived fresh from `(today, day_of_month)` by
/// [`compute_stats`](crate::calculator::compute_stats); never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaydayStats {
    /// The date the statistics were computed for.
    pub today: Date,
    /// The configured payday day-of-month.
    pub day_of_month: u8,
    /// Calendar days until the nominal payday.
    pub days_ahead: Remaining,
    /// Working days until the nominal payday.
    pub workdays_ahead: Remaining,
    /// Weekend days met on the way to the nominal payday, today included.
    pub weekends_ahead: Remaining,
    /// The nominal payday falls in today's week.
    pub is_payday_on_this_week: bool,
    /// The nominal payday falls in the week after today's.
    pub is_payday_on_next_week: bool,
    /// The nominal payday is a Saturday or Sunday.
    pub is_payday_on_weekend: bool,
    /// Today is a Saturday or Sunday.
    pub is_weekend_today: bool,
    /// Today lies between the actual and the nominal payday, inclusive.
    pub is_payday: bool,
    /// Nominal and actual payday; `None` exactly when the counts are
    /// [`Remaining::Indeterminate`].
    pub payday: Option<PaydayWindow>,
}

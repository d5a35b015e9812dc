//! # gj-payday
//!
//! "Time until next payday" statistics and the thin application layer
//! around them.
//!
//! The heart of the crate is [`calculator`]: pure functions that, given
//! `today` and a payday day-of-month, work out the calendar days, working
//! days, and weekend days left, whether payday falls this week or next, and
//! which Friday a weekend payday moves to.  The remaining modules persist
//! the single payday preference, read the view flags, and turn a
//! [`PaydayStats`] record into Indonesian text.
//!
//! ```
//! use gj_payday::{compute_stats, Remaining};
//! use gj_time::Date;
//!
//! let today = Date::from_ymd(2024, 1, 10).unwrap();
//! let stats = compute_stats(today, 25);
//! assert_eq!(stats.days_ahead, Remaining::Known(15));
//! assert_eq!(stats.workdays_ahead, Remaining::Known(11));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Application state composed around the calculator.
pub mod app;

/// Pure payday date arithmetic.
pub mod calculator;

/// The persisted payday preference.
pub mod config;

/// Query-string view flags.
pub mod flags;

/// User-facing message composition.
pub mod message;

/// Preference stores.
pub mod preferences;

/// The statistics record.
pub mod stats;

pub use app::PaydayApp;
pub use calculator::compute_stats;
pub use config::PaydayConfig;
pub use flags::ViewFlags;
pub use preferences::{FileStore, MemoryStore, PreferenceStore, PREFERENCE_KEY};
pub use stats::{PaydayStats, PaydayWindow, Remaining};

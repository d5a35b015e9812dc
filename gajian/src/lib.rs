//! # gajian
//!
//! *Cepatlah gajian* ("hurry up, payday"): how many calendar days and
//! working days remain until the next payday, and which Friday a weekend
//! payday moves to.
//!
//! This crate is a façade that re-exports the workspace crates.
//!
//! ```rust
//! use gajian::payday::{compute_stats, Remaining};
//! use gajian::time::Date;
//!
//! let today = Date::from_ymd(2024, 1, 31).unwrap();
//! let stats = compute_stats(today, 1);
//! assert_eq!(stats.days_ahead, Remaining::Known(1));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions.
pub use gj_core as core;

/// Date, weekday, month, and calendar types.
pub use gj_time as time;

/// Payday calculator, preferences, and messages.
pub use gj_payday as payday;

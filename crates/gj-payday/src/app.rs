//! `PaydayApp` — explicit application state composed around the calculator.
//!
//! The app owns the preference store, the loaded preference, and the view
//! flags.  The calculator only ever sees `(today, day_of_month)`.

use gj_core::Result;
use gj_time::Date;
use tracing::{debug, info};

use crate::calculator::compute_stats;
use crate::config::PaydayConfig;
use crate::flags::ViewFlags;
use crate::message;
use crate::preferences::PreferenceStore;
use crate::stats::PaydayStats;

/// Application state for one page view.
#[derive(Debug)]
pub struct PaydayApp<S: PreferenceStore> {
    store: S,
    config: Option<PaydayConfig>,
    flags: ViewFlags,
}

impl<S: PreferenceStore> PaydayApp<S> {
    /// Load the stored preference (if any) and keep `flags` for rendering.
    pub fn open(store: S, flags: ViewFlags) -> Self {
        let config = store.load();
        debug!(?config, ?flags, "opened payday app");
        Self { store, config, flags }
    }

    /// The current preference, `None` while unset.
    pub fn config(&self) -> Option<PaydayConfig> {
        self.config
    }

    /// The view flags in effect.
    pub fn flags(&self) -> ViewFlags {
        self.flags
    }

    /// Validate, persist, and adopt a new payday.
    ///
    /// The in-memory state only changes once the store accepted the record.
    pub fn set_day_of_month(&mut self, day_of_month: u8) -> Result<PaydayConfig> {
        let config = PaydayConfig::new(day_of_month)?;
        self.store.save(&config)?;
        info!(day_of_month, "payday updated");
        self.config = Some(config);
        Ok(config)
    }

    /// Statistics for `today`, or `None` while no payday is set.
    pub fn stats(&self, today: Date) -> Option<PaydayStats> {
        self.config
            .map(|config| compute_stats(today, config.day_of_month()))
    }

    /// The lines to show for `today`.
    pub fn render(&self, today: Date) -> Vec<String> {
        match self.stats(today) {
            Some(stats) => message::compose(&stats, self.flags),
            None => vec![message::ASK_PAYDAY.to_owned()],
        }
    }

    /// Give the store back, e.g. to reopen it later.
    pub fn into_store(self) -> S {
        self.store
    }
}

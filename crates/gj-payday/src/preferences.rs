//! Preference storage.
//!
//! The payday preference is the application's only persistent state.  It is
//! kept as a JSON string under [`PREFERENCE_KEY`] in a key/value store, the
//! way a browser page keeps it in local storage.  [`MemoryStore`] keeps the
//! values in process; [`FileStore`] keeps one `<key>.json` file per key.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use gj_core::errors::{Error, Result};
use gj_core::fail;
use tracing::{debug, warn};

use crate::config::PaydayConfig;

/// Key the payday record is stored under.
pub const PREFERENCE_KEY: &str = "cepatlah-gajian";

/// A string key/value store holding the payday preference.
pub trait PreferenceStore {
    /// Read the raw value stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Load the payday preference.
    ///
    /// Absent, unreadable, unparsable, and out-of-range records all mean
    /// "no preference set"; malformed ones are logged and otherwise ignored.
    fn load(&self) -> Option<PaydayConfig> {
        let raw = match self.read(PREFERENCE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = PREFERENCE_KEY, "no payday preference stored");
                return None;
            }
            Err(err) => {
                warn!(key = PREFERENCE_KEY, %err, "could not read payday preference");
                return None;
            }
        };
        match PaydayConfig::from_json(&raw) {
            Ok(config) => {
                debug!(day_of_month = config.day_of_month(), "loaded payday preference");
                Some(config)
            }
            Err(err) => {
                warn!(key = PREFERENCE_KEY, %raw, %err, "ignoring malformed payday preference");
                None
            }
        }
    }

    /// Persist the payday preference, overwriting the previous record.
    fn save(&mut self, config: &PaydayConfig) -> Result<()> {
        let json = config.to_json()?;
        self.write(PREFERENCE_KEY, &json)?;
        debug!(day_of_month = config.day_of_month(), "saved payday preference");
        Ok(())
    }
}

/// In-process key/value store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// File-backed store: the value for `key` lives in `<dir>/<key>.json`.
///
/// Writes go to a temporary sibling file which is then renamed over the
/// target, so a reader never sees a half-written record.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`.  The directory is created on first
    /// write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            fail!("invalid preference key {key:?}");
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl PreferenceStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Storage(format!("reading {}: {e}", path.display()))),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let storage = |e: std::io::Error| Error::Storage(format!("writing {}: {e}", path.display()));
        fs::create_dir_all(&self.dir).map_err(storage)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(storage)?;
        fs::rename(&tmp, &path).map_err(storage)?;
        debug!(path = %path.display(), "wrote preference file");
        Ok(())
    }
}

//! Persisted light/dark theme preference.

use crate::storage::{Storage, THEME_KEY};
use log::{error, warn};

/// Reads the dark-mode flag. Only the literal `"true"` turns it on; a
/// missing value or unreadable storage means light mode.
pub fn load_dark_mode(storage: &impl Storage) -> bool {
    match storage.load(THEME_KEY) {
        Ok(value) => value.as_deref() == Some("true"),
        Err(e) => {
            warn!("could not read theme preference: {e}");
            false
        }
    }
}

/// Writes the dark-mode flag as `"true"` or `"false"`.
///
/// Returns whether the value was stored; failures are logged.
pub fn save_dark_mode(storage: &mut impl Storage, dark: bool) -> bool {
    let value = if dark { "true" } else { "false" };
    match storage.save(THEME_KEY, value) {
        Ok(()) => true,
        Err(e) => {
            error!("could not save theme preference: {e}");
            false
        }
    }
}

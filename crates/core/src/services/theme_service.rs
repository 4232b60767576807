use log::{debug, info, warn};

use crate::errors::CoreError;
use crate::models::theme::Theme;
use crate::storage::store::KeyValueStore;

/// The persisted light/dark preference.
///
/// Storage problems never surface as errors: an unreadable or unwritable
/// store drops the preference to in-memory mode with the default (dark)
/// theme, and later toggles no longer touch the store.
pub struct ThemePreference<S: KeyValueStore> {
    store: S,
    key: String,
    current: Theme,
    persistent: bool,
}

impl<S: KeyValueStore> ThemePreference<S> {
    /// Wrap `store`; the preference is read by [`ThemePreference::init`].
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            current: Theme::default(),
            persistent: true,
        }
    }

    /// Read the persisted theme and make it active. Absent or unrecognised
    /// values give [`Theme::Dark`].
    pub fn init(&mut self) -> Theme {
        self.current = match self.store.get(&self.key) {
            Ok(Some(value)) => value.parse().unwrap_or_else(|e: CoreError| {
                warn!("Ignoring stored theme preference: {e}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                self.fall_back_to_memory(&e);
                Theme::default()
            }
        };
        info!("Theme initialised to {}", self.current);
        self.current
    }

    /// Flip dark ↔ light, persist the new value and return it.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if self.persistent {
            if let Err(e) = self.store.set(&self.key, self.current.as_str()) {
                self.fall_back_to_memory(&e);
            }
        }
        debug!("Theme toggled to {}", self.current);
        self.current
    }

    /// The active theme.
    pub fn current(&self) -> Theme {
        self.current
    }

    /// False once the store has failed and the preference lives in memory only.
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn fall_back_to_memory(&mut self, e: &CoreError) {
        warn!("Theme preference is not persisted: {e}");
        self.persistent = false;
    }
}

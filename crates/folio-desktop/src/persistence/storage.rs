//! Key-value storage backends for the persisted snapshot

use std::collections::HashMap;

use tracing::warn;

use super::{PersistedState, STORAGE_KEY};
use crate::error::DesktopResult;

/// String key-value store the snapshot is written to
pub trait StateStorage {
    /// Read the value under `key`, if any
    fn read(&self, key: &str) -> DesktopResult<Option<String>>;

    /// Write `value` under `key`
    fn write(&mut self, key: &str, value: &str) -> DesktopResult<()>;
}

/// In-memory storage for native builds and tests
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStorage for MemoryStorage {
    fn read(&self, key: &str) -> DesktopResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> DesktopResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load the snapshot, falling back to defaults on any failure
pub fn load_state(storage: &dyn StateStorage) -> PersistedState {
    match storage.read(STORAGE_KEY) {
        Ok(Some(json)) => PersistedState::from_json(&json).unwrap_or_else(|err| {
            warn!(%err, "discarding unreadable persisted state");
            PersistedState::default()
        }),
        Ok(None) => PersistedState::default(),
        Err(err) => {
            warn!(%err, "persisted state unavailable");
            PersistedState::default()
        }
    }
}

/// Write the snapshot under [`STORAGE_KEY`]
pub fn save_state(storage: &mut dyn StateStorage, state: &PersistedState) -> DesktopResult<()> {
    storage.write(STORAGE_KEY, &state.to_json()?)
}

#[cfg(feature = "wasm")]
mod local {
    use super::StateStorage;
    use crate::error::{DesktopError, DesktopResult};

    /// Browser `window.localStorage`
    pub struct LocalStorage {
        storage: web_sys::Storage,
    }

    impl LocalStorage {
        /// Handle to the page's local storage, if the browser allows it
        pub fn open() -> DesktopResult<Self> {
            let storage = web_sys::window()
                .ok_or_else(|| DesktopError::Persistence("no window".to_string()))?
                .local_storage()
                .map_err(|_| DesktopError::Persistence("localStorage denied".to_string()))?
                .ok_or_else(|| DesktopError::Persistence("localStorage missing".to_string()))?;
            Ok(Self { storage })
        }
    }

    impl StateStorage for LocalStorage {
        fn read(&self, key: &str) -> DesktopResult<Option<String>> {
            self.storage
                .get_item(key)
                .map_err(|e| DesktopError::Persistence(format!("read {key}: {e:?}")))
        }

        fn write(&mut self, key: &str, value: &str) -> DesktopResult<()> {
            self.storage
                .set_item(key, value)
                .map_err(|e| DesktopError::Persistence(format!("write {key}: {e:?}")))
        }
    }
}

#[cfg(feature = "wasm")]
pub use local::LocalStorage;

//! Persistence module for state serialization
//!
//! Only coarse settings and session flags survive a reload. Window and
//! widget geometry are never written.

mod snapshot;
mod storage;
mod wallpaper;

pub use snapshot::{DesktopSettings, DockPosition, PersistedState, Theme, STORAGE_KEY};
#[cfg(feature = "wasm")]
pub use storage::LocalStorage;
pub use storage::{load_state, save_state, MemoryStorage, StateStorage};
pub use wallpaper::{WALLPAPERS, WALLPAPER_HISTORY_CAP};

//! Static application registry
//!
//! The window store reads this to title, size and constrain new windows.
//! Nothing mutates it at runtime.

mod registry;

pub use registry::{AppDefinition, APPS};

/// Look up an application by id
pub fn lookup(app_id: &str) -> Option<&'static AppDefinition> {
    APPS.iter().find(|app| app.id == app_id)
}

/// All registered applications in dock order
pub fn all() -> &'static [AppDefinition] {
    APPS
}

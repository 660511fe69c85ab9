//! Desktop state core for the portfolio site
//!
//! This crate owns the state behind the simulated desktop:
//! - Window management (open, close, focus, z-order, two-phase minimize/restore)
//! - Desktop widgets (clock, calendar, search spotlight, skill meter, quote)
//! - Responsive placement and bounds clamping
//! - Pointer drag/resize gestures and keyboard shortcuts
//! - Notifications and persisted settings
//!
//! ## Architecture
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`)
//! - [`geometry`]: Breakpoints, default widget positions, clamping
//! - [`apps`]: Static application registry
//! - [`window`]: Window lifecycle and the window store
//! - [`widget`]: Widget types, settings and the widget store
//! - [`input`]: Gesture state machine and shortcuts
//! - [`transition`]: Minimize/restore animations
//! - [`notification`]: Notification queue
//! - [`persistence`]: Settings snapshot and storage backends
//!
//! ## Example
//!
//! ```rust
//! use folio_desktop::DesktopEngine;
//!
//! let mut engine = DesktopEngine::new();
//! engine.init(1920.0, 1080.0);
//!
//! let about = engine.open_window("about", 0.0).unwrap();
//! engine.minimize_window(&about, 0.0).unwrap();
//! engine.tick(1_000.0);
//! assert!(engine.windows.get(&about).unwrap().is_minimized());
//! ```
//!
//! Time never comes from a clock inside the crate: every operation that
//! depends on it takes `now_ms`, so tests drive animations deterministically.

pub mod apps;
pub mod geometry;
pub mod input;
pub mod math;
pub mod notification;
pub mod persistence;
pub mod transition;
pub mod widget;
pub mod window;

mod config;
mod engine;
mod error;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod console;
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use apps::AppDefinition;
pub use geometry::{clamp_size, clamp_to_bounds, compute_default_position, Breakpoint};
pub use input::{DragState, InputResult, InputRouter, Shortcut};
pub use math::{Rect, Size, SizeConstraints, Vec2};
pub use notification::{NewNotification, Notification, NotificationKind, NotificationQueue};
pub use persistence::{DesktopSettings, MemoryStorage, PersistedState, StateStorage};
pub use transition::{TransitionKind, WindowTransition};
pub use widget::{Widget, WidgetId, WidgetPatch, WidgetSettings, WidgetStore, WidgetType};
pub use window::{
    DockEntry, UnmaximizePolicy, Window, WindowId, WindowPhase, WindowRegion, WindowStore,
};

pub use config::DesktopConfig;
pub use engine::{DesktopEngine, WindowView};
pub use error::{DesktopError, DesktopResult};
pub use viewport::Viewport;

/// Duration of the minimize animation in milliseconds
pub use transition::MINIMIZE_DURATION_MS;

/// Duration of the restore animation in milliseconds
pub use transition::RESTORE_DURATION_MS;

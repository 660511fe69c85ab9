//! Built-in wallpapers

/// Wallpapers shipped with the desktop, in cycling order
pub const WALLPAPERS: &[&str] = &["gradient", "aurora", "dunes", "nebula", "mountains", "grain"];

/// How many previous wallpapers are remembered
pub const WALLPAPER_HISTORY_CAP: usize = 10;

//! Window minimize/restore transition

use serde::Serialize;

use super::{ease_in_out, ease_out_cubic};
use crate::geometry::EDGE_INSET;
use crate::math::{Rect, Size};
use crate::window::WindowId;

/// Dock icon edge length
const DOCK_ICON_SIZE: f32 = 48.0;
/// Gap between dock icons
const DOCK_ICON_GAP: f32 = 8.0;

/// Direction of a window transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    /// Window shrinks into its dock icon
    Minimize,
    /// Window grows back out of its dock icon
    Restore,
}

/// Interpolated geometry for one animation frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TransitionFrame {
    pub rect: Rect,
    pub opacity: f32,
}

/// A running minimize or restore animation
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowTransition {
    pub window: WindowId,
    pub kind: TransitionKind,
    /// Start time (ms timestamp)
    pub start_ms: f64,
    pub duration_ms: f64,
    /// Window rectangle when the transition started
    pub window_rect: Rect,
    /// Dock icon the window travels to or from
    pub dock_rect: Rect,
}

impl WindowTransition {
    pub fn new(
        window: WindowId,
        kind: TransitionKind,
        start_ms: f64,
        duration_ms: f64,
        window_rect: Rect,
        dock_rect: Rect,
    ) -> Self {
        Self {
            window,
            kind,
            start_ms,
            duration_ms,
            window_rect,
            dock_rect,
        }
    }

    /// Get the progress (0.0 to 1.0)
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed = (now_ms - self.start_ms) as f32;
        (elapsed / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Check if transition is complete
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Get the eased progress
    pub fn eased_progress(&self, now_ms: f64) -> f32 {
        match self.kind {
            TransitionKind::Minimize => ease_in_out(self.progress(now_ms)),
            TransitionKind::Restore => ease_out_cubic(self.progress(now_ms)),
        }
    }

    /// Geometry and opacity at `now_ms`
    pub fn frame(&self, now_ms: f64) -> TransitionFrame {
        let t = self.eased_progress(now_ms);
        match self.kind {
            TransitionKind::Minimize => TransitionFrame {
                rect: Rect::lerp(self.window_rect, self.dock_rect, t),
                opacity: 1.0 - t,
            },
            TransitionKind::Restore => TransitionFrame {
                rect: Rect::lerp(self.dock_rect, self.window_rect, t),
                opacity: t,
            },
        }
    }
}

/// Rectangle of dock slot `index` out of `count`, centered along the bottom edge
pub fn dock_icon_rect(index: usize, count: usize, viewport: Size) -> Rect {
    let count = count.max(1) as f32;
    let total = count * DOCK_ICON_SIZE + (count - 1.0) * DOCK_ICON_GAP;
    let left = (viewport.width - total) / 2.0;
    let x = left + index as f32 * (DOCK_ICON_SIZE + DOCK_ICON_GAP);
    let y = viewport.height - EDGE_INSET - DOCK_ICON_SIZE;
    Rect::new(x, y, DOCK_ICON_SIZE, DOCK_ICON_SIZE)
}

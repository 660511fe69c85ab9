//! Viewport width tiers

use serde::{Deserialize, Serialize};

/// Named viewport-width tier used to select a default layout
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Breakpoint {
    #[serde(rename = "xs")]
    Xs,
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl Breakpoint {
    /// All tiers, narrowest first
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    /// Smallest viewport width (inclusive) that selects this tier
    pub const fn min_width(self) -> f32 {
        match self {
            Breakpoint::Xs => 360.0,
            Breakpoint::Sm => 640.0,
            Breakpoint::Md => 768.0,
            Breakpoint::Lg => 1024.0,
            Breakpoint::Xl => 1280.0,
            Breakpoint::Xxl => 1536.0,
        }
    }

    /// Widest tier whose minimum fits `width`
    ///
    /// Returns `None` for widths narrower than every tier and for
    /// non-finite input.
    pub fn from_width(width: f32) -> Option<Breakpoint> {
        if !width.is_finite() {
            return None;
        }
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|bp| width >= bp.min_width())
    }

    /// Tier name as used in stylesheets
    pub const fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }

    /// Phone-sized tiers render the mobile launcher instead of the dock
    #[inline]
    pub fn is_mobile(self) -> bool {
        self < Breakpoint::Md
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_width_tiers() {
        assert_eq!(Breakpoint::from_width(1920.0), Some(Breakpoint::Xxl));
        assert_eq!(Breakpoint::from_width(1536.0), Some(Breakpoint::Xxl));
        assert_eq!(Breakpoint::from_width(1535.0), Some(Breakpoint::Xl));
        assert_eq!(Breakpoint::from_width(1024.0), Some(Breakpoint::Lg));
        assert_eq!(Breakpoint::from_width(800.0), Some(Breakpoint::Md));
        assert_eq!(Breakpoint::from_width(700.0), Some(Breakpoint::Sm));
        assert_eq!(Breakpoint::from_width(390.0), Some(Breakpoint::Xs));
    }

    #[test]
    fn test_from_width_below_smallest_tier() {
        assert_eq!(Breakpoint::from_width(320.0), None);
        assert_eq!(Breakpoint::from_width(f32::NAN), None);
        assert_eq!(Breakpoint::from_width(-10.0), None);
    }

    #[test]
    fn test_breakpoint_names() {
        assert_eq!(Breakpoint::Xxl.as_str(), "2xl");
        assert_eq!(serde_json::to_string(&Breakpoint::Xxl).unwrap(), "\"2xl\"");
        assert!(Breakpoint::Sm.is_mobile());
        assert!(!Breakpoint::Md.is_mobile());
    }
}

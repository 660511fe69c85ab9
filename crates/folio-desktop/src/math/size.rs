//! 2D size type and size constraints

use serde::{Deserialize, Serialize};

/// 2D size for width and height
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both dimensions are finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// Check if size is zero or negative
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Minimum and optional maximum dimensions for a widget
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeConstraints {
    pub min_width: f32,
    pub min_height: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f32>,
}

impl SizeConstraints {
    /// Constraints with a minimum only
    pub const fn min(min_width: f32, min_height: f32) -> Self {
        Self {
            min_width,
            min_height,
            max_width: None,
            max_height: None,
        }
    }

    /// Constraints with both bounds
    pub const fn bounded(min: Size, max: Size) -> Self {
        Self {
            min_width: min.width,
            min_height: min.height,
            max_width: Some(max.width),
            max_height: Some(max.height),
        }
    }
}

impl Default for SizeConstraints {
    fn default() -> Self {
        Self::min(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_empty() {
        assert!(Size::new(0.0, 10.0).is_empty());
        assert!(Size::new(10.0, -1.0).is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }

    #[test]
    fn test_constraints_serde_skips_missing_max() {
        let json = serde_json::to_string(&SizeConstraints::min(200.0, 150.0)).unwrap();
        assert_eq!(json, r#"{"minWidth":200.0,"minHeight":150.0}"#);

        let parsed: SizeConstraints =
            serde_json::from_str(r#"{"minWidth":200,"minHeight":100,"maxWidth":800}"#).unwrap();
        assert_eq!(parsed.max_width, Some(800.0));
        assert_eq!(parsed.max_height, None);
    }
}

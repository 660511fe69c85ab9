//! Error types for the desktop state core
//!
//! Nothing in the core is fatal: callers that get one of these back are
//! expected to log it and leave the affected panel as it was.

use thiserror::Error;

use crate::widget::WidgetType;

/// Errors that can occur in desktop state operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesktopError {
    /// Window with the given ID was not found
    #[error("window not found: {0}")]
    WindowNotFound(String),

    /// Widget with the given ID was not found
    #[error("widget not found: {0}")]
    WidgetNotFound(String),

    /// No application with this id in the registry
    #[error("unknown app: {0}")]
    UnknownApp(String),

    /// No widget template for this type tag
    #[error("unknown widget type: {0}")]
    UnknownWidgetType(String),

    /// Settings payload does not belong to the widget's type
    #[error("settings for widget {widget} must be {expected} settings")]
    SettingsMismatch {
        /// Widget that rejected the settings
        widget: String,
        /// Type the settings should have matched
        expected: WidgetType,
    },

    /// An operation was attempted that is not valid in the current state
    #[error("invalid operation '{op}': {reason}")]
    InvalidOperation {
        /// The operation that was attempted
        op: &'static str,
        /// Why the operation failed
        reason: &'static str,
    },

    /// JSON serialization or deserialization failed
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Persistence operation failed
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl From<serde_json::Error> for DesktopError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DesktopError::WindowNotFound("w-1".to_string());
        assert_eq!(err.to_string(), "window not found: w-1");

        let err = DesktopError::UnknownApp("photoshop".to_string());
        assert_eq!(err.to_string(), "unknown app: photoshop");

        let err = DesktopError::SettingsMismatch {
            widget: "abc".to_string(),
            expected: WidgetType::AnalogClock,
        };
        assert_eq!(
            err.to_string(),
            "settings for widget abc must be analog-clock settings"
        );

        let err = DesktopError::InvalidOperation {
            op: "maximize_window",
            reason: "window is minimized",
        };
        assert_eq!(
            err.to_string(),
            "invalid operation 'maximize_window': window is minimized"
        );
    }

    #[test]
    fn test_error_from_serde() {
        let parse: Result<u32, _> = serde_json::from_str("not json");
        let err: DesktopError = parse.unwrap_err().into();
        assert!(matches!(err, DesktopError::Serialization(_)));
    }
}

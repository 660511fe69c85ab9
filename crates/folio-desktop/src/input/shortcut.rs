//! Keyboard shortcuts routed to the topmost window

/// Window command bound to a key chord
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Meta + W
    Close,
    /// Ctrl/Meta + M
    Minimize,
    /// Ctrl/Meta + ArrowUp
    Maximize,
}

impl Shortcut {
    /// Decode a `KeyboardEvent.key` plus modifier state
    ///
    /// Ctrl and Meta are interchangeable so the same chords work on every
    /// platform.
    pub fn from_key(key: &str, ctrl: bool, meta: bool) -> Option<Shortcut> {
        if !(ctrl || meta) {
            return None;
        }
        match key {
            "w" | "W" => Some(Shortcut::Close),
            "m" | "M" => Some(Shortcut::Minimize),
            "ArrowUp" => Some(Shortcut::Maximize),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chords() {
        assert_eq!(Shortcut::from_key("w", true, false), Some(Shortcut::Close));
        assert_eq!(Shortcut::from_key("W", false, true), Some(Shortcut::Close));
        assert_eq!(Shortcut::from_key("m", true, false), Some(Shortcut::Minimize));
        assert_eq!(Shortcut::from_key("ArrowUp", false, true), Some(Shortcut::Maximize));
    }

    #[test]
    fn test_requires_modifier() {
        assert_eq!(Shortcut::from_key("w", false, false), None);
        assert_eq!(Shortcut::from_key("ArrowDown", true, false), None);
    }
}

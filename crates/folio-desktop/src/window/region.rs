//! Window region for hit testing

/// Region of a window under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// Header area (drag handle)
    TitleBar,
    /// Content area
    Content,
    /// Close button
    CloseButton,
    /// Minimize button
    MinimizeButton,
    /// Maximize button
    MaximizeButton,
    /// Bottom-right resize corner
    ResizeHandle,
}

impl WindowRegion {
    /// Check if this is one of the header buttons
    #[inline]
    pub fn is_button(&self) -> bool {
        matches!(
            self,
            WindowRegion::CloseButton | WindowRegion::MinimizeButton | WindowRegion::MaximizeButton
        )
    }

    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::TitleBar => "grab",
            WindowRegion::Content => "default",
            WindowRegion::CloseButton
            | WindowRegion::MinimizeButton
            | WindowRegion::MaximizeButton => "pointer",
            WindowRegion::ResizeHandle => "nwse-resize",
        }
    }
}

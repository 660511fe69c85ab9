//! Window chrome metrics used for hit testing

/// Window chrome metrics (header, traffic-light buttons, resize corner)
pub struct WindowChrome {
    pub header_height: f32,
    pub button_size: f32,
    pub button_spacing: f32,
    pub button_margin: f32,
    pub resize_handle_size: f32,
}

/// Chrome metrics matching the rendered window frame
pub const WINDOW_CHROME: WindowChrome = WindowChrome {
    header_height: 40.0,
    button_size: 12.0,
    button_spacing: 8.0,
    button_margin: 14.0,
    resize_handle_size: 16.0,
};

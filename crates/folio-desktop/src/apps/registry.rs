//! Registered applications

use serde::Serialize;

use crate::math::Size;

/// A launchable application
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDefinition {
    /// Stable identifier used by the dock and `open_window`
    pub id: &'static str,
    /// Window title and dock label
    pub name: &'static str,
    /// Icon asset name
    pub icon: &'static str,
    pub default_size: Size,
    pub min_size: Size,
    pub resizable: bool,
    pub draggable: bool,
}

/// Built-in applications in dock order
pub static APPS: &[AppDefinition] = &[
    AppDefinition {
        id: "about",
        name: "About Me",
        icon: "user",
        default_size: Size::new(800.0, 600.0),
        min_size: Size::new(400.0, 300.0),
        resizable: true,
        draggable: true,
    },
    AppDefinition {
        id: "projects",
        name: "Projects",
        icon: "folder",
        default_size: Size::new(960.0, 640.0),
        min_size: Size::new(480.0, 360.0),
        resizable: true,
        draggable: true,
    },
    AppDefinition {
        id: "skills",
        name: "Skills",
        icon: "chart",
        default_size: Size::new(720.0, 560.0),
        min_size: Size::new(400.0, 320.0),
        resizable: true,
        draggable: true,
    },
    AppDefinition {
        id: "contact",
        name: "Contact",
        icon: "mail",
        default_size: Size::new(560.0, 620.0),
        min_size: Size::new(360.0, 480.0),
        resizable: true,
        draggable: true,
    },
    AppDefinition {
        id: "resume",
        name: "Resume",
        icon: "document",
        default_size: Size::new(720.0, 820.0),
        min_size: Size::new(420.0, 500.0),
        resizable: true,
        draggable: true,
    },
    AppDefinition {
        id: "terminal",
        name: "Terminal",
        icon: "terminal",
        default_size: Size::new(720.0, 440.0),
        min_size: Size::new(360.0, 220.0),
        resizable: true,
        draggable: true,
    },
    AppDefinition {
        id: "snake",
        name: "Snake",
        icon: "gamepad",
        default_size: Size::new(480.0, 540.0),
        min_size: Size::new(480.0, 540.0),
        resizable: false,
        draggable: true,
    },
    AppDefinition {
        id: "settings",
        name: "Settings",
        icon: "gear",
        default_size: Size::new(640.0, 480.0),
        min_size: Size::new(480.0, 360.0),
        resizable: false,
        draggable: true,
    },
];

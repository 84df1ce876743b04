use serde::{Deserialize, Serialize};

/// Window and frame-reporting options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayOptions {
    /// Window title.
    pub title: String,
    /// Initial window width in logical pixels.
    pub width: u32,
    /// Initial window height in logical pixels.
    pub height: u32,
    /// Log the average ms/frame once per second.
    pub report_frame_time: bool,
    /// Wait for vertical blank when presenting.
    pub vsync: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            title: "Orbit View".into(),
            width: 1024,
            height: 768,
            report_frame_time: true,
            vsync: true,
        }
    }
}

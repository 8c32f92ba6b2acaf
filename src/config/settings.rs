//! Window and plot settings
//!
//! These are the values a user may override in `config.toml`. Every field has
//! a serde default, so a partial file only changes what it names.
//!
//! # Main Types
//!
//! - [`WindowConfig`] - Title, size and theme of the native window
//! - [`PlotConfig`] - Fill resolution, colours and line styling

use serde::Deserialize;

/// Default window title
pub const DEFAULT_TITLE: &str = "Region Tracker";

/// Default edge length of the square plot area in logical pixels
pub const DEFAULT_WINDOW_SIZE: f32 = 500.0;

/// Default number of samples across the plot width for the highlight fill
pub const DEFAULT_SAMPLES: usize = 51;

/// Default highlight colour (light pink)
pub const DEFAULT_HIGHLIGHT_COLOR: [u8; 4] = [255, 182, 193, 255];

/// Default dividing line colour (cornflower blue)
pub const DEFAULT_LINE_COLOR: [u8; 4] = [100, 149, 237, 255];

/// Native window settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WindowConfig {
    /// Window title
    #[serde(default = "default_title")]
    pub title: String,

    /// Edge length of the square plot area
    #[serde(default = "default_window_size")]
    pub size: f32,

    /// Use dark visuals
    #[serde(default = "default_true")]
    pub dark_mode: bool,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_window_size() -> f32 {
    DEFAULT_WINDOW_SIZE
}

fn default_true() -> bool {
    true
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            size: DEFAULT_WINDOW_SIZE,
            dark_mode: true,
        }
    }
}

/// Plot rendering settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlotConfig {
    /// Samples across `[-1, 1]` used to build the highlight fill
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Highlight fill colour (RGBA)
    #[serde(default = "default_highlight_color")]
    pub highlight_color: [u8; 4],

    /// Dividing line colour (RGBA)
    #[serde(default = "default_line_color")]
    pub line_color: [u8; 4],

    /// Dividing line width
    #[serde(default = "default_line_width")]
    pub line_width: f32,

    /// Show the background grid
    #[serde(default = "default_true")]
    pub show_grid: bool,
}

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

fn default_highlight_color() -> [u8; 4] {
    DEFAULT_HIGHLIGHT_COLOR
}

fn default_line_color() -> [u8; 4] {
    DEFAULT_LINE_COLOR
}

fn default_line_width() -> f32 {
    1.5
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            highlight_color: DEFAULT_HIGHLIGHT_COLOR,
            line_color: DEFAULT_LINE_COLOR,
            line_width: default_line_width(),
            show_grid: true,
        }
    }
}

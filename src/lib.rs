//! # Region Tracker
//!
//! Renders the square `[-1, 1] x [-1, 1]` cut into six wedges by two diagonals
//! and a vertical line through the origin, and highlights the wedge under the
//! mouse cursor as it moves.
//!
//! ## Architecture
//!
//! - **Geometry**: Dividing lines, point classification and fill bounds, all pure
//! - **Frontend**: eframe/egui window with an egui_plot surface and a status bar
//! - **Config**: Optional read-only TOML overrides for window and plot styling
//!
//! ## Example
//!
//! ```
//! use region_tracker::{classify, Point, Region};
//!
//! assert_eq!(classify(Some(Point::new(0.5, 0.9))), Region::TopRight);
//! assert_eq!(classify(None), Region::None);
//! ```

pub mod config;
pub mod error;
pub mod frontend;
pub mod geometry;
pub mod types;

// Re-export commonly used types
pub use config::TrackerConfig;
pub use error::{RegionTrackerError, Result};
pub use frontend::{RegionTrackerApp, ViewState};
pub use geometry::{classify, classify_xy, fill_bounds, FillBounds, Highlight};
pub use types::{Point, Region};

//! Geometry of the partitioned square
//!
//! The plot square `[-1, 1] x [-1, 1]` is cut by three lines through the
//! origin into six wedges:
//!
//! - **Right diagonal**: `y = cos(60°) * x`
//! - **Left diagonal**: `y = -cos(60°) * x`
//! - **Vertical divider**: `x = 0`
//!
//! # Main Types
//!
//! - [`classify`] - Map a pointer position to a [`Region`](crate::types::Region)
//! - [`FillBounds`] - Sampled lower/upper curves used to shade a region
//! - [`Highlight`] - The single shaded area owned by the view

pub mod classifier;
pub mod fill;
pub mod lines;

pub use classifier::{classify, classify_xy};
pub use fill::{fill_bounds, linspace, Curve, FillBounds, FillSpec, Highlight, XFilter};
pub use lines::{diagonal_slope, line_left, line_right};

/// Lower edge of the plot square on both axes
pub const PLOT_MIN: f64 = -1.0;

/// Upper edge of the plot square on both axes
pub const PLOT_MAX: f64 = 1.0;

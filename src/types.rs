//! Core data types for Region Tracker
//!
//! This module contains the plain value types shared by the geometry and the
//! frontend: pointer positions in plot space and the region identifiers the
//! classifier produces.

use std::fmt;

/// A position in plot-data space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are usable numbers
    ///
    /// NaN coordinates are treated like a pointer outside the plot.
    pub fn is_defined(&self) -> bool {
        !self.x.is_nan() && !self.y.is_nan()
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// One of the six wedges around the origin, or `None` when nothing is hovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    /// Right of the vertical divider and above the right diagonal
    TopRight,
    /// Between the two diagonals, right of the origin
    Right,
    /// Right of the vertical divider and below the left diagonal
    BottomRight,
    /// Left of the vertical divider and below the right diagonal
    BottomLeft,
    /// Between the two diagonals, left of the origin
    Left,
    /// Left of the vertical divider and above the left diagonal
    TopLeft,
    /// Pointer is outside the plot
    #[default]
    None,
}

impl Region {
    /// Get the display name for this region
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::TopRight => "Top right",
            Region::Right => "Right",
            Region::BottomRight => "Bottom right",
            Region::BottomLeft => "Bottom left",
            Region::Left => "Left",
            Region::TopLeft => "Top left",
            Region::None => "None",
        }
    }

    /// Region number, counted clockwise from the top right wedge starting at 1
    pub fn number(&self) -> Option<u8> {
        match self {
            Region::TopRight => Some(1),
            Region::Right => Some(2),
            Region::BottomRight => Some(3),
            Region::BottomLeft => Some(4),
            Region::Left => Some(5),
            Region::TopLeft => Some(6),
            Region::None => None,
        }
    }

    /// Whether this is one of the six wedges
    pub fn is_some(&self) -> bool {
        !matches!(self, Region::None)
    }

    /// All six wedges in clockwise order, excluding `None`
    pub fn wedges() -> &'static [Region] {
        &[
            Region::TopRight,
            Region::Right,
            Region::BottomRight,
            Region::BottomLeft,
            Region::Left,
            Region::TopLeft,
        ]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

//! Point-in-region classification
//!
//! Three predicates are evaluated for a point `(x, y)`:
//!
//! - `above_right`: `y > line_right(x)`
//! - `above_left`: `y > line_left(x)`
//! - `right_of_vertical`: `x > 0`
//!
//! The branches below are checked in a fixed order and the first match wins.
//! They overlap, so the order decides which wedge owns the points lying on a
//! dividing line. Keep it as is.

use super::lines::{line_left, line_right};
use crate::types::{Point, Region};

/// Classify a pointer position, `None` meaning the pointer is outside the plot
pub fn classify(point: Option<Point>) -> Region {
    match point {
        Some(p) if p.is_defined() => classify_xy(p.x, p.y),
        _ => Region::None,
    }
}

/// Classify a defined position in plot space
///
/// Comparisons are strict, so a point exactly on a line belongs to the wedge
/// on its "not greater" side.
pub fn classify_xy(x: f64, y: f64) -> Region {
    let above_right = y > line_right(x);
    let above_left = y > line_left(x);
    let right_of_vertical = x > 0.0;

    if right_of_vertical && above_right {
        Region::TopRight
    } else if !above_right && above_left {
        Region::Right
    } else if !above_left && right_of_vertical {
        Region::BottomRight
    } else if !right_of_vertical && !above_right {
        Region::BottomLeft
    } else if above_right && !above_left {
        Region::Left
    } else if !right_of_vertical && above_left {
        Region::TopLeft
    } else {
        Region::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_point_per_wedge() {
        assert_eq!(classify_xy(0.5, 0.9), Region::TopRight);
        assert_eq!(classify_xy(0.5, 0.1), Region::Right);
        assert_eq!(classify_xy(0.5, -0.9), Region::BottomRight);
        assert_eq!(classify_xy(-0.5, -0.9), Region::BottomLeft);
        assert_eq!(classify_xy(-0.5, 0.1), Region::Left);
        assert_eq!(classify_xy(-0.5, 0.9), Region::TopLeft);
    }

    #[test]
    fn test_undefined_pointer() {
        assert_eq!(classify(None), Region::None);
        assert_eq!(classify(Some(Point::new(f64::NAN, 0.5))), Region::None);
        assert_eq!(classify(Some(Point::new(0.5, f64::NAN))), Region::None);
    }

    #[test]
    fn test_points_on_lines_use_the_lower_side() {
        // On the right diagonal: not above it
        assert_eq!(classify_xy(1.0, 0.5), Region::Right);
        assert_eq!(classify_xy(0.6, line_right(0.6)), Region::Right);
        // On the left diagonal, right half: not above it
        assert_eq!(classify_xy(0.6, line_left(0.6)), Region::BottomRight);
        // On the left diagonal, left half
        assert_eq!(classify_xy(-0.6, line_left(-0.6)), Region::Left);
        // On the right diagonal, left half
        assert_eq!(classify_xy(-0.6, line_right(-0.6)), Region::BottomLeft);
    }

    #[test]
    fn test_vertical_divider() {
        assert_eq!(classify_xy(0.0, 0.5), Region::TopLeft);
        assert_eq!(classify_xy(0.0, -0.5), Region::BottomLeft);
        assert_eq!(classify_xy(0.0, 0.0), Region::BottomLeft);
    }
}

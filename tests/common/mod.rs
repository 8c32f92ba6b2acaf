//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;

use region_tracker::geometry::{line_left, line_right};
use region_tracker::Region;

/// Assert two floats are approximately equal
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64) {
    assert!(
        (a - b).abs() < epsilon,
        "Expected {} to be approximately equal to {} (epsilon: {})",
        a,
        b,
        epsilon
    );
}

/// Wedge a point belongs to, written as six disjoint half-plane intersections
pub fn expected_region(x: f64, y: f64) -> Region {
    let right = line_right(x);
    let left = line_left(x);
    if x > 0.0 {
        if y > right {
            Region::TopRight
        } else if y > left {
            Region::Right
        } else {
            Region::BottomRight
        }
    } else if y > left {
        Region::TopLeft
    } else if y > right {
        Region::Left
    } else {
        Region::BottomLeft
    }
}

/// Average of a polygon's vertices
pub fn vertex_mean(polygon: &[[f64; 2]]) -> [f64; 2] {
    let n = polygon.len() as f64;
    let (sx, sy) = polygon
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p[0], sy + p[1]));
    [sx / n, sy / n]
}

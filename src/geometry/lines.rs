//! Dividing line equations

/// Angle used to derive the slope of both diagonals
pub const DIAGONAL_ANGLE_DEG: f64 = 60.0;

/// Slope of the right diagonal, `cos(60°)`
///
/// Rounds to slightly above `0.5` in `f64`. Points are classified against
/// this value, not against an exact half.
pub fn diagonal_slope() -> f64 {
    DIAGONAL_ANGLE_DEG.to_radians().cos()
}

/// Right diagonal, rising to the right through the origin
pub fn line_right(x: f64) -> f64 {
    diagonal_slope() * x
}

/// Left diagonal, the mirror image of [`line_right`]
pub fn line_left(x: f64) -> f64 {
    -diagonal_slope() * x
}

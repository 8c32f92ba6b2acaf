//! Fill bounds for highlighting a region
//!
//! Each wedge is shaded as the vertical band between two curves over a
//! restricted x domain, sampled on an evenly spaced grid across the plot.
//!
//! | Region      | Lower        | Upper        | x filter |
//! |-------------|--------------|--------------|----------|
//! | TopRight    | right line   | top edge     | x >= 0   |
//! | Right       | left line    | right line   | x >= 0   |
//! | BottomRight | bottom edge  | left line    | x >= 0   |
//! | BottomLeft  | bottom edge  | right line   | x <= 0   |
//! | Left        | left line    | right line   | x <= 0   |
//! | TopLeft     | left line    | top edge     | x <= 0   |

use super::lines::{line_left, line_right};
use super::{PLOT_MAX, PLOT_MIN};
use crate::types::Region;

/// A boundary curve of a shaded band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    /// The right diagonal
    LineRight,
    /// The left diagonal
    LineLeft,
    /// `y = 1`
    Top,
    /// `y = -1`
    Bottom,
}

impl Curve {
    /// Evaluate the curve at `x`
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Curve::LineRight => line_right(x),
            Curve::LineLeft => line_left(x),
            Curve::Top => PLOT_MAX,
            Curve::Bottom => PLOT_MIN,
        }
    }
}

/// Which half of the x domain a band covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XFilter {
    /// `x >= 0`
    NonNegative,
    /// `x <= 0`
    NonPositive,
}

impl XFilter {
    pub fn accepts(&self, x: f64) -> bool {
        match self {
            XFilter::NonNegative => x >= 0.0,
            XFilter::NonPositive => x <= 0.0,
        }
    }
}

/// How a region is shaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillSpec {
    pub lower: Curve,
    pub upper: Curve,
    pub filter: XFilter,
}

impl FillSpec {
    /// Get the fill description for a region, `None` for [`Region::None`]
    pub fn for_region(region: Region) -> Option<Self> {
        let (lower, upper, filter) = match region {
            Region::TopRight => (Curve::LineRight, Curve::Top, XFilter::NonNegative),
            Region::Right => (Curve::LineLeft, Curve::LineRight, XFilter::NonNegative),
            Region::BottomRight => (Curve::Bottom, Curve::LineLeft, XFilter::NonNegative),
            Region::BottomLeft => (Curve::Bottom, Curve::LineRight, XFilter::NonPositive),
            Region::Left => (Curve::LineLeft, Curve::LineRight, XFilter::NonPositive),
            Region::TopLeft => (Curve::LineLeft, Curve::Top, XFilter::NonPositive),
            Region::None => return None,
        };
        Some(Self {
            lower,
            upper,
            filter,
        })
    }
}

/// `n` evenly spaced values from `start` to `end`, both ends included
///
/// With an odd `n` over `[-1, 1]` the midpoint lands exactly on `0.0`.
pub fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| {
        if n > 1 && i == n - 1 {
            end
        } else {
            start + step * i as f64
        }
    })
}

/// Sampled band between two curves
#[derive(Debug, Clone, PartialEq)]
pub struct FillBounds {
    /// Sample positions that passed the x filter, ascending
    pub xs: Vec<f64>,
    /// Lower curve evaluated at each sample
    pub lower: Vec<f64>,
    /// Upper curve evaluated at each sample
    pub upper: Vec<f64>,
}

impl FillBounds {
    /// Sample a fill description over the plot width
    pub fn sample(spec: &FillSpec, samples: usize) -> Self {
        let xs: Vec<f64> = linspace(PLOT_MIN, PLOT_MAX, samples)
            .filter(|&x| spec.filter.accepts(x))
            .collect();
        let lower = xs.iter().map(|&x| spec.lower.eval(x)).collect();
        let upper = xs.iter().map(|&x| spec.upper.eval(x)).collect();
        Self { xs, lower, upper }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Closed outline of the band: upper curve left to right, then the lower
    /// curve back right to left
    pub fn polygon(&self) -> Vec<[f64; 2]> {
        let upper = self.xs.iter().zip(&self.upper).map(|(&x, &y)| [x, y]);
        let lower = self
            .xs
            .iter()
            .zip(&self.lower)
            .rev()
            .map(|(&x, &y)| [x, y]);
        upper.chain(lower).collect()
    }
}

/// Compute the fill bounds for a region
pub fn fill_bounds(region: Region, samples: usize) -> Option<FillBounds> {
    FillSpec::for_region(region).map(|spec| FillBounds::sample(&spec, samples))
}

/// The shaded area drawn for the hovered region
///
/// The view holds at most one of these. It is rebuilt on every pointer event
/// and the previous one is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    region: Region,
    bounds: FillBounds,
    polygon: Vec<[f64; 2]>,
}

impl Highlight {
    /// Build the highlight for a region, `None` when nothing should be shaded
    pub fn for_region(region: Region, samples: usize) -> Option<Self> {
        let bounds = fill_bounds(region, samples)?;
        if bounds.is_empty() {
            return None;
        }
        let polygon = bounds.polygon();
        Some(Self {
            region,
            bounds,
            polygon,
        })
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn bounds(&self) -> &FillBounds {
        &self.bounds
    }

    /// Outline vertices in plot coordinates
    pub fn polygon(&self) -> &[[f64; 2]] {
        &self.polygon
    }
}

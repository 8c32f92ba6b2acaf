//! View state driven by pointer motion
//!
//! Holds the last pointer position, the region it classified to and the one
//! highlight the plot draws. Kept free of egui types so it can be exercised
//! without a window.

use crate::geometry::{classify, Highlight};
use crate::types::{Point, Region};

/// Mutable state of the interactive view
#[derive(Debug, Clone)]
pub struct ViewState {
    samples: usize,
    pointer: Option<Point>,
    region: Region,
    highlight: Option<Highlight>,
}

impl ViewState {
    /// Create a view state that samples highlight fills at `samples` points
    pub fn new(samples: usize) -> Self {
        Self {
            samples,
            pointer: None,
            region: Region::None,
            highlight: None,
        }
    }

    /// Handle a pointer motion event
    ///
    /// Always drops the current highlight before installing the one for the
    /// newly classified region. Returns `true` when the hovered region
    /// changed and the surface needs a repaint.
    pub fn on_pointer_motion(&mut self, pointer: Option<Point>) -> bool {
        let region = classify(pointer);
        let changed = region != self.region;

        self.pointer = pointer.filter(Point::is_defined);
        drop(self.highlight.take());
        self.highlight = Highlight::for_region(region, self.samples);

        if changed {
            tracing::debug!("Hovered region changed: {} -> {}", self.region, region);
        }
        self.region = region;
        changed
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn highlight(&self) -> Option<&Highlight> {
        self.highlight.as_ref()
    }

    pub fn samples(&self) -> usize {
        self.samples
    }
}

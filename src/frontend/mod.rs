//! Frontend module for egui UI
//!
//! This module hosts the interactive view on eframe/egui. Each frame the plot
//! reads the pointer position, classifies it, replaces the highlight and
//! draws the result.
//!
//! # Main Types
//!
//! - [`RegionTrackerApp`] - Main application state implementing [`eframe::App`]
//! - [`ViewState`] - Pointer, hovered region and current highlight
//!
//! # Submodules
//!
//! - `plot` - Plot rendering with egui_plot
//! - `state` - Pointer-driven view state
//! - `status_bar` - Bottom bar with region name and coordinates

pub mod plot;
pub mod state;
pub mod status_bar;

pub use plot::{color_from_rgba, render_region_plot};
pub use state::ViewState;
pub use status_bar::{render_status_bar, StatusBarContext};

use crate::config::TrackerConfig;

/// Main application state
pub struct RegionTrackerApp {
    config: TrackerConfig,
    state: ViewState,
}

impl RegionTrackerApp {
    /// Create the app from a loaded configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, config: TrackerConfig) -> Self {
        Self::from_config(config)
    }

    /// Create the app without a rendering context
    pub fn from_config(config: TrackerConfig) -> Self {
        let state = ViewState::new(config.plot.samples);
        tracing::debug!("View created with {} fill samples", config.plot.samples);
        Self { config, state }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }
}

impl eframe::App for RegionTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let status = StatusBarContext {
                state: &self.state,
                highlight_color: color_from_rgba(self.config.plot.highlight_color),
            };
            render_status_bar(ui, &status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if render_region_plot(ui, &mut self.state, &self.config.plot) {
                ctx.request_repaint();
            }
        });
    }
}

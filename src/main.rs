//! Region Tracker - Main Entry Point
//!
//! Opens a square plot split into six wedges and highlights the one under the
//! mouse cursor.

use region_tracker::{config::TrackerConfig, frontend::RegionTrackerApp};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Height reserved below the plot for the status bar
const STATUS_BAR_HEIGHT: f32 = 28.0;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,region_tracker=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Region Tracker");

    let config = TrackerConfig::load_or_default();
    let title = config.window.title.clone();
    let size = config.window.size;
    let dark_mode = config.window.dark_mode;

    // Square plot area plus the status bar underneath
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([size, size + STATUS_BAR_HEIGHT])
            .with_min_inner_size([200.0, 200.0 + STATUS_BAR_HEIGHT])
            .with_title(title.clone()),
        ..Default::default()
    };

    let result = eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| {
            if dark_mode {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
            } else {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
            }

            Ok(Box::new(RegionTrackerApp::new(cc, config)))
        }),
    );

    tracing::info!("Shutting down...");

    result
}

//! Plot rendering using egui_plot
//!
//! Draws the fixed `[-1, 1] x [-1, 1]` square with its three dividing lines
//! and the highlight of the hovered region. Zoom, drag and scroll are
//! disabled so plot coordinates stay aligned with the wedges.

use crate::config::PlotConfig;
use crate::frontend::state::ViewState;
use crate::geometry::{line_left, line_right, PLOT_MAX, PLOT_MIN};
use crate::types::Point;
use egui::{Color32, Stroke, Ui};
use egui_plot::{Line, Plot, PlotBounds, PlotPoint, PlotPoints, PlotResponse, Polygon, VLine};

impl From<PlotPoint> for Point {
    fn from(p: PlotPoint) -> Self {
        Point::new(p.x, p.y)
    }
}

/// Convert an RGBA config value to an egui colour
pub fn color_from_rgba(rgba: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// Whether a plot coordinate lies on the `[-1, 1] x [-1, 1]` surface
fn on_surface(p: &Point) -> bool {
    (PLOT_MIN..=PLOT_MAX).contains(&p.x) && (PLOT_MIN..=PLOT_MAX).contains(&p.y)
}

/// Endpoints of a dividing line clipped to the plot width
fn diagonal_points(line: fn(f64) -> f64) -> PlotPoints<'static> {
    PlotPoints::from(vec![
        [PLOT_MIN, line(PLOT_MIN)],
        [PLOT_MAX, line(PLOT_MAX)],
    ])
}

/// Render the region plot and feed the pointer position into `state`
///
/// Returns `true` when the hovered region changed this frame.
pub fn render_region_plot(ui: &mut Ui, state: &mut ViewState, config: &PlotConfig) -> bool {
    show_region_plot(ui, state, config).inner
}

/// Like [`render_region_plot`], but hands back the full plot response
pub fn show_region_plot(
    ui: &mut Ui,
    state: &mut ViewState,
    config: &PlotConfig,
) -> PlotResponse<bool> {
    let line_color = color_from_rgba(config.line_color);
    let highlight_color = color_from_rgba(config.highlight_color);

    // No data_aspect: it would stretch the y range past the fixed bounds
    let plot = Plot::new("region_plot")
        .view_aspect(1.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show_grid(config.show_grid)
        .include_x(PLOT_MIN)
        .include_x(PLOT_MAX)
        .include_y(PLOT_MIN)
        .include_y(PLOT_MAX);

    plot.show(ui, |plot_ui| {
        plot_ui.set_plot_bounds(PlotBounds::from_min_max(
            [PLOT_MIN, PLOT_MIN],
            [PLOT_MAX, PLOT_MAX],
        ));
        plot_ui.set_auto_bounds(egui::Vec2b::new(false, false));

        // pointer_coordinate() maps the pointer anywhere in the window, so
        // only trust it while the plot frame itself is hovered
        let pointer = if plot_ui.response().hovered() {
            plot_ui
                .pointer_coordinate()
                .map(Point::from)
                .filter(on_surface)
        } else {
            None
        };

        // Classify before drawing so the highlight matches this frame's pointer
        let changed = state.on_pointer_motion(pointer);

        if let Some(highlight) = state.highlight() {
            let polygon = Polygon::new(
                highlight.region().display_name(),
                PlotPoints::from(highlight.polygon().to_vec()),
            )
            .fill_color(highlight_color)
            .stroke(Stroke::NONE);
            plot_ui.polygon(polygon);
        }

        plot_ui.line(
            Line::new("Right diagonal", diagonal_points(line_right))
                .color(line_color)
                .width(config.line_width),
        );
        plot_ui.line(
            Line::new("Left diagonal", diagonal_points(line_left))
                .color(line_color)
                .width(config.line_width),
        );
        plot_ui.vline(
            VLine::new("Vertical", 0.0)
                .color(line_color)
                .width(config.line_width),
        );

        changed
    })
}

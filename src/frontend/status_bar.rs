//! Status bar panel: bottom bar showing the hovered region and pointer position.

use egui::{Color32, RichText, Ui};

use crate::frontend::state::ViewState;

/// Context needed to render the status bar.
pub struct StatusBarContext<'a> {
    pub state: &'a ViewState,
    pub highlight_color: Color32,
}

/// Text for the pointer position, or "outside" when it is off the plot
pub fn pointer_text(state: &ViewState) -> String {
    match state.pointer() {
        Some(p) => format!("x: {:+.3}  y: {:+.3}", p.x, p.y),
        None => "outside".to_string(),
    }
}

/// Text for the hovered region
pub fn region_text(state: &ViewState) -> String {
    let region = state.region();
    match region.number() {
        Some(n) => format!("Region {}: {}", n, region),
        None => "No region".to_string(),
    }
}

/// Render the status bar.
pub fn render_status_bar(ui: &mut Ui, ctx: &StatusBarContext<'_>) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let dot_color = if ctx.state.region().is_some() {
            ctx.highlight_color
        } else {
            Color32::GRAY
        };
        ui.colored_label(dot_color, "●");
        ui.label(RichText::new(region_text(ctx.state)).small());

        ui.separator();

        ui.label(RichText::new(pointer_text(ctx.state)).small().monospace());
    });
}

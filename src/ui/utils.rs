use eframe::egui::{Context, Visuals};

use crate::ui::config::UI_CONFIG;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    // Customize the dark theme
    visuals.window_fill = UI_CONFIG.colors.panel;
    visuals.panel_fill = UI_CONFIG.colors.panel;

    // Make the data lines stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.value;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.value;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.header;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.header;

    // Set the custom visuals
    ctx.set_visuals(visuals);
}

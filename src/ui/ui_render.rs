use eframe::egui::{CentralPanel, Context, Frame, Margin, ViewportCommand, WindowLevel};

use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;

use super::app::HudApp;

#[cfg(debug_assertions)]
use crate::config::PRINT_UI_INTERACTIONS;

impl HudApp {
    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.panel)
            .inner_margin(Margin::same(8));
        CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
            ui.spacing_mut().item_spacing.y = UI_CONFIG.line_spacing;

            ui.label_header(self.display.header.as_str());
            ui.label_value(self.display.prediction.as_str());
            ui.label_value(self.display.next_action.as_str());
            ui.label_value(self.display.est_price.as_str());

            ui.add_space(6.0);
            let mut pinned = self.pinned;
            if ui.checkbox(&mut pinned, UI_TEXT.pin_checkbox).changed() {
                self.set_pinned(ctx, pinned);
            }
        });
    }

    /// Applies the always-on-top attribute. Independent of polling.
    pub(super) fn set_pinned(&mut self, ctx: &Context, pinned: bool) {
        self.pinned = pinned;
        let level = if pinned {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };
        ctx.send_viewport_cmd(ViewportCommand::WindowLevel(level));

        #[cfg(debug_assertions)]
        if PRINT_UI_INTERACTIONS {
            log::info!("Pin toggled: always-on-top = {}", pinned);
        }
    }
}

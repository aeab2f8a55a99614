use eframe::egui::{RichText, Ui};

use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders the bold header line (symbol, timeframe, bar time).
    fn label_header(&mut self, text: impl Into<String>);

    /// Renders a monospace data line in the configured value color.
    fn label_value(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_header(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).strong().color(UI_CONFIG.colors.header));
    }

    fn label_value(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).monospace().color(UI_CONFIG.colors.value));
    }
}

use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub header: Color32,
    pub value: Color32,
    pub panel: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub line_spacing: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        header: Color32::from_rgb(235, 235, 210),
        value: Color32::from_rgb(180, 200, 180),
        panel: Color32::from_rgb(25, 25, 25),
    },
    line_spacing: 4.0,
};

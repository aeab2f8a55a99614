//! HUD runtime configuration

use std::time::Duration;

/// Settings for the status file poll loop
pub struct PollSettings {
    // Wall-clock delay between refresh attempts
    pub interval: Duration,
}

/// The master HUD configuration
pub struct HudConfig {
    /// Name of the status file the expert advisor rewrites each bar
    pub status_file_name: &'static str,
    /// Conventional export location checked under the working directory
    /// when no directory argument is given
    pub default_export_subdir: &'static [&'static str],
    /// Fixed window size: four text lines plus the pin checkbox
    pub window_size: [f32; 2],

    // Sub-groups
    pub poll: PollSettings,
}

pub const HUD: HudConfig = HudConfig {
    status_file_name: "hud_status.json",
    default_export_subdir: &["MQL5", "Files"],
    window_size: [340.0, 140.0],

    poll: PollSettings {
        interval: Duration::from_millis(500),
    },
};

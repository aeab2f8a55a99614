//! Configuration module for the HUD application.

mod debug; // Can be private now because we have public re-exports. Forces files to use crate::config::PRINT_... not crate::config::debug::PRINT_...
pub use debug::{PRINT_REFRESH_OUTCOMES, PRINT_UI_INTERACTIONS};

pub mod hud;

// Re-export commonly used items
pub use hud::HUD;

// Core modules
pub mod config;
pub mod data;
pub mod ui;

// Re-export commonly used types
pub use data::{RefreshOutcome, StatusSnapshot, StatusWatcher, resolve_files_dir};
pub use ui::HudApp;

// CLI argument parsing
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the status file exported by the expert advisor.
    /// Defaults to ./MQL5/Files when that directory exists, else the
    /// current working directory.
    pub files_dir: Option<PathBuf>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, files_dir: PathBuf) -> Box<dyn eframe::App> {
    let app = ui::HudApp::new(cc, files_dir);
    Box::new(app)
}

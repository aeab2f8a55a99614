#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use eframe::NativeOptions;
use eframe::egui::{ViewportBuilder, WindowLevel};

use fx_hud::config::HUD;
use fx_hud::ui::config::UI_TEXT;
use fx_hud::{Cli, resolve_files_dir, run_app};

fn main() -> eframe::Result {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Resolve the directory the expert advisor exports into
    let cwd = std::env::current_dir().expect("Failed to read current working directory");
    let files_dir = resolve_files_dir(args.files_dir.as_deref(), &cwd);
    log::info!(
        "Watching {} for status updates",
        files_dir.join(HUD.status_file_name).display()
    );

    // D. Run Native App
    // The window starts pinned, matching the default state of the checkbox.
    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(HUD.window_size)
            .with_resizable(false)
            .with_window_level(WindowLevel::AlwaysOnTop),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, files_dir))),
    )
}

// Status file model and polling
pub mod status;
pub mod watcher;

// Re-export commonly used types
pub use status::{NextAction, Prediction, PriceField, Side, StatusSnapshot};
pub use watcher::{RefreshOutcome, StatusWatcher, resolve_files_dir};

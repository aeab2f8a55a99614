//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. All of these are further gated by
//! `cfg(debug_assertions)` at the call sites.

/// Emit a log line for every refresh outcome, including no-op ticks.
pub const PRINT_REFRESH_OUTCOMES: bool = false;

/// Emit UI interaction logs (e.g., pin toggling).
pub const PRINT_UI_INTERACTIONS: bool = true;

use std::path::PathBuf;
use std::time::Instant;

use eframe::{Frame, egui};

use crate::config::HUD;
use crate::data::status::StatusSnapshot;
use crate::data::watcher::{RefreshOutcome, StatusWatcher};
use crate::ui::config::UI_TEXT;
use crate::ui::utils::setup_custom_visuals;

#[cfg(debug_assertions)]
use crate::config::PRINT_REFRESH_OUTCOMES;

/// The text currently rendered on each of the four label lines.
///
/// Owned by [`HudApp`] and mutated only from the UI thread. A refresh that
/// yields no new snapshot leaves every line untouched.
pub struct DisplayState {
    pub header: String,
    pub prediction: String,
    pub next_action: String,
    pub est_price: String,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            header: UI_TEXT.placeholder.to_string(),
            prediction: UI_TEXT.placeholder.to_string(),
            next_action: UI_TEXT.placeholder.to_string(),
            est_price: UI_TEXT.placeholder.to_string(),
        }
    }
}

impl DisplayState {
    /// Reformats all four lines from a freshly parsed snapshot.
    pub fn apply(&mut self, snapshot: &StatusSnapshot) {
        self.header = format!(
            "{}  {}{}  {}",
            snapshot.symbol, UI_TEXT.timeframe_prefix, snapshot.timeframe, snapshot.time
        );
        self.prediction = format!(
            "{}{:.2}, {:.2}, {:.2}",
            UI_TEXT.prediction_prefix, snapshot.pred.p1, snapshot.pred.p2, snapshot.pred.p3
        );
        self.next_action = format!(
            "{}{} {:.2} @ {}  {}{:.2}",
            UI_TEXT.next_prefix,
            snapshot.next.side,
            snapshot.next.lots,
            snapshot.next.entry,
            UI_TEXT.leverage_prefix,
            snapshot.next.lev
        );
        self.est_price = format!("{}{}", UI_TEXT.est_price_prefix, snapshot.next.est_px);
    }
}

pub struct HudApp {
    pub(super) watcher: StatusWatcher,
    pub(super) display: DisplayState,
    pub(super) pinned: bool,

    // Deadline for the next refresh attempt; None before the first tick.
    next_poll_at: Option<Instant>,
}

impl HudApp {
    pub fn new(cc: &eframe::CreationContext<'_>, files_dir: PathBuf) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        Self {
            watcher: StatusWatcher::new(&files_dir),
            display: DisplayState::default(),
            pinned: true,
            next_poll_at: None,
        }
    }

    /// Runs at most one refresh attempt per poll interval. egui repaints on
    /// every input event, so `update` can fire far more often than the poll
    /// cadence; the deadline keeps filesystem traffic bounded.
    pub(super) fn poll_if_due(&mut self) {
        let now = Instant::now();
        if self.next_poll_at.is_some_and(|at| now < at) {
            return;
        }
        self.next_poll_at = Some(now + HUD.poll.interval);

        let outcome = self.watcher.poll();

        #[cfg(debug_assertions)]
        if PRINT_REFRESH_OUTCOMES {
            log::info!("Refresh outcome: {:?}", outcome);
        }

        if let RefreshOutcome::Updated(snapshot) = outcome {
            self.display.apply(&snapshot);
        }
    }
}

impl eframe::App for HudApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_if_due();

        self.render_central_panel(ctx);

        // Re-arm the poll loop; without this the HUD would only refresh on
        // input events.
        ctx.request_repaint_after(HUD.poll.interval);
    }
}

//! Static UI strings, collected in one place so label wording stays
//! consistent between the renderer and the formatting code.

pub struct UiText {
    pub window_title: &'static str,
    pub pin_checkbox: &'static str,
    /// Shown on every line until the first snapshot arrives.
    pub placeholder: &'static str,

    // Label line fragments
    pub timeframe_prefix: &'static str,
    pub prediction_prefix: &'static str,
    pub next_prefix: &'static str,
    pub leverage_prefix: &'static str,
    pub est_price_prefix: &'static str,
}

/// Global UI text instance
pub static UI_TEXT: UiText = UiText {
    window_title: "FX HUD",
    pin_checkbox: "Always on top",
    placeholder: "-",

    timeframe_prefix: "TF:",
    prediction_prefix: "Pred(+1,+2,+3): ",
    next_prefix: "Next: ",
    leverage_prefix: "Lev:",
    est_price_prefix: "Est Px: ",
};

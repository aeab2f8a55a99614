//! Deserialized model of the status file written by the expert advisor.
//!
//! Every field is optional in the file; absence falls back to the
//! placeholder the display shows (`?` for text, 0 for numbers, FLAT for
//! the side, `-` for the estimated price).

use std::fmt;

use serde::Deserialize;

/// One parsed status file at a point in time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusSnapshot {
    #[serde(default = "unknown_text")]
    pub symbol: String,
    #[serde(default = "unknown_text")]
    pub timeframe: String,
    /// Bar timestamp, displayed verbatim.
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub pred: Prediction,
    #[serde(default)]
    pub next: NextAction,
}

/// Near-term forecast values for the next three bars.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Prediction {
    #[serde(default)]
    pub p1: f64,
    #[serde(default)]
    pub p2: f64,
    #[serde(default)]
    pub p3: f64,
}

/// The trade the expert advisor intends to place on the next bar.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NextAction {
    #[serde(default)]
    pub side: Side,
    #[serde(default)]
    pub lots: f64,
    #[serde(default)]
    pub entry: PriceField,
    #[serde(default)]
    pub lev: f64,
    #[serde(default = "PriceField::placeholder")]
    pub est_px: PriceField,
}

/// Order side as exported by the expert advisor.
///
/// Anything other than the three known values fails deserialization, which
/// the watcher swallows like any other malformed payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, strum_macros::Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
    #[default]
    Flat,
}

/// A price the writer emits either as a JSON number or as a pre-formatted
/// string. Displayed verbatim in both cases.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceField {
    Number(f64),
    Text(String),
}

impl PriceField {
    /// Default for the estimated price: the dash shown until the writer
    /// supplies one.
    pub fn placeholder() -> Self {
        PriceField::Text("-".to_string())
    }
}

impl Default for PriceField {
    fn default() -> Self {
        PriceField::Number(0.0)
    }
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceField::Number(value) => write!(f, "{}", value),
            PriceField::Text(text) => f.write_str(text),
        }
    }
}

fn unknown_text() -> String {
    "?".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_payload_parses_every_field() {
        let raw = r#"{
            "symbol": "EURUSD", "timeframe": "H1", "time": "2024-01-01 10:00",
            "pred": {"p1": 1.1, "p2": 1.12, "p3": 1.13},
            "next": {"side": "BUY", "lots": 0.5, "entry": 1.105, "lev": 2.0, "est_px": 1.106}
        }"#;

        let snapshot: StatusSnapshot = serde_json::from_str(raw).unwrap();

        assert_eq!(snapshot.symbol, "EURUSD");
        assert_eq!(snapshot.timeframe, "H1");
        assert_eq!(snapshot.time, "2024-01-01 10:00");
        assert_eq!(snapshot.pred.p1, 1.1);
        assert_eq!(snapshot.pred.p3, 1.13);
        assert_eq!(snapshot.next.side, Side::Buy);
        assert_eq!(snapshot.next.lots, 0.5);
        assert_eq!(snapshot.next.entry, PriceField::Number(1.105));
        assert_eq!(snapshot.next.lev, 2.0);
        assert_eq!(snapshot.next.est_px, PriceField::Number(1.106));
    }

    #[test]
    fn empty_object_falls_back_to_placeholders() {
        let snapshot: StatusSnapshot = serde_json::from_str("{}").unwrap();

        assert_eq!(snapshot.symbol, "?");
        assert_eq!(snapshot.timeframe, "?");
        assert_eq!(snapshot.time, "");
        assert_eq!(snapshot.pred, Prediction::default());
        assert_eq!(snapshot.next.side, Side::Flat);
        assert_eq!(snapshot.next.entry, PriceField::Number(0.0));
        assert_eq!(snapshot.next.est_px, PriceField::Text("-".to_string()));
    }

    #[test]
    fn price_fields_accept_strings_and_numbers() {
        let raw = r#"{"next": {"entry": "1.2345", "est_px": 1.106}}"#;
        let snapshot: StatusSnapshot = serde_json::from_str(raw).unwrap();

        assert_eq!(snapshot.next.entry.to_string(), "1.2345");
        assert_eq!(snapshot.next.est_px.to_string(), "1.106");
    }

    #[test]
    fn price_field_displays_integral_number_without_decimals() {
        assert_eq!(PriceField::Number(0.0).to_string(), "0");
        assert_eq!(PriceField::Number(1.105).to_string(), "1.105");
    }

    #[test]
    fn side_displays_uppercase() {
        assert_eq!(Side::Buy.to_string(), "BUY");
        assert_eq!(Side::Sell.to_string(), "SELL");
        assert_eq!(Side::Flat.to_string(), "FLAT");
    }

    #[test]
    fn unknown_side_is_a_parse_error() {
        let raw = r#"{"next": {"side": "HOLD"}}"#;
        assert!(serde_json::from_str::<StatusSnapshot>(raw).is_err());
    }

    #[test]
    fn truncated_payload_is_a_parse_error() {
        let raw = r#"{"symbol": "EURUSD", "pred": {"p1": 1.1"#;
        assert!(serde_json::from_str::<StatusSnapshot>(raw).is_err());
    }
}

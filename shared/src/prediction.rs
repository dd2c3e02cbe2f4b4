use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

use crate::condition::Condition;

/// Confidence as sent by the prediction server: either a bare number or a
/// string such as `"87.5%"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    Numeric(f64),
    PercentString(String),
}

impl Default for Confidence {
    fn default() -> Self {
        Confidence::Numeric(0.0)
    }
}

impl Confidence {
    /// Resolves either form to a plain percentage rounded to two decimals.
    /// Unparseable or non-finite input yields 0.
    pub fn normalize(&self) -> f64 {
        let value = match self {
            Confidence::Numeric(value) => *value,
            Confidence::PercentString(text) => parse_percent(text),
        };

        if value.is_finite() {
            round_two(value)
        } else {
            0.0
        }
    }
}

fn parse_percent(text: &str) -> f64 {
    let cleaned = text.replacen('%', "", 1);
    let cleaned = cleaned.trim();

    if let Ok(value) = cleaned.parse::<f64>() {
        return value;
    }

    // Accept a leading numeric prefix such as "87.5 (high)" or "87.5.3".
    let mut seen_dot = false;
    let prefix: String = cleaned
        .chars()
        .enumerate()
        .take_while(|&(i, c)| match c {
            '0'..='9' => true,
            '.' if !seen_dot => {
                seen_dot = true;
                true
            }
            '-' | '+' => i == 0,
            _ => false,
        })
        .map(|(_, c)| c)
        .collect();
    prefix.parse::<f64>().unwrap_or(0.0)
}

/// Rounds to two decimals. Never returns `-0.0`.
pub fn round_two(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// A normalized confidence value, displayed as `"72.3%"`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Display, From)]
#[display(fmt = "{}%", _0)]
pub struct Percent(pub f64);

impl Percent {
    pub fn value(self) -> f64 {
        self.0
    }

    /// Width for a 0-100 progress bar.
    pub fn bar_width(self) -> f64 {
        self.0.clamp(0.0, 100.0)
    }
}

impl From<&Confidence> for Percent {
    fn from(confidence: &Confidence) -> Self {
        Percent(confidence.normalize())
    }
}

/// Success body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(rename = "class")]
    pub label: String,
    #[serde(default)]
    pub confidence: Confidence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl PredictionResult {
    pub fn condition(&self) -> Condition {
        Condition::from_label(&self.label.to_lowercase())
    }

    pub fn percent(&self) -> Percent {
        Percent::from(&self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_string_and_number_normalize_alike() {
        let pairs = [("87.5%", 87.5), ("72.3%", 72.3), ("91.2%", 91.2), ("100%", 100.0)];
        for (text, number) in pairs {
            assert_eq!(
                Confidence::PercentString(text.into()).normalize(),
                Confidence::Numeric(number).normalize(),
                "{text}"
            );
        }
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(Confidence::Numeric(87.456).normalize(), 87.46);
        assert_eq!(Confidence::PercentString("33.333%".into()).normalize(), 33.33);
    }

    #[test]
    fn unparseable_confidence_defaults_to_zero() {
        assert_eq!(Confidence::PercentString("high".into()).normalize(), 0.0);
        assert_eq!(Confidence::PercentString(String::new()).normalize(), 0.0);
        assert_eq!(Confidence::Numeric(f64::NAN).normalize(), 0.0);
        assert_eq!(Confidence::PercentString("NaN%".into()).normalize(), 0.0);
    }

    #[test]
    fn tolerates_whitespace_and_trailing_text() {
        assert_eq!(Confidence::PercentString(" 64.1 % ".into()).normalize(), 64.1);
        assert_eq!(Confidence::PercentString("55.5% (approx)".into()).normalize(), 55.5);
    }

    #[test]
    fn numeric_prefix_stops_at_second_dot() {
        assert_eq!(Confidence::PercentString("87.5.3%".into()).normalize(), 87.5);
        assert_eq!(Confidence::PercentString("-12.5.1".into()).normalize(), -12.5);
    }

    #[test]
    fn tiny_negatives_round_to_positive_zero() {
        let value = Confidence::PercentString("-0.001%".into()).normalize();
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
        assert_eq!(Percent(value).to_string(), "0%");
        assert!(round_two(-0.004).is_sign_positive());
    }

    #[test]
    fn deserializes_both_wire_forms() {
        let numeric: PredictionResult =
            serde_json::from_str(r#"{"class":"Mild","confidence":64}"#).unwrap();
        assert_eq!(numeric.confidence, Confidence::Numeric(64.0));
        assert_eq!(numeric.condition(), Condition::Mild);

        let text: PredictionResult = serde_json::from_str(
            r#"{"class":"Severe","confidence":"91.2%","filename":"plot-3.jpg"}"#,
        )
        .unwrap();
        assert_eq!(text.percent(), Percent(91.2));
        assert_eq!(text.filename.as_deref(), Some("plot-3.jpg"));
    }

    #[test]
    fn percent_display_matches_plain_number() {
        assert_eq!(Percent(72.3).to_string(), "72.3%");
        assert_eq!(Percent(91.0).to_string(), "91%");
        assert_eq!(Percent(140.0).bar_width(), 100.0);
    }
}

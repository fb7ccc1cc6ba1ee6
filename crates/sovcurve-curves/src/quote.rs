//! Raw and parsed yield observations.

use serde::{Deserialize, Serialize};

use crate::tenor::parse_tenor;

/// Characters stripped from yield text before numeric parsing.
const YIELD_DECORATIONS: [char; 2] = ['%', '+'];

/// One row as handed over by the acquisition layer: both fields are free
/// text and may carry symbols, signs and padding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawObservation {
    /// Maturity label, e.g. `"10 Years"`.
    pub tenor_label: String,
    /// Yield cell, e.g. `"+4.215%"`.
    pub yield_label: String,
}

impl RawObservation {
    /// Creates a raw observation from its two text cells.
    pub fn new(tenor_label: impl Into<String>, yield_label: impl Into<String>) -> Self {
        Self {
            tenor_label: tenor_label.into(),
            yield_label: yield_label.into(),
        }
    }

    /// Parses both cells. Returns `None` when the yield is not a finite number;
    /// the tenor never fails (see [`parse_tenor`]).
    #[must_use]
    pub fn parse(&self) -> Option<ParsedObservation> {
        let rate_pct = parse_yield(&self.yield_label)?;
        Some(ParsedObservation {
            years: parse_tenor(&self.tenor_label),
            rate_pct,
        })
    }
}

impl<T: Into<String>, Y: Into<String>> From<(T, Y)> for RawObservation {
    fn from((tenor, yld): (T, Y)) -> Self {
        Self::new(tenor, yld)
    }
}

/// A row with both cells converted to numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsedObservation {
    /// Time to maturity in years, `>= 0`.
    pub years: f64,
    /// Yield in percent. Negative yields are valid.
    pub rate_pct: f64,
}

/// Parses a yield cell into a percentage.
///
/// Every `%` and `+` is removed, surrounding whitespace (including
/// non-breaking spaces) is trimmed, and the rest is parsed as a decimal
/// number with optional leading `-`, decimal point and exponent.
///
/// Returns `None` (the not-a-number marker) when the text is not a finite
/// number. `Some(0.0)` is a real zero yield, never a stand-in for missing data.
///
/// # Example
///
/// ```rust
/// use sovcurve_curves::quote::parse_yield;
///
/// assert_eq!(parse_yield(" +4.25 % "), Some(4.25));
/// assert_eq!(parse_yield("-0.31%"), Some(-0.31));
/// assert_eq!(parse_yield("0%"), Some(0.0));
/// assert_eq!(parse_yield("not a number"), None);
/// ```
#[must_use]
pub fn parse_yield(label: &str) -> Option<f64> {
    let cleaned: String = label
        .chars()
        .filter(|c| !YIELD_DECORATIONS.contains(c))
        .collect();
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

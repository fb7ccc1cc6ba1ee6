//! Tenor label parsing.
//!
//! Maturity labels arrive in whatever shape the quoting source prints them:
//! `"3M"`, `"6 MONTH"`, `"2 Year"`, `"10Y"`, `"30 years"`. The parser reads
//! them with one deliberately simple rule set:
//!
//! 1. uppercase and trim the label;
//! 2. concatenate every ASCII digit in it into a single magnitude, ignoring
//!    everything else (decimal points included);
//! 3. read the magnitude as months when the label contains `"MONTH"`, or ends
//!    in `"M"` without containing `"Y"`; otherwise as years.
//!
//! A label without digits parses to `0.0` years.
//!
//! # Known limitations
//!
//! - Compound labels are not split: `"5Y6M"` concatenates to `56` and is read
//!   as 56 years. Quoting sources in use never emit compound tenors.
//! - Fractional magnitudes lose their decimal point: `"1.5Y"` is 15 years.
//! - Only ASCII digits count. Digits from other scripts, such as the
//!   Arabic-Indic `"٣M"` or fullwidth `"１０Y"`, are skipped like any other
//!   character, so such labels parse as digit-free. Quoting sources in use
//!   print ASCII digits only.
//! - `0.0` for a digit-free label conflates "unreadable" with "overnight".
//!   [`has_tenor_digits`] lets callers tell the two apart, and the curve
//!   builder flags such rows.

use serde::{Deserialize, Serialize};

/// Months per year, used to convert month-quoted tenors.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Unit a tenor label's magnitude is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenorUnit {
    /// Magnitude counts months.
    Months,
    /// Magnitude counts years.
    Years,
}

impl TenorUnit {
    /// Converts a magnitude in this unit to years.
    #[must_use]
    pub fn to_years(self, magnitude: f64) -> f64 {
        match self {
            Self::Months => magnitude / MONTHS_PER_YEAR,
            Self::Years => magnitude,
        }
    }
}

/// Parses a tenor label into a year count.
///
/// Never fails: a label without digits yields `0.0`.
///
/// # Example
///
/// ```rust
/// use sovcurve_curves::tenor::parse_tenor;
///
/// assert_eq!(parse_tenor("3M"), 0.25);
/// assert_eq!(parse_tenor("6 MONTH"), 0.5);
/// assert_eq!(parse_tenor("10Y"), 10.0);
/// assert_eq!(parse_tenor("2 Year"), 2.0);
/// assert_eq!(parse_tenor("N/A"), 0.0);
/// ```
#[must_use]
pub fn parse_tenor(label: &str) -> f64 {
    let normalized = normalize(label);
    match magnitude(&normalized) {
        Some(value) => classify(&normalized).to_years(value),
        None => 0.0,
    }
}

/// Returns the unit [`parse_tenor`] would read the label's magnitude in.
#[must_use]
pub fn classify_tenor(label: &str) -> TenorUnit {
    classify(&normalize(label))
}

/// Returns true when the label carries at least one digit, i.e. when
/// [`parse_tenor`] reads a real magnitude rather than defaulting to zero.
#[must_use]
pub fn has_tenor_digits(label: &str) -> bool {
    label.chars().any(|c| c.is_ascii_digit())
}

fn normalize(label: &str) -> String {
    label.to_uppercase().trim().to_string()
}

fn magnitude(normalized: &str) -> Option<f64> {
    let digits: String = normalized.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok()
}

fn classify(normalized: &str) -> TenorUnit {
    if normalized.contains("MONTH") || (normalized.ends_with('M') && !normalized.contains('Y')) {
        TenorUnit::Months
    } else {
        TenorUnit::Years
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_reference_labels() {
        assert_eq!(parse_tenor("3M"), 0.25);
        assert_eq!(parse_tenor("6 MONTH"), 0.5);
        assert_eq!(parse_tenor("10Y"), 10.0);
        assert_eq!(parse_tenor("2 Year"), 2.0);
        assert_eq!(parse_tenor("N/A"), 0.0);
    }

    #[test]
    fn test_case_and_whitespace() {
        assert_eq!(parse_tenor("  3m "), 0.25);
        assert_eq!(parse_tenor("1 month"), 1.0 / 12.0);
        assert_eq!(parse_tenor("9 Months"), 0.75);
        assert_eq!(parse_tenor("30 years"), 30.0);
        assert_eq!(parse_tenor("\t5 YEARS\n"), 5.0);
    }

    #[test]
    fn test_bare_number_is_years() {
        assert_eq!(parse_tenor("7"), 7.0);
        assert_eq!(parse_tenor("15 "), 15.0);
    }

    #[test]
    fn test_no_digits_defaults_to_zero() {
        assert_eq!(parse_tenor(""), 0.0);
        assert_eq!(parse_tenor("   "), 0.0);
        assert_eq!(parse_tenor("Overnight"), 0.0);
        assert!(!has_tenor_digits("Overnight"));
        assert!(has_tenor_digits("0Y"));
    }

    #[test]
    fn test_compound_label_concatenates_digits() {
        // "5Y6M" ends in M but contains Y: years, with digits run together.
        assert_eq!(parse_tenor("5Y6M"), 56.0);
        assert_eq!(classify_tenor("5Y6M"), TenorUnit::Years);
    }

    #[test]
    fn test_decimal_point_is_ignored() {
        assert_eq!(parse_tenor("1.5Y"), 15.0);
    }

    #[test]
    fn test_month_suffix_rules() {
        assert_eq!(classify_tenor("18M"), TenorUnit::Months);
        assert_eq!(classify_tenor("12 MONTHS"), TenorUnit::Months);
        // Contains MONTH even though a Y is present.
        assert_eq!(classify_tenor("1 YEAR 3 MONTHS"), TenorUnit::Months);
        assert_eq!(classify_tenor("2Y"), TenorUnit::Years);
        assert_eq!(classify_tenor("10 Year"), TenorUnit::Years);
        assert_relative_eq!(parse_tenor("18M"), 1.5, epsilon = 1e-15);
    }

    #[test]
    fn test_non_ascii_digits_ignored() {
        assert_eq!(parse_tenor("٣M"), 0.0);
        assert_eq!(parse_tenor("１０Y"), 0.0);
        assert!(!has_tenor_digits("１０Y"));
        // Mixed scripts keep only the ASCII part.
        assert_eq!(parse_tenor("1٣Y"), 1.0);
    }

    proptest! {
        #[test]
        fn prop_never_negative_never_nan(label in ".{0,24}") {
            let years = parse_tenor(&label);
            prop_assert!(years >= 0.0);
            prop_assert!(!years.is_nan());
        }

        #[test]
        fn prop_year_labels(n in 0u32..100) {
            prop_assert_eq!(parse_tenor(&format!("{n}Y")), f64::from(n));
            prop_assert_eq!(parse_tenor(&format!("{n} Years")), f64::from(n));
        }

        #[test]
        fn prop_month_labels(n in 0u32..600) {
            prop_assert_eq!(parse_tenor(&format!("{n}M")), f64::from(n) / 12.0);
            prop_assert_eq!(parse_tenor(&format!("{n} month")), f64::from(n) / 12.0);
        }
    }
}

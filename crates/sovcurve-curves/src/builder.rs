//! Curve construction from raw observations.
//!
//! The builder never fails. Each row is handled on its own:
//!
//! - a yield that is not a finite number drops the row;
//! - a maturity that is not finite drops the row;
//! - a maturity too long to scale into days, or to give a finite discount
//!   factor at the quoted yield, drops the row;
//! - a maturity of zero years keeps the row but flags it, since it usually
//!   means the label had no digits rather than a genuine overnight quote.
//!
//! Every such decision is recorded as a [`RowDiagnostic`] and logged, so the
//! caller decides what to show the user. An empty input is an empty curve.

use serde::Serialize;
use tracing::{debug, warn};

use crate::conventions::DayCountConvention;
use crate::curve::{Curve, CurvePoint};
use crate::quote::{ParsedObservation, RawObservation};
use crate::tenor::has_tenor_digits;

/// What went wrong with a single input row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RowIssue {
    /// The yield cell is not a finite number. The row was dropped.
    UnparseableYield,
    /// The maturity parsed to a non-finite year count. The row was dropped.
    NonFiniteTenor,
    /// The maturity is finite but its days or discount factor are not
    /// representable. The row was dropped.
    OutOfRangeTenor,
    /// The maturity parsed to zero years. The row was kept.
    DegenerateTenor,
}

impl RowIssue {
    /// True if rows with this issue are left out of the curve.
    #[must_use]
    pub fn drops_row(self) -> bool {
        !matches!(self, Self::DegenerateTenor)
    }
}

impl std::fmt::Display for RowIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::UnparseableYield => "unparseable yield, row dropped",
            Self::NonFiniteTenor => "non-finite maturity, row dropped",
            Self::OutOfRangeTenor => "maturity out of range, row dropped",
            Self::DegenerateTenor => "maturity parsed to zero years, review before use",
        };
        write!(f, "{text}")
    }
}

/// A row-level finding recorded while building a curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowDiagnostic {
    /// Zero-based position of the row in the input.
    pub index: usize,
    /// The row's tenor cell.
    pub tenor_label: String,
    /// The row's yield cell.
    pub yield_label: String,
    /// What was found.
    pub issue: RowIssue,
}

impl std::fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "row {} ({:?}, {:?}): {}",
            self.index, self.tenor_label, self.yield_label, self.issue
        )
    }
}

/// Output of [`CurveBuilder::build`]: the curve plus what happened to the
/// rows that did not make it in cleanly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveBuild {
    /// The built curve.
    pub curve: Curve,
    /// Row-level findings, in input order.
    pub diagnostics: Vec<RowDiagnostic>,
    /// Number of input rows.
    pub rows_read: usize,
}

impl CurveBuild {
    /// Number of rows left out of the curve.
    pub fn rows_dropped(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.issue.drops_row()).count()
    }

    /// Diagnostics for rows that were kept but need review.
    pub fn flagged(&self) -> impl Iterator<Item = &RowDiagnostic> {
        self.diagnostics.iter().filter(|d| !d.issue.drops_row())
    }
}

/// Builds curves from raw observations.
///
/// # Example
///
/// ```rust
/// use sovcurve_curves::builder::{CurveBuilder, RowIssue};
/// use sovcurve_curves::quote::RawObservation;
///
/// let rows = vec![
///     RawObservation::new("10 Years", "4.21%"),
///     RawObservation::new("3 Months", "3.55%"),
///     RawObservation::new("5 Years", "n/a"),
/// ];
///
/// let build = CurveBuilder::new().build(&rows);
/// assert_eq!(build.curve.len(), 2);
/// assert_eq!(build.curve.points()[0].tenor, "3 Months");
/// assert_eq!(build.diagnostics[0].issue, RowIssue::UnparseableYield);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CurveBuilder {
    convention: DayCountConvention,
}

impl CurveBuilder {
    /// Creates a builder using ACT/360 day scaling.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the day count convention used for the `days` field.
    #[must_use]
    pub fn with_convention(mut self, convention: DayCountConvention) -> Self {
        self.convention = convention;
        self
    }

    /// The day count convention in use.
    pub fn convention(&self) -> DayCountConvention {
        self.convention
    }

    /// Parses, filters, derives and sorts the rows.
    pub fn build(&self, rows: &[RawObservation]) -> CurveBuild {
        let mut points = Vec::with_capacity(rows.len());
        let mut diagnostics = Vec::new();

        for (index, row) in rows.iter().enumerate() {
            let diagnose = |issue| RowDiagnostic {
                index,
                tenor_label: row.tenor_label.clone(),
                yield_label: row.yield_label.clone(),
                issue,
            };

            let Some(ParsedObservation { years, rate_pct }) = row.parse() else {
                debug!(index, yield_label = %row.yield_label, "dropping row with unparseable yield");
                diagnostics.push(diagnose(RowIssue::UnparseableYield));
                continue;
            };

            if !years.is_finite() {
                debug!(index, tenor_label = %row.tenor_label, "dropping row with non-finite maturity");
                diagnostics.push(diagnose(RowIssue::NonFiniteTenor));
                continue;
            }

            let Some(point) = CurvePoint::try_with_convention(
                row.tenor_label.clone(),
                years,
                rate_pct,
                self.convention,
            ) else {
                debug!(
                    index,
                    tenor_label = %row.tenor_label,
                    years,
                    rate_pct,
                    "dropping row with out-of-range maturity"
                );
                diagnostics.push(diagnose(RowIssue::OutOfRangeTenor));
                continue;
            };

            if point.is_zero_tenor() {
                warn!(
                    index,
                    tenor_label = %row.tenor_label,
                    has_digits = has_tenor_digits(&row.tenor_label),
                    "maturity parsed to zero years"
                );
                diagnostics.push(diagnose(RowIssue::DegenerateTenor));
            }

            points.push(point);
        }

        let curve = Curve::from_points(points);
        debug!(
            rows = rows.len(),
            points = curve.len(),
            distinct = curve.distinct_years(),
            "built curve"
        );

        CurveBuild {
            curve,
            diagnostics,
            rows_read: rows.len(),
        }
    }
}

/// Builds a curve with the default builder, discarding diagnostics.
#[must_use]
pub fn build_curve(rows: &[RawObservation]) -> Curve {
    CurveBuilder::new().build(rows).curve
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn rows(pairs: &[(&str, &str)]) -> Vec<RawObservation> {
        pairs.iter().map(|(t, y)| RawObservation::new(*t, *y)).collect()
    }

    #[test]
    fn test_empty_input_is_empty_curve() {
        let build = CurveBuilder::new().build(&[]);
        assert!(build.curve.is_empty());
        assert!(build.diagnostics.is_empty());
        assert_eq!(build.rows_read, 0);
        assert!(build_curve(&[]).is_empty());
    }

    #[test]
    fn test_unparseable_rows_dropped() {
        let input = rows(&[("1Y", "5.0%"), ("2Y", "not a number"), ("5Y", "4.5%")]);
        let build = CurveBuilder::new().build(&input);

        assert_eq!(build.curve.len(), 2);
        assert_eq!(build.rows_dropped(), 1);
        assert_eq!(build.diagnostics[0].index, 1);
        assert_eq!(build.diagnostics[0].issue, RowIssue::UnparseableYield);
        assert!(build.curve.iter().all(|p| p.tenor != "2Y"));
    }

    #[test]
    fn test_zero_rate_is_kept() {
        let curve = build_curve(&rows(&[("1Y", "0.00%")]));
        assert_eq!(curve.len(), 1);
        assert_eq!(curve.points()[0].rate_pct, 0.0);
    }

    #[test]
    fn test_degenerate_tenor_flagged_not_dropped() {
        let input = rows(&[("N/A", "3.1"), ("1Y", "5.0")]);
        let build = CurveBuilder::new().build(&input);

        assert_eq!(build.curve.len(), 2);
        assert_eq!(build.rows_dropped(), 0);
        let flagged: Vec<_> = build.flagged().collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].tenor_label, "N/A");
        assert_eq!(build.curve.points()[0].years, 0.0);
    }

    #[test]
    fn test_non_finite_tenor_dropped() {
        let huge = format!("{}Y", "9".repeat(400));
        let build = CurveBuilder::new().build(&rows(&[(huge.as_str(), "4.0"), ("1Y", "5.0")]));
        assert_eq!(build.curve.len(), 1);
        assert_eq!(build.diagnostics[0].issue, RowIssue::NonFiniteTenor);
    }

    #[test]
    fn test_out_of_range_tenor_dropped() {
        let input = rows(&[
            ("99999999999999999999 Years", "-4.0"),
            ("100000000000 Years", "-4.0"),
            ("1Y", "5.0"),
        ]);
        let build = CurveBuilder::new().build(&input);

        assert_eq!(build.curve.len(), 1);
        assert_eq!(build.rows_dropped(), 2);
        assert_eq!(build.diagnostics[0].issue, RowIssue::OutOfRangeTenor);
        assert_eq!(build.diagnostics[1].issue, RowIssue::OutOfRangeTenor);
        assert!(build.diagnostics[0].to_string().contains("out of range"));
        assert!(build.curve.iter().all(|p| p.discount_factor.is_finite()));
    }

    #[test]
    fn test_long_tenor_with_vanishing_discount_factor_kept() {
        let build = CurveBuilder::new().build(&rows(&[("100000000000 Years", "4.0")]));
        assert_eq!(build.curve.len(), 1);
        assert!(build.diagnostics.is_empty());
        assert_eq!(build.curve.points()[0].discount_factor, 0.0);
    }

    #[test]
    fn test_sorted_and_derived() {
        let input = rows(&[
            ("10 Years", "4.21%"),
            ("3 Months", "+3.55%"),
            ("2 Years", "3.80%"),
            ("6 Months", "3.60 %"),
        ]);
        let curve = build_curve(&input);

        let years: Vec<f64> = curve.iter().map(|p| p.years).collect();
        assert_eq!(years, vec![0.25, 0.5, 2.0, 10.0]);
        let days: Vec<i64> = curve.iter().map(|p| p.days).collect();
        assert_eq!(days, vec![90, 180, 720, 3600]);
        assert_relative_eq!(
            curve.points()[3].discount_factor,
            (-(4.21_f64 / 100.0) * 10.0).exp(),
            epsilon = 1e-12
        );
        assert_eq!(curve.points()[1].tenor, "6 Months");
    }

    #[test]
    fn test_stability_for_equal_years() {
        let input = rows(&[("1Y", "5.0"), ("12M", "5.1"), ("6M", "4.0"), ("1 Year", "4.9")]);
        let curve = build_curve(&input);
        let tenors: Vec<&str> = curve.iter().map(|p| p.tenor.as_str()).collect();
        assert_eq!(tenors, vec!["6M", "1Y", "12M", "1 Year"]);
    }

    #[test]
    fn test_negative_yields_surface_raw_discount_factors() {
        let curve = build_curve(&rows(&[("1Y", "-0.5%"), ("2Y", "-0.4%")]));
        assert!(curve.points()[0].discount_factor > 1.0);
        assert!(curve.points()[1].discount_factor > curve.points()[0].discount_factor);
    }

    #[test]
    fn test_deterministic() {
        let input = rows(&[("2Y", "4.8"), ("1Y", "5.0"), ("5Y", "x"), ("5Y", "4.5")]);
        assert_eq!(CurveBuilder::new().build(&input), CurveBuilder::new().build(&input));
    }

    #[test]
    fn test_diagnostic_display() {
        let build = CurveBuilder::new().build(&rows(&[("2Y", "n/a")]));
        let text = build.diagnostics[0].to_string();
        assert!(text.contains("row 0"));
        assert!(text.contains("unparseable yield"));
    }

    fn tenor_label() -> impl Strategy<Value = String> {
        prop_oneof![
            (1u32..40).prop_map(|n| format!("{n}Y")),
            (1u32..40).prop_map(|n| format!("{n} Years")),
            (1u32..24).prop_map(|n| format!("{n}M")),
            (1u32..24).prop_map(|n| format!("{n} Month")),
            Just("N/A".to_string()),
        ]
    }

    fn yield_label() -> impl Strategy<Value = String> {
        prop_oneof![
            4 => (-1.0f64..12.0).prop_map(|v| format!("{v:.3}%")),
            1 => Just("--".to_string()),
            1 => Just("n/a".to_string()),
        ]
    }

    proptest! {
        #[test]
        fn prop_curve_invariants(pairs in proptest::collection::vec((tenor_label(), yield_label()), 0..30)) {
            let input: Vec<RawObservation> = pairs
                .iter()
                .map(|(t, y)| RawObservation::new(t.clone(), y.clone()))
                .collect();
            let build = CurveBuilder::new().build(&input);
            let curve = &build.curve;

            prop_assert!(curve.len() <= input.len());
            prop_assert_eq!(curve.len() + build.rows_dropped(), input.len());

            for pair in curve.points().windows(2) {
                prop_assert!(pair[0].years <= pair[1].years);
            }

            for p in curve {
                prop_assert!((p.discount_factor - (-(p.rate_pct / 100.0) * p.years).exp()).abs() <= 1e-12);
                prop_assert_eq!(p.days, (p.years * 360.0).floor() as i64);
            }

            // Stability: survivors sharing a maturity keep their input order.
            let survivors: Vec<(usize, f64)> = input
                .iter()
                .enumerate()
                .filter_map(|(i, r)| r.parse().map(|o| (i, o.years)))
                .collect();
            let mut expected = survivors.clone();
            expected.sort_by(|a, b| a.1.total_cmp(&b.1));
            let expected_tenors: Vec<&str> = expected.iter().map(|(i, _)| input[*i].tenor_label.as_str()).collect();
            let actual_tenors: Vec<&str> = curve.iter().map(|p| p.tenor.as_str()).collect();
            prop_assert_eq!(expected_tenors, actual_tenors);
        }
    }
}

//! Per-stage metric aggregation.
//!
//! Turns the rows of one section group into stage totals for one metric
//! column, and the totals into an [`EnvironmentalMetric`]. This is the only
//! place where "not reported" (`None`) and "reported as zero" are told
//! apart; both are carried unchanged from here on.

use crate::models::{EnvironmentalMetric, MetricKind, Stage, StageValue};
use crate::transform::grouper::SectionGroup;

/// Stage remapping: each target label becomes the sum of its source labels.
pub type Remap<'a> = &'a [(&'a str, &'a [&'a str])];

const B_STAGES: [&str; 7] = ["B1", "B2", "B3", "B4", "B5", "B6", "B7"];
const C_STAGES: [&str; 4] = ["C1", "C2", "C3", "C4"];

/// Parse a numeric cell.
///
/// Accepts both `.` and `,` as decimal separator. Blank, unparsable and
/// non-finite cells are `None`.
pub fn parse_number(text: &str) -> StageValue {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>()
        .ok()
        .or_else(|| text.replace(',', ".").parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Sum of the numeric values, `None` when there are none.
pub fn sum_numeric<I: IntoIterator<Item = StageValue>>(values: I) -> StageValue {
    values
        .into_iter()
        .flatten()
        .fold(None, |acc, v| Some(acc.unwrap_or(0.0) + v))
}

/// Section label → value, in order of first insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageTotals {
    values: Vec<(String, StageValue)>,
}

impl StageTotals {
    pub fn get(&self, label: &str) -> StageValue {
        self.values
            .iter()
            .find(|(l, _)| l == label)
            .and_then(|(_, v)| *v)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.values.iter().any(|(l, _)| l == label)
    }

    pub fn set(&mut self, label: &str, value: StageValue) {
        match self.values.iter_mut().find(|(l, _)| l == label) {
            Some((_, slot)) => *slot = value,
            None => self.values.push((label.to_string(), value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, StageValue)> {
        self.values.iter().map(|(l, v)| (l.as_str(), *v))
    }

    /// Derive an aggregate stage from its constituents, unless the export
    /// already reports it.
    fn derive(&mut self, aggregate: &str, constituents: &[&str]) {
        if self.contains(aggregate) || !constituents.iter().any(|c| self.contains(c)) {
            return;
        }
        let sum = sum_numeric(constituents.iter().map(|c| self.get(c)));
        self.set(aggregate, sum);
    }
}

/// Stage totals of one metric column over a section group.
///
/// Each section's cell is parsed and multiplied by `factor`. The remap then
/// overwrites each target with the sum of its numeric sources. Finally the
/// `B1-B7` and `C1-C4` aggregates are derived from their constituents when
/// the export does not carry them.
pub fn totals(sections: &SectionGroup, column: &str, remap: Remap<'_>, factor: f64) -> StageTotals {
    let mut totals = StageTotals::default();

    for (label, row) in sections.iter() {
        let value = parse_number(row.text(column))
            .map(|v| v * factor)
            .filter(|v| v.is_finite());
        totals.set(label, value);
    }

    for (target, sources) in remap {
        let sum = sum_numeric(sources.iter().map(|s| totals.get(s)));
        totals.set(target, sum);
    }

    totals.derive("B1-B7", &B_STAGES);
    totals.derive("C1-C4", &C_STAGES);
    totals
}

/// Build a metric record from the stage totals of one column.
///
/// Stages the export does not report are `None`.
pub fn material_result(
    kind: MetricKind,
    sections: &SectionGroup,
    column: &str,
    name: &str,
    epd_name: &str,
    remap: Remap<'_>,
    factor: f64,
) -> EnvironmentalMetric {
    let totals = totals(sections, column, remap, factor);
    EnvironmentalMetric::from_fn(kind, |stage| totals.get(stage.label())).with_names(name, epd_name)
}

/// Stage-by-stage `minuend - subtrahend`.
///
/// A stage the minuend does not report stays `None`; a missing subtrahend
/// stage counts as zero.
pub fn derive_difference(
    kind: MetricKind,
    minuend: &EnvironmentalMetric,
    subtrahend: &EnvironmentalMetric,
) -> EnvironmentalMetric {
    EnvironmentalMetric::from_fn(kind, |stage: Stage| {
        minuend
            .get(stage)
            .map(|m| m - subtrahend.get(stage).unwrap_or(0.0))
    })
    .with_names(minuend.name.clone(), minuend.epd_name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawRow;

    const GWP: &str = "Global warming kg CO₂e";

    fn group(cells: &[(&str, &str)]) -> SectionGroup {
        cells
            .iter()
            .map(|(section, value)| {
                (
                    section.to_string(),
                    RawRow::from_pairs([("Section", *section), (GWP, *value)]),
                )
            })
            .collect()
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12.5"), Some(12.5));
        assert_eq!(parse_number(" 12,5 "), Some(12.5));
        assert_eq!(parse_number("-3e2"), Some(-300.0));
        assert_eq!(parse_number("0"), Some(0.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("n/a"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn test_sum_numeric() {
        assert_eq!(sum_numeric([None, None]), None);
        assert_eq!(sum_numeric([None, Some(2.0), Some(3.0)]), Some(5.0));
        assert_eq!(sum_numeric(Vec::<StageValue>::new()), None);
    }

    #[test]
    fn test_totals_keep_not_computed_apart_from_zero() {
        let sections = group(&[("A1-A3", "100"), ("A4", "0"), ("A5", "")]);
        let result = totals(&sections, GWP, &[], 1.0);

        assert_eq!(result.get("A1-A3"), Some(100.0));
        assert_eq!(result.get("A4"), Some(0.0));
        assert_eq!(result.get("A5"), None);
        assert!(result.contains("A5"));
        assert!(!result.contains("D"));
    }

    #[test]
    fn test_factor_is_applied() {
        let sections = group(&[("A1-A3", "2"), ("D", "-1")]);
        let result = totals(&sections, GWP, &[], 1000.0);
        assert_eq!(result.get("A1-A3"), Some(2000.0));
        assert_eq!(result.get("D"), Some(-1000.0));
    }

    #[test]
    fn test_remap_sums_numeric_sources() {
        let sections = group(&[("B4", "1"), ("B4-Abfall", "2")]);
        let dgnb = totals(&sections, GWP, &[("B4", &["B4", "B4-Abfall"])], 1.0);
        assert_eq!(dgnb.get("B4"), Some(3.0));

        let sections = group(&[("B4-B5", "7")]);
        let breeam = totals(&sections, GWP, &[("B4", &["B4-B5"])], 1.0);
        assert_eq!(breeam.get("B4"), Some(7.0));

        // No numeric source: target is not computed, not zero.
        let sections = group(&[("B6a", ""), ("A4", "1")]);
        let wlca = totals(&sections, GWP, &[("B6", &["B6a", "B6b"])], 1.0);
        assert_eq!(wlca.get("B6"), None);
    }

    #[test]
    fn test_remap_with_absent_sources() {
        // Sources missing from the group add nothing to the sum.
        let sections = group(&[("B6a", "4"), ("A4", "1")]);
        let one = totals(&sections, GWP, &[("B6", &["B6a", "B6b"])], 1.0);
        assert_eq!(one.get("B6"), Some(4.0));

        // With every source absent the target is still set, as not computed.
        let sections = group(&[("A4", "1")]);
        let none = totals(&sections, GWP, &[("B6", &["B6a", "B6b"])], 1.0);
        assert!(none.contains("B6"));
        assert_eq!(none.get("B6"), None);
    }

    #[test]
    fn test_b_and_c_aggregates_are_derived() {
        let sections = group(&[("B1", "1"), ("B2", "2"), ("B6", ""), ("C1", "0.5"), ("C4", "0.25")]);
        let result = totals(&sections, GWP, &[], 1.0);
        assert_eq!(result.get("B1-B7"), Some(3.0));
        assert_eq!(result.get("C1-C4"), Some(0.75));
    }

    #[test]
    fn test_reported_aggregate_is_kept() {
        let sections = group(&[("B1", "1"), ("B2", "2"), ("B1-B7", "10")]);
        let result = totals(&sections, GWP, &[], 1.0);
        assert_eq!(result.get("B1-B7"), Some(10.0));
    }

    #[test]
    fn test_aggregate_not_derived_without_constituents() {
        let sections = group(&[("A1-A3", "1")]);
        let result = totals(&sections, GWP, &[], 1.0);
        assert!(!result.contains("B1-B7"));
        assert!(!result.contains("C1-C4"));
    }

    #[test]
    fn test_aggregate_of_unreported_constituents_is_not_computed() {
        let sections = group(&[("C2", ""), ("C3", "")]);
        let result = totals(&sections, GWP, &[], 1.0);
        assert_eq!(result.get("C1-C4"), None);
    }

    #[test]
    fn test_material_result_reads_all_slots() {
        let sections = group(&[("A1-A3", "100"), ("A4", "3.5"), ("B4-B5", "2"), ("C3", "1")]);
        let metric = material_result(
            MetricKind::ClimateChangeTotalNoBiogenic,
            &sections,
            GWP,
            "Concrete",
            "EPD 42",
            &[("B4", &["B4-B5"])],
            1.0,
        );

        assert_eq!(metric.name, "Concrete");
        assert_eq!(metric.epd_name, "EPD 42");
        assert_eq!(metric.get(Stage::A1toA3), Some(100.0));
        assert_eq!(metric.get(Stage::A4), Some(3.5));
        assert_eq!(metric.get(Stage::B4), Some(2.0));
        assert_eq!(metric.get(Stage::B1toB7), Some(2.0));
        assert_eq!(metric.get(Stage::C1toC4), Some(1.0));
        assert_eq!(metric.get(Stage::A1), None);
        assert_eq!(metric.get(Stage::A5), None);
        assert_eq!(metric.get(Stage::D), None);
    }

    #[test]
    fn test_derive_difference() {
        let total = EnvironmentalMetric::from_fn(MetricKind::ClimateChangeTotal, |s| match s {
            Stage::A1toA3 => Some(10.0),
            Stage::A4 => Some(4.0),
            _ => None,
        })
        .with_names("Timber", "EPD");
        let biogenic = EnvironmentalMetric::from_fn(MetricKind::ClimateChangeBiogenic, |s| match s {
            Stage::A1toA3 => Some(-3.0),
            Stage::C3 => Some(3.0),
            _ => None,
        });

        let diff = derive_difference(MetricKind::ClimateChangeTotalNoBiogenic, &total, &biogenic);
        assert_eq!(diff.kind, MetricKind::ClimateChangeTotalNoBiogenic);
        assert_eq!(diff.get(Stage::A1toA3), Some(13.0));
        assert_eq!(diff.get(Stage::A4), Some(4.0));
        assert_eq!(diff.get(Stage::C3), None);
        assert_eq!(diff.name, "Timber");
    }
}

//! Category roll-up: metric totals per canonical category.

use std::collections::BTreeMap;

use crate::category::CanonicalCategory;
use crate::error::AdapterError;
use crate::logs::{Diagnostics, Outcome};
use crate::models::{EnvironmentalMetric, MetricKind, ReportEntry, Stage};
use crate::transform::aggregate::sum_numeric;

/// Metric totals keyed by category.
pub type CategoryTotals = BTreeMap<CanonicalCategory, Vec<EnvironmentalMetric>>;

/// Total every metric kind per category.
///
/// Level 0 groups entries by their own category; levels 1 to 3 group them by
/// their ancestor at that level. Any other level is recorded as a warning and
/// treated as 0. Each stage slot is the sum of the numeric contributions and
/// stays `None` only when no contributor reports it.
pub fn totals_per_category(entries: &[ReportEntry], level: i32) -> Outcome<CategoryTotals> {
    let mut diagnostics = Diagnostics::new();

    let level = match u8::try_from(level) {
        Ok(level) if level <= 3 => level,
        _ => {
            diagnostics.record_warning(AdapterError::InvalidRequest(format!(
                "category level should be between 1 and 3 (got {}); totals are grouped by category",
                level
            )));
            0
        }
    };

    let mut groups: BTreeMap<CanonicalCategory, Vec<&ReportEntry>> = BTreeMap::new();
    for entry in entries {
        let key = if level == 0 {
            entry.category
        } else {
            entry.category.for_level(level)
        };
        groups.entry(key).or_default().push(entry);
    }

    let totals = groups
        .into_iter()
        .map(|(category, members)| (category, group_totals(&members)))
        .collect();

    Outcome::new(totals, diagnostics)
}

/// One metric per kind, in order of first appearance within the group.
fn group_totals(entries: &[&ReportEntry]) -> Vec<EnvironmentalMetric> {
    let mut kinds: Vec<MetricKind> = Vec::new();
    for metric in entries.iter().flat_map(|e| &e.metrics) {
        if !kinds.contains(&metric.kind) {
            kinds.push(metric.kind);
        }
    }

    kinds
        .into_iter()
        .map(|kind| {
            let contributors: Vec<&EnvironmentalMetric> = entries
                .iter()
                .flat_map(|e| &e.metrics)
                .filter(|m| m.kind == kind)
                .collect();
            EnvironmentalMetric::from_fn(kind, |stage: Stage| {
                sum_numeric(contributors.iter().map(|m| m.get(stage)))
            })
        })
        .collect()
}

//! Report population: export rows to classified, aggregated entries.
//!
//! Dispatches on the report's indicator through its [`IndicatorProfile`],
//! groups the rows, and builds one [`ReportEntry`] per section group.
//! Problems never abort population: they are recorded in the returned
//! [`Outcome`] and the report comes back empty or unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::{classify, Taxonomy};
use crate::error::PopulateError;
use crate::logs::{Diagnostics, Outcome};
use crate::models::{ExtraValue, Indicator, OriginalExtras, RawRow, Report, ReportEntry};
use crate::transform::aggregate::{derive_difference, material_result, parse_number};
use crate::transform::grouper::{group_rows, GroupColumns, SectionGroup};
use crate::transform::profile::{self, ExtraKind, IndicatorProfile};

/// Options that change how an export is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulateOptions {
    /// Classify whole life carbon exports against RICS v2 instead of v1.
    #[serde(default)]
    pub rics_v2: bool,
}

impl PopulateOptions {
    fn taxonomy_for(&self, profile: &IndicatorProfile) -> Taxonomy {
        if self.rics_v2 && profile.indicator == Indicator::WholeLifeCarbonAssessment {
            Taxonomy::RicsV2
        } else {
            profile.taxonomy
        }
    }
}

/// Fill `report.entries` from the export rows.
///
/// - Unsupported indicator: `UnsupportedIndicator` is recorded and the report
///   comes back unchanged.
/// - Area-normalised format without the `AdditionalInputs` fragment:
///   `MissingInput` is recorded and the report comes back with no entries.
/// - Repeated sections inside one entry group are recorded as
///   `DuplicateSection` warnings.
pub fn populate_report(mut report: Report, rows: Vec<RawRow>, options: &PopulateOptions) -> Outcome<Report> {
    let mut diagnostics = Diagnostics::new();

    let profile = match profile::profile(report.indicator) {
        Some(profile) => profile,
        None => {
            diagnostics.record_error(PopulateError::UnsupportedIndicator {
                value: report.indicator.identifier().to_string(),
                valid: Indicator::valid_names(),
            });
            return Outcome::new(report, diagnostics);
        }
    };

    let factor = if profile.needs_additional_inputs {
        match report.additional_inputs() {
            Some((area, life)) if (area * life).is_finite() => area * life,
            _ => {
                diagnostics.record_error(PopulateError::MissingInput(
                    "floor area and building life expectancy are needed to scale per m² per year values"
                        .to_string(),
                ));
                report.entries = Vec::new();
                return Outcome::new(report, diagnostics);
            }
        }
    } else {
        1.0
    };

    diagnostics.info(format!(
        "Populating {} report from {} rows",
        report.indicator,
        rows.len()
    ));

    let columns = GroupColumns {
        resource: profile::RESOURCE,
        category: profile.category_column,
        comment: profile::COMMENT,
        quantity: profile::QUANTITY,
        section: profile::SECTION,
    };
    let grouping = group_rows(rows, &columns, profile.require_category_code);
    for warning in grouping.warnings {
        diagnostics.record_warning(warning);
    }

    let builder = EntryBuilder {
        profile,
        taxonomy: options.taxonomy_for(profile),
        factor,
    };
    report.entries = grouping
        .groups
        .iter()
        .filter_map(|group| builder.build(group))
        .collect();

    diagnostics.success(format!("{} entries built", report.entries.len()));
    Outcome::new(report, diagnostics)
}

// =============================================================================
// Entry Builder
// =============================================================================

/// Builds entries of one indicator.
struct EntryBuilder {
    profile: &'static IndicatorProfile,
    taxonomy: Taxonomy,
    /// Floor area × life expectancy for area-normalised formats, else 1.
    factor: f64,
}

impl EntryBuilder {
    fn build(&self, group: &SectionGroup) -> Option<ReportEntry> {
        let first = group.first()?;
        let profile = self.profile;

        let resource = first.text(profile::RESOURCE).to_string();
        let datasource = first.text(profile::DATASOURCE).to_string();
        let original_category = first.text(profile.category_column).to_string();

        let mut metrics: Vec<_> = profile
            .metrics
            .iter()
            .map(|column| {
                let scale = if column.per_area { column.scale * self.factor } else { column.scale };
                material_result(
                    column.kind,
                    group,
                    column.column,
                    &resource,
                    &datasource,
                    profile.remap,
                    scale,
                )
            })
            .collect();

        if let Some(derived) = profile.derived {
            let minuend = metrics.iter().find(|m| m.kind == derived.minuend);
            let subtrahend = metrics.iter().find(|m| m.kind == derived.subtrahend);
            if let (Some(minuend), Some(subtrahend)) = (minuend, subtrahend) {
                let difference = derive_difference(derived.kind, minuend, subtrahend);
                metrics.push(difference);
            }
        }

        Some(ReportEntry {
            quantity: parse_number(first.text(profile::QUANTITY)),
            quantity_unit: first.text(profile::UNIT).to_string(),
            category: classify(self.taxonomy, &original_category),
            metrics,
            question: first.text(profile::QUESTION).to_string(),
            comment: first.text(profile::COMMENT).to_string(),
            service_life: first.text(profile::SERVICE_LIFE).to_string(),
            resource_type: first.text(profile::RESOURCE_TYPE).to_string(),
            years_of_replacement: parse_number(first.text(profile::YEARS_OF_REPLACEMENT)),
            name: if profile.has_name {
                first.text(profile::NAME).to_string()
            } else {
                String::new()
            },
            thickness: profile
                .thickness
                .and_then(|(column, scale)| parse_number(first.text(column)).map(|v| v * scale)),
            mass_of_raw_materials: group
                .iter()
                .map(|(section, row)| {
                    (section.to_string(), parse_number(row.text(profile::MASS_OF_RAW_MATERIALS)))
                })
                .collect(),
            original_extras: self.extras(group),
            resource,
            original_category,
            datasource,
        })
    }

    fn extras(&self, group: &SectionGroup) -> BTreeMap<String, OriginalExtras> {
        group
            .iter()
            .map(|(section, row)| {
                let mut record = self.profile.extras_format.empty();
                for extra in self.profile.extras {
                    let value = match extra.kind {
                        ExtraKind::Text => ExtraValue::Text(row.text(extra.column).to_string()),
                        ExtraKind::Number { scale, per_area } => {
                            let scale = if per_area { scale * self.factor } else { scale };
                            ExtraValue::Number(
                                parse_number(row.text(extra.column))
                                    .map(|v| v * scale)
                                    .filter(|v| v.is_finite()),
                            )
                        }
                    };
                    record.set(extra.field, value);
                }
                (section.to_string(), record)
            })
            .collect()
    }
}

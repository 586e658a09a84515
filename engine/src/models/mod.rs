//! Domain models for the LCA report engine.
//!
//! This module contains the core data structures used throughout the engine:
//!
//! - [`RawRow`] - One export row, header name to cell text
//! - [`Report`] - Normalized report with metadata, entries and fragments
//! - [`ReportEntry`] - One classified material with its metrics
//! - [`EnvironmentalMetric`] - One impact kind across the 20 stage slots
//! - [`Indicator`] - Assessment standard the export was produced for
//! - [`OriginalExtras`] - Format-specific columns kept per section

pub mod extras;
pub mod indicator;
pub mod metric;

pub use extras::{ExtraValue, ExtrasFormat, OriginalExtras};
pub use indicator::Indicator;
pub use metric::{EnvironmentalMetric, MetricKind, Stage, StageValue};

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::category::CanonicalCategory;

// =============================================================================
// Raw Row
// =============================================================================

/// One content row of an export. Blank cells are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: HashMap<String, Option<String>>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from `(header, cell)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut row = RawRow::new();
        for (header, cell) in pairs {
            row.insert(header, cell);
        }
        row
    }

    pub fn insert(&mut self, header: impl Into<String>, cell: impl Into<String>) {
        let cell = cell.into();
        let cell = if cell.trim().is_empty() { None } else { Some(cell) };
        self.cells.insert(header.into(), cell);
    }

    /// Cell text, `""` for absent columns and blank cells.
    pub fn text(&self, column: &str) -> &str {
        self.cells
            .get(column)
            .and_then(|c| c.as_deref())
            .unwrap_or("")
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }
}

// =============================================================================
// Report Entry
// =============================================================================

/// A material of the report, classified and annotated with its metrics.
///
/// One entry per distinct (Resource, Category, Comment, Quantity) group of
/// export rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub resource: String,
    pub quantity: Option<f64>,
    pub quantity_unit: String,
    pub category: CanonicalCategory,
    /// Category cell as found in the export.
    pub original_category: String,
    pub metrics: Vec<EnvironmentalMetric>,
    pub question: String,
    pub comment: String,
    pub service_life: String,
    pub resource_type: String,
    pub datasource: String,
    pub years_of_replacement: Option<f64>,
    #[serde(default)]
    pub name: String,
    /// Thickness in metres.
    #[serde(default)]
    pub thickness: Option<f64>,
    /// Raw material mass (kg) per section.
    #[serde(default)]
    pub mass_of_raw_materials: BTreeMap<String, Option<f64>>,
    #[serde(default)]
    pub original_extras: BTreeMap<String, OriginalExtras>,
}

impl ReportEntry {
    pub fn metric(&self, kind: MetricKind) -> Option<&EnvironmentalMetric> {
        self.metrics.iter().find(|m| m.kind == kind)
    }
}

// =============================================================================
// Report
// =============================================================================

/// Extension data attached to a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ReportFragment {
    /// Inputs needed to scale per-m²-per-year values back to absolute ones.
    #[serde(rename_all = "camelCase")]
    AdditionalInputs {
        floor_area: f64,
        building_life_expectancy: f64,
    },
}

/// A normalized LCA report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub indicator: Indicator,
    pub entity_users: Vec<String>,
    pub project_name: String,
    pub design_name: String,
    pub entries: Vec<ReportEntry>,
    #[serde(default)]
    pub fragments: Vec<ReportFragment>,
}

impl Report {
    pub fn new(indicator: Indicator) -> Self {
        Self {
            indicator,
            ..Default::default()
        }
    }

    /// Floor area and building life expectancy, if provided.
    pub fn additional_inputs(&self) -> Option<(f64, f64)> {
        self.fragments.iter().find_map(|f| match f {
            ReportFragment::AdditionalInputs {
                floor_area,
                building_life_expectancy,
            } => Some((*floor_area, *building_life_expectancy)),
        })
    }

    /// Distinct metric kinds across all entries, in first-appearance order.
    pub fn metric_kinds(&self) -> Vec<MetricKind> {
        let mut kinds = Vec::new();
        for metric in self.entries.iter().flat_map(|e| &e.metrics) {
            if !kinds.contains(&metric.kind) {
                kinds.push(metric.kind);
            }
        }
        kinds
    }
}

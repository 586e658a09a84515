//! Transformation module.
//!
//! This module turns export rows into a normalized report:
//! - Grouper: flat rows to per-entry section groups
//! - Aggregate: per-stage totals and metric records
//! - Profile: declarative per-indicator column tables
//! - Populate: entry building, dispatched on the indicator
//! - Rollup: metric totals per canonical category

pub mod aggregate;
pub mod grouper;
pub mod populate;
pub mod profile;
pub mod rollup;

pub use aggregate::{derive_difference, material_result, parse_number, totals, StageTotals};
pub use grouper::{group_rows, GroupColumns, Grouping, SectionGroup};
pub use populate::{populate_report, PopulateOptions};
pub use profile::{profile, IndicatorProfile};
pub use rollup::{totals_per_category, CategoryTotals};

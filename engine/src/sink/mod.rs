//! Normalized report output.
//!
//! A report is written as a directory of CSV tables, one per worksheet of
//! the normalized layout:
//!
//! - `Report metadata.csv`: key / value rows
//! - `Entries.csv`: common columns, then the entry-level columns
//! - one table per metric kind: common columns, then the 19 stage columns
//! - `Mass of raw materials.csv`: common columns, then one column per section
//! - one table per extras field: common columns, then one column per section
//!
//! Rows of every table are the report entries, in order. [`read_tables`]
//! reads that layout back into a [`Report`].

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::category::CanonicalCategory;
use crate::error::{SinkError, SinkResult};
use crate::models::{
    EnvironmentalMetric, Indicator, MetricKind, OriginalExtras, Report, ReportEntry,
    ReportFragment, Stage,
};
use crate::parser::{DESIGN_NAME, ENTITY_USERS, INDICATOR_NAME, PROJECT_NAME};
use crate::transform::aggregate::{parse_number, sum_numeric};
use crate::transform::profile;

pub const METADATA_TABLE: &str = "Report metadata";
pub const ENTRIES_TABLE: &str = "Entries";
pub const MASS_TABLE: &str = "Mass of raw materials";

const FLOOR_AREA: &str = "Floor area";
const LIFE_EXPECTANCY: &str = "Building life expectancy";

const COMMON_HEADERS: [&str; 4] = ["Resource", "Quantity", "QuantityUnit", "RICSCategory"];
const ENTRY_HEADERS: [&str; 9] = [
    "Question",
    "Comment",
    "ServiceLife",
    "ResourceType",
    "Datasource",
    "YearsOfReplacement",
    "Thickness",
    "Name",
    "OriginalCategory",
];

/// Mass cell of a section the entry has but does not report a mass for.
/// Keeps the section set of each entry through a round trip.
const UNREPORTED: &str = "NaN";

const B_STAGES: [Stage; 7] = [
    Stage::B1,
    Stage::B2,
    Stage::B3,
    Stage::B4,
    Stage::B5,
    Stage::B6,
    Stage::B7,
];

// =============================================================================
// Table
// =============================================================================

/// One worksheet: a name, an optional header row and the data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    fn new(name: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            headers,
            rows: Vec::new(),
        }
    }

    /// Cell of a data row by header name, `""` when absent.
    pub fn cell(&self, row: usize, column: &str) -> &str {
        self.headers
            .iter()
            .position(|h| h == column)
            .and_then(|i| self.rows.get(row)?.get(i))
            .map(|c| c.as_str())
            .unwrap_or("")
    }

    pub fn file_name(&self) -> String {
        format!("{}.csv", self.name)
    }
}

fn number_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn common_cells(entry: &ReportEntry) -> Vec<String> {
    vec![
        entry.resource.clone(),
        number_cell(entry.quantity),
        entry.quantity_unit.clone(),
        entry.category.display(),
    ]
}

fn with_common(extra: impl IntoIterator<Item = String>) -> Vec<String> {
    COMMON_HEADERS
        .iter()
        .map(|h| h.to_string())
        .chain(extra)
        .collect()
}

// =============================================================================
// Writing
// =============================================================================

/// Lay a report out as tables, without touching the filesystem.
pub fn report_tables(report: &Report) -> Vec<Table> {
    let mut tables = vec![metadata_table(report), entries_table(report)];

    for kind in report.metric_kinds() {
        tables.push(metric_table(report, kind));
    }

    let sections: BTreeSet<&str> = report
        .entries
        .iter()
        .flat_map(|e| {
            e.mass_of_raw_materials
                .keys()
                .chain(e.original_extras.keys())
                .map(|s| s.as_str())
        })
        .collect();
    if !sections.is_empty() {
        tables.push(mass_table(report, &sections));
    }

    let fields: Vec<&'static str> = report
        .entries
        .iter()
        .flat_map(|e| e.original_extras.values())
        .next()
        .map(|extras| extras.fields().into_iter().map(|(name, _)| name).collect())
        .unwrap_or_default();
    for field in fields {
        tables.push(extras_table(report, field, &sections));
    }

    tables
}

fn metadata_table(report: &Report) -> Table {
    let mut table = Table::new(METADATA_TABLE, Vec::new());
    let mut row = |key: &str, value: String| table.rows.push(vec![key.to_string(), value]);

    // One row per user; names may contain the delimiter.
    for user in &report.entity_users {
        row(ENTITY_USERS, user.clone());
    }
    row(PROJECT_NAME, report.project_name.clone());
    row(DESIGN_NAME, report.design_name.clone());
    row(INDICATOR_NAME, report.indicator.identifier().to_string());
    if let Some((area, life)) = report.additional_inputs() {
        row(FLOOR_AREA, area.to_string());
        row(LIFE_EXPECTANCY, life.to_string());
    }
    table
}

fn entries_table(report: &Report) -> Table {
    let mut table = Table::new(ENTRIES_TABLE, with_common(ENTRY_HEADERS.map(String::from)));
    for entry in &report.entries {
        let mut cells = common_cells(entry);
        cells.extend([
            entry.question.clone(),
            entry.comment.clone(),
            entry.service_life.clone(),
            entry.resource_type.clone(),
            entry.datasource.clone(),
            number_cell(entry.years_of_replacement),
            number_cell(entry.thickness),
            entry.name.clone(),
            entry.original_category.clone(),
        ]);
        table.rows.push(cells);
    }
    table
}

fn metric_table(report: &Report, kind: MetricKind) -> Table {
    let headers = with_common(Stage::TABLE_COLUMNS.iter().map(|s| s.field_name().to_string()));
    let mut table = Table::new(kind.table_name(), headers);
    for entry in &report.entries {
        let metric = entry.metric(kind);
        let mut cells = common_cells(entry);
        cells.extend(
            Stage::TABLE_COLUMNS
                .iter()
                .map(|stage| number_cell(metric.and_then(|m| m.get(*stage)))),
        );
        table.rows.push(cells);
    }
    table
}

fn mass_table(report: &Report, sections: &BTreeSet<&str>) -> Table {
    let mut table = Table::new(MASS_TABLE, with_common(sections.iter().map(|s| s.to_string())));
    for entry in &report.entries {
        let mut cells = common_cells(entry);
        cells.extend(sections.iter().map(|section| {
            let has_section = entry.mass_of_raw_materials.contains_key(*section)
                || entry.original_extras.contains_key(*section);
            match entry.mass_of_raw_materials.get(*section).copied().flatten() {
                Some(mass) => mass.to_string(),
                None if has_section => UNREPORTED.to_string(),
                None => String::new(),
            }
        }));
        table.rows.push(cells);
    }
    table
}

fn extras_table(report: &Report, field: &str, sections: &BTreeSet<&str>) -> Table {
    let mut table = Table::new(field, with_common(sections.iter().map(|s| s.to_string())));
    for entry in &report.entries {
        let mut cells = common_cells(entry);
        cells.extend(sections.iter().map(|section| {
            entry
                .original_extras
                .get(*section)
                .and_then(|extras| {
                    extras
                        .fields()
                        .into_iter()
                        .find(|(name, _)| *name == field)
                        .map(|(_, value)| value.to_cell())
                })
                .unwrap_or_default()
        }));
        table.rows.push(cells);
    }
    table
}

/// Write a report as a directory of CSV tables. Returns the written paths.
pub fn write_tables(report: &Report, directory: &Path) -> SinkResult<Vec<PathBuf>> {
    fs::create_dir_all(directory)?;

    let mut written = Vec::new();
    for table in report_tables(report) {
        let path = directory.join(table.file_name());
        let mut writer = csv::Writer::from_path(&path)?;
        if !table.headers.is_empty() {
            writer.write_record(&table.headers)?;
        }
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        written.push(path);
    }
    Ok(written)
}

/// Write a report as pretty-printed JSON.
pub fn write_json(report: &Report, path: &Path) -> SinkResult<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(report)?;
    fs::write(path, content)?;
    Ok(path.to_path_buf())
}

// =============================================================================
// Reading
// =============================================================================

fn read_table(directory: &Path, name: &str, has_headers: bool) -> SinkResult<Option<Table>> {
    let path = directory.join(format!("{}.csv", name));
    if !path.exists() {
        return Ok(None);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(&path)?;
    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        records.push(record.iter().map(|c| c.to_string()).collect::<Vec<_>>());
    }

    let mut table = Table::new(name, Vec::new());
    let mut records = records.into_iter();
    if has_headers {
        table.headers = records.next().unwrap_or_default();
    }
    table.rows = records.collect();
    Ok(Some(table))
}

fn require_table(directory: &Path, name: &str, has_headers: bool) -> SinkResult<Table> {
    read_table(directory, name, has_headers)?.ok_or_else(|| SinkError::MissingTable(name.to_string()))
}

/// Read a directory written by [`write_tables`] back into a report.
///
/// `B1toB7` is not part of the table layout; it is derived again from
/// `B1`..`B7`.
pub fn read_tables(directory: &Path) -> SinkResult<Report> {
    let metadata = require_table(directory, METADATA_TABLE, false)?;
    let mut report = read_metadata(&metadata);

    let entries = require_table(directory, ENTRIES_TABLE, true)?;
    report.entries = (0..entries.rows.len()).map(|i| read_entry(&entries, i)).collect();

    for kind in metric_kinds_in(directory, report.indicator)? {
        let table = require_table(directory, kind.table_name(), true)?;
        for (i, entry) in report.entries.iter_mut().enumerate() {
            let metric = read_metric(&table, i, kind).with_names(entry.resource.clone(), entry.datasource.clone());
            entry.metrics.push(metric);
        }
    }

    if let Some(mass) = read_table(directory, MASS_TABLE, true)? {
        let sections: Vec<String> = mass.headers.iter().skip(COMMON_HEADERS.len()).cloned().collect();
        for (i, entry) in report.entries.iter_mut().enumerate() {
            for section in &sections {
                let cell = mass.cell(i, section);
                if !cell.trim().is_empty() {
                    entry.mass_of_raw_materials.insert(section.clone(), parse_number(cell));
                }
            }
        }
    }

    read_extras(directory, &mut report)?;
    Ok(report)
}

fn read_metadata(table: &Table) -> Report {
    let value_of = |key: &str| -> &str {
        table
            .rows
            .iter()
            .find(|row| row.first().map(|k| k.as_str()) == Some(key))
            .and_then(|row| row.get(1))
            .map(|v| v.as_str())
            .unwrap_or("")
    };

    let mut report = Report::new(Indicator::parse(value_of(INDICATOR_NAME)));
    report.entity_users = table
        .rows
        .iter()
        .filter(|row| row.first().map(|k| k.as_str()) == Some(ENTITY_USERS))
        .filter_map(|row| row.get(1))
        .filter(|u| !u.trim().is_empty())
        .cloned()
        .collect();
    report.project_name = value_of(PROJECT_NAME).to_string();
    report.design_name = value_of(DESIGN_NAME).to_string();

    if let (Some(floor_area), Some(building_life_expectancy)) =
        (parse_number(value_of(FLOOR_AREA)), parse_number(value_of(LIFE_EXPECTANCY)))
    {
        report.fragments.push(ReportFragment::AdditionalInputs {
            floor_area,
            building_life_expectancy,
        });
    }
    report
}

fn read_entry(table: &Table, i: usize) -> ReportEntry {
    let text = |column: &str| table.cell(i, column).to_string();
    let category = table
        .cell(i, "RICSCategory")
        .split_whitespace()
        .next()
        .and_then(CanonicalCategory::from_exact_code)
        .unwrap_or_default();

    ReportEntry {
        resource: text("Resource"),
        quantity: parse_number(table.cell(i, "Quantity")),
        quantity_unit: text("QuantityUnit"),
        category,
        original_category: text("OriginalCategory"),
        question: text("Question"),
        comment: text("Comment"),
        service_life: text("ServiceLife"),
        resource_type: text("ResourceType"),
        datasource: text("Datasource"),
        years_of_replacement: parse_number(table.cell(i, "YearsOfReplacement")),
        name: text("Name"),
        thickness: parse_number(table.cell(i, "Thickness")),
        ..Default::default()
    }
}

/// Metric tables present in the directory, in the indicator's metric order.
fn metric_kinds_in(directory: &Path, indicator: Indicator) -> SinkResult<Vec<MetricKind>> {
    let mut kinds = Vec::new();
    for dir_entry in fs::read_dir(directory)? {
        let path = dir_entry?.path();
        if path.extension().map_or(true, |e| e != "csv") {
            continue;
        }
        if let Some(kind) = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(MetricKind::from_table_name)
        {
            kinds.push(kind);
        }
    }

    let declared: Vec<MetricKind> = profile::profile(indicator)
        .map(|p| {
            p.metrics
                .iter()
                .map(|m| m.kind)
                .chain(p.derived.map(|d| d.kind))
                .collect()
        })
        .unwrap_or_default();
    kinds.sort_by_key(|kind| {
        (
            declared.iter().position(|d| d == kind).unwrap_or(declared.len()),
            *kind,
        )
    });
    Ok(kinds)
}

fn read_metric(table: &Table, i: usize, kind: MetricKind) -> EnvironmentalMetric {
    let value = |stage: Stage| parse_number(table.cell(i, stage.field_name()));
    EnvironmentalMetric::from_fn(kind, |stage| match stage {
        Stage::B1toB7 => sum_numeric(B_STAGES.iter().map(|s| value(*s))),
        other => value(other),
    })
}

fn read_extras(directory: &Path, report: &mut Report) -> SinkResult<()> {
    let format = match profile::profile(report.indicator) {
        Some(profile) => profile.extras_format,
        None => return Ok(()),
    };

    let mut tables = Vec::new();
    for (field, _) in format.empty().fields() {
        if let Some(table) = read_table(directory, field, true)? {
            tables.push((field, table));
        }
    }
    if tables.is_empty() {
        return Ok(());
    }

    for (i, entry) in report.entries.iter_mut().enumerate() {
        let mut extras: BTreeMap<String, OriginalExtras> = BTreeMap::new();
        for section in entry.mass_of_raw_materials.keys() {
            let mut record = format.empty();
            for (field, table) in &tables {
                record.set_from_cell(field, table.cell(i, section));
            }
            extras.insert(section.clone(), record);
        }
        entry.original_extras = extras;
    }
    Ok(())
}

/// Read a report written by [`write_json`].
pub fn read_json(path: &Path) -> SinkResult<Report> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExtrasFormat;

    fn sample_report() -> Report {
        let mut report = Report::new(Indicator::BREEAM);
        report.entity_users = vec!["alice@example.com".into(), "bob@example.com".into()];
        report.project_name = "Office".into();
        report.design_name = "Design 1".into();

        let gwp = EnvironmentalMetric::from_fn(MetricKind::ClimateChangeTotalNoBiogenic, |s| match s {
            Stage::A1toA3 => Some(100.0),
            Stage::B4 => Some(0.0),
            Stage::B1toB7 => Some(0.0),
            _ => None,
        })
        .with_names("Concrete, C30/37", "EPD 1");

        let mut extras = ExtrasFormat::Breeam.empty();
        extras.set_from_cell("Energy", "3600000");
        extras.set_from_cell("UniClass", "Ss_25");

        report.entries.push(ReportEntry {
            resource: "Concrete, C30/37".into(),
            quantity: Some(12.5),
            quantity_unit: "m3".into(),
            category: CanonicalCategory::C2_1,
            original_category: "2.1 Frame".into(),
            datasource: "EPD 1".into(),
            metrics: vec![gwp],
            mass_of_raw_materials: [("A1-A3".to_string(), Some(2400.0)), ("B4-B5".to_string(), None)]
                .into_iter()
                .collect(),
            original_extras: [
                ("A1-A3".to_string(), extras),
                ("B4-B5".to_string(), ExtrasFormat::Breeam.empty()),
            ]
            .into_iter()
            .collect(),
            ..Default::default()
        });
        report
    }

    #[test]
    fn test_report_tables_layout() {
        let tables = report_tables(&sample_report());
        let names: Vec<_> = tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(&names[..4], &[METADATA_TABLE, ENTRIES_TABLE, "ClimateChangeTotalNoBiogenic", MASS_TABLE]);
        assert!(names.contains(&"Energy"));
        assert!(names.contains(&"EOLProcess"));

        let metric = &tables[2];
        assert_eq!(metric.headers.len(), 4 + 19);
        assert!(!metric.headers.iter().any(|h| h == "B1toB7"));
        assert_eq!(metric.cell(0, "A1toA3"), "100");
        assert_eq!(metric.cell(0, "B4"), "0");
        assert_eq!(metric.cell(0, "D"), "");
        assert_eq!(metric.cell(0, "RICSCategory"), "2.1 Frame");

        let mass = &tables[3];
        assert_eq!(mass.cell(0, "A1-A3"), "2400");
        assert_eq!(mass.cell(0, "B4-B5"), UNREPORTED);
    }

    #[test]
    fn test_tables_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut report = sample_report();
        report.fragments.push(ReportFragment::AdditionalInputs {
            floor_area: 1000.0,
            building_life_expectancy: 50.0,
        });

        let written = write_tables(&report, dir.path()).unwrap();
        assert!(written.iter().all(|p| p.exists()));

        let back = read_tables(dir.path()).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_entity_users_with_commas_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut report = sample_report();
        report.entity_users = vec!["Smith, Jane".into(), "alice@example.com".into()];

        let metadata = &report_tables(&report)[0];
        let users: Vec<_> = metadata.rows.iter().filter(|r| r[0] == ENTITY_USERS).collect();
        assert_eq!(users.len(), 2);

        write_tables(&report, dir.path()).unwrap();
        let back = read_tables(dir.path()).unwrap();
        assert_eq!(back.entity_users, vec!["Smith, Jane", "alice@example.com"]);
    }

    #[test]
    fn test_missing_entries_table() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Report metadata.csv"), "Project name,Office\n").unwrap();
        match read_tables(dir.path()) {
            Err(SinkError::MissingTable(name)) => assert_eq!(name, ENTRIES_TABLE),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.json");
        let report = sample_report();
        write_json(&report, &path).unwrap();
        assert_eq!(read_json(&path).unwrap(), report);
    }
}

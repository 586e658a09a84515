//! `pull` / `push` verbs.
//!
//! Neither verb returns an error: every problem is recorded in the
//! [`Outcome`] diagnostics and the value comes back as `None` (or as a
//! report without entries when population failed).

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::PullOptions;
use crate::error::{AdapterError, PopulateError, SinkError};
use crate::logs::{Diagnostics, Outcome};
use crate::models::{Indicator, Report};
use crate::parser::{parse_bytes_auto, parse_metadata_auto, ExportMetadata};
use crate::sink;
use crate::transform::populate_report;

// =============================================================================
// Requests
// =============================================================================

/// An export to read and how to read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub path: PathBuf,
    #[serde(default)]
    pub options: PullOptions,
}

impl ReportRequest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            options: PullOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PullOptions) -> Self {
        self.options = options;
        self
    }
}

/// What to pull from an export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PullRequest {
    /// Full report: metadata and populated entries.
    Report(ReportRequest),
    /// Metadata block only.
    Metadata(ReportRequest),
}

/// Where and how to push a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "camelCase")]
pub enum PushConfig {
    /// Directory of CSV tables.
    Tables { directory: PathBuf },
    /// Single JSON document.
    Json { path: PathBuf },
    /// The original One Click LCA layout. Not supported.
    OneClickLca { path: PathBuf },
}

/// What a successful push wrote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushReceipt {
    pub paths: Vec<PathBuf>,
    pub entry_count: usize,
    pub pushed_at: DateTime<Utc>,
}

// =============================================================================
// Pull
// =============================================================================

/// Read an export into a report.
pub async fn pull(request: Option<&PullRequest>) -> Outcome<Option<Report>> {
    let mut diagnostics = Diagnostics::new();

    let (request, metadata_only) = match request {
        Some(PullRequest::Report(request)) => (request, false),
        Some(PullRequest::Metadata(request)) => (request, true),
        None => {
            diagnostics.record_error(AdapterError::InvalidRequest(
                "Please provide a valid request for the pull to work correctly.".to_string(),
            ));
            return Outcome::new(None, diagnostics);
        }
    };

    let report = match pull_report(request, metadata_only, &mut diagnostics).await {
        Ok(report) => Some(report),
        Err(err) => {
            diagnostics.record_error(err);
            None
        }
    };
    Outcome::new(report, diagnostics)
}

async fn pull_report(
    request: &ReportRequest,
    metadata_only: bool,
    diagnostics: &mut Diagnostics,
) -> Result<Report, AdapterError> {
    diagnostics.info(format!("Reading export: {}", request.path.display()));
    let bytes = tokio::fs::read(&request.path)
        .await
        .map_err(|e| AdapterError::Source(e.into()))?;
    let options = &request.options;

    if metadata_only {
        let metadata = parse_metadata_auto(&bytes, options.delimiter)?;
        return Ok(report_from_metadata(&metadata, options));
    }

    let table = parse_bytes_auto(&bytes, options.delimiter)?;
    diagnostics.info(format!(
        "Encoding: {}, delimiter: '{}', {} rows",
        table.encoding,
        format_delimiter(table.delimiter),
        table.rows.len()
    ));

    let report = report_from_metadata(&table.metadata, options);
    if report.indicator == Indicator::Undefined {
        diagnostics.record_error(PopulateError::UnsupportedIndicator {
            value: table.metadata.indicator_name.clone(),
            valid: Indicator::valid_names(),
        });
        return Ok(report);
    }

    let outcome = populate_report(report, table.rows, &options.populate_options());
    diagnostics.absorb(outcome.diagnostics);
    Ok(outcome.value)
}

fn report_from_metadata(metadata: &ExportMetadata, options: &PullOptions) -> Report {
    let mut report = Report::new(Indicator::parse(&metadata.indicator_name));
    report.entity_users = metadata.entity_users.clone();
    report.project_name = metadata.project_name.clone();
    report.design_name = metadata.design_name.clone();
    report.fragments.extend(options.additional_inputs());
    report
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

// =============================================================================
// Push
// =============================================================================

/// Write a report to the configured output.
pub async fn push(report: Option<&Report>, config: Option<&PushConfig>) -> Outcome<Option<PushReceipt>> {
    let mut diagnostics = Diagnostics::new();

    let report = match report {
        Some(report) => report,
        None => {
            diagnostics.record_error(AdapterError::InvalidRequest(
                "No report was provided for push.".to_string(),
            ));
            return Outcome::new(None, diagnostics);
        }
    };
    let config = match config {
        Some(config) => config,
        None => {
            diagnostics.record_error(AdapterError::InvalidRequest(
                "No valid push config was provided.".to_string(),
            ));
            return Outcome::new(None, diagnostics);
        }
    };

    let written = match config {
        PushConfig::Tables { directory } => write_tables(report, directory),
        PushConfig::Json { path } => sink::write_json(report, path).map(|p| vec![p]),
        PushConfig::OneClickLca { .. } => Err(SinkError::UnsupportedFormat(
            "Saving the report in the original One Click LCA format is currently not supported"
                .to_string(),
        )),
    };

    match written {
        Ok(paths) => {
            diagnostics.success(format!("{} files written", paths.len()));
            let receipt = PushReceipt {
                paths,
                entry_count: report.entries.len(),
                pushed_at: Utc::now(),
            };
            Outcome::new(Some(receipt), diagnostics)
        }
        Err(err) => {
            diagnostics.record_error(AdapterError::from(err));
            Outcome::new(None, diagnostics)
        }
    }
}

fn write_tables(report: &Report, directory: &Path) -> Result<Vec<PathBuf>, SinkError> {
    if report.entries.is_empty() {
        return Err(SinkError::UnsupportedFormat(
            "The report has no entries to write".to_string(),
        ));
    }
    sink::write_tables(report, directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MetricKind, Stage};
    use crate::transform::profile::{self, ExtraKind};

    const SECTIONS: [&str; 9] = ["A1-A3", "A4", "B4-B5", "B4", "B4-Abfall", "B6a", "B6b", "C3", "D"];

    fn csv_line(cells: &[String]) -> String {
        let quoted: Vec<String> = cells
            .iter()
            .map(|c| format!("\"{}\"", c.replace('"', "\"\"")))
            .collect();
        quoted.join(",") + "\n"
    }

    /// A synthetic export for `indicator` covering every column of its profile.
    fn export_for(indicator: Indicator) -> String {
        let profile = profile::profile(indicator).unwrap();
        let mut headers: Vec<String> = [
            profile::SECTION,
            profile::RESOURCE,
            profile.category_column,
            profile::QUANTITY,
            profile::UNIT,
            profile::DATASOURCE,
            profile::MASS_OF_RAW_MATERIALS,
            profile::NAME,
        ]
        .iter()
        .map(|h| h.to_string())
        .collect();
        if let Some((column, _)) = profile.thickness {
            headers.push(column.to_string());
        }
        headers.extend(profile.metrics.iter().map(|m| m.column.to_string()));
        headers.extend(profile.extras.iter().map(|e| e.column.to_string()));

        let mut out = csv_line(&["Entity users", "Project name", "Design name", "Indicator name"].map(String::from));
        out += &csv_line(&[
            "alice@example.com, bob@example.com".to_string(),
            "Office".to_string(),
            "Design 1".to_string(),
            indicator.display_text().to_string(),
        ]);
        out += &csv_line(&headers);

        let materials = [("Concrete, C30/37", "12.5"), ("Steel", "3")];
        for (m, (resource, quantity)) in materials.iter().enumerate() {
            for (s, section) in SECTIONS.iter().enumerate() {
                let mut cells = vec![
                    section.to_string(),
                    resource.to_string(),
                    "2.1 Frame".to_string(),
                    quantity.to_string(),
                    "m3".to_string(),
                    format!("EPD {}", m),
                    if s % 3 == 0 { String::new() } else { format!("{}", 100 * (s + 1)) },
                    format!("{} product", resource),
                ];
                if profile.thickness.is_some() {
                    cells.push("200".to_string());
                }
                for j in 0..profile.metrics.len() {
                    // Leave some cells blank so "not computed" travels too.
                    if (j + s) % 4 == 0 {
                        cells.push(String::new());
                    } else {
                        cells.push(format!("{}", (j as f64 + 1.0) * 0.25 + (s * (m + 1)) as f64));
                    }
                }
                for (j, extra) in profile.extras.iter().enumerate() {
                    cells.push(match extra.kind {
                        ExtraKind::Text => format!("label {}", j),
                        ExtraKind::Number { .. } if s == 1 => String::new(),
                        ExtraKind::Number { .. } => format!("{}", j + s),
                    });
                }
                out += &csv_line(&cells);
            }
        }
        out
    }

    fn request(path: &Path) -> ReportRequest {
        ReportRequest::new(path).with_options(PullOptions::default().with_additional_inputs(1000.0, 50.0))
    }

    #[tokio::test]
    async fn test_round_trip_for_every_indicator() {
        for indicator in Indicator::SUPPORTED {
            let dir = tempfile::tempdir().unwrap();
            let export = dir.path().join("export.csv");
            std::fs::write(&export, export_for(indicator)).unwrap();

            let pulled = pull(Some(&PullRequest::Report(request(&export)))).await;
            assert!(!pulled.diagnostics.has_errors(), "{:?}", indicator);
            let report = pulled.value.unwrap();
            assert_eq!(report.indicator, indicator);
            assert_eq!(report.entries.len(), 2, "{:?}", indicator);

            let out = dir.path().join("tables");
            let pushed = push(Some(&report), Some(&PushConfig::Tables { directory: out.clone() })).await;
            let receipt = pushed.value.unwrap();
            assert_eq!(receipt.entry_count, 2);

            let back = sink::read_tables(&out).unwrap();
            assert_eq!(back.entries.len(), report.entries.len());
            for (original, read) in report.entries.iter().zip(&back.entries) {
                assert_eq!(read.resource, original.resource);
                assert_eq!(read.quantity, original.quantity);
                assert_eq!(read.category, original.category);
                for metric in &original.metrics {
                    let read_metric = read.metric(metric.kind).unwrap();
                    for stage in Stage::ALL {
                        match (metric.get(stage), read_metric.get(stage)) {
                            (Some(a), Some(b)) => assert!((a - b).abs() < 1e-9, "{:?} {:?}", indicator, stage),
                            (a, b) => assert_eq!(a, b, "{:?} {:?} {:?}", indicator, metric.kind, stage),
                        }
                    }
                }
            }
            assert_eq!(back, report, "{:?}", indicator);
        }
    }

    #[tokio::test]
    async fn test_pull_levels_a2_appends_derived_metric() {
        let dir = tempfile::tempdir().unwrap();
        let export = dir.path().join("export.csv");
        std::fs::write(&export, export_for(Indicator::Levels_Assessment_A2)).unwrap();

        let report = pull(Some(&PullRequest::Report(ReportRequest::new(&export))))
            .await
            .value
            .unwrap();
        let metrics = &report.entries[0].metrics;
        assert_eq!(metrics.last().map(|m| m.kind), Some(MetricKind::ClimateChangeTotalNoBiogenic));
        assert_eq!(report.entries[0].thickness, Some(0.2));
    }

    #[tokio::test]
    async fn test_pull_dgnb_without_inputs_records_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let export = dir.path().join("export.csv");
        std::fs::write(&export, export_for(Indicator::DGNB)).unwrap();

        let outcome = pull(Some(&PullRequest::Report(ReportRequest::new(&export)))).await;
        let report = outcome.value.unwrap();
        assert!(report.entries.is_empty());
        assert!(outcome
            .diagnostics
            .has_populate_error(|e| matches!(e, PopulateError::MissingInput(_))));
    }

    #[tokio::test]
    async fn test_pull_metadata_only() {
        let dir = tempfile::tempdir().unwrap();
        let export = dir.path().join("export.csv");
        std::fs::write(&export, export_for(Indicator::BREEAM)).unwrap();

        let outcome = pull(Some(&PullRequest::Metadata(request(&export)))).await;
        let report = outcome.value.unwrap();
        assert_eq!(report.indicator, Indicator::BREEAM);
        assert_eq!(report.entity_users, vec!["alice@example.com", "bob@example.com"]);
        assert_eq!(report.project_name, "Office");
        assert!(report.entries.is_empty());
        assert_eq!(report.additional_inputs(), Some((1000.0, 50.0)));
    }

    #[tokio::test]
    async fn test_pull_unknown_indicator() {
        let dir = tempfile::tempdir().unwrap();
        let export = dir.path().join("export.csv");
        let content = export_for(Indicator::BREEAM).replace("LCA for BREEAM UK", "LCA for HQE");
        std::fs::write(&export, content).unwrap();

        let outcome = pull(Some(&PullRequest::Report(ReportRequest::new(&export)))).await;
        let report = outcome.value.unwrap();
        assert_eq!(report.indicator, Indicator::Undefined);
        assert!(report.entries.is_empty());
        assert!(outcome.diagnostics.has_populate_error(
            |e| matches!(e, PopulateError::UnsupportedIndicator { value, .. } if value == "LCA for HQE")
        ));
    }

    #[tokio::test]
    async fn test_pull_failures_are_recorded() {
        let outcome = pull(None).await;
        assert!(outcome.value.is_none());
        assert!(outcome.diagnostics.has_errors());

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.csv");
        let outcome = pull(Some(&PullRequest::Report(ReportRequest::new(&missing)))).await;
        assert!(outcome.value.is_none());
        assert!(outcome.diagnostics.has_errors());

        let empty = dir.path().join("empty.csv");
        std::fs::write(&empty, "").unwrap();
        let outcome = pull(Some(&PullRequest::Report(ReportRequest::new(&empty)))).await;
        assert!(outcome.value.is_none());
        assert!(outcome.diagnostics.has_errors());
    }

    #[tokio::test]
    async fn test_push_json_and_unsupported_format() {
        let dir = tempfile::tempdir().unwrap();
        let report = Report::new(Indicator::BREEAM);

        let path = dir.path().join("report.json");
        let outcome = push(Some(&report), Some(&PushConfig::Json { path: path.clone() })).await;
        assert_eq!(outcome.value.unwrap().paths, vec![path.clone()]);
        assert_eq!(sink::read_json(&path).unwrap(), report);

        let outcome = push(
            Some(&report),
            Some(&PushConfig::OneClickLca { path: dir.path().join("x.xlsx") }),
        )
        .await;
        assert!(outcome.value.is_none());
        assert!(outcome.diagnostics.has_errors());

        assert!(push(None, Some(&PushConfig::Json { path })).await.value.is_none());
        assert!(push(Some(&report), None).await.value.is_none());
    }
}

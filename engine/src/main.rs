//! lcareport CLI - One Click LCA exports to normalized reports
//!
//! # Main Commands
//!
//! ```bash
//! lcareport pull export.csv -o report.json     # Export to report JSON
//! lcareport push report.json out/              # Report JSON to CSV tables
//! lcareport convert export.csv out/            # Both in one go
//! lcareport totals report.json --level 2       # Totals per category
//! ```
//!
//! # Debug Commands
//!
//! ```bash
//! lcareport parse export.csv                   # Metadata and headers only
//! lcareport classify rics-v1 "2.5.1 Walls"     # Classify one category code
//! ```

use clap::{Parser, Subcommand};
use lcareport::{
    classify, clean_code, log_error, log_info, log_success, log_warning, parse_file_auto, pull,
    push, read_json, totals_per_category, LogEntry, Outcome, PullOptions, PullRequest, PushConfig,
    Report, ReportRequest, Taxonomy,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "lcareport")]
#[command(about = "Classify and aggregate One Click LCA exports into normalized reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone)]
struct PullArgs {
    /// Floor area in m² (DGNB exports)
    #[arg(long)]
    floor_area: Option<f64>,

    /// Building life expectancy in years (DGNB exports)
    #[arg(long)]
    life_expectancy: Option<f64>,

    /// CSV delimiter (auto-detect if not specified)
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Classify whole life carbon exports against RICS v2
    #[arg(long)]
    rics_v2: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Read an export into a report JSON
    Pull {
        /// Input export file
        input: PathBuf,

        #[command(flatten)]
        options: PullArgs,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a report JSON as a directory of CSV tables
    Push {
        /// Input report JSON
        input: PathBuf,

        /// Output directory
        directory: PathBuf,
    },

    /// Pull an export and push it as CSV tables
    Convert {
        /// Input export file
        input: PathBuf,

        /// Output directory
        directory: PathBuf,

        #[command(flatten)]
        options: PullArgs,
    },

    /// Metric totals per category of a report JSON
    Totals {
        /// Input report JSON
        input: PathBuf,

        /// Category level (0 = each entry's own category)
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        level: i32,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Classify a category code
    Classify {
        /// Source taxonomy (rics-v1, rics-v2, din276, omniclass, levels)
        taxonomy: String,

        /// Category code as found in the export
        code: String,
    },

    /// Parse an export and show its metadata and columns
    Parse {
        /// Input export file
        input: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,
    },
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Pull {
            input,
            options,
            output,
        } => cmd_pull(&input, options, output.as_deref()).await,

        Commands::Push { input, directory } => cmd_push(&input, &directory).await,

        Commands::Convert {
            input,
            directory,
            options,
        } => cmd_convert(&input, &directory, options).await,

        Commands::Totals {
            input,
            level,
            output,
        } => cmd_totals(&input, level, output.as_deref()),

        Commands::Classify { taxonomy, code } => cmd_classify(&taxonomy, &code),

        Commands::Parse { input, delimiter } => cmd_parse(&input, delimiter),
    };

    if let Err(e) = result {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

/// CLI flags first, then the environment.
fn pull_options(args: PullArgs) -> Result<PullOptions, Box<dyn std::error::Error>> {
    let cli = PullOptions {
        floor_area: args.floor_area,
        building_life_expectancy: args.life_expectancy,
        delimiter: args.delimiter,
        rics_v2: args.rics_v2,
    };
    Ok(cli.or(PullOptions::from_env()?))
}

/// Turn recorded errors into a failed command.
fn check<T>(outcome: Outcome<Option<T>>, what: &str) -> Result<T, Box<dyn std::error::Error>> {
    let failed = outcome.diagnostics.has_errors();
    let warnings = outcome.diagnostics.warnings.len();
    if warnings > 0 {
        log_warning(format!("{} finished with {} warning(s)", what, warnings));
    }
    match outcome.value {
        Some(value) if !failed => Ok(value),
        _ => Err(format!("{} failed with {} error(s)", what, outcome.diagnostics.errors.len()).into()),
    }
}

async fn pull_report(input: &Path, args: PullArgs) -> Result<Report, Box<dyn std::error::Error>> {
    log_info(format!("📄 Pulling: {}", input.display()));
    let request = PullRequest::Report(ReportRequest::new(input).with_options(pull_options(args)?));
    let report = check(pull(Some(&request)).await, "Pull")?;
    LogEntry::info(format!("Indicator: {}", report.indicator)).with_indent(1).emit();
    LogEntry::info(format!("Project: {} / {}", report.project_name, report.design_name))
        .with_indent(1)
        .emit();
    log_success(format!("{} entries", report.entries.len()));
    Ok(report)
}

async fn cmd_pull(input: &Path, args: PullArgs, output: Option<&Path>) -> CliResult {
    let report = pull_report(input, args).await?;
    let json = serde_json::to_string_pretty(&report)?;
    write_output(&json, output)
}

async fn cmd_push(input: &Path, directory: &Path) -> CliResult {
    log_info(format!("📦 Pushing: {}", input.display()));
    let report = read_json(input)?;
    push_tables(&report, directory).await
}

async fn cmd_convert(input: &Path, directory: &Path, args: PullArgs) -> CliResult {
    let report = pull_report(input, args).await?;
    push_tables(&report, directory).await
}

async fn push_tables(report: &Report, directory: &Path) -> CliResult {
    let config = PushConfig::Tables {
        directory: directory.to_path_buf(),
    };
    let receipt = check(push(Some(report), Some(&config)).await, "Push")?;
    for path in &receipt.paths {
        LogEntry::info(format!("💾 {}", path.display())).with_indent(1).emit();
    }
    log_success(format!(
        "✨ Done! {} entries written at {}",
        receipt.entry_count,
        receipt.pushed_at.to_rfc3339()
    ));
    Ok(())
}

fn cmd_totals(input: &Path, level: i32, output: Option<&Path>) -> CliResult {
    let report = read_json(input)?;
    let outcome = totals_per_category(&report.entries, level);
    log_info(format!("📊 {} categories", outcome.value.len()));
    let json = serde_json::to_string_pretty(&outcome.value)?;
    write_output(&json, output)
}

fn cmd_classify(taxonomy: &str, code: &str) -> CliResult {
    let taxonomy = Taxonomy::parse(taxonomy).ok_or_else(|| format!("Unknown taxonomy '{}'", taxonomy))?;
    let category = classify(taxonomy, code);
    log_info(format!("Cleaned code: '{}'", clean_code(taxonomy, code)));
    log_info(format!("Level: {}", category.level()));
    println!("{}", category);
    Ok(())
}

fn cmd_parse(input: &Path, delimiter: Option<char>) -> CliResult {
    log_info(format!("📄 Parsing export: {}", input.display()));

    let table = parse_file_auto(input, delimiter)?;

    LogEntry::info(format!("Encoding: {}", table.encoding)).with_indent(1).emit();
    LogEntry::info(format!(
        "Delimiter: '{}'{}",
        format_delimiter(table.delimiter),
        if delimiter.is_none() { " (auto-detected)" } else { "" }
    ))
    .with_indent(1)
    .emit();
    log_success(format!("Parsed {} rows", table.rows.len()));

    let summary = serde_json::json!({
        "entityUsers": table.metadata.entity_users,
        "projectName": table.metadata.project_name,
        "designName": table.metadata.design_name,
        "indicatorName": table.metadata.indicator_name,
        "headers": table.headers,
        "rowCount": table.rows.len(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

fn write_output(content: &str, path: Option<&Path>) -> CliResult {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            log_success(format!("💾 Output written to: {}", p.display()));
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

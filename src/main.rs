use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use log::{info, warn};
use walkdir::WalkDir;

use log_pipeline::config::{load_config, PipelineConfig};
use log_pipeline::metrics::METRICS;
use log_pipeline::pipeline::{merge_tables, process_log_table};
use log_pipeline::reader::{read_machine_log, read_slice_geometry};
use log_pipeline::table::DataTable;
use log_pipeline::writer::write_table_csv;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Machine log ingestion and merge pipeline", long_about = None)]
struct Cli {
    /// Directory scanned recursively for machine log files (*.log, *.txt)
    #[clap(long, value_parser)]
    logs_dir: Option<PathBuf>,
    /// Explicit machine log file; repeatable, processed in the given order
    #[clap(long, value_parser)]
    log_file: Vec<PathBuf>,
    /// Slice-geometry export to merge onto the processed log
    #[clap(long, value_parser)]
    slice_file: Option<PathBuf>,
    /// JSON pipeline configuration
    #[clap(long, value_parser)]
    config: Option<PathBuf>,
    /// Overrides the configured reference date (YYYY-MM-DD)
    #[clap(long)]
    reference_date: Option<NaiveDate>,
    /// Output CSV path
    #[clap(long, default_value = "merged_logs.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    if let Some(date) = cli.reference_date {
        config.reference_date = date;
    }

    let log_files = collect_log_files(&cli)?;
    if log_files.is_empty() {
        bail!("No machine log files given; use --logs-dir or --log-file");
    }
    info!("Processing {} machine log file(s)", log_files.len());

    let mut combined: Option<DataTable> = None;
    for path in &log_files {
        METRICS.lock().record_file_attempt();
        match read_machine_log(path) {
            Ok(table) => {
                info!("Parsed {} rows from {}", table.height(), path.display());
                METRICS.lock().record_file_success(table.height() as u64);
                match combined.as_mut() {
                    Some(all) => all
                        .append_rows(table)
                        .with_context(|| format!("Header mismatch in {}", path.display()))?,
                    None => combined = Some(table),
                }
            }
            Err(e) => {
                // File-level failures skip the file; row-level failures
                // inside the core transformations below still abort the run.
                warn!("Skipping {}: {}", path.display(), e);
                METRICS.lock().record_file_failure();
            }
        }
    }
    let mut logs = combined.context("All machine log files failed to parse")?;

    process_log_table(&mut logs, &config).context("Log processing failed")?;

    let output = match &cli.slice_file {
        Some(path) => {
            let geometry = read_slice_geometry(path)
                .with_context(|| format!("Failed to read slice geometry {}", path.display()))?;
            merge_tables(&logs, &geometry, &config).context("Positional merge failed")?
        }
        None => logs,
    };
    METRICS.lock().record_merged(output.height() as u64);

    write_table_csv(&output, &cli.output)
        .with_context(|| format!("Failed to write output {}", cli.output.display()))?;
    info!(
        "Wrote {} rows x {} columns to {}",
        output.height(),
        output.width(),
        cli.output.display()
    );

    METRICS.lock().print_summary();
    Ok(())
}

/// Explicit --log-file paths first (in order), then a sorted recursive scan
/// of --logs-dir.
fn collect_log_files(cli: &Cli) -> Result<Vec<PathBuf>> {
    let mut files = cli.log_file.clone();
    if let Some(dir) = &cli.logs_dir {
        let mut scanned = Vec::new();
        for entry in WalkDir::new(dir) {
            let entry =
                entry.with_context(|| format!("Failed to scan directory {}", dir.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let ext = entry
                .path()
                .extension()
                .and_then(|s| s.to_str())
                .map(str::to_lowercase);
            if matches!(ext.as_deref(), Some("log") | Some("txt")) {
                scanned.push(entry.path().to_path_buf());
            }
        }
        scanned.sort();
        files.extend(scanned);
    }
    Ok(files)
}

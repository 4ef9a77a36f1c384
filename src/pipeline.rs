//! Stage orchestration over prepared tables.
//!
//! The stage order matters: timestamps are reconstructed from the raw text
//! cells first, names are sanitized before type-driven stages look columns
//! up, and the consumption metrics require normalized floats.

use log::info;

use crate::config::PipelineConfig;
use crate::consumption::derive_consumption;
use crate::errors::PipelineError;
use crate::merge::merge_with_geometry;
use crate::normalize::{normalize_types, sanitize_column_name, sanitize_columns};
use crate::table::DataTable;
use crate::timestamp::reconstruct_table;

/// Runs the core transformations over one prepared machine-log table:
/// timestamp reconstruction, name sanitization, type normalization, and
/// consumption derivation.
pub fn process_log_table(
    logs: &mut DataTable,
    config: &PipelineConfig,
) -> Result<(), PipelineError> {
    reconstruct_table(logs, &config.time_column, config.reference_date)?;
    sanitize_columns(logs);
    let time_column = sanitize_column_name(&config.time_column);
    normalize_types(
        logs,
        &time_column,
        &config.counter_columns,
        config.cast_policy,
    )?;
    derive_consumption(logs, &config.consumption_column, config.min_difference)?;
    info!(
        "Processed log table: {} rows x {} columns",
        logs.height(),
        logs.width()
    );
    Ok(())
}

/// Positionally merges a prepared slice-geometry table onto a processed log
/// table.
pub fn merge_tables(
    logs: &DataTable,
    geometry: &DataTable,
    config: &PipelineConfig,
) -> Result<DataTable, PipelineError> {
    let merged = merge_with_geometry(logs, geometry, &config.slice_columns)?;
    info!("Merged output has {} rows", merged.height());
    Ok(merged)
}

//! CSV output of processed tables.

use std::path::Path;

use csv::Writer;

use crate::errors::PipelineError;
use crate::table::{Cell, DataTable};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes `table` as comma-delimited CSV. Missing cells and NaN serialize
/// as empty fields.
pub fn write_table_csv(table: &DataTable, path: &Path) -> Result<(), PipelineError> {
    let csv_err = |source: csv::Error| PipelineError::CsvOutputError {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = Writer::from_path(path).map_err(csv_err)?;

    writer.write_record(table.columns()).map_err(csv_err)?;
    for row in table.rows() {
        let fields: Vec<String> = row.iter().map(format_cell).collect();
        writer.write_record(&fields).map_err(csv_err)?;
    }
    writer.flush().map_err(|e| PipelineError::OutputError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}

fn format_cell(cell: &Cell) -> String {
    match cell {
        Cell::Text(s) => s.clone(),
        Cell::Int(v) => v.to_string(),
        Cell::Float(v) if v.is_nan() => String::new(),
        Cell::Float(v) => v.to_string(),
        Cell::Timestamp(ts) => ts.format(TIMESTAMP_FORMAT).to_string(),
        Cell::Missing => String::new(),
    }
}

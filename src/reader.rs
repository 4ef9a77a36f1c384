//! Table preparation: raw log files to rectangular [`DataTable`]s.
//!
//! The machine logger re-emits its header line periodically (every flush),
//! so a raw file interleaves header copies with data rows. Only the first
//! occurrence is kept before the pipe-delimited parse. The slice-geometry
//! export is a separate semicolon-delimited file with comma decimals and
//! verbose headers that are renamed to short names here.

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use log::{debug, warn};

use crate::errors::ParseError;
use crate::table::{Cell, DataTable};
use crate::utils::parse_locale_float;

/// Header renames applied to slice-geometry exports. The slicer's export
/// encoding mangles the superscript in "mm²" inconsistently across versions,
/// hence the duplicate source spellings.
const SLICE_RENAMES: &[(&str, &str)] = &[
    ("Total slice surface (mm2)", "tss"),
    ("Total slice surface (mm?)", "tss"),
    ("Part (mm?)", "part"),
    ("Non solid support (mm?)", "nss"),
    ("Solid support (mm?)", "ss"),
];

/// Reads a pipe-delimited machine log, deduplicating repeated header lines.
///
/// The first line is the header; later lines identical to it are dropped.
/// Columns whose trimmed header name is empty (artifact of the trailing
/// delimiter) are dropped. All cells are trimmed text; typing happens later
/// in normalization.
pub fn read_machine_log(path: &Path) -> Result<DataTable, ParseError> {
    let raw = fs::read_to_string(path).map_err(|e| ParseError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut lines = raw.lines().map(str::trim);
    let header = lines.next().filter(|l| !l.is_empty()).ok_or_else(|| {
        ParseError::EmptyFile {
            path: path.to_path_buf(),
        }
    })?;

    let mut repeated = 0usize;
    let mut cleaned = String::with_capacity(raw.len());
    cleaned.push_str(header);
    cleaned.push('\n');
    for line in lines {
        if line == header {
            repeated += 1;
            continue;
        }
        cleaned.push_str(line);
        cleaned.push('\n');
    }
    if repeated > 0 {
        debug!(
            "Dropped {} repeated header line(s) in {}",
            repeated,
            path.display()
        );
    }

    parse_delimited(&cleaned, b'|', path, |s| Cell::Text(s.to_string()))
}

/// Reads a semicolon-delimited slice-geometry export.
///
/// Headers are renamed to short names, numeric cells are parsed with comma
/// decimals, and columns containing any missing cell are dropped (the export
/// pads optional geometry columns inconsistently).
pub fn read_slice_geometry(path: &Path) -> Result<DataTable, ParseError> {
    let raw = fs::read_to_string(path).map_err(|e| ParseError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut table = parse_delimited(&raw, b';', path, |s| {
        if s.is_empty() {
            Cell::Missing
        } else {
            match parse_locale_float(s) {
                Ok(v) => Cell::Float(v),
                Err(_) => Cell::Text(s.to_string()),
            }
        }
    })?;
    table.rename_columns(SLICE_RENAMES);
    let before = table.width();
    table.drop_incomplete_columns();
    if table.width() < before {
        debug!(
            "Dropped {} incomplete column(s) from {}",
            before - table.width(),
            path.display()
        );
    }
    Ok(table)
}

/// Parses delimited text into a table, mapping each trimmed field through
/// `make_cell`. Empty-named columns are dropped; short rows are padded with
/// missing cells and logged.
fn parse_delimited(
    data: &str,
    delimiter: u8,
    path: &Path,
    make_cell: impl Fn(&str) -> Cell,
) -> Result<DataTable, ParseError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(data.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ParseError::RecordReadError {
            path: path.to_path_buf(),
            source: e,
        })?
        .clone();

    // Keep only columns with a real header name.
    let kept: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter_map(|(i, h)| {
            let name = h.trim();
            if name.is_empty() {
                None
            } else {
                Some((i, name.to_string()))
            }
        })
        .collect();

    let mut table = DataTable::new(kept.iter().map(|(_, name)| name.clone()).collect());
    for (row_index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| ParseError::RecordReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        if record.len() < kept.last().map(|(i, _)| i + 1).unwrap_or(0) {
            warn!(
                "Row {} in {} has {} field(s), expected {}; padding with missing",
                row_index,
                path.display(),
                record.len(),
                headers.len()
            );
        }
        let cells = kept
            .iter()
            .map(|(i, _)| match record.get(*i) {
                Some(field) => make_cell(field.trim()),
                None => Cell::Missing,
            })
            .collect();
        table.push_row(cells);
    }
    Ok(table)
}

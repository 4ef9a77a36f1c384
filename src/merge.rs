//! Positional merge of slice-geometry measurements onto the process log.

use log::warn;

use crate::errors::TypeError;
use crate::table::{Cell, DataTable};

const MM2_TO_M2: f64 = 1e-4;

/// Concatenates `slice_columns` of `geometry` onto `log` by row position
/// (row i of the log pairs with row i of the geometry table) and derives
/// `tss_m2` from `tss`. Rows containing a missing cell or NaN in any column
/// are dropped afterwards.
///
/// The caller must ensure both tables cover the same physical time span at
/// the same row cadence: this function performs no alignment beyond row
/// position, so a desynchronized pair produces silently wrong pairings. A
/// row-count mismatch is logged as an advisory, never raised.
pub fn merge_with_geometry(
    log: &DataTable,
    geometry: &DataTable,
    slice_columns: &[String],
) -> Result<DataTable, TypeError> {
    if log.height() != geometry.height() {
        warn!(
            "Row count mismatch in positional merge: log has {} rows, geometry has {}; \
             unmatched rows will be dropped as missing",
            log.height(),
            geometry.height()
        );
    }

    let geometry_indices: Vec<usize> = slice_columns
        .iter()
        .map(|name| geometry.require_column(name))
        .collect::<Result<_, _>>()?;
    let tss_pos = slice_columns.iter().position(|c| c == "tss");

    let mut columns: Vec<String> = log.columns().to_vec();
    columns.extend(slice_columns.iter().cloned());
    if tss_pos.is_some() {
        columns.push("tss_m2".to_string());
    }

    let mut merged = DataTable::new(columns);
    let height = log.height().max(geometry.height());
    for row in 0..height {
        let mut cells: Vec<Cell> = if row < log.height() {
            log.rows()[row].clone()
        } else {
            vec![Cell::Missing; log.width()]
        };
        for &col in &geometry_indices {
            cells.push(if row < geometry.height() {
                geometry.cell(row, col).clone()
            } else {
                Cell::Missing
            });
        }
        if let Some(p) = tss_pos {
            let tss_m2 = cells[log.width() + p]
                .as_f64()
                .map(|v| Cell::Float(v * MM2_TO_M2))
                .unwrap_or(Cell::Missing);
            cells.push(tss_m2);
        }
        merged.push_row(cells);
    }

    merged.drop_incomplete_rows();
    Ok(merged)
}

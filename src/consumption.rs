//! Incremental paste-consumption metrics derived from a cumulative sensor
//! column.

use crate::errors::TypeError;
use crate::table::{Cell, DataTable};

pub const DEFAULT_MIN_DIFFERENCE: f64 = 0.02;

/// Appends `Ag_Cons` (gated per-row difference of `source_column`) and
/// `Ag_Cons_cs` (running sum of its absolute values) to `table`.
///
/// The gate compares the SIGNED difference against `min_difference`, so a
/// negative difference of any magnitude is forced to zero, not only small
/// positive jitter. Callers expecting "small absolute change suppressed"
/// semantics must not rely on this function for negative excursions.
///
/// The first row has no predecessor; both derived cells are NaN there. Rows
/// whose source cell is not numeric also yield NaN, and the running sum
/// carries past them unchanged.
pub fn derive_consumption(
    table: &mut DataTable,
    source_column: &str,
    min_difference: f64,
) -> Result<(), TypeError> {
    let col = table.require_column(source_column)?;

    let values: Vec<Option<f64>> = table
        .rows()
        .iter()
        .map(|row| row[col].as_f64())
        .collect();

    let mut cons = Vec::with_capacity(values.len());
    let mut cumulative = Vec::with_capacity(values.len());
    let mut running = 0.0;
    for i in 0..values.len() {
        let prev = if i == 0 { None } else { values[i - 1] };
        let diff = match (prev, values[i]) {
            (Some(prev), Some(cur)) => {
                let d = cur - prev;
                if d < min_difference {
                    0.0
                } else {
                    d
                }
            }
            _ => f64::NAN,
        };
        if diff.is_nan() {
            cons.push(Cell::Float(f64::NAN));
            cumulative.push(Cell::Float(f64::NAN));
        } else {
            running += diff.abs();
            cons.push(Cell::Float(diff));
            cumulative.push(Cell::Float(running));
        }
    }

    table.push_column("Ag_Cons", cons);
    table.push_column("Ag_Cons_cs", cumulative);
    Ok(())
}

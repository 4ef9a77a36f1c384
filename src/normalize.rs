//! Column-name sanitization and typed casting.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::TypeError;
use crate::table::{Cell, DataTable};
use crate::utils::parse_locale_float;

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]").unwrap());

/// How to treat a cell that cannot be converted to its target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CastPolicy {
    /// Fail on the first unconvertible cell, reporting column and row.
    Strict,
    /// Replace unconvertible cells with the missing sentinel.
    Coerce,
}

/// Sanitizes a header to alphanumeric-plus-underscore.
pub fn sanitize_column_name(name: &str) -> String {
    NON_ALNUM.replace_all(name.trim(), "_").into_owned()
}

/// Sanitizes every column name of `table` in place.
pub fn sanitize_columns(table: &mut DataTable) {
    let sanitized: Vec<String> = table
        .columns()
        .iter()
        .map(|c| sanitize_column_name(c))
        .collect();
    let renames: Vec<(String, String)> = table
        .columns()
        .iter()
        .cloned()
        .zip(sanitized)
        .collect();
    let pairs: Vec<(&str, &str)> = renames
        .iter()
        .map(|(from, to)| (from.as_str(), to.as_str()))
        .collect();
    table.rename_columns(&pairs);
}

/// Casts `counter_columns` to integers and every other non-timestamp column
/// to floats.
///
/// Cells that are already typed pass through unchanged. Under
/// [`CastPolicy::Strict`] the first unconvertible cell fails with its column
/// name and row index; under [`CastPolicy::Coerce`] it becomes
/// [`Cell::Missing`] and is logged. The two behaviors are never mixed within
/// one call.
pub fn normalize_types(
    table: &mut DataTable,
    timestamp_column: &str,
    counter_columns: &[String],
    policy: CastPolicy,
) -> Result<(), TypeError> {
    for col in 0..table.width() {
        let name = table.columns()[col].clone();
        if name == timestamp_column {
            continue;
        }
        let as_int = counter_columns.iter().any(|c| *c == name);
        for row in 0..table.height() {
            let cast = cast_cell(table.cell(row, col), as_int);
            match cast {
                Ok(Some(cell)) => table.set_cell(row, col, cell),
                Ok(None) => {}
                Err(value) => match policy {
                    CastPolicy::Strict => {
                        return Err(TypeError::ConversionError {
                            column: name,
                            row,
                            value,
                            target: if as_int { "integer" } else { "float" },
                        });
                    }
                    CastPolicy::Coerce => {
                        warn!(
                            "Coercing unparsable cell '{}' in column '{}' at row {} to missing",
                            value, name, row
                        );
                        table.set_cell(row, col, Cell::Missing);
                    }
                },
            }
        }
    }
    Ok(())
}

/// Ok(Some) = converted, Ok(None) = already typed, Err = raw text that
/// failed to parse.
fn cast_cell(cell: &Cell, as_int: bool) -> Result<Option<Cell>, String> {
    let text = match cell {
        Cell::Text(s) => s.trim(),
        Cell::Float(v) if as_int => {
            // Counter columns read from comma-decimal files arrive as floats.
            if v.fract() == 0.0 {
                return Ok(Some(Cell::Int(*v as i64)));
            }
            return Err(v.to_string());
        }
        _ => return Ok(None),
    };
    if as_int {
        match text.parse::<i64>() {
            Ok(v) => Ok(Some(Cell::Int(v))),
            Err(_) => Err(text.to_string()),
        }
    } else {
        match parse_locale_float(text) {
            Ok(v) => Ok(Some(Cell::Float(v))),
            Err(_) => Err(text.to_string()),
        }
    }
}

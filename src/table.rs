use chrono::NaiveDateTime;

use crate::errors::TypeError;

/// A single cell value inside a [`DataTable`].
///
/// Raw files arrive as text; normalization replaces cells with their typed
/// variants. `Missing` is the sentinel used by the coercing cast policy and
/// by the positional merger when one table is shorter than the other.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    Timestamp(NaiveDateTime),
    Missing,
}

impl Cell {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Float(v) => Some(*v),
            Cell::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// True for `Missing` and for NaN floats; the merger and the output
    /// writer treat both as absent values.
    pub fn is_missing(&self) -> bool {
        match self {
            Cell::Missing => true,
            Cell::Float(v) => v.is_nan(),
            _ => false,
        }
    }
}

/// A rectangular table of named columns.
///
/// Invariant: every row has exactly one cell per column, in column order.
/// Rows keep their input ordering throughout the pipeline; no stage drops or
/// reorders rows except the merger's missing-value filter.
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl DataTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Index of `name`, or a typed error naming the column.
    pub fn require_column(&self, name: &str) -> Result<usize, TypeError> {
        self.column_index(name).ok_or_else(|| TypeError::MissingColumn {
            column: name.to_string(),
        })
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.rows[row][col]
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: Cell) {
        self.rows[row][col] = value;
    }

    /// Appends a row. Panics in debug builds if the width does not match;
    /// callers construct rows from this table's own column list.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Appends all rows of `other`, which must share this table's columns.
    pub fn append_rows(&mut self, other: DataTable) -> Result<(), TypeError> {
        if let Some(missing) = other
            .columns
            .iter()
            .find(|c| !self.columns.contains(*c))
            .or_else(|| self.columns.iter().find(|c| !other.columns.contains(*c)))
            .cloned()
        {
            return Err(TypeError::MissingColumn { column: missing });
        }
        // Reorder cells when the column order differs between files.
        if other.columns == self.columns {
            self.rows.extend(other.rows);
        } else {
            let index_map: Vec<usize> = self
                .columns
                .iter()
                .map(|c| other.column_index(c).unwrap_or(usize::MAX))
                .collect();
            for row in other.rows {
                let reordered = index_map.iter().map(|&i| row[i].clone()).collect();
                self.rows.push(reordered);
            }
        }
        Ok(())
    }

    /// Renames columns in place via `(from, to)` pairs; unknown names are
    /// ignored so one rename map can cover header variants across exports.
    pub fn rename_columns(&mut self, renames: &[(&str, &str)]) {
        for name in self.columns.iter_mut() {
            if let Some((_, to)) = renames.iter().find(|(from, _)| *from == name.as_str()) {
                *name = to.to_string();
            }
        }
    }

    /// Adds a column filled from `values`; lengths must match the height.
    pub fn push_column(&mut self, name: &str, values: Vec<Cell>) {
        debug_assert_eq!(values.len(), self.rows.len());
        self.columns.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
    }

    /// Drops every column that contains at least one missing cell.
    pub fn drop_incomplete_columns(&mut self) {
        let keep: Vec<bool> = (0..self.columns.len())
            .map(|col| !self.rows.iter().any(|row| row[col].is_missing()))
            .collect();
        self.columns = self
            .columns
            .iter()
            .zip(&keep)
            .filter(|(_, &k)| k)
            .map(|(c, _)| c.clone())
            .collect();
        for row in self.rows.iter_mut() {
            let mut col = 0;
            row.retain(|_| {
                let k = keep[col];
                col += 1;
                k
            });
        }
    }

    /// Drops every row that contains at least one missing cell (or NaN).
    pub fn drop_incomplete_rows(&mut self) {
        self.rows.retain(|row| !row.iter().any(Cell::is_missing));
    }

    /// All values of one column as text, for stages that consume raw cells.
    pub fn text_column(&self, col: usize) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row[col].as_str().unwrap_or(""))
            .collect()
    }
}

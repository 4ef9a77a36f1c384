//! Absolute timestamp reconstruction for time-of-day log columns.
//!
//! The loggers emit only `HH:MM:SS` per row; runs regularly span midnight.
//! A decrease between consecutive time-of-day values is interpreted as a
//! calendar rollover and advances the working date by one day.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;

use crate::errors::{ParseError, PipelineError, TypeError};
use crate::table::{Cell, DataTable};
use crate::utils::parse_time_of_day;

/// Accumulator for the rollover scan: the working date plus the previously
/// seen time-of-day.
///
/// The first step always advances the date, because the rollover condition
/// holds vacuously when no previous time exists. The emitted first timestamp
/// is therefore one day ahead of the reference date handed to [`new`].
/// Downstream consumers depend on that offset; changing it would shift every
/// emitted date (see DESIGN.md).
///
/// [`new`]: RolloverClock::new
#[derive(Debug, Clone)]
pub struct RolloverClock {
    reference_date: NaiveDate,
    prev_time: Option<NaiveTime>,
}

impl RolloverClock {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            prev_time: None,
        }
    }

    /// Folds one time-of-day into the clock and returns the absolute
    /// timestamp for that row.
    pub fn step(&mut self, time: NaiveTime) -> NaiveDateTime {
        if self.prev_time.map_or(true, |prev| time < prev) {
            self.reference_date += Duration::days(1);
        }
        self.prev_time = Some(time);
        self.reference_date.and_time(time)
    }
}

/// Reconstructs one absolute timestamp per entry of `times`, in order.
///
/// Rows whose time-of-day equals the previous row's do not advance the date;
/// only a strict decrease counts as a rollover. A malformed entry fails with
/// the offending row index.
pub fn reconstruct_series(
    times: &[&str],
    reference_date: NaiveDate,
) -> Result<Vec<NaiveDateTime>, ParseError> {
    let mut clock = RolloverClock::new(reference_date);
    let mut stamps = Vec::with_capacity(times.len());
    for (row, raw) in times.iter().enumerate() {
        let time = parse_time_of_day(raw).map_err(|message| ParseError::TimeOfDayError {
            row,
            value: raw.trim().to_string(),
            message,
        })?;
        stamps.push(clock.step(time));
    }
    Ok(stamps)
}

/// Replaces the text cells of `time_column` with reconstructed timestamps.
///
/// Output ordering is identical to input ordering; one timestamp per row,
/// no row dropped.
pub fn reconstruct_table(
    table: &mut DataTable,
    time_column: &str,
    reference_date: NaiveDate,
) -> Result<(), PipelineError> {
    let col = table
        .column_index(time_column)
        .ok_or_else(|| TypeError::MissingColumn {
            column: time_column.to_string(),
        })?;
    let raw: Vec<String> = table
        .text_column(col)
        .into_iter()
        .map(str::to_string)
        .collect();
    let refs: Vec<&str> = raw.iter().map(String::as_str).collect();
    let stamps = reconstruct_series(&refs, reference_date)?;
    debug!(
        "Reconstructed {} timestamps in column '{}' starting from reference {}",
        stamps.len(),
        time_column,
        reference_date
    );
    for (row, stamp) in stamps.into_iter().enumerate() {
        table.set_cell(row, col, Cell::Timestamp(stamp));
    }
    Ok(())
}

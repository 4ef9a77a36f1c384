use std::time::{Duration, Instant};

use log::info;
use once_cell::sync::Lazy;
use parking_lot::Mutex;

/// Global metrics instance
pub static METRICS: Lazy<Mutex<Metrics>> = Lazy::new(|| Mutex::new(Metrics::new()));

/// Pipeline run counters
#[derive(Debug)]
pub struct Metrics {
    pub files_attempted: u64,
    pub files_successful: u64,
    pub files_failed: u64,
    pub rows_parsed: u64,
    pub rows_merged: u64,
    start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            files_attempted: 0,
            files_successful: 0,
            files_failed: 0,
            rows_parsed: 0,
            rows_merged: 0,
            start_time: Instant::now(),
        }
    }

    pub fn record_file_attempt(&mut self) {
        self.files_attempted += 1;
    }

    pub fn record_file_success(&mut self, rows: u64) {
        self.files_successful += 1;
        self.rows_parsed += rows;
    }

    pub fn record_file_failure(&mut self) {
        self.files_failed += 1;
    }

    pub fn record_merged(&mut self, rows: u64) {
        self.rows_merged = rows;
    }

    pub fn total_duration(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn print_summary(&self) {
        info!("========== Pipeline Run Summary ==========");
        info!("Total Duration: {:.2?}", self.total_duration());
        info!("Files Attempted: {}", self.files_attempted);
        info!("Files Successful: {}", self.files_successful);
        info!("Files Failed: {}", self.files_failed);
        info!("Rows Parsed: {}", self.rows_parsed);
        info!("Rows In Merged Output: {}", self.rows_merged);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

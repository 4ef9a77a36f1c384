use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::consumption::DEFAULT_MIN_DIFFERENCE;
use crate::errors::ConfigError;
use crate::normalize::CastPolicy;

/// Pipeline settings, loaded from a JSON file. Every field has a default so
/// a partial config (or none at all) is valid.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PipelineConfig {
    /// Nominal start date of the log; the first emitted timestamp lands one
    /// day after this (see the rollover clock in `timestamp`).
    #[serde(default = "default_reference_date")]
    pub reference_date: NaiveDate,
    /// Noise gate for the consumption difference column.
    #[serde(default = "default_min_difference")]
    pub min_difference: f64,
    /// Strict casting fails on the first bad cell; coercing turns it into a
    /// missing cell.
    #[serde(default = "default_cast_policy")]
    pub cast_policy: CastPolicy,
    /// Name of the time-of-day column before sanitization.
    #[serde(default = "default_time_column")]
    pub time_column: String,
    /// Columns cast to integer counters instead of floats.
    #[serde(default = "default_counter_columns")]
    pub counter_columns: Vec<String>,
    /// Cumulative sensor column the consumption metrics derive from.
    #[serde(default = "default_consumption_column")]
    pub consumption_column: String,
    /// Slice-geometry columns concatenated onto the log by the merger.
    #[serde(default = "default_slice_columns")]
    pub slice_columns: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            reference_date: default_reference_date(),
            min_difference: default_min_difference(),
            cast_policy: default_cast_policy(),
            time_column: default_time_column(),
            counter_columns: default_counter_columns(),
            consumption_column: default_consumption_column(),
            slice_columns: default_slice_columns(),
        }
    }
}

fn default_reference_date() -> NaiveDate {
    // Logs carry no date at all; without an explicit reference the epoch
    // start makes the missing configuration obvious in the output.
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
}

fn default_min_difference() -> f64 {
    DEFAULT_MIN_DIFFERENCE
}

fn default_cast_policy() -> CastPolicy {
    CastPolicy::Strict
}

fn default_time_column() -> String {
    "Time".to_string()
}

fn default_counter_columns() -> Vec<String> {
    vec!["N".to_string(), "LIR".to_string()]
}

fn default_consumption_column() -> String {
    "SP5".to_string()
}

fn default_slice_columns() -> Vec<String> {
    ["tss", "part", "nss", "ss"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Loads the configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<PipelineConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|e| ConfigError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(file);
    let config: PipelineConfig =
        serde_json::from_reader(reader).map_err(|e| ConfigError::JsonParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(config)
}

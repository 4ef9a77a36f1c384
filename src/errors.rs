use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading config file {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse JSON configuration in {path}: {source}")]
    JsonParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Configuration file not found at {path}")]
    NotFound { path: PathBuf },
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error reading data file {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error reading delimited records in {path}: {source}")]
    RecordReadError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("File {path} contains no header line")]
    EmptyFile { path: PathBuf },
    #[error("Time-of-day parsing error at row {row} for value '{value}': {message}")]
    TimeOfDayError {
        row: usize,
        value: String,
        message: String,
    },
    #[error("Duration stamp parsing error for value '{value}': {message}")]
    DurationError { value: String, message: String },
}

#[derive(Error, Debug)]
pub enum TypeError {
    #[error("Cannot convert '{value}' in column '{column}' at row {row} to {target}")]
    ConversionError {
        column: String,
        row: usize,
        value: String,
        target: &'static str,
    },
    #[error("Column '{column}' not found in table")]
    MissingColumn { column: String },
}

#[derive(Error, Debug)]
pub enum CurveError {
    #[error("x and y must have the same length (x: {x_len}, y: {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },
    #[error("x must be strictly increasing (violation at index {index})")]
    NonIncreasingX { index: usize },
    #[error("max_error must be non-negative (got {value})")]
    NegativeMaxError { value: f64 },
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration loading failed: {0}")]
    Config(#[from] ConfigError),
    #[error("Parsing failed: {0}")]
    Parse(#[from] ParseError),
    #[error("Type normalization failed: {0}")]
    Normalize(#[from] TypeError),
    #[error("Curve resampling rejected its input: {0}")]
    Curve(#[from] CurveError),
    #[error("IO error writing output {path}: {source}")]
    OutputError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("CSV error writing output {path}: {source}")]
    CsvOutputError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

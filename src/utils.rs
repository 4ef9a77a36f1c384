use chrono::NaiveTime;

/// Parse a float that may use comma as decimal separator
pub fn parse_locale_float(s: &str) -> Result<f64, std::num::ParseFloatError> {
    s.replace(',', ".").parse::<f64>()
}

/// Parse an `HH:MM:SS` time-of-day string, tolerating surrounding whitespace
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M:%S")
        .map_err(|e| format!("Failed to parse time-of-day '{}' with format '%H:%M:%S': {}", s, e))
}

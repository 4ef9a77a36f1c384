//! Step durations from `MM-SS` stamps.
//!
//! The slicer records per-step wall times as minute-second stamps with no
//! hour field; the seconds counter of consecutive steps can wrap.

use crate::errors::ParseError;

/// Converts an `MM-SS` stamp to total seconds.
pub fn to_seconds(stamp: &str) -> Result<i64, ParseError> {
    let malformed = |message: &str| ParseError::DurationError {
        value: stamp.to_string(),
        message: message.to_string(),
    };
    let (minutes, seconds) = stamp
        .trim()
        .split_once('-')
        .ok_or_else(|| malformed("expected MM-SS"))?;
    let minutes: i64 = minutes
        .parse()
        .map_err(|_| malformed("minutes field is not an integer"))?;
    let seconds: i64 = seconds
        .parse()
        .map_err(|_| malformed("seconds field is not an integer"))?;
    Ok(minutes * 60 + seconds)
}

/// Differences in seconds between consecutive stamps.
///
/// A negative difference means the seconds counter wrapped (59 to 00) and
/// gets 60 added. A missing stamp on either side yields a missing
/// difference. Output length is one less than input length.
pub fn step_differences(stamps: &[Option<&str>]) -> Result<Vec<Option<i64>>, ParseError> {
    let mut seconds = Vec::with_capacity(stamps.len());
    for stamp in stamps {
        seconds.push(match stamp {
            Some(s) => Some(to_seconds(s)?),
            None => None,
        });
    }
    Ok(seconds
        .windows(2)
        .map(|pair| match (pair[0], pair[1]) {
            (Some(a), Some(b)) => {
                let diff = b - a;
                Some(if diff < 0 { diff + 60 } else { diff })
            }
            _ => None,
        })
        .collect())
}

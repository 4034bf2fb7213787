//! `HH:MM:SS,mmm` time codes as used by SubRip files.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimecodeError {
    #[error("Time code must look like HH:MM:SS,mmm, got {0:?}")]
    Shape(String),
    #[error("Invalid {field} field in time code {input:?}")]
    Field { field: &'static str, input: String },
}

/// Parse `HH:MM:SS,mmm` into seconds.
///
/// Field ranges are not checked, so `00:75:00,000` is 4500 seconds.
pub fn parse_timecode(input: &str) -> Result<f64, TimecodeError> {
    let trimmed = input.trim();
    let mut parts = trimmed.split(':');
    let (Some(hours), Some(minutes), Some(rest), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TimecodeError::Shape(trimmed.to_string()));
    };
    let (seconds, millis) = rest
        .split_once(',')
        .ok_or_else(|| TimecodeError::Shape(trimmed.to_string()))?;

    let hours = parse_field(hours, "hours", trimmed)?;
    let minutes = parse_field(minutes, "minutes", trimmed)?;
    let seconds = parse_field(seconds, "seconds", trimmed)?;
    let millis = parse_field(millis, "milliseconds", trimmed)?;

    Ok(hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds as f64 + millis as f64 / 1000.0)
}

fn parse_field(raw: &str, field: &'static str, input: &str) -> Result<u64, TimecodeError> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimecodeError::Field {
            field,
            input: input.to_string(),
        });
    }
    raw.parse().map_err(|_| TimecodeError::Field {
        field,
        input: input.to_string(),
    })
}

/// Format seconds as `HH:MM:SS,mmm`. Negative and non-finite values clamp to zero.
pub fn format_timecode(seconds: f64) -> String {
    let total_ms = if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as u64
    } else {
        0
    };
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1000;
    let ms = total_ms % 1000;
    format!("{h:02}:{m:02}:{s:02},{ms:03}")
}

/// One decimal place, as shown on editor cards.
pub fn format_seconds(seconds: f64) -> String {
    format!("{seconds:.1}")
}

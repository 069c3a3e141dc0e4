use crate::constants::MINUTES_PER_DAY;
use crate::error::{AppError, Result};

/// Parse a zero-padded 24-hour `HH:MM` literal into minutes since midnight
///
/// Accepts exactly the pattern `([01]\d|2[0-3]):[0-5]\d`; anything else
/// (shorter forms, signs, whitespace, out-of-range values) is rejected.
pub fn parse_hhmm(value: &str) -> Result<u32> {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(AppError::Parse(format!("invalid time literal '{value}'")));
    }
    if !bytes[0].is_ascii_digit()
        || !bytes[1].is_ascii_digit()
        || !bytes[3].is_ascii_digit()
        || !bytes[4].is_ascii_digit()
    {
        return Err(AppError::Parse(format!("invalid time literal '{value}'")));
    }

    let hours = u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0');
    let minutes = u32::from(bytes[3] - b'0') * 10 + u32::from(bytes[4] - b'0');
    if hours > 23 {
        return Err(AppError::InvalidInput(format!("hour out of range in '{value}'")));
    }
    if minutes > 59 {
        return Err(AppError::InvalidInput(format!("minute out of range in '{value}'")));
    }

    Ok(hours * 60 + minutes)
}

/// Whether a string is a well-formed `HH:MM` time literal
pub fn is_valid_time(value: &str) -> bool {
    parse_hhmm(value).is_ok()
}

/// Format minutes since midnight as a zero-padded `HH:MM` literal
pub fn format_hhmm(total_minutes: u32) -> String {
    let total = total_minutes % MINUTES_PER_DAY;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Add minutes to an `HH:MM` literal, wrapping at midnight
///
/// # Arguments
/// * `hhmm` - Base time as a well-formed `HH:MM` literal
/// * `minutes` - Minutes to add
///
/// # Returns
/// The shifted time, or a parse error when the base time is malformed
pub fn add_minutes(hhmm: &str, minutes: u32) -> Result<String> {
    let total = parse_hhmm(hhmm)? + minutes;
    Ok(format_hhmm(total))
}

/// Lenient time-entry coercion for interactive editing
///
/// Compact 3-4 digit entries are expanded to `HH:MM` (`"900"` becomes
/// `"09:00"`, `"1730"` becomes `"17:30"`); every other value passes through
/// unchanged, including empty strings and already-formatted times.
pub fn coerce_time(value: &str) -> String {
    let compact = (3..=4).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit());
    if !compact {
        return value.to_string();
    }
    let padded = format!("{value:0>4}");
    format!("{}:{}", &padded[..2], &padded[2..])
}

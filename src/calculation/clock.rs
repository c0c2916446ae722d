//! Conversion between `HH:MM` text and minute counts.
//!
//! Two parsers share one routine, each with its own pattern:
//!
//! - [`parse_clock`] reads clock times as entered into a day (`8:00`, `16:30`),
//!   hour 0–29 so late shifts past midnight can still be written on the same day.
//! - [`parse_duration`] reads longer durations such as weekly targets and
//!   balances (`38:30`, `-12:45`) with any number of hour digits, up to
//!   [`MAX_DURATION_MINUTES`] in magnitude.
//!
//! Both treat blank input as zero and accept one leading `-`, so every value
//! [`format_minutes`] renders parses back to the same number of minutes.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{EngineError, EngineResult};

/// Largest magnitude [`parse_duration`] accepts: 100 000 hours.
pub const MAX_DURATION_MINUTES: i64 = 100_000 * 60;

/// Parses a clock time (`H:MM` or `HH:MM`, hour 0–29) into minutes.
///
/// Surrounding whitespace is ignored and blank text is 0. A leading `-`
/// negates the value, which lets signed balances in the clock range round-trip.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeFormat`] naming the text for anything else.
///
/// # Examples
///
/// ```
/// use worktime_engine::calculation::parse_clock;
///
/// assert_eq!(parse_clock("08:30").unwrap(), 510);
/// assert_eq!(parse_clock(" 7:05 ").unwrap(), 425);
/// assert_eq!(parse_clock("").unwrap(), 0);
/// assert_eq!(parse_clock("-01:30").unwrap(), -90);
/// assert!(parse_clock("30:00").is_err());
/// assert!(parse_clock("8.30").is_err());
/// ```
pub fn parse_clock(text: &str) -> EngineResult<i64> {
    parse_signed(text, &CLOCK_PATTERN, i64::MAX)
}

/// Parses a duration (`H+:MM`) into minutes, e.g. a weekly target of `38:30`.
///
/// Same rules as [`parse_clock`] except that the hour part may have any
/// number of digits. Values beyond [`MAX_DURATION_MINUTES`] either way are
/// rejected with [`EngineError::InvalidTimeFormat`].
///
/// # Examples
///
/// ```
/// use worktime_engine::calculation::parse_duration;
///
/// assert_eq!(parse_duration("38:30").unwrap(), 2310);
/// assert_eq!(parse_duration("-120:00").unwrap(), -7200);
/// assert!(parse_duration("38:5").is_err());
/// assert!(parse_duration("153722867280912930:07").is_err());
/// ```
pub fn parse_duration(text: &str) -> EngineResult<i64> {
    parse_signed(text, &DURATION_PATTERN, MAX_DURATION_MINUTES)
}

/// Renders minutes as zero-padded `HH:MM`.
///
/// With `allow_negative`, a negative value is rendered as `-` followed by its
/// magnitude. Without it the caller promises a non-negative value; a negative
/// one is shown as `00:00`. Hours grow past two digits when needed.
///
/// # Examples
///
/// ```
/// use worktime_engine::calculation::format_minutes;
///
/// assert_eq!(format_minutes(90, true), "01:30");
/// assert_eq!(format_minutes(-90, true), "-01:30");
/// assert_eq!(format_minutes(2400, false), "40:00");
/// assert_eq!(format_minutes(-5, false), "00:00");
/// ```
pub fn format_minutes(minutes: i64, allow_negative: bool) -> String {
    if minutes < 0 {
        if !allow_negative {
            return "00:00".to_string();
        }
        let magnitude = minutes.unsigned_abs();
        return format!("-{:02}:{:02}", magnitude / 60, magnitude % 60);
    }
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Clock time: one hour digit, or two digits starting with 0–2.
static CLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?)([0-2]?[0-9]):([0-5][0-9])$").expect("valid clock pattern")
});

/// Duration: one or more hour digits.
static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?)([0-9]+):([0-5][0-9])$").expect("valid duration pattern")
});

fn parse_signed(text: &str, pattern: &Regex, max_minutes: i64) -> EngineResult<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    let invalid = || EngineError::InvalidTimeFormat {
        text: trimmed.to_string(),
    };

    let caps = pattern.captures(trimmed).ok_or_else(invalid)?;
    let negative = !caps[1].is_empty();
    let hours: i64 = caps[2].parse().map_err(|_| invalid())?;
    let minutes: i64 = caps[3].parse().map_err(|_| invalid())?;
    let total = hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .filter(|total| *total <= max_minutes)
        .ok_or_else(invalid)?;

    Ok(if negative { -total } else { total })
}

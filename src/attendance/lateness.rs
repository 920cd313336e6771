//! Check-in time parsing and the lateness rule.
//!
//! Times travel through the portal as "HH:MM" strings. A check-in is Late
//! when it falls strictly after the configured start time plus the fixed
//! grace period, computed with minute-of-day arithmetic: grace minutes that
//! overflow the hour carry into the hour component.

use once_cell::sync::Lazy;
use regex::Regex;

/// Fixed tolerance after the configured start time before a check-in is
/// classified Late.
pub const GRACE_MINUTES: u32 = 15;

/// Start time assumed for roles with no configured entry.
pub const DEFAULT_START_TIME: &str = "08:00";

/// Strict "HH:MM" pattern: 0-23 hours (one or two digits), 00-59 minutes.
static TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]?\d|2[0-3]):([0-5]\d)$").expect("valid time pattern"));

/// Parses a strict "HH:MM" string into (hour, minute).
///
/// Returns `None` for anything that is not a well-formed time of day;
/// callers skip such values rather than failing.
///
/// # Example
///
/// ```
/// use portal_engine::attendance::parse_hhmm;
///
/// assert_eq!(parse_hhmm("08:05"), Some((8, 5)));
/// assert_eq!(parse_hhmm("8:05"), Some((8, 5)));
/// assert_eq!(parse_hhmm("24:00"), None);
/// assert_eq!(parse_hhmm("8.05"), None);
/// ```
pub fn parse_hhmm(value: &str) -> Option<(u32, u32)> {
    let captures = TIME_PATTERN.captures(value.trim())?;
    let hour = captures.get(1)?.as_str().parse().ok()?;
    let minute = captures.get(2)?.as_str().parse().ok()?;
    Some((hour, minute))
}

/// Determines whether a check-in is late against a start time.
///
/// The cutoff is `start_time + GRACE_MINUTES`, with minute overflow
/// carried into the hour. Returns `None` when either time string is
/// malformed, so the caller can fall back to the stored status.
///
/// # Example
///
/// ```
/// use portal_engine::attendance::is_late;
///
/// assert_eq!(is_late("08:15", "08:00"), Some(false)); // on the cutoff
/// assert_eq!(is_late("08:16", "08:00"), Some(true));
/// assert_eq!(is_late("09:04", "08:50"), Some(false)); // carry: cutoff 09:05
/// ```
pub fn is_late(check_in: &str, start_time: &str) -> Option<bool> {
    let (check_hour, check_minute) = parse_hhmm(check_in)?;
    let (start_hour, start_minute) = parse_hhmm(start_time)?;

    let mut cutoff_hour = start_hour;
    let mut cutoff_minute = start_minute + GRACE_MINUTES;
    if cutoff_minute >= 60 {
        cutoff_hour += cutoff_minute / 60;
        cutoff_minute %= 60;
    }

    Some((check_hour, check_minute) > (cutoff_hour, cutoff_minute))
}

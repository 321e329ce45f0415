//! Minute-of-day time helpers.
//!
//! All planning code works on plain minute offsets since midnight
//! (`0..=1440`). These helpers convert between that representation and the
//! clock strings users read and write.

/// Parse a strict `H:MM` or `HH:MM` clock string into minutes since midnight.
///
/// Hour must be 0-23 and minute 0-59, with exactly two minute digits. Any
/// other shape yields `None`; callers treat absence as "skip this input",
/// never as a fatal condition.
pub fn parse_clock_time(text: &str) -> Option<i32> {
    let parts: Vec<&str> = text.trim().split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    if parts[0].is_empty() || parts[0].len() > 2 || parts[1].len() != 2 {
        return None;
    }
    if !parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())) {
        return None;
    }

    let hour: i32 = parts[0].parse().ok()?;
    let minute: i32 = parts[1].parse().ok()?;

    if hour > 23 || minute > 59 {
        return None;
    }

    Some(hour * 60 + minute)
}

/// Format a minute count as a human-readable duration.
///
/// `0` renders as `"0m"`, whole hours as `"Nh"`, everything else as
/// `"Nh Mm"` or `"Mm"`. Never emits `"0h 0m"`.
pub fn format_duration(minutes: i32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours > 0 && rest > 0 {
        format!("{hours}h {rest}m")
    } else if hours > 0 {
        format!("{hours}h")
    } else {
        format!("{rest}m")
    }
}

/// Format minutes since midnight as zero-padded `HH:MM`.
///
/// No modulo-1440 wrapping is performed; keeping the value within a single
/// day is the caller's responsibility.
pub fn format_clock(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

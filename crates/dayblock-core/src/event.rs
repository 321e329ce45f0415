//! Free-text calendar event parser.
//!
//! Each line of the calendar text is parsed independently against two shapes,
//! tried in order:
//!
//! 1. Range form: `<time> - <time> <title>` (whitespace around the dash is
//!    optional)
//! 2. Point form: `<time> <title>` with an implicit 30-minute duration
//!
//! A line matching neither shape is silently discarded; parsing is
//! best-effort and never fails the whole batch on one bad line.

use serde::{Deserialize, Serialize};

use crate::day_type::WorkWindow;
use crate::time::parse_clock_time;

/// Implicit duration for point-form events without an end time.
const POINT_EVENT_MINUTES: i32 = 30;

/// A discrete time-bounded calendar event, clamped to the work window.
///
/// Immutable once produced; the full event set is rebuilt on every change to
/// the source text or window, never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    /// Minute of day, already clamped to the work window.
    pub start: i32,
    /// Minute of day, exclusive, already clamped to the work window.
    pub end: i32,
}

impl Event {
    pub fn duration_minutes(&self) -> i32 {
        self.end - self.start
    }
}

/// Parse calendar text into events clamped to `window`, sorted by start time.
///
/// Events fully outside the window (or zero-length after clamping) are
/// dropped. The sort is stable, so events sharing a start time keep their
/// encounter order.
pub fn parse_events(text: &str, window: &WorkWindow) -> Vec<Event> {
    let mut events: Vec<Event> = text
        .lines()
        .filter_map(|line| parse_line(line, window))
        .collect();
    events.sort_by_key(|e| e.start);
    events
}

fn parse_line(line: &str, window: &WorkWindow) -> Option<Event> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (start, rest) = take_clock(line)?;

    // Range form first; anything else falls through to point form.
    let (end, title) = match take_range_end(rest) {
        Some((end, title)) => (end, title),
        None => (start + POINT_EVENT_MINUTES, rest.trim()),
    };

    if title.is_empty() {
        return None;
    }

    let start = start.max(window.start);
    let end = end.min(window.end);
    if end <= start {
        return None;
    }

    Some(Event {
        title: title.to_string(),
        start,
        end,
    })
}

/// Take a leading `H:MM`/`HH:MM` prefix, returning its minutes and the rest.
fn take_clock(s: &str) -> Option<(i32, &str)> {
    let bytes = s.as_bytes();
    let mut digits = 0;
    while digits < 2 && digits < bytes.len() && bytes[digits].is_ascii_digit() {
        digits += 1;
    }
    if digits == 0 || bytes.get(digits) != Some(&b':') {
        return None;
    }

    let end = digits + 3;
    if bytes.len() < end {
        return None;
    }
    // Both minute bytes must be ASCII digits; this also keeps the slice
    // below on a char boundary.
    if !bytes[end - 2].is_ascii_digit() || !bytes[end - 1].is_ascii_digit() {
        return None;
    }
    // Exactly two minute digits: a third would make "9:300" parse as "9:30".
    if bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
        return None;
    }

    let minutes = parse_clock_time(&s[..end])?;
    Some((minutes, &s[end..]))
}

/// Take `- <time>` after the start time of a range-form line.
fn take_range_end(rest: &str) -> Option<(i32, &str)> {
    let after_dash = rest.trim_start().strip_prefix('-')?;
    let (end, title) = take_clock(after_dash.trim_start())?;
    Some((end, title.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> WorkWindow {
        WorkWindow::new(540, 1020) // 9:00-17:00
    }

    #[test]
    fn parses_range_form() {
        let events = parse_events("09:30-10:00 Standup", &window());
        assert_eq!(
            events,
            vec![Event {
                title: "Standup".to_string(),
                start: 570,
                end: 600,
            }]
        );
    }

    #[test]
    fn parses_range_form_with_spaced_dash() {
        let events = parse_events("9:30 - 10:00 Design review", &window());
        assert_eq!(events[0].title, "Design review");
        assert_eq!((events[0].start, events[0].end), (570, 600));
    }

    #[test]
    fn parses_point_form_with_implicit_duration() {
        let events = parse_events("15:00 1:1", &window());
        assert_eq!(
            events,
            vec![Event {
                title: "1:1".to_string(),
                start: 900,
                end: 930,
            }]
        );
    }

    #[test]
    fn discards_unparseable_lines() {
        assert!(parse_events("garbage line", &window()).is_empty());
        assert!(parse_events("25:00 Oops", &window()).is_empty());
        assert!(parse_events("12:00", &window()).is_empty()); // no title
        assert!(parse_events("12:00   ", &window()).is_empty());
        assert!(parse_events("", &window()).is_empty());
    }

    #[test]
    fn bad_line_does_not_poison_the_batch() {
        let text = "garbage\n10:00-11:00 Planning\n99:99 nope\n";
        let events = parse_events(text, &window());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Planning");
    }

    #[test]
    fn clamps_events_to_the_window() {
        // Starts before the window: truncated.
        let events = parse_events("8:00-10:00 Early sync", &window());
        assert_eq!((events[0].start, events[0].end), (540, 600));

        // Ends after the window: truncated.
        let events = parse_events("16:30-18:00 Wrap up", &window());
        assert_eq!((events[0].start, events[0].end), (990, 1020));

        // Fully outside: dropped.
        assert!(parse_events("7:00-8:30 Gym", &window()).is_empty());
        assert!(parse_events("18:00 Dinner", &window()).is_empty());
    }

    #[test]
    fn malformed_range_end_falls_back_to_point_form() {
        // "9:00 - lunch" has a dash but no second time; the remainder
        // (dash included) becomes a point-form title.
        let events = parse_events("9:00 - lunch", &window());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "- lunch");
        assert_eq!((events[0].start, events[0].end), (540, 570));
    }

    #[test]
    fn sorts_by_start_preserving_encounter_order_on_ties() {
        let text = "14:00 Later\n10:00 First tie\n10:00-11:30 Second tie\n";
        let events = parse_events(text, &window());
        let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["First tie", "Second tie", "Later"]);
    }
}

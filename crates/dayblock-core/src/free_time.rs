//! Free-time computation over a sorted event set.
//!
//! Finds the maximal sub-intervals of the work window not covered by any
//! event. Together the produced slots partition the window minus the union
//! of the events: pairwise disjoint, ascending, no slot outside the window.

use serde::{Deserialize, Serialize};

use crate::day_type::WorkWindow;
use crate::event::Event;

/// A maximal free interval within the work window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    pub start: i32,
    /// Exclusive end minute.
    pub end: i32,
}

impl FreeSlot {
    pub fn duration_minutes(&self) -> i32 {
        self.end - self.start
    }
}

/// Compute the free slots left by `events` within `window`.
///
/// `events` must be sorted ascending by start time; output correctness is
/// not guaranteed otherwise. The cursor only ever moves forward, so
/// overlapping or contained events are absorbed into the earlier event's
/// occupied span rather than flagged as conflicts -- a deliberate,
/// caller-visible simplification.
pub fn compute_free_slots(events: &[Event], window: &WorkWindow) -> Vec<FreeSlot> {
    let mut slots = Vec::new();
    let mut cursor = window.start;

    for event in events {
        if event.start >= window.end {
            break;
        }
        if event.end <= cursor {
            continue;
        }
        if event.start > cursor {
            slots.push(FreeSlot {
                start: cursor,
                end: event.start.min(window.end),
            });
        }
        cursor = cursor.max(event.end.min(window.end));
    }

    if cursor < window.end {
        slots.push(FreeSlot {
            start: cursor,
            end: window.end,
        });
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn busy(start: i32, end: i32) -> Event {
        Event {
            title: "busy".to_string(),
            start,
            end,
        }
    }

    #[test]
    fn empty_day_is_one_big_slot() {
        let window = WorkWindow::new(540, 1020);
        let slots = compute_free_slots(&[], &window);
        assert_eq!(slots, vec![FreeSlot { start: 540, end: 1020 }]);
    }

    #[test]
    fn single_event_splits_the_window() {
        let window = WorkWindow::new(540, 1020);
        let slots = compute_free_slots(&[busy(570, 600)], &window);
        assert_eq!(
            slots,
            vec![
                FreeSlot { start: 540, end: 570 },
                FreeSlot { start: 600, end: 1020 },
            ]
        );
    }

    #[test]
    fn back_to_back_events_leave_no_gap_between() {
        let window = WorkWindow::new(540, 1020);
        let slots = compute_free_slots(&[busy(540, 600), busy(600, 660)], &window);
        assert_eq!(slots, vec![FreeSlot { start: 660, end: 1020 }]);
    }

    #[test]
    fn overlapping_events_are_absorbed() {
        let window = WorkWindow::new(540, 1020);
        // Second event is contained in the first; third overlaps its tail.
        let events = [busy(600, 720), busy(630, 660), busy(700, 750)];
        let slots = compute_free_slots(&events, &window);
        assert_eq!(
            slots,
            vec![
                FreeSlot { start: 540, end: 600 },
                FreeSlot { start: 750, end: 1020 },
            ]
        );
    }

    #[test]
    fn fully_booked_day_has_no_slots() {
        let window = WorkWindow::new(540, 1020);
        assert!(compute_free_slots(&[busy(540, 1020)], &window).is_empty());
    }

    proptest! {
        #[test]
        fn slots_partition_window_minus_events(
            raw in proptest::collection::vec((0i32..1440, 0i32..1440), 0..12)
        ) {
            let window = WorkWindow::new(540, 1020);
            let mut events: Vec<Event> = raw
                .into_iter()
                .filter_map(|(a, b)| {
                    let (start, end) = if a <= b { (a, b) } else { (b, a) };
                    let start = start.max(window.start);
                    let end = end.min(window.end);
                    if end <= start {
                        return None;
                    }
                    Some(busy(start, end))
                })
                .collect();
            events.sort_by_key(|e| e.start);

            let slots = compute_free_slots(&events, &window);

            for pair in slots.windows(2) {
                prop_assert!(pair[0].end <= pair[1].start);
            }
            for slot in &slots {
                prop_assert!(slot.start < slot.end);
                prop_assert!(slot.start >= window.start && slot.end <= window.end);
            }
            // Every minute of the window is free iff no event covers it.
            for minute in window.start..window.end {
                let covered = events.iter().any(|e| e.start <= minute && minute < e.end);
                let free = slots.iter().any(|s| s.start <= minute && minute < s.end);
                prop_assert_eq!(covered, !free, "minute {}", minute);
            }
        }
    }
}

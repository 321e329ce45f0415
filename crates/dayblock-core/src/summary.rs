//! Derived status strings for a computed plan.
//!
//! Pure derivations over free slots, planned blocks and a current-time
//! pointer; recomputed whenever the inputs change. The current time is an
//! opaque minute-of-day input supplied by the host, not tracked here.

use crate::free_time::FreeSlot;
use crate::planner::PlannedBlock;
use crate::time::format_duration;

/// Sum of free-slot durations.
pub fn free_minutes(slots: &[FreeSlot]) -> i32 {
    slots.iter().map(FreeSlot::duration_minutes).sum()
}

/// Sum of planned-block durations.
pub fn planned_minutes(blocks: &[PlannedBlock]) -> i32 {
    blocks.iter().map(PlannedBlock::duration_minutes).sum()
}

/// Capacity/overload line for the day.
pub fn capacity_summary(free: i32, planned: i32) -> String {
    if free == 0 {
        "no free time".to_string()
    } else if planned > free {
        format!("overbooked by {}", format_duration(planned - free))
    } else if planned < free {
        format!("{} free", format_duration(free - planned))
    } else {
        "perfectly packed".to_string()
    }
}

/// Countdown label for a block relative to the current-time pointer.
///
/// Before the block: `"starts in X"` (only for a strictly positive delta).
/// Inside `[start, end)`: `"in progress"`. After: `"done"`. A degenerate
/// block yields no label.
pub fn block_countdown(block: &PlannedBlock, now: i32) -> Option<String> {
    if block.end <= block.start {
        return None;
    }
    if now < block.start {
        Some(format!("starts in {}", format_duration(block.start - now)))
    } else if now < block.end {
        Some("in progress".to_string())
    } else {
        Some("done".to_string())
    }
}

//! First-fit splitting bin packer over the day's free slots.
//!
//! Tasks are packed in registry order with no reordering or look-ahead:
//! task order is a user-visible scheduling priority, and capacity consumed
//! by an earlier task is never available to a later one. A task that does
//! not fit in one slot is split across the following ones; whatever cannot
//! be placed at all is reported, not rolled back.

use serde::{Deserialize, Serialize};

use crate::free_time::FreeSlot;
use crate::task::{Task, TaskContext, TaskRegistry};

/// One placed chunk of a task.
///
/// Holds a copy of the task's display attributes at schedule time, not a
/// live reference; later task edits do not change already-produced blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedBlock {
    pub id: String,
    pub task_id: u64,
    pub task_title: String,
    pub start: i32,
    pub end: i32,
    pub important: bool,
    pub context: TaskContext,
}

impl PlannedBlock {
    fn new(task: &Task, start: i32, end: i32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            task_id: task.id,
            task_title: task.title.clone(),
            start,
            end,
            important: task.important,
            context: task.context,
        }
    }

    pub fn duration_minutes(&self) -> i32 {
        self.end - self.start
    }
}

/// Output of one scheduling run, replaced wholesale on each run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayPlan {
    /// Placed blocks, ascending by start time.
    pub blocks: Vec<PlannedBlock>,
    /// Tasks whose full duration could not be placed, in registry order.
    /// Includes excluded and non-positive-duration tasks, and tasks that
    /// were only partially placed.
    pub unscheduled: Vec<Task>,
}

impl DayPlan {
    /// Sum of placed block durations.
    pub fn planned_minutes(&self) -> i32 {
        self.blocks.iter().map(PlannedBlock::duration_minutes).sum()
    }
}

/// Pack the registry's tasks into `free_slots`, first-fit with splitting.
///
/// `free_slots` must be the ascending, disjoint output of
/// [`crate::free_time::compute_free_slots`]. A single cursor walks the slot
/// sequence across all tasks; it is never reset between tasks and never
/// backtracks.
pub fn build_plan(free_slots: &[FreeSlot], registry: &TaskRegistry) -> DayPlan {
    let mut plan = DayPlan::default();
    let mut slot_index = 0;
    let mut cursor = free_slots.first().map(|s| s.start).unwrap_or(0);

    for task in registry.tasks() {
        if !task.is_schedulable() {
            plan.unscheduled.push(task.clone());
            continue;
        }

        let mut remaining = task.duration_minutes;
        while remaining > 0 && slot_index < free_slots.len() {
            let slot = &free_slots[slot_index];
            if cursor >= slot.end {
                slot_index += 1;
                if let Some(next) = free_slots.get(slot_index) {
                    cursor = next.start;
                }
                continue;
            }

            let chunk = remaining.min(slot.end - cursor);
            plan.blocks.push(PlannedBlock::new(task, cursor, cursor + chunk));
            cursor += chunk;
            remaining -= chunk;
        }

        if remaining > 0 {
            plan.unscheduled.push(task.clone());
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(raw: &[(i32, i32)]) -> Vec<FreeSlot> {
        raw.iter().map(|&(start, end)| FreeSlot { start, end }).collect()
    }

    fn registry(durations: &[i32]) -> TaskRegistry {
        let mut registry = TaskRegistry::new();
        for (index, &duration) in durations.iter().enumerate() {
            registry.add(format!("Task {index}"), duration).unwrap();
        }
        registry
    }

    #[test]
    fn task_splits_across_noncontiguous_slots() {
        let plan = build_plan(&slots(&[(0, 30), (60, 90)]), &registry(&[45]));

        let spans: Vec<(i32, i32)> = plan.blocks.iter().map(|b| (b.start, b.end)).collect();
        assert_eq!(spans, vec![(0, 30), (60, 75)]);
        // 15 minutes did not fit, so the task is also reported unscheduled.
        assert_eq!(plan.unscheduled.len(), 1);
        assert_eq!(plan.unscheduled[0].title, "Task 0");
    }

    #[test]
    fn capacity_is_consumed_in_task_order() {
        let plan = build_plan(&slots(&[(0, 30)]), &registry(&[30, 10]));

        assert_eq!(plan.blocks.len(), 1);
        assert_eq!((plan.blocks[0].start, plan.blocks[0].end), (0, 30));
        assert_eq!(plan.blocks[0].task_title, "Task 0");

        // The second task gets nothing: no blocks, fully unscheduled.
        assert_eq!(plan.unscheduled.len(), 1);
        assert_eq!(plan.unscheduled[0].title, "Task 1");
    }

    #[test]
    fn exact_fit_ends_on_the_slot_boundary() {
        let plan = build_plan(&slots(&[(0, 30), (60, 90)]), &registry(&[30, 20]));

        let spans: Vec<(i32, i32)> = plan.blocks.iter().map(|b| (b.start, b.end)).collect();
        // No zero-length block in the exhausted first slot.
        assert_eq!(spans, vec![(0, 30), (60, 80)]);
        assert!(plan.unscheduled.is_empty());
    }

    #[test]
    fn empty_slots_leave_every_included_task_unscheduled() {
        let plan = build_plan(&[], &registry(&[30, 45]));
        assert!(plan.blocks.is_empty());
        assert_eq!(plan.unscheduled.len(), 2);
    }

    #[test]
    fn excluded_and_zero_duration_tasks_consume_no_capacity() {
        let mut registry = registry(&[30, 0, 25]);
        let excluded = registry.tasks()[0].id;
        registry.set_include(excluded, false);

        let plan = build_plan(&slots(&[(0, 60)]), &registry);

        // Only the 25-minute task is placed, starting at the slot start.
        assert_eq!(plan.blocks.len(), 1);
        assert_eq!((plan.blocks[0].start, plan.blocks[0].end), (0, 25));
        assert_eq!(plan.blocks[0].task_title, "Task 2");

        let titles: Vec<&str> = plan.unscheduled.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Task 0", "Task 1"]);
    }

    #[test]
    fn blocks_snapshot_task_attributes() {
        let mut registry = TaskRegistry::new();
        let id = registry.add("Deep dive", 30).unwrap();
        registry.set_important(id, true);
        registry.set_context(id, TaskContext::Deep);

        let plan = build_plan(&slots(&[(540, 600)]), &registry);
        assert!(plan.blocks[0].important);
        assert_eq!(plan.blocks[0].context, TaskContext::Deep);
        assert_eq!(plan.blocks[0].task_id, id);

        // Editing the task afterwards does not touch the produced block.
        registry.set_important(id, false);
        assert!(plan.blocks[0].important);
    }

    #[test]
    fn planned_minutes_sums_block_durations() {
        let plan = build_plan(&slots(&[(0, 30), (60, 90)]), &registry(&[45]));
        assert_eq!(plan.planned_minutes(), 45);
    }
}

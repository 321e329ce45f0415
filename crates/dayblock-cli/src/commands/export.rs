//! Plain-text exports of the plan and the end-of-day review.
//!
//! The CLI only prints; delivery (clipboard, mail, a file) is whatever the
//! user pipes the output into.

use clap::Subcommand;
use dayblock_core::time::format_clock;
use dayblock_core::{PlannedBlock, PlannerState, Task};

use super::plan::rebuild;

#[derive(Subcommand)]
pub enum ExportAction {
    /// One line per planned block
    Plan,
    /// Day resume: day type, note and per-task review lines
    Resume,
}

pub fn run(action: ExportAction) -> Result<(), Box<dyn std::error::Error>> {
    let state = PlannerState::load_or_default();

    match action {
        ExportAction::Plan => {
            let built = rebuild(&state);
            print!("{}", render_plan(&built.plan.blocks));
        }
        ExportAction::Resume => {
            print!("{}", render_resume(&state));
        }
    }

    Ok(())
}

/// `"<start>-<end> <title> [<context label>]"` per block.
fn render_plan(blocks: &[PlannedBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        out.push_str(&format!(
            "{}-{} {} [{}]\n",
            format_clock(block.start),
            format_clock(block.end),
            block.task_title,
            block.context.label()
        ));
    }
    out
}

/// Day type, optional note, then `"- <title> — <status>[ (<note>)]"` per task.
fn render_resume(state: &PlannerState) -> String {
    let mut out = format!("Day type: {}\n", state.day_type);
    if !state.day_note.is_empty() {
        out.push_str(&format!("Notes: {}\n", state.day_note));
    }
    for task in state.tasks.tasks() {
        out.push_str(&format!("{}\n", render_review_line(task)));
    }
    out
}

fn render_review_line(task: &Task) -> String {
    let status = task
        .review_status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "none".to_string());
    match &task.review_note {
        Some(note) if task.review_status.is_some() => {
            format!("- {} — {} ({})", task.title, status, note)
        }
        _ => format!("- {} — {}", task.title, status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dayblock_core::{
        build_plan, compute_free_slots, parse_events, DayType, ReviewStatus, TaskContext,
    };

    #[test]
    fn plan_export_lines() {
        let window = DayType::Standard.profile().window;
        let events = parse_events("10:00-16:00 Offsite", &window);
        let slots = compute_free_slots(&events, &window);

        let mut state = PlannerState::default();
        let id = state.tasks.add("Prep notes", 45).unwrap();
        state.tasks.set_context(id, TaskContext::Deep);

        let plan = build_plan(&slots, &state.tasks);
        assert_eq!(render_plan(&plan.blocks), "09:00-09:45 Prep notes [deep work]\n");
    }

    #[test]
    fn resume_includes_day_type_note_and_reviews() {
        let mut state = PlannerState::default();
        state.day_type = DayType::Admin;
        state.day_note = "Paperwork day".to_string();
        let a = state.tasks.add("Taxes", 60).unwrap();
        let b = state.tasks.add("Calls", 30).unwrap();
        state
            .tasks
            .set_review(a, Some(ReviewStatus::Done), None);
        state
            .tasks
            .set_review(b, Some(ReviewStatus::Moved), Some("to Tuesday".into()));

        let resume = render_resume(&state);
        assert_eq!(
            resume,
            "Day type: Admin day\n\
             Notes: Paperwork day\n\
             - Taxes — done\n\
             - Calls — moved (to Tuesday)\n"
        );
    }

    #[test]
    fn unreviewed_tasks_render_as_none() {
        let mut state = PlannerState::default();
        state.tasks.add("Untouched", 30).unwrap();
        let resume = render_resume(&state);
        assert!(resume.ends_with("- Untouched — none\n"));
    }
}

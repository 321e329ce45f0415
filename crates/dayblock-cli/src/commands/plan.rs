//! Plan commands: build the block schedule, show it, or watch it live.

use clap::Subcommand;
use dayblock_core::summary::{free_minutes, planned_minutes};
use dayblock_core::time::{format_clock, format_duration};
use dayblock_core::{
    block_countdown, build_plan, capacity_summary, compute_free_slots, parse_events,
    reminder_points, DayPlan, DayProfile, Event, FreeSlot, PlannedBlock, PlannerState,
    ReminderSet, REMINDER_LEAD_MINUTES,
};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Build the plan and print events, free slots, blocks and summary
    Build {
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the current plan with countdown labels
    Show,
    /// Keep the plan on screen, refreshing countdowns and reminders
    Watch {
        /// Refresh interval in seconds
        #[arg(long, default_value = "30")]
        interval: u64,
    },
}

/// Everything one scheduling run derives from the persisted state.
pub struct BuiltPlan {
    pub profile: DayProfile,
    pub events: Vec<Event>,
    pub free_slots: Vec<FreeSlot>,
    pub plan: DayPlan,
}

/// Recompute the whole pipeline from state. Events, slots and blocks are
/// always rebuilt wholesale; nothing is patched incrementally.
pub fn rebuild(state: &PlannerState) -> BuiltPlan {
    let profile = state.day_type.profile();
    let events = parse_events(&state.calendar_text, &profile.window);
    let free_slots = compute_free_slots(&events, &profile.window);
    let plan = build_plan(&free_slots, &state.tasks);
    BuiltPlan {
        profile,
        events,
        free_slots,
        plan,
    }
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::Build { json } => {
            let state = PlannerState::load_or_default();
            let built = rebuild(&state);
            if json {
                println!("{}", serde_json::to_string_pretty(&built.plan)?);
            } else {
                print_full(&built);
            }
        }
        PlanAction::Show => {
            let state = PlannerState::load_or_default();
            let built = rebuild(&state);
            print_blocks(&built, Some(local_now_minutes()));
            print_summary(&built);
        }
        PlanAction::Watch { interval } => watch(interval)?,
    }

    Ok(())
}

fn print_full(built: &BuiltPlan) {
    println!(
        "{} {}-{}",
        built.profile.label,
        format_clock(built.profile.window.start),
        format_clock(built.profile.window.end)
    );

    if !built.events.is_empty() {
        println!("Events:");
        for event in &built.events {
            println!(
                "  {}-{} {}",
                format_clock(event.start),
                format_clock(event.end),
                event.title
            );
        }
    }

    if !built.free_slots.is_empty() {
        println!("Free:");
        for slot in &built.free_slots {
            println!(
                "  {}-{} ({})",
                format_clock(slot.start),
                format_clock(slot.end),
                format_duration(slot.duration_minutes())
            );
        }
    }

    print_blocks(built, None);
    print_summary(built);
}

fn print_blocks(built: &BuiltPlan, now: Option<i32>) {
    if built.plan.blocks.is_empty() {
        println!("Plan: nothing scheduled");
    } else {
        println!("Plan:");
        for block in &built.plan.blocks {
            println!("  {}", describe_block(block, now));
        }
    }

    if !built.plan.unscheduled.is_empty() {
        println!("Unscheduled:");
        for task in &built.plan.unscheduled {
            println!(
                "  - {} ({})",
                task.title,
                format_duration(task.duration_minutes.max(0))
            );
        }
    }
}

fn describe_block(block: &PlannedBlock, now: Option<i32>) -> String {
    let mut line = format!(
        "{}-{} {} [{}]",
        format_clock(block.start),
        format_clock(block.end),
        block.task_title,
        block.context.label()
    );
    if block.important {
        line.push_str(" *");
    }
    if let Some(label) = now.and_then(|now| block_countdown(block, now)) {
        line.push_str(&format!(" ({label})"));
    }
    line
}

fn print_summary(built: &BuiltPlan) {
    println!(
        "Summary: {}",
        capacity_summary(
            free_minutes(&built.free_slots),
            planned_minutes(&built.plan.blocks)
        )
    );
}

/// Minutes since local midnight, the host-supplied current-time pointer.
fn local_now_minutes() -> i32 {
    use chrono::Timelike;
    let now = chrono::Local::now();
    (now.hour() * 60 + now.minute()) as i32
}

fn watch(interval: u64) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let mut reminders = ReminderSet::new();
        loop {
            // Reload and rebuild each pass so edits from another terminal
            // are picked up; the reminder set is replaced as one unit so no
            // timer from a previous pass can fire for a stale plan.
            let state = PlannerState::load_or_default();
            let built = rebuild(&state);
            let now = local_now_minutes();

            println!("--- {} ---", format_clock(now));
            print_blocks(&built, Some(now));
            print_summary(&built);

            reminders.rebuild(reminder_points(&built.plan.blocks, now), now, |reminder| {
                println!(
                    "reminder: {} starts at {}",
                    reminder.task_title,
                    format_clock(reminder.fire_at + REMINDER_LEAD_MINUTES)
                );
            });

            tokio::time::sleep(std::time::Duration::from_secs(interval.max(1))).await;
        }
    })
}

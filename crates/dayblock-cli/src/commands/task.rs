//! Task management commands for CLI.

use clap::Subcommand;
use dayblock_core::{PlannerState, ReviewStatus, Task, TaskContext};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task at the end of the scheduling order
    Add {
        /// Task title
        title: String,
        /// Requested duration in minutes
        #[arg(long, default_value = "30")]
        duration: i32,
        /// Mark as important (gets a pre-start reminder)
        #[arg(long)]
        important: bool,
        /// Context: deep, admin, calls, errands or other
        #[arg(long, default_value = "other")]
        context: String,
    },
    /// List tasks in scheduling order
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Include a task in the next plan
    Include {
        /// Task ID
        id: u64,
    },
    /// Exclude a task from the next plan
    Exclude {
        /// Task ID
        id: u64,
    },
    /// Change a task's requested duration
    Duration {
        /// Task ID
        id: u64,
        /// New duration in minutes
        minutes: i32,
    },
    /// Mark a task important (or clear the flag with --off)
    Important {
        /// Task ID
        id: u64,
        #[arg(long)]
        off: bool,
    },
    /// Change a task's context
    Context {
        /// Task ID
        id: u64,
        /// Context: deep, admin, calls, errands or other
        context: String,
    },
    /// Record a review outcome ("none" clears it)
    Review {
        /// Task ID
        id: u64,
        /// Status: done, delayed, canceled, moved, other or none
        status: String,
        /// Optional review note
        #[arg(long)]
        note: Option<String>,
    },
    /// Delete every task
    Reset,
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = PlannerState::load_or_default();

    match action {
        TaskAction::Add {
            title,
            duration,
            important,
            context,
        } => {
            let context = parse_context(&context)?;
            let id = state
                .tasks
                .add(title, duration)
                .ok_or("task title must not be empty")?;
            state.tasks.set_important(id, important);
            state.tasks.set_context(id, context);
            persist(&mut state)?;
            println!("Task added: {id}");
        }
        TaskAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(state.tasks.tasks())?);
            } else if state.tasks.is_empty() {
                println!("no tasks");
            } else {
                for task in state.tasks.tasks() {
                    println!("{}", describe(task));
                }
            }
        }
        TaskAction::Include { id } => {
            require(state.tasks.set_include(id, true), id)?;
            persist(&mut state)?;
            println!("Task {id} included");
        }
        TaskAction::Exclude { id } => {
            require(state.tasks.set_include(id, false), id)?;
            persist(&mut state)?;
            println!("Task {id} excluded");
        }
        TaskAction::Duration { id, minutes } => {
            require(state.tasks.set_duration(id, minutes), id)?;
            persist(&mut state)?;
            println!("Task {id} duration set to {minutes}m");
        }
        TaskAction::Important { id, off } => {
            require(state.tasks.set_important(id, !off), id)?;
            persist(&mut state)?;
            println!("Task {id} {}", if off { "no longer important" } else { "important" });
        }
        TaskAction::Context { id, context } => {
            let context = parse_context(&context)?;
            require(state.tasks.set_context(id, context), id)?;
            persist(&mut state)?;
            println!("Task {id} context set to {context}");
        }
        TaskAction::Review { id, status, note } => {
            let status = parse_review_status(&status)?;
            require(state.tasks.set_review(id, status, note), id)?;
            persist(&mut state)?;
            match status {
                Some(status) => println!("Task {id} reviewed: {status}"),
                None => println!("Task {id} review cleared"),
            }
        }
        TaskAction::Reset => {
            state.tasks.reset();
            persist(&mut state)?;
            println!("All tasks deleted");
        }
    }

    Ok(())
}

fn persist(state: &mut PlannerState) -> Result<(), Box<dyn std::error::Error>> {
    state.touch();
    state.save()?;
    Ok(())
}

fn require(found: bool, id: u64) -> Result<(), Box<dyn std::error::Error>> {
    if found {
        Ok(())
    } else {
        Err(format!("no task with id {id}").into())
    }
}

fn describe(task: &Task) -> String {
    let mut line = format!(
        "[{}] #{} {} ({}m, {})",
        if task.include { "x" } else { " " },
        task.id,
        task.title,
        task.duration_minutes,
        task.context,
    );
    if task.important {
        line.push_str(" *");
    }
    if let Some(status) = task.review_status {
        line.push_str(&format!(" [{status}]"));
    }
    line
}

fn parse_context(s: &str) -> Result<TaskContext, Box<dyn std::error::Error>> {
    match s {
        "deep" => Ok(TaskContext::Deep),
        "admin" => Ok(TaskContext::Admin),
        "calls" => Ok(TaskContext::Calls),
        "errands" => Ok(TaskContext::Errands),
        "other" => Ok(TaskContext::Other),
        _ => Err(format!("unknown context: {s} (expected deep|admin|calls|errands|other)").into()),
    }
}

fn parse_review_status(s: &str) -> Result<Option<ReviewStatus>, Box<dyn std::error::Error>> {
    match s {
        "none" => Ok(None),
        "done" => Ok(Some(ReviewStatus::Done)),
        "delayed" => Ok(Some(ReviewStatus::Delayed)),
        "canceled" => Ok(Some(ReviewStatus::Canceled)),
        "moved" => Ok(Some(ReviewStatus::Moved)),
        "other" => Ok(Some(ReviewStatus::Other)),
        _ => {
            Err(format!("unknown status: {s} (expected done|delayed|canceled|moved|other|none)")
                .into())
        }
    }
}

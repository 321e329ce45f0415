//! Task model and the ordered registry that owns it.
//!
//! The registry is an explicitly owned, caller-held collection; there is no
//! global. Insertion order is scheduling priority order and is never changed
//! automatically. Tasks are mutated in place by the update operations below
//! and deleted only by a full-registry reset.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of work a task represents, used for grouping and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskContext {
    /// Focused, uninterrupted work.
    Deep,
    /// Administrative chores.
    Admin,
    /// Phone or video calls.
    Calls,
    /// Out-of-house errands.
    Errands,
    /// Anything else.
    Other,
}

impl TaskContext {
    /// Display label used in plan exports.
    pub fn label(&self) -> &'static str {
        match self {
            TaskContext::Deep => "deep work",
            TaskContext::Admin => "admin",
            TaskContext::Calls => "calls",
            TaskContext::Errands => "errands",
            TaskContext::Other => "other",
        }
    }
}

impl Default for TaskContext {
    fn default() -> Self {
        TaskContext::Other
    }
}

impl fmt::Display for TaskContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome recorded when reviewing a task at the end of the day.
///
/// Absence (`Option::None` on the task) means the task has not been
/// reviewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Done,
    Delayed,
    Canceled,
    Moved,
    Other,
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReviewStatus::Done => "done",
            ReviewStatus::Delayed => "delayed",
            ReviewStatus::Canceled => "canceled",
            ReviewStatus::Moved => "moved",
            ReviewStatus::Other => "other",
        };
        write!(f, "{label}")
    }
}

/// A single ad-hoc task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, assigned monotonically by the owning registry.
    pub id: u64,
    pub title: String,
    /// Whether the task participates in the next scheduling run.
    pub include: bool,
    /// Requested duration; must be positive to be schedulable.
    pub duration_minutes: i32,
    pub important: bool,
    pub context: TaskContext,
    /// End-of-day review outcome, absent until reviewed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_status: Option<ReviewStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_note: Option<String>,
}

impl Task {
    /// Whether the scheduler should try to place this task.
    pub fn is_schedulable(&self) -> bool {
        self.include && self.duration_minutes > 0
    }
}

/// Ordered task collection with monotonic id assignment.
///
/// Serde round-trips losslessly, including `next_id`, so ids stay unique
/// across persisted sessions.
// `next_id` comes first so TOML serialization emits it before the task
// array-of-tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRegistry {
    #[serde(default)]
    next_id: u64,
    #[serde(default)]
    tasks: Vec<Task>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task, returning its id. A title that is empty after
    /// trimming is skipped and yields `None`.
    pub fn add(&mut self, title: impl Into<String>, duration_minutes: i32) -> Option<u64> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            title,
            include: true,
            duration_minutes,
            important: false,
            context: TaskContext::default(),
            review_status: None,
            review_note: None,
        });
        Some(id)
    }

    /// Tasks in insertion (= scheduling priority) order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Set the include flag. Returns false if the id is unknown.
    pub fn set_include(&mut self, id: u64, include: bool) -> bool {
        self.update(id, |t| t.include = include)
    }

    pub fn set_duration(&mut self, id: u64, minutes: i32) -> bool {
        self.update(id, |t| t.duration_minutes = minutes)
    }

    pub fn set_important(&mut self, id: u64, important: bool) -> bool {
        self.update(id, |t| t.important = important)
    }

    pub fn set_context(&mut self, id: u64, context: TaskContext) -> bool {
        self.update(id, |t| t.context = context)
    }

    /// Record a review outcome. Passing `None` clears the review fields.
    pub fn set_review(
        &mut self,
        id: u64,
        status: Option<ReviewStatus>,
        note: Option<String>,
    ) -> bool {
        self.update(id, |t| {
            t.review_status = status;
            t.review_note = if status.is_some() { note } else { None };
        })
    }

    /// Clear review outcomes on every task, keeping the tasks themselves.
    pub fn clear_reviews(&mut self) {
        for task in &mut self.tasks {
            task.review_status = None;
            task.review_note = None;
        }
    }

    /// Drop all tasks. Id assignment continues from where it left off.
    pub fn reset(&mut self) {
        self.tasks.clear();
    }

    fn update(&mut self, id: u64, f: impl FnOnce(&mut Task)) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                f(task);
                true
            }
            None => false,
        }
    }
}

//! # Dayblock Core Library
//!
//! This library provides the core planning logic for Dayblock, a single-user
//! day planner. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with any GUI being a thin layer over
//! the same core library.
//!
//! ## Architecture
//!
//! - **Event Parser**: turns free-text calendar lines into minute-of-day events
//!   clamped to the active work window
//! - **Free-Time Calculator**: computes the complement of the event set within
//!   the work window
//! - **Planner**: first-fit splitting bin packer that lays tasks into free
//!   slots in registry order
//! - **Storage**: TOML-based persisted planner state
//!
//! ## Key Components
//!
//! - [`TaskRegistry`]: ordered, caller-owned task collection
//! - [`build_plan`]: the scheduling pass producing [`DayPlan`]
//! - [`PlannerState`]: the single persisted record (day type, calendar text,
//!   tasks, day note)
//! - [`ReminderSet`]: owned set of pending reminder timers, replaced as a unit

pub mod day_type;
pub mod error;
pub mod event;
pub mod free_time;
pub mod planner;
pub mod reminder;
pub mod storage;
pub mod summary;
pub mod task;
pub mod time;

pub use day_type::{DayProfile, DayType, WorkWindow};
pub use error::{CoreError, StateError};
pub use event::{parse_events, Event};
pub use free_time::{compute_free_slots, FreeSlot};
pub use planner::{build_plan, DayPlan, PlannedBlock};
pub use reminder::{reminder_points, Reminder, ReminderSet, REMINDER_LEAD_MINUTES};
pub use storage::PlannerState;
pub use summary::{block_countdown, capacity_summary};
pub use task::{ReviewStatus, Task, TaskContext, TaskRegistry};
pub use time::{format_clock, format_duration, parse_clock_time};

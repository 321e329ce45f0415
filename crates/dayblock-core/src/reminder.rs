//! Reminder derivation and the owned set of pending reminder timers.
//!
//! Important blocks get a reminder 5 minutes before they start. The host
//! arms them through [`ReminderSet`], which owns every pending timer and
//! replaces the whole set atomically on rebuild -- a stale timer firing for
//! a superseded plan is a correctness bug, not just a leak.

use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::planner::PlannedBlock;

/// Minutes before a block's start at which its reminder fires.
pub const REMINDER_LEAD_MINUTES: i32 = 5;

/// A pending reminder, keyed by the identity of the block it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub block_id: String,
    pub task_title: String,
    /// Minute of day at which to fire.
    pub fire_at: i32,
    /// Minute of day at which the block starts.
    pub block_start: i32,
}

/// Derive the reminders for a plan relative to the current-time pointer.
///
/// One reminder per important block at `start - 5`; reminder times already
/// reached are skipped rather than fired late.
pub fn reminder_points(blocks: &[PlannedBlock], now: i32) -> Vec<Reminder> {
    blocks
        .iter()
        .filter(|b| b.important)
        .filter_map(|b| {
            let fire_at = b.start - REMINDER_LEAD_MINUTES;
            if fire_at <= now {
                return None;
            }
            Some(Reminder {
                block_id: b.id.clone(),
                task_title: b.task_title.clone(),
                fire_at,
                block_start: b.start,
            })
        })
        .collect()
}

/// A single owned collection of pending reminder timers.
///
/// `rebuild` cancels every existing timer before arming the new set, as one
/// unit; there is no window in which timers from two different plans are
/// both live. Dropping the set cancels everything.
#[derive(Debug, Default)]
pub struct ReminderSet {
    handles: Vec<JoinHandle<()>>,
}

impl ReminderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently armed timers.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Replace all pending timers with timers for `reminders`.
    ///
    /// `now` is the current-time pointer in minutes of day; `notify` runs on
    /// the runtime when a reminder fires. Must be called from within a tokio
    /// runtime.
    pub fn rebuild<F>(&mut self, reminders: Vec<Reminder>, now: i32, notify: F)
    where
        F: Fn(&Reminder) + Send + Sync + 'static,
    {
        self.cancel_all();

        let notify = Arc::new(notify);
        for reminder in reminders {
            let delay_minutes = reminder.fire_at - now;
            if delay_minutes <= 0 {
                continue;
            }
            let notify = Arc::clone(&notify);
            self.handles.push(tokio::spawn(async move {
                let delay = std::time::Duration::from_secs(delay_minutes as u64 * 60);
                tokio::time::sleep(delay).await;
                notify(&reminder);
            }));
        }
    }

    /// Cancel every pending timer.
    pub fn cancel_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for ReminderSet {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

//! Day-type profiles and the work window they supply.
//!
//! A day type is a small fixed vocabulary mapping to a default work window.
//! Changing the active day type invalidates any plan built against the old
//! window; callers rebuild rather than patch.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The portion of the day eligible for scheduling, as minute-of-day bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkWindow {
    pub start: i32,
    pub end: i32,
}

impl WorkWindow {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Total window length in minutes.
    pub fn duration_minutes(&self) -> i32 {
        self.end - self.start
    }
}

/// A resolved day-type profile: display label plus work window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayProfile {
    pub label: &'static str,
    pub window: WorkWindow,
}

/// Kind of day being planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    /// Regular 9-17 office day.
    Standard,
    /// Later 10-18 day for admin-heavy work.
    Admin,
    /// 11-19 day shifted toward creative evening hours.
    Creative,
    /// Short 9-15 day.
    Light,
}

impl DayType {
    /// Resolve the fixed profile for this day type.
    pub fn profile(&self) -> DayProfile {
        match self {
            DayType::Standard => DayProfile {
                label: "Standard day",
                window: WorkWindow::new(9 * 60, 17 * 60),
            },
            DayType::Admin => DayProfile {
                label: "Admin day",
                window: WorkWindow::new(10 * 60, 18 * 60),
            },
            DayType::Creative => DayProfile {
                label: "Creative day",
                window: WorkWindow::new(11 * 60, 19 * 60),
            },
            DayType::Light => DayProfile {
                label: "Light day",
                window: WorkWindow::new(9 * 60, 15 * 60),
            },
        }
    }

    /// All built-in day types, in display order.
    pub fn all() -> [DayType; 4] {
        [
            DayType::Standard,
            DayType::Admin,
            DayType::Creative,
            DayType::Light,
        ]
    }

    /// Parse a day-type tag as used in persisted state and CLI input.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "standard" => Some(DayType::Standard),
            "admin" => Some(DayType::Admin),
            "creative" => Some(DayType::Creative),
            "light" => Some(DayType::Light),
            _ => None,
        }
    }

    /// The persisted tag for this day type.
    pub fn tag(&self) -> &'static str {
        match self {
            DayType::Standard => "standard",
            DayType::Admin => "admin",
            DayType::Creative => "creative",
            DayType::Light => "light",
        }
    }
}

impl Default for DayType {
    fn default() -> Self {
        DayType::Standard
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.profile().label)
    }
}

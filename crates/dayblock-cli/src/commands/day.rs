//! Day-type commands for CLI.

use clap::Subcommand;
use dayblock_core::time::format_clock;
use dayblock_core::{DayType, PlannerState};

#[derive(Subcommand)]
pub enum DayAction {
    /// Select the day type: standard, admin, creative or light
    Set {
        /// Day-type tag
        day_type: String,
    },
    /// Show the active day type and work window
    Show,
}

pub fn run(action: DayAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = PlannerState::load_or_default();

    match action {
        DayAction::Set { day_type } => {
            let day_type = DayType::from_tag(&day_type).ok_or_else(|| {
                format!("unknown day type: {day_type} (expected standard|admin|creative|light)")
            })?;
            state.day_type = day_type;
            state.touch();
            state.save()?;

            let profile = day_type.profile();
            println!(
                "{}: work window {}-{} (rebuild the plan; the old one no longer applies)",
                profile.label,
                format_clock(profile.window.start),
                format_clock(profile.window.end)
            );
        }
        DayAction::Show => {
            let profile = state.day_type.profile();
            println!(
                "{} ({}): {}-{}",
                profile.label,
                state.day_type.tag(),
                format_clock(profile.window.start),
                format_clock(profile.window.end)
            );
        }
    }

    Ok(())
}

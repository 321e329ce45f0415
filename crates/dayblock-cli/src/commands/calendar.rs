//! Calendar text commands for CLI.
//!
//! The calendar is stored as the raw text the user typed; events are parsed
//! fresh on every plan build, so edits here simply take effect next build.

use clap::Subcommand;
use dayblock_core::{parse_events, PlannerState};
use dayblock_core::time::format_clock;

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Replace the calendar text (use \n or a quoted multi-line string)
    Set {
        /// Newline-delimited calendar lines, or "-" to read stdin
        text: String,
    },
    /// Show the calendar text and how it parses under the active window
    Show,
    /// Clear the calendar text
    Clear,
}

pub fn run(action: CalendarAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = PlannerState::load_or_default();

    match action {
        CalendarAction::Set { text } => {
            state.calendar_text = if text == "-" {
                std::io::read_to_string(std::io::stdin())?
            } else {
                text
            };
            state.touch();
            state.save()?;
            println!("calendar updated");
        }
        CalendarAction::Show => {
            if state.calendar_text.is_empty() {
                println!("calendar is empty");
                return Ok(());
            }
            println!("{}", state.calendar_text.trim_end());

            let window = state.day_type.profile().window;
            let events = parse_events(&state.calendar_text, &window);
            println!();
            println!("parsed ({} events):", events.len());
            for event in &events {
                println!(
                    "  {}-{} {}",
                    format_clock(event.start),
                    format_clock(event.end),
                    event.title
                );
            }
        }
        CalendarAction::Clear => {
            state.calendar_text.clear();
            state.touch();
            state.save()?;
            println!("calendar cleared");
        }
    }

    Ok(())
}

//! Day-note commands for CLI.

use clap::Subcommand;
use dayblock_core::PlannerState;

#[derive(Subcommand)]
pub enum NoteAction {
    /// Replace the day note
    Set {
        /// Note text
        text: String,
    },
    /// Show the day note
    Show,
    /// Clear the day note
    Clear,
}

pub fn run(action: NoteAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = PlannerState::load_or_default();

    match action {
        NoteAction::Set { text } => {
            state.day_note = text;
            state.touch();
            state.save()?;
            println!("note updated");
        }
        NoteAction::Show => {
            if state.day_note.is_empty() {
                println!("no note");
            } else {
                println!("{}", state.day_note);
            }
        }
        NoteAction::Clear => {
            state.day_note.clear();
            state.touch();
            state.save()?;
            println!("note cleared");
        }
    }

    Ok(())
}

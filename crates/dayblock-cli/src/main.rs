use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dayblock", version, about = "Dayblock day planner CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Calendar text for the day
    Calendar {
        #[command(subcommand)]
        action: commands::calendar::CalendarAction,
    },
    /// Day-type profile selection
    Day {
        #[command(subcommand)]
        action: commands::day::DayAction,
    },
    /// Free-form day note
    Note {
        #[command(subcommand)]
        action: commands::note::NoteAction,
    },
    /// Build and watch the block schedule
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Plain-text exports
    Export {
        #[command(subcommand)]
        action: commands::export::ExportAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Task { action } => commands::task::run(action),
        Commands::Calendar { action } => commands::calendar::run(action),
        Commands::Day { action } => commands::day::run(action),
        Commands::Note { action } => commands::note::run(action),
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Export { action } => commands::export::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

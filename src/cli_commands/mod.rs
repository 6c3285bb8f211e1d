use clap::Subcommand;

use crate::ConfigCommands;

pub(crate) mod dashboard;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Open the dashboard (the default when no command is given)
    Tui,

    /// List upcoming exams with their countdown
    Exams(dashboard::ExamsArgs),

    /// Show editorials grouped by year, month and day
    Editorials(dashboard::EditorialsArgs),

    /// Show reading statistics against the next exam
    Stats(dashboard::StatsArgs),

    /// Fetch and print one editorial
    Show(dashboard::ShowArgs),

    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

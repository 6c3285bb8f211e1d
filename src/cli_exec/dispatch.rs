use super::config::{handle_config_path_command, handle_config_show_command};
use super::dashboard::{handle_exams_command, handle_stats_command};
use super::editorials::{handle_editorials_command, handle_show_command};
use super::*;

pub(super) fn handle_command(
    command: Commands,
    config: &DeskConfig,
    sources: &ConfigSources,
) -> Result<()> {
    match command {
        Commands::Tui => anyhow::bail!("`tui` is not a one-shot command"),
        Commands::Exams(args) => handle_exams_command(config, args.json)?,
        Commands::Editorials(args) => handle_editorials_command(config, args.unread, args.json)?,
        Commands::Stats(args) => handle_stats_command(config, args.json)?,
        Commands::Show(args) => handle_show_command(config, &args.id, args.raw)?,
        Commands::Config { command } => match command {
            ConfigCommands::Show { json } => handle_config_show_command(config, json)?,
            ConfigCommands::Path => handle_config_path_command(sources)?,
        },
    }
    Ok(())
}

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use prepdesk::logging::{self, LogTarget};
use prepdesk::model::{ConfigSources, DeskConfig};

use crate::Commands;

#[derive(Parser)]
#[command(name = "prepdesk")]
#[command(about = "Exam preparation dashboard", long_about = None)]
pub(crate) struct Cli {
    /// Config file (JSON); defaults to $PREPDESK_CONFIG or ./prepdesk.json
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// API base URL, overriding config and environment
    #[arg(long = "api-url", value_name = "URL", global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let sources = ConfigSources::from_env(cli.config, cli.api_url);
    let config = DeskConfig::resolve(&sources)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            let _log = logging::init(&config.log.level, LogTarget::File(&config.log_dir()))?;
            prepdesk::tui::run(prepdesk::tui::TuiRunOptions { config })?;
        }
        Some(command) => {
            // stdout carries command output; stderr only gets warnings.
            let _log = logging::init("warn", LogTarget::Stderr)?;
            crate::cli_exec::handle_command(command, &config, &sources)?
        }
    }

    Ok(())
}

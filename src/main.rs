mod cli_commands;
mod cli_exec;
mod cli_runtime;
mod cli_subcommands;

use cli_commands::Commands;
use cli_subcommands::ConfigCommands;

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

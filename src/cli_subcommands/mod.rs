use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the configuration after files, environment and flags are applied
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Print which config file is used, if any
    Path,
}

use clap::Args;

#[derive(Args)]
pub(crate) struct ExamsArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct EditorialsArgs {
    /// Only show unread editorials
    #[arg(long)]
    pub(crate) unread: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct StatsArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct ShowArgs {
    /// Editorial id
    pub(crate) id: String,
    /// Print the raw document instead of formatted text
    #[arg(long)]
    pub(crate) raw: bool,
}

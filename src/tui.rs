use anyhow::Result;

use crate::model::DeskConfig;

#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    pub config: DeskConfig,
}

pub fn run(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run(opts)
}

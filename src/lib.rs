pub mod document;
pub mod error;
pub mod explorer;
pub mod logging;
pub mod model;
pub mod remote;
pub mod tui;
mod tui_shell;

pub mod cli;
pub(crate) mod format;
pub mod report;
pub mod tui;

pub use cli::{Cli, Command};
pub use tui::run_tui;

//! Interactive shell and script runner around the dashboard.

mod commands;
pub mod context;
pub mod help;
pub mod output;
pub mod registry;
mod shell;
pub mod table;
pub mod view;

pub use context::{CliError, CliMode, CommandError, ShellContext};
pub use shell::{run_cli, SCRIPT_ENV};

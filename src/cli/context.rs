//! Shell state, command dispatch, and error reporting.

use std::io;

use strsim::levenshtein;

use crate::config::{Config, ConfigManager};
use crate::dashboard::{render, DashboardState, Event, NoticeLevel};
use crate::errors::ReportError;

use super::commands;
use super::output::{self, OutputPreferences};
use super::registry::{CommandEntry, CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("No dataset loaded. Use `load <path>` or `sample` first.")]
    NoDataset,
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] ReportError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("exit requested")]
    ExitRequested,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] ReportError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub state: DashboardState,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_config_manager(mode, ConfigManager::new()?)
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        let config = config_manager.load()?;
        let state = DashboardState::with_options(config.report_options());
        Ok(Self {
            mode,
            registry,
            config_manager,
            config,
            state,
            running: true,
        })
    }

    /// Feeds one event through the dashboard and prints its notice.
    pub fn apply(&mut self, event: Event) {
        self.state = render(&self.state, event);
        if let Some(notice) = &self.state.notice {
            match notice.level {
                NoticeLevel::Success => output::success(&notice.message),
                NoticeLevel::Info => output::info(&notice.message),
                NoticeLevel::Warning => output::warning(&notice.message),
                NoticeLevel::Error => output::error(&notice.message),
            }
        }
    }

    /// Pushes the plain/quiet output preferences for this mode and config.
    pub fn sync_output_preferences(&self) {
        output::set_preferences(OutputPreferences {
            plain_mode: self.mode == CliMode::Script,
            quiet_mode: self.config.quiet,
        });
    }

    pub fn prompt(&self) -> String {
        match &self.state.dataset {
            Some(dataset) => format!("sales[{}]> ", dataset.name),
            None => "sales> ".to_string(),
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn require_data(&self) -> CommandResult {
        if self.state.has_data() {
            Ok(())
        } else {
            Err(CommandError::NoDataset)
        }
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &input.to_lowercase()), name))
            .min_by_key(|(distance, _)| *distance);
        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::hint(format!("Did you mean `{}`?", name));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::NoDataset => {
                output::error(CommandError::NoDataset);
                output::hint("Try `sample` to explore generated data.");
            }
            other => output::error(other),
        }
    }
}

pub(crate) fn usage_error(usage: &str) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {usage}"))
}

#[cfg(test)]
pub(crate) fn process_script(
    context: &mut ShellContext,
    lines: &[&str],
) -> Result<(), CommandError> {
    for line in lines {
        match super::shell::handle_line(context, line)? {
            LoopControl::Continue => {}
            LoopControl::Exit => break,
        }
    }
    Ok(())
}

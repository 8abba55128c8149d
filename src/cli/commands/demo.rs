use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::dashboard::{Button, Event};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("welcome", "Press the welcome button", "welcome", cmd_welcome),
        CommandEntry::new(
            "clear",
            "Press the reset button to dismiss the welcome message",
            "clear",
            cmd_clear,
        ),
    ]
}

fn cmd_welcome(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.apply(Event::Click(Button::Welcome));
    if context.state.welcome_clicks > 1 {
        output::info(format!(
            "Button clicked {} times.",
            context.state.welcome_clicks
        ));
    }
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.apply(Event::Click(Button::Reset));
    output::info("Message cleared.");
    Ok(())
}

use crate::cli::context::{usage_error, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::dashboard::Event;

const USAGE: &str = "config [show | set <key> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change settings",
        USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            let config = &context.config;
            output::section("Configuration");
            output::info(format!("  locale           : {}", config.locale));
            output::info(format!("  currency         : {}", config.currency));
            output::info(format!("  top_products     : {}", config.top_products));
            output::info(format!("  monthly_min_days : {}", config.monthly_min_days));
            output::info(format!(
                "  date_column      : {}",
                config.date_column.as_deref().unwrap_or("(detect)")
            ));
            output::info(format!(
                "  currency_display : {}",
                format!("{:?}", config.currency_display).to_lowercase()
            ));
            output::info(format!(
                "  negative_style   : {}",
                format!("{:?}", config.negative_style).to_lowercase()
            ));
            output::info(format!("  screen_reader    : {}", on_off(config.screen_reader)));
            output::info(format!(
                "  date_format      : {}",
                format!("{:?}", config.date_format).to_lowercase()
            ));
            output::info(format!("  quiet            : {}", on_off(config.quiet)));
            output::info(format!(
                "  file             : {}",
                context.config_manager.path().display()
            ));
            Ok(())
        }
        ["set", key, value @ ..] if !value.is_empty() => {
            context.config.set(key, &value.join(" "))?;
            context.persist_config()?;
            context.sync_output_preferences();
            let options = context.config.report_options();
            if options != context.state.options {
                context.apply(Event::Configure(options));
            }
            output::success(format!("Updated `{key}`."));
            Ok(())
        }
        _ => Err(usage_error(USAGE)),
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

use crate::cli::context::{usage_error, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::view::{print_metrics, Formatter};
use crate::dashboard::Event;

use super::data::parse_date_arg;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "range",
            "Narrow the date range (inclusive)",
            "range <start> <end>",
            cmd_range,
        ),
        CommandEntry::new(
            "category",
            "Filter by category, or `All`",
            "category <name|All>",
            cmd_category,
        ),
        CommandEntry::new(
            "categories",
            "List category choices",
            "categories",
            cmd_categories,
        ),
        CommandEntry::new(
            "reset",
            "Restore the full date range and all categories",
            "reset",
            cmd_reset,
        ),
    ]
}

fn cmd_range(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [start, end] = args else {
        return Err(usage_error("range <start> <end>"));
    };
    context.require_data()?;
    let start = parse_date_arg(start)?;
    let end = parse_date_arg(end)?;
    apply_and_summarize(context, Event::SetRange { start, end });
    Ok(())
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(usage_error("category <name|All>"));
    }
    context.require_data()?;
    // Unquoted multi-word names arrive split.
    let choice = args.join(" ");
    apply_and_summarize(context, Event::SetCategory(choice));
    Ok(())
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.require_data()?;
    let active = context
        .state
        .filter
        .as_ref()
        .map(|filter| filter.category.label().to_string())
        .unwrap_or_default();
    for choice in context.state.category_choices() {
        let marker = if choice == active { "*" } else { " " };
        output::info(format!(" {marker} {choice}"));
    }
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.require_data()?;
    apply_and_summarize(context, Event::ResetFilters);
    Ok(())
}

fn apply_and_summarize(context: &mut ShellContext, event: Event) {
    context.apply(event);
    if let Some(report) = &context.state.report {
        let filter = &report.filter;
        output::info(format!(
            "Filter: {} to {}, category {}",
            filter.range.start,
            filter.range.end,
            filter.category.label()
        ));
        print_metrics(&Formatter::new(&context.config), &report.metrics);
    }
}

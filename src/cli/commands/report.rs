use crate::cli::context::{usage_error, CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::view::{print_records, print_report, Formatter};

const DEFAULT_TABLE_ROWS: usize = 20;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "report",
            "Show KPIs and all aggregate views",
            "report",
            cmd_report,
        ),
        CommandEntry::new(
            "table",
            "Show the filtered raw rows",
            "table [limit]",
            cmd_table,
        ),
    ]
}

fn cmd_report(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.require_data()?;
    let Some(report) = &context.state.report else {
        output::warning("Nothing to report for the current dataset.");
        return Ok(());
    };
    print_report(&Formatter::new(&context.config), report);
    Ok(())
}

fn cmd_table(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let limit = match args {
        [] => DEFAULT_TABLE_ROWS,
        [value] => value.parse().map_err(|_| usage_error("table [limit]"))?,
        _ => return Err(usage_error("table [limit]")),
    };
    let Some(dataset) = context.state.dataset.as_ref() else {
        return Err(CommandError::NoDataset);
    };
    let view = context.state.filtered();
    output::section(format!("Raw data ({} rows)", view.len()));
    print_records(
        &Formatter::new(&context.config),
        &dataset.columns,
        view.iter().take(limit),
    );
    if view.len() > limit {
        output::info(format!("... {} more rows", view.len() - limit));
    }
    Ok(())
}

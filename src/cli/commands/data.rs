use std::{fs, path::Path};

use chrono::NaiveDate;

use crate::cli::context::{usage_error, CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::dashboard::Event;
use crate::dataset::{self, LoadOptions, SampleSpec, MAX_SAMPLE_ROWS};

const LOAD_USAGE: &str = "load <path> [--date-column NAME]";
const SAMPLE_USAGE: &str = "sample [rows] [seed]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("load", "Load a sales CSV file", LOAD_USAGE, cmd_load),
        CommandEntry::new(
            "reload",
            "Load the most recently loaded file again",
            "reload",
            cmd_reload,
        ),
        CommandEntry::new(
            "sample",
            "Load generated sample data",
            SAMPLE_USAGE,
            cmd_sample,
        ),
        CommandEntry::new(
            "inspect",
            "Show name, size, and type of a file",
            "inspect <path>",
            cmd_inspect,
        ),
        CommandEntry::new(
            "export",
            "Write the filtered rows to a CSV file",
            "export <path>",
            cmd_export,
        ),
    ]
}

fn cmd_load(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (path, options) = parse_load_args(args, context.config.date_column.as_deref())?;
    load_from(context, Path::new(path), &options);
    Ok(())
}

fn cmd_reload(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        return Err(usage_error("reload"));
    }
    let Some(path) = context.config.last_dataset.clone() else {
        return Err(CommandError::InvalidArguments(
            "No dataset loaded before; use `load <path>` first.".into(),
        ));
    };
    let options = LoadOptions {
        date_column: context.config.date_column.clone(),
    };
    load_from(context, Path::new(&path), &options);
    Ok(())
}

/// Feeds the load outcome to the dashboard and remembers successful paths.
fn load_from(context: &mut ShellContext, path: &Path, options: &LoadOptions) {
    match dataset::load_csv_path(path, options) {
        Ok(loaded) => {
            context.apply(Event::Loaded(loaded));
            let remembered = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
            context.config.last_dataset = Some(remembered.display().to_string());
            if let Err(err) = context.persist_config() {
                output::warning(format!("Could not remember last dataset: {err}"));
            }
            print_summary(context);
        }
        Err(err) => context.apply(Event::LoadFailed(err)),
    }
}

fn parse_load_args<'a>(
    args: &[&'a str],
    configured_column: Option<&str>,
) -> Result<(&'a str, LoadOptions), CommandError> {
    let mut path = None;
    let mut date_column = configured_column.map(str::to_string);
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match *arg {
            "--date-column" => {
                let name = iter.next().ok_or_else(|| usage_error(LOAD_USAGE))?;
                date_column = Some(name.to_string());
            }
            other if path.is_none() => path = Some(other),
            _ => return Err(usage_error(LOAD_USAGE)),
        }
    }
    let path = path.ok_or_else(|| usage_error(LOAD_USAGE))?;
    Ok((path, LoadOptions { date_column }))
}

fn cmd_sample(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let spec = parse_sample_args(args)?;
    context.apply(Event::Loaded(dataset::generate_sample(&spec)));
    print_summary(context);
    Ok(())
}

fn parse_sample_args(args: &[&str]) -> Result<SampleSpec, CommandError> {
    if args.len() > 2 {
        return Err(usage_error(SAMPLE_USAGE));
    }
    let mut spec = SampleSpec::default();
    if let Some(rows) = args.first() {
        spec.rows = rows.parse().map_err(|_| usage_error(SAMPLE_USAGE))?;
        if spec.rows > MAX_SAMPLE_ROWS {
            return Err(CommandError::InvalidArguments(format!(
                "sample size must be at most {MAX_SAMPLE_ROWS} rows, got {}",
                spec.rows
            )));
        }
    }
    if let Some(seed) = args.get(1) {
        spec.seed = seed.parse().map_err(|_| usage_error(SAMPLE_USAGE))?;
    }
    Ok(spec)
}

fn cmd_inspect(_context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [path] = args else {
        return Err(usage_error("inspect <path>"));
    };
    let details = dataset::inspect_file(Path::new(path))?;
    output::success(format!("File '{}' found.", details.name));
    output::info(format!("  Filename  : {}", details.name));
    output::info(format!("  File size : {} bytes", details.size_bytes));
    output::info(format!("  File type : {}", details.media_type));
    Ok(())
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [path] = args else {
        return Err(usage_error("export <path>"));
    };
    let Some(loaded) = context.state.dataset.as_ref() else {
        return Err(CommandError::NoDataset);
    };
    let view = context.state.filtered();
    let written = dataset::export_csv(Path::new(path), &loaded.columns, &view)?;
    output::success(format!("Exported {written} rows to {path}."));
    Ok(())
}

fn print_summary(context: &ShellContext) {
    let (Some(bounds), Some(loaded)) = (context.state.bounds, context.state.dataset.as_ref()) else {
        return;
    };
    output::info(format!(
        "  Dates      : {} to {} ({} days)",
        bounds.start,
        bounds.end,
        bounds.days()
    ));
    output::info(format!("  Date column: {}", loaded.columns.date_column));
    output::info(format!(
        "  Categories : {}",
        context.state.category_choices().join(", ")
    ));
}

pub(crate) fn parse_date_arg(input: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{input}` (use YYYY-MM-DD)"))
    })
}

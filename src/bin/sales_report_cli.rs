use std::process;

fn main() {
    sales_report::init();

    if let Err(err) = sales_report::cli::run_cli() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

use common::write_temp_csv;

const SALES_CSV: &str = "Date,Amount,Category,Product,Customer\n\
                         2024-01-01,100,A,Widget,1\n\
                         2024-01-02,50,B,Gadget,2\n\
                         2024-01-01,25,A,Widget,1\n";

fn script_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sales_report_cli").unwrap();
    cmd.env("SALES_REPORT_CLI_SCRIPT", "1")
        .env("SALES_REPORT_HOME", home.path())
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn script_mode_loads_reports_and_exports() {
    let home = TempDir::new().unwrap();
    let (dir, path) = write_temp_csv(SALES_CSV);
    let out = dir.path().join("filtered.csv");
    let input = format!(
        "load '{}'\ncategory A\nreport\nexport '{}'\nexit\n",
        path.display(),
        out.display()
    );

    script_cmd(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Loaded 3 records"))
        .stdout(contains("Total sales      : $125.00"))
        .stdout(contains("Top 1 products"))
        .stdout(contains("Exported 2 rows"));

    let exported = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        exported,
        "Date,Amount,Category,Product,Customer\n2024-01-01,100,A,Widget,1\n2024-01-01,25,A,Widget,1\n"
    );

    let config = std::fs::read_to_string(home.path().join("config.json")).unwrap();
    assert!(config.contains("last_dataset"));
}

#[test]
fn invalid_upload_is_reported_without_failing() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = write_temp_csv("Name,Total\nfoo,1\n");

    script_cmd(&home)
        .write_stdin(format!("load '{}'\nreport\n", path.display()))
        .assert()
        .success()
        .stderr(contains("Error loading file"))
        .stderr(contains("No dataset loaded"));
}

#[test]
fn unknown_commands_get_suggestions() {
    let home = TempDir::new().unwrap();
    script_cmd(&home)
        .write_stdin("reprot\n")
        .assert()
        .success()
        .stderr(contains("Unknown command `reprot`"))
        .stdout(contains("Did you mean `report`?"));
}

#[test]
fn welcome_button_and_file_details() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = write_temp_csv(SALES_CSV);

    script_cmd(&home)
        .write_stdin(format!("welcome\nwelcome\ninspect '{}'\n", path.display()))
        .assert()
        .success()
        .stdout(contains("Welcome to Sales Report!"))
        .stdout(contains("Button clicked 2 times."))
        .stdout(contains(format!("File size : {} bytes", SALES_CSV.len())))
        .stdout(contains("File type : text/csv"));
}

#[test]
fn sample_data_supports_monthly_view() {
    let home = TempDir::new().unwrap();
    script_cmd(&home)
        .write_stdin("sample 400 3\nreport\ntable 5\n")
        .assert()
        .success()
        .stdout(contains("Loaded 400 records from `sample`"))
        .stdout(contains("Monthly comparison"))
        .stdout(contains("Jan 2024"))
        .stdout(contains("... 395 more rows"));
}

#[test]
fn rust_log_can_raise_the_crate_level() {
    let home = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("sales_report_cli").unwrap();
    cmd.env("SALES_REPORT_CLI_SCRIPT", "1")
        .env("SALES_REPORT_HOME", home.path())
        .env("RUST_LOG", "sales_report=debug")
        .write_stdin("sample 10\nexit\n")
        .assert()
        .success()
        .stderr(contains("recomputed report"))
        .stderr(contains("dispatching shell command"));
}

#[test]
fn display_settings_change_report_formatting() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = write_temp_csv(
        "Date,Amount,Category\n\
         2024-01-05,-1234.5,A\n",
    );
    let script = format!(
        "config set negative_style parentheses\n\
         config set currency_display code\n\
         config set date_format medium\n\
         load '{}'\nreport\n",
        path.display()
    );

    script_cmd(&home)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Total sales      : (USD 1,234.50)"))
        .stdout(contains("05 Jan 2024"));
}

#[test]
fn quiet_setting_hides_hints_but_not_reports() {
    let home = TempDir::new().unwrap();
    script_cmd(&home)
        .write_stdin("config set quiet on\nreprot\nsample 20\nreport\n")
        .assert()
        .success()
        .stdout(contains("Did you mean").not())
        .stdout(contains("Key metrics"));
}

#[test]
fn reload_reopens_the_last_file_in_a_new_session() {
    let home = TempDir::new().unwrap();
    let (_dir, path) = write_temp_csv(SALES_CSV);

    script_cmd(&home)
        .write_stdin(format!("load '{}'\n", path.display()))
        .assert()
        .success();

    script_cmd(&home)
        .write_stdin("reload\n")
        .assert()
        .success()
        .stdout(contains("Loaded 3 records from `sales`"));
}

#[test]
fn oversized_sample_is_rejected() {
    let home = TempDir::new().unwrap();
    script_cmd(&home)
        .write_stdin("sample 99999999999999\n")
        .assert()
        .success()
        .stderr(contains("sample size must be at most"));
}

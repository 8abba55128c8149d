pub mod build_info;

use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Once,
};

use dirs::home_dir;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIR_NAME: &str = ".sales_report";
const DEFAULT_LOG_DIRECTIVE: &str = "sales_report=info";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber. A valid `RUST_LOG` replaces the
/// default `sales_report=info` filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = env_filter(env::var("RUST_LOG").ok().as_deref());

        // Another subscriber may already be installed by an embedding binary.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}

/// Application data directory: `$SALES_REPORT_HOME`, else `~/.sales_report`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("SALES_REPORT_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

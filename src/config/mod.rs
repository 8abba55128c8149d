use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    currency::{
        CurrencyCode, CurrencyDisplay, DateFormatStyle, FormatOptions, LocaleConfig,
        NegativeStyle,
    },
    errors::{ReportError, Result},
    report::{ReportOptions, DEFAULT_MONTHLY_MIN_DAYS, DEFAULT_TOP_PRODUCTS},
    utils::{app_data_dir, ensure_dir},
};

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Keys accepted by [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &[
    "locale",
    "currency",
    "top_products",
    "monthly_min_days",
    "date_column",
    "currency_display",
    "negative_style",
    "screen_reader",
    "date_format",
    "quiet",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "default_top_products")]
    pub top_products: usize,
    #[serde(default = "default_monthly_min_days")]
    pub monthly_min_days: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_dataset: Option<String>,
    #[serde(default)]
    pub currency_display: CurrencyDisplay,
    #[serde(default)]
    pub negative_style: NegativeStyle,
    #[serde(default)]
    pub screen_reader: bool,
    #[serde(default)]
    pub date_format: DateFormatStyle,
    /// Hides hints and decorative spacing; report output is unaffected.
    #[serde(default)]
    pub quiet: bool,
}

fn default_top_products() -> usize {
    DEFAULT_TOP_PRODUCTS
}

fn default_monthly_min_days() -> usize {
    DEFAULT_MONTHLY_MIN_DAYS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            top_products: DEFAULT_TOP_PRODUCTS,
            monthly_min_days: DEFAULT_MONTHLY_MIN_DAYS,
            date_column: None,
            last_dataset: None,
            currency_display: CurrencyDisplay::default(),
            negative_style: NegativeStyle::default(),
            screen_reader: false,
            date_format: DateFormatStyle::default(),
            quiet: false,
        }
    }
}

impl Config {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            top_products: self.top_products,
            monthly_min_days: self.monthly_min_days,
        }
    }

    pub fn locale_config(&self) -> LocaleConfig {
        LocaleConfig {
            date_format: self.date_format,
            ..LocaleConfig::for_tag(&self.locale)
        }
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            currency_display: self.currency_display,
            negative_style: self.negative_style,
            screen_reader_mode: self.screen_reader,
        }
    }

    pub fn currency_code(&self) -> CurrencyCode {
        CurrencyCode::new(&self.currency)
    }

    /// Updates one setting from its textual form. `none` clears `date_column`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "locale" => self.locale = value.to_string(),
            "currency" => {
                if value.len() != 3 || !value.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(ReportError::InvalidInput(format!(
                        "currency must be a three-letter code, got `{value}`"
                    )));
                }
                self.currency = value.to_uppercase();
            }
            "top_products" => self.top_products = parse_count(key, value)?,
            "monthly_min_days" => self.monthly_min_days = parse_count(key, value)?,
            "date_column" => {
                self.date_column = if value.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(value.to_string())
                }
            }
            "currency_display" => self.currency_display = value.parse()?,
            "negative_style" => self.negative_style = value.parse()?,
            "date_format" => self.date_format = value.parse()?,
            "screen_reader" => self.screen_reader = parse_flag(key, value)?,
            "quiet" => self.quiet = parse_flag(key, value)?,
            other => {
                return Err(ReportError::InvalidInput(format!(
                    "unknown setting `{other}` (expected one of: {})",
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize> {
    value.parse::<usize>().map_err(|_| {
        ReportError::InvalidInput(format!("{key} must be a non-negative integer, got `{value}`"))
    })
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" => Ok(true),
        "false" | "off" | "no" => Ok(false),
        _ => Err(ReportError::InvalidInput(format!(
            "{key} must be on or off, got `{value}`"
        ))),
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension(TMP_SUFFIX);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "saved configuration");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::ReportError;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub date_format: DateFormatStyle,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
            date_format: DateFormatStyle::default(),
        }
    }
}

impl LocaleConfig {
    /// Separators for a BCP 47 tag; unknown tags keep the `en-US` separators.
    pub fn for_tag(tag: &str) -> Self {
        let (decimal_separator, grouping_separator) = match tag.split('-').next() {
            Some("de") | Some("es") | Some("it") | Some("nl") | Some("pt") => (',', '.'),
            Some("fr") => (',', ' '),
            _ => ('.', ','),
        };
        Self {
            language_tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FormatOptions {
    pub currency_display: CurrencyDisplay,
    pub negative_style: NegativeStyle,
    pub screen_reader_mode: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyDisplay {
    #[default]
    Symbol,
    Code,
}

/// `Short` is ISO `2024-10-03`, `Medium` is `03 Oct 2024`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DateFormatStyle {
    #[default]
    Short,
    Medium,
}

fn unknown_choice(kind: &str, value: &str, expected: &str) -> ReportError {
    ReportError::InvalidInput(format!("unknown {kind} `{value}` (expected {expected})"))
}

impl FromStr for NegativeStyle {
    type Err = ReportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "sign" => Ok(Self::Sign),
            "parentheses" => Ok(Self::Parentheses),
            _ => Err(unknown_choice("negative style", value, "sign or parentheses")),
        }
    }
}

impl FromStr for CurrencyDisplay {
    type Err = ReportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "symbol" => Ok(Self::Symbol),
            "code" => Ok(Self::Code),
            _ => Err(unknown_choice("currency display", value, "symbol or code")),
        }
    }
}

impl FromStr for DateFormatStyle {
    type Err = ReportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            _ => Err(unknown_choice("date format", value, "short or medium")),
        }
    }
}

pub fn symbol_for(code: &str) -> &str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "AUD" => "A$",
        _ => code,
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Formats `value` with `precision` decimals and the locale's separators.
pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let plain = format!("{:.*}", precision as usize, value.abs());
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain.as_str(), None),
    };

    let mut out = String::new();
    if value < 0.0 && plain.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, locale.grouping_separator));
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_currency_value(
    amount: f64,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    options: &FormatOptions,
) -> String {
    let precision = minor_units_for(code.as_str());
    let body = format_number(locale, amount.abs(), precision);
    let negative = amount < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0');

    let with_unit = match options.currency_display {
        CurrencyDisplay::Symbol => format!("{}{}", symbol_for(code.as_str()), body),
        CurrencyDisplay::Code => format!("{} {}", code.as_str(), body),
    };

    if options.screen_reader_mode {
        let sign = if negative { "minus " } else { "" };
        return format!("{sign}{} {}", body, code.as_str());
    }

    match (negative, options.negative_style) {
        (false, _) => with_unit,
        (true, NegativeStyle::Sign) => format!("-{with_unit}"),
        (true, NegativeStyle::Parentheses) => format!("({with_unit})"),
    }
}

pub fn format_date(locale: &LocaleConfig, date: NaiveDate) -> String {
    match locale.date_format {
        DateFormatStyle::Short => date.format("%Y-%m-%d").to_string(),
        DateFormatStyle::Medium => format!(
            "{:02} {} {}",
            date.day(),
            month_label(date.month()),
            date.year()
        ),
    }
}

/// Three-letter English month abbreviation; empty for out-of-range input.
pub fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        let locale = LocaleConfig::default();
        assert_eq!(format_number(&locale, 1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(&locale, 999.0, 0), "999");
        assert_eq!(format_number(&locale, -1000.0, 0), "-1,000");
    }

    #[test]
    fn rounding_to_zero_drops_the_sign() {
        let locale = LocaleConfig::default();
        assert_eq!(format_number(&locale, -0.001, 2), "0.00");
    }

    #[test]
    fn display_choices_parse_case_insensitively() {
        assert_eq!(
            "Parentheses".parse::<NegativeStyle>().ok(),
            Some(NegativeStyle::Parentheses)
        );
        assert_eq!("code".parse::<CurrencyDisplay>().ok(), Some(CurrencyDisplay::Code));
        assert_eq!(
            "MEDIUM".parse::<DateFormatStyle>().ok(),
            Some(DateFormatStyle::Medium)
        );
        assert!("brackets".parse::<NegativeStyle>().is_err());
    }
}

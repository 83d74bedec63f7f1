//! Locale-aware display formatting for amounts and dates. Display-only:
//! nothing here feeds back into persisted or computed values.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// How integer digits are grouped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GroupingStyle {
    /// Groups of three: 1,234,567.
    Thousands,
    /// Indian convention, three then twos: 12,34,567.
    Lakh,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DateFormatStyle {
    Short,
    Medium,
    Long,
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub grouping: GroupingStyle,
    pub date_format: DateFormatStyle,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-IN".into(),
            decimal_separator: '.',
            grouping_separator: ',',
            grouping: GroupingStyle::Lakh,
            date_format: DateFormatStyle::Medium,
        }
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let mut body = format!("{:.*}", precision as usize, value);
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    if let Some(pos) = body.find(locale.decimal_separator) {
        let mut int_part = body[..pos].to_string();
        insert_grouping(&mut int_part, locale.grouping_separator, locale.grouping);
        body = format!("{}{}", int_part, &body[pos..]);
    } else {
        insert_grouping(&mut body, locale.grouping_separator, locale.grouping);
    }
    body
}

/// Currency symbol plus locale-grouped magnitude, two decimal places.
pub fn format_amount(locale: &LocaleConfig, symbol: &str, value: f64) -> String {
    format!("{}{}", symbol, format_number(locale, value, 2))
}

fn insert_grouping(int_part: &mut String, separator: char, style: GroupingStyle) {
    let mut cleaned = int_part.replace(separator, "");
    if cleaned.starts_with('-') {
        let sign = cleaned.remove(0);
        let grouped = group_digits(&cleaned, separator, style);
        *int_part = format!("{}{}", sign, grouped);
    } else {
        *int_part = group_digits(&cleaned, separator, style);
    }
}

fn group_digits(digits: &str, separator: char, style: GroupingStyle) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        let boundary = match style {
            GroupingStyle::Thousands => count != 0 && count % 3 == 0,
            // First group of three, then pairs.
            GroupingStyle::Lakh => count == 3 || (count > 3 && (count - 3) % 2 == 0),
        };
        if boundary {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

pub fn format_date(locale: &LocaleConfig, date: NaiveDate) -> String {
    match locale.date_format {
        DateFormatStyle::Short => date.format("%d/%m/%Y").to_string(),
        DateFormatStyle::Medium => format!(
            "{:02} {} {}",
            date.day(),
            month_label(date.month()),
            date.year()
        ),
        DateFormatStyle::Long => format!(
            "{}, {:02} {} {}",
            date.weekday(),
            date.day(),
            month_name(date.month()),
            date.year()
        ),
    }
}

/// Full label for a `YYYY-MM` bucket key, e.g. "January 2024". Falls back to
/// the raw key when it does not parse.
pub fn format_month(key: &str) -> String {
    match parse_month_key(key) {
        Some(date) => format!("{} {}", month_name(date.month()), date.year()),
        None => key.to_string(),
    }
}

/// Compact label for chart axes, e.g. "Jan 24".
pub fn format_month_short(key: &str) -> String {
    match parse_month_key(key) {
        Some(date) => format!("{} {:02}", month_label(date.month()), date.year() % 100),
        None => key.to_string(),
    }
}

fn parse_month_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", key), "%Y-%m-%d").ok()
}

fn month_label(month: u32) -> &'static str {
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

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lakh_locale() -> LocaleConfig {
        LocaleConfig::default()
    }

    fn thousands_locale() -> LocaleConfig {
        LocaleConfig {
            language_tag: "en-US".into(),
            grouping: GroupingStyle::Thousands,
            ..LocaleConfig::default()
        }
    }

    #[test]
    fn thousands_grouping_inserts_every_three_digits() {
        assert_eq!(format_number(&thousands_locale(), 1234567.5, 2), "1,234,567.50");
        assert_eq!(format_number(&thousands_locale(), 999.0, 0), "999");
    }

    #[test]
    fn lakh_grouping_uses_three_then_twos() {
        assert_eq!(format_number(&lakh_locale(), 1234567.0, 0), "12,34,567");
        assert_eq!(format_number(&lakh_locale(), 100000.0, 0), "1,00,000");
        assert_eq!(format_number(&lakh_locale(), 1000.0, 2), "1,000.00");
        assert_eq!(format_number(&lakh_locale(), 999.0, 0), "999");
    }

    #[test]
    fn negative_values_keep_their_sign_ahead_of_grouping() {
        assert_eq!(format_number(&thousands_locale(), -1234.5, 2), "-1,234.50");
    }

    #[test]
    fn format_amount_prefixes_the_symbol() {
        assert_eq!(format_amount(&lakh_locale(), "₹", 1000.0), "₹1,000.00");
    }

    #[test]
    fn date_styles_render_as_expected() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut locale = lakh_locale();
        locale.date_format = DateFormatStyle::Short;
        assert_eq!(format_date(&locale, date), "15/01/2024");
        locale.date_format = DateFormatStyle::Medium;
        assert_eq!(format_date(&locale, date), "15 Jan 2024");
        locale.date_format = DateFormatStyle::Long;
        assert_eq!(format_date(&locale, date), "Mon, 15 January 2024");
    }

    #[test]
    fn month_labels_render_long_and_short_forms() {
        assert_eq!(format_month("2024-01"), "January 2024");
        assert_eq!(format_month_short("2024-01"), "Jan 24");
        assert_eq!(format_month("garbage"), "garbage");
    }
}

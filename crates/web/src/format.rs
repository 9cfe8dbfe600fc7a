//! Display formatting: currency amounts, dates, and HTML escaping.

use chrono::{DateTime, Local, TimeZone, Utc};
use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};

/// How money is shown. Purely a display setting; stored amounts are plain
/// numbers whatever the currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// BCP 47 tag used for digit grouping, e.g. `en-US`.
    pub locale: String,
    /// ISO 4217 code, e.g. `USD`.
    pub currency: String,
    pub symbol: String,
    pub fraction_digits: u8,
}

impl CurrencyFormat {
    /// US dollars, `en-US`.
    pub fn usd() -> Self {
        Self {
            locale: "en-US".to_string(),
            currency: "USD".to_string(),
            symbol: "$".to_string(),
            fraction_digits: 2,
        }
    }

    /// Philippine pesos, `en-PH`.
    pub fn php() -> Self {
        Self {
            locale: "en-PH".to_string(),
            currency: "PHP".to_string(),
            symbol: "\u{20B1}".to_string(),
            fraction_digits: 2,
        }
    }

    /// Format `amount`, e.g. `$1,234.50` or `-$5.00`.
    ///
    /// Non-finite amounts are shown as zero.
    pub fn format(&self, amount: f64) -> String {
        let amount = if amount.is_finite() { amount } else { 0.0 };
        let locale = self.num_locale();

        let fixed = format!("{:.*}", usize::from(self.fraction_digits), amount.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

        let grouped = match int_part.parse::<u64>() {
            Ok(n) => n.to_formatted_string(&locale),
            Err(_) => int_part.to_string(),
        };

        let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
        let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

        if frac_part.is_empty() {
            format!("{sign}{}{grouped}", self.symbol)
        } else {
            format!(
                "{sign}{}{grouped}{}{frac_part}",
                self.symbol,
                locale.decimal()
            )
        }
    }

    fn num_locale(&self) -> Locale {
        Locale::from_name(&self.locale)
            .or_else(|_| {
                let language = self.locale.split(['-', '_']).next().unwrap_or_default();
                Locale::from_name(language)
            })
            .unwrap_or(Locale::en)
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::usd()
    }
}

/// Calendar date of `date` in the local time zone, e.g. `Oct 18, 2026`.
pub fn format_date(date: DateTime<Utc>) -> String {
    format_date_in(date, &Local)
}

/// Calendar date of `date` in `zone`, e.g. `Oct 18, 2026`.
pub fn format_date_in<Tz>(date: DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: core::fmt::Display,
{
    date.with_timezone(zone).format("%b %-d, %Y").to_string()
}

/// Escape user text for inclusion in HTML markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

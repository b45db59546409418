//! # Display
//!
//! Locale-aware currency formatting and template substitution for the tip
//! result line.
//!
//! ```text
//! 10.0 ──► Money(1000) ──► "₹10.00" ──► "Tip Amount: %s" ──► "Tip Amount: ₹10.00"
//! ```

use std::fmt;

use tiptime_core::Money;

use crate::error::ConfigError;

/// Placeholder replaced by the formatted amount.
pub const PLACEHOLDER: &str = "%s";

/// Digit grouping convention for the major unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// `1,234,567`
    Western,
    /// `12,34,567` (lakh / crore)
    Indian,
}

/// How amounts are rendered for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Currency symbol placed before the amount.
    pub symbol: String,

    /// Thousands grouping style.
    pub grouping: Grouping,
}

impl CurrencyFormat {
    /// Looks up the format for a locale tag such as `en-IN` or `en_us`.
    pub fn for_locale(tag: &str) -> Result<Self, ConfigError> {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();

        let (symbol, grouping) = match normalized.as_str() {
            "en-in" => ("₹", Grouping::Indian),
            "en-us" => ("$", Grouping::Western),
            "en-gb" => ("£", Grouping::Western),
            _ => return Err(ConfigError::UnknownLocale(tag.trim().to_string())),
        };

        Ok(CurrencyFormat {
            symbol: symbol.to_string(),
            grouping,
        })
    }

    /// Formats an amount in minor units.
    ///
    /// ## Example
    /// ```rust
    /// use tiptime_cli::display::CurrencyFormat;
    /// use tiptime_core::Money;
    ///
    /// let inr = CurrencyFormat::for_locale("en-IN").unwrap();
    /// assert_eq!(inr.format(Money::from_cents(12_345_650)), "₹1,23,456.50");
    /// ```
    pub fn format(&self, money: Money) -> String {
        let sign = if money.is_negative() { "-" } else { "" };
        let major = self.group(&money.major().unsigned_abs().to_string());

        format!("{}{}{}.{:02}", sign, self.symbol, major, money.minor_part())
    }

    /// Formats a real amount, rounding to the nearest minor unit.
    ///
    /// Amounts beyond the [`Money`] range are rendered from their own
    /// decimal expansion. Returns `None` only for NaN and infinities.
    pub fn format_amount(&self, amount: f64) -> Option<String> {
        if let Some(money) = Money::from_amount(amount) {
            return Some(self.format(money));
        }
        if !amount.is_finite() {
            return None;
        }

        // f64 Display never switches to exponent notation.
        let text = format!("{:.2}", amount.abs());
        let (major, minor) = text.split_once('.')?;
        let sign = if amount < 0.0 { "-" } else { "" };

        Some(format!("{}{}{}.{}", sign, self.symbol, self.group(major), minor))
    }

    fn group(&self, digits: &str) -> String {
        if digits.len() <= 3 {
            return digits.to_string();
        }

        let (head, last_three) = digits.split_at(digits.len() - 3);
        let head_group = match self.grouping {
            Grouping::Western => 3,
            Grouping::Indian => 2,
        };

        // Walk the head from the right in fixed-size chunks.
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(head_group);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        groups.push(last_three);

        groups.join(",")
    }
}

impl Default for CurrencyFormat {
    /// `en-IN`: rupees with lakh grouping.
    fn default() -> Self {
        CurrencyFormat {
            symbol: "₹".to_string(),
            grouping: Grouping::Indian,
        }
    }
}

/// User-facing sentence with a single `%s` slot for the amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipTemplate(String);

impl TipTemplate {
    /// Validates that the template carries a placeholder.
    pub fn new(template: impl Into<String>) -> Result<Self, ConfigError> {
        let template = template.into();
        if !template.contains(PLACEHOLDER) {
            return Err(ConfigError::MissingPlaceholder(template));
        }
        Ok(TipTemplate(template))
    }

    /// Substitutes the first `%s` with `amount`.
    pub fn render(&self, amount: &str) -> String {
        self.0.replacen(PLACEHOLDER, amount, 1)
    }
}

impl Default for TipTemplate {
    fn default() -> Self {
        TipTemplate("Tip Amount: %s".to_string())
    }
}

impl fmt::Display for TipTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_indian_grouping() {
        let inr = CurrencyFormat::for_locale("en-IN").unwrap();
        assert_eq!(inr.format(Money::from_cents(1000)), "₹10.00");
        assert_eq!(inr.format(Money::from_cents(100_000)), "₹1,000.00");
        assert_eq!(inr.format(Money::from_cents(10_000_000)), "₹1,00,000.00");
        assert_eq!(inr.format(Money::from_cents(1_234_567_899)), "₹1,23,45,678.99");
    }

    #[test]
    fn test_format_western_grouping() {
        let usd = CurrencyFormat::for_locale("en_US").unwrap();
        assert_eq!(usd.format(Money::from_cents(5)), "$0.05");
        assert_eq!(usd.format(Money::from_cents(123_456)), "$1,234.56");
        assert_eq!(usd.format(Money::from_cents(123_456_789)), "$1,234,567.89");

        let gbp = CurrencyFormat::for_locale("EN-GB").unwrap();
        assert_eq!(gbp.format(Money::from_cents(99_900)), "£999.00");
    }

    #[test]
    fn test_format_negative() {
        let usd = CurrencyFormat::for_locale("en-US").unwrap();
        assert_eq!(usd.format(Money::from_cents(-123_456)), "-$1,234.56");
    }

    #[test]
    fn test_format_amount_rounds() {
        let inr = CurrencyFormat::default();
        assert_eq!(inr.format_amount(4.9995).as_deref(), Some("₹5.00"));
        assert_eq!(inr.format_amount(123_456.5).as_deref(), Some("₹1,23,456.50"));
        assert_eq!(inr.format_amount(f64::NAN), None);
    }

    #[test]
    fn test_format_amount_beyond_money_range() {
        let usd = CurrencyFormat::for_locale("en-US").unwrap();
        assert_eq!(
            usd.format_amount(1e20).as_deref(),
            Some("$100,000,000,000,000,000,000.00")
        );
        assert_eq!(
            usd.format_amount(-1e20).as_deref(),
            Some("-$100,000,000,000,000,000,000.00")
        );

        let inr = CurrencyFormat::default();
        assert_eq!(
            inr.format_amount(1e20).as_deref(),
            Some("₹10,00,00,00,00,00,00,00,00,000.00")
        );

        let huge = inr.format_amount(2e299).unwrap();
        assert!(huge.starts_with('₹'));
        assert!(huge.contains(','));
        assert!(huge.ends_with(".00"));
        assert!(!huge.contains('e'));
        assert_eq!(inr.format_amount(f64::INFINITY), None);
    }

    #[test]
    fn test_unknown_locale() {
        assert!(matches!(
            CurrencyFormat::for_locale("fr-FR"),
            Err(ConfigError::UnknownLocale(tag)) if tag == "fr-FR"
        ));
    }

    #[test]
    fn test_template() {
        let template = TipTemplate::default();
        assert_eq!(template.render("₹10.00"), "Tip Amount: ₹10.00");

        let custom = TipTemplate::new("Leave %s (%s)").unwrap();
        assert_eq!(custom.render("$2.00"), "Leave $2.00 (%s)");

        assert!(TipTemplate::new("Tip Amount").is_err());
    }
}

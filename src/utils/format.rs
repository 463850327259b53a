use crate::models::error::AppError;
use std::fmt::Display;

/// Narrow no-break space, the fr-BE thousands separator
const NARROW_NBSP: char = '\u{202F}';
/// No-break space between a fr-BE amount and its currency symbol
const NBSP: char = '\u{00A0}';

/// Number conventions used when rendering euro amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoneyLocale {
    /// `€1,000.00`
    #[default]
    English,
    /// `1 000,00 €`
    BelgianFrench,
}

impl MoneyLocale {
    pub const fn all() -> &'static [Self] {
        &[Self::English, Self::BelgianFrench]
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::BelgianFrench => "fr-BE",
        }
    }

    /// Sample amount shown in the locale picker
    pub const fn label(&self) -> &'static str {
        match self {
            Self::English => "€1,000.00",
            Self::BelgianFrench => "1 000,00 €",
        }
    }
}

impl std::str::FromStr for MoneyLocale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|locale| locale.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::ConfigError(format!("Unknown money locale: {s}")))
    }
}

/// Renders a euro amount with the default locale.
pub fn format_money(v: f64) -> String {
    format_money_in(v, MoneyLocale::default())
}

pub fn format_money_in(v: f64, locale: MoneyLocale) -> String {
    let (negative, body) = if v.is_nan() {
        (false, "NaN".to_string())
    } else if v.is_infinite() {
        (v < 0.0, "∞".to_string())
    } else {
        let fixed = format!("{:.2}", v.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        // Amounts that round to zero never carry a sign
        let negative = v < 0.0 && fixed != "0.00";
        let body = match locale {
            MoneyLocale::English => format!("{}.{frac_part}", group_thousands(int_part, ',')),
            MoneyLocale::BelgianFrench => {
                format!("{},{frac_part}", group_thousands(int_part, NARROW_NBSP))
            }
        };
        (negative, body)
    };

    let sign = if negative { "-" } else { "" };
    match locale {
        MoneyLocale::English => format!("{sign}€{body}"),
        MoneyLocale::BelgianFrench => format!("{sign}{body}{NBSP}€"),
    }
}

/// Inserts `separator` between groups of three digits.
fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Renders an optional value for display; absent values become an empty
/// string rather than a literal "null".
pub fn as_string<T: Display>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

/// Renders a fraction in [0, 1] as a rounded percentage, e.g. `0.25` → `25%`.
pub fn format_percent(rate: f64) -> String {
    // `+ 0.0` turns a rounded -0 into 0
    format!("{}%", (rate * 100.0).round() + 0.0)
}

pub fn format_count(n: u64) -> String {
    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money_default() {
        assert_eq!(format_money(0.0), "€0.00");
        assert_eq!(format_money(1000.0), "€1,000.00");
        assert_eq!(format_money(250.0), "€250.00");
        assert_eq!(format_money(1_234_567.891), "€1,234,567.89");
        assert_eq!(format_money(-42.5), "-€42.50");
        assert_eq!(format_money(-0.001), "€0.00");
    }

    #[test]
    fn test_format_money_always_has_symbol() {
        for v in [0.0, 0.5, 999.999, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(format_money(v).contains('€'), "missing symbol for {v}");
        }
        assert_eq!(format_money(f64::NEG_INFINITY), "-€∞");
    }

    #[test]
    fn test_format_money_belgian_french() {
        assert_eq!(
            format_money_in(1000.0, MoneyLocale::BelgianFrench),
            "1\u{202F}000,00\u{00A0}€"
        );
        assert_eq!(
            format_money_in(0.0, MoneyLocale::BelgianFrench),
            "0,00\u{00A0}€"
        );
    }

    #[test]
    fn test_money_locale_codes() {
        assert_eq!("fr-be".parse::<MoneyLocale>().unwrap(), MoneyLocale::BelgianFrench);
        for locale in MoneyLocale::all() {
            assert_eq!(locale.code().parse::<MoneyLocale>().unwrap(), *locale);
        }
        assert!("de-DE".parse::<MoneyLocale>().is_err());
    }

    #[test]
    fn test_as_string() {
        assert_eq!(as_string(None::<&str>), "");
        assert_eq!(as_string(Some(0)), "0");
        assert_eq!(as_string(Some("A1")), "A1");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.25), "25%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(1.0), "100%");
        assert_eq!(format_percent(0.1234), "12%");
    }
}

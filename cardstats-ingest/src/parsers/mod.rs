//! Row parsers for each statement section, plus the shared cell parsers.
//!
//! Column layout (all sections):
//!   Date | Amount or Swipes | Balance | Location

pub mod meal;
pub mod money;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::RowError;

pub use meal::parse_meal_row;
pub use money::parse_money_row;

const DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%b %d, %Y %I:%M %p",
    "%B %d, %Y %I:%M %p",
];

const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%b %d, %Y", "%B %d, %Y", "%a %b %d %Y"];

// (optional "(") "$" amount; thousands separators allowed
static MONEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\(?)\$((?:\d{1,3}(?:,\d{3})+|\d+)\.\d{2})").expect("valid money regex")
});

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Parse a statement timestamp. Date-only values land on midnight.
pub fn parse_date(s: &str) -> Result<NaiveDateTime, RowError> {
    let text = WS_RE.replace_all(s.trim(), " ");

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&text, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(&text, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| RowError::InvalidDate(s.trim().to_string()))
}

/// A dollar figure as printed: `$12.50` or `($12.50)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Money {
    pub magnitude: Decimal,
    pub parenthesized: bool,
}

impl Money {
    /// Signed amount: plain figures are spends, parenthesized figures credits.
    pub fn signed(&self) -> Decimal {
        if self.parenthesized {
            self.magnitude
        } else {
            -self.magnitude
        }
    }
}

/// Find the first dollar figure in a cell.
pub fn parse_money(s: &str) -> Result<Money, RowError> {
    let invalid = || RowError::InvalidMoney(s.trim().to_string());
    let caps = MONEY_RE.captures(s).ok_or_else(invalid)?;
    let magnitude = Decimal::from_str(&caps[2].replace(',', "")).map_err(|_| invalid())?;
    Ok(Money {
        magnitude,
        parenthesized: !caps[1].is_empty(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("01/02/2023").unwrap(), ymd_hms(2023, 1, 2, 0, 0, 0));
        assert_eq!(
            parse_date("1/2/2023 1:05 PM").unwrap(),
            ymd_hms(2023, 1, 2, 13, 5, 0)
        );
        assert_eq!(
            parse_date(" 01/02/2023\n   12:30:15 AM ").unwrap(),
            ymd_hms(2023, 1, 2, 0, 30, 15)
        );
        assert_eq!(
            parse_date("2023-01-02 08:15:00").unwrap(),
            ymd_hms(2023, 1, 2, 8, 15, 0)
        );
        assert_eq!(parse_date("Jan 02, 2023").unwrap(), ymd_hms(2023, 1, 2, 0, 0, 0));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(
            parse_date("Pending"),
            Err(RowError::InvalidDate("Pending".to_string()))
        );
        assert!(parse_date("").is_err());
        assert!(parse_date("13/45/2023").is_err());
    }

    #[test]
    fn test_parse_money() {
        let plain = parse_money("$5.00").unwrap();
        assert_eq!(plain.magnitude, dec!(5.00));
        assert!(!plain.parenthesized);
        assert_eq!(plain.signed(), dec!(-5.00));
        assert_eq!(plain.signed().to_string(), "-5.00");

        let credit = parse_money("($20.00)").unwrap();
        assert_eq!(credit.signed(), dec!(20.00));

        let big = parse_money("$1,234.56").unwrap();
        assert_eq!(big.magnitude, dec!(1234.56));
    }

    #[test]
    fn test_parse_money_rejects_missing_figure() {
        assert!(parse_money("5.00").is_err());
        assert!(parse_money("$5").is_err());
        assert!(parse_money("").is_err());
    }
}

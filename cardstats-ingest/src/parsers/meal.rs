//! Meal-plan swipe rows.
//!
//!   01/04/2023 06:10 PM | 1 | | Foothill S2

use cardstats_core::{normalize_location, MealSwipeTransaction};
use regex::Regex;
use std::sync::LazyLock;

use super::parse_date;
use crate::error::RowError;
use crate::types::Row;

static COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+").expect("valid swipe count regex"));

/// Leading integer of a cell, e.g. `"2 swipes"` → 2.
pub fn parse_swipes(s: &str) -> Result<i64, RowError> {
    let text = s.trim();
    COUNT_RE
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| RowError::InvalidSwipes(text.to_string()))
}

pub fn parse_meal_row(row: &Row) -> Result<MealSwipeTransaction, RowError> {
    let date = parse_date(row.cell(0)?)?;
    let swipes = parse_swipes(row.cell(1)?)?;
    let location = normalize_location(row.cell(3)?);

    Ok(MealSwipeTransaction {
        date,
        swipes,
        location,
    })
}

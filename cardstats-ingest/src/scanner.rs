//! Single forward pass over the statement rows.

use tracing::{debug, info, warn};

use crate::error::{IngestError, Result, RowError};
use crate::parsers::{parse_meal_row, parse_money_row};
use crate::section::{RowAction, Section};
use crate::types::{Row, ScanOutput, SkippedRow};

/// Split the rows into debit, meal-swipe and flex records.
///
/// Malformed transaction rows are logged and dropped; only an empty table is
/// an error.
pub fn scan_rows(rows: &[Row]) -> Result<ScanOutput> {
    if rows.is_empty() {
        return Err(IngestError::NoRows);
    }

    let mut out = ScanOutput::default();
    let mut section = Section::Seeking;

    for (index, row) in rows.iter().enumerate() {
        let (next, action) = section.step(row);
        if next != section {
            debug!(from = %section, to = %next, row = index, "section change");
        }
        section = next;

        match action {
            RowAction::Marker => {
                if section == Section::Meal {
                    out.meal_plan_type = row.text().replacen(" Activity", "", 1);
                }
            }
            RowAction::Skip => {}
            RowAction::Parse => {
                if let Err(error) = parse_into(&mut out, section, row) {
                    warn!(section = %section, row = index, error = %error, "dropping malformed row");
                    out.skipped.push(SkippedRow {
                        section,
                        index,
                        error,
                    });
                }
            }
        }
    }

    info!(
        debit = out.debit.len(),
        meal_swipes = out.meal_swipes.len(),
        flex = out.flex.len(),
        skipped = out.skipped.len(),
        last_section = %section,
        "statement scanned"
    );

    Ok(out)
}

fn parse_into(out: &mut ScanOutput, section: Section, row: &Row) -> std::result::Result<(), RowError> {
    match section {
        Section::Debit => out.debit.push(parse_money_row(row)?),
        Section::Meal => out.meal_swipes.push(parse_meal_row(row)?),
        Section::Flex => out.flex.push(parse_money_row(row)?),
        // Section::step never asks to parse before the debit marker
        Section::Seeking => {}
    }
    Ok(())
}

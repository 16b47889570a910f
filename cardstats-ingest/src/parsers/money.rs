//! Debit-account and flex-dollar rows.
//!
//!   01/02/2023 12:31 PM | $5.00    | $45.00 | Crossroad S2
//!   01/03/2023 09:00 AM | ($20.00) | $65.00 | Online Deposit

use cardstats_core::{normalize_location, MoneyTransaction};

use super::{parse_date, parse_money};
use crate::error::RowError;
use crate::types::Row;

/// Parse one debit or flex row.
///
/// The balance keeps its magnitude only; parentheses never flip it.
pub fn parse_money_row(row: &Row) -> Result<MoneyTransaction, RowError> {
    let date = parse_date(row.cell(0)?)?;
    let amount = parse_money(row.cell(1)?)?.signed();
    let balance = parse_money(row.cell(2)?)?.magnitude;
    let location = normalize_location(row.cell(3)?);

    Ok(MoneyTransaction {
        date,
        amount,
        balance,
        location,
    })
}

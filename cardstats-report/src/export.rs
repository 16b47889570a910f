//! Flat transaction rows for spreadsheet export.

use cardstats_core::{MealSwipeTransaction, MoneyTransaction};
use cardstats_ingest::ScanOutput;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Debit,
    Meal,
    Flex,
}

/// One output line; money columns are empty for swipes and vice versa
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub kind: RecordKind,
    pub date: String,
    pub location: String,
    pub amount: Option<Decimal>,
    pub balance: Option<Decimal>,
    pub swipes: Option<i64>,
}

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

fn money_row(kind: RecordKind, txn: &MoneyTransaction) -> ExportRow {
    ExportRow {
        kind,
        date: txn.date.format(DATE_FORMAT).to_string(),
        location: txn.location.clone(),
        amount: Some(txn.amount),
        balance: Some(txn.balance),
        swipes: None,
    }
}

fn meal_row(txn: &MealSwipeTransaction) -> ExportRow {
    ExportRow {
        kind: RecordKind::Meal,
        date: txn.date.format(DATE_FORMAT).to_string(),
        location: txn.location.clone(),
        amount: None,
        balance: None,
        swipes: Some(txn.swipes),
    }
}

/// Every parsed record in statement order: debit, meal, flex
pub fn export_rows(scan: &ScanOutput) -> Vec<ExportRow> {
    scan.debit
        .iter()
        .map(|t| money_row(RecordKind::Debit, t))
        .chain(scan.meal_swipes.iter().map(meal_row))
        .chain(scan.flex.iter().map(|t| money_row(RecordKind::Flex, t)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_export_rows_keep_section_order() {
        let at = NaiveDate::from_ymd_opt(2023, 1, 2)
            .unwrap()
            .and_hms_opt(12, 31, 0)
            .unwrap();
        let scan = ScanOutput {
            debit: vec![MoneyTransaction::new(at, dec!(-5.00), dec!(45.00), "Crossroads")],
            meal_swipes: vec![MealSwipeTransaction::new(at, 1, "Foothill")],
            flex: vec![MoneyTransaction::new(at, dec!(-2.25), dec!(97.75), "Market")],
            ..ScanOutput::default()
        };

        let rows = export_rows(&scan);
        let kinds: Vec<_> = rows.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, [RecordKind::Debit, RecordKind::Meal, RecordKind::Flex]);
        assert_eq!(rows[0].date, "2023-01-02 12:31");
        assert_eq!(rows[0].amount, Some(dec!(-5.00)));
        assert_eq!(rows[1].swipes, Some(1));
        assert_eq!(rows[1].amount, None);
    }
}

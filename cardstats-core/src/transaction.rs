//! Transaction record types parsed out of a campus-card statement

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A dollar-denominated transaction (debit account or flex dollars)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoneyTransaction {
    /// When the transaction was posted (local wall-clock time)
    pub date: NaiveDateTime,
    /// Negative = spend, positive = deposit/refund. Always scale 2.
    pub amount: Decimal,
    /// Running balance after the transaction (magnitude only)
    pub balance: Decimal,
    /// Normalized location label
    pub location: String,
}

pub type DebitTransaction = MoneyTransaction;
pub type FlexTransaction = MoneyTransaction;

impl MoneyTransaction {
    pub fn new(
        date: NaiveDateTime,
        amount: Decimal,
        balance: Decimal,
        location: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            balance,
            location: location.into(),
        }
    }

    /// Returns true if money left the account
    pub fn is_spend(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Get the absolute amount
    pub fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }
}

/// A meal-plan swipe at a dining location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealSwipeTransaction {
    pub date: NaiveDateTime,
    pub swipes: i64,
    pub location: String,
}

impl MealSwipeTransaction {
    pub fn new(date: NaiveDateTime, swipes: i64, location: impl Into<String>) -> Self {
        Self {
            date,
            swipes,
            location: location.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_spend_detection() {
        let spend = MoneyTransaction::new(at(2023, 1, 2), dec!(-5.00), dec!(45.00), "Cafe");
        let deposit = MoneyTransaction::new(at(2023, 1, 3), dec!(20.00), dec!(65.00), "Deposit");
        let zero = MoneyTransaction::new(at(2023, 1, 3), dec!(-0.00), dec!(65.00), "Cafe");

        assert!(spend.is_spend());
        assert_eq!(spend.abs_amount(), dec!(5.00));
        assert!(!deposit.is_spend());
        assert!(!zero.is_spend());
    }

    #[test]
    fn test_amount_serializes_with_two_digits() {
        let txn = MoneyTransaction::new(at(2023, 1, 2), dec!(-5.00), dec!(45.00), "Cafe");
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["amount"], "-5.00");
        assert_eq!(json["balance"], "45.00");
        assert_eq!(json["location"], "Cafe");
    }
}

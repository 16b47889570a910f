//! cardstats-core: record types and the aggregation pipeline for campus-card statements

pub mod aggregate;
pub mod color;
pub mod location;
pub mod transaction;
pub mod week;

pub use aggregate::{category_totals, weekly_matrix, CategoryTotals, Dated, WeeklyMatrix};
pub use color::{ColorStreams, Hsl, StreamParams};
pub use location::normalize_location;
pub use transaction::{DebitTransaction, FlexTransaction, MealSwipeTransaction, MoneyTransaction};
pub use week::{week_of, Week, WeekKey};

//! Reducers that turn transaction lists into chart-ready totals.
//!
//! Both reducers sum absolute values, so a refund and a spend at the same
//! location both count as activity. Callers filter (e.g. spends only) first.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::transaction::{MealSwipeTransaction, MoneyTransaction};
use crate::week::WeekKey;

/// Records that carry a timestamp
pub trait Dated {
    fn date(&self) -> NaiveDateTime;
}

impl Dated for MoneyTransaction {
    fn date(&self) -> NaiveDateTime {
        self.date
    }
}

impl Dated for MealSwipeTransaction {
    fn date(&self) -> NaiveDateTime {
        self.date
    }
}

/// Location → accumulated absolute value, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    order: Vec<String>,
    totals: HashMap<String, Decimal>,
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, location: &str, value: Decimal) {
        match self.totals.get_mut(location) {
            Some(total) => *total += value.abs(),
            None => {
                self.order.push(location.to_string());
                self.totals.insert(location.to_string(), value.abs());
            }
        }
    }

    pub fn get(&self, location: &str) -> Option<Decimal> {
        self.totals.get(location).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> + '_ {
        self.order
            .iter()
            .map(move |loc| (loc.as_str(), self.totals[loc]))
    }

    pub fn labels(&self) -> &[String] {
        &self.order
    }

    pub fn values(&self) -> Vec<Decimal> {
        self.iter().map(|(_, v)| v).collect()
    }

    /// Sum over every location
    pub fn total(&self) -> Decimal {
        self.totals.values().copied().sum()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Build location → Σ|value| over `records`.
pub fn category_totals<T, L, V>(records: &[T], location_of: L, value_of: V) -> CategoryTotals
where
    L: Fn(&T) -> &str,
    V: Fn(&T) -> Decimal,
{
    let mut totals = CategoryTotals::new();
    for record in records {
        totals.add(location_of(record), value_of(record));
    }
    totals
}

/// Location × week → accumulated absolute value.
///
/// `weeks` is the shared column set for every location. A location with no
/// activity in a week reads as zero in [`WeeklyMatrix::series`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyMatrix {
    weeks: BTreeSet<WeekKey>,
    locations: Vec<String>,
    cells: HashMap<String, BTreeMap<WeekKey, Decimal>>,
}

impl WeeklyMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, location: &str, week: WeekKey, value: Decimal) {
        self.weeks.insert(week);
        if !self.cells.contains_key(location) {
            self.locations.push(location.to_string());
        }
        let row = self.cells.entry(location.to_string()).or_default();
        *row.entry(week).or_insert(Decimal::ZERO) += value.abs();
    }

    /// Every week observed, oldest first
    pub fn weeks(&self) -> impl Iterator<Item = WeekKey> + '_ {
        self.weeks.iter().copied()
    }

    pub fn week_labels(&self) -> Vec<String> {
        self.weeks().map(|w| w.label()).collect()
    }

    /// Locations in the order their first (chronological) record appeared
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn cell(&self, location: &str, week: WeekKey) -> Decimal {
        self.cells
            .get(location)
            .and_then(|row| row.get(&week))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// One value per week column for `location`, zero-filled.
    pub fn series(&self, location: &str) -> Vec<Decimal> {
        self.weeks().map(|w| self.cell(location, w)).collect()
    }

    /// Sum over every cell
    pub fn total(&self) -> Decimal {
        self.cells
            .values()
            .flat_map(|row| row.values().copied())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// Bucket `records` by week and location, summing |value|.
///
/// Records are visited in date order (stable for equal dates); the input
/// slice itself is left in its original order.
pub fn weekly_matrix<T, L, V>(records: &[T], location_of: L, value_of: V) -> WeeklyMatrix
where
    T: Dated,
    L: Fn(&T) -> &str,
    V: Fn(&T) -> Decimal,
{
    let mut sorted: Vec<&T> = records.iter().collect();
    sorted.sort_by_key(|r| r.date());

    let mut matrix = WeeklyMatrix::new();
    for record in sorted {
        let week = WeekKey::containing(record.date().date());
        matrix.add(location_of(record), week, value_of(record));
    }
    matrix
}

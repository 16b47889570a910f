use cardstats_core::{DebitTransaction, FlexTransaction, MealSwipeTransaction};
use serde::{Deserialize, Serialize};

use crate::error::RowError;
use crate::section::Section;

/// One table row as text, straight from the document reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<String>,
    /// First cell is a `<th>`
    pub header: bool,
}

impl Row {
    pub fn new<S: Into<String>>(cells: impl IntoIterator<Item = S>) -> Self {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            header: false,
        }
    }

    pub fn header<S: Into<String>>(cells: impl IntoIterator<Item = S>) -> Self {
        Self {
            header: true,
            ..Self::new(cells)
        }
    }

    /// Text content of the whole row
    pub fn text(&self) -> String {
        self.cells.join(" ")
    }

    pub fn cell(&self, index: usize) -> Result<&str, RowError> {
        self.cells
            .get(index)
            .map(String::as_str)
            .ok_or(RowError::MissingCell { index })
    }
}

/// A row the scanner dropped, kept for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub section: Section,
    /// Position in the input row sequence
    pub index: usize,
    pub error: RowError,
}

pub const DEFAULT_MEAL_PLAN_TYPE: &str = "Meal Plan";

/// Everything one pass over the statement table produced
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput {
    pub debit: Vec<DebitTransaction>,
    pub meal_swipes: Vec<MealSwipeTransaction>,
    pub flex: Vec<FlexTransaction>,
    /// Label from the meal section marker, e.g. "Block 200 Meal Plan"
    pub meal_plan_type: String,
    pub skipped: Vec<SkippedRow>,
}

impl Default for ScanOutput {
    fn default() -> Self {
        Self {
            debit: Vec::new(),
            meal_swipes: Vec::new(),
            flex: Vec::new(),
            meal_plan_type: DEFAULT_MEAL_PLAN_TYPE.to_string(),
            skipped: Vec::new(),
        }
    }
}

impl ScanOutput {
    pub fn record_count(&self) -> usize {
        self.debit.len() + self.meal_swipes.len() + self.flex.len()
    }
}

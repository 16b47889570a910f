//! Section state machine for the statement table.
//!
//! The table is one flat list of rows. Marker rows split it into sections
//! that always appear in the same order:
//!
//! ```text
//!   (anything) .. "Debit ..." .. debit rows .. "... Meal ..." .. swipe rows .. "Flex ..." .. flex rows
//! ```
//!
//! Transitions only move forward; once in `Flex` the scanner stays there.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Section {
    /// Before the debit marker
    Seeking,
    Debit,
    Meal,
    Flex,
}

/// (from, marker text, to)
const TRANSITIONS: [(Section, &str, Section); 3] = [
    (Section::Seeking, "Debit", Section::Debit),
    (Section::Debit, "Meal", Section::Meal),
    (Section::Meal, "Flex", Section::Flex),
];

/// What the scanner should do with the row that produced a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Section marker; consumed by the transition
    Marker,
    /// Header or pre-debit row
    Skip,
    /// Transaction row for the (new) current section
    Parse,
}

impl Section {
    /// Marker text that leaves this section, and the section it leads to
    pub fn exit(self) -> Option<(&'static str, Section)> {
        TRANSITIONS
            .iter()
            .find(|(from, _, _)| *from == self)
            .map(|(_, marker, to)| (*marker, *to))
    }

    /// Advance on one row.
    pub fn step(self, row: &Row) -> (Section, RowAction) {
        if let Some((marker, next)) = self.exit() {
            if row.text().contains(marker) {
                return (next, RowAction::Marker);
            }
        }

        match self {
            Section::Seeking => (self, RowAction::Skip),
            _ if row.header => (self, RowAction::Skip),
            _ => (self, RowAction::Parse),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Seeking => "pre-debit",
            Section::Debit => "debit",
            Section::Meal => "meal",
            Section::Flex => "flex",
        };
        f.write_str(name)
    }
}

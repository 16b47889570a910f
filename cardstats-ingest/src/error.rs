use thiserror::Error;

/// A single transaction row that could not be turned into a record.
///
/// These never abort a scan; the scanner logs them and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("row has no cell {index}")]
    MissingCell { index: usize },

    #[error("unrecognized date: {0:?}")]
    InvalidDate(String),

    #[error("no dollar amount in {0:?}")]
    InvalidMoney(String),

    #[error("swipe count is not a number: {0:?}")]
    InvalidSwipes(String),
}

/// The statement table itself is missing or unusable.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("invalid table selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("no element matches table selector {0:?}")]
    TableNotFound(String),

    #[error("statement table has no rows")]
    NoRows,
}

pub type Result<T> = std::result::Result<T, IngestError>;

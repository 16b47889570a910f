//! cardstats-ingest: turn a campus-card statement table into typed transactions.
//!
//! Pipeline: [`DocumentReader`] → [`scan_rows`] (section state machine) →
//! per-section row parsers → [`ScanOutput`].

pub mod error;
pub mod parsers;
pub mod reader;
pub mod scanner;
pub mod section;
pub mod types;

pub use error::{IngestError, RowError};
pub use reader::{DocumentReader, HtmlTableReader, DEFAULT_TABLE_SELECTOR};
pub use scanner::scan_rows;
pub use section::{RowAction, Section};
pub use types::{Row, ScanOutput, SkippedRow};

/// Read rows from `reader` and scan them in one pass.
pub fn ingest<R: DocumentReader + ?Sized>(reader: &R) -> error::Result<ScanOutput> {
    let rows = reader.rows()?;
    scan_rows(&rows)
}

//! Document readers: where statement rows come from.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::error::{IngestError, Result};
use crate::types::Row;

/// Table body on the card-office "account activity" page.
pub const DEFAULT_TABLE_SELECTOR: &str = "#content_window > table > tbody > tr > td:nth-child(2) > table > tbody > tr:nth-child(2) > td > table > tbody";

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Source of statement rows
pub trait DocumentReader {
    fn rows(&self) -> Result<Vec<Row>>;
}

impl DocumentReader for Vec<Row> {
    fn rows(&self) -> Result<Vec<Row>> {
        Ok(self.clone())
    }
}

/// Reads the direct `<tr>` children of one table body in an HTML page.
#[derive(Debug, Clone)]
pub struct HtmlTableReader {
    html: String,
    selector: String,
}

impl HtmlTableReader {
    pub fn new(html: impl Into<String>) -> Self {
        Self::with_selector(html, DEFAULT_TABLE_SELECTOR)
    }

    /// Page layouts differ between the card-office sites; only the table path changes.
    pub fn with_selector(html: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            selector: selector.into(),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }
}

impl DocumentReader for HtmlTableReader {
    fn rows(&self) -> Result<Vec<Row>> {
        let selector = Selector::parse(&self.selector).map_err(|e| IngestError::InvalidSelector {
            selector: self.selector.clone(),
            reason: e.to_string(),
        })?;

        let doc = Html::parse_document(&self.html);
        let table = doc
            .select(&selector)
            .next()
            .ok_or_else(|| IngestError::TableNotFound(self.selector.clone()))?;

        let rows: Vec<Row> = table
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name().eq_ignore_ascii_case("tr"))
            .map(read_row)
            .collect();

        if rows.is_empty() {
            return Err(IngestError::NoRows);
        }
        Ok(rows)
    }
}

fn read_row(tr: ElementRef<'_>) -> Row {
    let cells: Vec<ElementRef<'_>> = tr
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| {
            let name = cell.value().name();
            name.eq_ignore_ascii_case("td") || name.eq_ignore_ascii_case("th")
        })
        .collect();

    let header = tr
        .children()
        .filter_map(ElementRef::wrap)
        .next()
        .is_some_and(|first| first.value().name().eq_ignore_ascii_case("th"));

    Row {
        cells: cells.iter().map(|cell| cell_text(*cell)).collect(),
        header,
    }
}

fn cell_text(cell: ElementRef<'_>) -> String {
    let raw: String = cell.text().collect();
    WS_RE.replace_all(raw.trim(), " ").into_owned()
}

// src/specs/ghdb.rs
//! Scraping *spec* for the Google Hacking Database listing.
//!
//! Purpose:
//! - Find `<table id="exploits-table">` in the page HTML.
//! - Skip the first row (header), then read cells 0..4 of every other row as
//!   `date | dork | category | author`.
//!
//! Rows with fewer than four `<td>` cells are not an error; they are dropped.
//!
//! Non-Responsibilities:
//! - **No networking** (the scanner hands us a fetched document).
//! - **No filtering or output.**

use scraper::Html;
use tracing::debug;

use crate::config::consts::{MIN_CELLS, TABLE_ID};
use crate::core::html::{cell_text, selector};
use crate::data::DorkRecord;
use crate::error::ScanError;

/// Parse the whole document into records, in document order.
pub fn parse_doc(doc: &str) -> Result<Vec<DorkRecord>, ScanError> {
    let html = Html::parse_document(doc);
    let table_sel = selector(&format!("table#{TABLE_ID}"))?;
    let tr_sel = selector("tr")?;
    let td_sel = selector("td")?;

    let table = html
        .select(&table_sel)
        .next()
        .ok_or_else(|| ScanError::parse("Could not find dorks table on the page"))?;

    let mut out = Vec::new();
    for (idx, row) in table.select(&tr_sel).enumerate().skip(1) {
        let cells: Vec<String> = row.select(&td_sel).map(cell_text).collect();
        if cells.len() < MIN_CELLS {
            debug!(row = idx, cells = cells.len(), "skipping short row");
            continue;
        }
        let mut it = cells.into_iter();
        // Length checked above; the extra cells (if any) are ignored.
        let (Some(date), Some(dork), Some(category), Some(author)) =
            (it.next(), it.next(), it.next(), it.next())
        else {
            continue;
        };
        out.push(DorkRecord { date, dork, category, author });
    }
    Ok(out)
}

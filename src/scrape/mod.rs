//! Extraction of the embedded forecast dataset from a provider HTML page.
//!
//! The provider renders the forecast table client-side from a JavaScript
//! array assigned to `aDataSet` inside a script block. Extraction anchors on
//! that assignment and hands the literal to [`literal::LiteralParser`];
//! there is no format-guessing when the page drifts, only an explicit error.

mod error;
mod literal;

pub use error::ScrapeError;

use crate::types::forecast::ForecastRow;
use literal::{JsValue, LiteralParser};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Assignment head that anchors the dataset inside the page.
static DATASET_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"var\s+aDataSet\s*=\s*").expect("dataset head pattern is valid"));

/// Extracts the forecast rows embedded in a provider HTML page.
///
/// # Errors
///
/// Returns [`ScrapeError::DataSetNotFound`] if the page carries no
/// `aDataSet` assignment, [`ScrapeError::MalformedLiteral`] if the
/// assignment is present but its literal does not parse, and the row-shape
/// variants if an entry is not an array of exactly seven scalar fields.
pub fn extract_rows(html: &str) -> Result<Vec<ForecastRow>, ScrapeError> {
    let head = DATASET_HEAD.find(html).ok_or(ScrapeError::DataSetNotFound)?;
    debug!("dataset assignment found at byte {}", head.start());

    let mut parser = LiteralParser::new(&html[head.end()..]);
    let entries = parser.parse_dataset()?;
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| row_from_entry(index, entry))
        .collect()
}

fn row_from_entry(index: usize, entry: JsValue) -> Result<ForecastRow, ScrapeError> {
    let cells = match entry {
        JsValue::Array(cells) => cells,
        _ => return Err(ScrapeError::RowNotArray { index }),
    };

    let mut fields = Vec::with_capacity(cells.len());
    for cell in cells {
        match cell {
            JsValue::Str(value) | JsValue::Raw(value) => fields.push(value),
            JsValue::Array(_) => return Err(ScrapeError::NonScalarField { index }),
        }
    }

    let fields: [String; 7] = fields.try_into().map_err(|overflow: Vec<String>| {
        ScrapeError::RowShape {
            index,
            expected: ForecastRow::HEADER.len(),
            found: overflow.len(),
        }
    })?;
    Ok(ForecastRow::from_cells(fields))
}

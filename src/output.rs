//! CSV serialization of forecast rows.

use crate::types::forecast::ForecastRow;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to create output file '{0}'")]
    Create(PathBuf, #[source] csv::Error),

    #[error("failed to write forecast rows to '{0}'")]
    Write(PathBuf, #[source] csv::Error),

    #[error("failed to flush output file '{0}'")]
    Flush(PathBuf, #[source] std::io::Error),
}

/// Writes the fixed header plus one line per row to `path`, overwriting any
/// existing file. An empty row set still produces the header line.
pub(crate) fn write_rows(path: &Path, rows: &[ForecastRow]) -> Result<(), WriteError> {
    // The header is written explicitly so serialize() cannot emit a second
    // one and a zero-row dataset still gets the full artifact shape.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| WriteError::Create(path.to_path_buf(), e))?;

    writer
        .write_record(ForecastRow::HEADER)
        .map_err(|e| WriteError::Write(path.to_path_buf(), e))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| WriteError::Write(path.to_path_buf(), e))?;
    }
    writer
        .flush()
        .map_err(|e| WriteError::Flush(path.to_path_buf(), e))
}

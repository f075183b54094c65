use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScrapeError {
    /// The page carries no `var aDataSet` assignment at all. Distinct from
    /// an HTTP failure; also what a renamed provider variable turns into.
    #[error("forecast dataset not found in the page (no `var aDataSet` assignment)")]
    DataSetNotFound,

    /// The assignment is present but its literal does not match the grammar
    /// the provider has emitted so far. Offset is relative to the start of
    /// the literal.
    #[error("forecast dataset literal is malformed at byte {offset}: {message}")]
    MalformedLiteral { offset: usize, message: String },

    #[error("forecast entry {index} is not an array")]
    RowNotArray { index: usize },

    #[error("forecast entry {index} has {found} fields, expected {expected}")]
    RowShape {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("forecast entry {index} contains a nested value where a scalar was expected")]
    NonScalarField { index: usize },
}

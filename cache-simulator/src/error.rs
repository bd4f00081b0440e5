//! Trace-reading error types.

use thiserror::Error;

/// Errors that can abort a trace read before simulation begins.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The trace file could not be opened or read.
    #[error("failed to read trace file: {0}")]
    Io(#[from] std::io::Error),
    /// A row had fewer than the 5 columns this format requires. Unlike a
    /// per-field parse failure, this aborts the whole file: it means the file
    /// is not this trace format at all, not that one row is corrupt.
    #[error("line {line}: expected at least 5 columns, found {fields}")]
    Schema {
        /// 1-indexed line number of the offending row.
        line: usize,
        /// Number of comma-separated fields actually found.
        fields: usize,
    },
    /// The trace contained no usable rows after parsing and any time filter.
    #[error("trace produced no requests after parsing and filtering")]
    EmptySequence,
}

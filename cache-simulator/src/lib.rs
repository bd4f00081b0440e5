//! Trace reading and reporting for the `cache-simulator` CLI binary.

/// Trace-reading error types.
pub mod error;
/// Streaming CSV trace reader.
pub mod input;
/// Text/CSV rendering of a run's `Stats`.
pub mod report;

pub use error::TraceError;
pub use input::RequestIterator;

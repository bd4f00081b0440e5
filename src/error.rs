//! Errors raised at policy construction.
//!
//! Policies cannot fail once running (§4.9 of the design notes): every rejection
//! happens up front, at construction, so the driver's hot loop never has to handle
//! a recoverable error.

use thiserror::Error;

/// Rejected policy construction parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// `capacity` must be a positive integer.
    #[error("cache capacity must be positive, got {0}")]
    NonPositiveCapacity(i64),
    /// A percentage-valued threshold must lie in `[0, 100]`.
    #[error("{name} must be in 0..=100, got {value}")]
    ThresholdOutOfRange {
        /// Name of the offending parameter, for the error message.
        name: &'static str,
        /// The rejected value, truncated for display.
        value: i64,
    },
    /// `tracking_ratio`/`N`/`insertion_threshold` must be positive.
    #[error("{name} must be positive, got {value}")]
    NonPositiveParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: i64,
    },
}

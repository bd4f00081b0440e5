//! Trace request types.

/// The operation a [`Request`] performs against the simulated cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// A read access.
    Read,
    /// A write access.
    Write,
}

/// A single trace row, already normalized: `key` is whatever granularity the
/// caller chose (raw offset or page number), and `op` has already been
/// case-folded from the source text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Request {
    /// Timestamp of the request, as recorded in the trace.
    pub ts: f64,
    /// Normalized cache key (page number or raw offset, depending on caller).
    pub key: u64,
    /// Read or write.
    pub op: Op,
}

impl Request {
    /// Create a new request.
    pub fn new(ts: f64, key: u64, op: Op) -> Self {
        Self { ts, key, op }
    }
}

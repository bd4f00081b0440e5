//! Streaming CSV trace reader (§4.10).
//!
//! Mirrors the way a trace-driven simulator must behave on multi-gigabyte
//! production traces: one line is read and parsed at a time, never the whole
//! file at once.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use cachesim_core::{Op, Request};

use crate::error::TraceError;

/// Divide an offset by this to get a page number. `0` or `1` disables the
/// division (the key is the raw offset).
const DEFAULT_PAGE_SIZE: u64 = 4096;

/// Parse one trace row. `line_num` is 0-indexed for the error's 1-indexed report.
///
/// Returns `Ok(None)` for a row that should be silently skipped (blank line,
/// header row, or a field that fails to parse) and `Err` only for the schema
/// violation that aborts the whole file.
fn parse_line(line: &str, line_num: usize, page_size: u64) -> Result<Option<Request>, TraceError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 5 {
        return Err(TraceError::Schema {
            line: line_num + 1,
            fields: fields.len(),
        });
    }

    let Ok(ts) = fields[0].trim().parse::<f64>() else {
        return Ok(None);
    };
    let Ok(offset) = fields[2].trim().parse::<u64>() else {
        return Ok(None);
    };
    let op = match fields[4].trim().to_lowercase().as_str() {
        "read" => Op::Read,
        "write" => Op::Write,
        _ => return Ok(None),
    };

    let key = if page_size > 1 { offset / page_size } else { offset };
    Ok(Some(Request::new(ts, key, op)))
}

/// Opens a trace file and streams [`Request`]s from it one line at a time.
#[derive(Debug)]
pub struct RequestIterator {
    reader: BufReader<File>,
    line_buffer: String,
    line_num: usize,
    page_size: u64,
    done: bool,
}

impl RequestIterator {
    /// Open `path` for streaming, normalizing offsets to `page_size`-sized
    /// pages (pass `0` or `1` to keep raw offsets).
    pub fn open(path: impl AsRef<Path>, page_size: u64) -> Result<Self, TraceError> {
        let file = File::open(path)?;
        Ok(Self {
            // 1MB buffer: trace files are read sequentially once, so a large
            // buffer amortizes the syscall cost over many rows.
            reader: BufReader::with_capacity(1024 * 1024, file),
            line_buffer: String::with_capacity(256),
            line_num: 0,
            page_size,
            done: false,
        })
    }

    /// Open `path` with the default page size (4096).
    pub fn open_default(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        Self::open(path, DEFAULT_PAGE_SIZE)
    }
}

impl Iterator for RequestIterator {
    type Item = Result<Request, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => {
                    let line_num = self.line_num;
                    self.line_num += 1;
                    match parse_line(&self.line_buffer, line_num, self.page_size) {
                        Ok(Some(request)) => return Some(Ok(request)),
                        Ok(None) => continue,
                        Err(e) => {
                            self.done = true;
                            return Some(Err(e));
                        }
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(TraceError::from(e)));
                }
            }
        }
    }
}

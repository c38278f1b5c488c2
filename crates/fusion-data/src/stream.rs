//! Streaming, bounded-memory CSV ingestion.

use std::collections::VecDeque;
use std::fs::File;

use csv::StringRecord;
use tracing::debug;

use fusion_core::config::DEFAULT_CHUNK_SIZE;
use fusion_core::error::Result;

use crate::path::{validate, ValidatedSource};
use crate::row::RowParser;

/// Lazy sequence of numeric values read from a validated CSV source.
///
/// Values are produced one at a time in file row order; internally the
/// stream refills a buffer of up to `batch_size` parsed values per read
/// burst, so memory use is O(batch_size) regardless of file size. The
/// stream is finite and not restartable: consuming it again requires a new
/// call to [`stream_numbers`]. The underlying file handle is owned by the
/// stream and released on drop, whichever way iteration ends.
#[derive(Debug)]
pub struct NumberStream {
    reader: csv::Reader<File>,
    parser: RowParser,
    buffer: VecDeque<f64>,
    batch_size: usize,
    exhausted: bool,
    rows_dropped: u64,
}

impl NumberStream {
    /// Open `source` for streaming with the given batch size (clamped to
    /// at least 1).
    ///
    /// Header parsing happens here, so a file whose header cannot be read
    /// fails at open time rather than on the first `next()`.
    pub fn open(source: &ValidatedSource, batch_size: usize) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(source.path())?;
        let parser = RowParser::from_headers(reader.headers()?);

        Ok(Self {
            reader,
            parser,
            buffer: VecDeque::new(),
            batch_size: batch_size.max(1),
            exhausted: false,
            rows_dropped: 0,
        })
    }

    /// Number of data rows dropped so far because their `value` cell was
    /// missing, empty, or not a finite number.
    pub fn rows_dropped(&self) -> u64 {
        self.rows_dropped
    }

    /// Read records until the buffer holds `batch_size` values or the file
    /// ends. Unreadable records are skipped like malformed cells.
    fn refill(&mut self) {
        let mut record = StringRecord::new();
        while self.buffer.len() < self.batch_size {
            match self.reader.read_record(&mut record) {
                Ok(true) => match self.parser.parse(&record) {
                    Some(value) => self.buffer.push_back(value),
                    None => self.rows_dropped += 1,
                },
                Ok(false) => {
                    self.exhausted = true;
                    if self.rows_dropped > 0 {
                        debug!("Stream dropped {} malformed rows", self.rows_dropped);
                    }
                    break;
                }
                Err(e) => {
                    debug!("Skipping unreadable CSV record: {}", e);
                    self.rows_dropped += 1;
                }
            }
        }
    }
}

impl Iterator for NumberStream {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.buffer.is_empty() && !self.exhausted {
            self.refill();
        }
        self.buffer.pop_front()
    }
}

/// Open `source` as a lazy sequence of numeric values.
///
/// Path validation runs synchronously here: a bad source fails at call time,
/// before any value is produced, so callers can distinguish it from a source
/// with zero valid rows. `batch_size` defaults to
/// [`DEFAULT_CHUNK_SIZE`](fusion_core::config::DEFAULT_CHUNK_SIZE) when
/// callers pass that constant through; it tunes buffering only and never
/// changes the observed sequence.
pub fn stream_numbers(source: &str, batch_size: usize) -> Result<NumberStream> {
    let validated = validate(source)?;
    NumberStream::open(&validated, batch_size)
}

/// Convenience wrapper using the default batch size.
pub fn stream_numbers_default(source: &str) -> Result<NumberStream> {
    stream_numbers(source, DEFAULT_CHUNK_SIZE)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Eager ingestion: materialize every numeric value into memory.

use csv::StringRecord;
use tracing::debug;

use fusion_core::error::Result;

use crate::path::{validate, ValidatedSource};
use crate::row::RowParser;
use crate::stream::NumberStream;

/// Load every numeric value from the `value` column of `source`, in file
/// row order.
///
/// With `use_streaming` false the file is parsed directly into the result
/// vector (one open, O(n) memory). With `use_streaming` true the values are
/// materialized from a [`NumberStream`] with `chunk_size` batching. Both
/// modes produce identical contents and order for the same source.
///
/// Fails with the path-validation errors only; malformed rows are dropped
/// silently (counted at `debug!` level).
pub fn load_numbers(source: &str, use_streaming: bool, chunk_size: usize) -> Result<Vec<f64>> {
    let validated = validate(source)?;
    load_validated(&validated, use_streaming, chunk_size)
}

/// Load from an already-validated source. Shared by [`load_numbers`] and the
/// aggregate functions so each call validates its path exactly once.
pub(crate) fn load_validated(
    validated: &ValidatedSource,
    use_streaming: bool,
    chunk_size: usize,
) -> Result<Vec<f64>> {
    if use_streaming {
        let mut stream = NumberStream::open(validated, chunk_size)?;
        let values: Vec<f64> = stream.by_ref().collect();
        debug!(
            "Loaded {} values ({} rows dropped) from {} via streaming",
            values.len(),
            stream.rows_dropped(),
            validated.path().display()
        );
        return Ok(values);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(validated.path())?;
    let parser = RowParser::from_headers(reader.headers()?);

    let mut values = Vec::new();
    let mut rows_dropped = 0u64;
    let mut record = StringRecord::new();
    loop {
        match reader.read_record(&mut record) {
            Ok(true) => match parser.parse(&record) {
                Some(value) => values.push(value),
                None => rows_dropped += 1,
            },
            Ok(false) => break,
            Err(e) => {
                debug!("Skipping unreadable CSV record: {}", e);
                rows_dropped += 1;
            }
        }
    }

    debug!(
        "Loaded {} values ({} rows dropped) from {}",
        values.len(),
        rows_dropped,
        validated.path().display()
    );
    Ok(values)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

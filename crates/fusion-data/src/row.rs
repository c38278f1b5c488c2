//! Tolerant per-record numeric extraction.

use csv::StringRecord;

/// Extracts the numeric `value` cell from CSV records.
///
/// The column is located once from the header row; [`RowParser::parse`] is
/// then applied to every data record. Rows whose cell is missing, empty, or
/// not a finite number produce no value and are not errors (deliberate
/// tolerance policy: dirty rows must not abort the whole ingestion).
#[derive(Debug, Clone, Copy)]
pub struct RowParser {
    value_index: Option<usize>,
}

impl RowParser {
    /// Column name the parser extracts.
    pub const VALUE_COLUMN: &'static str = "value";

    /// Locate the `value` column in `headers`.
    ///
    /// A missing column is not an error; every subsequent record simply
    /// parses to `None`.
    pub fn from_headers(headers: &StringRecord) -> Self {
        let value_index = headers.iter().position(|h| h == Self::VALUE_COLUMN);
        Self { value_index }
    }

    /// Parse one record into a finite numeric value, or `None`.
    ///
    /// Pure function: no I/O, nothing escapes.
    pub fn parse(&self, record: &StringRecord) -> Option<f64> {
        let cell = record.get(self.value_index?)?.trim();
        if cell.is_empty() {
            return None;
        }
        cell.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

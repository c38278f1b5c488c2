//! Aggregate statistics over the `value` column of a CSV source.

use tracing::debug;

use fusion_core::config::DEFAULT_CHUNK_SIZE;
use fusion_core::error::{FusionError, Result};

use crate::loader::load_validated;
use crate::path::validate;
use crate::stream::NumberStream;

/// Arithmetic mean of the `value` column of `source`.
///
/// With `use_streaming` true the values are consumed as a running sum and
/// count, O(1) auxiliary memory beyond the stream's batch buffer; otherwise
/// the full sequence is loaded first. Fails with
/// [`FusionError::EmptyData`] when the source has zero valid values.
pub fn mean(source: &str, use_streaming: bool) -> Result<f64> {
    let validated = validate(source)?;

    if use_streaming {
        let stream = NumberStream::open(&validated, DEFAULT_CHUNK_SIZE)?;

        let mut sum = 0.0f64;
        let mut count = 0u64;
        for value in stream {
            sum += value;
            count += 1;
        }

        if count == 0 {
            return Err(FusionError::EmptyData(validated.into_path()));
        }
        debug!("Streaming mean over {} values", count);
        return Ok(sum / count as f64);
    }

    let values = load_validated(&validated, false, DEFAULT_CHUNK_SIZE)?;
    if values.is_empty() {
        return Err(FusionError::EmptyData(validated.into_path()));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median of the `value` column of `source`.
///
/// The median always materializes the full sequence regardless of
/// `use_streaming`: selecting the middle element requires a total ordering
/// over all values, so streaming offers no memory benefit here. The flag is
/// honoured only for how the values are read. For an even count the result
/// is the mean of the two central values.
pub fn median(source: &str, use_streaming: bool) -> Result<f64> {
    let validated = validate(source)?;
    let mut values = load_validated(&validated, use_streaming, DEFAULT_CHUNK_SIZE)?;
    if values.is_empty() {
        return Err(FusionError::EmptyData(validated.into_path()));
    }

    // Values are all finite, so total_cmp gives a plain numeric order.
    values.sort_by(f64::total_cmp);

    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Ok(values[mid])
    } else {
        Ok((values[mid - 1] + values[mid]) / 2.0)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_numbers;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_csv(dir: &Path, name: &str, rows: &[&str]) -> String {
        let path = dir.join(name);
        let mut content = String::from("value\n");
        for row in rows {
            content.push_str(row);
            content.push('\n');
        }
        std::fs::write(&path, content).unwrap();
        path.to_str().unwrap().to_string()
    }

    // ── mean ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_mean_basic() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "numbers.csv", &["1", "2", "3", "4", "5"]);

        assert_eq!(mean(&path, false).unwrap(), 3.0);
    }

    #[test]
    fn test_mean_streaming_agrees_with_eager() {
        let dir = TempDir::new().unwrap();
        let rows: Vec<String> = (0..100).map(|i| format!("{}", i as f64)).collect();
        let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let path = write_csv(dir.path(), "numbers.csv", &row_refs);

        let eager = mean(&path, false).unwrap();
        let streamed = mean(&path, true).unwrap();
        assert!((eager - streamed).abs() < 1e-3);
    }

    #[test]
    fn test_mean_empty_data() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "numbers.csv", &[]);

        let err = mean(&path, false).unwrap_err();
        assert!(matches!(err, FusionError::EmptyData(_)));

        let err = mean(&path, true).unwrap_err();
        assert!(matches!(err, FusionError::EmptyData(_)));
    }

    #[test]
    fn test_mean_traversal_rejected() {
        let err = mean("../data.csv", true).unwrap_err();
        assert!(matches!(err, FusionError::SecurityViolation(_)));
    }

    #[test]
    fn test_mean_skips_malformed_rows() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            dir.path(),
            "numbers.csv",
            &["1.5", "not-a-number", "2.5", "", "3.5"],
        );

        assert_eq!(mean(&path, false).unwrap(), 2.5);
    }

    // ── median ────────────────────────────────────────────────────────────────

    #[test]
    fn test_median_odd_count() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "numbers.csv", &["1", "2", "3", "4", "5"]);

        assert_eq!(median(&path, false).unwrap(), 3.0);
    }

    #[test]
    fn test_median_even_count() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "numbers.csv", &["1", "2", "3", "4"]);

        assert_eq!(median(&path, false).unwrap(), 2.5);
    }

    #[test]
    fn test_median_unsorted_input() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "numbers.csv", &["5", "1", "4", "2", "3"]);

        assert_eq!(median(&path, false).unwrap(), 3.0);
    }

    #[test]
    fn test_median_streaming_matches_exactly() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "numbers.csv", &["1.5", "2.5", "3.5"]);

        assert_eq!(median(&path, false).unwrap(), 2.5);
        assert_eq!(median(&path, true).unwrap(), median(&path, false).unwrap());
    }

    #[test]
    fn test_median_empty_data() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "numbers.csv", &[]);

        let err = median(&path, true).unwrap_err();
        assert!(matches!(err, FusionError::EmptyData(_)));
    }

    // ── end-to-end scenarios ──────────────────────────────────────────────────

    #[test]
    fn test_end_to_end_integers() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "numbers.csv", &["1", "2", "3", "4", "5"]);

        let values = load_numbers(&path, false, DEFAULT_CHUNK_SIZE).unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(mean(&path, false).unwrap(), 3.0);
        assert_eq!(median(&path, false).unwrap(), 3.0);
    }

    #[test]
    fn test_end_to_end_fractions() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(dir.path(), "numbers.csv", &["1.5", "2.5", "3.5"]);

        assert_eq!(mean(&path, false).unwrap(), 2.5);
        assert_eq!(median(&path, false).unwrap(), 2.5);
    }
}

//! Numeric CSV ingestion and aggregation.
//!
//! Reads a comma-separated file with a header row and a column named
//! `value`, tolerating malformed rows, and exposes eager loading, streaming
//! (bounded-memory) ingestion, and aggregate statistics over the result.

pub mod loader;
pub mod path;
pub mod row;
pub mod stats;
pub mod stream;

pub use fusion_core as core;

pub use loader::load_numbers;
pub use path::{validate, ValidatedSource};
pub use stats::{mean, median};
pub use stream::{stream_numbers, NumberStream};

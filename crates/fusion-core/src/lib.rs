//! Shared building blocks for the fusion toolkit.
//!
//! Holds the error taxonomy, process-wide configuration, the lazy capability
//! registry, and the small self-contained utility modules (text helpers,
//! arithmetic, project catalog, starter kits). The CSV ingestion core lives
//! in the `fusion-data` crate.

pub mod config;
pub mod error;
pub mod kits;
pub mod math;
pub mod projects;
pub mod registry;
pub mod text;

pub use error::{FusionError, Result};

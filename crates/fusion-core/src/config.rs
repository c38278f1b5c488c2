//! Process-wide configuration.
//!
//! Built once at startup via [`Config::from_env`] and passed by reference
//! into the components that need it. There is no global instance.

/// Default number of parsed values buffered per batch during streaming
/// CSV ingestion.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Default timeout (seconds) handed to HTTP-speaking collaborators.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

// ── Config ────────────────────────────────────────────────────────────────────

/// Centralized configuration settings for the fusion crates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Batch size for streaming CSV ingestion.
    pub csv_chunk_size: usize,
    /// Request timeout for external HTTP collaborators.
    pub http_timeout_secs: u64,
    /// Default logging level name (Python-style: DEBUG/INFO/WARNING/ERROR).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_chunk_size: DEFAULT_CHUNK_SIZE,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Build a config from `FUSION_*` environment variables, falling back to
    /// the defaults for anything absent or unparseable.
    ///
    /// Recognised variables: `FUSION_CSV_CHUNK_SIZE`, `FUSION_HTTP_TIMEOUT`,
    /// `FUSION_LOG_LEVEL`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            csv_chunk_size: env_parsed("FUSION_CSV_CHUNK_SIZE", defaults.csv_chunk_size),
            http_timeout_secs: env_parsed("FUSION_HTTP_TIMEOUT", defaults.http_timeout_secs),
            log_level: std::env::var("FUSION_LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }
}

/// Read `name` from the environment and parse it, returning `default` when
/// the variable is unset or does not parse.
fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

mod bootstrap;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fusion_core::config::Config;
use fusion_core::projects::sample_projects;
use fusion_data::{load_numbers, mean, median};

/// CSV numeric ingestion and aggregation toolkit
#[derive(Parser, Debug)]
#[command(name = "fusion", about = "CSV numeric ingestion and aggregation toolkit", version)]
struct Cli {
    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    log_level: String,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every numeric value from the `value` column
    Load {
        /// CSV file to read
        file: String,
        /// Use bounded-memory streaming ingestion
        #[arg(long)]
        streaming: bool,
        /// Streaming batch size (defaults to the configured chunk size)
        #[arg(long)]
        chunk_size: Option<usize>,
    },
    /// Compute the arithmetic mean of the `value` column
    Mean {
        /// CSV file to read
        file: String,
        /// Use bounded-memory streaming ingestion
        #[arg(long)]
        streaming: bool,
    },
    /// Compute the median of the `value` column
    Median {
        /// CSV file to read
        file: String,
        /// Use bounded-memory streaming ingestion
        #[arg(long)]
        streaming: bool,
    },
    /// Print the bundled demo project catalog as JSON
    Projects,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        "DEBUG"
    } else {
        cli.log_level.as_str()
    };
    bootstrap::setup_logging(level)?;

    // Built once here and passed down; nothing reads the environment later.
    let config = Config::from_env();

    tracing::info!("fusion v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Load {
            file,
            streaming,
            chunk_size,
        } => {
            let chunk = chunk_size.unwrap_or(config.csv_chunk_size);
            let values = load_numbers(&file, streaming, chunk)?;
            for value in values {
                println!("{}", value);
            }
        }

        Command::Mean { file, streaming } => {
            println!("{}", mean(&file, streaming)?);
        }

        Command::Median { file, streaming } => {
            println!("{}", median(&file, streaming)?);
        }

        Command::Projects => {
            let projects = sample_projects();
            println!("{}", serde_json::to_string_pretty(&projects)?);
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for `uuidgen`.
#[derive(Debug, Parser)]
#[command(name = "uuidgen", version, about = "Generate and check random UUIDs")]
pub struct Cli {
    /// Entropy buffer length in bytes; overrides `UUIDGEN_BUFFER_LEN`.
    #[arg(long, global = true, value_name = "BYTES")]
    pub buffer_len: Option<usize>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print new random identifiers.
    Generate {
        /// Number of identifiers to generate.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u64,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Validate identifiers and print them in canonical form.
    Parse {
        /// Identifiers to check.
        #[arg(required = true, value_name = "UUID")]
        inputs: Vec<String>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Measure generation throughput against baseline implementations.
    Bench {
        /// Identifiers to generate per implementation.
        #[arg(short = 'n', long, default_value_t = 1_000_000)]
        count: u64,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

/// How command output is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One value per line.
    Text,
    /// A pretty-printed JSON document.
    Json,
    /// A YAML document.
    Yaml,
}

//! Random (version 4) UUIDs: the identifier type, a buffered thread-safe
//! generator, and the `uuidgen` CLI built on them.
//!
//! ```
//! use uuidgen::{Generator, Uuid};
//!
//! let gen = Generator::new();
//! let id = gen.new_v4();
//! let text = id.to_string();
//! assert_eq!(Uuid::parse(&text), Ok(id));
//! ```

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod identifier;
pub mod ports;

pub use config::GenConfig;
pub use error::Error;
pub use generator::Generator;
pub use identifier::Uuid;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
/// Help and version requests are printed to stdout and count as success.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}

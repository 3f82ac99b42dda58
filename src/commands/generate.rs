//! `uuidgen generate` command.

use std::io::Write;

use crate::cli::Format;
use crate::config::GenConfig;
use crate::generator::Generator;
use crate::identifier::Uuid;

use super::{write_document, write_error};

/// Execute the `generate` command.
///
/// Text output streams one identifier per line; structured formats collect
/// the identifiers into a single list document.
///
/// # Errors
///
/// Returns an error string if the output cannot be written or encoded.
pub fn run(config: &GenConfig, count: u64, format: Format, out: &mut dyn Write) -> Result<(), String> {
    let gen = Generator::with_config(config);
    tracing::debug!(count, buffer_len = config.buffer_len(), "generating identifiers");

    if format == Format::Text {
        for _ in 0..count {
            writeln!(out, "{}", gen.new_v4()).map_err(write_error)?;
        }
        return Ok(());
    }

    let ids: Vec<Uuid> = (0..count).map(|_| gen.new_v4()).collect();
    write_document(&ids, format, out)
}

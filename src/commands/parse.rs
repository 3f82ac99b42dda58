//! `uuidgen parse` command.

use std::io::Write;

use crate::cli::Format;
use crate::identifier::Uuid;

use super::{write_document, write_error};

/// Execute the `parse` command.
///
/// Every input is validated before anything is printed.
///
/// # Errors
///
/// Returns an error string naming the first malformed input, or if the
/// output cannot be written.
pub fn run(inputs: &[String], format: Format, out: &mut dyn Write) -> Result<(), String> {
    let ids = inputs
        .iter()
        .map(|input| Uuid::parse(input).map_err(|e| format!("{input:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;

    if format == Format::Text {
        for id in &ids {
            writeln!(out, "{id}").map_err(write_error)?;
        }
        return Ok(());
    }
    write_document(&ids, format, out)
}

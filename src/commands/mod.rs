//! Command dispatch and handlers.

pub mod bench;
pub mod generate;
pub mod parse;

use std::io::{self, BufWriter, Write};

use serde::Serialize;

use crate::cli::{Cli, Command, Format};
use crate::config::GenConfig;

/// Dispatch a parsed command line to its handler, writing to stdout.
///
/// # Errors
///
/// Returns an error string if configuration is invalid, the selected command
/// handler fails, or stdout cannot be written.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    dispatch_to(cli, &mut out)?;
    out.flush().map_err(write_error)
}

/// Dispatch a parsed command line, writing its output to `out`.
///
/// # Errors
///
/// Returns an error string if configuration is invalid or the handler fails.
pub fn dispatch_to(cli: &Cli, out: &mut dyn Write) -> Result<(), String> {
    match &cli.command {
        Command::Generate { count, format } => {
            generate::run(&resolve_config(cli.buffer_len)?, *count, *format, out)
        }
        Command::Parse { inputs, format } => parse::run(inputs, *format, out),
        Command::Bench { count, format } => {
            bench::run(&resolve_config(cli.buffer_len)?, *count, *format, out)
        }
    }
}

/// Resolve generator settings: an explicit `--buffer-len` wins over the
/// environment.
///
/// # Errors
///
/// Returns an error string if the chosen buffer length is invalid.
pub fn resolve_config(buffer_len: Option<usize>) -> Result<GenConfig, String> {
    buffer_len
        .map_or_else(GenConfig::from_env, GenConfig::new)
        .map_err(|e| e.to_string())
}

/// Write `value` as a JSON or YAML document.
fn write_document<T: Serialize + ?Sized>(
    value: &T,
    format: Format,
    out: &mut dyn Write,
) -> Result<(), String> {
    let doc = match format {
        Format::Json => serde_json::to_string_pretty(value)
            .map(|mut doc| {
                doc.push('\n');
                doc
            })
            .map_err(|e| format!("Failed to encode JSON: {e}"))?,
        Format::Yaml => {
            serde_yaml::to_string(value).map_err(|e| format!("Failed to encode YAML: {e}"))?
        }
        Format::Text => unreachable!("text output is written line by line"),
    };
    out.write_all(doc.as_bytes()).map_err(write_error)
}

#[allow(clippy::needless_pass_by_value)]
fn write_error(err: io::Error) -> String {
    format!("Failed to write output: {err}")
}

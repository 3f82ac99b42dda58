//! `uuidgen bench` command.

use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::adapters::live::{UnbufferedGenerator, UuidCrateGenerator};
use crate::cli::Format;
use crate::config::GenConfig;
use crate::generator::Generator;
use crate::ports::IdGenerator;

use super::{write_document, write_error};

/// Throughput of one generator implementation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// Implementation label, from [`IdGenerator::name`].
    pub implementation: &'static str,
    /// Identifiers generated.
    pub count: u64,
    /// Wall-clock time for the whole run, in milliseconds.
    pub total_ms: f64,
    /// Average nanoseconds per identifier.
    pub ns_per_op: f64,
    /// Identifiers per second.
    pub ops_per_sec: f64,
}

impl Measurement {
    #[allow(clippy::cast_precision_loss)]
    fn new(implementation: &'static str, count: u64, elapsed: Duration) -> Self {
        let secs = elapsed.as_secs_f64();
        let n = count.max(1) as f64;
        Self {
            implementation,
            count,
            total_ms: secs * 1e3,
            ns_per_op: secs * 1e9 / n,
            ops_per_sec: if secs > 0.0 { n / secs } else { f64::INFINITY },
        }
    }
}

/// Generate `count` identifiers with `gen` and time the run.
#[must_use]
pub fn measure(gen: &dyn IdGenerator, count: u64) -> Measurement {
    let start = Instant::now();
    for _ in 0..count {
        black_box(gen.generate());
    }
    Measurement::new(gen.name(), count, start.elapsed())
}

/// Execute the `bench` command.
///
/// # Errors
///
/// Returns an error string if the report cannot be written or encoded.
pub fn run(config: &GenConfig, count: u64, format: Format, out: &mut dyn Write) -> Result<(), String> {
    let generators: [Box<dyn IdGenerator>; 3] = [
        Box::new(Generator::with_config(config)),
        Box::new(UnbufferedGenerator),
        Box::new(UuidCrateGenerator),
    ];

    let mut results = Vec::with_capacity(generators.len());
    for gen in &generators {
        let result = measure(gen.as_ref(), count);
        tracing::info!(
            implementation = result.implementation,
            ns_per_op = result.ns_per_op,
            "benchmark finished"
        );
        results.push(result);
    }

    if format != Format::Text {
        return write_document(&results, format, out);
    }

    writeln!(
        out,
        "{:<12} {:>12} {:>12} {:>10} {:>14}",
        "impl", "count", "total ms", "ns/op", "ops/s"
    )
    .map_err(write_error)?;
    for r in &results {
        writeln!(
            out,
            "{:<12} {:>12} {:>12.2} {:>10.1} {:>14.0}",
            r.implementation, r.count, r.total_ms, r.ns_per_op, r.ops_per_sec
        )
        .map_err(write_error)?;
    }
    Ok(())
}

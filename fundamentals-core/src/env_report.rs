//! Environment reporter
//!
//! Collects four facts about the toolchain and host and prints them as
//! labeled lines, one per line, in a fixed order.

use std::io::Write;

use fundamentals_config::Program;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;

const TARGET: &str = Program::EnvReport.target();

/// Captured by the build script; `"unknown"` when `rustc --version` could not run.
const RUSTC_VERSION: &str = match option_env!("FUNDAMENTALS_RUSTC_VERSION") {
    Some(version) => version,
    None => "unknown",
};

pub const BANNER: &str = "=== Rust Program Structure Demo ===";

/// Labels in output order
pub const LABELS: [&str; 4] = ["Rust Version", "Operating System", "Architecture", "CPU Count"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvReport {
    #[serde(rename = "rust_version")]
    pub version: String,
    pub os: String,
    pub arch: String,
    pub cpu_count: usize,
}

impl EnvReport {
    /// Query the running host.
    pub fn collect() -> Self {
        let cpu_count = match std::thread::available_parallelism() {
            Ok(n) => n.get(),
            Err(e) => {
                warn!(target: TARGET, error = %e, "cannot query available parallelism, reporting 1");
                1
            }
        };

        let report = Self {
            version: RUSTC_VERSION.to_string(),
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            cpu_count,
        };
        debug!(
            target: TARGET,
            version = %report.version,
            os = %report.os,
            arch = %report.arch,
            cpu_count = report.cpu_count,
            "collected environment"
        );
        report
    }

    /// The `(label, value)` pairs in output order.
    pub fn fields(&self) -> [(&'static str, String); 4] {
        [
            (LABELS[0], self.version.clone()),
            (LABELS[1], self.os.clone()),
            (LABELS[2], self.arch.clone()),
            (LABELS[3], self.cpu_count.to_string()),
        ]
    }

    pub fn write_text<W: Write>(&self, w: &mut W) -> Result<()> {
        writeln!(w, "{BANNER}")?;
        for (label, value) in self.fields() {
            writeln!(w, "{label}: {value}")?;
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, w: &mut W) -> Result<()> {
        serde_json::to_writer_pretty(&mut *w, self)?;
        writeln!(w)?;
        Ok(())
    }
}

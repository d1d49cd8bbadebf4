//! Fundamentals CLI - shared plumbing for the `hello-system` and
//! `data-collector` binaries
//!
//! Argument parsing, logging initialisation and report output. The reports
//! themselves are built by `fundamentals-core`.

pub mod config;
pub mod logging;
pub mod platform;

pub use platform::{print_error, run, CliError, CommonArgs};

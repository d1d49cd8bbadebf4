//! Platform adapters: argument parsing, stdout output and error display

mod cli;

pub use cli::{print_error, run, CliError, CommonArgs};

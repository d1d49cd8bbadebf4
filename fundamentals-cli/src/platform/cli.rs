//! CLI 执行与格式化输出
//!
//! 两个程序共享的参数、执行流程和错误显示。

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use fundamentals_config::{LogLevel, OutputFormat, Program};
use fundamentals_core::{EnvReport, Report};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{LogConfig, CLI_TARGET};
use crate::logging::{init_with_file, LogFormat};

/// Flags shared by both binaries; none are required.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Global log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level, default_value = "warn")]
    pub log_level: LogLevel,

    /// Log level for this program's own messages (overrides --log-level)
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    pub program_log_level: Option<LogLevel>,

    /// Log line format, used for stderr and for --log-file
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Also append log lines to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl CommonArgs {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot open log file '{path}': {source}")]
    LogFile { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Core(#[from] fundamentals_core::Error),
}

fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| {
        format!("unknown log level '{s}' (expected silent, error, warn, info, debug or trace)")
    })
}

fn open_log_file(path: &Path) -> Result<File, CliError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| CliError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Initialise logging, build the program's report and write it to stdout.
pub fn run(program: Program, args: &CommonArgs) -> Result<(), CliError> {
    let file = args.log_file.as_deref().map(open_log_file).transpose()?;
    let log_config = LogConfig::for_program(program, args.log_level, args.program_log_level);
    init_with_file(&log_config, args.log_format, file);

    let format = args.output_format();
    info!(
        target: CLI_TARGET,
        program = program.as_str(),
        log_level = args.log_level.as_str(),
        ?format,
        "running"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(program, format, &mut out)?;
    out.flush().map_err(fundamentals_core::Error::from)?;

    debug!(target: CLI_TARGET, program = program.as_str(), "done");
    Ok(())
}

/// Build the report for `program` and render it into `w`.
pub fn write_report<W: Write>(program: Program, format: OutputFormat, w: &mut W) -> Result<(), CliError> {
    match (program, format) {
        (Program::EnvReport, OutputFormat::Text) => EnvReport::collect().write_text(w)?,
        (Program::EnvReport, OutputFormat::Json) => EnvReport::collect().write_json(w)?,
        (Program::TypesDemo, OutputFormat::Text) => Report::build().write_text(w)?,
        (Program::TypesDemo, OutputFormat::Json) => Report::build().write_json(w)?,
    }
    Ok(())
}

/// 打印错误
pub fn print_error(e: &CliError) {
    eprintln!("Error: {e}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        common: CommonArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::try_parse_from(["test"]).unwrap();
        assert!(!cli.common.json);
        assert_eq!(cli.common.log_level, LogLevel::Warn);
        assert_eq!(cli.common.program_log_level, None);
        assert_eq!(cli.common.log_format, LogFormat::Compact);
        assert_eq!(cli.common.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_flags() {
        let cli = TestCli::try_parse_from([
            "test",
            "--json",
            "--log-level",
            "silent",
            "--program-log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.common.output_format(), OutputFormat::Json);
        assert_eq!(cli.common.log_level, LogLevel::Error);
        assert_eq!(cli.common.program_log_level, Some(LogLevel::Debug));
        assert_eq!(cli.common.log_format, LogFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_level() {
        assert!(TestCli::try_parse_from(["test", "--log-level", "loud"]).is_err());
    }

    #[test]
    fn test_write_report_text() {
        let mut out = Vec::new();
        write_report(Program::EnvReport, OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_open_log_file_error() {
        let err = open_log_file(Path::new("/nonexistent-dir/fundamentals.log")).unwrap_err();
        assert!(err.to_string().starts_with("cannot open log file"));
    }
}

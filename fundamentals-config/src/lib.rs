//! Fundamentals Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across the Fundamentals crates.

use serde::Serialize;

/// The demonstration programs shipped by the workspace
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Program {
    /// Host/toolchain environment reporter
    EnvReport,
    /// Variable and type demonstrator
    TypesDemo,
}

impl Program {
    /// Get the string name of the program
    pub const fn as_str(&self) -> &'static str {
        match self {
            Program::EnvReport => "env",
            Program::TypesDemo => "types",
        }
    }

    /// Get the log target name for this program
    pub const fn target(&self) -> &'static str {
        match self {
            Program::EnvReport => "fundamentals::env",
            Program::TypesDemo => "fundamentals::types",
        }
    }
}

/// How a report is written to stdout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable labeled lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// 日志级别
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a level name, case-insensitively. `silent` maps to `Error`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

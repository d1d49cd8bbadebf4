//! CLI 配置
//!
//! 日志配置：全局级别 + 每个程序的覆盖级别

use fundamentals_config::{LogLevel, Program};
use tracing::Level;

pub const CLI_TARGET: &str = "fundamentals::cli";

/// CLI 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub env: Option<Level>,
    pub types: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            env: None,
            types: None,
        }
    }
}

impl LogConfig {
    /// Global level, with an optional override for the running program's own target
    pub fn for_program(program: Program, global: LogLevel, program_level: Option<LogLevel>) -> Self {
        let mut config = Self {
            global: to_tracing_level(global),
            ..Self::default()
        };
        let program_level = program_level.map(to_tracing_level);
        match program {
            Program::EnvReport => config.env = program_level,
            Program::TypesDemo => config.types = program_level,
        }
        config
    }

    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        if target == Program::EnvReport.target() {
            self.env.unwrap_or(self.global)
        } else if target == Program::TypesDemo.target() {
            self.types.unwrap_or(self.global)
        } else {
            self.global
        }
    }
}

pub fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

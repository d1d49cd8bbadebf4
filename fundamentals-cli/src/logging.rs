//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现按目标过滤的日志控制。
//! Log lines go to stderr; stdout carries only the report.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use fundamentals_config::Program;
use tracing_subscriber::{
    filter::Targets,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    Layer, Registry,
};

use crate::config::{LogConfig, CLI_TARGET};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// 日志输出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    #[default]
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// Per-target filter built from the log configuration
pub fn targets(log_config: &LogConfig) -> Targets {
    let env = Program::EnvReport.target();
    let types = Program::TypesDemo.target();
    Targets::new()
        .with_default(log_config.global)
        .with_target(env, log_config.level_for(env))
        .with_target(types, log_config.level_for(types))
        .with_target(CLI_TARGET, log_config.global)
}

/// 使用指定格式和日志配置初始化日志系统
///
/// With a file, every line is also appended to it in the same format, without ANSI colors.
pub fn init_with_file(log_config: &LogConfig, format: LogFormat, file: Option<File>) {
    let targets = targets(log_config);

    let mut layers: Vec<BoxedLayer> = vec![create_format_layer(format, io::stderr, true)
        .with_filter(targets.clone())
        .boxed()];
    if let Some(file) = file {
        layers.push(
            create_format_layer(format, Mutex::new(file), false)
                .with_filter(targets)
                .boxed(),
        );
    }

    tracing_subscriber::registry().with(layers).init();
}

/// Create formatter layer based on format
fn create_format_layer<M>(format: LogFormat, make_writer: M, ansi: bool) -> BoxedLayer
where
    M: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_ansi(ansi)
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_ansi(ansi)
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}

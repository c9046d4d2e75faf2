//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现按组件的日志控制。

use std::io;

use mms_config::Component;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crate::config::LogConfig;
use crate::CliError;

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

/// 由日志配置构建目标过滤器
pub fn targets(log_config: &LogConfig) -> Targets {
    Component::ALL
        .into_iter()
        .fold(Targets::new().with_default(log_config.global), |targets, c| {
            targets.with_target(c.target(), log_config.level_for(c))
        })
        .with_target("mms::cli", log_config.global)
}

/// 使用指定格式和日志配置初始化日志系统
///
/// 日志写到 stderr，指定文件时同时追加到文件。
pub fn init_with_file(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<&std::path::Path>,
) -> Result<(), CliError> {
    let targets = targets(log_config);

    if let Some(path) = file {
        let file_handle = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| CliError::Config {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let console_layer = create_format_layer(format, io::stderr).with_filter(targets.clone());
        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file_handle))
            .with_filter(targets);

        tracing_subscriber::registry()
            .with(console_layer)
            .with(file_layer)
            .init();
    } else {
        let console_layer = create_format_layer(format, io::stderr).with_filter(targets);
        tracing_subscriber::registry().with(console_layer).init();
    }
    Ok(())
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
    }
}

//! CLI 配置
//!
//! 日志配置（按组件的级别覆盖）以及从 JSON 文件读取的字符源配置

use std::path::Path;

use mms_config::{Component, SourceConfig};
use tracing::Level;

use crate::CliError;

/// CLI 日志配置
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub buffer: Option<Level>,
    pub tracker: Option<Level>,
    pub source: Option<Level>,
    pub stream: Option<Level>,
    pub token: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            buffer: None,
            tracker: None,
            source: None,
            stream: None,
            token: None,
        }
    }
}

impl LogConfig {
    /// 所有组件使用同一级别
    pub fn with_global(global: Level) -> Self {
        Self {
            global,
            ..Default::default()
        }
    }

    /// Get log level for a specific component
    pub fn level_for(&self, component: Component) -> Level {
        let specific = match component {
            Component::Buffer => self.buffer,
            Component::Tracker => self.tracker,
            Component::Source => self.source,
            Component::Stream => self.stream,
            Component::Token => self.token,
        };
        specific.unwrap_or(self.global)
    }

    /// 应用 `component=level` 形式的覆盖
    pub fn set_override(&mut self, spec: &str) -> Result<(), CliError> {
        let (name, level) = spec
            .split_once('=')
            .ok_or_else(|| CliError::Usage(format!("expected COMPONENT=LEVEL, got '{}'", spec)))?;
        let level: Level = level
            .parse()
            .map_err(|_| CliError::Usage(format!("unknown log level '{}'", level)))?;
        let component = Component::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .ok_or_else(|| CliError::Usage(format!("unknown component '{}'", name)))?;

        let slot = match component {
            Component::Buffer => &mut self.buffer,
            Component::Tracker => &mut self.tracker,
            Component::Source => &mut self.source,
            Component::Stream => &mut self.stream,
            Component::Token => &mut self.token,
        };
        *slot = Some(level);
        Ok(())
    }
}

/// 读取字符源配置（JSON），未指定文件时使用默认配置
pub fn load_source_config(path: Option<&Path>) -> Result<SourceConfig, CliError> {
    let Some(path) = path else {
        return Ok(SourceConfig::default());
    };

    let content = std::fs::read_to_string(path).map_err(|e| CliError::Config {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| CliError::Config {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

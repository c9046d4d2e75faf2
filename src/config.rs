//! 全局配置
//!
//! 进程级的默认字符源配置。未初始化时使用 `SourceConfig::default()`。
//!
//! # 使用示例
//! ```
//! use mms::config::{config, init};
//! use mms::{SourceConfig, WindowStrategy};
//!
//! let mut cfg = SourceConfig::default();
//! cfg.stream.window = WindowStrategy::SingleByte;
//!
//! init(cfg).unwrap();
//! assert_eq!(config().stream.window, WindowStrategy::SingleByte);
//! ```

use mms_config::SourceConfig;
use once_cell::sync::OnceCell;

static GLOBAL_CONFIG: OnceCell<SourceConfig> = OnceCell::new();

/// 初始化全局配置，只能成功一次
///
/// # Errors
/// 已经初始化（或已经以默认值被读取）时原样返回传入的配置
pub fn init(config: SourceConfig) -> Result<(), SourceConfig> {
    GLOBAL_CONFIG.set(config)
}

/// 获取全局配置引用，未初始化时固定为默认配置
pub fn config() -> &'static SourceConfig {
    GLOBAL_CONFIG.get_or_init(SourceConfig::default)
}

/// 检查配置是否已初始化
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

//! mms - 带行列号追踪的内存映射字符源
//!
//! 把文件映射进内存后逐字节读取，随时报告当前字节所在的行号和列号，
//! 支持回退、书签跳转和任意偏移定位。
//!
//! # Architecture
//!
//! ```text
//! mms-config/  - 纯配置数据（serde）
//! mms-buffer/  - 字节缓冲区：内存映射文件与内存数据
//! mms-core/    - 位置追踪、字符源、标准流适配、分词辅助
//! mms-cli/     - 命令行工具
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! use mms::open;
//!
//! let mut src = open("input.txt").unwrap();
//! while let Some(word) = src.read_word() {
//!     println!("{}:{} {}", src.line(), src.column(), word);
//! }
//! ```

pub mod config;

use std::path::Path;

pub use config::{config, init, is_initialized};
pub use mms_buffer::{ByteBuffer, MappedFile, MemoryBuffer, OpenError};
pub use mms_config::{Component, SourceConfig, StreamConfig, TokenConfig, WindowStrategy};
pub use mms_core::{
    is_space, Bookmark, CharacterSource, Extract, FormatErrorKind, PositionTracker, SourceError,
    SourcePosition, SourceResult, SourceSpan, SourceStream, Word,
};

/// 使用全局配置映射文件
///
/// # Example
/// ```no_run
/// let mut src = mms::open("input.txt")?;
/// let n: i32 = src.extract()?;
/// # Ok::<(), mms::SourceError>(())
/// ```
pub fn open(path: impl AsRef<Path>) -> SourceResult<CharacterSource> {
    CharacterSource::open_with_config(path, config().clone())
}

/// 使用全局配置映射文件并包装成标准流
pub fn open_stream(path: impl AsRef<Path>) -> SourceResult<SourceStream> {
    open(path).map(SourceStream::new)
}

/// 在内存数据上创建字符源（使用全局配置）
pub fn from_bytes(data: impl Into<Vec<u8>>) -> CharacterSource<MemoryBuffer> {
    CharacterSource::with_config(MemoryBuffer::new(data), config().clone())
}

//! mms Core - 位置追踪与字符源
//!
//! 为词法分析器、汇编器等前端工具提供逐字节读取的原语：
//! - `PositionTracker`：随读取/回退维护行列号，记录换行偏移与书签
//! - `CharacterSource`：在只读字节缓冲区上提供 get/peek/putback/seek
//! - `SourceStream`：把字符源适配为 `std::io::{Read, BufRead, Seek}`
//! - 分词辅助：跳过空白后读取单词、整数、单个字节
//!
//! 不做任何编码解码，UTF-8 内容按字节透明处理。

pub mod error;
pub mod kit;
pub mod source;
pub mod stream;
pub mod token;

pub use error::{FormatErrorKind, SourceError, SourceResult};
pub use kit::{Bookmark, PositionTracker, SourcePosition, SourceSpan};
pub use source::CharacterSource;
pub use stream::SourceStream;
pub use token::{is_space, Extract, Word};

// Re-export buffer and config types
pub use mms_buffer::{ByteBuffer, MappedFile, MemoryBuffer, OpenError};
pub use mms_config::{Component, SourceConfig, StreamConfig, TokenConfig, WindowStrategy};

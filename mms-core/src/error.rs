//! 字符源错误类型
//!
//! 三类错误：打开失败、越界（调用方误用）、格式错误（分词层，可恢复）。

use std::io;

use mms_buffer::OpenError;
use thiserror::Error;

/// 字符源操作结果
pub type SourceResult<T> = Result<T, SourceError>;

/// 字符源错误
#[derive(Debug, Error)]
pub enum SourceError {
    /// 文件无法打开或映射
    #[error(transparent)]
    Open(#[from] OpenError),

    /// 偏移超出 `[0, length]`
    #[error("offset {offset} out of range 0..={length}")]
    OutOfRange { offset: usize, length: usize },

    /// 在偏移 0 处回退
    #[error("cannot put back at the start of input")]
    PutbackAtStart,

    /// 分词失败
    #[error("[{line}:{column}] {kind}")]
    Format {
        kind: FormatErrorKind,
        line: usize,
        column: usize,
    },
}

/// 分词错误类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatErrorKind {
    #[error("expected at least one digit")]
    MissingDigits,

    #[error("integer does not fit the target type")]
    Overflow,

    #[error("unexpected end of input")]
    UnexpectedEof,
}

impl SourceError {
    /// 越界类错误（调用方误用）
    pub fn is_range(&self) -> bool {
        matches!(
            self,
            SourceError::OutOfRange { .. } | SourceError::PutbackAtStart
        )
    }

    /// 分词错误类型（如果是格式错误）
    pub fn format_kind(&self) -> Option<FormatErrorKind> {
        match self {
            SourceError::Format { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<SourceError> for io::Error {
    fn from(err: SourceError) -> Self {
        let kind = match &err {
            SourceError::Open(OpenError::NotFound { .. }) => io::ErrorKind::NotFound,
            SourceError::Open(OpenError::PermissionDenied { .. }) => {
                io::ErrorKind::PermissionDenied
            }
            SourceError::Open(_) => io::ErrorKind::Other,
            SourceError::OutOfRange { .. } | SourceError::PutbackAtStart => {
                io::ErrorKind::InvalidInput
            }
            SourceError::Format { .. } => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, err)
    }
}

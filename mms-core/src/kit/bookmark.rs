//! 书签：可复制的 (offset, line, column) 快照
//!
//! 书签与字符源没有所有权关系，跨源使用由调用方负责；
//! 字符源只会拒绝偏移越界的书签。

use super::position::SourcePosition;

/// 不可变的位置快照，用于 O(1) 恢复读取位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bookmark {
    position: SourcePosition,
}

impl Bookmark {
    /// # Arguments
    /// * `offset` - 字节偏移
    /// * `line` - 该偏移处的行号
    /// * `column` - 该偏移处的列号
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            position: SourcePosition::new(line, column, offset),
        }
    }

    pub fn offset(&self) -> usize {
        self.position.byte_offset
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    pub fn position(&self) -> SourcePosition {
        self.position
    }
}

impl From<SourcePosition> for Bookmark {
    fn from(position: SourcePosition) -> Self {
        Self { position }
    }
}

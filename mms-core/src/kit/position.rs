//! 源代码位置
//!
//! 两套坐标：
//! - line/column：人类可读的诊断信息（1-based，按字节计列）
//! - byte_offset：缓冲区寻址（0-based）

use std::fmt;

/// 源代码位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    /// 行号，1-based
    pub line: usize,
    /// 列号，1-based，字节计数
    pub column: usize,
    /// 字节偏移，0-based
    pub byte_offset: usize,
}

impl SourcePosition {
    /// 创建新位置
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// 文件起始位置
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            byte_offset: 0,
        }
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// 源代码区间（Span），`end` 为最后一个字节之后的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpan {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl SourceSpan {
    /// 空区间
    pub fn at(pos: SourcePosition) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// 合并两个位置为区间
    pub fn range(start: SourcePosition, end: SourcePosition) -> Self {
        Self { start, end }
    }

    /// 区间字节长度
    pub fn len(&self) -> usize {
        self.end.byte_offset.saturating_sub(self.start.byte_offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_start() {
        let pos = SourcePosition::start();
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.byte_offset, 0);
        assert_eq!(SourcePosition::default(), pos);
    }

    #[test]
    fn test_position_display() {
        let pos = SourcePosition::new(12, 4, 230);
        assert_eq!(pos.to_string(), "12:4");
    }

    #[test]
    fn test_span_len() {
        let start = SourcePosition::new(1, 1, 0);
        let end = SourcePosition::new(1, 6, 5);
        assert_eq!(SourceSpan::range(start, end).len(), 5);
        assert!(SourceSpan::at(start).is_empty());
    }
}

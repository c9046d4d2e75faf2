//! 行列号追踪器
//!
//! 顺序读取时增量维护 (line, column)，O(1)；
//! 任意跳转时用有序的换行偏移索引重建，O(log n + k)，从不重新扫描整个缓冲区。
//!
//! 列号约定：1-based，读入 `\n` 后重置为 1，`advance`/`retreat`/`seek_to` 统一使用。

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace, warn};

use super::bookmark::Bookmark;
use super::position::SourcePosition;
use crate::error::{SourceError, SourceResult};

/// 位置追踪器
///
/// 不持有字节数据，只根据调用方传入的字节推进或回退。
#[derive(Debug, Clone)]
pub struct PositionTracker {
    /// 当前位置
    position: SourcePosition,
    /// 正向遍历中见过的换行偏移
    newline_offsets: BTreeSet<usize>,
    /// 书签：offset -> (line, column)
    bookmarks: BTreeMap<usize, (usize, usize)>,
    /// 已建立换行索引的字节上界（不含）
    scanned: usize,
}

impl PositionTracker {
    /// 创建位于文件起始处的追踪器
    pub fn new() -> Self {
        Self {
            position: SourcePosition::start(),
            newline_offsets: BTreeSet::new(),
            bookmarks: BTreeMap::new(),
            scanned: 0,
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

    /// 当前位置（三个坐标一起）
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// 已记录的换行偏移（有序）
    pub fn newline_offsets(&self) -> &BTreeSet<usize> {
        &self.newline_offsets
    }

    /// 已建立换行索引的字节上界
    pub fn scanned(&self) -> usize {
        self.scanned
    }

    /// 书签数量
    pub fn bookmark_count(&self) -> usize {
        self.bookmarks.len()
    }

    /// 正向读入一个字节
    pub fn advance(&mut self, byte: u8) {
        let offset = self.position.byte_offset;

        if byte == b'\n' {
            self.newline_offsets.insert(offset);
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }

        // 只有连续推进才扩展索引上界，跳过的区间保持未索引
        if offset == self.scanned {
            self.scanned += 1;
        }
        self.position.byte_offset = offset + 1;
    }

    /// 回退最近读入的字节
    ///
    /// `byte` 必须是最近一次传给 `advance` 的字节。
    ///
    /// # Errors
    /// 偏移为 0 时返回 `SourceError::PutbackAtStart`
    pub fn retreat(&mut self, byte: u8) -> SourceResult<()> {
        if self.position.byte_offset == 0 {
            warn!(target: "mms::tracker", "Retreat requested at offset 0");
            return Err(SourceError::PutbackAtStart);
        }

        let offset = self.position.byte_offset - 1;
        self.position.byte_offset = offset;

        if byte == b'\n' {
            debug_assert!(self.position.line > 1, "retreat over a newline on line 1");
            self.position.line -= 1;
            self.position.column = self.column_at(offset);
        } else {
            debug_assert!(self.position.column > 1, "retreat past column 1");
            self.position.column -= 1;
        }

        Ok(())
    }

    /// 在当前位置添加书签
    ///
    /// 同时按偏移记录 (line, column)，之后按数字偏移 `seek_to` 也能直接命中。
    pub fn bookmark_here(&mut self) -> Bookmark {
        let pos = self.position;
        self.bookmarks.insert(pos.byte_offset, (pos.line, pos.column));
        debug!(
            target: "mms::tracker",
            offset = pos.byte_offset,
            line = pos.line,
            column = pos.column,
            "Bookmark added"
        );
        Bookmark::from(pos)
    }

    /// 跳转到任意偏移
    ///
    /// 命中书签时直接恢复，否则由换行索引重建。
    /// 偏移超出已索引区间时，结果只反映已见过的换行，调用方应先 `index_until`。
    pub fn seek_to(&mut self, offset: usize) {
        self.position = self.location_of(offset);
    }

    /// 跳转到书签，O(1)
    pub fn seek_to_bookmark(&mut self, bookmark: &Bookmark) {
        self.restore(bookmark.position());
    }

    /// 直接恢复到先前取得的位置快照（不写入书签表）
    pub fn restore(&mut self, position: SourcePosition) {
        self.position = position;
    }

    /// 查询任意偏移的位置，不修改状态
    pub fn location_of(&self, offset: usize) -> SourcePosition {
        if let Some(&(line, column)) = self.bookmarks.get(&offset) {
            return SourcePosition::new(line, column, offset);
        }

        trace!(target: "mms::tracker", offset, "Recomputing position from newline index");
        let line = 1 + self.newline_offsets.range(..offset).count();
        SourcePosition::new(line, self.column_at(offset), offset)
    }

    /// 为 `bytes[scanned..until]` 建立换行索引，不移动当前位置
    ///
    /// `bytes` 是从偏移 0 开始的完整缓冲区。每个字节在追踪器生命周期内最多被扫描一次。
    pub fn index_until(&mut self, bytes: &[u8], until: usize) {
        let end = until.min(bytes.len());
        if end <= self.scanned {
            return;
        }

        let start = self.scanned;
        self.newline_offsets.extend(
            bytes[start..end]
                .iter()
                .enumerate()
                .filter(|&(_, &b)| b == b'\n')
                .map(|(i, _)| start + i),
        );
        self.scanned = end;
        trace!(target: "mms::tracker", start, end, "Indexed newlines ahead of cursor");
    }

    /// `offset` 处的列号：距前一个换行的距离，没有换行时距文件开头
    fn column_at(&self, offset: usize) -> usize {
        match self.newline_offsets.range(..offset).next_back() {
            Some(&newline) => offset - newline,
            None => offset + 1,
        }
    }
}

impl Default for PositionTracker {
    fn default() -> Self {
        Self::new()
    }
}

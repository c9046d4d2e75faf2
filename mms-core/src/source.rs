//! 字符源
//!
//! 在只读字节缓冲区上提供逐字节读取，每次读取/回退/跳转都同步驱动位置追踪器，
//! 调用方可以随时拿到当前字节的 (line, column)。

use std::path::Path;

use mms_buffer::{ByteBuffer, MappedFile, MemoryBuffer};
use mms_config::SourceConfig;
use tracing::{debug, trace, warn};

use crate::error::{SourceError, SourceResult};
use crate::kit::{Bookmark, PositionTracker, SourcePosition};

/// 字符源
///
/// 独占一个字节缓冲区和一个位置追踪器，二者生命周期与字符源相同。
/// 偏移范围 `0..=len`，`len` 即 EOF 位置。
///
/// # Example
/// ```
/// use mms_core::CharacterSource;
///
/// let mut src = CharacterSource::from_bytes("ab\ncd\n");
/// assert_eq!(src.get(), Some(b'a'));
/// assert_eq!(src.get(), Some(b'b'));
/// assert_eq!((src.line(), src.column()), (1, 3));
/// ```
#[derive(Debug)]
pub struct CharacterSource<B = MappedFile> {
    buffer: B,
    tracker: PositionTracker,
    config: SourceConfig,
}

impl CharacterSource<MappedFile> {
    /// 映射文件并创建字符源
    ///
    /// # Errors
    /// 文件不存在、无权限、不是普通文件或映射失败时返回 `SourceError::Open`
    pub fn open(path: impl AsRef<Path>) -> SourceResult<Self> {
        Self::open_with_config(path, SourceConfig::default())
    }

    /// 映射文件并使用指定配置创建字符源
    pub fn open_with_config(path: impl AsRef<Path>, config: SourceConfig) -> SourceResult<Self> {
        let buffer = MappedFile::open(path)?;
        Ok(Self::with_config(buffer, config))
    }
}

impl CharacterSource<MemoryBuffer> {
    /// 从内存数据创建字符源
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self::new(MemoryBuffer::new(data))
    }
}

impl<B: ByteBuffer> CharacterSource<B> {
    /// 在已有缓冲区上创建字符源
    pub fn new(buffer: B) -> Self {
        Self::with_config(buffer, SourceConfig::default())
    }

    /// 在已有缓冲区上创建字符源（带配置）
    pub fn with_config(buffer: B, config: SourceConfig) -> Self {
        trace!(target: "mms::source", len = buffer.len(), "Creating character source");
        Self {
            buffer,
            tracker: PositionTracker::new(),
            config,
        }
    }

    /// 读取并消费一个字节，`None` 表示 EndOfInput
    pub fn get(&mut self) -> Option<u8> {
        let byte = self.buffer.bytes().get(self.tracker.offset()).copied()?;
        self.tracker.advance(byte);
        Some(byte)
    }

    /// 预读当前字节，不消费，不修改任何状态
    pub fn peek(&self) -> Option<u8> {
        self.buffer.bytes().get(self.tracker.offset()).copied()
    }

    /// 回退最近读取的字节
    ///
    /// 连续回退会按缓冲区逐字节向前走，只有与读取顺序一致时行列号才正确。
    ///
    /// # Errors
    /// 已在偏移 0 时返回 `SourceError::PutbackAtStart`
    pub fn putback(&mut self) -> SourceResult<()> {
        let offset = self.tracker.offset();
        if offset == 0 {
            warn!(target: "mms::source", "Putback requested at start of input");
            return Err(SourceError::PutbackAtStart);
        }
        let byte = self.buffer.bytes()[offset - 1];
        self.tracker.retreat(byte)
    }

    /// 是否还有可读字节
    pub fn is_live(&self) -> bool {
        self.tracker.offset() < self.buffer.len()
    }

    /// 在当前位置添加书签
    pub fn mark(&mut self) -> Bookmark {
        self.tracker.bookmark_here()
    }

    /// 跳转到书签，O(1)
    ///
    /// # Errors
    /// 书签偏移超出本字符源范围（通常来自别的字符源）时返回 `SourceError::OutOfRange`
    pub fn seek(&mut self, bookmark: &Bookmark) -> SourceResult<()> {
        self.check_range(bookmark.offset())?;
        debug!(target: "mms::source", offset = bookmark.offset(), "Seek to bookmark");
        self.tracker.index_until(self.buffer.bytes(), bookmark.offset());
        self.tracker.seek_to_bookmark(bookmark);
        Ok(())
    }

    /// 跳转到绝对偏移，行列号由书签或换行索引重建
    ///
    /// 向未读过的区域跳转时，先为中间字节建立换行索引（每个字节只扫描一次）。
    ///
    /// # Errors
    /// `offset > len` 时返回 `SourceError::OutOfRange`
    pub fn seek_to(&mut self, offset: usize) -> SourceResult<()> {
        self.check_range(offset)?;
        debug!(target: "mms::source", offset, "Seek to offset");
        self.tracker.index_until(self.buffer.bytes(), offset);
        self.tracker.seek_to(offset);
        Ok(())
    }

    /// 查询任意偏移的位置，不移动读取位置
    pub fn location_of(&mut self, offset: usize) -> SourceResult<SourcePosition> {
        self.check_range(offset)?;
        self.tracker.index_until(self.buffer.bytes(), offset);
        Ok(self.tracker.location_of(offset))
    }

    /// 块读取：复制最多 `out.len()` 个字节，逐字节驱动追踪器
    ///
    /// # Returns
    /// 实际读取的字节数，EOF 时为 0
    pub fn read_into(&mut self, out: &mut [u8]) -> usize {
        let start = self.tracker.offset();
        let n = out.len().min(self.buffer.len() - start);
        let chunk = &self.buffer.bytes()[start..start + n];
        out[..n].copy_from_slice(chunk);
        for &byte in chunk {
            self.tracker.advance(byte);
        }
        n
    }

    /// 消费最多 `n` 个字节，不复制
    ///
    /// # Returns
    /// 实际消费的字节数
    pub fn consume(&mut self, n: usize) -> usize {
        let start = self.tracker.offset();
        let n = n.min(self.buffer.len() - start);
        for &byte in &self.buffer.bytes()[start..start + n] {
            self.tracker.advance(byte);
        }
        n
    }

    /// 尚未读取的字节
    pub fn remaining(&self) -> &[u8] {
        &self.buffer.bytes()[self.tracker.offset()..]
    }

    pub fn offset(&self) -> usize {
        self.tracker.offset()
    }

    pub fn line(&self) -> usize {
        self.tracker.line()
    }

    pub fn column(&self) -> usize {
        self.tracker.column()
    }

    /// 当前位置（offset、line、column）
    pub fn position(&self) -> SourcePosition {
        self.tracker.position()
    }

    /// 缓冲区长度
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// 完整的字节视图
    pub fn bytes(&self) -> &[u8] {
        self.buffer.bytes()
    }

    pub fn tracker(&self) -> &PositionTracker {
        &self.tracker
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// 取回底层缓冲区
    pub fn into_buffer(self) -> B {
        self.buffer
    }

    /// 恢复到先前的位置快照（不写入书签表），供分词失败时回滚
    pub(crate) fn restore(&mut self, position: SourcePosition) {
        self.tracker.restore(position);
    }

    fn check_range(&self, offset: usize) -> SourceResult<()> {
        let length = self.buffer.len();
        if offset > length {
            warn!(target: "mms::source", offset, length, "Seek out of range");
            return Err(SourceError::OutOfRange { offset, length });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "ab\ncd\n";

    fn line_col<B: ByteBuffer>(src: &CharacterSource<B>) -> (usize, usize) {
        (src.line(), src.column())
    }

    #[test]
    fn test_consume_first_line() {
        let mut src = CharacterSource::from_bytes(SAMPLE);

        assert_eq!(src.get(), Some(b'a'));
        assert_eq!(src.get(), Some(b'b'));
        assert_eq!(line_col(&src), (1, 3));

        assert_eq!(src.get(), Some(b'\n'));
        assert_eq!(line_col(&src), (2, 1));
    }

    #[test]
    fn test_putback_after_newline() {
        let mut src = CharacterSource::from_bytes(SAMPLE);
        for _ in 0..4 {
            src.get();
        }
        assert_eq!(line_col(&src), (2, 2));

        src.putback().unwrap();
        assert_eq!(line_col(&src), (2, 1));
        assert_eq!(src.peek(), Some(b'c'));
    }

    #[test]
    fn test_putback_across_line_boundary() {
        let mut src = CharacterSource::from_bytes(SAMPLE);
        for _ in 0..3 {
            src.get();
        }

        src.putback().unwrap();
        assert_eq!(line_col(&src), (1, 3));
        assert_eq!(src.get(), Some(b'\n'));
        assert_eq!(line_col(&src), (2, 1));
    }

    #[test]
    fn test_bookmark_survives_further_reads() {
        let mut src = CharacterSource::from_bytes(SAMPLE);
        for _ in 0..3 {
            src.get();
        }
        let mark = src.mark();
        for _ in 0..3 {
            src.get();
        }

        src.seek_to(3).unwrap();
        assert_eq!(line_col(&src), (2, 1));
        assert_eq!(src.get(), Some(b'c'));

        src.seek(&mark).unwrap();
        assert_eq!(src.position(), mark.position());
    }

    #[test]
    fn test_seek_recomputes_without_bookmark() {
        let mut src = CharacterSource::from_bytes(SAMPLE);
        while src.get().is_some() {}

        src.seek_to(5).unwrap();
        assert_eq!(line_col(&src), (2, 3));
        assert_eq!(src.get(), Some(b'\n'));
    }

    #[test]
    fn test_mark_then_seek_is_noop() {
        let mut src = CharacterSource::from_bytes("x\nyz");
        src.get();
        src.get();
        src.get();
        let before = src.position();

        let mark = src.mark();
        src.seek(&mark).unwrap();
        assert_eq!(src.position(), before);
    }

    #[test]
    fn test_forward_seek_into_unread_region() {
        let mut src = CharacterSource::from_bytes("l1\nl2\nline3\n");

        src.seek_to(8).unwrap();
        assert_eq!(line_col(&src), (3, 3));
        assert_eq!(src.get(), Some(b'n'));

        src.seek_to(0).unwrap();
        assert_eq!(line_col(&src), (1, 1));
    }

    #[test]
    fn test_seek_out_of_range() {
        let mut src = CharacterSource::from_bytes("abc");
        src.get();

        let err = src.seek_to(4).unwrap_err();
        assert!(matches!(err, SourceError::OutOfRange { offset: 4, length: 3 }));
        assert_eq!(src.offset(), 1);

        // EOF 位置本身合法
        src.seek_to(3).unwrap();
        assert!(!src.is_live());
    }

    #[test]
    fn test_foreign_bookmark_rejected() {
        let mut long = CharacterSource::from_bytes("0123456789");
        long.seek_to(8).unwrap();
        let mark = long.mark();

        let mut short = CharacterSource::from_bytes("01");
        assert!(short.seek(&mark).unwrap_err().is_range());
    }

    #[test]
    fn test_putback_at_start() {
        let mut src = CharacterSource::from_bytes("a");
        assert!(matches!(src.putback(), Err(SourceError::PutbackAtStart)));
        assert_eq!(src.position(), SourcePosition::start());
    }

    #[test]
    fn test_eof_does_not_mutate() {
        let mut src = CharacterSource::from_bytes("a\n");
        src.get();
        src.get();
        let at_eof = src.position();

        assert_eq!(src.get(), None);
        assert_eq!(src.peek(), None);
        assert_eq!(src.get(), None);
        assert_eq!(src.position(), at_eof);
        assert!(!src.is_live());
    }

    #[test]
    fn test_empty_input() {
        let mut src = CharacterSource::from_bytes("");
        assert!(src.is_empty());
        assert!(!src.is_live());
        assert_eq!(src.get(), None);
        assert_eq!(src.peek(), None);
    }

    #[test]
    fn test_peek_matches_get() {
        let mut src = CharacterSource::from_bytes("xy");
        let peeked = src.peek();
        assert_eq!(src.position(), SourcePosition::start());
        assert_eq!(src.get(), peeked);
        assert_ne!(src.get(), peeked);
    }

    #[test]
    fn test_get_putback_roundtrip() {
        let text = "first line\nsecond\n\nfourth";
        let mut src = CharacterSource::from_bytes(text);
        src.consume(4);
        let start = src.position();

        let mut n = 0;
        while src.get().is_some() {
            n += 1;
        }
        for _ in 0..n {
            src.putback().unwrap();
        }
        assert_eq!(src.position(), start);
    }

    #[test]
    fn test_read_into_tracks_lines() {
        let mut src = CharacterSource::from_bytes("ab\ncd\nef");
        let mut out = [0u8; 5];

        assert_eq!(src.read_into(&mut out), 5);
        assert_eq!(&out, b"ab\ncd");
        assert_eq!(line_col(&src), (2, 3));

        assert_eq!(src.read_into(&mut out), 3);
        assert_eq!(&out[..3], b"\nef");
        assert_eq!(src.read_into(&mut out), 0);
    }

    #[test]
    fn test_consume_is_clamped() {
        let mut src = CharacterSource::from_bytes("abc");
        assert_eq!(src.consume(10), 3);
        assert_eq!(src.remaining(), b"");
        assert_eq!(line_col(&src), (1, 4));
    }

    #[test]
    fn test_location_of_does_not_move() {
        let mut src = CharacterSource::from_bytes("a\nb\nc");
        assert_eq!(src.location_of(4).unwrap(), SourcePosition::new(3, 1, 4));
        assert_eq!(src.position(), SourcePosition::start());
        assert!(src.location_of(6).is_err());
    }

    #[test]
    fn test_utf8_is_byte_transparent() {
        let mut src = CharacterSource::from_bytes("€\nx");
        assert_eq!(src.get(), Some(0xE2));
        src.consume(2);
        assert_eq!(line_col(&src), (1, 4));
        src.get();
        assert_eq!(line_col(&src), (2, 1));
    }

    #[test]
    fn test_open_mapped_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"hi\nthere").unwrap();
        file.flush().unwrap();

        let mut src = CharacterSource::open(file.path()).unwrap();
        assert_eq!(src.len(), 8);
        src.consume(3);
        assert_eq!(line_col(&src), (2, 1));
        assert_eq!(src.buffer().path(), file.path());
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CharacterSource::open(dir.path().join("missing.s")).unwrap_err();
        assert!(matches!(err, SourceError::Open(_)));
    }
}

//! 缓冲读取适配器
//!
//! 把 `CharacterSource` 包装成 `std::io::{Read, BufRead, Seek}`，
//! 供基于标准流的现有工具使用。块读取仍然逐字节驱动追踪器，行列号始终正确。

use std::io::{self, BufRead, Read, Seek, SeekFrom};
use std::path::Path;

use mms_buffer::{ByteBuffer, MappedFile};
use mms_config::WindowStrategy;
use tracing::trace;

use crate::error::{SourceError, SourceResult};
use crate::kit::SourcePosition;
use crate::source::CharacterSource;

/// 字符源的标准流视图
///
/// `fill_buf` 暴露的窗口由 `WindowStrategy` 决定：整个剩余文件，或单个字节。
///
/// # Example
/// ```
/// use std::io::BufRead;
/// use mms_core::{CharacterSource, SourceStream};
///
/// let mut stream = SourceStream::new(CharacterSource::from_bytes("one\ntwo\n"));
/// let mut line = String::new();
/// stream.read_line(&mut line).unwrap();
/// assert_eq!(line, "one\n");
/// assert_eq!((stream.line(), stream.column()), (2, 1));
/// ```
#[derive(Debug)]
pub struct SourceStream<B = MappedFile> {
    source: CharacterSource<B>,
    window: WindowStrategy,
}

impl SourceStream<MappedFile> {
    /// 映射文件并创建流
    pub fn open(path: impl AsRef<Path>) -> SourceResult<Self> {
        Ok(Self::new(CharacterSource::open(path)?))
    }
}

impl<B: ByteBuffer> SourceStream<B> {
    /// 使用字符源配置中的窗口策略
    pub fn new(source: CharacterSource<B>) -> Self {
        let window = source.config().stream.window;
        Self::with_window(source, window)
    }

    pub fn with_window(source: CharacterSource<B>, window: WindowStrategy) -> Self {
        trace!(target: "mms::stream", ?window, "Creating source stream");
        Self { source, window }
    }

    /// 放回一个字节
    ///
    /// 给出 `expected` 时先校验前一个字节，不一致则不移动并返回错误。
    ///
    /// # Returns
    /// 被放回的字节
    pub fn unget(&mut self, expected: Option<u8>) -> io::Result<u8> {
        let offset = self.source.offset();
        let previous = match offset.checked_sub(1) {
            Some(prev) => self.source.bytes()[prev],
            None => return Err(SourceError::PutbackAtStart.into()),
        };

        if let Some(expected) = expected {
            if expected != previous {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "put back mismatch at offset {}: expected 0x{:02X}, found 0x{:02X}",
                        offset - 1,
                        expected,
                        previous
                    ),
                ));
            }
        }

        self.source.putback()?;
        Ok(previous)
    }

    pub fn line(&self) -> usize {
        self.source.line()
    }

    pub fn column(&self) -> usize {
        self.source.column()
    }

    pub fn position(&self) -> SourcePosition {
        self.source.position()
    }

    pub fn window(&self) -> WindowStrategy {
        self.window
    }

    pub fn get_ref(&self) -> &CharacterSource<B> {
        &self.source
    }

    pub fn get_mut(&mut self) -> &mut CharacterSource<B> {
        &mut self.source
    }

    pub fn into_inner(self) -> CharacterSource<B> {
        self.source
    }
}

impl<B: ByteBuffer> Read for SourceStream<B> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.source.read_into(buf))
    }
}

impl<B: ByteBuffer> BufRead for SourceStream<B> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        let rest = self.source.remaining();
        Ok(match self.window {
            WindowStrategy::WholeFile => rest,
            WindowStrategy::SingleByte => &rest[..rest.len().min(1)],
        })
    }

    fn consume(&mut self, amt: usize) {
        self.source.consume(amt);
    }
}

impl<B: ByteBuffer> Seek for SourceStream<B> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let base = match pos {
            SeekFrom::Start(n) => {
                let offset = usize::try_from(n).map_err(|_| invalid_seek(pos))?;
                self.source.seek_to(offset)?;
                return Ok(n);
            }
            SeekFrom::Current(delta) => (self.source.offset(), delta),
            SeekFrom::End(delta) => (self.source.len(), delta),
        };

        let offset = i64::try_from(base.0)
            .ok()
            .and_then(|b| b.checked_add(base.1))
            .and_then(|o| usize::try_from(o).ok())
            .ok_or_else(|| invalid_seek(pos))?;
        self.source.seek_to(offset)?;
        Ok(offset as u64)
    }

    fn stream_position(&mut self) -> io::Result<u64> {
        Ok(self.source.offset() as u64)
    }
}

fn invalid_seek(pos: SeekFrom) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("invalid seek to a negative or overflowing position: {:?}", pos),
    )
}

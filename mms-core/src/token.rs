//! 分词辅助
//!
//! 只用 get/peek/is_live 以及位置快照实现的跳空白读取：单词、整数、单个字节。
//! 整数或字节读取失败时，字符源回滚到该词法单元的起点，调用方可以换一种方式重新读取。

use std::ops::Range;

use mms_buffer::ByteBuffer;
use tracing::debug;

use crate::error::{FormatErrorKind, SourceError, SourceResult};
use crate::kit::{SourcePosition, SourceSpan};
use crate::source::CharacterSource;

/// 空白字节（与 C 的 `isspace` 一致，含 `\v` `\f`）
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// 带位置的单词
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub span: SourceSpan,
}

/// 可从字符源中提取的值
///
/// 链式读取 `let n: i32 = src.extract()?;`
pub trait Extract: Sized {
    fn extract<B: ByteBuffer>(source: &mut CharacterSource<B>) -> SourceResult<Self>;
}

impl<B: ByteBuffer> CharacterSource<B> {
    /// 跳过空白
    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if is_space(b)) {
            self.get();
        }
    }

    /// 跳过空白后读取一个单词（直到下一个空白或 EOF）
    ///
    /// 没有剩余单词时返回 `None`。非法 UTF-8 按有损方式转换。
    pub fn read_word(&mut self) -> Option<String> {
        self.read_word_spanned().map(|word| word.text)
    }

    /// 跳过空白后读取一个单词，并附带起止位置
    pub fn read_word_spanned(&mut self) -> Option<Word> {
        let (range, span) = self.scan_word()?;
        let bytes = &self.bytes()[range];
        let mut text = String::with_capacity(self.config().token.word_capacity.max(bytes.len()));
        text.push_str(&String::from_utf8_lossy(bytes));
        Some(Word { text, span })
    }

    /// 跳过空白后读取一个单词，零拷贝返回映射区中的字节
    pub fn read_word_bytes(&mut self) -> Option<&[u8]> {
        let (range, _) = self.scan_word()?;
        Some(&self.bytes()[range])
    }

    /// 跳过空白后读取带可选符号（`-`/`+`）的十进制整数
    ///
    /// # Errors
    /// - `FormatErrorKind::MissingDigits`：符号后没有数字
    /// - `FormatErrorKind::Overflow`：超出目标类型范围
    pub fn read_int<T: TryFrom<i128>>(&mut self) -> SourceResult<T> {
        self.skip_whitespace();
        let start = self.position();

        let negative = match self.peek() {
            Some(b'-') => {
                self.get();
                true
            }
            Some(b'+') => {
                self.get();
                false
            }
            _ => false,
        };

        let mut value: i128 = 0;
        let mut digits = 0usize;
        let mut overflow = false;
        while let Some(b @ b'0'..=b'9') = self.peek() {
            self.get();
            digits += 1;
            let digit = i128::from(b - b'0');
            match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                Some(v) => value = v,
                None => overflow = true,
            }
        }

        if digits == 0 {
            return Err(self.format_error(FormatErrorKind::MissingDigits, start));
        }
        if overflow {
            return Err(self.format_error(FormatErrorKind::Overflow, start));
        }

        let value = if negative { -value } else { value };
        T::try_from(value).map_err(|_| self.format_error(FormatErrorKind::Overflow, start))
    }

    /// 跳过空白后读取一个字节
    ///
    /// # Errors
    /// 已无可读字节时返回 `FormatErrorKind::UnexpectedEof`
    pub fn read_char(&mut self) -> SourceResult<u8> {
        self.skip_whitespace();
        let start = self.position();
        self.get()
            .ok_or_else(|| self.format_error(FormatErrorKind::UnexpectedEof, start))
    }

    /// 提取一个值，见 [`Extract`]
    pub fn extract<T: Extract>(&mut self) -> SourceResult<T> {
        T::extract(self)
    }

    fn scan_word(&mut self) -> Option<(Range<usize>, SourceSpan)> {
        self.skip_whitespace();
        let start = self.position();
        while matches!(self.peek(), Some(b) if !is_space(b)) {
            self.get();
        }
        let end = self.position();
        if start.byte_offset == end.byte_offset {
            return None;
        }
        Some((
            start.byte_offset..end.byte_offset,
            SourceSpan::range(start, end),
        ))
    }

    /// 回滚到词法单元起点并构造格式错误
    fn format_error(&mut self, kind: FormatErrorKind, start: SourcePosition) -> SourceError {
        debug!(target: "mms::token", %kind, at = %start, "Token rejected");
        self.restore(start);
        SourceError::Format {
            kind,
            line: start.line,
            column: start.column,
        }
    }
}

impl Extract for String {
    fn extract<B: ByteBuffer>(source: &mut CharacterSource<B>) -> SourceResult<Self> {
        source.skip_whitespace();
        let start = source.position();
        match source.read_word() {
            Some(word) => Ok(word),
            None => Err(source.format_error(FormatErrorKind::UnexpectedEof, start)),
        }
    }
}

impl Extract for u8 {
    fn extract<B: ByteBuffer>(source: &mut CharacterSource<B>) -> SourceResult<Self> {
        source.read_char()
    }
}

macro_rules! impl_extract_int {
    ($($t:ty),*) => {
        $(
            impl Extract for $t {
                fn extract<B: ByteBuffer>(source: &mut CharacterSource<B>) -> SourceResult<Self> {
                    source.read_int::<$t>()
                }
            }
        )*
    };
}

impl_extract_int!(i8, i16, i32, i64, isize);

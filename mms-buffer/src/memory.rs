//! In-memory byte buffer

use crate::ByteBuffer;

/// Bytes owned in memory.
///
/// Suitable for tests and for input that never touched the disk.
///
/// # Example
/// ```
/// use mms_buffer::{ByteBuffer, MemoryBuffer};
///
/// let buffer = MemoryBuffer::from("ab\ncd\n");
/// assert_eq!(buffer.len(), 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryBuffer {
    data: Vec<u8>,
}

impl MemoryBuffer {
    /// Create a buffer owning `data`.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Give the bytes back.
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl ByteBuffer for MemoryBuffer {
    fn bytes(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for MemoryBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for MemoryBuffer {
    fn from(data: &[u8]) -> Self {
        Self::new(data)
    }
}

impl From<&str> for MemoryBuffer {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl From<String> for MemoryBuffer {
    fn from(text: String) -> Self {
        Self::new(text.into_bytes())
    }
}

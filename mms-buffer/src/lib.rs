//! mms Byte Buffers
//!
//! Read-only byte storage consumed by character sources.
//!
//! # Implementations
//! - `MappedFile`: a file mapped into memory with `memmap2`
//! - `MemoryBuffer`: bytes owned in memory (tests, generated input)
//!
//! # Usage
//! ```rust,ignore
//! use mms_buffer::{ByteBuffer, MappedFile};
//!
//! let file = MappedFile::open("input.asm")?;
//! println!("{} bytes", file.len());
//! ```

mod error;
mod mapped;
mod memory;
mod r#trait;

pub use error::{OpenError, OpenResult};
pub use mapped::MappedFile;
pub use memory::MemoryBuffer;
pub use r#trait::ByteBuffer;

/// Map a file into memory.
pub fn map_file(path: impl AsRef<std::path::Path>) -> OpenResult<MappedFile> {
    MappedFile::open(path)
}

/// Create an in-memory buffer.
pub fn memory(data: impl Into<Vec<u8>>) -> MemoryBuffer {
    MemoryBuffer::new(data)
}

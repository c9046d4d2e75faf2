//! ByteBuffer trait definition

/// Read-only byte buffer
///
/// Owns its storage for its whole lifetime and only ever lends immutable
/// views of it.
///
/// # Implementations
/// - `MappedFile`: memory-mapped file
/// - `MemoryBuffer`: owned in-memory bytes
pub trait ByteBuffer {
    /// All bytes of the buffer
    fn bytes(&self) -> &[u8];

    /// Length in bytes
    fn len(&self) -> usize {
        self.bytes().len()
    }

    /// Check if the buffer holds no bytes
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

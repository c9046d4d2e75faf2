//! Memory-mapped file buffer

use crate::error::{OpenError, OpenResult};
use crate::ByteBuffer;
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::trace;

/// A file mapped read-only into memory.
///
/// The mapping lives exactly as long as this value and is released on drop.
/// Zero-length files are not mapped at all and expose an empty slice.
///
/// # Example
/// ```no_run
/// use mms_buffer::{ByteBuffer, MappedFile};
///
/// let file = MappedFile::open("program.asm").unwrap();
/// let first_line = file.bytes().split(|b| *b == b'\n').next();
/// ```
#[derive(Debug)]
pub struct MappedFile {
    map: Option<Mmap>,
    path: PathBuf,
}

impl MappedFile {
    /// Open and map a file.
    ///
    /// # Arguments
    /// * `path` - File path
    ///
    /// # Returns
    /// The mapped file, or OpenError when the file is missing, unreadable,
    /// not a regular file, or cannot be mapped
    pub fn open(path: impl AsRef<Path>) -> OpenResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| OpenError::from_io(path, e))?;
        let metadata = file.metadata().map_err(|e| OpenError::from_io(path, e))?;

        if !metadata.is_file() {
            return Err(OpenError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let map = if metadata.len() == 0 {
            None
        } else {
            // SAFETY: the mapping is read-only and never handed out mutably;
            // the file is not truncated by this process while mapped.
            let map = unsafe { Mmap::map(&file) }.map_err(|source| OpenError::Map {
                path: path.to_path_buf(),
                source,
            })?;
            Some(map)
        };

        trace!(
            target: "mms::buffer",
            path = %path.display(),
            len = map.as_ref().map_or(0, |m| m.len()),
            "Mapped file"
        );

        Ok(Self {
            map,
            path: path.to_path_buf(),
        })
    }

    /// Path the file was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteBuffer for MappedFile {
    fn bytes(&self) -> &[u8] {
        match &self.map {
            Some(map) => &map[..],
            None => &[],
        }
    }
}

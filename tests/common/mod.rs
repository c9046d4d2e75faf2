//! 测试辅助工具
//!
//! 提供夹具文件路径和临时文件

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use mms::{CharacterSource, MappedFile};

/// 夹具文件路径（tests/data 下）
pub fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// 映射夹具文件
pub fn open_data(name: &str) -> CharacterSource<MappedFile> {
    let path = data_file(name);
    CharacterSource::open(&path)
        .unwrap_or_else(|e| panic!("cannot open fixture {}: {}", path.display(), e))
}

/// 写入临时文件，返回的句柄存活期间文件存在
pub fn temp_file(content: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(content).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

/// 当前 (line, column)
pub fn line_col(source: &CharacterSource<MappedFile>) -> (usize, usize) {
    (source.line(), source.column())
}

/// 逐字节读取，记录每个偏移处观察到的 (line, column)
pub fn positions_by_reading(source: &mut CharacterSource<MappedFile>) -> Vec<(usize, usize)> {
    let mut seen = vec![line_col(source)];
    while source.get().is_some() {
        seen.push(line_col(source));
    }
    seen
}

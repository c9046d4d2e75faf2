//! 位置追踪工具
//!
//! 纯数据结构，不做 I/O：
//! - `SourcePosition` / `SourceSpan`：位置与区间
//! - `Bookmark`：不可变的位置快照
//! - `PositionTracker`：行列号状态机

pub mod bookmark;
pub mod position;
pub mod tracker;

pub use bookmark::Bookmark;
pub use position::{SourcePosition, SourceSpan};
pub use tracker::PositionTracker;

//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和源码上下文打印。

use std::fmt::Write;

use crate::CliError;

/// 错误行前后显示的上下文行数
const CONTEXT_LINES: usize = 5;

/// 打印错误
pub fn print_error(e: &CliError) {
    eprintln!("Error: {}", e);
}

/// 打印源代码上下文（显示目标行前后几行）
pub fn print_source_context(source: &[u8], line: usize, column: usize) {
    eprint!("{}", format_source_context(source, line, column));
}

/// 格式化源代码上下文，行号越界时返回空串
///
/// 列号按字节计数，插入符对齐到目标字节。
pub fn format_source_context(source: &[u8], line: usize, column: usize) -> String {
    let text = String::from_utf8_lossy(source);
    let lines: Vec<&str> = text.split('\n').collect();
    let total_lines = lines.len();

    let mut out = String::new();
    if line == 0 || line > total_lines {
        return out;
    }

    let start_line = line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (line + CONTEXT_LINES).min(total_lines);
    let width = end_line.to_string().len();
    let separator = "-".repeat(width + 1);

    let _ = writeln!(out, "{}|--", separator);
    for line_idx in start_line..=end_line {
        let content = lines[line_idx - 1].trim_end_matches('\r');
        let _ = writeln!(out, "{:>width$} | {}", line_idx, content, width = width);

        if line_idx == line {
            let marker = " ".repeat(caret_offset(content, column));
            let _ = writeln!(out, "{:width$} | {}^", "", marker, width = width);
        }
    }
    let _ = writeln!(out, "{}|--", separator);
    out
}

/// 字节列号换算成显示宽度（每个字符一格）
fn caret_offset(content: &str, column: usize) -> usize {
    let byte_col = column.saturating_sub(1);
    content
        .char_indices()
        .take_while(|&(i, _)| i < byte_col)
        .count()
}

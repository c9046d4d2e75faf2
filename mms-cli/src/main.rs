//! mms CLI - Command line interface
//!
//! 对文件做按词扫描、偏移定位和统计，所有位置都以 line:column 报告。

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use mms_config::SourceConfig;
use mms_core::{CharacterSource, SourceError};
use thiserror::Error;
use tracing::{debug, Level};

mod config;
mod logging;
mod platform;

use crate::config::{load_source_config, LogConfig};
use crate::logging::LogFormat;
use crate::platform::{print_error, print_source_context};

/// CLI 错误
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("cannot load '{path}': {message}")]
    Config { path: String, message: String },

    #[error("{0}")]
    Usage(String),

    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Parser)]
#[command(
    name = "mms",
    about = "Inspect files through a memory-mapped character source",
    version
)]
struct Cli {
    /// Source configuration file (JSON)
    #[arg(long, global = true, value_name = "JSON")]
    config: Option<PathBuf>,

    /// Global log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: Level,

    /// Per-component log level, e.g. `tracker=trace` (repeatable)
    #[arg(long = "log", global = true, value_name = "COMPONENT=LEVEL")]
    log_overrides: Vec<String>,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Also append logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every whitespace-separated word with its line:column
    Scan { file: PathBuf },
    /// Print the line:column of a byte offset with surrounding lines
    Locate { file: PathBuf, offset: usize },
    /// Print byte and line counts
    Stats { file: PathBuf },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        print_error(&e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut log_config = LogConfig::with_global(cli.log_level);
    for spec in &cli.log_overrides {
        log_config.set_override(spec)?;
    }
    logging::init_with_file(&log_config, cli.log_format, cli.log_file.as_deref())?;

    let source_config = load_source_config(cli.config.as_deref())?;
    debug!(target: "mms::cli", ?source_config, "Configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Scan { file } => scan(&file, source_config, &mut out),
        Command::Locate { file, offset } => locate(&file, offset, source_config, &mut out),
        Command::Stats { file } => stats(&file, source_config, &mut out),
    }
}

/// 逐词输出 `line:column<TAB>word`
fn scan(path: &Path, config: SourceConfig, out: &mut impl Write) -> Result<(), CliError> {
    let mut source = CharacterSource::open_with_config(path, config)?;
    while let Some(word) = source.read_word_spanned() {
        writeln!(out, "{}\t{}", word.span.start, word.text)?;
    }
    Ok(())
}

/// 输出偏移所在的 `line:column`，并在 stderr 打印上下文
fn locate(
    path: &Path,
    offset: usize,
    config: SourceConfig,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut source = CharacterSource::open_with_config(path, config)?;
    let position = source.location_of(offset)?;
    writeln!(out, "{}:{}", path.display(), position)?;
    print_source_context(source.bytes(), position.line, position.column);
    Ok(())
}

/// 输出字节数和行数
fn stats(path: &Path, config: SourceConfig, out: &mut impl Write) -> Result<(), CliError> {
    let mut source = CharacterSource::open_with_config(path, config)?;
    let end = source.location_of(source.len())?;
    let newlines = source.tracker().newline_offsets().len();
    let words = std::iter::from_fn(|| source.read_word_bytes().map(|_| ())).count();

    writeln!(out, "bytes: {}", end.byte_offset)?;
    writeln!(out, "lines: {}", end.line)?;
    writeln!(out, "newlines: {}", newlines)?;
    writeln!(out, "words: {}", words)?;
    Ok(())
}

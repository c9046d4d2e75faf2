//! 集成测试 - 标准流适配

mod common;

use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};

use common::{data_file, open_data};
use mms::{SourceStream, WindowStrategy};

#[test]
fn test_lines_track_positions() {
    let mut stream = mms::open_stream(data_file("plain.txt")).unwrap();
    let mut line = String::new();
    let mut count = 0;

    while stream.read_line(&mut line).unwrap() > 0 {
        count += 1;
        assert_eq!((stream.line(), stream.column()), (count + 1, 1));
        line.clear();
    }
    assert_eq!(count, 4);
}

#[test]
fn test_single_byte_window_reads_same_lines() {
    let whole: Vec<String> =
        SourceStream::with_window(open_data("plain.txt"), WindowStrategy::WholeFile)
            .lines()
            .collect::<Result<_, _>>()
            .unwrap();
    let single: Vec<String> =
        SourceStream::with_window(open_data("plain.txt"), WindowStrategy::SingleByte)
            .lines()
            .collect::<Result<_, _>>()
            .unwrap();

    assert_eq!(whole, single);
    assert_eq!(whole[2], "  some indented,");
}

#[test]
fn test_read_to_string_matches_file() {
    let mut stream = SourceStream::new(open_data("utf8.txt"));
    let mut text = String::new();
    stream.read_to_string(&mut text).unwrap();

    assert_eq!(text, std::fs::read_to_string(data_file("utf8.txt")).unwrap());
    assert_eq!((stream.line(), stream.column()), (3, 1));
}

#[test]
fn test_seek_then_read() {
    let mut stream = SourceStream::new(open_data("plain.txt"));
    assert_eq!(stream.seek(SeekFrom::Start(34)).unwrap(), 34);
    assert_eq!((stream.line(), stream.column()), (2, 1));

    let mut buf = [0u8; 6];
    stream.read_exact(&mut buf).unwrap();
    assert_eq!(&buf, b"It has");
    assert_eq!(stream.column(), 7);

    let end = stream.seek(SeekFrom::End(0)).unwrap();
    assert_eq!(end, 92);
    assert_eq!(stream.read(&mut buf).unwrap(), 0);
}

#[test]
fn test_wrapped_in_std_bufreader() {
    let stream = SourceStream::new(open_data("numbers.txt"));
    let reader = BufReader::new(stream);
    let lines: Vec<String> = reader.lines().map(Result::unwrap).collect();

    assert_eq!(lines, vec!["12 -7 +30", "ld 255"]);
}

#[test]
fn test_unget_after_read() {
    let mut stream = SourceStream::new(open_data("numbers.txt"));
    let mut buf = [0u8; 10];
    stream.read_exact(&mut buf).unwrap();
    assert_eq!((stream.line(), stream.column()), (2, 1));

    assert_eq!(stream.unget(Some(b'\n')).unwrap(), b'\n');
    assert_eq!((stream.line(), stream.column()), (1, 10));
    assert!(stream.unget(Some(b'x')).is_err());
}

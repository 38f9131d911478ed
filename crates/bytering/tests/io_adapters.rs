#![allow(missing_docs)]

use std::io::{self, BufRead, Read, Write};

use bytering::{RingBuffer, RingBufferOptions};

#[test]
fn write_string_then_read_to_end() {
    let mut rb = RingBuffer::new(8);
    rb.write_all(b"helloworld").unwrap();
    assert_eq!(rb.capacity(), 16);

    let mut data = Vec::new();
    let n = rb.read_to_end(&mut data).unwrap();
    assert_eq!(n, 10);
    assert_eq!(data, b"helloworld");
}

#[test]
fn copy_through_the_buffer() {
    let mut src: &[u8] = b"line one\nline two\nline three\n";
    let mut rb = RingBuffer::new(8);
    let copied = io::copy(&mut src, &mut rb).unwrap();
    assert_eq!(copied, 29);

    let lines: Vec<String> = BufRead::lines(&mut rb).map(Result::unwrap).collect();
    assert_eq!(lines, ["line one", "line two", "line three"]);
    assert!(rb.is_empty());
}

#[test]
fn bounded_buffer_surfaces_write_zero() {
    let mut rb = RingBuffer::with_options(RingBufferOptions {
        initial_capacity: 8,
        max_capacity: Some(16),
    })
    .unwrap();
    rb.write_all(&[0u8; 16]).unwrap();

    let err = rb.write_all(b"!").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::WriteZero);
    assert_eq!(
        err.to_string(),
        "capacity exceeded: 17 bytes requested, maximum is 16"
    );
}

#[test]
fn read_exact_reports_eof() {
    let mut rb = RingBuffer::new(8);
    rb.write_all(b"abc").unwrap();
    let mut data = [0u8; 4];
    let err = rb.read_exact(&mut data).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
}

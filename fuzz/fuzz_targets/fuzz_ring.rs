#![no_main]
use std::collections::VecDeque;

use arbitrary::Arbitrary;
use bytering::{Error, RingBuffer, RingBufferOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Write(Vec<u8>),
    Read(u16),
    Consume(u16),
    Clear,
}

#[derive(Debug, Arbitrary)]
struct Input {
    initial_capacity: u16,
    /// Ceiling as a power-of-two exponent; `None` for unbounded.
    max_shift: Option<u8>,
    ops: Vec<Op>,
}

/// Drive the ring and a `VecDeque` model with the same operations and
/// require identical observable behavior.
fn run(input: Input) {
    let max_capacity = input.max_shift.map(|shift| 1usize << (shift % 20));
    let Ok(mut rb) = RingBuffer::with_options(RingBufferOptions {
        initial_capacity: usize::from(input.initial_capacity),
        max_capacity,
    }) else {
        return;
    };
    let mut model = VecDeque::new();

    for op in input.ops {
        match op {
            Op::Write(bytes) => match rb.write(&bytes) {
                Ok(n) => {
                    assert_eq!(n, bytes.len());
                    model.extend(bytes);
                }
                Err(Error::CapacityExceeded { requested, max }) => {
                    assert_eq!(Some(max), rb.max_capacity());
                    assert!(requested > max);
                    assert_eq!(requested, model.len() + bytes.len());
                }
                Err(err) => panic!("write failed: {err}"),
            },
            Op::Read(n) => {
                let mut dst = vec![0u8; usize::from(n)];
                let read = match rb.read(&mut dst) {
                    Ok(read) => read,
                    Err(Error::EndOfData { read }) => {
                        assert!(read < dst.len());
                        read
                    }
                    Err(err) => panic!("read failed: {err}"),
                };
                let expected: Vec<u8> = model.drain(..read).collect();
                assert_eq!(&dst[..read], &expected[..]);
            }
            Op::Consume(n) => {
                let skipped = rb.consume(usize::from(n));
                model.drain(..skipped);
            }
            Op::Clear => {
                rb.clear();
                model.clear();
            }
        }

        assert_eq!(rb.readable_bytes(), model.len());
        assert_eq!(rb.readable_bytes() + rb.writable_bytes(), rb.capacity());
        assert!(rb.capacity().is_power_of_two());
        if let Some(max) = rb.max_capacity() {
            assert!(rb.capacity() <= max);
        }
    }
}

fuzz_target!(|input: Input| run(input));

use alloc::{collections::VecDeque, vec, vec::Vec};

use quickcheck::QuickCheck;

use super::arbitrary::{Op, test_count};
use crate::{Error, RingBuffer};

/// Property: any interleaving of writes, reads, skips and clears behaves like
/// a `VecDeque<u8>` used as a FIFO.
#[test]
fn matches_vecdeque_model() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(initial: u8, ops: Vec<Op>) -> bool {
        let mut rb = RingBuffer::new(usize::from(initial));
        let mut model = VecDeque::<u8>::new();

        for op in ops {
            match op {
                Op::Write(bytes) => {
                    if rb.write(&bytes) != Ok(bytes.len()) {
                        return false;
                    }
                    model.extend(bytes.iter().copied());
                }
                Op::Read(n) => {
                    let mut dst = vec![0u8; n];
                    let expected: Vec<u8> = model.drain(..n.min(model.len())).collect();
                    let got = match rb.read(&mut dst) {
                        Ok(read) => {
                            if read != n {
                                return false;
                            }
                            read
                        }
                        Err(Error::EndOfData { read }) => {
                            if read >= n {
                                return false;
                            }
                            read
                        }
                        Err(_) => return false,
                    };
                    if dst[..got] != expected[..] {
                        return false;
                    }
                }
                Op::Consume(n) => {
                    let skipped = rb.consume(n);
                    if skipped != n.min(model.len()) {
                        return false;
                    }
                    model.drain(..skipped);
                }
                Op::Clear => {
                    rb.clear();
                    model.clear();
                }
            }

            if rb.readable_bytes() != model.len()
                || rb.readable_bytes() + rb.writable_bytes() != rb.capacity()
                || !rb.capacity().is_power_of_two()
            {
                return false;
            }
        }

        let (head, tail) = rb.as_slices();
        let (model_head, model_tail) = model.as_slices();
        [head, tail].concat() == [model_head, model_tail].concat()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(u8, Vec<Op>) -> bool);
}

/// Property: after writing `W` bytes and reading `R <= W`, exactly `W - R`
/// remain readable.
#[test]
fn readable_is_written_minus_read() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(chunks: Vec<(u8, u8)>) -> bool {
        let mut rb = RingBuffer::new(8);
        let mut written = 0usize;
        let mut read = 0usize;

        for (w, r) in chunks {
            let payload = vec![w; usize::from(w)];
            rb.write(&payload).unwrap();
            written += payload.len();

            let want = usize::from(r).min(rb.readable_bytes());
            let mut dst = vec![0u8; want];
            rb.read(&mut dst).unwrap();
            read += want;

            if rb.readable_bytes() != written - read {
                return false;
            }
        }
        true
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<(u8, u8)>) -> bool);
}

//! Growable byte ring.
//!
//! The backing array always has a power-of-two length so that wraparound is a
//! single AND with `mask`. Readable bytes start at `read_index` and run for
//! `len` bytes, wrapping past the end of the array if needed; the next write
//! lands at `write_index`.
//!
//! # Invariants
//! - `buf.len()` is a power of two and at least [`MIN_CAPACITY`].
//! - `mask == buf.len() - 1`.
//! - `read_index < buf.len()` and `write_index < buf.len()`.
//! - `len <= buf.len()` and `write_index == (read_index + len) & mask`.
//!
//! Equal indices are ambiguous between empty and full, so occupancy lives in
//! `len` and never gets derived from the indices.
//!
//! # Growth
//! A write that does not fit doubles the array until the readable bytes plus
//! the payload fit. Before the array is extended the readable bytes are
//! rotated to the front, so data that had wrapped stays in order and the new
//! free space is one contiguous run after it.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use bstr::BStr;

use crate::{
    error::{Error, Result},
    options::{MIN_CAPACITY, RingBufferOptions, round_capacity},
};

/// Largest power of two a `usize` can hold.
const MAX_CAPACITY: usize = 1 << (usize::BITS - 1);

/// A circular byte buffer that grows instead of rejecting writes.
///
/// Reads drain bytes in the order they were written. Writes never fail unless
/// a ceiling was configured through [`RingBufferOptions::max_capacity`].
///
/// The buffer is a plain single-owner value: every mutating method takes
/// `&mut self`. Share it across threads behind a `Mutex` if needed.
///
/// ```rust
/// use bytering::{Error, RingBuffer};
///
/// let mut rb = RingBuffer::new(8);
/// rb.write(b"hello").unwrap();
///
/// let mut out = [0u8; 8];
/// assert_eq!(rb.read(&mut out), Err(Error::EndOfData { read: 5 }));
/// assert_eq!(&out[..5], b"hello");
/// ```
#[derive(Clone)]
pub struct RingBuffer {
    buf: Vec<u8>,
    mask: usize,
    read_index: usize,
    write_index: usize,
    len: usize,
    max_capacity: Option<usize>,
}

impl RingBuffer {
    /// Creates an empty, unbounded buffer.
    ///
    /// The capacity is the least power of two not smaller than
    /// `requested_size`, with a floor of 8.
    #[must_use]
    pub fn new(requested_size: usize) -> Self {
        Self::allocate(round_capacity(requested_size), None)
    }

    /// Creates an empty buffer from `options`.
    ///
    /// # Errors
    /// Returns [`Error::CapacityExceeded`] if the rounded initial capacity is
    /// larger than the rounded `max_capacity`. The error reports the
    /// unrounded `initial_capacity`.
    pub fn with_options(options: RingBufferOptions) -> Result<Self> {
        let capacity = round_capacity(options.initial_capacity);
        let max_capacity = options.max_capacity.map(round_capacity);
        match max_capacity {
            Some(max) if capacity > max => Err(Error::CapacityExceeded {
                requested: options.initial_capacity,
                max,
            }),
            _ => Ok(Self::allocate(capacity, max_capacity)),
        }
    }

    fn allocate(capacity: usize, max_capacity: Option<usize>) -> Self {
        debug_assert!(capacity.is_power_of_two() && capacity >= MIN_CAPACITY);
        Self {
            buf: vec![0u8; capacity],
            mask: capacity - 1,
            read_index: 0,
            write_index: 0,
            len: 0,
            max_capacity,
        }
    }

    /// Length of the backing array.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Ceiling on [`capacity`](Self::capacity), if one was configured.
    #[must_use]
    pub fn max_capacity(&self) -> Option<usize> {
        self.max_capacity
    }

    /// Number of bytes available to read.
    #[must_use]
    pub fn readable_bytes(&self) -> usize {
        self.len
    }

    /// Number of bytes that can be written before the buffer has to grow.
    #[must_use]
    pub fn writable_bytes(&self) -> usize {
        self.buf.len() - self.len
    }

    /// True when nothing is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the readable bytes as up to two slices in logical order.
    ///
    /// The second slice is non-empty only when the data wraps past the end
    /// of the backing array.
    #[must_use]
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        if self.len == 0 {
            return (&[], &[]);
        }
        let start = self.read_index;
        let first = self.buf.len() - start;
        if self.len <= first {
            (&self.buf[start..start + self.len], &[])
        } else {
            (&self.buf[start..], &self.buf[..self.len - first])
        }
    }

    /// Appends `src`, growing the backing array if it does not fit.
    ///
    /// Returns `src.len()`. A zero-length write is a no-op, even on a full
    /// buffer.
    ///
    /// # Errors
    /// Only a bounded buffer can fail: [`Error::CapacityExceeded`] is
    /// returned when holding the existing bytes plus `src` would need more
    /// than the ceiling. Nothing is written in that case.
    pub fn write(&mut self, src: &[u8]) -> Result<usize> {
        if src.is_empty() {
            return Ok(0);
        }
        if self.writable_bytes() < src.len() {
            self.grow(self.len.saturating_add(src.len()))?;
        }

        let start = self.write_index;
        let first = (self.buf.len() - start).min(src.len());
        self.buf[start..start + first].copy_from_slice(&src[..first]);
        let rest = src.len() - first;
        if rest > 0 {
            self.buf[..rest].copy_from_slice(&src[first..]);
        }

        self.write_index = (start + src.len()) & self.mask;
        self.len += src.len();
        Ok(src.len())
    }

    /// Copies buffered bytes into `dst` and removes them from the buffer.
    ///
    /// Returns `Ok(dst.len())` when the destination was filled. An empty
    /// destination returns `Ok(0)` without looking at the buffer.
    ///
    /// # Errors
    /// [`Error::EndOfData`] when fewer than `dst.len()` bytes were buffered.
    /// The bytes that were available are still copied to the front of `dst`
    /// and consumed; the count in the error says how many.
    pub fn read(&mut self, dst: &mut [u8]) -> Result<usize> {
        if dst.is_empty() {
            return Ok(0);
        }
        let n = self.peek(dst);
        self.consume(n);
        if n < dst.len() {
            Err(Error::EndOfData { read: n })
        } else {
            Ok(n)
        }
    }

    /// Copies up to `dst.len()` buffered bytes into `dst` without consuming
    /// them. Returns the number copied.
    #[must_use]
    pub fn peek(&self, dst: &mut [u8]) -> usize {
        let n = dst.len().min(self.len);
        let (head, tail) = self.as_slices();
        let first = head.len().min(n);
        dst[..first].copy_from_slice(&head[..first]);
        dst[first..n].copy_from_slice(&tail[..n - first]);
        n
    }

    /// Discards up to `n` readable bytes. Returns the number discarded.
    pub fn consume(&mut self, n: usize) -> usize {
        let n = n.min(self.len);
        self.read_index = (self.read_index + n) & self.mask;
        self.len -= n;
        n
    }

    /// Empties the buffer.
    ///
    /// The backing array keeps its size and its old contents; the indices
    /// alone decide what is readable.
    pub fn clear(&mut self) {
        log::trace!(
            "clearing ring buffer: dropping {} of {} bytes",
            self.len,
            self.buf.len()
        );
        self.read_index = 0;
        self.write_index = 0;
        self.len = 0;
    }

    /// Grows the backing array until it holds at least `target` bytes.
    fn grow(&mut self, target: usize) -> Result<()> {
        let limit = self.max_capacity.unwrap_or(MAX_CAPACITY);
        if target > limit {
            return Err(Error::CapacityExceeded {
                requested: target,
                max: limit,
            });
        }

        let old_capacity = self.buf.len();
        let mut new_capacity = old_capacity << 1;
        while new_capacity < target {
            new_capacity <<= 1;
        }

        // Linearize first so wrapped bytes keep their order once the array
        // is longer.
        self.buf.rotate_left(self.read_index);
        self.buf.resize(new_capacity, 0);
        self.mask = new_capacity - 1;
        self.read_index = 0;
        self.write_index = self.len;

        log::debug!(
            "ring buffer grew from {old_capacity} to {new_capacity} bytes ({} readable)",
            self.len
        );
        Ok(())
    }
}

impl Default for RingBuffer {
    fn default() -> Self {
        Self::new(MIN_CAPACITY)
    }
}

impl fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (head, tail) = self.as_slices();
        f.debug_struct("RingBuffer")
            .field("capacity", &self.buf.len())
            .field("read_index", &self.read_index)
            .field("write_index", &self.write_index)
            .field("head", &BStr::new(head))
            .field("tail", &BStr::new(tail))
            .finish()
    }
}

//! A growable circular byte buffer for staging byte streams.
//!
//! [`RingBuffer`] keeps a power-of-two backing array and masks its indices
//! instead of dividing. Writes that do not fit grow the array; reads that
//! ask for more than is buffered return what there is along with
//! [`Error::EndOfData`].
//!
//! ```rust
//! use bytering::RingBuffer;
//!
//! let mut rb = RingBuffer::new(8);
//! rb.write(b"aaaaaa").unwrap();
//! rb.write(&[b'b'; 18]).unwrap();
//! assert_eq!(rb.capacity(), 32);
//!
//! let mut out = [0u8; 24];
//! rb.read(&mut out).unwrap();
//! assert_eq!(&out[..8], b"aaaaaabb");
//! ```
//!
//! With the default `std` feature the buffer also implements
//! [`std::io::Read`], [`std::io::Write`] and [`std::io::BufRead`].

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
#[cfg(feature = "std")]
mod io;
mod options;
mod ring;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use options::{MIN_CAPACITY, RingBufferOptions};
pub use ring::RingBuffer;

//! `std::io` adapters so a [`RingBuffer`] can sit between any reader and
//! writer.
//!
//! The std traits report end of data as `Ok(0)` rather than an error, so a
//! short read becomes a plain `Ok(n)` here.

use std::io;

use crate::{Error, RingBuffer};

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::EndOfData { .. } => io::Error::new(io::ErrorKind::UnexpectedEof, err),
            Error::CapacityExceeded { .. } => io::Error::new(io::ErrorKind::WriteZero, err),
        }
    }
}

impl io::Write for RingBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(RingBuffer::write(self, buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Read for RingBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match RingBuffer::read(self, buf) {
            Ok(n) | Err(Error::EndOfData { read: n }) => Ok(n),
            Err(err) => Err(err.into()),
        }
    }
}

impl io::BufRead for RingBuffer {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.as_slices().0)
    }

    fn consume(&mut self, amt: usize) {
        RingBuffer::consume(self, amt);
    }
}

use thiserror::Error;

/// Errors reported by [`RingBuffer`](crate::RingBuffer).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The read asked for more bytes than were buffered.
    ///
    /// Not a fault: `read` bytes were copied into the front of the
    /// destination and that count is authoritative.
    #[error("end of data after {read} bytes")]
    EndOfData {
        /// Bytes copied before the buffer ran dry.
        read: usize,
    },
    /// A write would have grown a bounded buffer past its ceiling.
    #[error("capacity exceeded: {requested} bytes requested, maximum is {max}")]
    CapacityExceeded {
        /// Bytes the buffer was asked to hold, before rounding.
        requested: usize,
        /// Configured ceiling.
        max: usize,
    },
}

impl Error {
    /// True for the short-read signal.
    #[must_use]
    pub fn is_end_of_data(&self) -> bool {
        matches!(self, Error::EndOfData { .. })
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

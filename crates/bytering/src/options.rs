/// Smallest backing array a [`RingBuffer`](crate::RingBuffer) will allocate.
pub const MIN_CAPACITY: usize = 8;

/// Construction options for a [`RingBuffer`](crate::RingBuffer).
///
/// # Examples
///
/// ```rust
/// use bytering::{RingBuffer, RingBufferOptions};
///
/// let rb = RingBuffer::with_options(RingBufferOptions {
///     initial_capacity: 100,
///     max_capacity: Some(1024),
/// })
/// .unwrap();
/// assert_eq!(rb.capacity(), 128);
/// assert_eq!(rb.max_capacity(), Some(1024));
/// ```
///
/// # Default
///
/// An 8 byte buffer with no ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RingBufferOptions {
    /// Requested starting capacity.
    ///
    /// Rounded up to the next power of two, and never below
    /// [`MIN_CAPACITY`].
    ///
    /// # Default
    ///
    /// `8`
    pub initial_capacity: usize,

    /// Upper bound on the backing array.
    ///
    /// When `Some`, the value is rounded up the same way as
    /// `initial_capacity` and writes that would need to grow past it fail
    /// with [`Error::CapacityExceeded`](crate::Error::CapacityExceeded)
    /// instead of allocating. `None` lets the buffer grow without limit.
    ///
    /// # Default
    ///
    /// `None`
    pub max_capacity: Option<usize>,
}

impl Default for RingBufferOptions {
    fn default() -> Self {
        Self {
            initial_capacity: MIN_CAPACITY,
            max_capacity: None,
        }
    }
}

/// Least power of two that is at least `requested`, never below
/// [`MIN_CAPACITY`].
///
/// Saturates at the largest representable power of two.
pub(crate) fn round_capacity(requested: usize) -> usize {
    let mut size = MIN_CAPACITY;
    while size < requested {
        match size.checked_mul(2) {
            Some(next) => size = next,
            None => break,
        }
    }
    size
}

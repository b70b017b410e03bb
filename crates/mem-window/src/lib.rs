#![no_std]
//! Raw byte access to a fixed memory-mapped window.
//!
//! A [`MemWindow`] is a pass-through to `len` bytes starting at a base
//! address, typically a peripheral or shared-RAM region. Accesses are
//! volatile and bounds-checked against the window; there is no locking,
//! no device addressing, and no transaction grouping — callers needing
//! those belong on the bus-device layer instead.

/// Errors surfaced by window accesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WindowError {
    /// `offset + length` leaves the configured window.
    OutOfWindow,
}

/// A fixed window of byte-addressable memory.
pub struct MemWindow {
    base: *mut u8,
    len: usize,
}

// SAFETY: The window is plain byte memory with no thread affinity; the
// constructor's contract makes the region valid from wherever the value
// is moved to.
unsafe impl Send for MemWindow {}

impl MemWindow {
    /// Create a window over `len` bytes starting at `base`.
    ///
    /// # Safety
    ///
    /// `base..base + len` must stay valid for volatile byte reads and
    /// writes for the lifetime of the returned value, and nothing else
    /// may create Rust references into the region while it exists. This
    /// is the single trust point; all later accesses only re-check the
    /// offset arithmetic.
    pub const unsafe fn new(base: *mut u8, len: usize) -> Self {
        Self { base, len }
    }

    /// Window length in bytes.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn check(&self, offset: usize, len: usize) -> Result<(), WindowError> {
        match offset.checked_add(len) {
            Some(end) if end <= self.len => Ok(()),
            _ => Err(WindowError::OutOfWindow),
        }
    }

    /// Fill `buf` from the window, starting at `offset`.
    pub fn read(
        &self,
        offset: usize,
        buf: &mut [u8],
    ) -> Result<(), WindowError> {
        self.check(offset, buf.len())?;
        for (i, slot) in buf.iter_mut().enumerate() {
            // SAFETY: offset + buf.len() was checked against the window,
            // and new() guarantees the window is valid for volatile reads.
            *slot = unsafe { self.base.add(offset + i).read_volatile() };
        }
        Ok(())
    }

    /// Copy `bytes` into the window, starting at `offset`.
    pub fn write(
        &mut self,
        offset: usize,
        bytes: &[u8],
    ) -> Result<(), WindowError> {
        self.check(offset, bytes.len())?;
        for (i, byte) in bytes.iter().enumerate() {
            // SAFETY: offset + bytes.len() was checked against the window,
            // and new() guarantees the window is valid for volatile writes.
            unsafe { self.base.add(offset + i).write_volatile(*byte) };
        }
        Ok(())
    }
}

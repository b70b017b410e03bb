use core::ops::Range;

use crate::error::DeviceError;

/// Resolve an optional `start`/`end` pair into a validated sub-region of a
/// buffer of `buffer_length` bytes.
///
/// An unspecified `end` means "to the end of the buffer". The result is
/// half-open (`start..end`). Fails with [`DeviceError::InvalidRegion`] when
/// the region does not fit the buffer and [`DeviceError::EmptyRegion`] when
/// it contains no bytes; a transfer of zero bytes is never meaningful on
/// the wire.
///
/// Pure. Every buffer-consuming operation in this crate resolves its
/// region here before touching the bus, so an invalid region can never
/// cause a partial transfer.
pub fn region(
    buffer_length: usize,
    start: usize,
    end: Option<usize>,
) -> Result<Range<usize>, DeviceError> {
    let end = end.unwrap_or(buffer_length);
    if end > buffer_length || start > end {
        return Err(DeviceError::InvalidRegion);
    }
    if start == end {
        return Err(DeviceError::EmptyRegion);
    }
    Ok(start..end)
}

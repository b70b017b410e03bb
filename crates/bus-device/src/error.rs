use crate::bus::Status;

/// Errors surfaced by device sessions.
///
/// The first two variants are caller-side region mistakes and are raised
/// before any transfer is attempted; `Transfer` carries a fault the
/// controller reported on the wire. Tests and callers can rely on the
/// distinction to tell a buggy call site from a wiring or device problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError {
    /// The requested sub-region does not fit inside the supplied buffer.
    InvalidRegion,
    /// The requested sub-region contains no bytes.
    EmptyRegion,
    /// `acquire()` was called while this session already held the bus.
    AlreadyLocked,
    /// A data operation was attempted without holding the bus.
    NotLocked,
    /// The controller reported a non-zero status; the raw code is
    /// preserved unchanged. No retry is attempted at this layer.
    Transfer(Status),
    /// A probe transfer was not acknowledged at the device address. Also
    /// reported for devices that are present but reject this style of
    /// probe; the two cases are not distinguishable from the status code.
    NotFound,
}

/// Raw controller status for one transfer.
///
/// Zero means the transfer completed; any other value is a
/// controller-specific fault code (address NACK, arbitration loss,
/// clock-stretch timeout). Codes are passed through to callers unchanged.
pub type Status = u8;

/// Status reported by a controller for a completed transfer.
pub const STATUS_OK: Status = 0;

/// Transfer primitive of an injected bus controller.
///
/// Implemented by whatever drives the physical bus; this crate never
/// constructs one. A controller instance is shared between sessions as
/// `embassy_sync::mutex::Mutex<M, B>`, which carries the lock/unlock side
/// of the bus contract.
#[allow(async_fn_in_trait)]
pub trait BusIo {
    /// Perform one transfer to the device at `address`.
    ///
    /// `write` sends the given bytes, `read` fills the given slice from
    /// the device; at least one of the two must be `Some`. Callers that
    /// need a write phase and a read phase observed as one exchange issue
    /// two calls while holding the bus mutex.
    async fn transfer(
        &mut self,
        address: u8,
        write: Option<&[u8]>,
        read: Option<&mut [u8]>,
    ) -> Status;
}

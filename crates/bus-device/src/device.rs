use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};

use crate::bounds::region;
use crate::bus::{BusIo, STATUS_OK};
use crate::error::DeviceError;

/// A session binding one logical device (shared bus + 7-bit address) to
/// the lock and transfer API.
///
/// The session is `Unlocked` on creation and moves between `Unlocked` and
/// `Locked` via [`acquire`](Self::acquire) / [`release`](Self::release)
/// for as long as it lives. While locked it owns the bus exclusively; two
/// sessions contending for the same bus never interleave their locked
/// regions. Data operations require the lock, so a register-select write
/// followed by a data read is observed by the device as one exchange.
///
/// Prefer [`transaction`](Self::transaction) over manual acquire/release:
/// the returned guard releases the bus on every exit path. Dropping a
/// locked session also releases the bus.
pub struct I2cDevice<'a, M: RawMutex, B: BusIo> {
    bus: &'a Mutex<M, B>,
    address: u8,
    guard: Option<MutexGuard<'a, M, B>>,
}

impl<'a, M: RawMutex, B: BusIo> I2cDevice<'a, M, B> {
    /// Create an unlocked session for the device at `address`.
    pub fn new(bus: &'a Mutex<M, B>, address: u8) -> Self {
        Self { bus, address, guard: None }
    }

    /// Create a session and probe for the device, failing with
    /// [`DeviceError::NotFound`] if nothing acknowledges the address.
    ///
    /// Devices that do not tolerate a bare one-byte read should be opened
    /// with [`new`](Self::new) instead and never probed.
    pub async fn probed(
        bus: &'a Mutex<M, B>,
        address: u8,
    ) -> Result<Self, DeviceError> {
        let mut device = Self::new(bus, address);
        device.probe().await?;
        Ok(device)
    }

    /// The device's 7-bit address.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Whether this session currently holds the bus.
    pub fn is_locked(&self) -> bool {
        self.guard.is_some()
    }

    /// Take exclusive ownership of the bus for this session.
    ///
    /// Waits (without timeout) until no other session holds the bus.
    /// Calling while already locked is caller misuse and fails with
    /// [`DeviceError::AlreadyLocked`] rather than silently succeeding.
    pub async fn acquire(&mut self) -> Result<(), DeviceError> {
        if self.guard.is_some() {
            return Err(DeviceError::AlreadyLocked);
        }
        self.guard = Some(self.bus.lock().await);
        Ok(())
    }

    /// Give the bus back. A no-op when not locked, so cleanup paths may
    /// call it unconditionally.
    pub fn release(&mut self) {
        self.guard = None;
    }

    /// Acquire the bus and return a guard that releases it when dropped.
    ///
    /// This is the intended way to run data operations: the release runs
    /// on normal exit, on `?` propagation, and on unwind alike, so a
    /// failed transfer can never leave the bus held.
    pub async fn transaction(
        &mut self,
    ) -> Result<Transaction<'_, 'a, M, B>, DeviceError> {
        self.acquire().await?;
        Ok(Transaction { device: self })
    }

    /// Read `end - start` bytes from the device into `buf[start..end]`.
    ///
    /// An unspecified `end` means the end of `buf`. Requires the lock.
    /// Region validation happens before the bus is touched.
    pub async fn read_into(
        &mut self,
        buf: &mut [u8],
        start: usize,
        end: Option<usize>,
    ) -> Result<(), DeviceError> {
        let span = region(buf.len(), start, end)?;
        let address = self.address;
        let bus = self.guard.as_mut().ok_or(DeviceError::NotLocked)?;
        let status = bus.transfer(address, None, Some(&mut buf[span])).await;
        if status != STATUS_OK {
            return Err(DeviceError::Transfer(status));
        }
        Ok(())
    }

    /// Write `bytes[start..end]` to the device.
    ///
    /// An unspecified `end` means the end of `bytes`. Requires the lock.
    /// Region validation happens before the bus is touched.
    pub async fn write(
        &mut self,
        bytes: &[u8],
        start: usize,
        end: Option<usize>,
    ) -> Result<(), DeviceError> {
        let span = region(bytes.len(), start, end)?;
        let address = self.address;
        let bus = self.guard.as_mut().ok_or(DeviceError::NotLocked)?;
        let status = bus.transfer(address, Some(&bytes[span]), None).await;
        if status != STATUS_OK {
            return Err(DeviceError::Transfer(status));
        }
        Ok(())
    }

    /// Write `out[out_start..out_end]`, then immediately read into
    /// `input[in_start..in_end]`, as one exchange.
    ///
    /// Both phases run under the lock this session already holds, so no
    /// other contender can address the device between them. Both regions
    /// are validated before the write phase goes out; a bad read region
    /// must not be discovered after the device has already been
    /// addressed. If the write phase fails the read phase is not
    /// attempted.
    pub async fn write_then_read(
        &mut self,
        out: &[u8],
        out_start: usize,
        out_end: Option<usize>,
        input: &mut [u8],
        in_start: usize,
        in_end: Option<usize>,
    ) -> Result<(), DeviceError> {
        let out_span = region(out.len(), out_start, out_end)?;
        let in_span = region(input.len(), in_start, in_end)?;
        let address = self.address;
        let bus = self.guard.as_mut().ok_or(DeviceError::NotLocked)?;

        let status = bus.transfer(address, Some(&out[out_span]), None).await;
        if status != STATUS_OK {
            return Err(DeviceError::Transfer(status));
        }
        let status = bus.transfer(address, None, Some(&mut input[in_span])).await;
        if status != STATUS_OK {
            return Err(DeviceError::Transfer(status));
        }
        Ok(())
    }

    /// Check that something acknowledges this session's address by
    /// attempting a one-byte read; the byte itself is discarded.
    ///
    /// Any non-zero status is reported as [`DeviceError::NotFound`] — a
    /// device that is present but rejects this probe style is not
    /// distinguishable from an absent one. Uses the held lock when the
    /// session is locked, otherwise brackets its own lock/unlock.
    pub async fn probe(&mut self) -> Result<(), DeviceError> {
        let mut scratch = [0u8; 1];
        let status = match self.guard.as_mut() {
            Some(bus) => {
                bus.transfer(self.address, None, Some(&mut scratch)).await
            }
            None => {
                let mut bus = self.bus.lock().await;
                bus.transfer(self.address, None, Some(&mut scratch)).await
            }
        };
        if status != STATUS_OK {
            return Err(DeviceError::NotFound);
        }
        Ok(())
    }
}

/// Scope guard for one locked exchange on the bus.
///
/// Created by [`I2cDevice::transaction`]; forwards the data operations and
/// releases the bus when dropped.
pub struct Transaction<'s, 'a, M: RawMutex, B: BusIo> {
    device: &'s mut I2cDevice<'a, M, B>,
}

impl<M: RawMutex, B: BusIo> Transaction<'_, '_, M, B> {
    /// See [`I2cDevice::read_into`].
    pub async fn read_into(
        &mut self,
        buf: &mut [u8],
        start: usize,
        end: Option<usize>,
    ) -> Result<(), DeviceError> {
        self.device.read_into(buf, start, end).await
    }

    /// See [`I2cDevice::write`].
    pub async fn write(
        &mut self,
        bytes: &[u8],
        start: usize,
        end: Option<usize>,
    ) -> Result<(), DeviceError> {
        self.device.write(bytes, start, end).await
    }

    /// See [`I2cDevice::write_then_read`].
    pub async fn write_then_read(
        &mut self,
        out: &[u8],
        out_start: usize,
        out_end: Option<usize>,
        input: &mut [u8],
        in_start: usize,
        in_end: Option<usize>,
    ) -> Result<(), DeviceError> {
        self.device
            .write_then_read(out, out_start, out_end, input, in_start, in_end)
            .await
    }

    /// See [`I2cDevice::probe`]. Runs on the lock this guard holds.
    pub async fn probe(&mut self) -> Result<(), DeviceError> {
        self.device.probe().await
    }

    /// End the exchange and release the bus now instead of at end of
    /// scope.
    pub fn release(self) {}
}

impl<M: RawMutex, B: BusIo> Drop for Transaction<'_, '_, M, B> {
    fn drop(&mut self) {
        self.device.release();
    }
}

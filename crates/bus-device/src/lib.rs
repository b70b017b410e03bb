#![no_std]
//! Transactional device access over a shared I2C-style bus.
//!
//! One physical bus is shared behind an `embassy-sync` mutex; each logical
//! device holds an [`I2cDevice`] session binding the bus to one target
//! address. A session locks the bus around one or more transfers, so a
//! multi-phase exchange (register select followed by a data read) reaches
//! the device without traffic from other contenders in between.

mod bounds;
mod bus;
mod device;
mod error;

pub use bounds::region;
pub use bus::{BusIo, Status, STATUS_OK};
pub use device::{I2cDevice, Transaction};
pub use error::DeviceError;

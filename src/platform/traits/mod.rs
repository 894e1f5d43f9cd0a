//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod bus;
pub mod i2c;
pub mod timer;

// Re-export trait interfaces
pub use bus::{BusDevice, BusManager, BusSpeed, BusType, DeviceHardware, DeviceOwner};
pub use i2c::{I2cConfig, I2cInterface};
pub use timer::TimerInterface;

//! Platform abstraction layer
//!
//! This module provides the hardware seams the gyro driver is written against:
//! raw I2C transfers, blocking delays, and register-level bus devices handed out by a
//! bus manager. Drivers never touch a HAL type directly.

pub mod bus;
pub mod error;
pub mod hal;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use bus::{BusDescriptor, I2cBusDevice, I2cBusManager};
pub use error::{I2cError, PlatformError, Result};
pub use traits::{
    BusDevice, BusManager, BusSpeed, BusType, DeviceHardware, DeviceOwner, I2cInterface,
    TimerInterface,
};

//! Bus device interface
//!
//! Register-level access to one device on a shared bus, and the manager that hands
//! those devices out. A driver asks the manager for "hardware X in slot N" and gets
//! back an owned [`BusDevice`] that already knows its bus, address and mounting
//! parameter.

use crate::platform::Result;

/// Physical bus type requested from a [`BusManager`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusType {
    /// Accept a device on any bus
    Any,
    /// I2C bus
    I2c,
    /// SPI bus
    Spi,
}

impl BusType {
    /// True if a device on `bus` satisfies this request
    pub fn accepts(self, bus: BusType) -> bool {
        self == BusType::Any || self == bus
    }
}

/// Hardware identifier used to look up a device descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceHardware {
    /// ST L3G4200D gyroscope
    L3g4200d,
}

/// Subsystem that owns a claimed device (diagnostics only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceOwner {
    /// Gyro/accelerometer subsystem
    Mpu,
}

/// Bus speed class
///
/// Drivers request a class, not a frequency; the bus implementation maps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusSpeed {
    /// Slow, tolerant speed used while probing freshly powered devices
    Initialization,
    /// Slow speed
    Slow,
    /// Standard operating speed
    #[default]
    Standard,
    /// Fast speed
    Fast,
    /// Fastest speed the bus supports
    Ultrafast,
}

/// Register-level access to one device on a bus
///
/// Every operation blocks until the transaction completes. An `Err` means the
/// transaction was not acknowledged or the bus failed; no retries happen here.
pub trait BusDevice {
    /// Change the bus speed used for this device
    fn set_speed(&mut self, speed: BusSpeed) -> Result<()>;

    /// Read one register
    fn read_register(&mut self, reg: u8) -> Result<u8>;

    /// Read `buf.len()` bytes starting at `reg`
    fn read_buf(&mut self, reg: u8, buf: &mut [u8]) -> Result<()>;

    /// Write one register
    fn write_register(&mut self, reg: u8, value: u8) -> Result<()>;

    /// Mounting parameter from the device descriptor (sensor alignment for IMUs)
    fn param(&self) -> u8;
}

/// Hands out exclusively owned [`BusDevice`]s
pub trait BusManager {
    /// Device type handed out by this manager
    type Device: BusDevice;

    /// Claim the device described by `hardware` and `tag`
    ///
    /// Returns `None` if no descriptor matches or the device is already claimed.
    fn device_init(
        &self,
        bus: BusType,
        hardware: DeviceHardware,
        tag: u8,
        owner: DeviceOwner,
    ) -> Option<Self::Device>;

    /// Release a claimed device so it can be claimed again
    ///
    /// A device that was not handed out by this manager is ignored.
    fn device_deinit(&self, device: Self::Device);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bus_type_accepts() {
        assert!(BusType::Any.accepts(BusType::I2c));
        assert!(BusType::Any.accepts(BusType::Spi));
        assert!(BusType::I2c.accepts(BusType::I2c));
        assert!(!BusType::Spi.accepts(BusType::I2c));
    }
}

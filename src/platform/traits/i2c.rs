//! I2C interface trait
//!
//! Raw, address-level I2C transfers. Register semantics live one layer up in
//! [`BusDevice`](super::BusDevice); this trait only moves bytes.

use crate::platform::Result;

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Bus frequency in Hz (typically 100_000 or 400_000)
    pub frequency: u32,
    /// Timeout in microseconds
    pub timeout_us: u32,
}

impl I2cConfig {
    /// Standard mode, 100 kHz
    pub const STANDARD_MODE_HZ: u32 = 100_000;
    /// Fast mode, 400 kHz
    pub const FAST_MODE_HZ: u32 = 400_000;
    /// Fast mode plus, 1 MHz
    pub const FAST_MODE_PLUS_HZ: u32 = 1_000_000;
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            frequency: Self::STANDARD_MODE_HZ,
            timeout_us: 1_000_000, // 1 second
        }
    }
}

/// I2C interface trait
///
/// All transfers are blocking: each call returns only once the transaction has
/// completed or failed.
///
/// # Safety Invariants
///
/// - Only one owner per I2C bus instance (share it through a bus manager)
/// - No concurrent access to the same I2C bus from multiple contexts
/// - Address must be 7-bit (valid range: 0x00..=0x7F)
pub trait I2cInterface {
    /// Write data to I2C device
    ///
    /// START - ADDR(W) - DATA - STOP
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::I2c` if the device does not acknowledge, a bus error
    /// occurs, or the timeout expires.
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()>;

    /// Read data from I2C device
    ///
    /// START - ADDR(R) - DATA - STOP
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::I2c` on NACK, bus error or timeout.
    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()>;

    /// Write then read from I2C device with a repeated START
    ///
    /// START - ADDR(W) - WRITE_DATA - REPEATED_START - ADDR(R) - READ_DATA - STOP
    ///
    /// Used to send a register address and read back its contents.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::I2c` on NACK, bus error or timeout.
    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()>;

    /// Set I2C bus frequency
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` if the frequency cannot be achieved.
    fn set_frequency(&mut self, frequency: u32) -> Result<()>;
}

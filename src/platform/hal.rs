//! embedded-hal adapters
//!
//! Wraps any `embedded-hal` 1.0 blocking I2C bus and delay provider so they can be
//! handed to [`I2cBusManager`](super::I2cBusManager) and the gyro driver.
//!
//! # Example
//!
//! ```ignore
//! use core::cell::RefCell;
//! use l3g4200d::platform::hal::{HalI2c, HalTimer};
//! use l3g4200d::platform::traits::I2cConfig;
//!
//! // `i2c` is any embedded_hal::i2c::I2c, `delay` any embedded_hal::delay::DelayNs
//! let bus = RefCell::new(HalI2c::new(i2c, I2cConfig::default()));
//! let mut timer = HalTimer::new(delay);
//! ```

use crate::platform::{
    error::{I2cError, PlatformError},
    traits::{I2cConfig, I2cInterface, TimerInterface},
    Result,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error as _, ErrorKind, I2c};

/// I2C interface over an `embedded-hal` blocking bus
///
/// `embedded-hal` cannot change the clock of a running bus, so
/// [`set_frequency`](I2cInterface::set_frequency) only records the request. Build
/// the peripheral at 100 kHz so sensor detection runs at initialization speed.
pub struct HalI2c<T> {
    i2c: T,
    config: I2cConfig,
}

impl<T: I2c> HalI2c<T> {
    /// Wrap an initialized bus
    ///
    /// The bus frequency is fixed when the HAL peripheral is created; `config`
    /// records it for diagnostics.
    pub fn new(i2c: T, config: I2cConfig) -> Self {
        Self { i2c, config }
    }

    /// Last requested frequency
    pub fn frequency(&self) -> u32 {
        self.config.frequency
    }

    /// Return the wrapped bus
    pub fn release(self) -> T {
        self.i2c
    }
}

impl<T: I2c> I2cInterface for HalI2c<T> {
    fn write(&mut self, addr: u8, data: &[u8]) -> Result<()> {
        self.i2c
            .write(addr, data)
            .map_err(|e| map_error_kind(e.kind()))
    }

    fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<()> {
        self.i2c
            .read(addr, buffer)
            .map_err(|e| map_error_kind(e.kind()))
    }

    fn write_read(&mut self, addr: u8, write_data: &[u8], read_buffer: &mut [u8]) -> Result<()> {
        self.i2c
            .write_read(addr, write_data, read_buffer)
            .map_err(|e| map_error_kind(e.kind()))
    }

    fn set_frequency(&mut self, frequency: u32) -> Result<()> {
        if frequency == 0 {
            return Err(PlatformError::InvalidConfig);
        }
        if frequency != self.config.frequency {
            crate::log_debug!(
                "I2C: {} Hz requested, bus clock unchanged (fixed by HAL)",
                frequency
            );
        }
        self.config.frequency = frequency;
        Ok(())
    }
}

/// Map embedded-hal I2C errors to platform I2C errors
fn map_error_kind(kind: ErrorKind) -> PlatformError {
    match kind {
        ErrorKind::NoAcknowledge(_) => PlatformError::I2c(I2cError::Nack),
        ErrorKind::ArbitrationLoss => PlatformError::I2c(I2cError::ArbitrationLost),
        _ => PlatformError::I2c(I2cError::BusError),
    }
}

/// Timer over an `embedded-hal` delay provider
///
/// `now_us` reports the time spent inside delays issued through this timer.
pub struct HalTimer<D> {
    delay: D,
    elapsed_us: u64,
}

impl<D: DelayNs> HalTimer<D> {
    /// Wrap a delay provider
    pub fn new(delay: D) -> Self {
        Self {
            delay,
            elapsed_us: 0,
        }
    }
}

impl<D: DelayNs> TimerInterface for HalTimer<D> {
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
        self.elapsed_us = self.elapsed_us.wrapping_add(us as u64);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
        self.elapsed_us = self.elapsed_us.wrapping_add(ms as u64 * 1000);
    }

    fn now_us(&self) -> u64 {
        self.elapsed_us
    }
}

/// Blocking timer backed by the embassy time driver
#[cfg(feature = "embassy")]
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyTimer;

#[cfg(feature = "embassy")]
impl TimerInterface for EmbassyTimer {
    fn delay_us(&mut self, us: u32) {
        embassy_time::block_for(embassy_time::Duration::from_micros(us as u64));
    }

    fn now_us(&self) -> u64 {
        embassy_time::Instant::now().as_micros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorType, NoAcknowledgeSource, Operation};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct FakeError(ErrorKind);

    impl embedded_hal::i2c::Error for FakeError {
        fn kind(&self) -> ErrorKind {
            self.0
        }
    }

    /// Bus that answers every read with `fill` or fails with `fail`
    struct FakeBus {
        fill: u8,
        fail: Option<ErrorKind>,
        writes: std::vec::Vec<u8>,
    }

    impl ErrorType for FakeBus {
        type Error = FakeError;
    }

    impl I2c for FakeBus {
        fn transaction(
            &mut self,
            _address: u8,
            operations: &mut [Operation<'_>],
        ) -> core::result::Result<(), Self::Error> {
            if let Some(kind) = self.fail {
                return Err(FakeError(kind));
            }
            for op in operations {
                match op {
                    Operation::Read(buf) => buf.fill(self.fill),
                    Operation::Write(data) => self.writes.extend_from_slice(*data),
                }
            }
            Ok(())
        }
    }

    struct CountingDelay {
        total_ns: u64,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += ns as u64;
        }
    }

    #[test]
    fn test_hal_i2c_write_read() {
        let bus = FakeBus {
            fill: 0xD3,
            fail: None,
            writes: std::vec::Vec::new(),
        };
        let mut i2c = HalI2c::new(bus, I2cConfig::default());

        let mut buf = [0u8; 2];
        i2c.write_read(0x68, &[0x0F], &mut buf).unwrap();
        assert_eq!(buf, [0xD3, 0xD3]);
        assert_eq!(i2c.release().writes, vec![0x0F]);
    }

    #[test]
    fn test_hal_i2c_maps_errors() {
        let cases = [
            (
                ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address),
                I2cError::Nack,
            ),
            (ErrorKind::ArbitrationLoss, I2cError::ArbitrationLost),
            (ErrorKind::Bus, I2cError::BusError),
            (ErrorKind::Overrun, I2cError::BusError),
        ];

        for (kind, expected) in cases {
            let bus = FakeBus {
                fill: 0,
                fail: Some(kind),
                writes: std::vec::Vec::new(),
            };
            let mut i2c = HalI2c::new(bus, I2cConfig::default());
            assert_eq!(i2c.write(0x68, &[0x20]), Err(PlatformError::I2c(expected)));
        }
    }

    #[test]
    fn test_hal_i2c_set_frequency_records_value() {
        let bus = FakeBus {
            fill: 0,
            fail: None,
            writes: std::vec::Vec::new(),
        };
        let mut i2c = HalI2c::new(bus, I2cConfig::default());
        i2c.set_frequency(400_000).unwrap();
        assert_eq!(i2c.frequency(), 400_000);
        assert_eq!(i2c.set_frequency(0), Err(PlatformError::InvalidConfig));

        // Recorded only: nothing reaches the bus
        assert!(i2c.release().writes.is_empty());
    }

    #[test]
    fn test_hal_timer_tracks_elapsed() {
        let mut timer = HalTimer::new(CountingDelay { total_ns: 0 });
        timer.delay_ms(150);
        timer.delay_us(250);

        assert_eq!(timer.now_us(), 150_250);
        assert_eq!(timer.delay.total_ns, 150_250_000);
    }
}

//! ST L3G4200D three-axis gyroscope driver
//!
//! I2C driver for the L3G4200D. The sensor is always run at 2000 dps full scale;
//! the only runtime choice is the hardware low-pass filter.
//!
//! # Lifecycle
//!
//! 1. [`L3g4200dDriver::detect`] claims the bus device and probes WHO_AM_I
//! 2. [`GyroDevice::init`](crate::devices::traits::GyroDevice::init) powers the
//!    sensor on with the configured bandwidth
//! 3. [`GyroDevice::read`](crate::devices::traits::GyroDevice::read) fetches raw
//!    X/Y/Z samples
//!
//! # Example
//!
//! ```ignore
//! use l3g4200d::devices::gyro::l3g4200d::{BusProbe, L3g4200dConfig, L3g4200dDriver};
//! use l3g4200d::devices::traits::GyroDevice;
//!
//! let config = L3g4200dConfig::from_lpf_code(2);
//! let mut gyro = L3g4200dDriver::detect(&manager, BusProbe::default(), config, &mut timer)?;
//! gyro.init(&mut timer)?;
//! let [x, y, z] = gyro.read()?;
//! ```

mod config;
mod driver;
pub mod registers;

pub use config::{L3g4200dConfig, LowPassFilter};
pub use driver::{
    BusProbe, L3g4200dDriver, DETECT_ATTEMPTS, DETECT_RETRY_DELAY_MS, INIT_SETTLE_DELAY_MS,
    POWER_ON_DELAY_MS,
};
pub use registers::{L3G4200D_ADDR, L3G4200D_WHO_AM_I_VALUE};

use crate::devices::traits::SensorAlign;
use crate::platform::{BusDescriptor, DeviceHardware};

/// Bus descriptor for an L3G4200D at its fixed address
///
/// `tag` selects the IMU slot, `align` is stored as the descriptor parameter and
/// picked up by the driver at detection time.
pub const fn bus_descriptor(tag: u8, align: SensorAlign) -> BusDescriptor {
    BusDescriptor::new(DeviceHardware::L3g4200d, tag, L3G4200D_ADDR, align as u8)
}

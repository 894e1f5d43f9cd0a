//! Gyroscope drivers
//!
//! - `l3g4200d`: ST L3G4200D over I2C
//!
//! [`boot_gyro`] is the boot-time policy shared by all gyro drivers: it runs
//! `init` once and escalates fatal configuration failures to a [`FaultReporter`].

pub mod l3g4200d;

pub use l3g4200d::{BusProbe, L3g4200dConfig, L3g4200dDriver, LowPassFilter};

use crate::core::FaultReporter;
use crate::devices::traits::{GyroDevice, GyroError};
use crate::platform::TimerInterface;

/// Initialize a detected gyro, reporting fatal failures
///
/// A `GyroError::InitFailed` is handed to `reporter` before it is returned. All
/// other outcomes are passed through unchanged.
pub fn boot_gyro<G, T, F>(gyro: &mut G, timer: &mut T, reporter: &mut F) -> Result<(), GyroError>
where
    G: GyroDevice,
    T: TimerInterface,
    F: FaultReporter,
{
    match gyro.init(timer) {
        Err(GyroError::InitFailed(reason)) => {
            crate::log_error!("Gyro init failed: {:?}", reason);
            reporter.failure_mode(reason);
            Err(GyroError::InitFailed(reason))
        }
        other => other,
    }
}

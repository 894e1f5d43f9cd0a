//! Gyro Sensor Trait and Data Types
//!
//! Device-independent interface for raw-sample gyroscopes. A detected driver binds
//! its init and read operations through [`GyroDevice`]; the consumer sees only raw
//! samples plus the two constants it needs for conversion (scale and alignment).
//!
//! ## Usage
//!
//! ```ignore
//! use l3g4200d::devices::traits::GyroDevice;
//!
//! fn sample<G: GyroDevice>(gyro: &mut G) -> Option<[f32; 3]> {
//!     let raw = gyro.read().ok()?;
//!     let scale = gyro.scale();
//!     Some([raw[0] as f32 * scale, raw[1] as f32 * scale, raw[2] as f32 * scale])
//! }
//! ```

use crate::core::FailureMode;
use crate::platform::{PlatformError, TimerInterface};
use core::fmt;

/// Gyro error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GyroError {
    /// No bus device could be acquired for this sensor
    BusUnavailable,

    /// Identity probe never matched; the sensor is not on this bus
    NotDetected,

    /// A single bus transaction failed
    Bus(PlatformError),

    /// Configuration failed in a way the boot sequence must treat as fatal
    InitFailed(FailureMode),
}

impl GyroError {
    /// True for the "device absent" outcomes of detection
    ///
    /// These are negative results, not faults: the caller should try the next
    /// driver or sensor slot.
    pub fn is_absent(&self) -> bool {
        matches!(self, GyroError::BusUnavailable | GyroError::NotDetected)
    }

    /// True if this error must stop the boot sequence
    pub fn is_fatal(&self) -> bool {
        matches!(self, GyroError::InitFailed(_))
    }
}

impl From<PlatformError> for GyroError {
    fn from(e: PlatformError) -> Self {
        GyroError::Bus(e)
    }
}

impl fmt::Display for GyroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GyroError::BusUnavailable => write!(f, "Bus device unavailable"),
            GyroError::NotDetected => write!(f, "Gyro not detected"),
            GyroError::Bus(e) => write!(f, "Bus transaction failed: {}", e),
            GyroError::InitFailed(reason) => write!(f, "Gyro init failed: {}", reason),
        }
    }
}

/// Sensor mounting orientation
///
/// Copied from the bus descriptor at detection time. The driver only carries the
/// tag; rotating samples into the body frame is the consumer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorAlign {
    /// Board default orientation
    #[default]
    Default = 0,
    /// Rotated 0° clockwise
    Cw0Deg = 1,
    /// Rotated 90° clockwise
    Cw90Deg = 2,
    /// Rotated 180° clockwise
    Cw180Deg = 3,
    /// Rotated 270° clockwise
    Cw270Deg = 4,
    /// Rotated 0° clockwise, upside down
    Cw0DegFlip = 5,
    /// Rotated 90° clockwise, upside down
    Cw90DegFlip = 6,
    /// Rotated 180° clockwise, upside down
    Cw180DegFlip = 7,
    /// Rotated 270° clockwise, upside down
    Cw270DegFlip = 8,
}

impl SensorAlign {
    /// Descriptor parameter encoding this orientation
    pub fn as_param(self) -> u8 {
        self as u8
    }

    /// Decode a descriptor parameter; unknown values map to `Default`
    pub fn from_param(param: u8) -> Self {
        match param {
            1 => SensorAlign::Cw0Deg,
            2 => SensorAlign::Cw90Deg,
            3 => SensorAlign::Cw180Deg,
            4 => SensorAlign::Cw270Deg,
            5 => SensorAlign::Cw0DegFlip,
            6 => SensorAlign::Cw90DegFlip,
            7 => SensorAlign::Cw180DegFlip,
            8 => SensorAlign::Cw270DegFlip,
            _ => SensorAlign::Default,
        }
    }
}

/// Device-independent raw gyro interface
pub trait GyroDevice {
    /// Configure the sensor into its operating mode
    ///
    /// Must be called after detection and before the first read. Calling it again
    /// rewrites the same configuration.
    fn init<T: TimerInterface>(&mut self, timer: &mut T) -> Result<(), GyroError>;

    /// Fetch one raw sample (X, Y, Z)
    ///
    /// On success the sample is also stored and available from [`raw`](Self::raw).
    /// On failure the stored sample is left untouched.
    fn read(&mut self) -> Result<[i16; 3], GyroError>;

    /// Last successfully read raw sample
    fn raw(&self) -> [i16; 3];

    /// Scale factor from raw LSB to degrees per second
    fn scale(&self) -> f32;

    /// Mounting orientation
    fn alignment(&self) -> SensorAlign;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::I2cError;

    #[test]
    fn test_sensor_align_from_param() {
        assert_eq!(SensorAlign::from_param(0), SensorAlign::Default);
        assert_eq!(SensorAlign::from_param(2), SensorAlign::Cw90Deg);
        assert_eq!(SensorAlign::from_param(8), SensorAlign::Cw270DegFlip);
        assert_eq!(SensorAlign::from_param(9), SensorAlign::Default);
        assert_eq!(SensorAlign::from_param(0xFF), SensorAlign::Default);
        assert_eq!(
            SensorAlign::from_param(SensorAlign::Cw180DegFlip.as_param()),
            SensorAlign::Cw180DegFlip
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(GyroError::BusUnavailable.is_absent());
        assert!(GyroError::NotDetected.is_absent());
        assert!(!GyroError::Bus(PlatformError::I2c(I2cError::Nack)).is_absent());

        assert!(GyroError::InitFailed(FailureMode::AccInit).is_fatal());
        assert!(!GyroError::NotDetected.is_fatal());
    }

    #[test]
    fn test_from_platform_error() {
        let e: GyroError = PlatformError::I2c(I2cError::Timeout).into();
        assert_eq!(e, GyroError::Bus(PlatformError::I2c(I2cError::Timeout)));
    }
}

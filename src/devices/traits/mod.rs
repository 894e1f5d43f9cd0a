//! Device traits
//!
//! Hardware-independent trait definitions for device drivers, so higher-level
//! subsystems can be written and tested against any sensor model.

pub mod gyro;

pub use gyro::{GyroDevice, GyroError, SensorAlign};

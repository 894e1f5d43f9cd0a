//! Device drivers
//!
//! This module contains device drivers that use platform abstraction traits.
//!
//! ## Modules
//!
//! - `gyro`: gyroscope drivers (L3G4200D) and the boot policy around them
//! - `traits`: device trait definitions (`GyroDevice`, etc.)

pub mod gyro;
pub mod traits;

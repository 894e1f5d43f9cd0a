//! Mock platform implementation for testing
//!
//! Mock peripherals for exercising drivers without hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use l3g4200d::platform::mock::{MockI2c, MockTimer};
//! use l3g4200d::platform::traits::{I2cConfig, I2cInterface};
//!
//! let mut i2c = MockI2c::new(I2cConfig::default());
//! i2c.set_read_data(&[0xD3]);
//! ```

#![cfg(any(test, feature = "mock"))]

mod events;
mod i2c;
mod timer;

pub use events::{EventLog, MockEvent};
pub use i2c::{I2cTransaction, MockI2c};
pub use timer::MockTimer;

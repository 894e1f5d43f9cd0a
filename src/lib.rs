#![cfg_attr(not(test), no_std)]

//! l3g4200d - Driver for the ST L3G4200D three-axis gyroscope
//!
//! This library provides the platform abstraction (I2C, timer, shared bus manager),
//! the L3G4200D driver itself, and the boot-time failure policy around it.

#[cfg(all(feature = "mock", not(test)))]
extern crate std;

// Platform abstraction layer: I2C, timer and bus device seams
pub mod platform;

// Device drivers using platform abstraction
pub mod devices;

// Logging and failure reporting
pub mod core;

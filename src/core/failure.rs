//! Process-level failure reporting
//!
//! Drivers never halt the system themselves. A driver that hits an unrecoverable
//! condition returns an error carrying a [`FailureMode`]; the boot sequence hands that
//! reason to a [`FaultReporter`], which decides how the system stops.
//!
//! ## Usage
//!
//! ```ignore
//! use l3g4200d::core::{FaultReporter, PanicReporter};
//! use l3g4200d::devices::gyro::boot_gyro;
//!
//! let mut reporter = PanicReporter;
//! boot_gyro(&mut gyro, &mut timer, &mut reporter)?;
//! ```

use core::fmt;

/// Reason tag passed to a [`FaultReporter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FailureMode {
    /// IMU configuration write was not acknowledged
    AccInit,
}

impl FailureMode {
    /// Numeric code, stable across releases (used for LED blink patterns)
    pub fn code(self) -> u8 {
        match self {
            FailureMode::AccInit => 2,
        }
    }
}

impl fmt::Display for FailureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureMode::AccInit => write!(f, "accelerometer/gyro init failed"),
        }
    }
}

/// Receiver of unrecoverable failures
///
/// Implementations on a flight target are expected not to return (halt, blink an
/// error code, reset). Test implementations record the reason and return, so the
/// caller must still stop its own sequence after reporting.
pub trait FaultReporter {
    /// Signal an unrecoverable failure
    fn failure_mode(&mut self, reason: FailureMode);
}

/// Fault reporter that panics
///
/// On a `no_std` target the panic handler (e.g. `panic-halt`, `panic-probe`) stops
/// the system, which gives the non-returning behaviour the boot sequence expects.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicReporter;

impl FaultReporter for PanicReporter {
    fn failure_mode(&mut self, reason: FailureMode) {
        crate::log_error!("Fatal failure (code {}): {:?}", reason.code(), reason);
        panic!("fatal failure: {}", reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_mode_codes() {
        assert_eq!(FailureMode::AccInit.code(), 2);
        assert_eq!(
            format!("{}", FailureMode::AccInit),
            "accelerometer/gyro init failed"
        );
    }

    #[test]
    #[should_panic(expected = "fatal failure")]
    fn test_panic_reporter_does_not_return() {
        let mut reporter = PanicReporter;
        reporter.failure_mode(FailureMode::AccInit);
    }
}

//! Core infrastructure
//!
//! Logging macros shared by every module and the process-level failure reporting
//! used by the boot sequence.

pub mod failure;
pub mod logging;

pub use failure::{FailureMode, FaultReporter, PanicReporter};

//! L3G4200D Register Definitions
//!
//! Based on the ST L3G4200D datasheet (Doc ID 17116).

#![allow(dead_code)]

use bitflags::bitflags;

// ============================================================================
// I2C Address
// ============================================================================

/// L3G4200D I2C address (SDO pulled low on the boards this driver targets)
pub const L3G4200D_ADDR: u8 = 0x68;

// ============================================================================
// Registers
// ============================================================================

/// Device ID (should read 0xD3)
pub const WHO_AM_I: u8 = 0x0F;

/// Output data rate, bandwidth, power mode, axis enables
pub const CTRL_REG1: u8 = 0x20;

/// High-pass filter mode and cut-off
pub const CTRL_REG2: u8 = 0x21;

/// Interrupt and data-ready pin configuration
pub const CTRL_REG3: u8 = 0x22;

/// Block data update, endianness, full-scale selection
pub const CTRL_REG4: u8 = 0x23;

/// Reboot, FIFO enable, high-pass filter enable
pub const CTRL_REG5: u8 = 0x24;

/// High-pass filter reference value
pub const REFERENCE: u8 = 0x25;

/// Data available / overrun status
pub const STATUS_REG: u8 = 0x27;

/// First output register (OUT_X_L); X, Y, Z follow in order
pub const GYRO_OUT: u8 = 0x28;

/// Sub-address auto-increment bit (MSB of the register address)
pub const AUTO_INCREMENT: u8 = 0x80;

// ============================================================================
// Register Values
// ============================================================================

/// WHO_AM_I expected value
pub const L3G4200D_WHO_AM_I_VALUE: u8 = 0xD3;

bitflags! {
    /// CTRL_REG1 power and axis-enable bits (bits 3:0)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Ctrl1: u8 {
        /// Normal mode (clear for power-down)
        const PD = 0x08;
        /// Z axis enable
        const ZEN = 0x04;
        /// Y axis enable
        const YEN = 0x02;
        /// X axis enable
        const XEN = 0x01;
        /// Normal mode with all three axes enabled
        const POWER_ON = Self::PD.bits() | Self::ZEN.bits() | Self::YEN.bits() | Self::XEN.bits();
    }
}

/// CTRL_REG4 full-scale selection, 2000 dps
pub const FS_SEL_2000DPS: u8 = 0xF0;

// ============================================================================
// Bandwidth Configuration
// ============================================================================

/// CTRL_REG1 DR/BW bits (7:4) for each low-pass cut-off
pub const DLPF_32HZ: u8 = 0x00;
pub const DLPF_54HZ: u8 = 0x40;
pub const DLPF_78HZ: u8 = 0x80;
pub const DLPF_93HZ: u8 = 0xC0;

// ============================================================================
// Scaling Constants
// ============================================================================

/// Sensitivity at 2000 dps full scale (LSB per °/s)
pub const GYRO_SENSITIVITY_2000DPS: f32 = 14.2857;

/// Raw-to-°/s scale factor at 2000 dps full scale
pub const GYRO_SCALE_2000DPS: f32 = 1.0 / GYRO_SENSITIVITY_2000DPS;

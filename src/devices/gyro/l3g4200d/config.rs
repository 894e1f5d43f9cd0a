//! L3G4200D Configuration

use super::registers;

/// Hardware low-pass filter selection
///
/// Built from the system-wide integer filter setting: 0 is the widest bandwidth,
/// 3 the narrowest. Codes outside 0..=3 select the narrowest (default) filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LowPassFilter {
    /// 93 Hz cut-off (code 0)
    Bw93Hz,
    /// 78 Hz cut-off (code 1)
    Bw78Hz,
    /// 54 Hz cut-off (code 2)
    Bw54Hz,
    /// 32 Hz cut-off (code 3, default)
    #[default]
    Bw32Hz,
}

impl LowPassFilter {
    /// Decode the integer filter setting
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => LowPassFilter::Bw93Hz,
            1 => LowPassFilter::Bw78Hz,
            2 => LowPassFilter::Bw54Hz,
            _ => LowPassFilter::Bw32Hz,
        }
    }

    /// CTRL_REG1 DR/BW bit pattern for this filter
    pub fn bandwidth_bits(self) -> u8 {
        match self {
            LowPassFilter::Bw93Hz => registers::DLPF_93HZ,
            LowPassFilter::Bw78Hz => registers::DLPF_78HZ,
            LowPassFilter::Bw54Hz => registers::DLPF_54HZ,
            LowPassFilter::Bw32Hz => registers::DLPF_32HZ,
        }
    }
}

/// L3G4200D driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct L3g4200dConfig {
    /// Hardware low-pass filter
    pub lpf: LowPassFilter,
}

impl L3g4200dConfig {
    /// Build from the integer filter setting
    pub fn from_lpf_code(code: u8) -> Self {
        Self {
            lpf: LowPassFilter::from_code(code),
        }
    }
}

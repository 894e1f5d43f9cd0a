//! L3G4200D Driver Implementation
//!
//! Detection, configuration and raw sample readout over a [`BusDevice`].

use super::config::{L3g4200dConfig, LowPassFilter};
use super::registers::{self, Ctrl1};
use crate::core::FailureMode;
use crate::devices::traits::{GyroDevice, GyroError, SensorAlign};
use crate::platform::{
    BusDevice, BusManager, BusSpeed, BusType, DeviceHardware, DeviceOwner, TimerInterface,
};

/// Identity probe attempts before the sensor is declared absent
pub const DETECT_ATTEMPTS: usize = 5;

/// Delay before each identity probe (power-up latency)
pub const DETECT_RETRY_DELAY_MS: u32 = 150;

/// Delay before the full-scale write in `init`
pub const INIT_SETTLE_DELAY_MS: u32 = 100;

/// Delay between the full-scale write and the power-on write
pub const POWER_ON_DELAY_MS: u32 = 5;

/// Length of one X/Y/Z sample burst
const SAMPLE_LEN: usize = 6;

/// Where to look for the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusProbe {
    /// Descriptor tag (which of several IMU slots to use)
    pub tag: u8,
    /// Subsystem claiming the device
    pub owner: DeviceOwner,
}

impl Default for BusProbe {
    fn default() -> Self {
        Self {
            tag: 0,
            owner: DeviceOwner::Mpu,
        }
    }
}

/// L3G4200D I2C Driver
///
/// A value of this type only exists for a sensor that answered the identity probe;
/// it owns the bus device for as long as it lives.
///
/// # Type Parameters
///
/// * `D` - Bus device handed out by a [`BusManager`]
pub struct L3g4200dDriver<D: BusDevice> {
    /// Claimed bus device
    dev: D,

    /// Driver configuration
    config: L3g4200dConfig,

    /// Last successfully read sample (X, Y, Z)
    raw: [i16; 3],

    /// Raw to °/s
    scale: f32,

    /// Mounting orientation from the bus descriptor
    align: SensorAlign,
}

impl<D: BusDevice> L3g4200dDriver<D> {
    /// Detect an L3G4200D and claim its bus device
    ///
    /// Probes WHO_AM_I up to [`DETECT_ATTEMPTS`] times, each after a
    /// [`DETECT_RETRY_DELAY_MS`] delay, at initialization bus speed. Detection does
    /// not configure or power on the sensor.
    ///
    /// # Errors
    ///
    /// - `GyroError::BusUnavailable` if the manager has no free device for `probe`
    ///   (no transaction is attempted)
    /// - `GyroError::NotDetected` if no attempt returned the expected identity; the
    ///   bus device is released back to the manager
    pub fn detect<M, T>(
        manager: &M,
        probe: BusProbe,
        config: L3g4200dConfig,
        timer: &mut T,
    ) -> Result<Self, GyroError>
    where
        M: BusManager<Device = D>,
        T: TimerInterface,
    {
        let mut dev = manager
            .device_init(
                BusType::Any,
                DeviceHardware::L3g4200d,
                probe.tag,
                probe.owner,
            )
            .ok_or(GyroError::BusUnavailable)?;

        if !Self::probe_identity(&mut dev, timer) {
            crate::log_debug!(
                "L3G4200D not found (tag {}) after {} attempts",
                probe.tag,
                DETECT_ATTEMPTS
            );
            manager.device_deinit(dev);
            return Err(GyroError::NotDetected);
        }

        let align = SensorAlign::from_param(dev.param());
        crate::log_info!(
            "L3G4200D detected (tag {}, align {:?})",
            probe.tag,
            align
        );

        Ok(Self {
            dev,
            config,
            raw: [0; 3],
            scale: registers::GYRO_SCALE_2000DPS,
            align,
        })
    }

    /// Read WHO_AM_I until it matches or the attempts run out
    fn probe_identity<T: TimerInterface>(dev: &mut D, timer: &mut T) -> bool {
        if let Err(e) = dev.set_speed(BusSpeed::Initialization) {
            crate::log_warn!("L3G4200D: could not lower bus speed: {:?}", e);
        }

        for attempt in 1..=DETECT_ATTEMPTS {
            timer.delay_ms(DETECT_RETRY_DELAY_MS);

            match dev.read_register(registers::WHO_AM_I) {
                Ok(registers::L3G4200D_WHO_AM_I_VALUE) => return true,
                Ok(id) => {
                    crate::log_trace!("L3G4200D probe {}: WHO_AM_I {:#x}", attempt, id);
                }
                Err(e) => {
                    crate::log_trace!("L3G4200D probe {}: {:?}", attempt, e);
                }
            }
        }

        false
    }

    /// Current configuration
    pub fn config(&self) -> &L3g4200dConfig {
        &self.config
    }

    /// Select the hardware low-pass filter
    ///
    /// Takes effect on the next `init()`.
    pub fn set_low_pass_filter(&mut self, lpf: LowPassFilter) {
        self.config.lpf = lpf;
    }

    /// Give the bus device back (e.g. to return it to its manager)
    ///
    /// The manager's slot stays claimed until the returned device is passed to
    /// [`BusManager::device_deinit`]; dropping the driver does not free it.
    pub fn release(self) -> D {
        self.dev
    }
}

impl<D: BusDevice> GyroDevice for L3g4200dDriver<D> {
    /// Power on at 2000 dps full scale with the configured bandwidth
    ///
    /// A NACK on the full-scale write is fatal and reported as
    /// `GyroError::InitFailed(FailureMode::AccInit)`; nothing else is written.
    /// The power-on write that follows is not escalated: a failure there is
    /// logged and `init` still returns `Ok`.
    fn init<T: TimerInterface>(&mut self, timer: &mut T) -> Result<(), GyroError> {
        let bandwidth = self.config.lpf.bandwidth_bits();

        timer.delay_ms(INIT_SETTLE_DELAY_MS);
        if let Err(e) = self
            .dev
            .write_register(registers::CTRL_REG4, registers::FS_SEL_2000DPS)
        {
            crate::log_error!("L3G4200D: full-scale write failed: {:?}", e);
            return Err(GyroError::InitFailed(FailureMode::AccInit));
        }

        timer.delay_ms(POWER_ON_DELAY_MS);
        // Unchecked: only the full-scale write is treated as mission-critical
        if let Err(e) = self
            .dev
            .write_register(registers::CTRL_REG1, Ctrl1::POWER_ON.bits() | bandwidth)
        {
            crate::log_warn!("L3G4200D: power-on write not acknowledged: {:?}", e);
        }

        Ok(())
    }

    fn read(&mut self) -> Result<[i16; 3], GyroError> {
        let mut buf = [0u8; SAMPLE_LEN];
        self.dev
            .read_buf(registers::AUTO_INCREMENT | registers::GYRO_OUT, &mut buf)?;

        self.raw = [
            i16::from_be_bytes([buf[0], buf[1]]),
            i16::from_be_bytes([buf[2], buf[3]]),
            i16::from_be_bytes([buf[4], buf[5]]),
        ];

        Ok(self.raw)
    }

    fn raw(&self) -> [i16; 3] {
        self.raw
    }

    fn scale(&self) -> f32 {
        self.scale
    }

    fn alignment(&self) -> SensorAlign {
        self.align
    }
}

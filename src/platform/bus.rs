//! Shared I2C bus manager
//!
//! One physical I2C bus carries several sensors. [`I2cBusManager`] owns a
//! hardware-descriptor table for that bus and hands out [`I2cBusDevice`]s: register
//! accessors bound to a device address, each claimable by one owner at a time.
//!
//! # Example
//!
//! ```ignore
//! use core::cell::RefCell;
//! use l3g4200d::platform::{BusDescriptor, DeviceHardware, I2cBusManager};
//!
//! let bus = RefCell::new(i2c);
//! let mut manager = I2cBusManager::new(&bus);
//! manager.register(BusDescriptor::new(DeviceHardware::L3g4200d, 0, 0x68, 0))?;
//! ```

use crate::platform::{
    traits::{
        BusDevice, BusManager, BusSpeed, BusType, DeviceHardware, DeviceOwner, I2cConfig,
        I2cInterface,
    },
    PlatformError, Result,
};
use core::cell::{Cell, RefCell};
use heapless::Vec;

/// Maximum number of descriptors per bus (one claim bit each)
pub const MAX_DESCRIPTORS: usize = 16;

/// Highest valid 7-bit I2C address
const MAX_I2C_ADDRESS: u8 = 0x7F;

/// Hardware descriptor: where one device lives on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusDescriptor {
    /// Hardware identifier
    pub hardware: DeviceHardware,
    /// Instance tag, distinguishes several devices of the same hardware
    pub tag: u8,
    /// 7-bit I2C address
    pub address: u8,
    /// Board-specific parameter (sensor alignment for IMUs)
    pub param: u8,
}

impl BusDescriptor {
    /// Create a descriptor
    pub const fn new(hardware: DeviceHardware, tag: u8, address: u8, param: u8) -> Self {
        Self {
            hardware,
            tag,
            address,
            param,
        }
    }
}

/// Map a bus speed class to an I2C clock frequency
pub fn i2c_frequency(speed: BusSpeed) -> u32 {
    match speed {
        BusSpeed::Initialization | BusSpeed::Slow => I2cConfig::STANDARD_MODE_HZ,
        BusSpeed::Standard | BusSpeed::Fast => I2cConfig::FAST_MODE_HZ,
        BusSpeed::Ultrafast => I2cConfig::FAST_MODE_PLUS_HZ,
    }
}

/// Descriptor table and claim tracking for one I2C bus
pub struct I2cBusManager<'b, I: I2cInterface> {
    bus: &'b RefCell<I>,
    descriptors: Vec<BusDescriptor, MAX_DESCRIPTORS>,
    claimed: Cell<u16>,
}

impl<'b, I: I2cInterface> I2cBusManager<'b, I> {
    /// Create a manager with an empty descriptor table
    pub fn new(bus: &'b RefCell<I>) -> Self {
        Self {
            bus,
            descriptors: Vec::new(),
            claimed: Cell::new(0),
        }
    }

    /// Add a device descriptor to the table
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InvalidConfig` if the address is not a 7-bit address,
    /// and `PlatformError::ResourceUnavailable` if the table is full.
    pub fn register(&mut self, descriptor: BusDescriptor) -> Result<()> {
        if descriptor.address > MAX_I2C_ADDRESS {
            return Err(PlatformError::InvalidConfig);
        }
        self.descriptors
            .push(descriptor)
            .map_err(|_| PlatformError::ResourceUnavailable)
    }

    /// Registered descriptors
    pub fn descriptors(&self) -> &[BusDescriptor] {
        &self.descriptors
    }

    /// True if the device for `hardware`/`tag` is currently claimed
    pub fn is_claimed(&self, hardware: DeviceHardware, tag: u8) -> bool {
        self.find(hardware, tag)
            .map(|slot| self.claimed.get() & (1 << slot) != 0)
            .unwrap_or(false)
    }

    fn find(&self, hardware: DeviceHardware, tag: u8) -> Option<usize> {
        self.descriptors
            .iter()
            .position(|d| d.hardware == hardware && d.tag == tag)
    }
}

impl<'b, I: I2cInterface> BusManager for I2cBusManager<'b, I> {
    type Device = I2cBusDevice<'b, I>;

    fn device_init(
        &self,
        bus: BusType,
        hardware: DeviceHardware,
        tag: u8,
        owner: DeviceOwner,
    ) -> Option<Self::Device> {
        if !bus.accepts(BusType::I2c) {
            return None;
        }

        let slot = self.find(hardware, tag)?;
        let mask = 1u16 << slot;
        if self.claimed.get() & mask != 0 {
            crate::log_warn!("Bus device {:?} tag {} already claimed", hardware, tag);
            return None;
        }
        self.claimed.set(self.claimed.get() | mask);

        let descriptor = self.descriptors[slot];
        crate::log_debug!(
            "Bus device {:?} tag {} claimed by {:?} at {:#x}",
            hardware,
            tag,
            owner,
            descriptor.address
        );

        Some(I2cBusDevice {
            bus: self.bus,
            slot,
            descriptor,
            owner,
        })
    }

    fn device_deinit(&self, device: Self::Device) {
        let owned = core::ptr::eq(device.bus, self.bus)
            && self.descriptors.get(device.slot) == Some(&device.descriptor);
        if !owned {
            crate::log_warn!(
                "Bus device {:?} tag {} not handed out by this manager",
                device.descriptor.hardware,
                device.descriptor.tag
            );
            return;
        }

        self.claimed.set(self.claimed.get() & !(1u16 << device.slot));
        crate::log_debug!(
            "Bus device {:?} tag {} released",
            device.descriptor.hardware,
            device.descriptor.tag
        );
    }
}

/// Register accessor for one device on a shared I2C bus
pub struct I2cBusDevice<'b, I: I2cInterface> {
    bus: &'b RefCell<I>,
    slot: usize,
    descriptor: BusDescriptor,
    owner: DeviceOwner,
}

impl<'b, I: I2cInterface> I2cBusDevice<'b, I> {
    /// 7-bit device address
    pub fn address(&self) -> u8 {
        self.descriptor.address
    }

    /// Descriptor this device was created from
    pub fn descriptor(&self) -> &BusDescriptor {
        &self.descriptor
    }

    /// Subsystem that claimed this device
    pub fn owner(&self) -> DeviceOwner {
        self.owner
    }

    fn with_bus<R>(&self, f: impl FnOnce(&mut I) -> Result<R>) -> Result<R> {
        let mut bus = self
            .bus
            .try_borrow_mut()
            .map_err(|_| PlatformError::ResourceUnavailable)?;
        f(&mut bus)
    }
}

impl<'b, I: I2cInterface> BusDevice for I2cBusDevice<'b, I> {
    fn set_speed(&mut self, speed: BusSpeed) -> Result<()> {
        self.with_bus(|bus| bus.set_frequency(i2c_frequency(speed)))
    }

    fn read_register(&mut self, reg: u8) -> Result<u8> {
        let addr = self.descriptor.address;
        let mut buf = [0u8; 1];
        self.with_bus(|bus| bus.write_read(addr, &[reg], &mut buf))?;
        Ok(buf[0])
    }

    fn read_buf(&mut self, reg: u8, buf: &mut [u8]) -> Result<()> {
        let addr = self.descriptor.address;
        self.with_bus(|bus| bus.write_read(addr, &[reg], buf))
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<()> {
        let addr = self.descriptor.address;
        self.with_bus(|bus| bus.write(addr, &[reg, value]))
    }

    fn param(&self) -> u8 {
        self.descriptor.param
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{I2cTransaction, MockI2c};

    fn manager_with_gyro(bus: &RefCell<MockI2c>) -> I2cBusManager<'_, MockI2c> {
        let mut manager = I2cBusManager::new(bus);
        manager
            .register(BusDescriptor::new(DeviceHardware::L3g4200d, 0, 0x68, 3))
            .unwrap();
        manager
            .register(BusDescriptor::new(DeviceHardware::L3g4200d, 1, 0x69, 4))
            .unwrap();
        manager
    }

    #[test]
    fn test_device_init_matches_hardware_and_tag() {
        let bus = RefCell::new(MockI2c::new(I2cConfig::default()));
        let manager = manager_with_gyro(&bus);

        let dev = manager
            .device_init(BusType::Any, DeviceHardware::L3g4200d, 1, DeviceOwner::Mpu)
            .unwrap();
        assert_eq!(dev.address(), 0x69);
        assert_eq!(dev.param(), 4);
        assert_eq!(dev.owner(), DeviceOwner::Mpu);
    }

    #[test]
    fn test_device_init_unknown_tag_returns_none() {
        let bus = RefCell::new(MockI2c::new(I2cConfig::default()));
        let manager = manager_with_gyro(&bus);

        assert!(manager
            .device_init(BusType::Any, DeviceHardware::L3g4200d, 7, DeviceOwner::Mpu)
            .is_none());
    }

    #[test]
    fn test_device_init_spi_request_rejected() {
        let bus = RefCell::new(MockI2c::new(I2cConfig::default()));
        let manager = manager_with_gyro(&bus);

        assert!(manager
            .device_init(BusType::Spi, DeviceHardware::L3g4200d, 0, DeviceOwner::Mpu)
            .is_none());
        assert!(manager
            .device_init(BusType::I2c, DeviceHardware::L3g4200d, 0, DeviceOwner::Mpu)
            .is_some());
    }

    #[test]
    fn test_claim_is_exclusive_until_released() {
        let bus = RefCell::new(MockI2c::new(I2cConfig::default()));
        let manager = manager_with_gyro(&bus);

        let dev = manager
            .device_init(BusType::Any, DeviceHardware::L3g4200d, 0, DeviceOwner::Mpu)
            .unwrap();
        assert!(manager.is_claimed(DeviceHardware::L3g4200d, 0));
        assert!(manager
            .device_init(BusType::Any, DeviceHardware::L3g4200d, 0, DeviceOwner::Mpu)
            .is_none());

        // Other descriptors stay available
        assert!(!manager.is_claimed(DeviceHardware::L3g4200d, 1));

        manager.device_deinit(dev);
        assert!(!manager.is_claimed(DeviceHardware::L3g4200d, 0));
        assert!(manager
            .device_init(BusType::Any, DeviceHardware::L3g4200d, 0, DeviceOwner::Mpu)
            .is_some());
    }

    #[test]
    fn test_device_deinit_ignores_foreign_device() {
        let bus_a = RefCell::new(MockI2c::new(I2cConfig::default()));
        let bus_b = RefCell::new(MockI2c::new(I2cConfig::default()));
        let manager_a = manager_with_gyro(&bus_a);
        let manager_b = manager_with_gyro(&bus_b);

        let dev_a = manager_a
            .device_init(BusType::Any, DeviceHardware::L3g4200d, 0, DeviceOwner::Mpu)
            .unwrap();
        let dev_b = manager_b
            .device_init(BusType::Any, DeviceHardware::L3g4200d, 0, DeviceOwner::Mpu)
            .unwrap();

        // Same slot and descriptor, different bus: must not free manager A's claim
        manager_a.device_deinit(dev_b);
        assert!(manager_a.is_claimed(DeviceHardware::L3g4200d, 0));
        assert!(manager_b.is_claimed(DeviceHardware::L3g4200d, 0));

        manager_a.device_deinit(dev_a);
        assert!(!manager_a.is_claimed(DeviceHardware::L3g4200d, 0));
    }

    #[test]
    fn test_register_rejects_10bit_address() {
        let bus = RefCell::new(MockI2c::new(I2cConfig::default()));
        let mut manager = I2cBusManager::new(&bus);
        assert_eq!(
            manager.register(BusDescriptor::new(DeviceHardware::L3g4200d, 0, 0x80, 0)),
            Err(PlatformError::InvalidConfig)
        );
        assert!(manager.descriptors().is_empty());
    }

    #[test]
    fn test_register_table_full() {
        let bus = RefCell::new(MockI2c::new(I2cConfig::default()));
        let mut manager = I2cBusManager::new(&bus);
        for tag in 0..MAX_DESCRIPTORS as u8 {
            manager
                .register(BusDescriptor::new(DeviceHardware::L3g4200d, tag, 0x68, 0))
                .unwrap();
        }
        assert_eq!(
            manager.register(BusDescriptor::new(DeviceHardware::L3g4200d, 99, 0x68, 0)),
            Err(PlatformError::ResourceUnavailable)
        );
    }

    #[test]
    fn test_register_access_transactions() {
        let bus = RefCell::new(MockI2c::new(I2cConfig::default()));
        let manager = manager_with_gyro(&bus);
        let mut dev = manager
            .device_init(BusType::Any, DeviceHardware::L3g4200d, 0, DeviceOwner::Mpu)
            .unwrap();

        bus.borrow_mut().set_read_data(&[0xD3, 0x01, 0x02]);
        assert_eq!(dev.read_register(0x0F).unwrap(), 0xD3);

        let mut buf = [0u8; 2];
        dev.read_buf(0xA8, &mut buf).unwrap();
        assert_eq!(buf, [0x01, 0x02]);

        dev.write_register(0x23, 0xF0).unwrap();

        assert_eq!(
            bus.borrow().transactions(),
            vec![
                I2cTransaction::WriteRead {
                    addr: 0x68,
                    write_data: vec![0x0F],
                    read_len: 1
                },
                I2cTransaction::WriteRead {
                    addr: 0x68,
                    write_data: vec![0xA8],
                    read_len: 2
                },
                I2cTransaction::Write {
                    addr: 0x68,
                    data: vec![0x23, 0xF0]
                },
            ]
        );
    }

    #[test]
    fn test_set_speed_maps_to_frequency() {
        let bus = RefCell::new(MockI2c::new(I2cConfig {
            frequency: I2cConfig::FAST_MODE_HZ,
            timeout_us: 1000,
        }));
        let manager = manager_with_gyro(&bus);
        let mut dev = manager
            .device_init(BusType::Any, DeviceHardware::L3g4200d, 0, DeviceOwner::Mpu)
            .unwrap();

        dev.set_speed(BusSpeed::Initialization).unwrap();
        assert_eq!(bus.borrow().frequency(), 100_000);

        dev.set_speed(BusSpeed::Ultrafast).unwrap();
        assert_eq!(bus.borrow().frequency(), 1_000_000);
    }

    #[test]
    fn test_busy_bus_reports_resource_unavailable() {
        let bus = RefCell::new(MockI2c::new(I2cConfig::default()));
        let manager = manager_with_gyro(&bus);
        let mut dev = manager
            .device_init(BusType::Any, DeviceHardware::L3g4200d, 0, DeviceOwner::Mpu)
            .unwrap();

        let _guard = bus.borrow_mut();
        assert_eq!(
            dev.read_register(0x0F),
            Err(PlatformError::ResourceUnavailable)
        );
    }

    #[test]
    fn test_nack_propagates() {
        let bus = RefCell::new(MockI2c::new(I2cConfig::default()));
        let manager = manager_with_gyro(&bus);
        let mut dev = manager
            .device_init(BusType::Any, DeviceHardware::L3g4200d, 0, DeviceOwner::Mpu)
            .unwrap();

        bus.borrow_mut().nack_next(1);
        assert!(dev.write_register(0x20, 0x0F).unwrap_err().is_nack());
        assert!(dev.write_register(0x20, 0x0F).is_ok());
    }
}

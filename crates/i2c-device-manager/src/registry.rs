use embassy_sync::blocking_mutex::raw::RawMutex;
use heapless::Vec;

use crate::address::BusAddress;
use crate::bus::BusHandle;
use crate::config::{RegistryConfig, DEFAULT_CAPACITY};
use crate::error::{DeviceError, RegistryError};
use crate::transport::Transport;

/// Per-device record held by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceDescriptor {
    bus_address: BusAddress,
    timeout_ms: u32,
}

impl DeviceDescriptor {
    pub(crate) const fn new(bus_address: BusAddress, timeout_ms: u32) -> Self {
        Self { bus_address, timeout_ms }
    }

    #[inline]
    pub const fn bus_address(&self) -> BusAddress {
        self.bus_address
    }

    #[inline]
    pub const fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }
}

/// Bounded, insertion-ordered registry of devices on one bus.
///
/// Holds at most `N` descriptors. Indices are handed out in registration
/// order and stay valid for the registry's lifetime; there is no way to remove
/// a single device. Dropping the registry releases only its own storage, the
/// borrowed [`BusHandle`] is left untouched.
///
/// Mutation takes `&mut self` and there is no internal locking. To share a
/// registry between execution contexts wrap it in a
/// [`SharedRegistry`](crate::SharedRegistry).
pub struct DeviceRegistry<
    'bus,
    M: RawMutex,
    T,
    const N: usize = DEFAULT_CAPACITY,
> {
    pub(crate) bus: &'bus BusHandle<M, T>,
    config: RegistryConfig,
    devices: Vec<DeviceDescriptor, N>,
}

impl<'bus, M: RawMutex, T: Transport, const N: usize>
    DeviceRegistry<'bus, M, T, N>
{
    /// Create an empty registry bound to `bus`.
    pub fn new(bus: &'bus BusHandle<M, T>) -> Self {
        Self::with_config(bus, RegistryConfig::default())
    }

    pub fn with_config(
        bus: &'bus BusHandle<M, T>,
        config: RegistryConfig,
    ) -> Self {
        Self { bus, config, devices: Vec::new() }
    }

    /// Register a device by 7-bit address and return its index.
    ///
    /// Registering an address that is already present returns the existing
    /// index and leaves the registry unchanged. New devices start with the
    /// configured default timeout.
    pub fn add_device(&mut self, address: u8) -> Result<usize, RegistryError> {
        let bus_address = BusAddress::try_from_seven_bit(address)?;

        if let Some(index) = self.position(bus_address) {
            return Ok(index);
        }

        let index = self.devices.len();
        self.devices
            .push(DeviceDescriptor::new(
                bus_address,
                self.config.default_timeout_ms,
            ))
            .map_err(|_| {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "registry full, cannot add device {=u8:#x}",
                    address
                );
                RegistryError::CapacityExceeded(N)
            })?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "registered device {=u8:#x} at index {=usize}",
            address,
            index
        );
        Ok(index)
    }

    /// Overwrite the timeout of the device at `index`.
    ///
    /// An index that is not registered is ignored without error, unlike the
    /// transaction methods which reject it.
    pub fn set_timeout(&mut self, index: usize, timeout_ms: u32) {
        match self.devices.get_mut(index) {
            Some(device) => device.timeout_ms = timeout_ms,
            None => {
                #[cfg(feature = "defmt")]
                defmt::trace!("set_timeout ignored for index {=usize}", index);
            }
        }
    }

    /// Index of the device registered at 7-bit `address`, if any.
    pub fn index_of(&self, address: u8) -> Option<usize> {
        let bus_address = BusAddress::try_from_seven_bit(address).ok()?;
        self.position(bus_address)
    }

    pub fn descriptor(&self, index: usize) -> Option<&DeviceDescriptor> {
        self.devices.get(index)
    }

    pub fn timeout(&self, index: usize) -> Option<u32> {
        self.descriptor(index).map(DeviceDescriptor::timeout_ms)
    }

    /// Registered devices in index order.
    pub fn iter(&self) -> impl Iterator<Item = &DeviceDescriptor> {
        self.devices.iter()
    }

    /// Number of registered devices.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The bus handle this registry was created with.
    pub fn bus(&self) -> &'bus BusHandle<M, T> {
        self.bus
    }

    /// Look up a registered device for a transaction.
    pub(crate) fn resolve(
        &self,
        index: usize,
    ) -> Result<DeviceDescriptor, DeviceError<T::Error>> {
        self.devices.get(index).copied().ok_or_else(|| {
            #[cfg(feature = "defmt")]
            defmt::trace!("rejected device index {=usize}", index);
            DeviceError::IndexOutOfRange { index, count: self.devices.len() }
        })
    }

    fn position(&self, bus_address: BusAddress) -> Option<usize> {
        self.devices
            .iter()
            .position(|device| device.bus_address == bus_address)
    }
}

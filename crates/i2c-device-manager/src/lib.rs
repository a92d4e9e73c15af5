#![no_std]
//! Registry of I2C slave devices sharing one bus handle.
//!
//! A [`DeviceRegistry`] borrows a [`BusHandle`] wrapping a platform
//! [`Transport`], hands out a stable index per registered 7-bit address and
//! executes raw and register-indexed transactions by index. The registry never
//! owns the transport: the handle is created by platform init code and must
//! outlive every registry bound to it.
//!
//! ```ignore
//! let bus: BusHandle<NoopRawMutex, _> = BusHandle::new(HalTransport::new(twim));
//! let mut devices: DeviceRegistry<'_, _, _> = DeviceRegistry::new(&bus);
//!
//! let sensor = devices.add_device(0x48)?;
//! devices.set_timeout(sensor, 500);
//! let id = devices.read_register_u8(sensor, 0x0F)?;
//! ```

mod address;
mod bus;
mod config;
mod error;
mod hal;
mod registry;
mod shared;
mod transaction;
mod transport;

pub use address::{BusAddress, MAX_SEVEN_BIT_ADDRESS};
pub use bus::BusHandle;
pub use config::{
    RegistryConfig, DEFAULT_CAPACITY, DEFAULT_TIMEOUT_MS, MAX_REGISTER_WRITE,
};
pub use error::{DeviceError, RegistryError};
pub use hal::HalTransport;
pub use registry::{DeviceDescriptor, DeviceRegistry};
pub use shared::SharedRegistry;
pub use transport::Transport;

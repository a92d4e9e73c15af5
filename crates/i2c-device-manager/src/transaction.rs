//! Raw and register-indexed transactions against registered devices.
//!
//! Every operation resolves the index first; an unregistered index fails
//! before the transport is touched. Nothing is retried.

use embassy_sync::blocking_mutex::raw::RawMutex;
use heapless::Vec;

use crate::config::REGISTER_FRAME_LEN;
use crate::error::DeviceError;
use crate::registry::{DeviceDescriptor, DeviceRegistry};
use crate::transport::Transport;

/// Only the low byte of a register address goes on the wire.
// TODO: add a per-device register width for parts with 16-bit register maps.
#[inline]
const fn register_byte(register: u16) -> u8 {
    (register & 0xFF) as u8
}

impl<M: RawMutex, T: Transport, const N: usize> DeviceRegistry<'_, M, T, N> {
    /// Write `data` to the device as-is.
    pub fn send(
        &self,
        index: usize,
        data: &[u8],
    ) -> Result<(), DeviceError<T::Error>> {
        let device = self.resolve(index)?;
        self.transmit_to(&device, data)
    }

    /// Read `buffer.len()` bytes from the device as-is.
    pub fn receive(
        &self,
        index: usize,
        buffer: &mut [u8],
    ) -> Result<(), DeviceError<T::Error>> {
        let device = self.resolve(index)?;
        self.receive_from(&device, buffer)
    }

    /// Write `data` starting at `register` in a single transmit.
    ///
    /// The frame is the register byte followed by `data`. Payloads longer
    /// than [`MAX_REGISTER_WRITE`](crate::MAX_REGISTER_WRITE) fail with
    /// [`DeviceError::AllocationFailure`] before anything is sent.
    pub fn write_register(
        &self,
        index: usize,
        register: u16,
        data: &[u8],
    ) -> Result<(), DeviceError<T::Error>> {
        let device = self.resolve(index)?;

        let overflow = || DeviceError::AllocationFailure {
            needed: data.len() + 1,
            available: REGISTER_FRAME_LEN,
        };
        let mut frame = Vec::<u8, REGISTER_FRAME_LEN>::new();
        frame
            .extend_from_slice(&[register_byte(register)])
            .map_err(|_| overflow())?;
        frame.extend_from_slice(data).map_err(|_| overflow())?;

        self.transmit_to(&device, &frame)
    }

    /// Read `buffer.len()` bytes starting at `register`.
    ///
    /// Two separate transport calls: the register byte is transmitted, then
    /// the data is received. If the first call fails its error is returned
    /// and no read is attempted. Another user of the bus may slip in between
    /// the two calls.
    pub fn read_register(
        &self,
        index: usize,
        register: u16,
        buffer: &mut [u8],
    ) -> Result<(), DeviceError<T::Error>> {
        let device = self.resolve(index)?;
        self.transmit_to(&device, &[register_byte(register)])?;
        self.receive_from(&device, buffer)
    }

    pub fn read_register_u8(
        &self,
        index: usize,
        register: u16,
    ) -> Result<u8, DeviceError<T::Error>> {
        let mut buffer = [0];
        self.read_register(index, register, &mut buffer)?;
        Ok(buffer[0])
    }

    pub fn write_register_u8(
        &self,
        index: usize,
        register: u16,
        value: u8,
    ) -> Result<(), DeviceError<T::Error>> {
        self.write_register(index, register, &[value])
    }

    /// Read a single register, apply `f` and write the result back.
    ///
    /// Not atomic with respect to other bus users.
    pub fn modify_register<F>(
        &self,
        index: usize,
        register: u16,
        f: F,
    ) -> Result<(), DeviceError<T::Error>>
    where
        F: FnOnce(u8) -> u8,
    {
        let value = self.read_register_u8(index, register)?;
        self.write_register_u8(index, register, f(value))
    }

    /// Check whether the device acknowledges an empty write.
    ///
    /// Transport failures report `Ok(false)`; an unregistered index or a busy
    /// bus handle are still errors.
    pub fn probe(&self, index: usize) -> Result<bool, DeviceError<T::Error>> {
        match self.send(index, &[]) {
            Ok(()) => Ok(true),
            Err(DeviceError::Transport(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn transmit_to(
        &self,
        device: &DeviceDescriptor,
        data: &[u8],
    ) -> Result<(), DeviceError<T::Error>> {
        self.bus
            .with_transport(|transport| {
                transport.transmit(
                    device.bus_address(),
                    data,
                    device.timeout_ms(),
                )
            })
            .ok_or(DeviceError::BusBusy)?
            .map_err(|err| {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "transmit to {=u16:#x} failed",
                    device.bus_address().raw()
                );
                DeviceError::Transport(err)
            })
    }

    fn receive_from(
        &self,
        device: &DeviceDescriptor,
        buffer: &mut [u8],
    ) -> Result<(), DeviceError<T::Error>> {
        self.bus
            .with_transport(|transport| {
                transport.receive(
                    device.bus_address(),
                    buffer,
                    device.timeout_ms(),
                )
            })
            .ok_or(DeviceError::BusBusy)?
            .map_err(|err| {
                #[cfg(feature = "defmt")]
                defmt::warn!(
                    "receive from {=u16:#x} failed",
                    device.bus_address().raw()
                );
                DeviceError::Transport(err)
            })
    }
}

use embedded_hal::i2c::I2c;

use crate::address::BusAddress;
use crate::transport::Transport;

/// [`Transport`] over any blocking `embedded-hal` I2C bus.
///
/// `embedded-hal` takes 7-bit addresses, so the bus address is shifted back
/// before each call. There is no per-call timeout in `embedded-hal`; the
/// device timeout is dropped and the HAL's own bus timeout applies.
#[derive(Debug)]
pub struct HalTransport<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> HalTransport<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Return the wrapped bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> Transport for HalTransport<I2C> {
    type Error = I2C::Error;

    fn transmit(
        &mut self,
        address: BusAddress,
        data: &[u8],
        _timeout_ms: u32,
    ) -> Result<(), Self::Error> {
        self.i2c.write(address.seven_bit(), data)
    }

    fn receive(
        &mut self,
        address: BusAddress,
        buffer: &mut [u8],
        _timeout_ms: u32,
    ) -> Result<(), Self::Error> {
        self.i2c.read(address.seven_bit(), buffer)
    }
}

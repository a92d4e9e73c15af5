use crate::address::BusAddress;

/// Blocking bus primitives supplied by the platform.
///
/// Implementors own the electrical and protocol layer. Each call blocks until
/// the transfer completes or `timeout_ms` elapses. `address` is already in
/// bus form (see [`BusAddress`]); the direction is implied by the method.
///
/// Real hardware, simulated buses and test doubles all plug in here and are
/// injected into a [`BusHandle`](crate::BusHandle) at construction.
pub trait Transport {
    /// Platform status on failure. Passed through to callers unchanged.
    type Error: core::fmt::Debug;

    /// Write `data` to the device at `address`.
    fn transmit(
        &mut self,
        address: BusAddress,
        data: &[u8],
        timeout_ms: u32,
    ) -> Result<(), Self::Error>;

    /// Fill `buffer` with bytes read from the device at `address`.
    fn receive(
        &mut self,
        address: BusAddress,
        buffer: &mut [u8],
        timeout_ms: u32,
    ) -> Result<(), Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    #[inline]
    fn transmit(
        &mut self,
        address: BusAddress,
        data: &[u8],
        timeout_ms: u32,
    ) -> Result<(), Self::Error> {
        T::transmit(self, address, data, timeout_ms)
    }

    #[inline]
    fn receive(
        &mut self,
        address: BusAddress,
        buffer: &mut [u8],
        timeout_ms: u32,
    ) -> Result<(), Self::Error> {
        T::receive(self, address, buffer, timeout_ms)
    }
}

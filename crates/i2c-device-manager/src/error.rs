/// Errors raised while registering devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegistryError {
    /// Every one of the registry's `n` slots is already in use.
    CapacityExceeded(usize),
    /// The address does not fit in 7 bits.
    InvalidAddress(u8),
}

impl core::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RegistryError::CapacityExceeded(capacity) => {
                write!(f, "Device registry full ({} devices)", capacity)
            }
            RegistryError::InvalidAddress(address) => {
                write!(f, "Invalid 7-bit address: {:#04x}", address)
            }
        }
    }
}

/// Errors raised by transactions against a registered device.
///
/// `E` is the transport's own error type, forwarded untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError<E: core::fmt::Debug> {
    /// `index` is not below the number of registered devices.
    IndexOutOfRange { index: usize, count: usize },
    /// The register frame needs `needed` bytes but only `available` fit.
    AllocationFailure { needed: usize, available: usize },
    /// The bus handle is already borrowed by an in-flight transport call.
    BusBusy,
    /// The transport reported a failure.
    Transport(E),
}

impl<E: core::fmt::Debug> core::fmt::Display for DeviceError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DeviceError::IndexOutOfRange { index, count } => {
                write!(
                    f,
                    "Device index {} out of range ({} registered)",
                    index, count
                )
            }
            DeviceError::AllocationFailure { needed, available } => {
                write!(
                    f,
                    "Register frame of {} bytes exceeds {} byte buffer",
                    needed, available
                )
            }
            DeviceError::BusBusy => write!(f, "Bus handle already in use"),
            DeviceError::Transport(err) => {
                write!(f, "Transport error: {:?}", err)
            }
        }
    }
}

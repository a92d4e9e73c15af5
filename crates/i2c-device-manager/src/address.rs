use crate::error::RegistryError;

/// Largest address representable in 7-bit I2C addressing.
pub const MAX_SEVEN_BIT_ADDRESS: u8 = 0x7F;

/// Device address as placed on the wire.
///
/// Holds the 7-bit device address shifted left by one. The read/write bit is
/// always clear; direction is chosen by which [`Transport`](crate::Transport)
/// primitive is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusAddress(u16);

impl BusAddress {
    /// Translate a 7-bit address without range checking.
    #[inline]
    pub const fn from_seven_bit(address: u8) -> Self {
        Self((address as u16) << 1)
    }

    /// Translate a 7-bit address, rejecting anything above `0x7F`.
    pub const fn try_from_seven_bit(address: u8) -> Result<Self, RegistryError> {
        if address > MAX_SEVEN_BIT_ADDRESS {
            Err(RegistryError::InvalidAddress(address))
        } else {
            Ok(Self::from_seven_bit(address))
        }
    }

    /// The bus-level value handed to the transport.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// The original 7-bit device address.
    #[inline]
    pub const fn seven_bit(self) -> u8 {
        (self.0 >> 1) as u8
    }
}

impl From<BusAddress> for u16 {
    fn from(address: BusAddress) -> Self {
        address.raw()
    }
}

impl core::fmt::Display for BusAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

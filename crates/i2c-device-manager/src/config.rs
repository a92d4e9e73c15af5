/// Descriptor slots in a registry unless a capacity is given explicitly.
pub const DEFAULT_CAPACITY: usize = 10;

/// Per-device transport timeout assigned at registration.
pub const DEFAULT_TIMEOUT_MS: u32 = 1000;

/// Largest payload accepted by a single register write.
pub const MAX_REGISTER_WRITE: usize = 32;

/// Register address byte plus payload.
pub(crate) const REGISTER_FRAME_LEN: usize = MAX_REGISTER_WRITE + 1;

/// Runtime settings for a [`DeviceRegistry`](crate::DeviceRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegistryConfig {
    /// Timeout given to each newly registered device.
    pub default_timeout_ms: u32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self { default_timeout_ms: DEFAULT_TIMEOUT_MS }
    }

    #[must_use]
    pub const fn with_default_timeout(mut self, timeout_ms: u32) -> Self {
        self.default_timeout_ms = timeout_ms;
        self
    }
}

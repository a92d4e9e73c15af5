//! Caller-side locking for registries used from several contexts.
//!
//! The registry itself does no synchronization. When a foreground task and an
//! interrupt handler (or several threads) need the same registry, wrap it in a
//! blocking mutex and route every call through `lock`.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::config::DEFAULT_CAPACITY;
use crate::registry::DeviceRegistry;
use crate::transport::Transport;

/// A registry behind a blocking mutex of the caller's choosing.
pub type SharedRegistry<'bus, M, T, const N: usize = DEFAULT_CAPACITY> =
    Mutex<M, RefCell<DeviceRegistry<'bus, M, T, N>>>;

impl<'bus, M: RawMutex, T: Transport, const N: usize>
    DeviceRegistry<'bus, M, T, N>
{
    /// Move the registry behind a mutex for shared use.
    pub fn into_shared(self) -> SharedRegistry<'bus, M, T, N> {
        Mutex::new(RefCell::new(self))
    }
}

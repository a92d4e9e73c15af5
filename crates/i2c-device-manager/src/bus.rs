use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

/// Shared handle to a bus transport.
///
/// Registries hold a shared borrow of the handle and never own or drop the
/// transport, so the handle must outlive every registry bound to it. Each
/// transport call runs inside `M`'s critical section; nothing is held across
/// calls, so composite transactions are not atomic.
pub struct BusHandle<M: RawMutex, T> {
    transport: Mutex<M, RefCell<T>>,
}

impl<M: RawMutex, T> BusHandle<M, T> {
    /// Wrap a transport.
    pub const fn new(transport: T) -> Self {
        Self { transport: Mutex::new(RefCell::new(transport)) }
    }

    /// Run `f` with exclusive access to the transport.
    ///
    /// Returns `None` if the transport is already borrowed, i.e. `f` would
    /// re-enter the bus from inside another transport call.
    pub fn with_transport<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.transport.lock(|cell| {
            let mut transport = cell.try_borrow_mut().ok()?;
            Some(f(&mut *transport))
        })
    }

    /// Mutable access without locking; the borrow proves exclusivity.
    pub fn get_mut(&mut self) -> &mut T {
        self.transport.get_mut().get_mut()
    }

    /// Give the transport back to the platform.
    pub fn into_inner(self) -> T {
        self.transport.into_inner().into_inner()
    }
}

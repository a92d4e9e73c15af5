#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use i2c_device_manager::{BusAddress, BusHandle, Transport};

// ---------------------------------------------------------------------------
// Mock transport
// ---------------------------------------------------------------------------

/// One recorded transport call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Transmit { address: u16, data: Vec<u8>, timeout_ms: u32 },
    Receive { address: u16, len: usize, timeout_ms: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// Transport that records every call and serves canned read data.
///
/// Clones share state, so a test keeps one clone for inspection while the
/// other lives inside the bus handle.
#[derive(Clone, Default)]
pub struct MockTransport {
    calls: Arc<StdMutex<Vec<Call>>>,
    fail_transmit: Arc<AtomicBool>,
    fail_receive: Arc<AtomicBool>,
    read_data: Arc<StdMutex<Vec<u8>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn fail_transmit(&self, fail: bool) {
        self.fail_transmit.store(fail, Ordering::SeqCst);
    }

    pub fn fail_receive(&self, fail: bool) {
        self.fail_receive.store(fail, Ordering::SeqCst);
    }

    /// Bytes handed out by the next receives, zero-padded.
    pub fn set_read_data(&self, data: &[u8]) {
        *self.read_data.lock().unwrap() = data.to_vec();
    }
}

impl Transport for MockTransport {
    type Error = MockError;

    fn transmit(
        &mut self,
        address: BusAddress,
        data: &[u8],
        timeout_ms: u32,
    ) -> Result<(), Self::Error> {
        self.calls.lock().unwrap().push(Call::Transmit {
            address: address.raw(),
            data: data.to_vec(),
            timeout_ms,
        });
        if self.fail_transmit.load(Ordering::SeqCst) {
            Err(MockError)
        } else {
            Ok(())
        }
    }

    fn receive(
        &mut self,
        address: BusAddress,
        buffer: &mut [u8],
        timeout_ms: u32,
    ) -> Result<(), Self::Error> {
        self.calls.lock().unwrap().push(Call::Receive {
            address: address.raw(),
            len: buffer.len(),
            timeout_ms,
        });
        if self.fail_receive.load(Ordering::SeqCst) {
            return Err(MockError);
        }
        let data = self.read_data.lock().unwrap();
        for (i, byte) in buffer.iter_mut().enumerate() {
            *byte = data.get(i).copied().unwrap_or(0);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Helper
// ---------------------------------------------------------------------------

pub fn make_bus<M>() -> (BusHandle<M, MockTransport>, MockTransport)
where
    M: embassy_sync::blocking_mutex::raw::RawMutex,
{
    let mock = MockTransport::new();
    (BusHandle::new(mock.clone()), mock)
}

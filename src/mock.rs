//! In-memory register bus for host-side tests.
//!
//! [`MockRegisterBus`] implements [`RegisterBus`] without any hardware
//! dependency. The store is seeded from the power-on default table and every
//! write is recorded for assertion. Reads and writes can be made to fail
//! once, to exercise transport-error paths.

use heapless::Vec;

use crate::bus::RegisterBus;
use crate::registers::REGISTER_DEFAULTS;

/// Error injected by [`MockRegisterBus::fail_next_read`] /
/// [`MockRegisterBus::fail_next_write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockBusError;

/// Mock register bus — records all writes for test assertions.
pub struct MockRegisterBus {
    registers: Vec<(u16, u8), 64>,
    writes: Vec<(u16, u8), 128>,
    fail_read: bool,
    fail_write: bool,
}

impl MockRegisterBus {
    /// Create a bus whose registers hold their power-on defaults.
    #[must_use]
    pub fn new() -> Self {
        let mut registers = Vec::new();
        for default in REGISTER_DEFAULTS {
            // Capacity exceeds the default table size.
            let _ = registers.push((default.address, default.value));
        }
        Self {
            registers,
            writes: Vec::new(),
            fail_read: false,
            fail_write: false,
        }
    }

    /// Current value of `address` (0x00 when never set, like unlisted
    /// registers on the real chip).
    #[must_use]
    pub fn register(&self, address: u16) -> u8 {
        self.registers
            .iter()
            .find(|(a, _)| *a == address)
            .map_or(0x00, |(_, v)| *v)
    }

    /// Set a register directly, bypassing the write log. For test setup.
    pub fn set_register(&mut self, address: u16, value: u8) {
        if let Some(slot) = self.registers.iter_mut().find(|(a, _)| *a == address) {
            slot.1 = value;
        } else {
            let _ = self.registers.push((address, value));
        }
    }

    /// Every `(address, value)` pair written through the bus, in order.
    #[must_use]
    pub fn writes(&self) -> &[(u16, u8)] {
        &self.writes
    }

    /// Number of writes that targeted `address`.
    #[must_use]
    pub fn write_count(&self, address: u16) -> usize {
        self.writes.iter().filter(|(a, _)| *a == address).count()
    }

    /// Fail the next read with [`MockBusError`].
    pub fn fail_next_read(&mut self) {
        self.fail_read = true;
    }

    /// Fail the next write with [`MockBusError`].
    pub fn fail_next_write(&mut self) {
        self.fail_write = true;
    }
}

impl Default for MockRegisterBus {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterBus for MockRegisterBus {
    type BusError = MockBusError;

    fn read_register(&mut self, address: u16) -> Result<u8, Self::BusError> {
        if self.fail_read {
            self.fail_read = false;
            return Err(MockBusError);
        }
        Ok(self.register(address))
    }

    fn write_register(&mut self, address: u16, value: u8) -> Result<(), Self::BusError> {
        if self.fail_write {
            self.fail_write = false;
            return Err(MockBusError);
        }
        self.set_register(address, value);
        // Log capacity is generous; a test long enough to overflow it has
        // already failed its assertions.
        let _ = self.writes.push((address, value));
        Ok(())
    }
}

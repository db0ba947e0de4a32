//! Register transport boundary.
//!
//! The driver never talks to a bus peripheral directly; it goes through
//! [`RegisterBus`], an addressed byte read/write interface. Production
//! hardware uses [`I2cRegisterBus`] over a blocking `embedded_hal` I2C
//! peripheral; tests use [`crate::mock::MockRegisterBus`].
//!
//! Each call is one bus transaction. The chip offers no multi-register
//! atomic write, so paired updates (stereo volume, read-modify-write) can be
//! observed half-applied if a transaction fails in between.

/// 7-bit I2C device address when the ADDR pin is pulled low.
pub const I2C_ADDR_LOW: u8 = 0x48;
/// 7-bit I2C device address when the ADDR pin is pulled high.
pub const I2C_ADDR_HIGH: u8 = 0x49;

/// Addressed byte read/write access to the DAC register file.
pub trait RegisterBus {
    /// Transport failure type (bus timeout, NACK, …).
    type BusError: core::fmt::Debug;

    /// Read one register byte.
    fn read_register(&mut self, address: u16) -> Result<u8, Self::BusError>;

    /// Write one register byte.
    fn write_register(&mut self, address: u16, value: u8) -> Result<(), Self::BusError>;
}

/// Read-modify-write the bits selected by `mask` to `value`, leaving the
/// rest of the byte untouched.
///
/// All shared-byte field updates in this crate go through this one routine,
/// so a control write is never destructive to co-located fields.
pub fn update_bits<B: RegisterBus>(
    bus: &mut B,
    address: u16,
    mask: u8,
    value: u8,
) -> Result<(), B::BusError> {
    let current = bus.read_register(address)?;
    bus.write_register(address, (current & !mask) | (value & mask))
}

/// [`RegisterBus`] over a blocking I2C peripheral.
///
/// Wire format: two address bytes (big-endian) followed by the data byte for
/// a write; a write of the two address bytes then a one-byte read for a read.
/// The chip does not support multi-byte sequential reads, so every access is
/// its own transaction.
pub struct I2cRegisterBus<I> {
    i2c: I,
    device: u8,
}

impl<I> I2cRegisterBus<I> {
    /// Wrap a configured I2C peripheral pointing at the chip.
    ///
    /// `device` is the 7-bit address, [`I2C_ADDR_LOW`] or [`I2C_ADDR_HIGH`]
    /// depending on the ADDR pin strap.
    pub fn new(i2c: I, device: u8) -> Self {
        Self { i2c, device }
    }

    /// Release the underlying I2C peripheral.
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: embedded_hal::i2c::I2c> RegisterBus for I2cRegisterBus<I> {
    type BusError = I::Error;

    fn read_register(&mut self, address: u16) -> Result<u8, Self::BusError> {
        let mut value = [0u8; 1];
        self.i2c
            .write_read(self.device, &address.to_be_bytes(), &mut value)?;
        Ok(value[0])
    }

    fn write_register(&mut self, address: u16, value: u8) -> Result<(), Self::BusError> {
        let [hi, lo] = address.to_be_bytes();
        self.i2c.write(self.device, &[hi, lo, value])
    }
}

//! ES9028Q2M register map.
//!
//! The control port addresses an 8-bit register file through 16-bit register
//! addresses. The addresses below are the vendor-assigned locations for this
//! chip family; they are deliberately kept as named constants so a control
//! binding can never reference a register that is not in this table.
//!
//! # Access policy
//!
//! Every address in the 16-bit space is readable, writable, and volatile.
//! Marking the whole map volatile disables any read cache or write combining
//! a transport layer might otherwise apply — each register access hits the
//! bus. This is an explicit policy for this chip family, not an oversight.
//!
//! # Power-on defaults
//!
//! | Register            | Address | Default |
//! |---------------------|---------|---------|
//! | Input configuration | 21133   | `0x8C`  |
//! | General settings    | 30974   | `0x87`  |
//! | DPLL bandwidth      | 12135   | `0x9A`  |
//! | Master mode         | 22575   | `0x02`  |
//! | Volume left/right   | 11557 / 29772 | `0xFF` (muted) |
//! | THD trims           | (8 registers) | `0x00`  |
//!
//! Both volume registers default to full attenuation, so the chip powers up
//! silent until the host raises the volume and the mute sequencer unmutes.

/// Left-channel volume attenuation (0x00 = 0 dB, 0xFF = −127.5 dB).
pub const REG_VOLUME_LEFT: u16 = 11557;
/// Right-channel volume attenuation (same encoding as [`REG_VOLUME_LEFT`]).
pub const REG_VOLUME_RIGHT: u16 = 29772;
/// General settings: channel mute (bits 1:0), IIR corner (bits 3:2),
/// FIR shape (bits 6:5).
pub const REG_GENERAL_SET: u16 = 30974;
/// Input configuration: source select (bits 1:0), serial word width (bits 7:6).
pub const REG_INPUT_CONFIG: u16 = 21133;
/// DPLL bandwidth for bit-clock jitter tracking.
pub const REG_DPLL: u16 = 12135;
/// Master mode / stop-divider configuration.
pub const REG_MASTER_MODE: u16 = 22575;
/// Chip status (read-only in practice; carries no power-on default).
pub const REG_CHIP_STATUS: u16 = 6201;

/// THD compensation enable (bit 6).
pub const REG_THD_ENABLE: u16 = 42772;
/// THD left/right separate-compensation select (bit 0).
pub const REG_THD_SEPARATE: u16 = 35091;
/// Left channel, 2nd harmonic, fine trim.
pub const REG_THD_L2_FINE: u16 = 13183;
/// Left channel, 2nd harmonic, coarse trim.
pub const REG_THD_L2_COARSE: u16 = 16853;
/// Left channel, 3rd harmonic, fine trim.
pub const REG_THD_L3_FINE: u16 = 1300;
/// Left channel, 3rd harmonic, coarse trim.
pub const REG_THD_L3_COARSE: u16 = 17977;
/// Right channel, 2nd harmonic, fine trim.
pub const REG_THD_R2_FINE: u16 = 22290;
/// Right channel, 2nd harmonic, coarse trim.
pub const REG_THD_R2_COARSE: u16 = 2649;
/// Right channel, 3rd harmonic, fine trim.
pub const REG_THD_R3_FINE: u16 = 38059;
/// Right channel, 3rd harmonic, coarse trim.
pub const REG_THD_R3_COARSE: u16 = 57542;

/// One entry of the power-on default table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterDefault {
    /// 16-bit register address.
    pub address: u16,
    /// Value the register holds after power-on / reset.
    pub value: u8,
}

const fn def(address: u16, value: u8) -> RegisterDefault {
    RegisterDefault { address, value }
}

/// Power-on default values, suitable for seeding a transport-side register
/// cache. Registers not listed here default to `0x00`.
///
/// The entries at 51015, 29577, 18362, 39786, 47915, and 6100 are part of the
/// vendor initialization set and carry no driver-visible function.
pub const REGISTER_DEFAULTS: [RegisterDefault; 22] = [
    def(REG_INPUT_CONFIG, 0x8C),
    def(REG_GENERAL_SET, 0x87),
    def(51015, 0x10),
    def(REG_MASTER_MODE, 0x02),
    def(REG_DPLL, 0x9A),
    def(REG_THD_ENABLE, 0x00),
    def(REG_VOLUME_LEFT, 0xFF),
    def(REG_VOLUME_RIGHT, 0xFF),
    def(REG_THD_L2_FINE, 0x00),
    def(REG_THD_L2_COARSE, 0x00),
    def(REG_THD_L3_FINE, 0x00),
    def(REG_THD_L3_COARSE, 0x00),
    def(29577, 0x00),
    def(18362, 0x00),
    def(39786, 0x00),
    def(47915, 0x00),
    def(6100, 0x00),
    def(REG_THD_R2_FINE, 0x00),
    def(REG_THD_R2_COARSE, 0x00),
    def(REG_THD_R3_FINE, 0x00),
    def(REG_THD_R3_COARSE, 0x00),
    def(REG_THD_SEPARATE, 0x01),
];

/// Whether `address` may be read. True for the whole 16-bit space.
#[must_use]
pub const fn is_readable(_address: u16) -> bool {
    true
}

/// Whether `address` may be written. True for the whole 16-bit space.
#[must_use]
pub const fn is_writable(_address: u16) -> bool {
    true
}

/// Whether `address` must bypass any transport cache. True for the whole
/// 16-bit space — see the module docs for why caching is disabled.
#[must_use]
pub const fn is_volatile(_address: u16) -> bool {
    true
}

/// Look up the power-on default for `address`, if it has a listed one.
#[must_use]
pub fn default_value(address: u16) -> Option<u8> {
    REGISTER_DEFAULTS
        .iter()
        .find(|d| d.address == address)
        .map(|d| d.value)
}

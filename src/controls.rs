//! Mixer control bindings.
//!
//! Each user-facing control is a declarative binding from a name to a
//! register (or a bit-field within one) plus a validated value domain. The
//! binding does the bidirectional translation between the control value and
//! the register bit pattern; all bus traffic goes through
//! [`crate::bus::update_bits`] or plain byte writes, so a control write never
//! disturbs fields it does not own.
//!
//! The concrete control table for this chip is at the bottom of the module.

use crate::bus::{update_bits, RegisterBus};
use crate::registers::{
    REG_GENERAL_SET, REG_INPUT_CONFIG, REG_THD_ENABLE, REG_THD_L2_COARSE, REG_THD_L2_FINE,
    REG_THD_L3_COARSE, REG_THD_L3_FINE, REG_THD_R2_COARSE, REG_THD_R2_FINE, REG_THD_R3_COARSE,
    REG_THD_R3_FINE, REG_THD_SEPARATE, REG_VOLUME_LEFT, REG_VOLUME_RIGHT,
};
use crate::Error;

/// Contiguous bit-field within one 8-bit register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitField {
    /// Register holding the field.
    pub register: u16,
    /// Bit offset of the field's least significant bit.
    pub shift: u8,
    /// Field width in bits (1..=8).
    pub width: u8,
}

impl BitField {
    /// Byte mask selecting this field.
    #[must_use]
    pub const fn mask(self) -> u8 {
        (((1u16 << self.width) - 1) as u8) << self.shift
    }

    /// Read the field value (shifted down to bit 0).
    pub fn read<B: RegisterBus>(self, bus: &mut B) -> Result<u8, B::BusError> {
        Ok((bus.read_register(self.register)? & self.mask()) >> self.shift)
    }

    /// Read-modify-write the field, leaving co-located fields untouched.
    pub fn write<B: RegisterBus>(self, bus: &mut B, value: u8) -> Result<(), B::BusError> {
        update_bits(bus, self.register, self.mask(), value << self.shift)
    }
}

/// Enumerated control: a bit-field whose stored integer indexes an ordered
/// label list.
#[derive(Debug, Clone, Copy)]
pub struct EnumControl {
    /// Control name presented to the host framework.
    pub name: &'static str,
    /// Target bit-field.
    pub field: BitField,
    /// Ordered value labels; the register field stores the index.
    pub labels: &'static [&'static str],
}

impl EnumControl {
    /// Write label index `index`.
    ///
    /// An index at or beyond the label count is rejected with
    /// [`Error::InvalidControlValue`] and no register access happens.
    pub fn set<B: RegisterBus>(&self, bus: &mut B, index: usize) -> Result<(), Error<B::BusError>> {
        if index >= self.labels.len() {
            return Err(Error::InvalidControlValue);
        }
        #[allow(clippy::cast_possible_truncation)] // label lists are tiny
        self.field.write(bus, index as u8)?;
        Ok(())
    }

    /// Read the currently selected label index.
    pub fn get<B: RegisterBus>(&self, bus: &mut B) -> Result<u8, Error<B::BusError>> {
        Ok(self.field.read(bus)?)
    }
}

/// Numeric control bound to one full register byte.
#[derive(Debug, Clone, Copy)]
pub struct RangeControl {
    /// Control name presented to the host framework.
    pub name: &'static str,
    /// Target register.
    pub register: u16,
    /// Inclusive lower bound.
    pub min: u8,
    /// Inclusive upper bound.
    pub max: u8,
}

impl RangeControl {
    /// Write `value` as the register byte, rejecting values outside
    /// `[min, max]` without touching the bus.
    pub fn set<B: RegisterBus>(&self, bus: &mut B, value: u8) -> Result<(), Error<B::BusError>> {
        if value < self.min || value > self.max {
            return Err(Error::InvalidControlValue);
        }
        bus.write_register(self.register, value)?;
        Ok(())
    }

    /// Read the register byte back.
    pub fn get<B: RegisterBus>(&self, bus: &mut B) -> Result<u8, Error<B::BusError>> {
        Ok(bus.read_register(self.register)?)
    }
}

/// Numeric control bound to two registers updated in lock-step (stereo
/// left/right pairs).
///
/// The two byte writes are separate bus transactions; there is no atomicity
/// across them.
#[derive(Debug, Clone, Copy)]
pub struct PairedRangeControl {
    /// Control name presented to the host framework.
    pub name: &'static str,
    /// Left-channel register.
    pub left: u16,
    /// Right-channel register.
    pub right: u16,
    /// Inclusive lower bound.
    pub min: u8,
    /// Inclusive upper bound.
    pub max: u8,
}

impl PairedRangeControl {
    /// Write the same validated `value` to both registers, left first.
    pub fn set<B: RegisterBus>(&self, bus: &mut B, value: u8) -> Result<(), Error<B::BusError>> {
        if value < self.min || value > self.max {
            return Err(Error::InvalidControlValue);
        }
        bus.write_register(self.left, value)?;
        bus.write_register(self.right, value)?;
        Ok(())
    }

    /// Read the left-channel register (both channels track the same value).
    pub fn get<B: RegisterBus>(&self, bus: &mut B) -> Result<u8, Error<B::BusError>> {
        Ok(bus.read_register(self.left)?)
    }
}

/// Decibel scale published alongside a range control, in centi-dB.
///
/// The register byte itself stays the chip's attenuation code — only the
/// displayed scale is logarithmic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DbScale {
    /// Gain at scale position 0, in centi-dB.
    pub min_cdb: i32,
    /// Gain increment per position, in centi-dB.
    pub step_cdb: i32,
    /// Whether position 0 is presented as mute rather than a gain.
    pub mute_at_min: bool,
}

impl DbScale {
    /// Gain at scale position `position`, in centi-dB.
    #[must_use]
    pub const fn cdb_at(self, position: u8) -> i32 {
        self.min_cdb + self.step_cdb * position as i32
    }
}

// ── Control table ────────────────────────────────────────────────────────────

/// Stereo digital volume, one attenuation byte per channel.
///
/// The byte is the attenuation code: `0x00` = 0 dB, each step adds 0.5 dB of
/// attenuation, `0xFF` = −127.5 dB (effectively muted).
pub const DIGITAL_PLAYBACK_VOLUME: PairedRangeControl = PairedRangeControl {
    name: "Digital Playback Volume",
    left: REG_VOLUME_LEFT,
    right: REG_VOLUME_RIGHT,
    min: 0,
    max: 255,
};

/// Published gain table for [`DIGITAL_PLAYBACK_VOLUME`]: −127.50 dB to 0 dB
/// in 0.5 dB steps, mute at the bottom position.
pub const VOLUME_SCALE: DbScale = DbScale {
    min_cdb: -12_750,
    step_cdb: 50,
    mute_at_min: true,
};

/// Channel mute mode, sharing the general-settings byte with the filter
/// selects. The mute sequencer drives the same two bits around stream
/// lifecycle events.
pub const CHANNEL_MUTE: EnumControl = EnumControl {
    name: "Ch Mute",
    field: BitField {
        register: REG_GENERAL_SET,
        shift: 0,
        width: 2,
    },
    labels: &["Normal", "Mute Lch", "Mute Rch", "Mute both"],
};

/// FIR interpolation filter shape.
pub const FIR_FILTER: EnumControl = EnumControl {
    name: "FIR Filter",
    field: BitField {
        register: REG_GENERAL_SET,
        shift: 5,
        width: 2,
    },
    labels: &["Fast Roll-Off", "Slow Roll-Off", "Minimum Phase"],
};

/// IIR analog-reconstruction filter corner frequency.
pub const IIR_FILTER: EnumControl = EnumControl {
    name: "IIR Filter",
    field: BitField {
        register: REG_GENERAL_SET,
        shift: 2,
        width: 2,
    },
    labels: &["47kHz", "50kHz", "60kHz", "70kHz"],
};

/// Serial audio input source.
pub const INPUT_SELECT: EnumControl = EnumControl {
    name: "Input",
    field: BitField {
        register: REG_INPUT_CONFIG,
        shift: 0,
        width: 2,
    },
    labels: &["I2S", "SPDIF", "reserved", "DSD"],
};

/// THD compensation on/off.
pub const THD_COMPENSATION: EnumControl = EnumControl {
    name: "THD Compensation",
    field: BitField {
        register: REG_THD_ENABLE,
        shift: 6,
        width: 1,
    },
    labels: &["Enable comp.", "Disable comp."],
};

/// Apply the THD trims per channel or shared across both.
pub const THD_SEPARATE: EnumControl = EnumControl {
    name: "THD Channel Separation",
    field: BitField {
        register: REG_THD_SEPARATE,
        shift: 0,
        width: 1,
    },
    labels: &["Sep. comp.", "Non Sep. comp."],
};

const fn trim(name: &'static str, register: u16) -> RangeControl {
    RangeControl {
        name,
        register,
        min: 0,
        max: 255,
    }
}

/// Per-channel 2nd/3rd-harmonic distortion correction trims.
pub const THD_TRIMS: [RangeControl; 8] = [
    trim("Lch 2nd THD Coarse", REG_THD_L2_COARSE),
    trim("Lch 2nd THD Fine", REG_THD_L2_FINE),
    trim("Lch 3rd THD Coarse", REG_THD_L3_COARSE),
    trim("Lch 3rd THD Fine", REG_THD_L3_FINE),
    trim("Rch 2nd THD Coarse", REG_THD_R2_COARSE),
    trim("Rch 2nd THD Fine", REG_THD_R2_FINE),
    trim("Rch 3rd THD Coarse", REG_THD_R3_COARSE),
    trim("Rch 3rd THD Fine", REG_THD_R3_FINE),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitfield_mask_covers_width_at_shift() {
        let field = BitField {
            register: 0,
            shift: 2,
            width: 2,
        };
        assert_eq!(field.mask(), 0b0000_1100);
        let wide = BitField {
            register: 0,
            shift: 0,
            width: 8,
        };
        assert_eq!(wide.mask(), 0xFF);
    }

    #[test]
    fn filter_selects_do_not_overlap_the_mute_bits() {
        let mute = CHANNEL_MUTE.field.mask();
        assert_eq!(mute & FIR_FILTER.field.mask(), 0);
        assert_eq!(mute & IIR_FILTER.field.mask(), 0);
        assert_eq!(FIR_FILTER.field.mask() & IIR_FILTER.field.mask(), 0);
    }

    #[test]
    fn every_enum_field_can_hold_its_largest_index() {
        for control in [
            &CHANNEL_MUTE,
            &FIR_FILTER,
            &IIR_FILTER,
            &INPUT_SELECT,
            &THD_COMPENSATION,
            &THD_SEPARATE,
        ] {
            let capacity = 1usize << control.field.width;
            assert!(control.labels.len() <= capacity, "{}", control.name);
        }
    }

    #[test]
    fn volume_scale_spans_minus_127_5_db_to_zero() {
        assert_eq!(VOLUME_SCALE.cdb_at(0), -12_750);
        assert_eq!(VOLUME_SCALE.cdb_at(255), 0);
        assert!(VOLUME_SCALE.mute_at_min);
    }
}

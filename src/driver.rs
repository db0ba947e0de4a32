//! Per-device driver instance and its stream lifecycle hooks.
//!
//! [`Es9028q2m`] owns the register transport and the last negotiated
//! [`DaiFormat`]. The host framework calls the hooks in this order for a
//! playback stream:
//!
//! ```text
//! set_fmt → startup → hw_params → prepare → trigger(Start) …
//!     … trigger(Stop) → shutdown
//! ```
//!
//! The output stays muted from startup until prepare, so format and rate
//! changes are never audible.

use crate::bus::{update_bits, RegisterBus};
use crate::controls::DIGITAL_PLAYBACK_VOLUME;
use crate::mute::{Trigger, MUTE_MASK};
use crate::registers::{REG_DPLL, REG_GENERAL_SET, REG_INPUT_CONFIG, REG_MASTER_MODE};
use crate::stream::{
    serial_width_bits, ClockInversion, ClockRole, ClockTuning, DaiFormat, FrameFormat,
    StreamParams, WIDTH_FIELD_MASK,
};
use crate::Error;

/// ES9028Q2M control driver over a [`RegisterBus`] transport.
///
/// One instance per chip. The host framework is expected to serialize
/// control changes and lifecycle hooks for a given instance; the driver
/// itself does no locking.
pub struct Es9028q2m<B> {
    bus: B,
    dai_format: Option<DaiFormat>,
}

impl<B: RegisterBus> Es9028q2m<B> {
    /// Create a driver instance over `bus`. No register is touched until a
    /// lifecycle hook or control write runs.
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            dai_format: None,
        }
    }

    /// Access the transport, e.g. to apply a control binding:
    /// `CHANNEL_MUTE.set(dac.bus_mut(), 3)`.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Release the transport.
    pub fn release(self) -> B {
        self.bus
    }

    /// The last format stored by [`Self::set_fmt`], if any.
    #[must_use]
    pub fn dai_format(&self) -> Option<DaiFormat> {
        self.dai_format
    }

    /// Store the negotiated interface format.
    ///
    /// Only plain I2S with non-inverted clocks is accepted; on rejection the
    /// previously stored format stays in effect. The clock role is recorded
    /// here but enforced at [`Self::startup`].
    pub fn set_fmt(&mut self, format: DaiFormat) -> Result<(), Error<B::BusError>> {
        if format.frame != FrameFormat::I2s {
            return Err(Error::UnsupportedFormat);
        }
        if format.inversion != ClockInversion::Normal {
            return Err(Error::UnsupportedFormat);
        }
        self.dai_format = Some(format);
        Ok(())
    }

    /// Stream startup: verify the negotiated clock role, then mute.
    ///
    /// A master role (or a missing negotiation) is rejected before any
    /// register access, so a refused stream leaves the hardware untouched.
    pub fn startup(&mut self) -> Result<(), Error<B::BusError>> {
        match self.dai_format {
            Some(format) if format.role == ClockRole::Slave => {}
            _ => return Err(Error::UnsupportedClockRole),
        }
        self.mute()
    }

    /// Stream shutdown: mute.
    pub fn shutdown(&mut self) -> Result<(), Error<B::BusError>> {
        self.mute()
    }

    /// Apply negotiated hardware parameters.
    ///
    /// Merges the serial width bits into the input-configuration register,
    /// preserving its low six bits, then writes the DPLL bandwidth and
    /// master-mode pair for the sample rate. An unsupported bit depth is
    /// rejected before any register access. An unlisted sample rate is not
    /// an error: the 48k low-tier tuning is substituted (and logged when the
    /// `defmt` feature is active).
    pub fn hw_params(&mut self, params: StreamParams) -> Result<(), Error<B::BusError>> {
        let width = serial_width_bits(params.bit_depth).ok_or(Error::UnsupportedFormat)?;
        let iface = self.bus.read_register(REG_INPUT_CONFIG)? & !WIDTH_FIELD_MASK;
        self.bus.write_register(REG_INPUT_CONFIG, iface | width)?;

        let tuning = ClockTuning::for_rate(params.sample_rate_hz);
        #[cfg(feature = "defmt")]
        if tuning.fallback {
            defmt::warn!(
                "unlisted sample rate {=u32} Hz, substituting 48k low-tier tuning",
                params.sample_rate_hz
            );
        }
        self.bus.write_register(REG_DPLL, tuning.dpll_bandwidth)?;
        self.bus.write_register(REG_MASTER_MODE, tuning.master_mode)?;
        Ok(())
    }

    /// Prepare for playback: unmute. Runs after [`Self::hw_params`], before
    /// the first trigger.
    pub fn prepare(&mut self) -> Result<(), Error<B::BusError>> {
        self.unmute()
    }

    /// Handle a stream trigger. Stop-like triggers mute; start-like
    /// triggers issue no register write (prepare already unmuted).
    pub fn trigger(&mut self, trigger: Trigger) -> Result<(), Error<B::BusError>> {
        if trigger.mutes() {
            self.mute()
        } else {
            Ok(())
        }
    }

    /// Set both mute bits in the general-settings register.
    pub fn mute(&mut self) -> Result<(), Error<B::BusError>> {
        update_bits(&mut self.bus, REG_GENERAL_SET, MUTE_MASK, MUTE_MASK)?;
        Ok(())
    }

    /// Clear both mute bits in the general-settings register.
    ///
    /// Like [`Self::mute`] this is a read-modify-write: the FIR and IIR
    /// filter selects share the byte and must survive the unmute.
    pub fn unmute(&mut self) -> Result<(), Error<B::BusError>> {
        update_bits(&mut self.bus, REG_GENERAL_SET, MUTE_MASK, 0x00)?;
        Ok(())
    }

    /// Set the stereo digital volume: the same attenuation byte is written
    /// to both channel registers (left first, no atomicity across the pair).
    pub fn set_volume(&mut self, value: u8) -> Result<(), Error<B::BusError>> {
        DIGITAL_PLAYBACK_VOLUME.set(&mut self.bus, value)
    }
}

//! Register-level control driver for the ES9028Q2M stereo audio DAC.
//!
//! The chip exposes an 8-bit register file behind 16-bit addresses on an I2C
//! control port. The audio samples themselves travel over a separate serial
//! audio bus (I2S or SPDIF) and never pass through this driver — everything
//! here is control plane: volume, filter selection, mute sequencing, and the
//! per-stream hardware parameters (serial word width, DPLL bandwidth,
//! master-mode divider).
//!
//! # Layers
//!
//! ```text
//! Host audio framework (mixer controls, stream negotiation)
//!         ↓
//! [`Es9028q2m`] driver + [`controls`] bindings (this crate)
//!         ↓
//! [`bus::RegisterBus`] transport (I2C adapter or test mock)
//! ```
//!
//! # Example
//!
//! ```
//! use es9028q2m::{
//!     mock::MockRegisterBus, ClockInversion, ClockRole, DaiFormat, Es9028q2m, FrameFormat,
//!     StreamParams,
//! };
//!
//! let mut dac = Es9028q2m::new(MockRegisterBus::new());
//! dac.set_fmt(DaiFormat {
//!     role: ClockRole::Slave,
//!     frame: FrameFormat::I2s,
//!     inversion: ClockInversion::Normal,
//! })?;
//! dac.startup()?; // muted until the stream is prepared
//! dac.hw_params(StreamParams { sample_rate_hz: 44_100, bit_depth: 24, channels: 2 })?;
//! dac.prepare()?; // unmute, playback may start
//! # Ok::<(), es9028q2m::Error<es9028q2m::mock::MockBusError>>(())
//! ```
//!
//! # Features
//!
//! - `std`: standard library support (host-side testing)
//! - `defmt`: `defmt::Format` derives and the unlisted-sample-rate warning

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bus;
pub mod controls;
pub mod driver;
pub mod mock;
pub mod mute;
pub mod registers;
pub mod stream;

pub use driver::Es9028q2m;
pub use mute::{MuteState, Trigger};
pub use stream::{
    ClockInversion, ClockRole, ClockTuning, DaiFormat, FrameFormat, StreamParams, PLAYBACK,
    SUPPORTED_RATES,
};

/// Errors surfaced by the control driver.
///
/// Every failure is returned to the caller immediately; the driver performs
/// no retries and no local recovery. A rejected stream parameter leaves the
/// hardware untouched; a rejected control write leaves the previous value in
/// effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Sample width is not 16, 24, or 32 bits, or the requested frame format
    /// / clock polarity is not plain I2S with non-inverted clocks.
    UnsupportedFormat,
    /// The device can only run as the bus-timing slave; a master role was
    /// requested (or no format has been negotiated yet).
    UnsupportedClockRole,
    /// Enum index or range value outside the control's declared domain.
    InvalidControlValue,
    /// Propagated register-bus failure (bus timeout, NACK, …).
    Transport(E),
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Error::Transport(err)
    }
}

impl<E> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedFormat => write!(f, "unsupported sample or frame format"),
            Self::UnsupportedClockRole => write!(f, "only the bus-timing slave role is supported"),
            Self::InvalidControlValue => write!(f, "control value outside its declared domain"),
            Self::Transport(_) => write!(f, "register bus transport error"),
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for Error<E> {}

//! Stream parameter translation.
//!
//! Two pure mappings, applied once per format/rate negotiation:
//!
//! 1. Bit depth → serial word width bits of the input-configuration register.
//!    16-bit selects the zero pattern; 24-bit and 32-bit share the extended
//!    pattern — the chip has no separate 32-bit mode.
//! 2. Sample rate → (DPLL bandwidth, master mode) register pair:
//!
//! | Rate family | Rates | DPLL | Master mode |
//! |---|---|---|---|
//! | 44.1k low  | 11025, 22050, 44100, 88200      | `0xFA` | `0x02` |
//! | 44.1k high | 176400, 352800                  | `0xFA` | `0x00` |
//! | 48k low    | 8000, 16000, 32000, 48000, 64000 | `0x9A` | `0x02` |
//! | 48k high   | 96000, 192000, 384000           | `0x9A` | `0x00` |
//!
//! The 44.1k family gets a wider DPLL bandwidth to track the higher jitter
//! on its reference clock; the high tiers switch the stop-divider mode to
//! compensate for the frame-rate scaling. A rate outside the table falls
//! back to the 48k low-tier pair — deliberately not an error, the chip is
//! mis-tuned rather than silent. [`ClockTuning::fallback`] makes the outcome
//! visible to callers that want to log it.

/// Sample rates accepted by the stream negotiation surface, ascending.
pub const SUPPORTED_RATES: [u32; 14] = [
    8000, 11025, 16000, 22050, 32000, 44100, 48000, 64000, 88200, 96000, 176400, 192000, 352800,
    384000,
];

/// Serial word width field bits within the input-configuration register.
pub const WIDTH_FIELD_MASK: u8 = 0xC0;
/// Width field pattern for 16-bit samples.
pub const WIDTH_16BIT: u8 = 0x00;
/// Width field pattern shared by 24-bit and 32-bit samples.
pub const WIDTH_EXTENDED: u8 = 0x80;

/// Map a sample bit depth to its width field pattern, or `None` when the
/// depth is unsupported.
#[must_use]
pub const fn serial_width_bits(bit_depth: u8) -> Option<u8> {
    match bit_depth {
        16 => Some(WIDTH_16BIT),
        24 | 32 => Some(WIDTH_EXTENDED),
        _ => None,
    }
}

/// DPLL bandwidth and master-mode values for one sample rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTuning {
    /// Value for the DPLL bandwidth register.
    pub dpll_bandwidth: u8,
    /// Value for the master mode / stop-divider register.
    pub master_mode: u8,
    /// True when the rate was not in the table and the 48k low-tier default
    /// was substituted.
    pub fallback: bool,
}

impl ClockTuning {
    const fn tier(dpll_bandwidth: u8, master_mode: u8) -> Self {
        Self {
            dpll_bandwidth,
            master_mode,
            fallback: false,
        }
    }

    /// Tuning substituted for rates outside the table.
    pub const FALLBACK: Self = Self {
        dpll_bandwidth: 0x9A,
        master_mode: 0x02,
        fallback: true,
    };

    /// Look up the tuning pair for `rate_hz`.
    #[must_use]
    pub const fn for_rate(rate_hz: u32) -> Self {
        match rate_hz {
            11025 | 22050 | 44100 | 88200 => Self::tier(0xFA, 0x02),
            176_400 | 352_800 => Self::tier(0xFA, 0x00),
            8000 | 16000 | 32000 | 48000 | 64000 => Self::tier(0x9A, 0x02),
            96_000 | 192_000 | 384_000 => Self::tier(0x9A, 0x00),
            _ => Self::FALLBACK,
        }
    }
}

/// Who drives the serial bus clocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockRole {
    /// The device derives its timing from externally supplied clocks.
    /// The only role this chip supports.
    Slave,
    /// The device would generate the bus clocks itself. Rejected.
    Master,
}

/// Serial frame layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameFormat {
    /// Plain I2S. The only layout this chip supports.
    I2s,
    /// Left-justified frames. Rejected.
    LeftJustified,
    /// Right-justified frames. Rejected.
    RightJustified,
}

/// Bit/frame clock polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockInversion {
    /// Both clocks normal. The only polarity this chip supports.
    Normal,
    /// Bit clock inverted. Rejected.
    BitClockInverted,
    /// Frame clock inverted. Rejected.
    FrameClockInverted,
    /// Both clocks inverted. Rejected.
    BothInverted,
}

/// Negotiated digital-audio-interface format, stored per device instance by
/// [`crate::Es9028q2m::set_fmt`] and consulted at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DaiFormat {
    /// Bus timing role.
    pub role: ClockRole,
    /// Frame layout.
    pub frame: FrameFormat,
    /// Clock polarity.
    pub inversion: ClockInversion,
}

/// Negotiated per-stream hardware parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StreamParams {
    /// Sample rate in Hz.
    pub sample_rate_hz: u32,
    /// Bits per sample (16, 24, or 32).
    pub bit_depth: u8,
    /// Channel count (this chip is stereo-only).
    pub channels: u8,
}

impl Default for StreamParams {
    fn default() -> Self {
        Self {
            sample_rate_hz: 44_100,
            bit_depth: 16,
            channels: 2,
        }
    }
}

/// Fixed playback capabilities advertised to the host framework for stream
/// negotiation. There is no continuous-rate negotiation beyond the list.
#[derive(Debug, Clone, Copy)]
pub struct PlaybackCapabilities {
    /// Accepted sample rates.
    pub rates: &'static [u32],
    /// Accepted sample widths.
    pub bit_depths: &'static [u8],
    /// Minimum channel count.
    pub channels_min: u8,
    /// Maximum channel count.
    pub channels_max: u8,
}

impl PlaybackCapabilities {
    /// Whether `rate_hz` is in the negotiable rate list.
    #[must_use]
    pub fn supports_rate(&self, rate_hz: u32) -> bool {
        self.rates.contains(&rate_hz)
    }

    /// Whether `bit_depth` is a negotiable sample width.
    #[must_use]
    pub fn supports_bit_depth(&self, bit_depth: u8) -> bool {
        self.bit_depths.contains(&bit_depth)
    }
}

/// Playback capabilities of this chip: stereo only, 16/24/32-bit signed
/// little-endian, the fixed rate list.
pub const PLAYBACK: PlaybackCapabilities = PlaybackCapabilities {
    rates: &SUPPORTED_RATES,
    bit_depths: &[16, 24, 32],
    channels_min: 2,
    channels_max: 2,
};

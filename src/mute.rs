//! Mute sequencing around the stream lifecycle.
//!
//! The two channel-mute bits live in the general-settings register, shared
//! with the FIR and IIR filter selects, so both directions of the mute
//! update are read-modify-write. The driver keeps no mute flag in memory —
//! the register itself is the state, and the lifecycle hooks write it
//! unconditionally:
//!
//! | Event | Result |
//! |---|---|
//! | startup, shutdown | muted |
//! | prepare | unmuted |
//! | trigger Stop / Suspend / PausePush | muted |
//! | trigger Start / Resume / PauseRelease | unchanged, no write |
//!
//! [`MuteState`] is the pure model of that table for reasoning and tests.

/// Both channel-mute bits in the general-settings register.
pub const MUTE_MASK: u8 = 0x03;

/// Mute model state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MuteState {
    /// Both channels muted.
    Muted,
    /// Both channels audible.
    Unmuted,
}

/// Stream trigger events delivered by the host framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trigger {
    /// Playback starts.
    Start,
    /// Playback stops.
    Stop,
    /// Playback resumes after a suspend.
    Resume,
    /// System suspend.
    Suspend,
    /// User pressed pause.
    PausePush,
    /// User released pause.
    PauseRelease,
}

impl Trigger {
    /// Whether this trigger forces a mute write. The remaining triggers
    /// issue no register write at all — prepare already unmuted the stream.
    #[must_use]
    pub const fn mutes(self) -> bool {
        matches!(self, Self::Stop | Self::Suspend | Self::PausePush)
    }
}

impl MuteState {
    /// State after a stream trigger.
    #[must_use]
    pub const fn after_trigger(self, trigger: Trigger) -> Self {
        if trigger.mutes() {
            Self::Muted
        } else {
            self
        }
    }

    /// State after stream startup or shutdown.
    #[must_use]
    pub const fn after_stream_edge() -> Self {
        Self::Muted
    }

    /// State after the prepare hook ran.
    #[must_use]
    pub const fn after_prepare() -> Self {
        Self::Unmuted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_suspend_and_pause_push_mute() {
        for trigger in [Trigger::Stop, Trigger::Suspend, Trigger::PausePush] {
            assert_eq!(MuteState::Unmuted.after_trigger(trigger), MuteState::Muted);
            assert_eq!(MuteState::Muted.after_trigger(trigger), MuteState::Muted);
        }
    }

    #[test]
    fn start_resume_and_pause_release_leave_state_unchanged() {
        for trigger in [Trigger::Start, Trigger::Resume, Trigger::PauseRelease] {
            assert_eq!(
                MuteState::Unmuted.after_trigger(trigger),
                MuteState::Unmuted
            );
            assert_eq!(MuteState::Muted.after_trigger(trigger), MuteState::Muted);
        }
    }

    #[test]
    fn stream_edges_mute_and_prepare_unmutes() {
        assert_eq!(MuteState::after_stream_edge(), MuteState::Muted);
        assert_eq!(MuteState::after_prepare(), MuteState::Unmuted);
    }
}

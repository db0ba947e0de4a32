//! Mute sequencing across the stream lifecycle.
//!
//! The output must be muted from startup until prepare and muted again on
//! every stop-like trigger, and no mute traffic may disturb the filter
//! fields sharing the general-settings byte.

use es9028q2m::{
    mock::MockRegisterBus, registers::REG_GENERAL_SET, ClockInversion, ClockRole, DaiFormat,
    Error, Es9028q2m, FrameFormat, Trigger,
};

const SLAVE_I2S: DaiFormat = DaiFormat {
    role: ClockRole::Slave,
    frame: FrameFormat::I2s,
    inversion: ClockInversion::Normal,
};

fn slave_dac() -> Es9028q2m<MockRegisterBus> {
    let mut dac = Es9028q2m::new(MockRegisterBus::new());
    dac.set_fmt(SLAVE_I2S).unwrap();
    dac
}

#[test]
fn startup_mutes_both_channels() {
    let mut dac = slave_dac();
    dac.startup().unwrap();
    assert_eq!(dac.bus_mut().register(REG_GENERAL_SET) & 0x03, 0x03);
    assert_eq!(dac.bus_mut().write_count(REG_GENERAL_SET), 1);
}

#[test]
fn startup_without_negotiated_format_is_rejected() {
    let mut dac = Es9028q2m::new(MockRegisterBus::new());
    assert_eq!(dac.startup(), Err(Error::UnsupportedClockRole));
    assert!(dac.bus_mut().writes().is_empty());
}

#[test]
fn master_clock_role_is_rejected_with_no_register_writes() {
    let mut dac = Es9028q2m::new(MockRegisterBus::new());
    dac.set_fmt(DaiFormat {
        role: ClockRole::Master,
        ..SLAVE_I2S
    })
    .unwrap();
    assert_eq!(dac.startup(), Err(Error::UnsupportedClockRole));
    assert!(dac.bus_mut().writes().is_empty());
}

#[test]
fn prepare_unmutes() {
    let mut dac = slave_dac();
    dac.startup().unwrap();
    dac.prepare().unwrap();
    assert_eq!(dac.bus_mut().register(REG_GENERAL_SET) & 0x03, 0x00);
}

#[test]
fn unmute_preserves_the_filter_fields_sharing_the_byte() {
    // FIR = 0b11, IIR = 0b01, mute bits set: unmute must clear only bits 1:0.
    let mut dac = slave_dac();
    dac.bus_mut().set_register(REG_GENERAL_SET, 0x67);
    dac.prepare().unwrap();
    assert_eq!(dac.bus_mut().register(REG_GENERAL_SET), 0x64);
}

#[test]
fn mute_preserves_the_filter_fields_sharing_the_byte() {
    let mut dac = slave_dac();
    dac.bus_mut().set_register(REG_GENERAL_SET, 0x64);
    dac.shutdown().unwrap();
    assert_eq!(dac.bus_mut().register(REG_GENERAL_SET), 0x67);
}

#[test]
fn start_then_stop_issues_exactly_one_mute_write() {
    let mut dac = slave_dac();
    dac.startup().unwrap();
    dac.prepare().unwrap();
    let before = dac.bus_mut().write_count(REG_GENERAL_SET);

    dac.trigger(Trigger::Start).unwrap();
    assert_eq!(dac.bus_mut().write_count(REG_GENERAL_SET), before);

    dac.trigger(Trigger::Stop).unwrap();
    assert_eq!(dac.bus_mut().write_count(REG_GENERAL_SET), before + 1);
    assert_eq!(dac.bus_mut().register(REG_GENERAL_SET) & 0x03, 0x03);
}

#[test]
fn start_like_triggers_never_touch_the_bus() {
    let mut dac = slave_dac();
    dac.startup().unwrap();
    dac.prepare().unwrap();
    let before = dac.bus_mut().writes().len();
    for trigger in [Trigger::Start, Trigger::Resume, Trigger::PauseRelease] {
        dac.trigger(trigger).unwrap();
    }
    assert_eq!(dac.bus_mut().writes().len(), before);
}

#[test]
fn stop_like_triggers_all_mute() {
    for trigger in [Trigger::Stop, Trigger::Suspend, Trigger::PausePush] {
        let mut dac = slave_dac();
        dac.startup().unwrap();
        dac.prepare().unwrap();
        dac.trigger(trigger).unwrap();
        assert_eq!(dac.bus_mut().register(REG_GENERAL_SET) & 0x03, 0x03);
    }
}

#[test]
fn shutdown_mutes() {
    let mut dac = slave_dac();
    dac.startup().unwrap();
    dac.prepare().unwrap();
    dac.shutdown().unwrap();
    assert_eq!(dac.bus_mut().register(REG_GENERAL_SET) & 0x03, 0x03);
}

#[test]
fn transport_failures_propagate_without_retry() {
    let mut dac = slave_dac();
    dac.bus_mut().fail_next_read();
    assert!(matches!(dac.startup(), Err(Error::Transport(_))));
    // The failed read-modify-write must not have produced a write.
    assert!(dac.bus_mut().writes().is_empty());
}

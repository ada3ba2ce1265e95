use approx::assert_abs_diff_eq;
use tilt_animation_core::{Channel, Config, CycleClock, Rig};

/// it should produce 0.5 s for an elapsed reading 500 ms into the second cycle
#[test]
fn wraps_elapsed_into_cycle_seconds() {
    let clock = CycleClock::new(11_000).unwrap();
    assert_abs_diff_eq!(clock.cycle_time(11_500), 0.5, epsilon = 1e-6);
}

/// it should stay within [0, cycle_seconds) for arbitrary elapsed readings
#[test]
fn cycle_time_bounded() {
    let clock = CycleClock::default();
    let span = clock.cycle_seconds();
    for elapsed in [0u64, 1, 10_999, 11_000, 11_001, 123_456_789] {
        let t = clock.cycle_time(elapsed);
        assert!((0.0..span).contains(&t), "elapsed={elapsed} t={t}");
    }
}

/// it should rescale playback via config without touching keyframe data
#[test]
fn cycle_length_rescales_playback() {
    let ch = Channel::from_keys("lever", &[(0.0, 0.0), (10.0, 100.0)]);
    let fast = Config { cycle_ms: 5_000 }.clock().unwrap();
    let slow = Config { cycle_ms: 20_000 }.clock().unwrap();
    // The same elapsed reading lands at different cycle times, but the
    // channel itself is untouched.
    let elapsed = 7_000;
    assert_abs_diff_eq!(fast.cycle_time(elapsed), 2.0, epsilon = 1e-6);
    assert_abs_diff_eq!(slow.cycle_time(elapsed), 7.0, epsilon = 1e-6);
    assert_abs_diff_eq!(ch.evaluate(fast.cycle_time(elapsed)).unwrap(), 20.0, epsilon = 1e-4);
    assert_abs_diff_eq!(ch.evaluate(slow.cycle_time(elapsed)).unwrap(), 70.0, epsilon = 1e-4);
}

/// it should evaluate every channel against one shared reading, never re-sampled
#[test]
fn shared_reading_keeps_channels_in_phase() {
    let mut rig = Rig::new();
    // Two channels that agree (value == time) everywhere; any time skew
    // between their evaluations would show up as a mismatch.
    rig.add_channel(Channel::from_keys("x", &[(0.0, 0.0), (11.0, 11.0)]))
        .unwrap();
    rig.add_channel(Channel::from_keys("z", &[(0.0, 0.0), (11.0, 11.0)]))
        .unwrap();

    let now = 7.3;
    let sample = rig.sample_all(now).unwrap();
    assert_eq!(sample.time, now);
    let x = sample.get("x").unwrap();
    let z = sample.get("z").unwrap();
    assert_abs_diff_eq!(x, 7.3, epsilon = 1e-5);
    assert_eq!(x, z);
}

/// it should produce identical frame samples for identical readings (determinism)
#[test]
fn sampling_is_deterministic() {
    let mut rig = Rig::new();
    rig.add_channel(Channel::from_keys(
        "ball_x",
        &[(6.1, 4.95), (6.2, 3.2), (6.3, 0.0), (6.4, -3.2), (6.5, -4.95)],
    ))
    .unwrap();

    let clock = CycleClock::default();
    for elapsed in [0u64, 6_250, 6_250, 17_250] {
        let a = rig.sample_all(clock.cycle_time(elapsed)).unwrap();
        let b = rig.sample_all(clock.cycle_time(elapsed)).unwrap();
        assert_eq!(a, b);
    }
    // 17 250 ms wraps to the same cycle time as 6 250 ms.
    let first = rig.sample_all(clock.cycle_time(6_250)).unwrap();
    let wrapped = rig.sample_all(clock.cycle_time(17_250)).unwrap();
    assert_eq!(first, wrapped);
}

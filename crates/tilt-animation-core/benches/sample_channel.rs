use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tilt_animation_core::{Channel, CycleClock, Rig};

fn dense_channel(name: &str, n: usize) -> Channel {
    let mut ch = Channel::new(name);
    for i in 0..n {
        let t = i as f32 * 11.0 / n as f32;
        ch.add_keyframe(t, (t * 3.7).sin());
    }
    ch
}

fn bench_sample(c: &mut Criterion) {
    let ch = dense_channel("bench", 40);
    c.bench_function("channel_evaluate_40_keys", |b| {
        b.iter(|| ch.evaluate(black_box(7.3)).unwrap())
    });

    let mut rig = Rig::new();
    for i in 0..20 {
        rig.add_channel(dense_channel(&format!("ch{i}"), 40)).unwrap();
    }
    let clock = CycleClock::default();
    c.bench_function("rig_sample_all_20_channels", |b| {
        b.iter(|| rig.sample_all(black_box(clock.cycle_time(7_300))).unwrap())
    });
}

criterion_group!(benches, bench_sample);
criterion_main!(benches);

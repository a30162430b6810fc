use blinc_transition::{
    interpolate, Keyframe, SequenceStart, SequentialTransition, TransitionConfig, Value,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn nested_value(offset: f64) -> Value {
    Value::mapping([
        ("position", Value::from([offset, offset * 2.0, offset * 3.0])),
        ("scale", Value::from(1.0 + offset)),
        (
            "style",
            Value::mapping([("opacity", offset), ("radius", offset * 8.0)]),
        ),
    ])
}

fn bench_interpolate(c: &mut Criterion) {
    let from = nested_value(0.0);
    let to = nested_value(1.0);

    c.bench_function("interpolate_nested", |b| {
        b.iter(|| interpolate(black_box(&from), black_box(&to), black_box(0.42)))
    });
}

fn bench_transition(c: &mut Criterion) {
    let transition = TransitionConfig::new(nested_value(0.0), nested_value(1.0))
        .duration(1.0)
        .easing("easeInOutCubic")
        .build()
        .unwrap();

    c.bench_function("transition_sample", |b| {
        b.iter(|| transition.sample(black_box(0.6)))
    });
}

fn bench_sequence(c: &mut Criterion) {
    let keyframes: Vec<_> = (1..=16).map(|i| Keyframe::new(i as f64)).collect();
    let sequence = SequentialTransition::new(SequenceStart::new(0.0).duration(0.25), keyframes)
        .unwrap();

    c.bench_function("sequence_sample_last_segment", |b| {
        b.iter(|| sequence.sample(black_box(3.9)))
    });
}

criterion_group!(benches, bench_interpolate, bench_transition, bench_sequence);
criterion_main!(benches);

//! Benchmarks for membrane generation and a full transition.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use squeeze_core::{Rect, RecordingCanvas, Size, Widget};
use squeeze_switch::{LayoutConstants, MembraneGenerator, SqueezeSwitch};

fn generator() -> MembraneGenerator {
    MembraneGenerator::new(LayoutConstants::from_bounds(Size::new(300.0, 60.0)))
}

fn bench_membrane_path(c: &mut Criterion) {
    let g = generator();

    c.bench_function("membrane_path", |b| b.iter(|| g.membrane_path(black_box(200.0))));
}

fn bench_knob_edge_path(c: &mut Criterion) {
    let g = generator();

    c.bench_function("membrane_path_for_knob_edge", |b| {
        b.iter(|| g.membrane_path_for_knob_edge(black_box(140.0), black_box(true)))
    });
}

fn bench_bounce_frame(c: &mut Criterion) {
    let g = generator();

    c.bench_function("bounce_frame", |b| {
        b.iter(|| g.bounce_frame(black_box(230.0), false, black_box(94.5)))
    });
}

fn bench_full_transition(c: &mut Criterion) {
    c.bench_function("tap_transition_60fps", |b| {
        b.iter(|| {
            let mut switch = SqueezeSwitch::with_state(true);
            switch.layout(Rect::new(0.0, 0.0, 300.0, 60.0));
            switch.toggle_animated();
            while switch.is_animating() {
                black_box(switch.tick(1.0 / 60.0));
            }
            switch.is_on()
        })
    });
}

fn bench_paint(c: &mut Criterion) {
    let mut switch = SqueezeSwitch::with_state(true);
    switch.layout(Rect::new(0.0, 0.0, 300.0, 60.0));
    let mut canvas = RecordingCanvas::new();

    c.bench_function("switch_paint", |b| {
        b.iter(|| {
            canvas.clear();
            switch.paint(&mut canvas);
            canvas.command_count()
        })
    });
}

criterion_group!(
    benches,
    bench_membrane_path,
    bench_knob_edge_path,
    bench_bounce_frame,
    bench_full_transition,
    bench_paint,
);
criterion_main!(benches);

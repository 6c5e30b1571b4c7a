//! Benchmarks for the per-frame container work: layout, draw and a full
//! drag-release-settle cycle.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use slideout::{ChildId, ChildSpec, Dimension, MeasureSpec, PanelConfig, PanelContainer};
use slideout_test_utils::MockDragController;
use slideout_test_utils::gestures::{drag, feed, pump_frames};

fn build_container(settle_step: i32) -> PanelContainer {
    let mock = MockDragController::new().with_settle_step(settle_step);
    let mut container = PanelContainer::new(PanelConfig::default(), Box::new(mock));
    container
        .add_child(ChildSpec::new("menu").panel().width(Dimension::Px(300)))
        .unwrap();
    container.add_child(ChildSpec::new("main").content()).unwrap();
    container
        .measure(MeasureSpec::exactly(1080), MeasureSpec::exactly(1920))
        .unwrap();
    container.layout();
    container.pop_events();
    container
}

fn bench_layout(c: &mut Criterion) {
    let mut container = build_container(50);
    let panel = ChildId::new("menu");

    c.bench_function("layout_mid_slide", |b| {
        let mut offset = 0.5f32;
        b.iter(|| {
            offset = if offset >= 1.0 { 0.5 } else { offset + 0.01 };
            container.set_panel_offset(panel, black_box(offset)).unwrap();
            container.layout();
            container.pop_events()
        });
    });
}

fn bench_draw(c: &mut Criterion) {
    let mut container = build_container(50);
    container.open(false).unwrap();
    container.layout();

    c.bench_function("draw_open", |b| {
        b.iter(|| black_box(container.draw()));
    });
}

fn bench_drag_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_release_settle");

    for steps in [4u32, 16, 64] {
        group.throughput(Throughput::Elements(steps as u64));
        let events = drag((10.0, 500.0), (260.0, 500.0), steps, 0);

        group.bench_with_input(BenchmarkId::from_parameter(steps), &events, |b, events| {
            b.iter(|| {
                let mut container = build_container(10);
                feed(&mut container, black_box(events));
                pump_frames(&mut container, 1000);
                container.close(false).unwrap();
                container.is_open()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout, bench_draw, bench_drag_cycle);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use map_layer_manager::{
    sync_layer_order, EngineLayer, LayerOrder, LayerType, MapEngine, MemoryEngine,
};
use std::hint::black_box;

/// Engine mit `basemap_count` fremden Layern unten, den verwalteten Layern
/// darüber und einigen Label-Layern oben.
fn build_engine(managed_count: usize, basemap_count: usize) -> (MemoryEngine, LayerOrder) {
    let mut engine = MemoryEngine::new();
    for index in 0..basemap_count {
        engine.add_layer(EngineLayer::new(format!("base-{index}"), LayerType::Fill));
    }
    for index in 0..managed_count {
        engine.add_layer(EngineLayer::new(format!("layer-{index}"), LayerType::Line));
    }
    for index in 0..8 {
        engine.add_layer(EngineLayer::new(format!("label-{index}"), LayerType::Symbol));
    }

    // Panel-Reihenfolge oben → unten entspricht dem Stack rückwärts
    let order: LayerOrder = (0..managed_count)
        .rev()
        .map(|index| format!("layer-{index}"))
        .collect();
    (engine, order)
}

fn bench_sync_after_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync_layer_order");

    for &managed_count in &[16usize, 64, 256] {
        let (engine, mut order) = build_engine(managed_count, 32);
        order.move_up("layer-0");

        group.bench_with_input(
            BenchmarkId::new("move_up_then_sync", managed_count),
            &managed_count,
            |b, _| {
                b.iter_batched(
                    || engine.clone(),
                    |mut engine| {
                        let report = sync_layer_order(&mut engine, black_box(&order));
                        black_box(report.moved.len())
                    },
                    criterion::BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

fn bench_drag_reorder(c: &mut Criterion) {
    let (_, base_order) = build_engine(512, 0);
    let first = "layer-511";
    let last = "layer-0";

    c.bench_function("layer_order_drop_top_to_bottom", |b| {
        b.iter_batched(
            || base_order.clone(),
            |mut order| {
                let moved = order.drop_onto(black_box(first), black_box(last));
                black_box(moved)
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_engine_lookup(c: &mut Criterion) {
    let (engine, _) = build_engine(256, 64);

    c.bench_function("engine_style_layers_256", |b| {
        b.iter(|| black_box(engine.style_layers().len()))
    });
}

criterion_group!(
    benches,
    bench_sync_after_move,
    bench_drag_reorder,
    bench_engine_lookup
);
criterion_main!(benches);

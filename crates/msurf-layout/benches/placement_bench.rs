//! Benchmarks for the anchored placement solver.
//!
//! Run with: cargo bench -p msurf-layout --bench placement_bench

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use msurf_core::{Rect, Size, TextDirection};
use msurf_layout::{AnchorMargin, Corner, PlacementOptions, SurfaceGeometry};
use std::hint::black_box;

fn bench_resolve_per_corner(c: &mut Criterion) {
    let mut group = c.benchmark_group("place/resolve");
    let geometry = SurfaceGeometry::new(
        Rect::new(300.0, 10.0, 100.0, 20.0),
        Size::new(150.0, 240.0),
        Size::new(320.0, 480.0),
    );

    for corner in Corner::ALL {
        let options = PlacementOptions::new(corner)
            .margin(AnchorMargin::uniform(4.0))
            .direction(TextDirection::Rtl);
        group.bench_with_input(BenchmarkId::new("corner", corner.name()), &(), |b, _| {
            b.iter(|| black_box(options.resolve(black_box(&geometry))))
        });
    }

    group.finish();
}

fn bench_resolve_sweep(c: &mut Criterion) {
    let options = PlacementOptions::new(Corner::BOTTOM_START);
    let anchors: Vec<Rect> = (0..256)
        .map(|i| {
            let f = f64::from(i);
            Rect::new(f * 7.0 % 1024.0, f * 11.0 % 768.0, 80.0, 24.0)
        })
        .collect();

    c.bench_function("place/sweep_256_anchors", |b| {
        b.iter(|| {
            for anchor in &anchors {
                let geometry =
                    SurfaceGeometry::new(*anchor, Size::new(200.0, 300.0), Size::new(1024.0, 768.0));
                black_box(options.resolve(&geometry));
            }
        })
    });
}

criterion_group!(benches, bench_resolve_per_corner, bench_resolve_sweep);
criterion_main!(benches);

//! Benchmarks for the grid and chain packers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use loadfit_d3::{ChainPacker, Container3D, Dimensions, GridPacker, Item3D, Packer};

fn grid_benchmark(c: &mut Criterion) {
    let item = Item3D::new("tile", 10.0, 10.0, 10.0).with_weight(1.0);
    let container = Container3D::new(Dimensions::new(100.0, 100.0, 100.0), 10_000.0);
    let packer = GridPacker::new();

    c.bench_function("grid_1000_cubes", |b| {
        b.iter(|| {
            let result = packer.pack(black_box(&item), black_box(&container));
            black_box(result)
        })
    });

    let flat = Item3D::new("tile", 30.0, 30.0, 1.2).with_weight(2.1);
    let carton = Container3D::new(Dimensions::new(61.0, 31.0, 40.0), 30.0);

    c.bench_function("grid_flat_tiles", |b| {
        b.iter(|| {
            let result = packer.pack(black_box(&flat), black_box(&carton));
            black_box(result)
        })
    });
}

fn chain_benchmark(c: &mut Criterion) {
    let packer = ChainPacker::default();

    c.bench_function("chain_tile_to_container", |b| {
        b.iter(|| {
            let result = packer.pack_chain(
                black_box(Dimensions::new(30.0, 30.0, 1.2)),
                black_box(Dimensions::new(61.0, 31.0, 40.0)),
                black_box(Dimensions::new(120.0, 100.0, 150.0)),
                2.1,
                30.0,
                1_000.0,
            );
            black_box(result)
        })
    });
}

criterion_group!(benches, grid_benchmark, chain_benchmark);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bhoovalaya::bandha::{Bandha, ChakraBandha, DiagonalBandha, NavamaankBandha};
use bhoovalaya::script::tables;
use bhoovalaya::{decode, decode_grid, traverse, ChakraGrid};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    let chakra = ChakraBandha::default();
    let navamaank = NavamaankBandha::default();
    let diagonal = DiagonalBandha;

    group.bench_function("chakra", |bencher| {
        bencher.iter(|| black_box(&chakra).generate())
    });

    group.bench_function("navamaank", |bencher| {
        bencher.iter(|| black_box(&navamaank).generate())
    });

    group.bench_function("diagonal", |bencher| {
        bencher.iter(|| black_box(&diagonal).generate())
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    // Deterministic fixtures for stable benches
    let grid = ChakraGrid::repeating();
    let chakra = ChakraBandha::default();
    let kannada = tables::kannada();
    let sequence = traverse(&grid, &chakra).expect("repeating grid traverses");

    group.bench_function("traverse", |bencher| {
        bencher.iter(|| traverse(black_box(&grid), black_box(&chakra)))
    });

    group.bench_function("decode", |bencher| {
        bencher.iter(|| decode(black_box(&sequence), black_box(&kannada)))
    });

    group.bench_function("traverse_decode", |bencher| {
        bencher.iter(|| decode_grid(black_box(&grid), black_box(&chakra), black_box(&kannada)))
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_pipeline);
criterion_main!(benches);

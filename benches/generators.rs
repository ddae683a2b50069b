use criterion::{criterion_group, criterion_main, Criterion};
use gridmaze::{
    generators::{self, GeneratorAlgorithm},
    grid::Grid,
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_binary_maze_32(c: &mut Criterion) {
    let mut g = Grid::new(32, 32).unwrap();
    let mut rng = XorShiftRng::seed_from_u64(32);

    c.bench_function("binary_maze_32", move |b| {
        b.iter(|| {
            g.reset_walls();
            generators::binary_tree(&mut g, &mut rng)
        })
    });
}

fn bench_sidewinder_maze_32(c: &mut Criterion) {
    let mut g = Grid::new(32, 32).unwrap();
    let mut rng = XorShiftRng::seed_from_u64(32);

    c.bench_function("sidewinder_maze_32", move |b| {
        b.iter(|| {
            g.reset_walls();
            generators::sidewinder(&mut g, &mut rng)
        })
    });
}

fn bench_generate_sidewinder_256(c: &mut Criterion) {
    let mut g = Grid::new(256, 256).unwrap();
    let mut rng = XorShiftRng::seed_from_u64(256);

    c.bench_function("generate_sidewinder_256", move |b| {
        b.iter(|| g.generate(GeneratorAlgorithm::Sidewinder, &mut rng))
    });
}

criterion_group!(
    benches,
    bench_binary_maze_32,
    bench_sidewinder_maze_32,
    bench_generate_sidewinder_256
);
criterion_main!(benches);

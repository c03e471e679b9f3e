use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use voroplane::{BorderMode, BoundingBox, Tessellation};

const NUM_SITES: usize = 1000;

fn random_sites(count: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(0xB0B);
    (0..count * 2).map(|_| rng.gen_range(0.0..1000.0)).collect()
}

fn benchmark_set_sites(c: &mut Criterion) {
    let bounds = BoundingBox::new(0.0, 0.0, 1000.0, 1000.0);
    let sites = random_sites(NUM_SITES);

    c.bench_function(&format!("set_sites_{}_points", NUM_SITES), |b| {
        // Reuse the tessellation instance to measure the update cost alone.
        let mut tess = Tessellation::new(bounds, BorderMode::ClosedBorders).unwrap();

        b.iter(|| {
            tess.set_sites(black_box(&sites)).unwrap();
        })
    });
}

fn benchmark_calculate(c: &mut Criterion) {
    let bounds = BoundingBox::new(0.0, 0.0, 1000.0, 1000.0);
    let sites = random_sites(NUM_SITES);

    let mut tess = Tessellation::new(bounds, BorderMode::ClosedBorders).unwrap();
    tess.set_sites(&sites).unwrap();

    c.bench_function(&format!("calculate_{}_points", NUM_SITES), |b| {
        b.iter(|| {
            tess.calculate().unwrap();
        })
    });
}

fn benchmark_relax_cycle(c: &mut Criterion) {
    let bounds = BoundingBox::new(0.0, 0.0, 1000.0, 1000.0);
    let sites = random_sites(NUM_SITES);

    c.bench_function(&format!("relax_cycle_{}_points", NUM_SITES), |b| {
        let mut tess = Tessellation::new(bounds, BorderMode::ClosedBorders).unwrap();
        tess.set_sites(&sites).unwrap();
        tess.calculate().unwrap();

        b.iter(|| {
            tess.relax();
            tess.calculate().unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_set_sites,
    benchmark_calculate,
    benchmark_relax_cycle
);
criterion_main!(benches);

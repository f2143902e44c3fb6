/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gmt_rs::cluster::{ClusterAssembler, ClusterConfig, ClusterSolver};
use gmt_rs::vsh::lmax_to_rmax;
use gmt_rs::{Separation, VshMode};
use ndarray::{Array2, Array3};
use num_complex::Complex64;

fn translation(
    m: i32,
    n: i32,
    u: i32,
    v: i32,
    sep: &Separation,
    k: Complex64,
    _kind: VshMode,
) -> (Complex64, Complex64) {
    let kr = k * sep.distance;
    let radial = (Complex64::i() * kr).exp() / kr;
    let weight = 1.0 / (1.0 + (n + v) as f64) + 0.01 * (m - u) as f64;
    (radial * weight, radial * weight * Complex64::new(0.0, 0.3))
}

fn chain(particles: usize) -> Array2<f64> {
    Array2::from_shape_fn((particles, 3), |(i, c)| if c == 0 { 1.5 * i as f64 } else { 0.1 * c as f64 * (i % 2) as f64 })
}

fn mie(particles: usize, lmax: usize) -> Array3<Complex64> {
    Array3::from_shape_fn((particles, 2, lmax), |(_, p, n)| {
        Complex64::new(0.3 / (n + 1) as f64, 0.1 * (p + 1) as f64)
    })
}

fn assembly_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Operator Assembly");
    let k = Complex64::new(1.0, 0.0);

    for &particles in &[4usize, 16] {
        let positions = chain(particles);
        let coefficients = mie(particles, 3);

        group.bench_with_input(BenchmarkId::new("sequential", particles), &particles, |b, _| {
            let assembler = ClusterAssembler::new(
                &translation,
                ClusterConfig {
                    parallel: false,
                    ..ClusterConfig::default()
                },
            );
            b.iter(|| black_box(assembler.sphere_cluster_operator(&positions, &coefficients, k)))
        });

        group.bench_with_input(BenchmarkId::new("parallel", particles), &particles, |b, _| {
            let assembler = ClusterAssembler::new(
                &translation,
                ClusterConfig {
                    parallel_pair_threshold: 1,
                    ..ClusterConfig::default()
                },
            );
            b.iter(|| black_box(assembler.sphere_cluster_operator(&positions, &coefficients, k)))
        });
    }

    group.finish();
}

fn solve_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Cluster Solve");
    let k = Complex64::new(1.0, 0.0);
    let lmax = 3;

    for &particles in &[4usize, 16] {
        let positions = chain(particles);
        let operator = ClusterAssembler::new(&translation, ClusterConfig::default())
            .sphere_cluster_operator(&positions, &mie(particles, lmax), k)
            .unwrap();
        let source = Array3::from_elem((2, particles, lmax_to_rmax(lmax).unwrap()), Complex64::new(1.0, 0.0));
        let solver = ClusterSolver::default();

        group.bench_with_input(BenchmarkId::new("partial_piv_lu", particles), &particles, |b, _| {
            b.iter(|| black_box(solver.solve(&operator, &source)))
        });
    }

    group.finish();
}

criterion_group!(benches, assembly_benchmark, solve_benchmark);
criterion_main!(benches);

//! Lane-vector benchmarks.
//!
//! Compares the lane-vector aliases (SSE2 or portable, whichever the build
//! selected) against plain scalar loops and an `ndarray` baseline on two
//! workloads:
//!
//! - element-wise `f32` addition over slices, four lanes at a time
//! - lengths of many 3D vectors, computed one at a time or four per call
//!   with a `Vec3<F32x4>`

use std::hint::black_box;
use std::time::Instant;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lanevec::math::length;
use lanevec::simd::{F32x4, SimdVector};
use lanevec::vec::Vec3;
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Element counts from L1-resident up to L3-sized inputs.
const VECTOR_SIZES: &[usize] = &[
    1_024,     // 4 KiB
    16_384,    // 64 KiB
    262_144,   // 1 MiB
    4_194_304, // 16 MiB
];

fn generate_test_data(len: usize) -> (Vec<f32>, Vec<f32>) {
    let mut rng = StdRng::seed_from_u64(42);

    let a: Vec<f32> = (0..len).map(|_| rng.random::<f32>()).collect();
    let b: Vec<f32> = (0..len).map(|_| rng.random::<f32>()).collect();

    (a, b)
}

fn lane_add(a: &[f32], b: &[f32], out: &mut [f32]) {
    let lanes = F32x4::LANES;
    let full = a.len() - a.len() % lanes;

    for i in (0..full).step_by(lanes) {
        let sum = F32x4::from_slice(&a[i..]) + F32x4::from_slice(&b[i..]);
        unsafe { sum.storeu(out[i..].as_mut_ptr()) };
    }
    for i in full..a.len() {
        out[i] = a[i] + b[i];
    }
}

fn scalar_add(a: &[f32], b: &[f32], out: &mut [f32]) {
    for ((o, x), y) in out.iter_mut().zip(a).zip(b) {
        *o = x + y;
    }
}

fn benchmark_addition(c: &mut Criterion) {
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group(format!("Addition_{}", format_size(size)));
        group.throughput(Throughput::Bytes((size * std::mem::size_of::<f32>() * 2) as u64));

        let (a_vec, b_vec) = generate_test_data(size);
        let mut out = vec![0.0f32; size];

        group.bench_function(BenchmarkId::new("lanes", size), |b| {
            b.iter(|| lane_add(black_box(&a_vec), black_box(&b_vec), &mut out))
        });

        group.bench_function(BenchmarkId::new("scalar", size), |b| {
            b.iter(|| scalar_add(black_box(&a_vec), black_box(&b_vec), &mut out))
        });

        let a_ndarray = Array1::from_vec(a_vec.clone());
        let b_ndarray = Array1::from_vec(b_vec.clone());
        group.bench_with_input(
            BenchmarkId::new("ndarray", size),
            &(&a_ndarray, &b_ndarray),
            |b, (a, b_data)| b.iter(|| black_box(*a + *b_data)),
        );

        group.finish();
    }
}

fn benchmark_lengths(c: &mut Criterion) {
    let size = 65_536;
    let mut group = c.benchmark_group("Vec3_length");
    group.throughput(Throughput::Elements(size as u64));

    let (xs, ys) = generate_test_data(size);
    let zs: Vec<f32> = xs.iter().zip(&ys).map(|(x, y)| x - y).collect();

    group.bench_function("scalar", |b| {
        b.iter(|| {
            let mut total = 0.0f32;
            for i in 0..size {
                total += length(Vec3::new(xs[i], ys[i], zs[i]));
            }
            black_box(total)
        })
    });

    group.bench_function("lanes", |b| {
        b.iter(|| {
            let mut total = F32x4::zero();
            for i in (0..size).step_by(F32x4::LANES) {
                let v = Vec3::new(
                    F32x4::from_slice(&xs[i..]),
                    F32x4::from_slice(&ys[i..]),
                    F32x4::from_slice(&zs[i..]),
                );
                total += length(v);
            }
            black_box(total)
        })
    });

    group.finish();
}

fn format_size(elements: usize) -> String {
    let bytes = elements * std::mem::size_of::<f32>();

    if bytes >= 1_048_576 {
        format!("{:.1}_MiB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1}_KiB", bytes as f64 / 1024.0)
    } else {
        format!("{}_B", bytes)
    }
}

fn all_benchmarks(c: &mut Criterion) {
    println!(
        "Lane benchmarks ({} backend)",
        if lanevec::ACCELERATED { "sse2" } else { "portable" }
    );

    let start_time = Instant::now();

    benchmark_addition(c);
    benchmark_lengths(c);

    println!(
        "Benchmark suite completed in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );
}

criterion_group!(benches, all_benchmarks);
criterion_main!(benches);

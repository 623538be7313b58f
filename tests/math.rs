//! The math façade on lane vectors must match the same function applied to
//! each lane as a scalar.

use lanevec::math::{
    abs, cos, dot, length, max, min, normalize, pow, rcp, rsqrt, select, sin, sincos, sqrt,
};
use lanevec::simd::{F32x4, F64x2, I16x8, Portable, SimdVector};
use lanevec::vec::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ITERATIONS: usize = 500;

fn assert_bits_eq(got: &[f32], want: &[f32]) {
    for (lane, (g, w)) in got.iter().zip(want).enumerate() {
        assert_eq!(g.to_bits(), w.to_bits(), "lane {lane}: got {g}, want {w}");
    }
}

#[test]
fn test_f32_lanes_match_scalar_functions() {
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..ITERATIONS {
        let lanes: [f32; 4] = core::array::from_fn(|_| rng.random_range(0.001..100.0));
        let exponents: [f32; 4] = core::array::from_fn(|_| rng.random_range(-3.0..3.0));
        let v = F32x4::from_array(lanes);

        assert_bits_eq(&sin(v).to_array(), &lanes.map(f32::sin));
        assert_bits_eq(&cos(v).to_array(), &lanes.map(f32::cos));
        assert_bits_eq(&sqrt(v).to_array(), &lanes.map(f32::sqrt));
        assert_bits_eq(&rcp(v).to_array(), &lanes.map(|x| 1.0 / x));
        assert_bits_eq(&rsqrt(v).to_array(), &lanes.map(|x| 1.0 / x.sqrt()));

        let powered = pow(v, F32x4::from_array(exponents)).to_array();
        let expected: [f32; 4] = core::array::from_fn(|i| lanes[i].powf(exponents[i]));
        assert_bits_eq(&powered, &expected);

        let (s, c) = sincos(v);
        assert_eq!(s, sin(v));
        assert_eq!(c, cos(v));
    }
}

#[test]
fn test_f64_lanes_match_portable() {
    let mut rng = StdRng::seed_from_u64(54321);

    for _ in 0..ITERATIONS {
        let lanes: [f64; 2] = core::array::from_fn(|_| rng.random_range(-50.0..50.0));
        let other: [f64; 2] = core::array::from_fn(|_| rng.random_range(-50.0..50.0));
        let (v, w) = (F64x2::from_array(lanes), F64x2::from_array(other));
        let (pv, pw) = (Portable::from_array(lanes), Portable::from_array(other));

        assert_eq!(abs(v).to_array(), abs(pv).to_array());
        assert_eq!(min(v, w).to_array(), min(pv, pw).to_array());
        assert_eq!(max(v, w).to_array(), max(pv, pw).to_array());
        assert_eq!(sin(v).to_array(), sin(pv).to_array());
    }
}

#[test]
fn test_wide_portable_vectors() {
    let lanes: [f32; 8] = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5];
    let v = Portable::from_array(lanes);

    assert_eq!(sqrt(v).to_array(), lanes.map(f32::sqrt));
    assert_eq!(max(v, Portable::splat(2.0)).to_array()[..4], [2.0; 4]);
}

#[test]
fn test_integer_lane_abs_min_max() {
    let mut rng = StdRng::seed_from_u64(8);

    for _ in 0..ITERATIONS {
        let a: [i16; 8] = rng.random();
        let b: [i16; 8] = rng.random();
        let (va, vb) = (I16x8::from_array(a), I16x8::from_array(b));

        assert_eq!(abs(va).to_array(), a.map(i16::wrapping_abs));
        let lo = min(va, vb).to_array();
        let hi = max(va, vb).to_array();
        for lane in 0..8 {
            assert_eq!(lo[lane], a[lane].min(b[lane]), "lane {lane}");
            assert_eq!(hi[lane], a[lane].max(b[lane]), "lane {lane}");
        }
    }
}

/// A `Vec3` of lane vectors computes four independent vectors at once.
#[test]
fn test_vectors_of_lanes_match_scalar_vectors() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..ITERATIONS {
        let xs: [f32; 4] = core::array::from_fn(|_| rng.random_range(-10.0..10.0));
        let ys: [f32; 4] = core::array::from_fn(|_| rng.random_range(-10.0..10.0));
        let zs: [f32; 4] = core::array::from_fn(|_| rng.random_range(-10.0..10.0));

        let wide = Vec3::new(F32x4::from_array(xs), F32x4::from_array(ys), F32x4::from_array(zs));
        let lengths = length(wide).to_array();
        let dots = dot(wide, wide).to_array();
        let unit = normalize(wide);

        for lane in 0..4 {
            let narrow = Vec3::new(xs[lane], ys[lane], zs[lane]);
            assert_eq!(lengths[lane].to_bits(), length(narrow).to_bits(), "lane {lane}");
            assert_eq!(dots[lane].to_bits(), dot(narrow, narrow).to_bits(), "lane {lane}");
            assert_eq!(unit.x[lane].to_bits(), normalize(narrow).x.to_bits(), "lane {lane}");
        }
    }
}

#[test]
fn test_branchless_clamp() {
    let v = F32x4::new(-2.0, 0.5, 3.0, 1.0);
    let zero = F32x4::zero();
    let one = F32x4::splat(1.0);

    let low = select(v.less(zero), zero, v);
    let clamped = select(low.greater(one), one, low);
    assert_eq!(clamped, F32x4::new(0.0, 0.5, 1.0, 1.0));
}

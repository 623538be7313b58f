//! Property tests for the lane-vector aliases.
//!
//! Every test compares the alias types (SSE2-backed when the build enables
//! them) against `Portable` or plain scalar arithmetic on the same random
//! inputs, so the suite checks both backends agree lane for lane.

use lanevec::error::LaneError;
use lanevec::simd::{
    Bool16x8, Bool32x4, Bool8x16, F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, LaneCast, Portable,
    SimdMask, SimdVector, U16x8, U32x4, U64x2, U8x16,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ITERATIONS: usize = 1000;

#[repr(C, align(16))]
struct Aligned<T>(T);

/// 8-bit addition and subtraction wrap modulo 256 exactly like the portable path.
#[test]
fn test_wrapping_8bit_matches_portable() {
    let mut rng = StdRng::seed_from_u64(12345);

    for _ in 0..ITERATIONS {
        let a: [u8; 16] = rng.random();
        let b: [u8; 16] = rng.random();

        let sum = (U8x16::from_array(a) + U8x16::from_array(b)).to_array();
        let difference = (U8x16::from_array(a) - U8x16::from_array(b)).to_array();
        let portable_sum = (Portable::from_array(a) + Portable::from_array(b)).to_array();

        assert_eq!(sum, portable_sum);
        for lane in 0..16 {
            assert_eq!(sum[lane], a[lane].wrapping_add(b[lane]), "lane {lane}");
            assert_eq!(difference[lane], a[lane].wrapping_sub(b[lane]), "lane {lane}");
        }

        let a: [i8; 16] = rng.random();
        let b: [i8; 16] = rng.random();
        let sum = (I8x16::from_array(a) + I8x16::from_array(b)).to_array();
        let negated = (-I8x16::from_array(a)).to_array();
        for lane in 0..16 {
            assert_eq!(sum[lane], a[lane].wrapping_add(b[lane]), "lane {lane}");
            assert_eq!(negated[lane], a[lane].wrapping_neg(), "lane {lane}");
        }
    }
}

#[test]
fn test_wrapping_multiply_matches_portable() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..ITERATIONS {
        let a: [i16; 8] = rng.random();
        let b: [i16; 8] = rng.random();
        let product = (I16x8::from_array(a) * I16x8::from_array(b)).to_array();
        let expected = (Portable::from_array(a) * Portable::from_array(b)).to_array();
        assert_eq!(product, expected);

        let a: [u32; 4] = rng.random();
        let b: [u32; 4] = rng.random();
        let product = (U32x4::from_array(a) * U32x4::from_array(b)).to_array();
        for lane in 0..4 {
            assert_eq!(product[lane], a[lane].wrapping_mul(b[lane]), "lane {lane}");
        }
    }
}

#[test]
fn test_integer_comparisons_match_scalar() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..ITERATIONS {
        let a: [u16; 8] = rng.random();
        let mut b: [u16; 8] = rng.random();
        // Force some equal lanes.
        b[0] = a[0];
        b[5] = a[5];

        let (va, vb) = (U16x8::from_array(a), U16x8::from_array(b));
        let less = va.less(vb).to_array();
        let greater_equal = va.greater_equal(vb).to_array();
        let equal = va.equal(vb).to_array();
        for lane in 0..8 {
            assert_eq!(less[lane], a[lane] < b[lane], "lane {lane}");
            assert_eq!(greater_equal[lane], a[lane] >= b[lane], "lane {lane}");
            assert_eq!(equal[lane], a[lane] == b[lane], "lane {lane}");
        }

        let a: [i64; 2] = rng.random();
        let b: [i64; 2] = rng.random();
        let (va, vb) = (I64x2::from_array(a), I64x2::from_array(b));
        assert_eq!(va.greater(vb).to_array(), [a[0] > b[0], a[1] > b[1]]);
        assert_eq!(va.min(vb).to_array(), [a[0].min(b[0]), a[1].min(b[1])]);

        let a: [u64; 2] = rng.random();
        let b: [u64; 2] = rng.random();
        let (va, vb) = (U64x2::from_array(a), U64x2::from_array(b));
        assert_eq!(va.less_equal(vb).to_array(), [a[0] <= b[0], a[1] <= b[1]]);
        assert_eq!(va.max(vb).to_array(), [a[0].max(b[0]), a[1].max(b[1])]);
    }
}

#[test]
fn test_float_comparisons_match_portable() {
    let mut rng = StdRng::seed_from_u64(2024);

    for i in 0..ITERATIONS {
        let mut a: [f32; 4] = core::array::from_fn(|_| rng.random_range(-10.0..10.0));
        let b: [f32; 4] = core::array::from_fn(|_| rng.random_range(-10.0..10.0));
        if i % 7 == 0 {
            a[i % 4] = f32::NAN;
        }

        let (va, vb) = (F32x4::from_array(a), F32x4::from_array(b));
        let (pa, pb) = (Portable::from_array(a), Portable::from_array(b));

        assert_eq!(va.less(vb).to_array(), pa.less(pb).to_array());
        assert_eq!(va.less_equal(vb).to_array(), pa.less_equal(pb).to_array());
        assert_eq!(va.greater(vb).to_array(), pa.greater(pb).to_array());
        assert_eq!(va.not_equal(vb).to_array(), pa.not_equal(pb).to_array());

        let min = va.min(vb).to_array();
        let expected = pa.min(pb).to_array();
        for lane in 0..4 {
            assert_eq!(min[lane].to_bits(), expected[lane].to_bits(), "lane {lane}");
        }
    }
}

/// `select(c, v, o)` takes `v` where `c` holds and `o` elsewhere.
#[test]
fn test_select_and_mask() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..ITERATIONS {
        let conditions: [bool; 8] = rng.random();
        let values: [i16; 8] = rng.random();
        let otherwise: [i16; 8] = rng.random();

        let c = Bool16x8::from_array(conditions);
        let selected =
            I16x8::select(c, I16x8::from_array(values), I16x8::from_array(otherwise)).to_array();
        let masked = I16x8::mask(c, I16x8::from_array(values)).to_array();

        for lane in 0..8 {
            let expected = if conditions[lane] { values[lane] } else { otherwise[lane] };
            assert_eq!(selected[lane], expected, "lane {lane}");
            assert_eq!(masked[lane], if conditions[lane] { values[lane] } else { 0 });
        }

        let values: [f64; 2] = [rng.random(), rng.random()];
        let c = F64x2::from_array(values).greater(F64x2::splat(0.5));
        let clamped = F64x2::select(c, F64x2::splat(0.5), F64x2::from_array(values));
        assert!(clamped.to_array().iter().all(|&x| x <= 0.5));
    }
}

/// Mask lanes are always all-zeros or all-ones.
#[test]
fn test_masks_are_canonical() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..ITERATIONS {
        let a: [i8; 16] = rng.random();
        let b: [i8; 16] = rng.random();
        let mask = I8x16::from_array(a).less(I8x16::from_array(b));
        let combined = !(mask ^ Bool8x16::splat(true)) | Bool8x16::splat(false);

        for bits in [I8x16::from(mask).to_array(), I8x16::from(combined).to_array()] {
            assert!(bits.iter().all(|&lane| lane == 0 || lane == -1), "{bits:?}");
        }
        assert_eq!(mask, combined);

        let a: [f32; 4] = rng.random();
        let mask = F32x4::from_array(a).greater_equal(F32x4::splat(0.5));
        let bits = I32x4::from(mask).to_array();
        assert!(bits.iter().all(|&lane| lane == 0 || lane == -1), "{bits:?}");
        assert_eq!(mask.any(), bits.contains(&-1));
        assert_eq!(mask.all(), !bits.contains(&0));
        assert_eq!(mask.none(), !mask.any());
    }
}

#[test]
fn test_integer_vector_to_mask() {
    let mask = Bool32x4::from(U32x4::new(0, 7, 0, u32::MAX));
    assert_eq!(mask.to_array(), [false, true, false, true]);
    assert!(mask.test(1));
    assert!(!mask.test(2));
}

#[test]
fn test_load_store_round_trip() {
    let mut rng = StdRng::seed_from_u64(1);
    let data = Aligned(core::array::from_fn::<f32, 8, _>(|_| rng.random()));
    let mut out = Aligned([0.0f32; 8]);

    unsafe {
        let first = F32x4::load(data.0.as_ptr());
        let second = F32x4::loadu(data.0.as_ptr().add(4));
        first.storeu(out.0.as_mut_ptr().add(4));
        second.store(out.0.as_mut_ptr());
    }

    assert_eq!(out.0[..4], data.0[4..]);
    assert_eq!(out.0[4..], data.0[..4]);

    let v = U16x8::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn test_checked_loads_report_errors() {
    let short = [1i32, 2, 3];
    assert_eq!(
        I32x4::try_from_slice(&short),
        Err(LaneError::LengthError {
            expected: 4,
            actual: 3
        })
    );

    let data = Aligned([0i64; 4]);
    assert!(I64x2::try_load_aligned(&data.0[..2]).is_ok());
    assert!(matches!(
        I64x2::try_load_aligned(&data.0[..3]),
        Err(LaneError::LengthError { .. })
    ));

    // Portable vectors only need the alignment of their element.
    if core::mem::align_of::<I64x2>() > core::mem::align_of::<i64>() {
        assert!(matches!(
            I64x2::try_load_aligned(&data.0[1..3]),
            Err(LaneError::AlignmentError { .. })
        ));
    }
}

#[test]
#[should_panic(expected = "Slice must contain at least 4 elements, got 2")]
fn test_from_slice_panics_when_short() {
    let _ = F32x4::from_slice(&[1.0, 2.0]);
}

#[test]
fn test_lane_casts_follow_as() {
    let mut rng = StdRng::seed_from_u64(77);

    for _ in 0..ITERATIONS {
        let a: [i32; 4] = rng.random();
        let unsigned: U32x4 = I32x4::from_array(a).lane_cast();
        assert_eq!(unsigned.to_array(), a.map(|x| x as u32));

        let floats: [f32; 4] = core::array::from_fn(|_| rng.random_range(-1e10..1e10));
        let truncated: I32x4 = F32x4::from_array(floats).lane_cast();
        assert_eq!(truncated.to_array(), floats.map(|x| x as i32));
    }
}

#[test]
fn test_increments() {
    let mut v = I32x4::new(1, 2, 3, 4);
    assert_eq!(v.post_increment(), I32x4::new(1, 2, 3, 4));
    assert_eq!(v.increment(), I32x4::new(3, 4, 5, 6));
    assert_eq!(v.decrement(), I32x4::new(2, 3, 4, 5));
    assert_eq!(v, I32x4::new(2, 3, 4, 5));
}

#[test]
fn test_backend_selection_is_consistent() {
    println!("accelerated: {}", lanevec::ACCELERATED);

    assert_eq!(F32x4::IS_ACCELERATED, lanevec::ACCELERATED);
    assert_eq!(U8x16::IS_ACCELERATED, lanevec::ACCELERATED);
    assert!(!Portable::<f32, 4>::IS_ACCELERATED);
    assert_eq!(core::mem::size_of::<F32x4>(), 16);
    assert_eq!(core::mem::size_of::<Portable<u8, 16>>(), 16);
}

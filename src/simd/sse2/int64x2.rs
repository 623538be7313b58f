//! Two 64-bit lanes.
//!
//! 64-bit compares are SSE4.1/4.2 instructions, so equality and ordering are
//! assembled from 32-bit compares of the high and low halves. There is no
//! multiply and no arithmetic right shift for these lanes.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::mask::Bool64x2;
use crate::simd::portable::Portable;
use crate::simd::traits::{LaneCast, SimdVector};

/// Two `i64` lanes in one SSE2 register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct I64x2(pub(crate) __m128i);

/// Two `u64` lanes in one SSE2 register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct U64x2(pub(crate) __m128i);

#[inline(always)]
unsafe fn cmpeq_i64(a: __m128i, b: __m128i) -> __m128i {
    let halves = _mm_cmpeq_epi32(a, b);
    _mm_and_si128(halves, _mm_shuffle_epi32(halves, 0b10_11_00_01))
}

/// High halves decide unless they are equal, then the low halves decide as
/// unsigned values.
#[inline(always)]
unsafe fn cmpgt_i64(a: __m128i, b: __m128i) -> __m128i {
    let gt = _mm_cmpgt_epi32(a, b);
    let eq = _mm_cmpeq_epi32(a, b);
    let low_bias = _mm_set1_epi64x(0x8000_0000);
    let gt_low = _mm_cmpgt_epi32(_mm_xor_si128(a, low_bias), _mm_xor_si128(b, low_bias));

    _mm_or_si128(
        _mm_shuffle_epi32(gt, 0b11_11_01_01),
        _mm_and_si128(
            _mm_shuffle_epi32(eq, 0b11_11_01_01),
            _mm_shuffle_epi32(gt_low, 0b10_10_00_00),
        ),
    )
}

#[inline(always)]
unsafe fn cmpgt_u64(a: __m128i, b: __m128i) -> __m128i {
    let bias = _mm_set1_epi64x(i64::MIN);
    cmpgt_i64(_mm_xor_si128(a, bias), _mm_xor_si128(b, bias))
}

#[inline(always)]
unsafe fn min_i64(a: __m128i, b: __m128i) -> __m128i {
    super::blend_si128(cmpgt_i64(b, a), a, b)
}

#[inline(always)]
unsafe fn max_i64(a: __m128i, b: __m128i) -> __m128i {
    super::blend_si128(cmpgt_i64(a, b), a, b)
}

#[inline(always)]
unsafe fn min_u64(a: __m128i, b: __m128i) -> __m128i {
    super::blend_si128(cmpgt_u64(b, a), a, b)
}

#[inline(always)]
unsafe fn max_u64(a: __m128i, b: __m128i) -> __m128i {
    super::blend_si128(cmpgt_u64(a, b), a, b)
}

#[inline(always)]
unsafe fn abs_i64(a: __m128i) -> __m128i {
    let sign = _mm_shuffle_epi32(_mm_srai_epi32(a, 31), 0b11_11_01_01);
    _mm_sub_epi64(_mm_xor_si128(a, sign), sign)
}

#[inline(always)]
unsafe fn abs_u64(a: __m128i) -> __m128i {
    a
}

impl_integer_vector!(
    I64x2, i64, 2, Bool64x2,
    set1: _mm_set1_epi64x as i64,
    add: _mm_add_epi64, sub: _mm_sub_epi64,
    eq: cmpeq_i64, gt: cmpgt_i64,
    min: min_i64, max: max_i64, abs: abs_i64
);

impl_integer_vector!(
    U64x2, u64, 2, Bool64x2,
    set1: _mm_set1_epi64x as i64,
    add: _mm_add_epi64, sub: _mm_sub_epi64,
    eq: cmpeq_i64, gt: cmpgt_u64,
    min: min_u64, max: max_u64, abs: abs_u64
);

impl I64x2 {
    /// Builds a vector from its lanes, `x` in lane 0.
    #[inline(always)]
    pub fn new(x: i64, y: i64) -> Self {
        Self(unsafe { _mm_set_epi64x(y, x) })
    }
}

impl U64x2 {
    /// Builds a vector from its lanes, `x` in lane 0.
    #[inline(always)]
    pub fn new(x: u64, y: u64) -> Self {
        Self(unsafe { _mm_set_epi64x(y as i64, x as i64) })
    }
}

impl_uniform_shift!(I64x2, 64, Shl, shl, ShlAssign, shl_assign, _mm_sll_epi64);
impl_uniform_shift!(U64x2, 64, Shl, shl, ShlAssign, shl_assign, _mm_sll_epi64);
impl_uniform_shift!(U64x2, 64, Shr, shr, ShrAssign, shr_assign, _mm_srl_epi64);

impl_reinterpret_cast!(I64x2, U64x2);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::traits::SimdMask;

    mod compare_tests {
        use super::*;

        #[test]
        fn test_equal_needs_both_halves() {
            let a = I64x2::new(0x1_0000_0000, 5);
            let b = I64x2::new(0, 5);
            assert_eq!(a.equal(b).to_array(), [false, true]);
            assert_eq!(a.not_equal(b).to_array(), [true, false]);
        }

        #[test]
        fn test_signed_greater_across_halves() {
            let cases: [(i64, i64); 8] = [
                (1, 0),
                (0, 1),
                (-1, 0),
                (0x1_0000_0000, 0xFFFF_FFFF),
                (0xFFFF_FFFF, 0x1_0000_0000),
                (i64::MIN, i64::MAX),
                (i64::MAX, i64::MIN),
                (0x8000_0000, 0x7FFF_FFFF),
            ];

            for (x, y) in cases {
                let a = I64x2::new(x, y);
                let b = I64x2::new(y, x);
                assert_eq!(a.greater(b).to_array(), [x > y, y > x], "{x} vs {y}");
                assert_eq!(a.less_equal(b).to_array(), [x <= y, y <= x], "{x} vs {y}");
            }
        }

        #[test]
        fn test_unsigned_greater() {
            let a = U64x2::new(u64::MAX, 0x8000_0000_0000_0000);
            let b = U64x2::new(1, 0x7FFF_FFFF_FFFF_FFFF);
            assert!(a.greater(b).all());
            assert!(b.less(a).all());
            assert_eq!(a.min(b), b);
            assert_eq!(a.max(b), a);
        }
    }

    mod arithmetic_tests {
        use super::*;

        #[test]
        fn test_wrapping_add_sub_neg() {
            let a = I64x2::new(i64::MAX, i64::MIN);
            let one = I64x2::splat(1);
            assert_eq!(a + one, I64x2::new(i64::MIN, i64::MIN + 1));
            assert_eq!(a - one, I64x2::new(i64::MAX - 1, i64::MAX));
            assert_eq!(-a, I64x2::new(-i64::MAX, i64::MIN));
        }

        #[test]
        fn test_abs() {
            let a = I64x2::new(-0x1_0000_0001, i64::MIN);
            assert_eq!(a.abs(), I64x2::new(0x1_0000_0001, i64::MIN));
            assert_eq!(I64x2::new(7, -7).abs(), I64x2::splat(7));
        }

        #[test]
        fn test_shifts() {
            assert_eq!(I64x2::new(1, -1) << 40, I64x2::new(1 << 40, -1 << 40));
            assert_eq!(U64x2::splat(u64::MAX) >> 63, U64x2::splat(1));
        }

        #[test]
        fn test_matches_portable() {
            let a = I64x2::new(-3, 0x7FFF_FFFF_FFFF);
            let b = I64x2::new(-3, -0x7FFF_FFFF_FFFF);
            let (pa, pb) = (Portable::from(a), Portable::from(b));
            assert_eq!(Portable::from(a.min(b)), pa.min(pb));
            assert_eq!(Portable::from(a.max(b)), pa.max(pb));
            assert_eq!(a.greater_equal(b).to_array(), pa.greater_equal(pb).to_array());
            assert_eq!(
                Portable::from(I64x2::select(a.less(b), a, b)),
                Portable::select(pa.less(pb), pa, pb)
            );
        }
    }
}

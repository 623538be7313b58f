//! Eight 16-bit lanes.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::mask::Bool16x8;
use crate::simd::portable::Portable;
use crate::simd::traits::{LaneCast, SimdVector};

/// Eight `i16` lanes in one SSE2 register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct I16x8(pub(crate) __m128i);

/// Eight `u16` lanes in one SSE2 register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct U16x8(pub(crate) __m128i);

#[inline(always)]
unsafe fn cmpgt_i16(a: __m128i, b: __m128i) -> __m128i {
    _mm_cmpgt_epi16(a, b)
}

#[inline(always)]
unsafe fn cmpgt_u16(a: __m128i, b: __m128i) -> __m128i {
    let bias = _mm_set1_epi16(i16::MIN);
    _mm_cmpgt_epi16(_mm_xor_si128(a, bias), _mm_xor_si128(b, bias))
}

#[inline(always)]
unsafe fn min_u16(a: __m128i, b: __m128i) -> __m128i {
    super::blend_si128(cmpgt_u16(b, a), a, b)
}

#[inline(always)]
unsafe fn max_u16(a: __m128i, b: __m128i) -> __m128i {
    super::blend_si128(cmpgt_u16(a, b), a, b)
}

#[inline(always)]
unsafe fn abs_i16(a: __m128i) -> __m128i {
    let sign = _mm_srai_epi16(a, 15);
    _mm_sub_epi16(_mm_xor_si128(a, sign), sign)
}

#[inline(always)]
unsafe fn abs_u16(a: __m128i) -> __m128i {
    a
}

impl_integer_vector!(
    I16x8, i16, 8, Bool16x8,
    set1: _mm_set1_epi16 as i16,
    add: _mm_add_epi16, sub: _mm_sub_epi16,
    eq: _mm_cmpeq_epi16, gt: cmpgt_i16,
    min: _mm_min_epi16, max: _mm_max_epi16, abs: abs_i16
);

impl_integer_vector!(
    U16x8, u16, 8, Bool16x8,
    set1: _mm_set1_epi16 as i16,
    add: _mm_add_epi16, sub: _mm_sub_epi16,
    eq: _mm_cmpeq_epi16, gt: cmpgt_u16,
    min: min_u16, max: max_u16, abs: abs_u16
);

macro_rules! impl_mul_16 {
    ($name:ident) => {
        /// Keeps the low 16 bits of each product.
        impl core::ops::Mul for $name {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                Self(unsafe { _mm_mullo_epi16(self.0, rhs.0) })
            }
        }

        impl_assign_ops!($name, MulAssign, mul_assign, Mul, mul);
    };
}

impl_mul_16!(I16x8);
impl_mul_16!(U16x8);

impl_one!(I16x8);
impl_one!(U16x8);

impl_uniform_shift!(I16x8, 16, Shl, shl, ShlAssign, shl_assign, _mm_sll_epi16);
impl_uniform_shift!(I16x8, 16, Shr, shr, ShrAssign, shr_assign, _mm_sra_epi16);
impl_uniform_shift!(U16x8, 16, Shl, shl, ShlAssign, shl_assign, _mm_sll_epi16);
impl_uniform_shift!(U16x8, 16, Shr, shr, ShrAssign, shr_assign, _mm_srl_epi16);

impl_reinterpret_cast!(I16x8, U16x8);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::traits::SimdMask;

    fn sample() -> [i16; 8] {
        [i16::MIN, -300, -1, 0, 1, 299, 1000, i16::MAX]
    }

    #[test]
    fn test_mul_keeps_low_bits() {
        let a = I16x8::from_array(sample());
        let b = I16x8::splat(3);
        let expected = sample().map(|x| x.wrapping_mul(3));
        assert_eq!((a * b).to_array(), expected);

        let mut u = U16x8::splat(300);
        u *= U16x8::splat(300);
        assert_eq!(u, U16x8::splat(300u16.wrapping_mul(300)));
    }

    #[test]
    fn test_shifts() {
        let a = I16x8::splat(-256);
        assert_eq!(a >> 4, I16x8::splat(-16));
        assert_eq!(a << 1, I16x8::splat(-512));

        let u = U16x8::splat(0x8000);
        assert_eq!(u >> 15, U16x8::splat(1));

        let mut v = U16x8::splat(1);
        v <<= 3;
        assert_eq!(v, U16x8::splat(8));
    }

    #[test]
    fn test_lanewise_matches_portable() {
        let a = I16x8::from_array(sample());
        let b = I16x8::splat(-1);
        let (pa, pb) = (Portable::from(a), Portable::from(b));

        assert_eq!(Portable::from(a.abs()), pa.abs());
        assert_eq!(Portable::from(a.min(b)), pa.min(pb));
        assert_eq!(a.less_equal(b).to_array(), pa.less_equal(pb).to_array());

        let ua: U16x8 = a.lane_cast();
        let ub: U16x8 = b.lane_cast();
        let (ua_lanes, ub_lanes) = (Portable::from(ua), Portable::from(ub));
        assert_eq!(Portable::from(ua.max(ub)), ua_lanes.max(ub_lanes));
        assert_eq!(ua.greater(ub).to_array(), ua_lanes.greater(ub_lanes).to_array());
    }

    #[test]
    fn test_unsigned_min_max() {
        let a = U16x8::splat(40000);
        let b = U16x8::splat(2);
        assert_eq!(a.min(b), b);
        assert_eq!(a.max(b), a);
        assert!(a.not_equal(b).all());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "Shift count 16 must be < 16")]
    fn test_shift_count_out_of_range_panics() {
        let _ = I16x8::splat(1) << 16;
    }
}

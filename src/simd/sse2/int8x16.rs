//! Sixteen 8-bit lanes.
//!
//! SSE2 has no 8-bit multiply or shift, so neither type implements `Mul`,
//! `Shl` or `Shr`. Signed min/max and unsigned comparisons are composed.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::mask::Bool8x16;
use crate::simd::portable::Portable;
use crate::simd::traits::{LaneCast, SimdVector};

/// Sixteen `i8` lanes in one SSE2 register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct I8x16(pub(crate) __m128i);

/// Sixteen `u8` lanes in one SSE2 register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct U8x16(pub(crate) __m128i);

#[inline(always)]
unsafe fn cmpgt_i8(a: __m128i, b: __m128i) -> __m128i {
    _mm_cmpgt_epi8(a, b)
}

#[inline(always)]
unsafe fn cmpgt_u8(a: __m128i, b: __m128i) -> __m128i {
    let bias = _mm_set1_epi8(i8::MIN);
    _mm_cmpgt_epi8(_mm_xor_si128(a, bias), _mm_xor_si128(b, bias))
}

#[inline(always)]
unsafe fn min_i8(a: __m128i, b: __m128i) -> __m128i {
    super::blend_si128(_mm_cmpgt_epi8(b, a), a, b)
}

#[inline(always)]
unsafe fn max_i8(a: __m128i, b: __m128i) -> __m128i {
    super::blend_si128(_mm_cmpgt_epi8(a, b), a, b)
}

#[inline(always)]
unsafe fn abs_i8(a: __m128i) -> __m128i {
    let zero = _mm_setzero_si128();
    let negative = _mm_cmpgt_epi8(zero, a);
    super::blend_si128(negative, _mm_sub_epi8(zero, a), a)
}

#[inline(always)]
unsafe fn abs_u8(a: __m128i) -> __m128i {
    a
}

impl_integer_vector!(
    I8x16, i8, 16, Bool8x16,
    set1: _mm_set1_epi8 as i8,
    add: _mm_add_epi8, sub: _mm_sub_epi8,
    eq: _mm_cmpeq_epi8, gt: cmpgt_i8,
    min: min_i8, max: max_i8, abs: abs_i8
);

impl_integer_vector!(
    U8x16, u8, 16, Bool8x16,
    set1: _mm_set1_epi8 as i8,
    add: _mm_add_epi8, sub: _mm_sub_epi8,
    eq: _mm_cmpeq_epi8, gt: cmpgt_u8,
    min: _mm_min_epu8, max: _mm_max_epu8, abs: abs_u8
);

impl_reinterpret_cast!(I8x16, U8x16);

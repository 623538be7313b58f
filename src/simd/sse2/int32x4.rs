//! Four 32-bit lanes.
//!
//! `_mm_mullo_epi32` is SSE4.1, so the low 32 bits of each product are built
//! from two `_mm_mul_epu32` calls over the even and odd lanes.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::mask::Bool32x4;
use crate::simd::portable::Portable;
use crate::simd::traits::{LaneCast, SimdVector};

/// Four `i32` lanes in one SSE2 register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct I32x4(pub(crate) __m128i);

/// Four `u32` lanes in one SSE2 register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct U32x4(pub(crate) __m128i);

#[inline(always)]
unsafe fn cmpgt_i32(a: __m128i, b: __m128i) -> __m128i {
    _mm_cmpgt_epi32(a, b)
}

#[inline(always)]
unsafe fn cmpgt_u32(a: __m128i, b: __m128i) -> __m128i {
    let bias = _mm_set1_epi32(i32::MIN);
    _mm_cmpgt_epi32(_mm_xor_si128(a, bias), _mm_xor_si128(b, bias))
}

#[inline(always)]
unsafe fn min_i32(a: __m128i, b: __m128i) -> __m128i {
    super::blend_si128(cmpgt_i32(b, a), a, b)
}

#[inline(always)]
unsafe fn max_i32(a: __m128i, b: __m128i) -> __m128i {
    super::blend_si128(cmpgt_i32(a, b), a, b)
}

#[inline(always)]
unsafe fn min_u32(a: __m128i, b: __m128i) -> __m128i {
    super::blend_si128(cmpgt_u32(b, a), a, b)
}

#[inline(always)]
unsafe fn max_u32(a: __m128i, b: __m128i) -> __m128i {
    super::blend_si128(cmpgt_u32(a, b), a, b)
}

#[inline(always)]
unsafe fn abs_i32(a: __m128i) -> __m128i {
    let sign = _mm_srai_epi32(a, 31);
    _mm_sub_epi32(_mm_xor_si128(a, sign), sign)
}

#[inline(always)]
unsafe fn abs_u32(a: __m128i) -> __m128i {
    a
}

#[inline(always)]
unsafe fn mullo_epi32(a: __m128i, b: __m128i) -> __m128i {
    let even = _mm_mul_epu32(a, b);
    let odd = _mm_mul_epu32(_mm_srli_si128(a, 4), _mm_srli_si128(b, 4));
    _mm_unpacklo_epi32(
        _mm_shuffle_epi32(even, 0b00_00_10_00),
        _mm_shuffle_epi32(odd, 0b00_00_10_00),
    )
}

impl_integer_vector!(
    I32x4, i32, 4, Bool32x4,
    set1: _mm_set1_epi32 as i32,
    add: _mm_add_epi32, sub: _mm_sub_epi32,
    eq: _mm_cmpeq_epi32, gt: cmpgt_i32,
    min: min_i32, max: max_i32, abs: abs_i32
);

impl_integer_vector!(
    U32x4, u32, 4, Bool32x4,
    set1: _mm_set1_epi32 as i32,
    add: _mm_add_epi32, sub: _mm_sub_epi32,
    eq: _mm_cmpeq_epi32, gt: cmpgt_u32,
    min: min_u32, max: max_u32, abs: abs_u32
);

impl I32x4 {
    /// Builds a vector from its lanes, `x` in lane 0.
    #[inline(always)]
    pub fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self(unsafe { _mm_setr_epi32(x, y, z, w) })
    }
}

impl U32x4 {
    /// Builds a vector from its lanes, `x` in lane 0.
    #[inline(always)]
    pub fn new(x: u32, y: u32, z: u32, w: u32) -> Self {
        Self(unsafe { _mm_setr_epi32(x as i32, y as i32, z as i32, w as i32) })
    }
}

macro_rules! impl_mul_32 {
    ($name:ident) => {
        /// Keeps the low 32 bits of each product.
        impl core::ops::Mul for $name {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                Self(unsafe { mullo_epi32(self.0, rhs.0) })
            }
        }

        impl_assign_ops!($name, MulAssign, mul_assign, Mul, mul);
    };
}

impl_mul_32!(I32x4);
impl_mul_32!(U32x4);

impl_one!(I32x4);
impl_one!(U32x4);

impl_uniform_shift!(I32x4, 32, Shl, shl, ShlAssign, shl_assign, _mm_sll_epi32);
impl_uniform_shift!(I32x4, 32, Shr, shr, ShrAssign, shr_assign, _mm_sra_epi32);
impl_uniform_shift!(U32x4, 32, Shl, shl, ShlAssign, shl_assign, _mm_sll_epi32);
impl_uniform_shift!(U32x4, 32, Shr, shr, ShrAssign, shr_assign, _mm_srl_epi32);

impl_reinterpret_cast!(I32x4, U32x4);

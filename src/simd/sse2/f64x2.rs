//! Two `f64` lanes.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use super::int64x2::{I64x2, U64x2};
use super::mask::Bool64x2;
use crate::simd::portable::Portable;
use crate::simd::traits::{LaneCast, SimdVector};

/// Two `f64` lanes in one SSE2 register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F64x2(pub(crate) __m128d);

impl F64x2 {
    /// Builds a vector from its two lanes, `x` in lane 0.
    #[inline(always)]
    pub fn new(x: f64, y: f64) -> Self {
        Self(unsafe { _mm_setr_pd(x, y) })
    }

    #[inline(always)]
    pub fn from_array(lanes: [f64; 2]) -> Self {
        Self(unsafe { _mm_loadu_pd(lanes.as_ptr()) })
    }

    #[inline(always)]
    pub fn to_array(self) -> [f64; 2] {
        *self.as_array()
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[f64; 2] {
        unsafe { &*(self as *const Self as *const [f64; 2]) }
    }

    #[inline(always)]
    pub fn as_mut_array(&mut self) -> &mut [f64; 2] {
        unsafe { &mut *(self as *mut Self as *mut [f64; 2]) }
    }

    /// Applies `f` to every lane.
    #[inline(always)]
    pub fn map(self, f: impl FnMut(f64) -> f64) -> Self {
        Self::from_array(self.to_array().map(f))
    }

    /// Lane-wise IEEE square root; negative lanes give NaN.
    #[inline(always)]
    pub fn sqrt(self) -> Self {
        Self(unsafe { _mm_sqrt_pd(self.0) })
    }

    #[inline(always)]
    pub fn sin(self) -> Self {
        self.map(f64::sin)
    }

    #[inline(always)]
    pub fn cos(self) -> Self {
        self.map(f64::cos)
    }

    #[inline(always)]
    pub fn sin_cos(self) -> (Self, Self) {
        let [(s0, c0), (s1, c1)] = self.to_array().map(f64::sin_cos);
        (Self::new(s0, s1), Self::new(c0, c1))
    }

    #[inline(always)]
    pub fn powf(self, exponent: Self) -> Self {
        let [b0, b1] = self.to_array();
        let [e0, e1] = exponent.to_array();
        Self::new(b0.powf(e0), b1.powf(e1))
    }
}

impl Default for F64x2 {
    #[inline(always)]
    fn default() -> Self {
        Self::zero()
    }
}

impl num::Zero for F64x2 {
    #[inline(always)]
    fn zero() -> Self {
        <Self as SimdVector>::zero()
    }

    /// `true` when every lane equals zero, `-0.0` included.
    #[inline(always)]
    fn is_zero(&self) -> bool {
        *self == <Self as SimdVector>::zero()
    }
}

impl_one!(F64x2);

impl core::fmt::Debug for F64x2 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("F64x2").field(self.as_array()).finish()
    }
}

impl PartialEq for F64x2 {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        unsafe { _mm_movemask_pd(_mm_cmpeq_pd(self.0, other.0)) == 0b11 }
    }
}

impl Index<usize> for F64x2 {
    type Output = f64;

    #[inline(always)]
    fn index(&self, lane: usize) -> &f64 {
        &self.as_array()[lane]
    }
}

impl IndexMut<usize> for F64x2 {
    #[inline(always)]
    fn index_mut(&mut self, lane: usize) -> &mut f64 {
        &mut self.as_mut_array()[lane]
    }
}

impl From<__m128d> for F64x2 {
    #[inline(always)]
    fn from(raw: __m128d) -> Self {
        Self(raw)
    }
}

impl From<F64x2> for __m128d {
    #[inline(always)]
    fn from(vector: F64x2) -> Self {
        vector.0
    }
}

impl From<Portable<f64, 2>> for F64x2 {
    #[inline(always)]
    fn from(vector: Portable<f64, 2>) -> Self {
        Self::from_array(vector.to_array())
    }
}

impl From<F64x2> for Portable<f64, 2> {
    #[inline(always)]
    fn from(vector: F64x2) -> Self {
        Portable::from_array(vector.to_array())
    }
}

impl SimdVector for F64x2 {
    type Scalar = f64;
    type Mask = Bool64x2;

    const LANES: usize = 2;
    const IS_ACCELERATED: bool = true;

    #[inline(always)]
    fn splat(value: f64) -> Self {
        Self(unsafe { _mm_set1_pd(value) })
    }

    #[inline(always)]
    fn zero() -> Self {
        Self(unsafe { _mm_setzero_pd() })
    }

    /// Loads two `f64` values from a 16-byte aligned pointer.
    ///
    /// Compiles to a single aligned SSE load. Use [`SimdVector::loadu`] when
    /// the alignment is not known.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null, valid for reading two consecutive `f64`
    /// values and aligned to 16 bytes. A misaligned pointer faults at run time.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `ptr` is not 16-byte aligned.
    #[inline(always)]
    unsafe fn load(ptr: *const f64) -> Self {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be aligned to 16 bytes");

        Self(_mm_load_pd(ptr))
    }

    /// Loads two `f64` values with no alignment requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null and valid for reading two consecutive `f64`
    /// values.
    #[inline(always)]
    unsafe fn loadu(ptr: *const f64) -> Self {
        Self(_mm_loadu_pd(ptr))
    }

    /// Writes every lane to a 16-byte aligned pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null, valid for writing two consecutive `f64`
    /// values and aligned to 16 bytes. A misaligned pointer faults at run time.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `ptr` is not 16-byte aligned.
    #[inline(always)]
    unsafe fn store(self, ptr: *mut f64) {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be aligned to 16 bytes");

        _mm_store_pd(ptr, self.0)
    }

    /// Writes every lane with no alignment requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null and valid for writing two consecutive
    /// `f64` values.
    #[inline(always)]
    unsafe fn storeu(self, ptr: *mut f64) {
        _mm_storeu_pd(ptr, self.0)
    }

    #[inline(always)]
    fn as_ptr(&self) -> *const f64 {
        &self.0 as *const __m128d as *const f64
    }

    #[inline(always)]
    fn as_mut_ptr(&mut self) -> *mut f64 {
        &mut self.0 as *mut __m128d as *mut f64
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self(unsafe { _mm_andnot_pd(_mm_set1_pd(-0.0), self.0) })
    }

    /// `MINPD`: returns `rhs` when either lane is NaN.
    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self(unsafe { _mm_min_pd(self.0, rhs.0) })
    }

    /// `MAXPD`: returns `rhs` when either lane is NaN.
    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self(unsafe { _mm_max_pd(self.0, rhs.0) })
    }

    #[inline(always)]
    fn equal(self, rhs: Self) -> Bool64x2 {
        Bool64x2(unsafe { _mm_castpd_si128(_mm_cmpeq_pd(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn not_equal(self, rhs: Self) -> Bool64x2 {
        Bool64x2(unsafe { _mm_castpd_si128(_mm_cmpneq_pd(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn less(self, rhs: Self) -> Bool64x2 {
        Bool64x2(unsafe { _mm_castpd_si128(_mm_cmplt_pd(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn less_equal(self, rhs: Self) -> Bool64x2 {
        Bool64x2(unsafe { _mm_castpd_si128(_mm_cmple_pd(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn greater(self, rhs: Self) -> Bool64x2 {
        Bool64x2(unsafe { _mm_castpd_si128(_mm_cmpgt_pd(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn greater_equal(self, rhs: Self) -> Bool64x2 {
        Bool64x2(unsafe { _mm_castpd_si128(_mm_cmpge_pd(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn mask(conditions: Bool64x2, values: Self) -> Self {
        Self(unsafe { _mm_and_pd(_mm_castsi128_pd(conditions.0), values.0) })
    }

    #[inline(always)]
    fn select(conditions: Bool64x2, values: Self, otherwise: Self) -> Self {
        let conditions = unsafe { _mm_castsi128_pd(conditions.0) };
        Self(unsafe {
            _mm_or_pd(
                _mm_and_pd(conditions, values.0),
                _mm_andnot_pd(conditions, otherwise.0),
            )
        })
    }
}

macro_rules! impl_float_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $intrinsic:ident) => {
        impl $op for F64x2 {
            type Output = Self;

            #[inline(always)]
            fn $op_fn(self, rhs: Self) -> Self {
                Self(unsafe { $intrinsic(self.0, rhs.0) })
            }
        }

        impl $assign for F64x2 {
            #[inline(always)]
            fn $assign_fn(&mut self, rhs: Self) {
                *self = $op::$op_fn(*self, rhs);
            }
        }
    };
}

impl_float_op!(Add, add, AddAssign, add_assign, _mm_add_pd);
impl_float_op!(Sub, sub, SubAssign, sub_assign, _mm_sub_pd);
impl_float_op!(Mul, mul, MulAssign, mul_assign, _mm_mul_pd);
impl_float_op!(Div, div, DivAssign, div_assign, _mm_div_pd);

impl Neg for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self(unsafe { _mm_xor_pd(self.0, _mm_set1_pd(-0.0)) })
    }
}

impl LaneCast<F64x2> for F64x2 {
    #[inline(always)]
    fn lane_cast(self) -> F64x2 {
        self
    }
}

impl_array_cast!(F64x2, f64 => I64x2, i64);
impl_array_cast!(F64x2, f64 => U64x2, u64);
impl_array_cast!(I64x2, i64 => F64x2, f64);
impl_array_cast!(U64x2, u64 => F64x2, f64);

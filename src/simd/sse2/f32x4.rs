//! Four `f32` lanes.
//!
//! Arithmetic, comparisons and square root map to single SSE instructions.
//! `sin`, `cos` and `powf` run per lane through the scalar functions so the
//! results match the portable path exactly.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use super::int32x4::{I32x4, U32x4};
use super::mask::Bool32x4;
use crate::simd::portable::Portable;
use crate::simd::traits::{LaneCast, SimdVector};

/// Four `f32` lanes in one SSE register.
///
/// Lane `i` is the `i`-th element of [`F32x4::to_array`]; `new(x, y, z, w)`
/// puts `x` in lane 0.
///
/// # Usage
///
/// ```rust
/// use lanevec::simd::{F32x4, SimdMask, SimdVector};
///
/// let v = F32x4::new(1.0, 4.0, 9.0, 16.0);
/// assert_eq!(v.sqrt().to_array(), [1.0, 2.0, 3.0, 4.0]);
/// assert!(v.greater(F32x4::splat(5.0)).any());
/// ```
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F32x4(pub(crate) __m128);

impl F32x4 {
    /// Builds a vector from its four lanes, `x` in lane 0.
    #[inline(always)]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self(unsafe { _mm_setr_ps(x, y, z, w) })
    }

    /// Builds a vector from an array through an unaligned load, so the
    /// array needs no particular alignment.
    #[inline(always)]
    pub fn from_array(lanes: [f32; 4]) -> Self {
        Self(unsafe { _mm_loadu_ps(lanes.as_ptr()) })
    }

    #[inline(always)]
    pub fn to_array(self) -> [f32; 4] {
        *self.as_array()
    }

    /// Views the register as its lanes without copying.
    #[inline(always)]
    pub fn as_array(&self) -> &[f32; 4] {
        unsafe { &*(self as *const Self as *const [f32; 4]) }
    }

    #[inline(always)]
    pub fn as_mut_array(&mut self) -> &mut [f32; 4] {
        unsafe { &mut *(self as *mut Self as *mut [f32; 4]) }
    }

    /// Applies `f` to every lane.
    #[inline(always)]
    pub fn map(self, f: impl FnMut(f32) -> f32) -> Self {
        Self::from_array(self.to_array().map(f))
    }

    /// Lane-wise IEEE square root; negative lanes give NaN.
    #[inline(always)]
    pub fn sqrt(self) -> Self {
        Self(unsafe { _mm_sqrt_ps(self.0) })
    }

    #[inline(always)]
    pub fn sin(self) -> Self {
        self.map(f32::sin)
    }

    #[inline(always)]
    pub fn cos(self) -> Self {
        self.map(f32::cos)
    }

    /// Lane-wise `(sin, cos)`.
    #[inline(always)]
    pub fn sin_cos(self) -> (Self, Self) {
        let pairs = self.to_array().map(f32::sin_cos);
        (
            Self::from_array(pairs.map(|(s, _)| s)),
            Self::from_array(pairs.map(|(_, c)| c)),
        )
    }

    /// Raises each lane to the power held in the matching lane of
    /// `exponent`.
    ///
    /// # Arguments
    ///
    /// * `exponent` - Per-lane exponents
    #[inline(always)]
    pub fn powf(self, exponent: Self) -> Self {
        let base = self.to_array();
        let exponent = exponent.to_array();
        Self::from_array(core::array::from_fn(|i| base[i].powf(exponent[i])))
    }
}

impl Default for F32x4 {
    #[inline(always)]
    fn default() -> Self {
        Self::zero()
    }
}

impl num::Zero for F32x4 {
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

impl_one!(F32x4);

impl core::fmt::Debug for F32x4 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("F32x4").field(self.as_array()).finish()
    }
}

/// All lanes compare equal (so any NaN lane makes the vectors unequal).
impl PartialEq for F32x4 {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        unsafe { _mm_movemask_ps(_mm_cmpeq_ps(self.0, other.0)) == 0xF }
    }
}

impl Index<usize> for F32x4 {
    type Output = f32;

    #[inline(always)]
    fn index(&self, lane: usize) -> &f32 {
        &self.as_array()[lane]
    }
}

impl IndexMut<usize> for F32x4 {
    #[inline(always)]
    fn index_mut(&mut self, lane: usize) -> &mut f32 {
        &mut self.as_mut_array()[lane]
    }
}

impl From<__m128> for F32x4 {
    #[inline(always)]
    fn from(raw: __m128) -> Self {
        Self(raw)
    }
}

impl From<F32x4> for __m128 {
    #[inline(always)]
    fn from(vector: F32x4) -> Self {
        vector.0
    }
}

impl From<Portable<f32, 4>> for F32x4 {
    #[inline(always)]
    fn from(vector: Portable<f32, 4>) -> Self {
        Self::from_array(vector.to_array())
    }
}

impl From<F32x4> for Portable<f32, 4> {
    #[inline(always)]
    fn from(vector: F32x4) -> Self {
        Portable::from_array(vector.to_array())
    }
}

impl SimdVector for F32x4 {
    type Scalar = f32;
    type Mask = Bool32x4;

    const LANES: usize = 4;
    const IS_ACCELERATED: bool = true;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self(unsafe { _mm_set1_ps(value) })
    }

    #[inline(always)]
    fn zero() -> Self {
        Self(unsafe { _mm_setzero_ps() })
    }

    /// Loads four `f32` values from a 16-byte aligned pointer.
    ///
    /// Compiles to a single aligned SSE load. Use [`SimdVector::loadu`] when
    /// the alignment is not known.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null, valid for reading four consecutive `f32`
    /// values and aligned to 16 bytes. A misaligned pointer faults at run time.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `ptr` is not 16-byte aligned.
    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be aligned to 16 bytes");

        Self(_mm_load_ps(ptr))
    }

    /// Loads four `f32` values with no alignment requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null and valid for reading four consecutive `f32`
    /// values.
    #[inline(always)]
    unsafe fn loadu(ptr: *const f32) -> Self {
        Self(_mm_loadu_ps(ptr))
    }

    /// Writes every lane to a 16-byte aligned pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null, valid for writing four consecutive `f32`
    /// values and aligned to 16 bytes. A misaligned pointer faults at run time.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `ptr` is not 16-byte aligned.
    #[inline(always)]
    unsafe fn store(self, ptr: *mut f32) {
        debug_assert!(Self::is_aligned(ptr), "Pointer must be aligned to 16 bytes");

        _mm_store_ps(ptr, self.0)
    }

    /// Writes every lane with no alignment requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be non-null and valid for writing four consecutive
    /// `f32` values.
    #[inline(always)]
    unsafe fn storeu(self, ptr: *mut f32) {
        _mm_storeu_ps(ptr, self.0)
    }

    #[inline(always)]
    fn as_ptr(&self) -> *const f32 {
        &self.0 as *const __m128 as *const f32
    }

    #[inline(always)]
    fn as_mut_ptr(&mut self) -> *mut f32 {
        &mut self.0 as *mut __m128 as *mut f32
    }

    /// Clears the sign bit of every lane.
    #[inline(always)]
    fn abs(self) -> Self {
        Self(unsafe { _mm_andnot_ps(_mm_set1_ps(-0.0), self.0) })
    }

    /// `MINPS`: returns `rhs` when either lane is NaN.
    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self(unsafe { _mm_min_ps(self.0, rhs.0) })
    }

    /// `MAXPS`: returns `rhs` when either lane is NaN.
    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self(unsafe { _mm_max_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    fn equal(self, rhs: Self) -> Bool32x4 {
        Bool32x4(unsafe { _mm_castps_si128(_mm_cmpeq_ps(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn not_equal(self, rhs: Self) -> Bool32x4 {
        Bool32x4(unsafe { _mm_castps_si128(_mm_cmpneq_ps(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn less(self, rhs: Self) -> Bool32x4 {
        Bool32x4(unsafe { _mm_castps_si128(_mm_cmplt_ps(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn less_equal(self, rhs: Self) -> Bool32x4 {
        Bool32x4(unsafe { _mm_castps_si128(_mm_cmple_ps(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn greater(self, rhs: Self) -> Bool32x4 {
        Bool32x4(unsafe { _mm_castps_si128(_mm_cmpgt_ps(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn greater_equal(self, rhs: Self) -> Bool32x4 {
        Bool32x4(unsafe { _mm_castps_si128(_mm_cmpge_ps(self.0, rhs.0)) })
    }

    #[inline(always)]
    fn mask(conditions: Bool32x4, values: Self) -> Self {
        Self(unsafe { _mm_and_ps(_mm_castsi128_ps(conditions.0), values.0) })
    }

    #[inline(always)]
    fn select(conditions: Bool32x4, values: Self, otherwise: Self) -> Self {
        let conditions = unsafe { _mm_castsi128_ps(conditions.0) };
        Self(unsafe {
            _mm_or_ps(
                _mm_and_ps(conditions, values.0),
                _mm_andnot_ps(conditions, otherwise.0),
            )
        })
    }
}

macro_rules! impl_float_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $intrinsic:ident) => {
        impl $op for F32x4 {
            type Output = Self;

            #[inline(always)]
            fn $op_fn(self, rhs: Self) -> Self {
                Self(unsafe { $intrinsic(self.0, rhs.0) })
            }
        }

        impl $assign for F32x4 {
            #[inline(always)]
            fn $assign_fn(&mut self, rhs: Self) {
                *self = $op::$op_fn(*self, rhs);
            }
        }
    };
}

impl_float_op!(Add, add, AddAssign, add_assign, _mm_add_ps);
impl_float_op!(Sub, sub, SubAssign, sub_assign, _mm_sub_ps);
impl_float_op!(Mul, mul, MulAssign, mul_assign, _mm_mul_ps);
impl_float_op!(Div, div, DivAssign, div_assign, _mm_div_ps);

impl Neg for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self(unsafe { _mm_xor_ps(self.0, _mm_set1_ps(-0.0)) })
    }
}

impl LaneCast<F32x4> for F32x4 {
    #[inline(always)]
    fn lane_cast(self) -> F32x4 {
        self
    }
}

impl_array_cast!(F32x4, f32 => I32x4, i32);
impl_array_cast!(F32x4, f32 => U32x4, u32);
impl_array_cast!(I32x4, i32 => F32x4, f32);
impl_array_cast!(U32x4, u32 => F32x4, f32);

//! SSE2 lane vectors.
//!
//! Every type wraps one 128-bit register. Only SSE2 instructions are used;
//! operations SSE2 has no instruction for are composed from the ones it
//! has (unsigned and 64-bit comparisons, 32-bit multiplication, 64-bit
//! absolute value). Operations that cannot be composed cheaply are not
//! implemented at all, so using them is a compile error rather than a slow
//! path: `*` on 8- and 64-bit lanes, `/` and `%` on integers, `%` on floats,
//! 8-bit shifts, `>>` on `I64x2`, and shifts by a vector of counts.
#![allow(unused_unsafe)]

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// `(mask & a) | (!mask & b)`.
#[inline(always)]
pub(crate) unsafe fn blend_si128(mask: __m128i, a: __m128i, b: __m128i) -> __m128i {
    _mm_or_si128(_mm_and_si128(mask, a), _mm_andnot_si128(mask, b))
}

#[inline(always)]
pub(crate) unsafe fn not_si128(a: __m128i) -> __m128i {
    _mm_xor_si128(a, _mm_set1_epi32(-1))
}

/// Implements the operations every integer vector shares.
///
/// The comparison, min/max and abs helpers are passed in because SSE2 only
/// covers some lane widths and signedness combinations natively.
macro_rules! impl_integer_vector {
    (
        $name:ident, $scalar:ty, $lanes:literal, $mask:ident,
        set1: $set1:ident as $raw:ty,
        add: $add:ident, sub: $sub:ident,
        eq: $eq:path, gt: $gt:path,
        min: $min:path, max: $max:path, abs: $abs:path
    ) => {
        impl $name {
            /// Builds a vector from an array through an unaligned load.
            #[inline(always)]
            pub fn from_array(lanes: [$scalar; $lanes]) -> Self {
                unsafe { <Self as SimdVector>::loadu(lanes.as_ptr()) }
            }

            #[inline(always)]
            pub fn to_array(self) -> [$scalar; $lanes] {
                *self.as_array()
            }

            /// Views the register as its lanes without copying.
            #[inline(always)]
            pub fn as_array(&self) -> &[$scalar; $lanes] {
                unsafe { &*(self as *const Self as *const [$scalar; $lanes]) }
            }

            #[inline(always)]
            pub fn as_mut_array(&mut self) -> &mut [$scalar; $lanes] {
                unsafe { &mut *(self as *mut Self as *mut [$scalar; $lanes]) }
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                <Self as SimdVector>::zero()
            }
        }

        impl num::Zero for $name {
            #[inline(always)]
            fn zero() -> Self {
                <Self as SimdVector>::zero()
            }

            /// `true` when every lane is zero.
            #[inline(always)]
            fn is_zero(&self) -> bool {
                *self == <Self as SimdVector>::zero()
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_tuple(stringify!($name)).field(self.as_array()).finish()
            }
        }

        /// All lanes equal.
        impl PartialEq for $name {
            #[inline(always)]
            fn eq(&self, other: &Self) -> bool {
                unsafe { _mm_movemask_epi8(_mm_cmpeq_epi8(self.0, other.0)) == 0xFFFF }
            }
        }

        impl Eq for $name {}

        impl core::ops::Index<usize> for $name {
            type Output = $scalar;

            #[inline(always)]
            fn index(&self, lane: usize) -> &$scalar {
                &self.as_array()[lane]
            }
        }

        impl core::ops::IndexMut<usize> for $name {
            #[inline(always)]
            fn index_mut(&mut self, lane: usize) -> &mut $scalar {
                &mut self.as_mut_array()[lane]
            }
        }

        impl From<__m128i> for $name {
            #[inline(always)]
            fn from(raw: __m128i) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for __m128i {
            #[inline(always)]
            fn from(vector: $name) -> Self {
                vector.0
            }
        }

        impl From<Portable<$scalar, $lanes>> for $name {
            #[inline(always)]
            fn from(vector: Portable<$scalar, $lanes>) -> Self {
                Self::from_array(vector.to_array())
            }
        }

        impl From<$name> for Portable<$scalar, $lanes> {
            #[inline(always)]
            fn from(vector: $name) -> Self {
                Portable::from_array(vector.to_array())
            }
        }

        /// Reinterprets each boolean lane: `true` becomes all ones.
        impl From<$mask> for $name {
            #[inline(always)]
            fn from(mask: $mask) -> Self {
                Self(mask.0)
            }
        }

        /// A lane is `true` when it is non-zero.
        impl From<$name> for $mask {
            #[inline(always)]
            fn from(vector: $name) -> Self {
                vector.not_equal(<$name as SimdVector>::zero())
            }
        }

        impl LaneCast<$name> for $name {
            #[inline(always)]
            fn lane_cast(self) -> $name {
                self
            }
        }

        impl SimdVector for $name {
            type Scalar = $scalar;
            type Mask = $mask;

            const LANES: usize = $lanes;
            const IS_ACCELERATED: bool = true;

            #[inline(always)]
            fn splat(value: $scalar) -> Self {
                Self(unsafe { $set1(value as $raw) })
            }

            #[inline(always)]
            fn zero() -> Self {
                Self(unsafe { _mm_setzero_si128() })
            }

            /// Loads every lane from a 16-byte aligned pointer.
            ///
            /// # Safety
            ///
            /// `ptr` must be non-null, valid for reading `LANES` scalars and aligned
            /// to 16 bytes. A misaligned pointer faults at run time.
            ///
            /// # Panics
            ///
            /// Panics in debug builds if `ptr` is not 16-byte aligned.
            #[inline(always)]
            unsafe fn load(ptr: *const $scalar) -> Self {
                debug_assert!(Self::is_aligned(ptr), "Pointer must be aligned to 16 bytes");

                Self(_mm_load_si128(ptr as *const __m128i))
            }

            /// Loads every lane with no alignment requirement.
            ///
            /// # Safety
            ///
            /// `ptr` must be non-null and valid for reading `LANES` scalars.
            #[inline(always)]
            unsafe fn loadu(ptr: *const $scalar) -> Self {
                Self(_mm_loadu_si128(ptr as *const __m128i))
            }

            /// Writes every lane to a 16-byte aligned pointer.
            ///
            /// # Safety
            ///
            /// `ptr` must be non-null, valid for writing `LANES` scalars and aligned
            /// to 16 bytes. A misaligned pointer faults at run time.
            ///
            /// # Panics
            ///
            /// Panics in debug builds if `ptr` is not 16-byte aligned.
            #[inline(always)]
            unsafe fn store(self, ptr: *mut $scalar) {
                debug_assert!(Self::is_aligned(ptr), "Pointer must be aligned to 16 bytes");

                _mm_store_si128(ptr as *mut __m128i, self.0)
            }

            /// Writes every lane with no alignment requirement.
            ///
            /// # Safety
            ///
            /// `ptr` must be non-null and valid for writing `LANES` scalars.
            #[inline(always)]
            unsafe fn storeu(self, ptr: *mut $scalar) {
                _mm_storeu_si128(ptr as *mut __m128i, self.0)
            }

            #[inline(always)]
            fn as_ptr(&self) -> *const $scalar {
                &self.0 as *const __m128i as *const $scalar
            }

            #[inline(always)]
            fn as_mut_ptr(&mut self) -> *mut $scalar {
                &mut self.0 as *mut __m128i as *mut $scalar
            }

            /// Wrapping: the signed minimum stays unchanged.
            #[inline(always)]
            fn abs(self) -> Self {
                Self(unsafe { $abs(self.0) })
            }

            #[inline(always)]
            fn min(self, rhs: Self) -> Self {
                Self(unsafe { $min(self.0, rhs.0) })
            }

            #[inline(always)]
            fn max(self, rhs: Self) -> Self {
                Self(unsafe { $max(self.0, rhs.0) })
            }

            #[inline(always)]
            fn equal(self, rhs: Self) -> $mask {
                $mask(unsafe { $eq(self.0, rhs.0) })
            }

            #[inline(always)]
            fn not_equal(self, rhs: Self) -> $mask {
                $mask(unsafe { $crate::simd::sse2::not_si128($eq(self.0, rhs.0)) })
            }

            #[inline(always)]
            fn less(self, rhs: Self) -> $mask {
                $mask(unsafe { $gt(rhs.0, self.0) })
            }

            #[inline(always)]
            fn less_equal(self, rhs: Self) -> $mask {
                $mask(unsafe { $crate::simd::sse2::not_si128($gt(self.0, rhs.0)) })
            }

            #[inline(always)]
            fn greater(self, rhs: Self) -> $mask {
                $mask(unsafe { $gt(self.0, rhs.0) })
            }

            #[inline(always)]
            fn greater_equal(self, rhs: Self) -> $mask {
                $mask(unsafe { $crate::simd::sse2::not_si128($gt(rhs.0, self.0)) })
            }

            /// Zeroes the lanes whose condition is `false`.
            #[inline(always)]
            fn mask(conditions: $mask, values: Self) -> Self {
                Self(unsafe { _mm_and_si128(conditions.0, values.0) })
            }

            #[inline(always)]
            fn select(conditions: $mask, values: Self, otherwise: Self) -> Self {
                Self(unsafe { $crate::simd::sse2::blend_si128(conditions.0, values.0, otherwise.0) })
            }
        }

        impl core::ops::Add for $name {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self(unsafe { $add(self.0, rhs.0) })
            }
        }

        impl core::ops::Sub for $name {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                Self(unsafe { $sub(self.0, rhs.0) })
            }
        }

        impl core::ops::Neg for $name {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self(unsafe { $sub(_mm_setzero_si128(), self.0) })
            }
        }

        impl core::ops::Not for $name {
            type Output = Self;

            #[inline(always)]
            fn not(self) -> Self {
                Self(unsafe { $crate::simd::sse2::not_si128(self.0) })
            }
        }

        impl_integer_vector!(@bitwise $name, BitAnd, bitand, BitAndAssign, bitand_assign, _mm_and_si128);
        impl_integer_vector!(@bitwise $name, BitOr, bitor, BitOrAssign, bitor_assign, _mm_or_si128);
        impl_integer_vector!(@bitwise $name, BitXor, bitxor, BitXorAssign, bitxor_assign, _mm_xor_si128);

        impl_assign_ops!($name, AddAssign, add_assign, Add, add);
        impl_assign_ops!($name, SubAssign, sub_assign, Sub, sub);
    };

    (@bitwise $name:ident, $op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $intrinsic:ident) => {
        impl core::ops::$op for $name {
            type Output = Self;

            #[inline(always)]
            fn $op_fn(self, rhs: Self) -> Self {
                Self(unsafe { $intrinsic(self.0, rhs.0) })
            }
        }

        impl_assign_ops!($name, $assign, $assign_fn, $op, $op_fn);
    };
}

/// `a op= b` as `a = a op b`.
macro_rules! impl_assign_ops {
    ($name:ident, $assign:ident, $assign_fn:ident, $op:ident, $op_fn:ident) => {
        impl core::ops::$assign for $name {
            #[inline(always)]
            fn $assign_fn(&mut self, rhs: Self) {
                *self = core::ops::$op::$op_fn(*self, rhs);
            }
        }
    };
    ($name:ident, $assign:ident<$rhs:ty>, $assign_fn:ident, $op:ident, $op_fn:ident) => {
        impl core::ops::$assign<$rhs> for $name {
            #[inline(always)]
            fn $assign_fn(&mut self, rhs: $rhs) {
                *self = core::ops::$op::$op_fn(*self, rhs);
            }
        }
    };
}

/// Every lane one; only for the lane types that implement `Mul`.
macro_rules! impl_one {
    ($name:ident) => {
        impl num::One for $name {
            #[inline(always)]
            fn one() -> Self {
                <Self as SimdVector>::splat(<<Self as SimdVector>::Scalar as $crate::simd::element::Element>::ONE)
            }
        }
    };
}

/// Shifts every lane by the same `u32` count.
macro_rules! impl_uniform_shift {
    ($name:ident, $bits:literal, $op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $intrinsic:ident) => {
        impl core::ops::$op<u32> for $name {
            type Output = Self;

            #[inline(always)]
            fn $op_fn(self, count: u32) -> Self {
                debug_assert!(count < $bits, "Shift count {count} must be < {}", $bits);

                Self(unsafe { $intrinsic(self.0, _mm_cvtsi32_si128(count as i32)) })
            }
        }

        impl_assign_ops!($name, $assign<u32>, $assign_fn, $op, $op_fn);
    };
}

/// Same-width signed/unsigned conversion: the register is reinterpreted.
macro_rules! impl_reinterpret_cast {
    ($from:ident, $to:ident) => {
        impl LaneCast<$to> for $from {
            #[inline(always)]
            fn lane_cast(self) -> $to {
                $to(self.0)
            }
        }

        impl LaneCast<$from> for $to {
            #[inline(always)]
            fn lane_cast(self) -> $from {
                $from(self.0)
            }
        }
    };
}

/// Per-lane `as` conversion through the lane arrays.
macro_rules! impl_array_cast {
    ($from:ident, $from_scalar:ty => $to:ident, $to_scalar:ty) => {
        impl LaneCast<$to> for $from {
            #[inline(always)]
            fn lane_cast(self) -> $to {
                $to::from_array(self.to_array().map(|lane| lane as $to_scalar))
            }
        }
    };
}

mod f32x4;
mod f64x2;
mod int16x8;
mod int32x4;
mod int64x2;
mod int8x16;
mod mask;

pub use f32x4::F32x4;
pub use f64x2::F64x2;
pub use int16x8::{I16x8, U16x8};
pub use int32x4::{I32x4, U32x4};
pub use int64x2::{I64x2, U64x2};
pub use int8x16::{I8x16, U8x16};
pub use mask::{Bool16x8, Bool32x4, Bool64x2, Bool8x16};

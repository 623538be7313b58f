#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::element::MaskElement;
use crate::simd::portable::PortableMask;
use crate::simd::traits::SimdMask;

macro_rules! impl_mask {
    ($(#[$doc:meta])* $name:ident, $lane:ty, $lanes:literal) => {
        $(#[$doc])*
        #[derive(Copy, Clone)]
        #[repr(transparent)]
        pub struct $name(pub(crate) __m128i);

        impl $name {
            #[inline(always)]
            pub fn from_array(lanes: [bool; $lanes]) -> Self {
                let raw = lanes.map(<$lane as MaskElement>::from_bool);
                Self(unsafe { _mm_loadu_si128(raw.as_ptr() as *const __m128i) })
            }

            #[inline(always)]
            pub fn to_array(self) -> [bool; $lanes] {
                (*self.as_array()).map(<$lane as MaskElement>::to_bool)
            }

            #[inline(always)]
            fn as_array(&self) -> &[$lane; $lanes] {
                unsafe { &*(self as *const Self as *const [$lane; $lanes]) }
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self(unsafe { _mm_setzero_si128() })
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.to_array()).finish()
            }
        }

        impl PartialEq for $name {
            #[inline(always)]
            fn eq(&self, other: &Self) -> bool {
                unsafe { _mm_movemask_epi8(_mm_cmpeq_epi8(self.0, other.0)) == 0xFFFF }
            }
        }

        impl Eq for $name {}

        impl SimdMask for $name {
            type Lane = $lane;

            const LANES: usize = $lanes;

            #[inline(always)]
            fn splat(value: bool) -> Self {
                Self(unsafe { _mm_set1_epi32(if value { -1 } else { 0 }) })
            }

            #[inline(always)]
            fn as_ptr(&self) -> *const $lane {
                &self.0 as *const __m128i as *const $lane
            }

            // Canonical lanes make a byte-level movemask exact for every width.
            #[inline(always)]
            fn all(self) -> bool {
                unsafe { _mm_movemask_epi8(self.0) == 0xFFFF }
            }

            #[inline(always)]
            fn any(self) -> bool {
                unsafe { _mm_movemask_epi8(self.0) != 0 }
            }
        }

        impl core::ops::BitAnd for $name {
            type Output = Self;

            #[inline(always)]
            fn bitand(self, rhs: Self) -> Self {
                Self(unsafe { _mm_and_si128(self.0, rhs.0) })
            }
        }

        impl core::ops::BitOr for $name {
            type Output = Self;

            #[inline(always)]
            fn bitor(self, rhs: Self) -> Self {
                Self(unsafe { _mm_or_si128(self.0, rhs.0) })
            }
        }

        impl core::ops::BitXor for $name {
            type Output = Self;

            #[inline(always)]
            fn bitxor(self, rhs: Self) -> Self {
                Self(unsafe { _mm_xor_si128(self.0, rhs.0) })
            }
        }

        impl core::ops::Not for $name {
            type Output = Self;

            #[inline(always)]
            fn not(self) -> Self {
                Self(unsafe { super::not_si128(self.0) })
            }
        }

        impl_assign_ops!($name, BitAndAssign, bitand_assign, BitAnd, bitand);
        impl_assign_ops!($name, BitOrAssign, bitor_assign, BitOr, bitor);
        impl_assign_ops!($name, BitXorAssign, bitxor_assign, BitXor, bitxor);

        impl From<PortableMask<$lane, $lanes>> for $name {
            #[inline(always)]
            fn from(mask: PortableMask<$lane, $lanes>) -> Self {
                Self::from_array(mask.to_array())
            }
        }

        impl From<$name> for PortableMask<$lane, $lanes> {
            #[inline(always)]
            fn from(mask: $name) -> Self {
                PortableMask::from_array(mask.to_array())
            }
        }
    };
}

impl_mask!(
    /// Sixteen boolean lanes, one byte each.
    Bool8x16, i8, 16
);
impl_mask!(
    /// Eight boolean lanes, two bytes each.
    Bool16x8, i16, 8
);
impl_mask!(
    /// Four boolean lanes, four bytes each. Produced by `I32x4`, `U32x4` and `F32x4`.
    Bool32x4, i32, 4
);
impl_mask!(
    /// Two boolean lanes, eight bytes each. Produced by `I64x2`, `U64x2` and `F64x2`.
    Bool64x2, i64, 2
);

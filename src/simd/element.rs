//! Lane element types and supported lane counts.
//!
//! [`Element`] captures the per-lane arithmetic every backend must agree on:
//! integers wrap, floats follow IEEE 754, and `min`/`max` pick the first
//! operand only when the strict comparison holds (so a NaN operand yields the
//! second argument, which is exactly what `minps`/`maxps` do in hardware).
//!
//! [`MaskElement`] is the storage of one boolean lane. A lane is either
//! all-ones (true) or all-zeros (false); bitwise select and mask rely on it.

use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, BitXor, Not};

use num::traits::{AsPrimitive, PrimInt, WrappingShl, WrappingShr};

mod sealed {
    pub trait Sealed {}
}

/// Marker for a lane count.
pub struct LaneCount<const N: usize>;

/// Lane counts a vector may be instantiated with.
///
/// Any other `N` fails to compile as soon as an operation is used.
pub trait SupportedLaneCount: sealed::Sealed {}

impl sealed::Sealed for LaneCount<2> {}
impl sealed::Sealed for LaneCount<4> {}
impl sealed::Sealed for LaneCount<8> {}
impl sealed::Sealed for LaneCount<16> {}

impl SupportedLaneCount for LaneCount<2> {}
impl SupportedLaneCount for LaneCount<4> {}
impl SupportedLaneCount for LaneCount<8> {}
impl SupportedLaneCount for LaneCount<16> {}

/// One lane of a boolean vector: `TRUE` has every bit set, `FALSE` none.
pub trait MaskElement:
    Copy
    + Debug
    + Default
    + Eq
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    const TRUE: Self;
    const FALSE: Self;

    #[inline(always)]
    fn from_bool(value: bool) -> Self {
        if value {
            Self::TRUE
        } else {
            Self::FALSE
        }
    }

    #[inline(always)]
    fn to_bool(self) -> bool {
        self != Self::FALSE
    }
}

macro_rules! impl_mask_element {
    ($($t:ty),*) => {
        $(
            impl MaskElement for $t {
                const TRUE: Self = -1;
                const FALSE: Self = 0;
            }
        )*
    };
}

impl_mask_element!(i8, i16, i32, i64);

/// A scalar that can live in a lane.
pub trait Element:
    Copy + Debug + Default + PartialEq + PartialOrd + Send + Sync + 'static
{
    /// Boolean lane of the same bit width.
    type Mask: MaskElement;

    const ZERO: Self;
    const ONE: Self;

    fn lane_add(self, rhs: Self) -> Self;
    fn lane_sub(self, rhs: Self) -> Self;
    fn lane_mul(self, rhs: Self) -> Self;
    /// Integer division by zero panics, like the scalar operator.
    fn lane_div(self, rhs: Self) -> Self;
    fn lane_rem(self, rhs: Self) -> Self;
    fn lane_neg(self) -> Self;
    fn lane_abs(self) -> Self;

    /// `self & mask`, on the raw bits.
    fn mask_bits(self, mask: Self::Mask) -> Self;

    /// `(mask & values) | (!mask & otherwise)`, on the raw bits.
    fn select_bits(mask: Self::Mask, values: Self, otherwise: Self) -> Self;

    #[inline(always)]
    fn lane_min(self, rhs: Self) -> Self {
        if self < rhs {
            self
        } else {
            rhs
        }
    }

    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        if self > rhs {
            self
        } else {
            rhs
        }
    }
}

macro_rules! impl_integer_element {
    ($t:ty, $mask:ty, $abs:expr) => {
        impl Element for $t {
            type Mask = $mask;

            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline(always)]
            fn lane_div(self, rhs: Self) -> Self {
                self.wrapping_div(rhs)
            }

            #[inline(always)]
            fn lane_rem(self, rhs: Self) -> Self {
                self.wrapping_rem(rhs)
            }

            #[inline(always)]
            fn lane_neg(self) -> Self {
                self.wrapping_neg()
            }

            #[inline(always)]
            fn lane_abs(self) -> Self {
                let abs: fn($t) -> $t = $abs;
                abs(self)
            }

            #[inline(always)]
            fn mask_bits(self, mask: $mask) -> Self {
                self & (mask as $t)
            }

            #[inline(always)]
            fn select_bits(mask: $mask, values: Self, otherwise: Self) -> Self {
                let mask = mask as $t;
                (values & mask) | (otherwise & !mask)
            }
        }
    };
}

impl_integer_element!(i8, i8, |x| x.wrapping_abs());
impl_integer_element!(i16, i16, |x| x.wrapping_abs());
impl_integer_element!(i32, i32, |x| x.wrapping_abs());
impl_integer_element!(i64, i64, |x| x.wrapping_abs());
impl_integer_element!(u8, i8, |x| x);
impl_integer_element!(u16, i16, |x| x);
impl_integer_element!(u32, i32, |x| x);
impl_integer_element!(u64, i64, |x| x);

macro_rules! impl_float_element {
    ($t:ty, $mask:ty, $bits:ty) => {
        impl Element for $t {
            type Mask = $mask;

            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline(always)]
            fn lane_div(self, rhs: Self) -> Self {
                self / rhs
            }

            #[inline(always)]
            fn lane_rem(self, rhs: Self) -> Self {
                self % rhs
            }

            #[inline(always)]
            fn lane_neg(self) -> Self {
                -self
            }

            #[inline(always)]
            fn lane_abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline(always)]
            fn mask_bits(self, mask: $mask) -> Self {
                <$t>::from_bits(self.to_bits() & (mask as $bits))
            }

            #[inline(always)]
            fn select_bits(mask: $mask, values: Self, otherwise: Self) -> Self {
                let mask = mask as $bits;
                <$t>::from_bits((values.to_bits() & mask) | (otherwise.to_bits() & !mask))
            }
        }
    };
}

impl_float_element!(f32, i32, u32);
impl_float_element!(f64, i64, u64);

/// Integer lanes: bitwise operators and shifts.
///
/// Shift counts must be smaller than the lane width. Hardware and the
/// portable path disagree past that point, so it is asserted in debug builds
/// and left unspecified in release builds.
pub trait IntElement:
    Element + PrimInt + WrappingShl + WrappingShr + AsPrimitive<u32>
{
    const BITS: u32;

    #[inline(always)]
    fn lane_shl(self, count: u32) -> Self {
        debug_assert!(
            count < Self::BITS,
            "Shift count {count} must be < {}",
            Self::BITS
        );
        self.wrapping_shl(count)
    }

    /// Arithmetic for signed lanes, logical for unsigned ones.
    #[inline(always)]
    fn lane_shr(self, count: u32) -> Self {
        debug_assert!(
            count < Self::BITS,
            "Shift count {count} must be < {}",
            Self::BITS
        );
        self.wrapping_shr(count)
    }
}

macro_rules! impl_int_element {
    ($($t:ty),*) => {
        $(
            impl IntElement for $t {
                const BITS: u32 = <$t>::BITS;
            }
        )*
    };
}

impl_int_element!(i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_lanes_wrap() {
        assert_eq!(127i8.lane_add(1), -128);
        assert_eq!(0u8.lane_sub(1), 255);
        assert_eq!(i16::MIN.lane_neg(), i16::MIN);
        assert_eq!(i32::MIN.lane_abs(), i32::MIN);
        assert_eq!(200u8.lane_mul(2), 144);
    }

    #[test]
    fn test_unsigned_abs_is_identity() {
        assert_eq!(200u8.lane_abs(), 200);
        assert_eq!(u64::MAX.lane_abs(), u64::MAX);
    }

    #[test]
    fn test_min_max_nan_returns_second_operand() {
        let nan = f32::NAN;
        assert_eq!(nan.lane_min(1.0), 1.0);
        assert!(1.0f32.lane_min(nan).is_nan());
        assert_eq!(nan.lane_max(1.0), 1.0);
        assert!(1.0f32.lane_max(nan).is_nan());
    }

    #[test]
    fn test_select_bits_uses_canonical_masks() {
        assert_eq!(i8::select_bits(-1, 5, 9), 5);
        assert_eq!(i8::select_bits(0, 5, 9), 9);
        assert_eq!(f64::select_bits(-1, 1.5, 2.5), 1.5);
        assert_eq!(f64::select_bits(0, 1.5, 2.5), 2.5);
        assert_eq!(3.5f32.mask_bits(0), 0.0);
        assert_eq!(200u8.mask_bits(-1), 200);
    }

    #[test]
    fn test_mask_element_round_trip() {
        assert_eq!(i16::from_bool(true), -1);
        assert_eq!(i16::from_bool(false), 0);
        assert!(i64::TRUE.to_bool());
        assert!(!i64::FALSE.to_bool());
        assert_eq!(!i32::TRUE, i32::FALSE);
    }

    #[test]
    fn test_shifts() {
        assert_eq!((-16i8).lane_shr(2), -4);
        assert_eq!(0xF0u8.lane_shr(4), 0x0F);
        assert_eq!(1u16.lane_shl(15), 0x8000);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "Shift count 8 must be < 8")]
    fn test_shift_count_out_of_range_panics() {
        let _ = 1u8.lane_shl(8);
    }
}

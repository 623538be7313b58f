//! Math functions shared by scalars and lane vectors.
//!
//! Every function here accepts plain scalars as well as lane vectors, so
//! generic code such as the [`transform`](crate::transform) builders runs
//! unchanged on `f32`, `f64` or a `F32x4` holding four independent values.
//!
//! Transcendental functions promote their arguments first: `f32` stays
//! `f32`, `f64` stays `f64`, integers become `f64`, and float lane vectors
//! stay what they are. Binary functions ([`pow`]) promote both arguments to
//! a common type, which is `f32` only when both are `f32`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

use num::traits::AsPrimitive;
use num::Float;

use crate::simd::{Element, LaneCount, Portable, SimdVector, SupportedLaneCount};

/// Lane-wise comparison, selection and ordering.
///
/// Scalars behave like one-lane vectors whose mask is a `bool`. All functions
/// are associated functions rather than methods so they never shadow
/// `Ord::min` and friends; call them through the free functions below.
pub trait Lanewise: Copy {
    type Mask: Copy;

    fn abs(value: Self) -> Self;
    fn min(lhs: Self, rhs: Self) -> Self;
    fn max(lhs: Self, rhs: Self) -> Self;

    fn less(lhs: Self, rhs: Self) -> Self::Mask;
    fn less_equal(lhs: Self, rhs: Self) -> Self::Mask;
    fn greater(lhs: Self, rhs: Self) -> Self::Mask;
    fn greater_equal(lhs: Self, rhs: Self) -> Self::Mask;
    fn equal(lhs: Self, rhs: Self) -> Self::Mask;
    fn not_equal(lhs: Self, rhs: Self) -> Self::Mask;

    fn mask(conditions: Self::Mask, values: Self) -> Self;
    fn select(conditions: Self::Mask, values: Self, otherwise: Self) -> Self;
}

/// A floating-point scalar or float lane vector.
pub trait Real:
    Lanewise
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// `value` converted to this type, splatted across lanes.
    fn from_f64(value: f64) -> Self;

    fn sqrt(x: Self) -> Self;
    fn sin(x: Self) -> Self;
    fn cos(x: Self) -> Self;

    /// `(sin(x), cos(x))`.
    fn sincos(x: Self) -> (Self, Self);

    fn pow(base: Self, exponent: Self) -> Self;

    /// `1 / x`, exact.
    #[inline(always)]
    fn rcp(x: Self) -> Self {
        Self::from_f64(1.0) / x
    }

    /// `1 / sqrt(x)`, exact.
    #[inline(always)]
    fn rsqrt(x: Self) -> Self {
        Self::from_f64(1.0) / Self::sqrt(x)
    }
}

/// The floating-point type a value is evaluated in.
pub trait Promote: Copy {
    type Output: Real;

    fn promote(self) -> Self::Output;
}

/// The floating-point type two values are evaluated in together.
pub trait CommonReal<Rhs = Self>: Copy {
    type Output: Real;

    fn common(self, rhs: Rhs) -> (Self::Output, Self::Output);
}

/// Inner product.
pub trait Dot: Copy {
    type Output;

    fn dot(lhs: Self, rhs: Self) -> Self::Output;
}

/// Euclidean length and normalization.
pub trait Metric: Copy {
    type Output: Real;
    type Normalized;

    /// Squared length, in the promoted type.
    fn length2(value: Self) -> Self::Output;

    /// `value / length(value)`. A zero value divides by zero.
    fn normalize(value: Self) -> Self::Normalized;
}

macro_rules! impl_scalar_lanewise {
    ($($t:ty),*) => {
        $(
            impl Lanewise for $t {
                type Mask = bool;

                #[inline(always)]
                fn abs(value: Self) -> Self {
                    <$t as Element>::lane_abs(value)
                }

                #[inline(always)]
                fn min(lhs: Self, rhs: Self) -> Self {
                    <$t as Element>::lane_min(lhs, rhs)
                }

                #[inline(always)]
                fn max(lhs: Self, rhs: Self) -> Self {
                    <$t as Element>::lane_max(lhs, rhs)
                }

                #[inline(always)]
                fn less(lhs: Self, rhs: Self) -> bool {
                    lhs < rhs
                }

                #[inline(always)]
                fn less_equal(lhs: Self, rhs: Self) -> bool {
                    lhs <= rhs
                }

                #[inline(always)]
                fn greater(lhs: Self, rhs: Self) -> bool {
                    lhs > rhs
                }

                #[inline(always)]
                fn greater_equal(lhs: Self, rhs: Self) -> bool {
                    lhs >= rhs
                }

                #[inline(always)]
                fn equal(lhs: Self, rhs: Self) -> bool {
                    lhs == rhs
                }

                #[inline(always)]
                fn not_equal(lhs: Self, rhs: Self) -> bool {
                    lhs != rhs
                }

                #[inline(always)]
                fn mask(conditions: bool, values: Self) -> Self {
                    if conditions {
                        values
                    } else {
                        <$t as Element>::ZERO
                    }
                }

                #[inline(always)]
                fn select(conditions: bool, values: Self, otherwise: Self) -> Self {
                    if conditions {
                        values
                    } else {
                        otherwise
                    }
                }
            }
        )*
    };
}

impl_scalar_lanewise!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

macro_rules! impl_vector_lanewise {
    ($([$($generics:tt)*] [$($bounds:tt)*] $ty:ty;)*) => {
        $(
            impl<$($generics)*> Lanewise for $ty where $($bounds)* {
                type Mask = <$ty as SimdVector>::Mask;

                #[inline(always)]
                fn abs(value: Self) -> Self {
                    SimdVector::abs(value)
                }

                #[inline(always)]
                fn min(lhs: Self, rhs: Self) -> Self {
                    SimdVector::min(lhs, rhs)
                }

                #[inline(always)]
                fn max(lhs: Self, rhs: Self) -> Self {
                    SimdVector::max(lhs, rhs)
                }

                #[inline(always)]
                fn less(lhs: Self, rhs: Self) -> Self::Mask {
                    SimdVector::less(lhs, rhs)
                }

                #[inline(always)]
                fn less_equal(lhs: Self, rhs: Self) -> Self::Mask {
                    SimdVector::less_equal(lhs, rhs)
                }

                #[inline(always)]
                fn greater(lhs: Self, rhs: Self) -> Self::Mask {
                    SimdVector::greater(lhs, rhs)
                }

                #[inline(always)]
                fn greater_equal(lhs: Self, rhs: Self) -> Self::Mask {
                    SimdVector::greater_equal(lhs, rhs)
                }

                #[inline(always)]
                fn equal(lhs: Self, rhs: Self) -> Self::Mask {
                    SimdVector::equal(lhs, rhs)
                }

                #[inline(always)]
                fn not_equal(lhs: Self, rhs: Self) -> Self::Mask {
                    SimdVector::not_equal(lhs, rhs)
                }

                #[inline(always)]
                fn mask(conditions: Self::Mask, values: Self) -> Self {
                    <Self as SimdVector>::mask(conditions, values)
                }

                #[inline(always)]
                fn select(conditions: Self::Mask, values: Self, otherwise: Self) -> Self {
                    <Self as SimdVector>::select(conditions, values, otherwise)
                }
            }
        )*
    };
}

impl_vector_lanewise! {
    [T: Element, const N: usize] [LaneCount<N>: SupportedLaneCount] Portable<T, N>;
}

#[cfg(sse2)]
impl_vector_lanewise! {
    [] [] crate::simd::sse2::I8x16;
    [] [] crate::simd::sse2::U8x16;
    [] [] crate::simd::sse2::I16x8;
    [] [] crate::simd::sse2::U16x8;
    [] [] crate::simd::sse2::I32x4;
    [] [] crate::simd::sse2::U32x4;
    [] [] crate::simd::sse2::I64x2;
    [] [] crate::simd::sse2::U64x2;
    [] [] crate::simd::sse2::F32x4;
    [] [] crate::simd::sse2::F64x2;
}

macro_rules! impl_scalar_real {
    ($($t:ty),*) => {
        $(
            impl Real for $t {
                #[inline(always)]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline(always)]
                fn sqrt(x: Self) -> Self {
                    <$t>::sqrt(x)
                }

                #[inline(always)]
                fn sin(x: Self) -> Self {
                    <$t>::sin(x)
                }

                #[inline(always)]
                fn cos(x: Self) -> Self {
                    <$t>::cos(x)
                }

                #[inline(always)]
                fn sincos(x: Self) -> (Self, Self) {
                    <$t>::sin_cos(x)
                }

                #[inline(always)]
                fn pow(base: Self, exponent: Self) -> Self {
                    <$t>::powf(base, exponent)
                }
            }

            impl Promote for $t {
                type Output = $t;

                #[inline(always)]
                fn promote(self) -> $t {
                    self
                }
            }
        )*
    };
}

impl_scalar_real!(f32, f64);

macro_rules! impl_integer_promote {
    ($($t:ty),*) => {
        $(
            impl Promote for $t {
                type Output = f64;

                #[inline(always)]
                fn promote(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_integer_promote!(i8, i16, i32, i64, u8, u16, u32, u64);

macro_rules! impl_common_real {
    ($lhs:ty => $out:ty: $($rhs:ty),*) => {
        $(
            impl CommonReal<$rhs> for $lhs {
                type Output = $out;

                #[inline(always)]
                fn common(self, rhs: $rhs) -> ($out, $out) {
                    (self as $out, rhs as $out)
                }
            }
        )*
    };
}

impl_common_real!(f32 => f32: f32);
impl_common_real!(f32 => f64: f64, i8, i16, i32, i64, u8, u16, u32, u64);
impl_common_real!(f64 => f64: f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);
impl_common_real!(i8 => f64: f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);
impl_common_real!(i16 => f64: f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);
impl_common_real!(i32 => f64: f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);
impl_common_real!(i64 => f64: f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);
impl_common_real!(u8 => f64: f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);
impl_common_real!(u16 => f64: f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);
impl_common_real!(u32 => f64: f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);
impl_common_real!(u64 => f64: f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

impl<T, const N: usize> Real for Portable<T, N>
where
    T: Element + Float,
    f64: AsPrimitive<T>,
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        Self::splat(AsPrimitive::<T>::as_(value))
    }

    #[inline(always)]
    fn sqrt(x: Self) -> Self {
        Portable::sqrt(x)
    }

    #[inline(always)]
    fn sin(x: Self) -> Self {
        Portable::sin(x)
    }

    #[inline(always)]
    fn cos(x: Self) -> Self {
        Portable::cos(x)
    }

    #[inline(always)]
    fn sincos(x: Self) -> (Self, Self) {
        x.sin_cos()
    }

    #[inline(always)]
    fn pow(base: Self, exponent: Self) -> Self {
        base.powf(exponent)
    }
}

impl<T, const N: usize> Promote for Portable<T, N>
where
    T: Element + Float,
    f64: AsPrimitive<T>,
    LaneCount<N>: SupportedLaneCount,
{
    type Output = Self;

    #[inline(always)]
    fn promote(self) -> Self {
        self
    }
}

impl<T, const N: usize> CommonReal for Portable<T, N>
where
    T: Element + Float,
    f64: AsPrimitive<T>,
    LaneCount<N>: SupportedLaneCount,
{
    type Output = Self;

    #[inline(always)]
    fn common(self, rhs: Self) -> (Self, Self) {
        (self, rhs)
    }
}

#[cfg(sse2)]
macro_rules! impl_sse2_real {
    ($($name:ident: $scalar:ty),*) => {
        $(
            impl Real for crate::simd::sse2::$name {
                #[inline(always)]
                fn from_f64(value: f64) -> Self {
                    Self::splat(value as $scalar)
                }

                #[inline(always)]
                fn sqrt(x: Self) -> Self {
                    crate::simd::sse2::$name::sqrt(x)
                }

                #[inline(always)]
                fn sin(x: Self) -> Self {
                    crate::simd::sse2::$name::sin(x)
                }

                #[inline(always)]
                fn cos(x: Self) -> Self {
                    crate::simd::sse2::$name::cos(x)
                }

                #[inline(always)]
                fn sincos(x: Self) -> (Self, Self) {
                    x.sin_cos()
                }

                #[inline(always)]
                fn pow(base: Self, exponent: Self) -> Self {
                    base.powf(exponent)
                }
            }

            impl Promote for crate::simd::sse2::$name {
                type Output = Self;

                #[inline(always)]
                fn promote(self) -> Self {
                    self
                }
            }

            impl CommonReal for crate::simd::sse2::$name {
                type Output = Self;

                #[inline(always)]
                fn common(self, rhs: Self) -> (Self, Self) {
                    (self, rhs)
                }
            }
        )*
    };
}

#[cfg(sse2)]
impl_sse2_real!(F32x4: f32, F64x2: f64);

macro_rules! impl_scalar_metric {
    ($($t:ty),*) => {
        $(
            impl Dot for $t {
                type Output = $t;

                #[inline(always)]
                fn dot(lhs: Self, rhs: Self) -> $t {
                    lhs * rhs
                }
            }

            impl Metric for $t {
                type Output = <$t as Promote>::Output;
                type Normalized = <$t as Promote>::Output;

                #[inline(always)]
                fn length2(value: Self) -> Self::Output {
                    let value = value.promote();
                    value * value
                }

                #[inline(always)]
                fn normalize(value: Self) -> Self::Normalized {
                    let value = value.promote();
                    value / length(value)
                }
            }
        )*
    };
}

impl_scalar_metric!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

#[inline(always)]
pub fn sin<T: Promote>(x: T) -> T::Output {
    <T::Output as Real>::sin(x.promote())
}

#[inline(always)]
pub fn cos<T: Promote>(x: T) -> T::Output {
    <T::Output as Real>::cos(x.promote())
}

/// `(sin(x), cos(x))`, bit-identical to calling [`sin`] and [`cos`].
#[inline(always)]
pub fn sincos<T: Promote>(x: T) -> (T::Output, T::Output) {
    <T::Output as Real>::sincos(x.promote())
}

#[inline(always)]
pub fn pow<T: CommonReal<U>, U>(base: T, exponent: U) -> T::Output {
    let (base, exponent) = base.common(exponent);
    <T::Output as Real>::pow(base, exponent)
}

#[inline(always)]
pub fn sqrt<T: Promote>(x: T) -> T::Output {
    <T::Output as Real>::sqrt(x.promote())
}

#[inline(always)]
pub fn rcp<T: Promote>(x: T) -> T::Output {
    <T::Output as Real>::rcp(x.promote())
}

#[inline(always)]
pub fn rsqrt<T: Promote>(x: T) -> T::Output {
    <T::Output as Real>::rsqrt(x.promote())
}

/// Absolute value. The minimum of a signed integer type maps to itself.
#[inline(always)]
pub fn abs<T: Lanewise>(x: T) -> T {
    T::abs(x)
}

/// `a` where `a < b`, otherwise `b`.
#[inline(always)]
pub fn min<T: Lanewise>(a: T, b: T) -> T {
    T::min(a, b)
}

/// `a` where `a > b`, otherwise `b`.
#[inline(always)]
pub fn max<T: Lanewise>(a: T, b: T) -> T {
    T::max(a, b)
}

#[inline(always)]
pub fn less<T: Lanewise>(a: T, b: T) -> T::Mask {
    T::less(a, b)
}

#[inline(always)]
pub fn less_equal<T: Lanewise>(a: T, b: T) -> T::Mask {
    T::less_equal(a, b)
}

#[inline(always)]
pub fn greater<T: Lanewise>(a: T, b: T) -> T::Mask {
    T::greater(a, b)
}

#[inline(always)]
pub fn greater_equal<T: Lanewise>(a: T, b: T) -> T::Mask {
    T::greater_equal(a, b)
}

#[inline(always)]
pub fn equal<T: Lanewise>(a: T, b: T) -> T::Mask {
    T::equal(a, b)
}

#[inline(always)]
pub fn not_equal<T: Lanewise>(a: T, b: T) -> T::Mask {
    T::not_equal(a, b)
}

/// `values` where the condition holds, zero elsewhere.
#[inline(always)]
pub fn mask<T: Lanewise>(conditions: T::Mask, values: T) -> T {
    T::mask(conditions, values)
}

/// `values` where the condition holds, `otherwise` elsewhere.
#[inline(always)]
pub fn select<T: Lanewise>(conditions: T::Mask, values: T, otherwise: T) -> T {
    T::select(conditions, values, otherwise)
}

#[inline(always)]
pub fn dot<T: Dot>(a: T, b: T) -> T::Output {
    T::dot(a, b)
}

#[inline(always)]
pub fn length2<T: Metric>(x: T) -> T::Output {
    T::length2(x)
}

#[inline(always)]
pub fn length<T: Metric>(x: T) -> T::Output {
    <T::Output as Real>::sqrt(T::length2(x))
}

#[inline(always)]
pub fn normalize<T: Metric>(x: T) -> T::Normalized {
    T::normalize(x)
}

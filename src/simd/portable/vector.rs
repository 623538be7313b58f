use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

use num::traits::AsPrimitive;
use num::Float;

use crate::simd::element::{Element, IntElement, LaneCount, SupportedLaneCount};
use crate::simd::portable::PortableMask;
use crate::simd::traits::{LaneCast, SimdVector};

/// `N` lanes of `T` stored as a plain array.
///
/// Every operation is a per-lane loop the compiler is free to vectorize.
/// Integer arithmetic wraps; division by zero in an integer lane panics like
/// the scalar operator does.
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Portable<T, const N: usize>(pub(crate) [T; N]);

impl<T: Element, const N: usize> Portable<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    pub const fn from_array(lanes: [T; N]) -> Self {
        Self(lanes)
    }

    #[inline(always)]
    pub const fn to_array(self) -> [T; N] {
        self.0
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline(always)]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Applies `f` to every lane.
    #[inline(always)]
    pub fn map(self, f: impl FnMut(T) -> T) -> Self {
        Self(self.0.map(f))
    }

    /// Applies `f` to each pair of corresponding lanes.
    #[inline(always)]
    pub fn zip_map(self, rhs: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self(core::array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }

    #[inline(always)]
    fn compare(self, rhs: Self, f: impl Fn(T, T) -> bool) -> PortableMask<T::Mask, N> {
        PortableMask(core::array::from_fn(|i| {
            <T::Mask as crate::simd::element::MaskElement>::from_bool(f(self.0[i], rhs.0[i]))
        }))
    }
}

/// Two- and four-lane constructors share the name `new`, so the lane count
/// has to be known where they are called: go through a fixed-width alias
/// such as [`portable::F64x2`](crate::simd::portable::F64x2), or write
/// `Portable::<_, 2>::new`. Other widths use [`Portable::from_array`].
impl<T: Element> Portable<T, 2> {
    #[inline(always)]
    pub const fn new(x: T, y: T) -> Self {
        Self([x, y])
    }
}

impl<T: Element> Portable<T, 4> {
    #[inline(always)]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self([x, y, z, w])
    }
}

impl<T: Element + Float, const N: usize> Portable<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    pub fn sqrt(self) -> Self {
        self.map(Float::sqrt)
    }

    #[inline(always)]
    pub fn sin(self) -> Self {
        self.map(Float::sin)
    }

    #[inline(always)]
    pub fn cos(self) -> Self {
        self.map(Float::cos)
    }

    /// Lane-wise `(sin, cos)`.
    #[inline(always)]
    pub fn sin_cos(self) -> (Self, Self) {
        let pairs = self.0.map(Float::sin_cos);
        (Self(pairs.map(|(s, _)| s)), Self(pairs.map(|(_, c)| c)))
    }

    #[inline(always)]
    pub fn powf(self, exponent: Self) -> Self {
        self.zip_map(exponent, Float::powf)
    }
}

impl<T: Element, const N: usize> Default for Portable<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    fn default() -> Self {
        Self([T::ZERO; N])
    }
}

impl<T: Element, const N: usize> num::Zero for Portable<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    fn zero() -> Self {
        Self([T::ZERO; N])
    }

    #[inline(always)]
    fn is_zero(&self) -> bool {
        self.0.iter().all(|&lane| lane == T::ZERO)
    }
}

impl<T: Element, const N: usize> num::One for Portable<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    fn one() -> Self {
        Self([T::ONE; N])
    }
}

/// All lanes equal.
impl<T: Element, const N: usize> PartialEq for Portable<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Element, const N: usize> Index<usize> for Portable<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Output = T;

    #[inline(always)]
    fn index(&self, lane: usize) -> &T {
        &self.0[lane]
    }
}

impl<T: Element, const N: usize> IndexMut<usize> for Portable<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    fn index_mut(&mut self, lane: usize) -> &mut T {
        &mut self.0[lane]
    }
}

impl<T: Element, const N: usize> SimdVector for Portable<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Scalar = T;
    type Mask = PortableMask<T::Mask, N>;

    const LANES: usize = N;
    const IS_ACCELERATED: bool = false;

    #[inline(always)]
    fn splat(value: T) -> Self {
        Self([value; N])
    }

    #[inline(always)]
    unsafe fn load(ptr: *const T) -> Self {
        debug_assert!(
            Self::is_aligned(ptr),
            "Pointer must be aligned to {} bytes",
            core::mem::align_of::<Self>()
        );

        Self(core::ptr::read(ptr as *const [T; N]))
    }

    #[inline(always)]
    unsafe fn loadu(ptr: *const T) -> Self {
        Self(core::ptr::read_unaligned(ptr as *const [T; N]))
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut T) {
        debug_assert!(
            Self::is_aligned(ptr),
            "Pointer must be aligned to {} bytes",
            core::mem::align_of::<Self>()
        );

        core::ptr::write(ptr as *mut [T; N], self.0)
    }

    #[inline(always)]
    unsafe fn storeu(self, ptr: *mut T) {
        core::ptr::write_unaligned(ptr as *mut [T; N], self.0)
    }

    #[inline(always)]
    fn as_ptr(&self) -> *const T {
        self.0.as_ptr()
    }

    #[inline(always)]
    fn as_mut_ptr(&mut self) -> *mut T {
        self.0.as_mut_ptr()
    }

    #[inline(always)]
    fn abs(self) -> Self {
        self.map(T::lane_abs)
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::lane_min)
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        self.zip_map(rhs, T::lane_max)
    }

    #[inline(always)]
    fn equal(self, rhs: Self) -> Self::Mask {
        self.compare(rhs, |a, b| a == b)
    }

    #[inline(always)]
    fn not_equal(self, rhs: Self) -> Self::Mask {
        self.compare(rhs, |a, b| a != b)
    }

    #[inline(always)]
    fn less(self, rhs: Self) -> Self::Mask {
        self.compare(rhs, |a, b| a < b)
    }

    #[inline(always)]
    fn less_equal(self, rhs: Self) -> Self::Mask {
        self.compare(rhs, |a, b| a <= b)
    }

    #[inline(always)]
    fn greater(self, rhs: Self) -> Self::Mask {
        self.compare(rhs, |a, b| a > b)
    }

    #[inline(always)]
    fn greater_equal(self, rhs: Self) -> Self::Mask {
        self.compare(rhs, |a, b| a >= b)
    }

    #[inline(always)]
    fn mask(conditions: Self::Mask, values: Self) -> Self {
        Self(core::array::from_fn(|i| {
            values.0[i].mask_bits(conditions.0[i])
        }))
    }

    #[inline(always)]
    fn select(conditions: Self::Mask, values: Self, otherwise: Self) -> Self {
        Self(core::array::from_fn(|i| {
            T::select_bits(conditions.0[i], values.0[i], otherwise.0[i])
        }))
    }
}

macro_rules! impl_binary_op {
    ($bound:ident, $op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $lane:ident) => {
        impl<T: $bound, const N: usize> $op for Portable<T, N>
        where
            LaneCount<N>: SupportedLaneCount,
        {
            type Output = Self;

            #[inline(always)]
            fn $op_fn(self, rhs: Self) -> Self {
                self.zip_map(rhs, T::$lane)
            }
        }

        impl<T: $bound, const N: usize> $assign for Portable<T, N>
        where
            LaneCount<N>: SupportedLaneCount,
        {
            #[inline(always)]
            fn $assign_fn(&mut self, rhs: Self) {
                *self = $op::$op_fn(*self, rhs);
            }
        }
    };
}

impl_binary_op!(Element, Add, add, AddAssign, add_assign, lane_add);
impl_binary_op!(Element, Sub, sub, SubAssign, sub_assign, lane_sub);
impl_binary_op!(Element, Mul, mul, MulAssign, mul_assign, lane_mul);
impl_binary_op!(Element, Div, div, DivAssign, div_assign, lane_div);
impl_binary_op!(Element, Rem, rem, RemAssign, rem_assign, lane_rem);

impl<T: Element, const N: usize> Neg for Portable<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self.map(T::lane_neg)
    }
}

macro_rules! impl_bitwise_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $tok:tt) => {
        impl<T: IntElement, const N: usize> $op for Portable<T, N>
        where
            LaneCount<N>: SupportedLaneCount,
        {
            type Output = Self;

            #[inline(always)]
            fn $op_fn(self, rhs: Self) -> Self {
                self.zip_map(rhs, |a, b| a $tok b)
            }
        }

        impl<T: IntElement, const N: usize> $assign for Portable<T, N>
        where
            LaneCount<N>: SupportedLaneCount,
        {
            #[inline(always)]
            fn $assign_fn(&mut self, rhs: Self) {
                *self = *self $tok rhs;
            }
        }
    };
}

impl_bitwise_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bitwise_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bitwise_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl<T: IntElement, const N: usize> Not for Portable<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        self.map(|lane| !lane)
    }
}

macro_rules! impl_shift_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $lane:ident) => {
        /// Shifts every lane by the same count.
        impl<T: IntElement, const N: usize> $op<u32> for Portable<T, N>
        where
            LaneCount<N>: SupportedLaneCount,
        {
            type Output = Self;

            #[inline(always)]
            fn $op_fn(self, count: u32) -> Self {
                self.map(|lane| lane.$lane(count))
            }
        }

        /// Shifts each lane by the count held in the matching lane of `counts`.
        impl<T: IntElement, const N: usize> $op for Portable<T, N>
        where
            LaneCount<N>: SupportedLaneCount,
        {
            type Output = Self;

            #[inline(always)]
            fn $op_fn(self, counts: Self) -> Self {
                self.zip_map(counts, |lane, count| {
                    lane.$lane(AsPrimitive::<u32>::as_(count))
                })
            }
        }

        impl<T: IntElement, const N: usize> $assign<u32> for Portable<T, N>
        where
            LaneCount<N>: SupportedLaneCount,
        {
            #[inline(always)]
            fn $assign_fn(&mut self, count: u32) {
                *self = $op::$op_fn(*self, count);
            }
        }

        impl<T: IntElement, const N: usize> $assign for Portable<T, N>
        where
            LaneCount<N>: SupportedLaneCount,
        {
            #[inline(always)]
            fn $assign_fn(&mut self, counts: Self) {
                *self = $op::$op_fn(*self, counts);
            }
        }
    };
}

impl_shift_op!(Shl, shl, ShlAssign, shl_assign, lane_shl);
impl_shift_op!(Shr, shr, ShrAssign, shr_assign, lane_shr);

impl<T, U, const N: usize> LaneCast<Portable<U, N>> for Portable<T, N>
where
    T: Element + AsPrimitive<U>,
    U: Element,
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    fn lane_cast(self) -> Portable<U, N> {
        Portable(self.0.map(AsPrimitive::as_))
    }
}

/// Reinterprets each boolean lane: `true` becomes all ones.
impl<T: IntElement, const N: usize> From<PortableMask<T::Mask, N>> for Portable<T, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    fn from(mask: PortableMask<T::Mask, N>) -> Self {
        Self(core::array::from_fn(|i| (!T::ZERO).mask_bits(mask.0[i])))
    }
}

/// A lane is `true` when it is non-zero.
impl<T: IntElement, const N: usize> From<Portable<T, N>> for PortableMask<T::Mask, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    fn from(vector: Portable<T, N>) -> Self {
        vector.not_equal(Portable::zero())
    }
}

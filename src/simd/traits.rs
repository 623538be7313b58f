use core::fmt::Debug;
use core::ops::{Add, BitAnd, BitOr, BitXor, Not, Sub};

use crate::error::{alignment_error, length_error, Result};
use crate::simd::element::{Element, MaskElement};

/// A vector of boolean lanes.
///
/// Every lane holds the canonical pattern of its [`MaskElement`]: all ones
/// for `true`, all zeros for `false`.
pub trait SimdMask:
    Copy
    + Debug
    + PartialEq
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    type Lane: MaskElement;

    const LANES: usize;

    fn splat(value: bool) -> Self;

    fn as_ptr(&self) -> *const Self::Lane;

    /// `true` when every lane is set.
    fn all(self) -> bool;

    /// `true` when at least one lane is set.
    fn any(self) -> bool;

    #[inline(always)]
    fn none(self) -> bool {
        !self.any()
    }

    /// Reads one lane. Panics when `lane >= LANES`.
    #[inline(always)]
    fn test(&self, lane: usize) -> bool {
        self.as_slice()[lane].to_bool()
    }

    #[inline(always)]
    fn as_slice(&self) -> &[Self::Lane] {
        unsafe { core::slice::from_raw_parts(self.as_ptr(), Self::LANES) }
    }
}

/// A fixed-size vector of `LANES` scalars with component-wise operations.
///
/// Implemented by the array-backed [`Portable`](crate::simd::Portable) type
/// and, when the build enables it, by the SSE2 types. Both implementations
/// produce identical results for every operation they share.
pub trait SimdVector: Copy + Debug + Default + PartialEq {
    type Scalar: Element;
    type Mask: SimdMask<Lane = <Self::Scalar as Element>::Mask>;

    const LANES: usize;
    const IS_ACCELERATED: bool;

    /// Every lane set to `value`.
    fn splat(value: Self::Scalar) -> Self;

    #[inline(always)]
    fn zero() -> Self {
        Self::splat(Self::Scalar::ZERO)
    }

    /// Loads `LANES` scalars from an aligned pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading `LANES` scalars and aligned to
    /// `align_of::<Self>()`.
    unsafe fn load(ptr: *const Self::Scalar) -> Self;

    /// Loads `LANES` scalars from a pointer with no alignment requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading `LANES` scalars.
    unsafe fn loadu(ptr: *const Self::Scalar) -> Self;

    /// Stores every lane to an aligned pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writing `LANES` scalars and aligned to
    /// `align_of::<Self>()`.
    unsafe fn store(self, ptr: *mut Self::Scalar);

    /// Stores every lane with no alignment requirement.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writing `LANES` scalars.
    unsafe fn storeu(self, ptr: *mut Self::Scalar);

    fn as_ptr(&self) -> *const Self::Scalar;

    fn as_mut_ptr(&mut self) -> *mut Self::Scalar;

    /// Lane-wise absolute value. Signed integer minimum stays unchanged.
    fn abs(self) -> Self;

    /// `self` where `self < rhs`, otherwise `rhs`.
    fn min(self, rhs: Self) -> Self;

    /// `self` where `self > rhs`, otherwise `rhs`.
    fn max(self, rhs: Self) -> Self;

    fn equal(self, rhs: Self) -> Self::Mask;
    fn not_equal(self, rhs: Self) -> Self::Mask;
    fn less(self, rhs: Self) -> Self::Mask;
    fn less_equal(self, rhs: Self) -> Self::Mask;
    fn greater(self, rhs: Self) -> Self::Mask;
    fn greater_equal(self, rhs: Self) -> Self::Mask;

    /// `values` where the condition is set, zero elsewhere.
    fn mask(conditions: Self::Mask, values: Self) -> Self;

    /// `values` where the condition is set, `otherwise` elsewhere.
    fn select(conditions: Self::Mask, values: Self, otherwise: Self) -> Self;

    #[inline(always)]
    fn is_aligned(ptr: *const Self::Scalar) -> bool {
        (ptr as usize) % core::mem::align_of::<Self>() == 0
    }

    #[inline(always)]
    fn as_slice(&self) -> &[Self::Scalar] {
        unsafe { core::slice::from_raw_parts(self.as_ptr(), Self::LANES) }
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [Self::Scalar] {
        unsafe { core::slice::from_raw_parts_mut(self.as_mut_ptr(), Self::LANES) }
    }

    /// Loads the first `LANES` scalars of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` holds fewer than `LANES` scalars.
    #[inline(always)]
    fn from_slice(slice: &[Self::Scalar]) -> Self {
        assert!(
            slice.len() >= Self::LANES,
            "Slice must contain at least {} elements, got {}",
            Self::LANES,
            slice.len()
        );

        unsafe { Self::loadu(slice.as_ptr()) }
    }

    /// Loads exactly one vector from `slice`.
    fn try_from_slice(slice: &[Self::Scalar]) -> Result<Self> {
        if slice.len() != Self::LANES {
            return Err(length_error(Self::LANES, slice.len()));
        }

        Ok(unsafe { Self::loadu(slice.as_ptr()) })
    }

    /// Loads exactly one vector from `slice` using the aligned path.
    fn try_load_aligned(slice: &[Self::Scalar]) -> Result<Self> {
        if slice.len() != Self::LANES {
            return Err(length_error(Self::LANES, slice.len()));
        }

        let ptr = slice.as_ptr();
        if !Self::is_aligned(ptr) {
            return Err(alignment_error(ptr, core::mem::align_of::<Self>()));
        }

        Ok(unsafe { Self::load(ptr) })
    }

    /// Adds one to every lane and returns the new value.
    #[inline(always)]
    fn increment(&mut self) -> Self
    where
        Self: Add<Output = Self>,
    {
        *self = *self + Self::splat(Self::Scalar::ONE);
        *self
    }

    /// Subtracts one from every lane and returns the new value.
    #[inline(always)]
    fn decrement(&mut self) -> Self
    where
        Self: Sub<Output = Self>,
    {
        *self = *self - Self::splat(Self::Scalar::ONE);
        *self
    }

    /// Adds one to every lane and returns the previous value.
    #[inline(always)]
    fn post_increment(&mut self) -> Self
    where
        Self: Add<Output = Self>,
    {
        let previous = *self;
        self.increment();
        previous
    }

    /// Subtracts one from every lane and returns the previous value.
    #[inline(always)]
    fn post_decrement(&mut self) -> Self
    where
        Self: Sub<Output = Self>,
    {
        let previous = *self;
        self.decrement();
        previous
    }
}

/// Explicit conversion between lane vectors of the same lane count.
///
/// Each lane converts with `as` semantics: integer narrowing truncates, float
/// to integer saturates, integer to float rounds to nearest.
pub trait LaneCast<To> {
    fn lane_cast(self) -> To;
}

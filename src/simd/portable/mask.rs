use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::simd::element::{LaneCount, MaskElement, SupportedLaneCount};
use crate::simd::traits::SimdMask;

/// `N` boolean lanes stored as canonical `M` patterns.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PortableMask<M, const N: usize>(pub(crate) [M; N]);

impl<M: MaskElement, const N: usize> PortableMask<M, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    #[inline(always)]
    pub fn from_array(lanes: [bool; N]) -> Self {
        Self(lanes.map(M::from_bool))
    }

    #[inline(always)]
    pub fn to_array(self) -> [bool; N] {
        self.0.map(M::to_bool)
    }

    #[inline(always)]
    fn zip(self, rhs: Self, f: impl Fn(M, M) -> M) -> Self {
        Self(core::array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }
}

impl<M: MaskElement, const N: usize> Default for PortableMask<M, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    fn default() -> Self {
        Self([M::FALSE; N])
    }
}

impl<M: MaskElement, const N: usize> SimdMask for PortableMask<M, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Lane = M;

    const LANES: usize = N;

    #[inline(always)]
    fn splat(value: bool) -> Self {
        Self([M::from_bool(value); N])
    }

    #[inline(always)]
    fn as_ptr(&self) -> *const M {
        self.0.as_ptr()
    }

    #[inline(always)]
    fn all(self) -> bool {
        self.0.iter().all(|lane| lane.to_bool())
    }

    #[inline(always)]
    fn any(self) -> bool {
        self.0.iter().any(|lane| lane.to_bool())
    }
}

macro_rules! impl_mask_bitwise {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $tok:tt) => {
        impl<M: MaskElement, const N: usize> $op for PortableMask<M, N>
        where
            LaneCount<N>: SupportedLaneCount,
        {
            type Output = Self;

            #[inline(always)]
            fn $op_fn(self, rhs: Self) -> Self {
                self.zip(rhs, |a, b| a $tok b)
            }
        }

        impl<M: MaskElement, const N: usize> $assign for PortableMask<M, N>
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

impl_mask_bitwise!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_mask_bitwise!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_mask_bitwise!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl<M: MaskElement, const N: usize> Not for PortableMask<M, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self(self.0.map(|lane| !lane))
    }
}

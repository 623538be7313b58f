//! Lane vectors and their boolean masks.
//!
//! The aliases below (`I8x16`, `F32x4`, `Bool32x4`, ...) are the types to
//! use. The build script selects the backend once per build: with SSE2 they
//! name the register-backed types in [`sse2`], otherwise the array-backed
//! [`Portable`] and [`PortableMask`] of the same element type and lane count.
//! Code written against the aliases compiles on both, except for the
//! operations SSE2 cannot express (see [`sse2`]), which exist only on
//! [`Portable`]. The same names under [`portable`] always refer to the
//! portable types.

pub mod element;
pub mod portable;
pub mod traits;

#[cfg(sse2)]
pub mod sse2;

pub use element::{Element, IntElement, LaneCount, MaskElement, SupportedLaneCount};
pub use portable::{Portable, PortableMask};
pub use traits::{LaneCast, SimdMask, SimdVector};

#[cfg(sse2)]
pub use sse2::{
    Bool16x8, Bool32x4, Bool64x2, Bool8x16, F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, U16x8,
    U32x4, U64x2, U8x16,
};

#[cfg(not(sse2))]
pub use portable::{
    Bool16x8, Bool32x4, Bool64x2, Bool8x16, F32x4, F64x2, I16x8, I32x4, I64x2, I8x16, U16x8,
    U32x4, U64x2, U8x16,
};

//! Array-backed lane vectors.
//!
//! These types compile on every target and define the reference semantics
//! the accelerated backend is tested against. They are selected by the
//! `simd` aliases whenever the build does not enable SSE2.
//!
//! The fixed-width aliases below always name the portable types, whatever
//! backend the build selected, so both paths can be used side by side. Each
//! fixes the lane count, which the two- and four-lane `new` constructors
//! need to resolve:
//!
//! ```
//! use lanevec::simd::portable;
//!
//! let v = portable::F32x4::new(1.0, 2.0, 3.0, 4.0);
//! let w = portable::I64x2::new(-1, 1);
//! assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(w.to_array(), [-1, 1]);
//! ```

mod mask;
mod vector;

pub use mask::PortableMask;
pub use vector::Portable;

pub type I8x16 = Portable<i8, 16>;
pub type U8x16 = Portable<u8, 16>;
pub type I16x8 = Portable<i16, 8>;
pub type U16x8 = Portable<u16, 8>;
pub type I32x4 = Portable<i32, 4>;
pub type U32x4 = Portable<u32, 4>;
pub type I64x2 = Portable<i64, 2>;
pub type U64x2 = Portable<u64, 2>;
pub type F32x4 = Portable<f32, 4>;
pub type F64x2 = Portable<f64, 2>;

pub type Bool8x16 = PortableMask<i8, 16>;
pub type Bool16x8 = PortableMask<i16, 8>;
pub type Bool32x4 = PortableMask<i32, 4>;
pub type Bool64x2 = PortableMask<i64, 2>;

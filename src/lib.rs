//! Fixed-size SIMD lane vectors with a portable fallback, plus the small
//! vector, matrix and quaternion types and transform builders written on
//! top of them.
//!
//! The build script decides once per build whether the SSE2 backend is
//! used; see [`ACCELERATED`]. Both backends expose the same operations with
//! the same results, so code written against the aliases in [`simd`]
//! behaves identically either way.

pub mod error;
pub mod mat;
pub mod math;
pub mod quat;
pub mod simd;
pub mod transform;
pub mod vec;

/// `true` when the lane-vector aliases in [`simd`] resolve to the SSE2 types.
pub const ACCELERATED: bool = cfg!(sse2);

pub use error::{LaneError, Result};
pub use mat::{Mat, Mat2, Mat2x3, Mat3, Mat3x4, Mat4};
pub use quat::Quat;
pub use simd::{LaneCast, SimdMask, SimdVector};
pub use vec::{Vec2, Vec3, Vec4};

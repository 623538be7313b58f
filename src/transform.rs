//! Rotation, scale, translation and projection builders.
//!
//! Every matrix builder is generic over its output shape `C x R` (two to
//! four of each). The canonical 4x4 form is truncated to the requested
//! shape, and shapes too small to hold the transform do not compile:
//!
//! ```compile_fail
//! use lanevec::{mat::Mat2, transform::translation_mat_2d, vec::Vec2};
//!
//! // A 2D translation needs a third row.
//! let m: Mat2<f64> = translation_mat_2d(Vec2::new(1.0, 2.0));
//! ```
//!
//! Matrices follow the row-vector convention of [`crate::mat`]: points
//! multiply on the left, translation sits in the last row and the 2D
//! rotation by `a` has columns `(cos a, -sin a)` and `(sin a, cos a)`.
//!
//! Functions that need trigonometry or division take any [`Promote`] input
//! and return the promoted type, so `rotation_mat_2d::<i32, 4, 4>(12)` builds
//! a `Mat4<f64>`. Lane vectors work too: a `Vec3<F32x4>` axis builds four
//! matrices at once. The translation and scale builders only place zeros and
//! ones, so they take any `num::Zero + One` component, lane vectors included.

use num::{One, Zero};

use crate::mat::{Dims, Fits, Mat};
use crate::math::{not_equal, select, Promote, Real};
use crate::quat::Quat;
use crate::vec::{Vec2, Vec3, Vec4};

/// Splits a rotation vector into a unit axis and an angle, packed as
/// `(axis.x, axis.y, axis.z, angle)`.
///
/// The angle is the vector's length. A zero vector yields the `+Z` axis and
/// angle zero; the choice is made per lane with [`select`], so lane vectors
/// with some zero lanes are handled without branching.
pub fn axis_angle<T: Promote>(v: Vec3<T>) -> Vec4<T::Output> {
    axis_angle_of(v.promote())
}

fn axis_angle_of<U: Real>(v: Vec3<U>) -> Vec4<U> {
    let zero = U::from_f64(0.0);
    let one = U::from_f64(1.0);

    let angle = U::sqrt(v.x * v.x + v.y * v.y + v.z * v.z);
    let nonzero = not_equal(angle, zero);

    Vec4::new(
        select(nonzero, v.x / angle, zero),
        select(nonzero, v.y / angle, zero),
        select(nonzero, v.z / angle, one),
        angle,
    )
}

/// `axis * angle`. Angles differing by whole turns are not distinguished
/// once the result is split again.
#[inline]
pub fn rotation_vec<T>(axis: Vec3<T>, angle: T) -> Vec3<T>
where
    T: Copy + core::ops::Mul<Output = T>,
{
    axis * angle
}

/// [`rotation_vec`] of a packed `(axis, angle)`.
#[inline]
pub fn rotation_vec_from_axis_angle<T>(axis_angle: Vec4<T>) -> Vec3<T>
where
    T: Copy + core::ops::Mul<Output = T>,
{
    rotation_vec(axis_angle.xyz(), axis_angle.w)
}

/// `(axis * sin(angle / 2), cos(angle / 2))`.
pub fn rotation_quat<T: Promote>(axis: Vec3<T>, angle: T) -> Quat<T::Output> {
    rotation_quat_of(axis.promote(), angle.promote())
}

fn rotation_quat_of<U: Real>(axis: Vec3<U>, angle: U) -> Quat<U> {
    let (s, c) = U::sincos(angle / U::from_f64(2.0));
    Quat::new(axis.x * s, axis.y * s, axis.z * s, c)
}

pub fn rotation_quat_from_axis_angle<T: Promote>(axis_angle: Vec4<T>) -> Quat<T::Output> {
    rotation_quat(axis_angle.xyz(), axis_angle.w)
}

/// The rotation a rotation vector describes; a zero vector gives the
/// identity quaternion.
pub fn rotation_quat_from_vec<T: Promote>(v: Vec3<T>) -> Quat<T::Output> {
    let aa = axis_angle(v);
    rotation_quat_of(aa.xyz(), aa.w)
}

/// Translation by `(x, y)` in homogeneous 2D. With three rows the offset
/// goes in row 2, with four rows in row 3.
pub fn translation_mat_2d<T, const C: usize, const R: usize>(v: Vec2<T>) -> Mat<T, C, R>
where
    T: Copy + Zero + One,
    Dims<C, R>: Fits<2, 3>,
{
    let (o, l) = (T::zero(), T::one());
    let (x3, x4) = if R == 3 { (v.x, o) } else { (o, v.x) };
    let (y3, y4) = if R == 3 { (v.y, o) } else { (o, v.y) };

    Mat::from_4x4([
        [l, o, x3, x4],
        [o, l, y3, y4],
        [o, o, l, o],
        [o, o, o, l],
    ])
}

pub fn translation_mat_3d<T, const C: usize, const R: usize>(v: Vec3<T>) -> Mat<T, C, R>
where
    T: Copy + Zero + One,
    Dims<C, R>: Fits<3, 4>,
{
    let (o, l) = (T::zero(), T::one());

    Mat::from_4x4([
        [l, o, o, v.x],
        [o, l, o, v.y],
        [o, o, l, v.z],
        [o, o, o, l],
    ])
}

pub fn scale_mat_2d<T, const C: usize, const R: usize>(v: Vec2<T>) -> Mat<T, C, R>
where
    T: Copy + Zero + One,
    Dims<C, R>: Fits<2, 2>,
{
    let (o, l) = (T::zero(), T::one());

    Mat::from_4x4([
        [v.x, o, o, o],
        [o, v.y, o, o],
        [o, o, l, o],
        [o, o, o, l],
    ])
}

pub fn scale_mat_3d<T, const C: usize, const R: usize>(v: Vec3<T>) -> Mat<T, C, R>
where
    T: Copy + Zero + One,
    Dims<C, R>: Fits<3, 3>,
{
    let (o, l) = (T::zero(), T::one());

    Mat::from_4x4([
        [v.x, o, o, o],
        [o, v.y, o, o],
        [o, o, v.z, o],
        [o, o, o, l],
    ])
}

/// Rotation by `angle` radians in the plane.
pub fn rotation_mat_2d<T, const C: usize, const R: usize>(angle: T) -> Mat<T::Output, C, R>
where
    T: Promote,
    Dims<C, R>: Fits<2, 2>,
{
    let (s, c) = <T::Output as Real>::sincos(angle.promote());
    let o = <T::Output as Real>::from_f64(0.0);
    let l = <T::Output as Real>::from_f64(1.0);

    Mat::from_4x4([
        [c, -s, o, o],
        [s, c, o, o],
        [o, o, l, o],
        [o, o, o, l],
    ])
}

/// Rotation by `angle` radians about the unit vector `axis`.
pub fn rotation_mat_axis_angle<T, const C: usize, const R: usize>(
    axis: Vec3<T>,
    angle: T,
) -> Mat<T::Output, C, R>
where
    T: Promote,
    Dims<C, R>: Fits<3, 3>,
{
    rodrigues(axis.promote(), angle.promote())
}

pub fn rotation_mat_from_axis_angle<T, const C: usize, const R: usize>(
    axis_angle: Vec4<T>,
) -> Mat<T::Output, C, R>
where
    T: Promote,
    Dims<C, R>: Fits<3, 3>,
{
    rotation_mat_axis_angle(axis_angle.xyz(), axis_angle.w)
}

/// Rotation described by a rotation vector; a zero vector gives the
/// identity.
pub fn rotation_mat_from_vec<T, const C: usize, const R: usize>(v: Vec3<T>) -> Mat<T::Output, C, R>
where
    T: Promote,
    Dims<C, R>: Fits<3, 3>,
{
    let aa = axis_angle(v);
    rodrigues(aa.xyz(), aa.w)
}

fn rodrigues<U: Real, const C: usize, const R: usize>(axis: Vec3<U>, angle: U) -> Mat<U, C, R> {
    let Vec3 { x, y, z } = axis;
    let (s, c) = U::sincos(angle);
    let o = U::from_f64(0.0);
    let l = U::from_f64(1.0);
    let omc = l - c;

    let xx = x * x;
    let xy = x * y;
    let xz = x * z;
    let xs = x * s;
    let yy = y * y;
    let yz = y * z;
    let ys = y * s;
    let zz = z * z;
    let zs = z * s;

    let xxomc = xx * omc;
    let xyomc = xy * omc;
    let xzomc = xz * omc;
    let yyomc = yy * omc;
    let yzomc = yz * omc;
    let zzomc = zz * omc;

    Mat::from_4x4([
        [xxomc + c, xyomc - zs, xzomc + ys, o],
        [xyomc + zs, yyomc + c, yzomc - xs, o],
        [xzomc - ys, yzomc + xs, zzomc + c, o],
        [o, o, o, l],
    ])
}

/// Rotation described by a unit quaternion.
pub fn rotation_mat_from_quat<T, const C: usize, const R: usize>(q: Quat<T>) -> Mat<T, C, R>
where
    T: Real,
    Dims<C, R>: Fits<3, 3>,
{
    let Quat { x, y, z, w } = q;
    let o = T::from_f64(0.0);
    let l = T::from_f64(1.0);
    let two = T::from_f64(2.0);

    Mat::from_4x4([
        [
            l - two * y * y - two * z * z,
            two * x * y - two * z * w,
            two * x * z + two * y * w,
            o,
        ],
        [
            two * x * y + two * z * w,
            l - two * x * x - two * z * z,
            two * y * z - two * x * w,
            o,
        ],
        [
            two * x * z - two * y * w,
            two * y * z + two * x * w,
            l - two * x * x - two * y * y,
            o,
        ],
        [o, o, o, l],
    ])
}

/// Perspective projection for a vertical field of view `fovy` (radians),
/// width-over-height `aspect`, and near and far planes `n` and `f`.
pub fn perspective_mat<T, const C: usize, const R: usize>(
    fovy: T,
    aspect: T,
    n: T,
    f: T,
) -> Mat<T::Output, C, R>
where
    T: Promote,
    Dims<C, R>: Fits<4, 4>,
{
    perspective_of(fovy.promote(), aspect.promote(), n.promote(), f.promote())
}

fn perspective_of<U: Real, const C: usize, const R: usize>(
    fovy: U,
    aspect: U,
    n: U,
    f: U,
) -> Mat<U, C, R> {
    let o = U::from_f64(0.0);
    let l = U::from_f64(1.0);
    let two = U::from_f64(2.0);

    let (s, c) = U::sincos(fovy / two);
    let cot = c / s;
    let npf = n + f;
    let nmf = n - f;
    let ntf = n * f;

    Mat::from_4x4([
        [cot / aspect, o, o, o],
        [o, cot, o, o],
        [o, o, npf / nmf, two * ntf / nmf],
        [o, o, -l, o],
    ])
}

/// Orthographic projection of a `width x height` view between the near
/// and far planes `n` and `f`.
pub fn ortho_mat<T, const C: usize, const R: usize>(
    width: T,
    height: T,
    n: T,
    f: T,
) -> Mat<T::Output, C, R>
where
    T: Promote,
    Dims<C, R>: Fits<3, 4>,
{
    ortho_of(width.promote(), height.promote(), n.promote(), f.promote())
}

fn ortho_of<U: Real, const C: usize, const R: usize>(
    width: U,
    height: U,
    n: U,
    f: U,
) -> Mat<U, C, R> {
    let o = U::from_f64(0.0);
    let l = U::from_f64(1.0);
    let two = U::from_f64(2.0);

    Mat::from_4x4([
        [two / width, o, o, o],
        [o, two / height, o, o],
        [o, o, two / (n - f), (n + f) / (n - f)],
        [o, o, o, l],
    ])
}

//! Quaternions stored as a vector part `(x, y, z)` and a scalar part `w`.

use core::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use num::{One, Zero};

use crate::vec::{Vec3, Vec4};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Quat<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T> Quat<T> {
    pub const COMPONENT_COUNT: usize = 4;

    #[inline(always)]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Builds from the vector part `v` and scalar part `s`.
    #[inline(always)]
    pub fn from_parts(v: Vec3<T>, s: T) -> Self {
        Self::new(v.x, v.y, v.z, s)
    }

    #[inline(always)]
    pub fn from_array([x, y, z, w]: [T; 4]) -> Self {
        Self::new(x, y, z, w)
    }

    #[inline(always)]
    pub fn to_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[T; 4] {
        unsafe { &*(self as *const Self as *const [T; 4]) }
    }

    #[inline(always)]
    pub fn as_mut_array(&mut self) -> &mut [T; 4] {
        unsafe { &mut *(self as *mut Self as *mut [T; 4]) }
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self as *const Self as *const T
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self as *mut Self as *mut T
    }
}

impl<T: Copy> Quat<T> {
    /// The vector part `(x, y, z)`.
    #[inline(always)]
    pub fn v(&self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// The scalar part `w`.
    #[inline(always)]
    pub fn s(&self) -> T {
        self.w
    }

    #[inline(always)]
    pub fn to_vec4(&self) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, self.w)
    }
}

impl<T: Zero + One> Quat<T> {
    /// `(0, 0, 0, 1)`.
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }
}

impl<T: Neg<Output = T>> Quat<T> {
    /// Negated vector part, same scalar part.
    #[inline(always)]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }
}

impl<T> Index<usize> for Quat<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.as_array()[index]
    }
}

impl<T> IndexMut<usize> for Quat<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_array()[index]
    }
}

/// Hamilton product.
impl<T> Mul for Quat<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts() {
        let q = Quat::from_parts(Vec3::new(1.0, 2.0, 3.0), 4.0);
        assert_eq!(q.v(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(q.s(), 4.0);
        assert_eq!(q[3], 4.0);
        assert_eq!(q.to_vec4(), Vec4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_identity() {
        assert_eq!(Quat::<f64>::identity(), Quat::new(0.0, 0.0, 0.0, 1.0));

        let q = Quat::new(1, 2, 3, 4);
        assert_eq!(Quat::identity() * q, q);
        assert_eq!(q * Quat::identity(), q);
    }

    #[test]
    fn test_hamilton_product() {
        let i = Quat::new(1, 0, 0, 0);
        let j = Quat::new(0, 1, 0, 0);
        let k = Quat::new(0, 0, 1, 0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, k.conjugate());
        assert_eq!(i * i, Quat::new(0, 0, 0, -1));
    }

    #[test]
    fn test_conjugate_product_is_norm() {
        let q = Quat::new(1, 2, 3, 4);
        assert_eq!(q * q.conjugate(), Quat::new(0, 0, 0, 30));
    }

    #[test]
    fn test_pointer_access() {
        let mut q = Quat::new(1.5f32, 2.5, 3.5, 4.5);
        q[0] = 0.5;
        let components = unsafe { core::slice::from_raw_parts(q.as_ptr(), 4) };
        assert_eq!(components, &[0.5, 2.5, 3.5, 4.5]);
    }
}

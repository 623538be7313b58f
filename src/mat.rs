//! Column-major matrices of `C` columns by `R` rows.
//!
//! Points are row vectors multiplied on the left (`p' = p * M`), so
//! composing transforms reads left to right and `m[c][r]` is row `r` of
//! column `c`. This is the transpose of the column-vector convention.

use core::ops::{Add, Index, IndexMut, Mul};

use num::{One, Zero};

/// `C` columns of `R` components each.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Mat<T, const C: usize, const R: usize> {
    columns: [[T; R]; C],
}

pub type Mat2<T> = Mat<T, 2, 2>;
pub type Mat2x3<T> = Mat<T, 2, 3>;
pub type Mat3<T> = Mat<T, 3, 3>;
pub type Mat3x4<T> = Mat<T, 3, 4>;
pub type Mat4<T> = Mat<T, 4, 4>;

/// Marker for a `C x R` matrix shape.
pub struct Dims<const C: usize, const R: usize>;

/// Implemented by every [`Dims`] with at least `MIN_C` columns and `MIN_R`
/// rows, and at most four of each.
pub trait Fits<const MIN_C: usize, const MIN_R: usize> {}

macro_rules! impl_fits {
    ($min_c:literal, $min_r:literal => $(($c:literal, $r:literal)),+) => {
        $(impl Fits<$min_c, $min_r> for Dims<$c, $r> {})+
    };
}

impl_fits!(2, 2 => (2, 2), (2, 3), (2, 4), (3, 2), (3, 3), (3, 4), (4, 2), (4, 3), (4, 4));
impl_fits!(2, 3 => (2, 3), (2, 4), (3, 3), (3, 4), (4, 3), (4, 4));
impl_fits!(3, 3 => (3, 3), (3, 4), (4, 3), (4, 4));
impl_fits!(3, 4 => (3, 4), (4, 4));
impl_fits!(4, 4 => (4, 4));

impl<T, const C: usize, const R: usize> Mat<T, C, R> {
    pub const COLUMN_COUNT: usize = C;
    pub const ROW_COUNT: usize = R;

    #[inline(always)]
    pub const fn from_columns(columns: [[T; R]; C]) -> Self {
        Self { columns }
    }

    #[inline(always)]
    pub fn to_columns(self) -> [[T; R]; C] {
        self.columns
    }

    #[inline(always)]
    pub fn columns(&self) -> &[[T; R]; C] {
        &self.columns
    }

    /// Pointer to row 0 of column 0; the columns follow contiguously.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.columns.as_ptr() as *const T
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.columns.as_mut_ptr() as *mut T
    }
}

impl<T: Copy, const C: usize, const R: usize> Mat<T, C, R> {
    /// Truncates a 4x4 column list to `C x R`.
    ///
    /// Panics if `C` or `R` exceeds four; the transform builders rule that
    /// out with their [`Fits`] bounds.
    #[inline(always)]
    pub(crate) fn from_4x4(columns: [[T; 4]; 4]) -> Self {
        Self {
            columns: core::array::from_fn(|c| core::array::from_fn(|r| columns[c][r])),
        }
    }

    /// Row `r` across every column.
    #[inline(always)]
    pub fn row(&self, r: usize) -> [T; C] {
        core::array::from_fn(|c| self.columns[c][r])
    }

    #[inline(always)]
    pub fn transpose(&self) -> Mat<T, R, C> {
        Mat {
            columns: core::array::from_fn(|r| self.row(r)),
        }
    }
}

impl<T: Copy + Zero + One, const C: usize, const R: usize> Mat<T, C, R> {
    /// Ones on the main diagonal, zero elsewhere.
    pub fn identity() -> Self {
        Self {
            columns: core::array::from_fn(|c| {
                core::array::from_fn(|r| if c == r { T::one() } else { T::zero() })
            }),
        }
    }
}

impl<T: Copy + Zero, const C: usize, const R: usize> Mat<T, C, R> {
    pub fn zero() -> Self {
        Self {
            columns: [[T::zero(); R]; C],
        }
    }
}

impl<T, const C: usize, const R: usize> Mat<T, C, R>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    /// `p * M` for a row vector `p` of `R` components.
    #[inline]
    pub fn transform_row(&self, p: [T; R]) -> [T; C] {
        core::array::from_fn(|c| {
            let column = &self.columns[c];
            (0..R).fold(T::zero(), |sum, r| sum + p[r] * column[r])
        })
    }
}

impl<T: Copy + Zero, const C: usize, const R: usize> Default for Mat<T, C, R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const C: usize, const R: usize> From<[[T; R]; C]> for Mat<T, C, R> {
    #[inline(always)]
    fn from(columns: [[T; R]; C]) -> Self {
        Self::from_columns(columns)
    }
}

impl<T, const C: usize, const R: usize> Index<usize> for Mat<T, C, R> {
    type Output = [T; R];

    #[inline(always)]
    fn index(&self, column: usize) -> &[T; R] {
        &self.columns[column]
    }
}

impl<T, const C: usize, const R: usize> IndexMut<usize> for Mat<T, C, R> {
    #[inline(always)]
    fn index_mut(&mut self, column: usize) -> &mut [T; R] {
        &mut self.columns[column]
    }
}

/// Left-to-right composition: `p * (A * B) == (p * A) * B`.
impl<T, const K: usize, const C: usize, const R: usize> Mul<Mat<T, C, K>> for Mat<T, K, R>
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    type Output = Mat<T, C, R>;

    fn mul(self, rhs: Mat<T, C, K>) -> Mat<T, C, R> {
        Mat {
            columns: core::array::from_fn(|c| {
                core::array::from_fn(|r| {
                    (0..K).fold(T::zero(), |sum, k| sum + self.columns[k][r] * rhs.columns[c][k])
                })
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        assert_eq!(core::mem::size_of::<Mat3x4<f32>>(), 48);
        assert_eq!(Mat3x4::<f32>::COLUMN_COUNT, 3);
        assert_eq!(Mat3x4::<f32>::ROW_COUNT, 4);

        let m = Mat2::from_columns([[1, 2], [3, 4]]);
        let flat = unsafe { core::slice::from_raw_parts(m.as_ptr(), 4) };
        assert_eq!(flat, &[1, 2, 3, 4]);
    }

    #[test]
    fn test_identity_and_zero() {
        let m = Mat3x4::<i32>::identity();
        assert_eq!(m[0], [1, 0, 0, 0]);
        assert_eq!(m[1], [0, 1, 0, 0]);
        assert_eq!(m[2], [0, 0, 1, 0]);
        assert_eq!(Mat2::<f64>::default(), Mat2::zero());
    }

    #[test]
    fn test_from_4x4_truncates() {
        let full = [[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 15, 16]];
        let m = Mat2x3::from_4x4(full);
        assert_eq!(m.to_columns(), [[1, 2, 3], [5, 6, 7]]);
        assert_eq!(Mat4::from_4x4(full).to_columns(), full);
    }

    #[test]
    fn test_rows_and_transpose() {
        let m = Mat2x3::from_columns([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.row(1), [2, 5]);
        let t = m.transpose();
        assert_eq!(t.to_columns(), [[1, 4], [2, 5], [3, 6]]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_index_mut() {
        let mut m = Mat2::<i32>::identity();
        m[1][0] = 7;
        assert_eq!(m.row(0), [1, 7]);
    }

    #[test]
    fn test_transform_row() {
        // Translation lives in the last row.
        let m = Mat2x3::from_columns([[1.0, 0.0, 5.0], [0.0, 1.0, -2.0]]);
        assert_eq!(m.transform_row([1.0, 1.0, 1.0]), [6.0, -1.0]);
        assert_eq!(m.transform_row([1.0, 1.0, 0.0]), [1.0, 1.0]);
    }

    #[test]
    fn test_composition_matches_sequential_transform() {
        let a = Mat3::from_columns([[1, 2, 0], [0, 1, 3], [4, 0, 1]]);
        let b = Mat3::from_columns([[2, 0, 1], [1, 1, 0], [0, 3, 1]]);
        let p = [1, -2, 3];

        let sequential = b.transform_row(a.transform_row(p));
        assert_eq!((a * b).transform_row(p), sequential);
        assert_eq!(Mat3::identity() * a, a);
    }

    #[test]
    fn test_non_square_composition() {
        let a = Mat2x3::from_columns([[1, 0, 1], [0, 1, 1]]);
        let b = Mat::<i32, 3, 2>::from_columns([[1, 0], [0, 1], [1, 1]]);
        let p = [2, 3, 4];

        let ab: Mat3<i32> = a * b;
        assert_eq!(ab.transform_row(p), b.transform_row(a.transform_row(p)));
        assert_eq!(ab.transform_row(p), [6, 7, 13]);
    }
}

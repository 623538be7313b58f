//! Fixed-size vectors of two, three and four components.
//!
//! Components may be any scalar or lane vector type; arithmetic is
//! component-wise, and `==` holds only when every component compares equal.

use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

use num::traits::AsPrimitive;
use num::{One, Zero};

use crate::math::{Dot, Metric, Promote, Real};

macro_rules! impl_vec {
    ($name:ident, $count:literal, $($field:ident),+) => {
        impl<T> $name<T> {
            pub const COMPONENT_COUNT: usize = $count;

            #[inline(always)]
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }

            #[inline(always)]
            pub fn from_array(components: [T; $count]) -> Self {
                let [$($field),+] = components;
                Self { $($field),+ }
            }

            #[inline(always)]
            pub fn to_array(self) -> [T; $count] {
                [$(self.$field),+]
            }

            #[inline(always)]
            pub fn as_array(&self) -> &[T; $count] {
                unsafe { &*(self as *const Self as *const [T; $count]) }
            }

            #[inline(always)]
            pub fn as_mut_array(&mut self) -> &mut [T; $count] {
                unsafe { &mut *(self as *mut Self as *mut [T; $count]) }
            }

            /// Pointer to the first component; the rest follow contiguously.
            #[inline(always)]
            pub fn as_ptr(&self) -> *const T {
                self as *const Self as *const T
            }

            #[inline(always)]
            pub fn as_mut_ptr(&mut self) -> *mut T {
                self as *mut Self as *mut T
            }

            /// Applies `f` to every component.
            #[inline(always)]
            pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> $name<U> {
                $name { $($field: f(self.$field)),+ }
            }
        }

        impl<T: Copy> $name<T> {
            /// Every component set to `value`.
            #[inline(always)]
            pub const fn splat(value: T) -> Self {
                Self { $($field: value),+ }
            }

            /// Converts each component with `as` semantics.
            #[inline(always)]
            pub fn cast<U>(self) -> $name<U>
            where
                T: AsPrimitive<U>,
                U: Copy + 'static,
            {
                self.map(|c| AsPrimitive::<U>::as_(c))
            }
        }

        impl<T: Zero + Copy> $name<T> {
            #[inline(always)]
            pub fn zero() -> Self {
                Self::splat(T::zero())
            }
        }

        impl<T: Promote> $name<T> {
            /// Every component in its floating-point evaluation type.
            #[inline(always)]
            pub fn promote(self) -> $name<T::Output> {
                self.map(Promote::promote)
            }
        }

        impl<T> From<[T; $count]> for $name<T> {
            #[inline(always)]
            fn from(components: [T; $count]) -> Self {
                Self::from_array(components)
            }
        }

        impl<T> From<$name<T>> for [T; $count] {
            #[inline(always)]
            fn from(vector: $name<T>) -> Self {
                vector.to_array()
            }
        }

        impl<T> Index<usize> for $name<T> {
            type Output = T;

            #[inline(always)]
            fn index(&self, index: usize) -> &T {
                &self.as_array()[index]
            }
        }

        impl<T> IndexMut<usize> for $name<T> {
            #[inline(always)]
            fn index_mut(&mut self, index: usize) -> &mut T {
                &mut self.as_mut_array()[index]
            }
        }

        impl<T: Neg<Output = T>> Neg for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl_vec!(@binary $name, $($field),+ ; Add, add, AddAssign, add_assign);
        impl_vec!(@binary $name, $($field),+ ; Sub, sub, SubAssign, sub_assign);
        impl_vec!(@binary $name, $($field),+ ; Mul, mul, MulAssign, mul_assign);
        impl_vec!(@binary $name, $($field),+ ; Div, div, DivAssign, div_assign);
        impl_vec!(@binary $name, $($field),+ ; Rem, rem, RemAssign, rem_assign);
        impl_vec!(@binary $name, $($field),+ ; BitAnd, bitand, BitAndAssign, bitand_assign);
        impl_vec!(@binary $name, $($field),+ ; BitOr, bitor, BitOrAssign, bitor_assign);
        impl_vec!(@binary $name, $($field),+ ; BitXor, bitxor, BitXorAssign, bitxor_assign);
        impl_vec!(@binary $name, $($field),+ ; Shl, shl, ShlAssign, shl_assign);
        impl_vec!(@binary $name, $($field),+ ; Shr, shr, ShrAssign, shr_assign);

        impl<T: Not<Output = T>> Not for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn not(self) -> Self {
                Self { $($field: !self.$field),+ }
            }
        }

        impl<T> Dot for $name<T>
        where
            T: Copy + Add<Output = T> + Mul<Output = T>,
        {
            type Output = T;

            #[inline(always)]
            fn dot(lhs: Self, rhs: Self) -> T {
                impl_vec!(@sum $(lhs.$field * rhs.$field),+)
            }
        }

        impl<T: Promote> Metric for $name<T> {
            type Output = T::Output;
            type Normalized = $name<T::Output>;

            #[inline(always)]
            fn length2(value: Self) -> T::Output {
                let value = value.promote();
                Dot::dot(value, value)
            }

            #[inline(always)]
            fn normalize(value: Self) -> $name<T::Output> {
                let value = value.promote();
                value / <T::Output as Real>::sqrt(Dot::dot(value, value))
            }
        }
    };

    (@binary $name:ident, $($field:ident),+ ; $op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident) => {
        impl<T: $op<Output = T>> $op for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn $op_fn(self, rhs: Self) -> Self {
                Self { $($field: $op::$op_fn(self.$field, rhs.$field)),+ }
            }
        }

        /// Applies the scalar to every component.
        impl<T: Copy + $op<Output = T>> $op<T> for $name<T> {
            type Output = Self;

            #[inline(always)]
            fn $op_fn(self, rhs: T) -> Self {
                Self { $($field: $op::$op_fn(self.$field, rhs)),+ }
            }
        }

        impl<T: Copy + $op<Output = T>> $assign for $name<T> {
            #[inline(always)]
            fn $assign_fn(&mut self, rhs: Self) {
                *self = $op::$op_fn(*self, rhs);
            }
        }

        impl<T: Copy + $op<Output = T>> $assign<T> for $name<T> {
            #[inline(always)]
            fn $assign_fn(&mut self, rhs: T) {
                *self = $op::$op_fn(*self, rhs);
            }
        }
    };

    (@sum $first:expr $(, $rest:expr)*) => {
        $first $(+ $rest)*
    };
}

/// Two components, `x` and `y`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

/// Three components, `x`, `y` and `z`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// Four components, `x`, `y`, `z` and `w`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl_vec!(Vec2, 2, x, y);
impl_vec!(Vec3, 3, x, y, z);
impl_vec!(Vec4, 4, x, y, z, w);

/// Colour names for the positional components.
macro_rules! impl_colour_components {
    ($name:ident; $($colour:ident => $field:ident),+) => {
        impl<T: Copy> $name<T> {
            $(
                #[inline(always)]
                pub fn $colour(&self) -> T {
                    self.$field
                }
            )+
        }
    };
}

impl_colour_components!(Vec2; r => x, g => y);
impl_colour_components!(Vec3; r => x, g => y, b => z);
impl_colour_components!(Vec4; r => x, g => y, b => z, a => w);

impl<T: Zero + One> Vec2<T> {
    pub fn x_axis() -> Self {
        Self::new(T::one(), T::zero())
    }

    pub fn y_axis() -> Self {
        Self::new(T::zero(), T::one())
    }
}

impl<T> Vec2<T> {
    /// Appends a `z` component.
    #[inline(always)]
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3::new(self.x, self.y, z)
    }
}

impl<T: Zero + One> Vec3<T> {
    pub fn x_axis() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    pub fn y_axis() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    pub fn z_axis() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }
}

impl<T> Vec3<T> {
    /// Appends a `w` component.
    #[inline(always)]
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

impl<T: Copy> Vec3<T> {
    #[inline(always)]
    pub fn xy(&self) -> Vec2<T> {
        Vec2::new(self.x, self.y)
    }

    #[inline(always)]
    pub fn set_xy(&mut self, xy: Vec2<T>) {
        self.x = xy.x;
        self.y = xy.y;
    }

    #[inline(always)]
    pub fn rg(&self) -> Vec2<T> {
        self.xy()
    }

    #[inline(always)]
    pub fn set_rg(&mut self, rg: Vec2<T>) {
        self.set_xy(rg)
    }
}

impl<T: Zero + One> Vec4<T> {
    pub fn x_axis() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    pub fn y_axis() -> Self {
        Self::new(T::zero(), T::one(), T::zero(), T::zero())
    }

    pub fn z_axis() -> Self {
        Self::new(T::zero(), T::zero(), T::one(), T::zero())
    }

    pub fn w_axis() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }
}

impl<T: Copy> Vec4<T> {
    #[inline(always)]
    pub fn xy(&self) -> Vec2<T> {
        Vec2::new(self.x, self.y)
    }

    /// The first three components.
    #[inline(always)]
    pub fn xyz(&self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline(always)]
    pub fn set_xy(&mut self, xy: Vec2<T>) {
        self.x = xy.x;
        self.y = xy.y;
    }

    #[inline(always)]
    pub fn set_xyz(&mut self, xyz: Vec3<T>) {
        self.x = xyz.x;
        self.y = xyz.y;
        self.z = xyz.z;
    }

    #[inline(always)]
    pub fn rg(&self) -> Vec2<T> {
        self.xy()
    }

    #[inline(always)]
    pub fn rgb(&self) -> Vec3<T> {
        self.xyz()
    }

    #[inline(always)]
    pub fn set_rg(&mut self, rg: Vec2<T>) {
        self.set_xy(rg)
    }

    #[inline(always)]
    pub fn set_rgb(&mut self, rgb: Vec3<T>) {
        self.set_xyz(rgb)
    }
}

//! raymath-compatible value types.
//!
//! These mirror the raylib structs from `raylua-sys` but carry the arithmetic, so the script
//! classes work without a loaded raylib.

pub const DEG2RAD: f32 = std::f32::consts::PI / 180.0;
pub const RAD2DEG: f32 = 180.0 / std::f32::consts::PI;

pub(crate) const EPSILON: f32 = 0.000001;

macro_rules! impl_component_ops {
    ($ty:ident { $($field:ident),+ }) => {
        impl std::ops::Add for $ty {
            type Output = $ty;

            #[inline]
            fn add(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl std::ops::Sub for $ty {
            type Output = $ty;

            #[inline]
            fn sub(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl std::ops::Mul for $ty {
            type Output = $ty;

            #[inline]
            fn mul(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field * rhs.$field),+ }
            }
        }

        impl std::ops::Mul<f32> for $ty {
            type Output = $ty;

            #[inline]
            fn mul(self, rhs: f32) -> $ty {
                $ty { $($field: self.$field * rhs),+ }
            }
        }

        impl std::ops::Div for $ty {
            type Output = $ty;

            #[inline]
            fn div(self, rhs: $ty) -> $ty {
                $ty { $($field: self.$field / rhs.$field),+ }
            }
        }

        impl std::ops::Div<f32> for $ty {
            type Output = $ty;

            #[inline]
            fn div(self, rhs: f32) -> $ty {
                $ty { $($field: self.$field / rhs),+ }
            }
        }

        impl std::ops::Neg for $ty {
            type Output = $ty;

            #[inline]
            fn neg(self) -> $ty {
                $ty { $($field: -self.$field),+ }
            }
        }

        impl $ty {
            /// Vector with every component set to `v`.
            #[inline]
            pub const fn splat(v: f32) -> $ty {
                $ty { $($field: v),+ }
            }

            /// Component-wise power.
            #[inline]
            pub fn powf(self, exp: $ty) -> $ty {
                $ty { $($field: self.$field.powf(exp.$field)),+ }
            }

            /// Dot product.
            #[inline]
            pub fn dot(self, rhs: $ty) -> f32 {
                0.0 $(+ self.$field * rhs.$field)+
            }

            #[inline]
            pub fn length(self) -> f32 {
                self.dot(self).sqrt()
            }

            /// Linear interpolation towards `target`.
            #[inline]
            pub fn lerp(self, target: $ty, amount: f32) -> $ty {
                self + (target - self) * amount
            }

            #[inline]
            pub fn components(self) -> Vec<f32> {
                vec![$(self.$field),+]
            }
        }

        impl From<$ty> for ffi::$ty {
            #[inline]
            fn from(v: $ty) -> Self {
                ffi::$ty { $($field: v.$field),+ }
            }
        }

        impl From<ffi::$ty> for $ty {
            #[inline]
            fn from(v: ffi::$ty) -> Self {
                $ty { $($field: v.$field),+ }
            }
        }
    };
}


pub use matrix::Matrix;
pub use quaternion::Vector4;
pub use rectangle::{check_collision_circles, check_collision_point_triangle, Rectangle};
pub use vector::{Vector2, Vector3};

mod matrix;
mod quaternion;
mod rectangle;
mod vector;

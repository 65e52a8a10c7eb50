//! Vector types used for positions, velocities, forces and contact normals.

use crate::float::Float;
use core::ops::{Add, Neg, Sub};

/// Vector abstraction the engine is generic over.
///
/// Besides the usual arithmetic, a vector knows which axis is "up" so that
/// ground contacts can be generated without per-dimension code.
pub trait Vec:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + Default
    + core::fmt::Debug
{
    /// The scalar (float) type for this vector.
    type Scalar: Float;

    fn zero() -> Self;

    /// Unit vector pointing away from the ground plane.
    fn up() -> Self;

    /// Component along [`Vec::up`]. Negative values are below ground.
    fn height(self) -> Self::Scalar;

    fn dot(self, other: Self) -> Self::Scalar;

    fn scale(self, s: Self::Scalar) -> Self;

    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }

    /// Normalize to unit length. Returns zero vector if length is near zero.
    fn normalize(self) -> Self {
        let len = self.length();
        if len.is_near_zero(Self::Scalar::from_f32(1e-10)) {
            Self::zero()
        } else {
            self.scale(Self::Scalar::one() / len)
        }
    }

    fn distance(self, other: Self) -> Self::Scalar {
        (self - other).length()
    }
}

macro_rules! impl_ops {
    ($ty:ident { $($field:ident),+ }) => {
        impl<F: Float> Add for $ty<F> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self { $ty { $($field: self.$field + rhs.$field),+ } }
        }

        impl<F: Float> Sub for $ty<F> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self { $ty { $($field: self.$field - rhs.$field),+ } }
        }

        impl<F: Float> Neg for $ty<F> {
            type Output = Self;
            fn neg(self) -> Self { $ty { $($field: -self.$field),+ } }
        }
    };
}

/// Planar vector. `y` is up.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }
}

impl_ops!(Vec2 { x, y });

impl<F: Float> Vec for Vec2<F> {
    type Scalar = F;
    fn zero() -> Self { Vec2::new(F::zero(), F::zero()) }
    fn up() -> Self { Vec2::new(F::zero(), F::one()) }
    fn height(self) -> F { self.y }
    fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }
    fn scale(self, s: F) -> Self { Vec2::new(self.x * s, self.y * s) }
}

/// Spatial vector. `y` is up, matching [`Vec2`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }
}

impl_ops!(Vec3 { x, y, z });

impl<F: Float> Vec for Vec3<F> {
    type Scalar = F;
    fn zero() -> Self { Vec3::new(F::zero(), F::zero(), F::zero()) }
    fn up() -> Self { Vec3::new(F::zero(), F::one(), F::zero()) }
    fn height(self) -> F { self.y }
    fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    fn scale(self, s: F) -> Self { Vec3::new(self.x * s, self.y * s, self.z * s) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vec2_length() {
        let v = Vec2::new(3.0f64, 4.0);
        assert_relative_eq!(v.length(), 5.0);
    }

    #[test]
    fn normalize_zero_vector() {
        let v = Vec2::<f64>::zero();
        assert_eq!(v.normalize(), Vec2::zero());
    }

    #[test]
    fn normalize_has_unit_length() {
        let n = Vec3::new(2.0f64, -3.0, 6.0).normalize();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn up_axis_is_y() {
        assert_eq!(Vec2::<f32>::up(), Vec2::new(0.0, 1.0));
        assert_eq!(Vec3::<f32>::up(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(Vec3::new(4.0f32, -2.0, 7.0).height(), -2.0);
    }

    #[test]
    fn distance_calculation() {
        let a = Vec2::new(0.0f64, 0.0);
        let b = Vec2::new(3.0f64, 4.0);
        assert_relative_eq!(a.distance(b), 5.0);
    }
}

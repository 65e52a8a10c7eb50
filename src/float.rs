//! Floating-point abstraction so the engine runs on `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar operations needed by the integrator and the contact solver.
///
/// Implemented for `f32` and `f64` on top of `libm`, which keeps the crate
/// usable without `std`.
pub trait Float:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
    + core::fmt::Display
{
    fn zero() -> Self;
    fn one() -> Self;
    /// Largest finite value. Used as the mass of an immovable particle.
    fn max_value() -> Self;
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    /// `self` raised to the power `exp`.
    fn powf(self, exp: Self) -> Self;
    fn is_finite(self) -> bool;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;

    fn min(self, other: Self) -> Self {
        if self < other { self } else { other }
    }

    fn max(self, other: Self) -> Self {
        if self > other { self } else { other }
    }

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn max_value() -> Self { f32::MAX }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn powf(self, exp: Self) -> Self { libm::powf(self, exp) }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn from_f32(v: f32) -> Self { v }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn max_value() -> Self { f64::MAX }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn powf(self, exp: Self) -> Self { libm::pow(self, exp) }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn from_f32(v: f32) -> Self { v as f64 }
}

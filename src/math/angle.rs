//! Unit-tagged angles.
//!
//! Gear formulas are stated in degrees but evaluated with radian
//! trigonometry. Keeping the two in separate types makes every conversion
//! explicit at the call site.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// An angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Degrees(pub f64);

/// An angle in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Radians(pub f64);

impl Degrees {
    /// A full turn.
    pub const FULL_TURN: Self = Self(360.0);

    /// Returns the raw value in degrees.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }

    #[must_use]
    pub fn sin(self) -> f64 {
        self.to_radians().0.sin()
    }

    #[must_use]
    pub fn cos(self) -> f64 {
        self.to_radians().0.cos()
    }

    #[must_use]
    pub fn tan(self) -> f64 {
        self.to_radians().0.tan()
    }
}

impl Radians {
    /// Returns the raw value in radians.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }
}

impl From<Radians> for Degrees {
    fn from(r: Radians) -> Self {
        r.to_degrees()
    }
}

impl From<Degrees> for Radians {
    fn from(d: Degrees) -> Self {
        d.to_radians()
    }
}

macro_rules! impl_angle_ops {
    ($ty:ident) => {
        impl Add for $ty {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $ty {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl Neg for $ty {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl Mul<f64> for $ty {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $ty {
            type Output = Self;
            fn div(self, rhs: f64) -> Self {
                Self(self.0 / rhs)
            }
        }
    };
}

impl_angle_ops!(Degrees);
impl_angle_ops!(Radians);

//! Involute of a circle, parametrised by the radius it reaches.
//!
//! The rising branch unwinds counter-clockwise and the falling branch is its
//! mirror image. `offset` rotates the whole curve about the gear centre so
//! that its base-circle start lands at that angle.

use crate::error::{DomainError, Result};
use crate::math::{Degrees, Point2, Radians, TOLERANCE};

/// Which of the two mirror-image involute branches to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Leading flank, unwinding counter-clockwise (`+1`).
    Rising,
    /// Trailing flank, unwinding clockwise (`-1`).
    Falling,
}

impl Direction {
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Rising => 1.0,
            Self::Falling => -1.0,
        }
    }
}

/// A point on an involute, tagged with the parameters that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvoluteSample {
    pub point: Point2,
    /// Unwind angle of the generating string.
    pub t: Degrees,
    pub direction: Direction,
    pub offset: Degrees,
}

/// Returns the involute point at distance `target_radius` from the origin.
///
/// # Errors
///
/// Returns [`DomainError::NonPositive`] for a non-positive base radius and
/// [`DomainError::InsideBaseCircle`] if `target_radius` is below the base
/// circle, where the involute does not exist.
pub fn involute_at_radius(
    base_radius: f64,
    target_radius: f64,
    direction: Direction,
    offset: Degrees,
) -> Result<Point2> {
    involute_sample(base_radius, target_radius, direction, offset).map(|s| s.point)
}

/// Like [`involute_at_radius`], but keeps the parametric angle alongside the point.
///
/// # Errors
///
/// See [`involute_at_radius`].
pub fn involute_sample(
    base_radius: f64,
    target_radius: f64,
    direction: Direction,
    offset: Degrees,
) -> Result<InvoluteSample> {
    let t = unwind_angle(base_radius, target_radius)?;
    let theta = t * direction.sign() + offset;
    let unwind = (theta - offset).to_radians().value();

    let (sin, cos) = theta.to_radians().value().sin_cos();
    let point = Point2::new(
        base_radius * (cos + unwind * sin),
        base_radius * (sin - unwind * cos),
    );

    Ok(InvoluteSample {
        point,
        t,
        direction,
        offset,
    })
}

/// Solves for the unwind angle that puts the involute at `target_radius`.
fn unwind_angle(base_radius: f64, target_radius: f64) -> Result<Degrees> {
    if !base_radius.is_finite() || base_radius <= 0.0 {
        return Err(DomainError::NonPositive {
            quantity: "base radius",
            value: base_radius,
        }
        .into());
    }
    if target_radius < base_radius * (1.0 - TOLERANCE) || target_radius.is_nan() {
        return Err(DomainError::InsideBaseCircle {
            target: target_radius,
            base: base_radius,
        }
        .into());
    }

    let ratio = target_radius / base_radius;
    let arg = (ratio * ratio - 1.0).max(0.0);
    Ok(Radians(arg.sqrt()).to_degrees())
}

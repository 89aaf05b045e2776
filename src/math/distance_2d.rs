use super::{Degrees, Point2, Radians, TOLERANCE};
use crate::error::{DomainError, Result};

/// Returns the Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Returns the angle `p1 - vertex - p2` subtended at `vertex`.
///
/// The angle is reconstructed from the three side lengths with the law of
/// cosines, so it is always in `[0°, 180°]` regardless of orientation.
///
/// # Errors
///
/// Returns [`DomainError::Degenerate`] if either leg has zero length or the
/// cosine argument falls outside `[-1, 1]` by more than rounding noise.
pub fn angle_at(p1: &Point2, vertex: &Point2, p2: &Point2) -> Result<Degrees> {
    let a = distance(p1, vertex);
    let b = distance(vertex, p2);
    let c = distance(p2, p1);

    if a < TOLERANCE || b < TOLERANCE {
        return Err(DomainError::Degenerate(format!(
            "triangle leg has zero length (a = {a}, b = {b})"
        ))
        .into());
    }

    let cos = (a * a + b * b - c * c) / (2.0 * a * b);
    if !(-1.0 - TOLERANCE..=1.0 + TOLERANCE).contains(&cos) {
        return Err(DomainError::Degenerate(format!(
            "law of cosines argument {cos} is outside [-1, 1]"
        ))
        .into());
    }

    Ok(Radians(cos.clamp(-1.0, 1.0).acos()).to_degrees())
}

/// Returns the point at `angle` on the origin-centred circle of `radius`.
#[must_use]
pub fn polar(radius: f64, angle: Degrees) -> Point2 {
    Point2::new(radius * angle.cos(), radius * angle.sin())
}

/// Rotates every point counter-clockwise about the origin.
#[must_use]
pub fn rotate_points(points: &[Point2], angle: Radians) -> Vec<Point2> {
    let (s, c) = angle.value().sin_cos();
    points
        .iter()
        .map(|p| Point2::new(p.x * c - p.y * s, p.x * s + p.y * c))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    const TOL: f64 = 1e-10;

    #[test]
    fn distance_three_four_five() {
        let d = distance(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0));
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn right_angle_at_origin() {
        let a = angle_at(
            &Point2::new(2.0, 0.0),
            &Point2::origin(),
            &Point2::new(0.0, 3.0),
        )
        .unwrap();
        assert_relative_eq!(a.value(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn angle_is_orientation_independent() {
        let p = Point2::new(1.0, 1.0);
        let q = Point2::new(1.0, -1.0);
        let a = angle_at(&p, &Point2::origin(), &q).unwrap();
        let b = angle_at(&q, &Point2::origin(), &p).unwrap();
        assert_relative_eq!(a.value(), 90.0, epsilon = 1e-9);
        assert_relative_eq!(a.value(), b.value(), epsilon = 1e-12);
    }

    #[test]
    fn coincident_points_give_zero_angle() {
        let p = Point2::new(4.0, 0.5);
        let a = angle_at(&p, &Point2::origin(), &p).unwrap();
        assert!(a.value().abs() < 1e-4, "a={a:?}");
    }

    #[test]
    fn zero_leg_is_degenerate() {
        let r = angle_at(&Point2::origin(), &Point2::origin(), &Point2::new(1.0, 0.0));
        assert!(r.is_err());
    }

    #[test]
    fn polar_on_axes() {
        let p = polar(2.0, Degrees(90.0));
        assert!(p.x.abs() < TOL && (p.y - 2.0).abs() < TOL, "p={p:?}");
    }

    #[test]
    fn rotate_quarter_turn() {
        let out = rotate_points(&[Point2::new(1.0, 0.0), Point2::new(0.0, 2.0)], Radians(FRAC_PI_2));
        assert!((out[0] - Point2::new(0.0, 1.0)).norm() < TOL);
        assert!((out[1] - Point2::new(-2.0, 0.0)).norm() < TOL);
    }
}

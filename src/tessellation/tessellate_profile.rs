use crate::error::{Result, TessellationError};
use crate::math::{Point2, TOLERANCE};
use crate::profile::{PathCommand, Profile};

use super::{Polyline, TessellationParams};

/// Flattens a closed [`Profile`] into a closed polyline.
///
/// Splines are evaluated as uniform Catmull-Rom curves through their points,
/// with the end points doubled so the curve passes through every sample.
/// Consecutive duplicate vertices are dropped and the closing vertex is not
/// repeated.
#[derive(Debug)]
pub struct TessellateProfile<'a> {
    profile: &'a Profile,
    params: TessellationParams,
}

impl<'a> TessellateProfile<'a> {
    /// Creates a new `TessellateProfile` operation.
    #[must_use]
    pub fn new(profile: &'a Profile, params: TessellationParams) -> Self {
        Self { profile, params }
    }

    /// Executes the tessellation, returning a closed polyline.
    ///
    /// # Errors
    ///
    /// Returns [`TessellationError::InvalidParameters`] if `segments_per_span` is zero.
    pub fn execute(&self) -> Result<Polyline> {
        let segments = self.params.segments_per_span;
        if segments == 0 {
            return Err(TessellationError::InvalidParameters(
                "segments_per_span must be at least 1".to_owned(),
            )
            .into());
        }

        let mut points: Vec<Point2> = Vec::new();
        for command in self.profile.commands() {
            match command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => push_distinct(&mut points, *p),
                PathCommand::SplineThrough {
                    points: knots,
                    include_current,
                } => {
                    let mut through = Vec::with_capacity(knots.len() + 1);
                    if *include_current {
                        if let Some(current) = points.last() {
                            through.push(*current);
                        }
                    }
                    through.extend_from_slice(knots);
                    for p in catmull_rom(&through, segments) {
                        push_distinct(&mut points, p);
                    }
                }
                PathCommand::Close => {}
            }
        }

        if points.len() > 1 {
            if let (Some(first), Some(last)) = (points.first(), points.last()) {
                if (*last - *first).norm() < TOLERANCE {
                    points.pop();
                }
            }
        }

        Ok(Polyline {
            points,
            closed: true,
        })
    }
}

fn push_distinct(points: &mut Vec<Point2>, p: Point2) {
    match points.last() {
        Some(last) if (p - *last).norm() < TOLERANCE => {}
        _ => points.push(p),
    }
}

/// Samples a uniform Catmull-Rom spline through `knots`, first knot included.
fn catmull_rom(knots: &[Point2], segments: u32) -> Vec<Point2> {
    let Some(&first) = knots.first() else {
        return Vec::new();
    };
    let n = knots.len();
    let mut out = Vec::with_capacity((n - 1) * segments as usize + 1);
    out.push(first);

    for i in 0..n - 1 {
        let p0 = knots[i.saturating_sub(1)];
        let p1 = knots[i];
        let p2 = knots[i + 1];
        let p3 = knots[(i + 2).min(n - 1)];
        for k in 1..=segments {
            let t = f64::from(k) / f64::from(segments);
            out.push(catmull_rom_point(&p0, &p1, &p2, &p3, t));
        }
    }
    out
}

fn catmull_rom_point(p0: &Point2, p1: &Point2, p2: &Point2, p3: &Point2, t: f64) -> Point2 {
    let (a, b, c, d) = (p0.coords, p1.coords, p2.coords, p3.coords);
    let t2 = t * t;
    let t3 = t2 * t;
    let v = (b * 2.0
        + (c - a) * t
        + (a * 2.0 - b * 5.0 + c * 4.0 - d) * t2
        + (-a + b * 3.0 - c * 3.0 + d) * t3)
        * 0.5;
    Point2::from(v)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GearError;
    use crate::gear::GearSpec;
    use crate::math::polygon_2d::{is_simple, signed_area_2d};
    use crate::profile::{GearProfile, ProfileBuilder};

    #[test]
    fn spline_passes_through_knots() {
        let knots = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 1.0),
        ];
        let out = catmull_rom(&knots, 4);
        assert_eq!(out.len(), 13);
        for (i, k) in knots.iter().enumerate() {
            assert!((out[i * 4] - *k).norm() < 1e-12, "knot {i}");
        }
    }

    #[test]
    fn collinear_spline_stays_on_line() {
        let knots = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(2.0, 0.0)];
        for p in catmull_rom(&knots, 5) {
            assert!(p.y.abs() < 1e-12);
            assert!((-1e-12..=2.0 + 1e-12).contains(&p.x));
        }
    }

    #[test]
    fn square_with_lines_only() {
        let mut b = ProfileBuilder::new();
        b.move_to(Point2::new(0.0, 0.0)).unwrap();
        b.line_to(Point2::new(1.0, 0.0)).unwrap();
        b.line_to(Point2::new(1.0, 1.0)).unwrap();
        b.line_to(Point2::new(0.0, 1.0)).unwrap();
        b.line_to(Point2::new(0.0, 0.0)).unwrap();
        let profile = b.close().unwrap();

        let poly = TessellateProfile::new(&profile, TessellationParams::default())
            .execute()
            .unwrap();
        assert_eq!(poly.points.len(), 4);
        assert!(poly.closed);
        assert!((signed_area_2d(&poly.points) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn reference_gear_is_simple_and_ccw() {
        let profile = GearProfile::new(GearSpec::default()).execute().unwrap();
        let poly = TessellateProfile::new(&profile, TessellationParams::default())
            .execute()
            .unwrap();
        assert!(is_simple(&poly.points));
        assert!(signed_area_2d(&poly.points) > 0.0);
    }

    #[test]
    fn zero_segments_rejected() {
        let profile = GearProfile::new(GearSpec::default()).execute().unwrap();
        let r = TessellateProfile::new(
            &profile,
            TessellationParams {
                segments_per_span: 0,
            },
        )
        .execute();
        assert!(matches!(r, Err(GearError::Tessellation(_))));
    }
}

use super::{Point2, TOLERANCE};

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
/// Parallel segments report no intersection.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = *a1 - *a0;
    let db = *b1 - *b0;

    let cross = da.x * db.y - da.y * db.x;
    if cross.abs() < TOLERANCE {
        return None;
    }

    let dx = b0.x - a0.x;
    let dy = b0.y - a0.y;
    let t = (dx * db.y - dy * db.x) / cross;
    let u = (dx * da.y - dy * da.x) / cross;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t_clamped = t.clamp(0.0, 1.0);
        Some((*a0 + da * t_clamped, t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Returns `true` if two segments lie on one line and share more than a
/// single point.
///
/// [`segment_segment_intersect_2d`] reports nothing for parallel segments;
/// this covers the collinear case it skips.
#[must_use]
pub fn collinear_overlap_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let da = *a1 - *a0;
    let len_sq = da.norm_squared();
    if len_sq < TOLERANCE {
        return false;
    }

    let db = *b1 - *b0;
    let to_b0 = *b0 - *a0;
    let to_b1 = *b1 - *a0;
    let cross_dir = da.x * db.y - da.y * db.x;
    let cross_off = da.x * to_b0.y - da.y * to_b0.x;
    if cross_dir.abs() >= TOLERANCE || cross_off.abs() >= TOLERANCE {
        return false;
    }

    // Parameters of b's endpoints along a, overlapped with a's own [0, 1].
    let s0 = to_b0.dot(&da) / len_sq;
    let s1 = to_b1.dot(&da) / len_sq;
    s0.max(s1).min(1.0) - s0.min(s1).max(0.0) > TOLERANCE
}

use super::intersect_2d::{collinear_overlap_2d, segment_segment_intersect_2d};
use super::Point2;

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns `true` if no two non-adjacent edges of the closed polygon meet
/// and no edge folds back over another.
///
/// Adjacent edges may only share their common vertex; collinear overlap
/// between any two edges counts as an intersection. Brute force over all
/// edge pairs; intended for validating generated outlines, not for large
/// meshes.
#[must_use]
pub fn is_simple(points: &[Point2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    for i in 0..n {
        let a0 = &points[i];
        let a1 = &points[(i + 1) % n];
        for j in (i + 1)..n {
            let b0 = &points[j];
            let b1 = &points[(j + 1) % n];
            if collinear_overlap_2d(a0, a1, b0, b1) {
                return false;
            }
            // Neighbours share a vertex; the first and last edges share the closing one.
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            if !adjacent && segment_segment_intersect_2d(a0, a1, b0, b1).is_some() {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        assert!((signed_area_2d(&square()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = square();
        pts.reverse();
        assert!((signed_area_2d(&pts) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&square()[..2]).abs() < 1e-12);
    }

    #[test]
    fn square_is_simple() {
        assert!(is_simple(&square()));
    }

    #[test]
    fn folded_back_edge_is_not_simple() {
        // Second edge retraces half of the first.
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 0.0),
        ];
        assert!(!is_simple(&pts));
    }

    #[test]
    fn straight_run_through_vertex_is_simple() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        assert!(is_simple(&pts));
    }

    #[test]
    fn bow_tie_is_not_simple() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        assert!(!is_simple(&pts));
    }
}

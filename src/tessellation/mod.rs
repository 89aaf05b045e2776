mod tessellate_profile;

pub use tessellate_profile::TessellateProfile;

use crate::math::Point2;

/// Parameters controlling tessellation quality.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Straight sub-segments emitted for each span between two spline points.
    pub segments_per_span: u32,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            segments_per_span: 8,
        }
    }
}

/// A polyline approximation of an outline.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
    /// Whether the last vertex connects back to the first.
    pub closed: bool,
}

//! Rotational lead for helical and herringbone sweeps.
//!
//! The sweep itself happens outside this crate; these helpers only say how
//! far the cross-section turns.

use std::f64::consts::PI;

use crate::math::Degrees;

use super::circles::pitch_circle_diameter;

/// Helix angle used when a herringbone table is requested without one.
pub const HERRINGBONE_DEFAULT_HELIX: Degrees = Degrees(20.0);

/// Angle the profile must turn over `height` of axial travel to follow a
/// helix of `helix_angle` at the pitch circle.
///
/// Positive helix angles turn the profile clockwise (negative degrees).
#[must_use]
pub fn helix_track(height: f64, tooth_count: u32, module: f64, helix_angle: Degrees) -> Degrees {
    let travel = (-helix_angle).tan() * height;
    let circumference = pitch_circle_diameter(module, tooth_count) * PI;
    let degrees_per_unit = Degrees::FULL_TURN / circumference;

    degrees_per_unit * travel
}

/// Helix angles of a nine-station herringbone sweep: one lead for the first
/// half, straight at the apex, the opposite lead for the second half.
#[must_use]
pub fn herringbone(helix_angle: Degrees) -> [Degrees; 9] {
    let h = helix_angle;
    let zero = Degrees(0.0);
    [-h, -h, -h, -h, zero, h, h, h, h]
}

use crate::error::Result;
use crate::math::distance_2d::angle_at;
use crate::math::{Degrees, Point2};

use super::circles::angle_between_teeth;
use super::involute::{involute_at_radius, Direction};

/// Angle one tooth subtends at the base circle, backlash included.
///
/// The two involute branches through the base-circle origin meet the pitch
/// circle a little apart; that included angle plus half the tooth spacing,
/// minus the backlash, is the base-circle tooth width.
///
/// # Errors
///
/// Returns a domain error if the pitch circle lies inside the base circle or
/// the law-of-cosines triangle is degenerate.
pub fn tooth_width_angle(
    base_radius: f64,
    pitch_radius: f64,
    tooth_count: u32,
    backlash: Degrees,
) -> Result<Degrees> {
    let p1 = involute_at_radius(base_radius, pitch_radius, Direction::Falling, Degrees(0.0))?;
    let p2 = involute_at_radius(base_radius, pitch_radius, Direction::Rising, Degrees(0.0))?;
    let included = angle_at(&p1, &Point2::origin(), &p2)?;

    Ok(included + angle_between_teeth(tooth_count) / 2.0 - backlash)
}

/// Half of [`tooth_width_angle`], applied as `±` around each tooth centreline.
///
/// # Errors
///
/// See [`tooth_width_angle`].
pub fn tooth_half_width_angle(
    base_radius: f64,
    pitch_radius: f64,
    tooth_count: u32,
    backlash: Degrees,
) -> Result<Degrees> {
    tooth_width_angle(base_radius, pitch_radius, tooth_count, backlash).map(|w| w / 2.0)
}

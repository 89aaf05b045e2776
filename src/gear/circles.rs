//! Reference circles of an involute gear.
//!
//! Every radius-valued quantity here is a true radius measured from the gear
//! centre. Only [`pitch_circle_diameter`] returns a diameter.

use std::f64::consts::PI;

use crate::math::Degrees;

use super::spec::GearSpec;

/// Root depth factor: the root sits 25% deeper than the mating tooth tip.
pub const DEDENDUM_FACTOR: f64 = 1.25;

/// Diameter of the circle at which a gear meets its neighbour.
///
/// Centre distance of two meshing gears is half the sum of their pitch diameters.
#[must_use]
pub fn pitch_circle_diameter(module: f64, tooth_count: u32) -> f64 {
    module * f64::from(tooth_count)
}

#[must_use]
pub fn pitch_circle_radius(module: f64, tooth_count: u32) -> f64 {
    pitch_circle_diameter(module, tooth_count) / 2.0
}

/// Radius of the tooth tips.
#[must_use]
pub fn addendum_radius(pitch_radius: f64, module: f64, addendum_offset: f64) -> f64 {
    pitch_radius + module + addendum_offset
}

/// Radial depth from the pitch circle down to the tooth root.
#[must_use]
pub fn dedendum(module: f64, dedendum_offset: f64) -> f64 {
    DEDENDUM_FACTOR * module + dedendum_offset
}

/// Radius of the circle through the bottom of every tooth gap.
#[must_use]
pub fn root_radius(pitch_radius: f64, dedendum: f64) -> f64 {
    pitch_radius - dedendum
}

/// Radius of the circle the involute flanks unwind from.
#[must_use]
pub fn base_radius(pitch_radius: f64, pressure_angle: Degrees) -> f64 {
    pitch_radius * pressure_angle.cos()
}

/// Lowest radius a mating tooth tip should reach.
#[must_use]
pub fn clearance_radius(pitch_radius: f64, module: f64) -> f64 {
    pitch_radius - module
}

/// Total tooth height.
#[must_use]
pub fn whole_depth(module: f64, dedendum: f64) -> f64 {
    module + dedendum
}

#[must_use]
pub fn angle_between_teeth(tooth_count: u32) -> Degrees {
    Degrees::FULL_TURN / f64::from(tooth_count)
}

/// Arc length between the same point on neighbouring teeth at the pitch circle.
#[must_use]
pub fn circular_pitch(module: f64) -> f64 {
    module * PI
}

/// Arc length per tooth on a circle of the given diameter.
#[must_use]
pub fn circumference_per_tooth(diameter: f64, tooth_count: u32) -> f64 {
    PI * diameter / f64::from(tooth_count)
}

/// Converts linear backlash at the pitch circle into the angle it subtends.
#[must_use]
pub fn backlash_angle(backlash: f64, pitch_radius: f64) -> Degrees {
    Degrees::FULL_TURN * (backlash / (2.0 * PI * pitch_radius))
}

/// All reference circles and spacings of one gear, computed once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedCircles {
    pub pitch_radius: f64,
    pub addendum_radius: f64,
    pub dedendum: f64,
    pub root_radius: f64,
    pub base_radius: f64,
    pub clearance_radius: f64,
    pub whole_depth: f64,
    pub circular_pitch: f64,
    pub angle_between_teeth: Degrees,
    pub backlash_angle: Degrees,
}

impl DerivedCircles {
    /// Derives every circle from the gear parameters.
    ///
    /// No validation happens here; pass a spec that has passed
    /// [`GearSpec::validate`].
    #[must_use]
    pub fn new(spec: &GearSpec) -> Self {
        let pitch_radius = pitch_circle_radius(spec.module, spec.tooth_count);
        let dedendum = dedendum(spec.module, spec.dedendum_offset);
        Self {
            pitch_radius,
            addendum_radius: addendum_radius(pitch_radius, spec.module, spec.addendum_offset),
            dedendum,
            root_radius: root_radius(pitch_radius, dedendum),
            base_radius: base_radius(pitch_radius, spec.pressure_angle),
            clearance_radius: clearance_radius(pitch_radius, spec.module),
            whole_depth: whole_depth(spec.module, dedendum),
            circular_pitch: circular_pitch(spec.module),
            angle_between_teeth: angle_between_teeth(spec.tooth_count),
            backlash_angle: backlash_angle(spec.backlash, pitch_radius),
        }
    }

    /// Radius at which the flanks start: the involute cannot begin inside
    /// its base circle, and the tooth cannot begin below the root.
    #[must_use]
    pub fn involute_start_radius(&self) -> f64 {
        self.base_radius.max(self.root_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reference_gear_circles() {
        let c = DerivedCircles::new(&GearSpec::default());
        assert_relative_eq!(c.pitch_radius, 5.0);
        assert_relative_eq!(c.addendum_radius, 6.0);
        assert_relative_eq!(c.dedendum, 1.25);
        assert_relative_eq!(c.root_radius, 3.75);
        assert_relative_eq!(c.base_radius, 4.698_463_103_929_542, epsilon = 1e-12);
        assert_relative_eq!(c.clearance_radius, 4.0);
        assert_relative_eq!(c.whole_depth, 2.25);
        assert_relative_eq!(c.circular_pitch, PI);
        assert_relative_eq!(c.angle_between_teeth.value(), 36.0);
        assert_relative_eq!(c.involute_start_radius(), c.base_radius);
    }

    #[test]
    fn backlash_angle_of_reference_gear() {
        // 0.1 of a 10π circumference.
        let c = DerivedCircles::new(&GearSpec::default());
        assert_relative_eq!(c.backlash_angle.value(), 36.0 / PI, epsilon = 1e-12);
    }

    #[test]
    fn module_two_twenty_teeth() {
        assert_relative_eq!(pitch_circle_radius(2.0, 20), 20.0);
        assert_relative_eq!(pitch_circle_diameter(2.0, 20), 40.0);
    }

    #[test]
    fn doubling_module_scales_radii_only() {
        let small = DerivedCircles::new(&GearSpec::default().with_tooth_count(20));
        let large = DerivedCircles::new(&GearSpec::default().with_tooth_count(20).with_module(2.0));

        for (a, b) in [
            (small.pitch_radius, large.pitch_radius),
            (small.addendum_radius, large.addendum_radius),
            (small.dedendum, large.dedendum),
            (small.root_radius, large.root_radius),
            (small.base_radius, large.base_radius),
            (small.clearance_radius, large.clearance_radius),
            (small.whole_depth, large.whole_depth),
        ] {
            assert_relative_eq!(2.0 * a, b, epsilon = 1e-12);
        }
        assert_eq!(small.angle_between_teeth, large.angle_between_teeth);
        assert_relative_eq!(
            small.base_radius / small.pitch_radius,
            large.base_radius / large.pitch_radius,
            epsilon = 1e-15
        );
    }

    #[test]
    fn many_teeth_start_on_root_circle() {
        // Above ~42 teeth at 20° the root circle clears the base circle.
        let c = DerivedCircles::new(&GearSpec::default().with_tooth_count(60));
        assert!(c.root_radius > c.base_radius);
        assert_relative_eq!(c.involute_start_radius(), c.root_radius);
    }

    #[test]
    fn offsets_shift_tip_and_root() {
        let c = DerivedCircles::new(
            &GearSpec::default()
                .with_addendum_offset(0.2)
                .with_dedendum_offset(-0.25),
        );
        assert_relative_eq!(c.addendum_radius, 6.2, epsilon = 1e-12);
        assert_relative_eq!(c.dedendum, 1.0, epsilon = 1e-12);
        assert_relative_eq!(c.root_radius, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn circumference_per_tooth_matches_circular_pitch_at_pitch_circle() {
        let d = pitch_circle_diameter(1.5, 24);
        assert_relative_eq!(circumference_per_tooth(d, 24), circular_pitch(1.5), epsilon = 1e-12);
    }
}

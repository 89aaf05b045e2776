use tracing::{debug, trace};

use crate::error::{DomainError, Result};
use crate::gear::{involute_at_radius, tooth_half_width_angle, DerivedCircles, Direction, GearSpec};
use crate::math::distance_2d::polar;
use crate::math::{Degrees, Point2};

use super::path::{Profile, ProfileBuilder};

/// Builds the closed outline of a whole involute gear.
///
/// Each tooth contributes a root segment, a rising involute flank, a tip
/// crossing and a falling flank, in tooth order around the gear.
///
/// The outline is not checked for self-intersection. Teeth wider than half
/// their spacing (many teeth at a high pressure angle) overlap at the root,
/// and heavy backlash on very small gears crosses the flanks below the tip.
pub struct GearProfile {
    spec: GearSpec,
}

impl GearProfile {
    /// Creates a new `GearProfile` operation.
    #[must_use]
    pub fn new(spec: GearSpec) -> Self {
        Self { spec }
    }

    /// Executes the operation, returning the closed profile.
    ///
    /// # Errors
    ///
    /// Returns a spec error for invalid parameters and a domain error if any
    /// tooth cannot be evaluated. No partial profile is returned.
    pub fn execute(&self) -> Result<Profile> {
        self.spec.validate()?;

        let circles = DerivedCircles::new(&self.spec);
        if circles.root_radius <= 0.0 {
            return Err(DomainError::NonPositive {
                quantity: "root radius",
                value: circles.root_radius,
            }
            .into());
        }
        let half_width = tooth_half_width_angle(
            circles.base_radius,
            circles.pitch_radius,
            self.spec.tooth_count,
            circles.backlash_angle,
        )?;

        debug!(
            module = self.spec.module,
            teeth = self.spec.tooth_count,
            pitch_radius = circles.pitch_radius,
            base_radius = circles.base_radius,
            root_radius = circles.root_radius,
            addendum_radius = circles.addendum_radius,
            half_width = half_width.value(),
            "building gear profile"
        );
        if circles.root_radius < circles.base_radius {
            debug!("root circle inside base circle, flanks start at the base circle");
        }

        let flank = Flank::new(&circles, self.spec.profile_resolution);
        let mut builder = ProfileBuilder::with_capacity(self.spec.tooth_count as usize * 6 + 2);

        builder.move_to(polar(circles.root_radius, -half_width))?;

        for i in 0..self.spec.tooth_count {
            let a = circles.angle_between_teeth * f64::from(i);
            let leading = -half_width + a;
            let trailing = half_width + a;
            trace!(tooth = i, centre = a.value(), "tooth");

            if i > 0 {
                builder.line_to(polar(circles.root_radius, leading))?;
            }

            builder.line_to(flank.point(flank.start, Direction::Rising, leading)?)?;
            builder.spline_through(flank.rising(leading)?, false)?;

            builder.line_to(flank.point(flank.tip, Direction::Falling, trailing)?)?;
            builder.spline_through(flank.falling(trailing)?, true)?;

            builder.line_to(polar(circles.root_radius, trailing))?;
        }

        let profile = builder.close()?;
        debug!(commands = profile.len(), "gear profile closed");
        Ok(profile)
    }
}

/// Radial sampling of one involute flank between its start and the tip.
struct Flank {
    base: f64,
    start: f64,
    tip: f64,
    step: f64,
    resolution: u32,
}

impl Flank {
    fn new(circles: &DerivedCircles, resolution: u32) -> Self {
        let start = circles.involute_start_radius();
        let tip = circles.addendum_radius;
        Self {
            base: circles.base_radius,
            start,
            tip,
            step: (tip - start) / f64::from(resolution),
            resolution,
        }
    }

    fn point(&self, radius: f64, direction: Direction, offset: Degrees) -> Result<Point2> {
        involute_at_radius(self.base, radius, direction, offset)
    }

    /// `resolution + 1` points from the start radius up to the tip.
    fn rising(&self, offset: Degrees) -> Result<Vec<Point2>> {
        (0..=self.resolution)
            .map(|j| self.point(self.start + self.step * f64::from(j), Direction::Rising, offset))
            .collect()
    }

    /// `resolution` points from just below the tip down to the start radius.
    fn falling(&self, offset: Degrees) -> Result<Vec<Point2>> {
        (1..=self.resolution)
            .map(|j| self.point(self.tip - self.step * f64::from(j), Direction::Falling, offset))
            .collect()
    }
}

use crate::error::{Result, SpecError};
use crate::math::Degrees;

/// Manufacturing parameters of a single involute gear.
///
/// Linear quantities share one unit (usually millimetres); angles are in
/// degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GearSpec {
    /// Pitch diameter divided by tooth count.
    pub module: f64,
    /// Number of teeth, at least 3.
    pub tooth_count: u32,
    /// Pressure angle, typically 14.5 to 25 degrees.
    pub pressure_angle: Degrees,
    /// Spline sample count per flank.
    pub profile_resolution: u32,
    /// Linear clearance left between mating teeth, measured at the pitch circle.
    pub backlash: f64,
    /// Added to the addendum radius. May be negative.
    pub addendum_offset: f64,
    /// Added to the dedendum. May be negative.
    pub dedendum_offset: f64,
}

impl Default for GearSpec {
    fn default() -> Self {
        Self {
            module: 1.0,
            tooth_count: 10,
            pressure_angle: Degrees(20.0),
            profile_resolution: 4,
            backlash: 0.1,
            addendum_offset: 0.0,
            dedendum_offset: 0.0,
        }
    }
}

impl GearSpec {
    /// Smallest tooth count accepted.
    pub const MIN_TOOTH_COUNT: u32 = 3;

    #[must_use]
    pub fn with_module(mut self, module: f64) -> Self {
        self.module = module;
        self
    }

    #[must_use]
    pub fn with_tooth_count(mut self, tooth_count: u32) -> Self {
        self.tooth_count = tooth_count;
        self
    }

    #[must_use]
    pub fn with_pressure_angle(mut self, pressure_angle: Degrees) -> Self {
        self.pressure_angle = pressure_angle;
        self
    }

    #[must_use]
    pub fn with_profile_resolution(mut self, profile_resolution: u32) -> Self {
        self.profile_resolution = profile_resolution;
        self
    }

    #[must_use]
    pub fn with_backlash(mut self, backlash: f64) -> Self {
        self.backlash = backlash;
        self
    }

    #[must_use]
    pub fn with_addendum_offset(mut self, addendum_offset: f64) -> Self {
        self.addendum_offset = addendum_offset;
        self
    }

    #[must_use]
    pub fn with_dedendum_offset(mut self, dedendum_offset: f64) -> Self {
        self.dedendum_offset = dedendum_offset;
        self
    }

    /// Checks the invariants every downstream computation relies on.
    ///
    /// Combinations of in-range values can still be degenerate (a large
    /// dedendum offset pushes the root circle through the centre); those are
    /// rejected as domain errors by [`crate::GearProfile::execute`].
    ///
    /// # Errors
    ///
    /// Returns [`SpecError`] if a parameter is non-finite or below its minimum.
    pub fn validate(&self) -> Result<()> {
        let reals = [
            ("module", self.module),
            ("pressure_angle", self.pressure_angle.value()),
            ("backlash", self.backlash),
            ("addendum_offset", self.addendum_offset),
            ("dedendum_offset", self.dedendum_offset),
        ];
        for (parameter, value) in reals {
            if !value.is_finite() {
                return Err(SpecError::NotFinite { parameter }.into());
            }
        }

        if self.module <= 0.0 {
            return Err(out_of_range("module", self.module, 0.0, f64::INFINITY));
        }
        let pressure_angle = self.pressure_angle.value();
        if pressure_angle <= 0.0 || pressure_angle >= 90.0 {
            return Err(out_of_range("pressure_angle", pressure_angle, 0.0, 90.0));
        }
        if self.tooth_count < Self::MIN_TOOTH_COUNT {
            return Err(out_of_range(
                "tooth_count",
                f64::from(self.tooth_count),
                f64::from(Self::MIN_TOOTH_COUNT),
                f64::from(u32::MAX),
            ));
        }
        if self.profile_resolution < 1 {
            return Err(out_of_range(
                "profile_resolution",
                f64::from(self.profile_resolution),
                1.0,
                f64::from(u32::MAX),
            ));
        }
        if self.backlash < 0.0 {
            return Err(out_of_range("backlash", self.backlash, 0.0, f64::INFINITY));
        }
        Ok(())
    }
}

fn out_of_range(
    parameter: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> crate::error::GearError {
    SpecError::ParameterOutOfRange {
        parameter,
        value,
        min,
        max,
    }
    .into()
}

//! Involute spur and helical gear profiles.
//!
//! [`GearProfile`] turns a [`GearSpec`] into a closed [`Profile`] of line and
//! spline commands, ready to be handed to a wire builder for extrusion or
//! sweeping. [`gear::helix_track`] and [`gear::herringbone`] supply the
//! rotation a helical or herringbone sweep needs.

pub mod error;
pub mod gear;
pub mod math;
pub mod profile;
pub mod tessellation;

pub use error::{GearError, Result};
pub use gear::{DerivedCircles, GearSpec};
pub use profile::{GearProfile, PathCommand, Profile};

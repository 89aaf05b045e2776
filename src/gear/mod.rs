pub mod circles;
pub mod helix;
pub mod involute;
pub mod spec;
pub mod tooth;

pub use circles::DerivedCircles;
pub use helix::{helix_track, herringbone};
pub use involute::{involute_at_radius, involute_sample, Direction, InvoluteSample};
pub use spec::GearSpec;
pub use tooth::{tooth_half_width_angle, tooth_width_angle};

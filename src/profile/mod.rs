mod gear_profile;
mod path;

pub use gear_profile::GearProfile;
pub use path::{BuilderState, PathCommand, Profile, ProfileBuilder};

pub mod angle;
pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

pub use angle::{Degrees, Radians};

/// 2D point type in the gear's local plane.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Default tolerance for coincidence tests during the sweep.
pub const DEFAULT_EPSILON: f64 = f64::EPSILON;

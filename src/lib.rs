pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{Result, SweepclipError};
pub use geometry::{BoundingBox, Contour, Polygon};
pub use operations::clip::{Clip, ClipOp, ClipOptions, Intersect, Subtract, Union, Xor};

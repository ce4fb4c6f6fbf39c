pub mod bbox;
pub mod polygon;

pub use bbox::BoundingBox;
pub use polygon::{Contour, Polygon};

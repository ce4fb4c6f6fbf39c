mod area;
mod bounds;
mod contains_point;

pub use area::Area;
pub use bounds::Bounds;
pub use contains_point::ContainsPoint;

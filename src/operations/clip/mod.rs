//! Boolean clipping of polygons by a bottom-to-top scanbeam sweep.
//!
//! Both operands are decomposed into bounds (monotone rising edge chains)
//! that start at local minima. The sweep visits every vertex height in
//! order, classifies each boundary crossing and each edge intersection by
//! the result membership of the four quadrants around it, and grows output
//! contours from both ends until they close.

mod active_edges;
mod boundary;
mod contributing;
mod edge_table;
mod engine;
mod intersect_op;
mod intersection;
mod options;
mod output;
mod scanbeam;
mod select;
mod subtract;
mod union;
mod vertex_type;
mod xor;

pub use engine::{clip_execute, Clip};
pub use intersect_op::Intersect;
pub use options::ClipOptions;
pub use select::{ClipOp, Operand, PerOperand};
pub use subtract::Subtract;
pub use union::Union;
pub use vertex_type::{Quadrants, VertexType};
pub use xor::Xor;

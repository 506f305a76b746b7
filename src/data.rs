pub mod graph;
mod triangle;

pub use graph::Graph;
pub use triangle::{TriangleId, TriangleNode, triangles_overlap};

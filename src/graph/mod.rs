//! Frequency graph: antennas as vertices, same-frequency adjacency,
//! depth-first and breadth-first reachability.

mod model;
mod traversal;

pub use model::{FieldGraph, Vertex};
pub use traversal::{breadth_first, depth_first};

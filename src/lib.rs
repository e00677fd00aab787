//! # antgrid
//!
//! A bounded 10×10 grid populated by frequency-labeled antennas, with
//! two derived views:
//!
//! - **Harmonic effects**: every pair of same-frequency antennas
//!   projects two effect points on the line through the pair, mirrored
//!   at the pair's own spacing beyond each endpoint.
//! - **Frequency graph**: antennas promoted to vertices, linked by
//!   same-frequency edges, traversable depth-first and breadth-first.
//!
//! ## Quick start
//! ```
//! use antgrid::{derive_effects, AntennaRegistry, Coord};
//!
//! let mut registry = AntennaRegistry::new();
//! registry.insert('A', 2, 2)?;
//! registry.insert('A', 4, 2)?;
//!
//! let effects = derive_effects(registry.antennas());
//! assert!(effects.contains(Coord::new(0, 2)));
//! assert!(effects.contains(Coord::new(6, 2)));
//! # Ok::<(), antgrid::Error>(())
//! ```

// === Core modules ===
pub mod core;
pub mod graph;
pub mod render;
pub mod storage;

// === Re-exports for convenience ===

pub use crate::core::{derive_effects, Antenna, AntennaRegistry, Coord, EffectSet};
pub use crate::graph::{breadth_first, depth_first, FieldGraph, Vertex};
pub use crate::render::Grid;
pub use crate::storage::PointRecord;

// === Error types ===

/// Crate-level error type
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Coordinate outside the bounded grid
    #[error("coordinate ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i32, y: i32 },

    /// Coordinate already occupied
    #[error("coordinate ({x}, {y}) is already occupied")]
    Duplicate { x: i32, y: i32 },

    /// Id, coordinate or frequency combination absent
    #[error("no matching entry")]
    NotFound,

    /// Mutation attempted on an empty collection
    #[error("collection is empty")]
    Empty,

    /// Storage-layer IO failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Storage-layer encoding or decoding failure
    #[error("codec error: {0}")]
    Codec(String),
}

pub type Result<T> = std::result::Result<T, Error>;

// === Constants ===

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Grid side length. Every stored coordinate satisfies
/// `0 <= x < GRID_SIDE` and `0 <= y < GRID_SIDE`.
pub const GRID_SIDE: i32 = 10;

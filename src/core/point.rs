//! Grid coordinates and antenna payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::GRID_SIDE;

/// A position on (or beyond) the grid.
///
/// Signed on purpose: derived harmonic points may fall outside the
/// bounded area and are only filtered at render or persist time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether the coordinate lies inside the bounded grid.
    #[inline]
    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < GRID_SIDE && self.y >= 0 && self.y < GRID_SIDE
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A labeled grid position: one antenna broadcasting on `freq`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Antenna {
    pub freq: char,
    pub pos: Coord,
}

impl Antenna {
    pub const fn new(freq: char, x: i32, y: i32) -> Self {
        Self {
            freq,
            pos: Coord::new(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_the_full_grid() {
        assert!(Coord::new(0, 0).in_bounds());
        assert!(Coord::new(GRID_SIDE - 1, GRID_SIDE - 1).in_bounds());
    }

    #[test]
    fn bounds_reject_every_edge_overshoot() {
        assert!(!Coord::new(-1, 0).in_bounds());
        assert!(!Coord::new(0, -1).in_bounds());
        assert!(!Coord::new(GRID_SIDE, 0).in_bounds());
        assert!(!Coord::new(0, GRID_SIDE).in_bounds());
    }
}

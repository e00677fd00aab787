//! Harmonic effect derivation.
//!
//! Every unordered pair of same-frequency antennas projects two effect
//! points on the line through the pair, mirrored at the pair's own
//! spacing beyond each endpoint. The derivation is pure: points
//! outside the grid are emitted as-is and filtered by callers at
//! render or persist time.

use std::collections::HashSet;

use crate::core::{Antenna, Coord};

/// Coordinate-deduplicated set of derived effect points.
///
/// Derivations from different pairs may coincide; the set keeps one
/// entry per coordinate, the same rule the registry applies to
/// antennas.
#[derive(Debug, Default, Clone)]
pub struct EffectSet {
    points: HashSet<Coord>,
}

impl EffectSet {
    pub fn new() -> Self {
        Self {
            points: HashSet::new(),
        }
    }

    /// Insert a point. Returns `false` when the coordinate was
    /// already present.
    pub fn insert(&mut self, point: Coord) -> bool {
        self.points.insert(point)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, point: Coord) -> bool {
        self.points.contains(&point)
    }

    /// Iterate the effect points. No ordering guarantee.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.points.iter().copied()
    }
}

/// Derive the harmonic effects implied by `antennas`.
///
/// Examines every unordered pair of same-frequency antennas, not just
/// adjacency-linked ones. For a pair `(a, b)` with spacing
/// `(dx, dy) = (a.x - b.x, a.y - b.y)` the projected points are
/// `(a.x + dx, a.y + dy)` and `(b.x - dx, b.y - dy)`; the axis-aligned
/// alignments are the `dx == 0` / `dy == 0` instances of the same
/// projection. Pairs sharing a coordinate are skipped, so the function
/// stays total over arbitrary input.
pub fn derive_effects<I>(antennas: I) -> EffectSet
where
    I: IntoIterator<Item = Antenna>,
{
    let antennas: Vec<Antenna> = antennas.into_iter().collect();
    let mut effects = EffectSet::new();

    for (i, a) in antennas.iter().enumerate() {
        for b in &antennas[i + 1..] {
            if a.freq != b.freq || a.pos == b.pos {
                continue;
            }
            let dx = a.pos.x - b.pos.x;
            let dy = a.pos.y - b.pos.y;
            effects.insert(Coord::new(a.pos.x + dx, a.pos.y + dy));
            effects.insert(Coord::new(b.pos.x - dx, b.pos.y - dy));
        }
    }

    effects
}

//! Antenna registry: uniquely positioned labeled points on the grid.

use std::collections::HashMap;

use crate::core::{Antenna, Coord};
use crate::{Error, Result};

/// Unordered antenna collection keyed by coordinate.
///
/// At most one antenna per coordinate, and every stored coordinate is
/// grid-bounded. Insertion order carries no meaning.
#[derive(Debug, Default, Clone)]
pub struct AntennaRegistry {
    cells: HashMap<Coord, char>,
}

impl AntennaRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    /// Number of stored antennas
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Frequency stored at `coord`, if any
    pub fn freq_at(&self, coord: Coord) -> Option<char> {
        self.cells.get(&coord).copied()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains_key(&coord)
    }

    /// Iterate the stored antennas. No ordering guarantee.
    pub fn antennas(&self) -> impl Iterator<Item = Antenna> + '_ {
        self.cells.iter().map(|(&pos, &freq)| Antenna { freq, pos })
    }

    /// Insert an antenna.
    ///
    /// Bounds are checked before occupancy; a rejected insert leaves
    /// the registry untouched.
    pub fn insert(&mut self, freq: char, x: i32, y: i32) -> Result<()> {
        let pos = Coord::new(x, y);
        if !pos.in_bounds() {
            return Err(Error::OutOfBounds { x, y });
        }
        if self.cells.contains_key(&pos) {
            return Err(Error::Duplicate { x, y });
        }
        self.cells.insert(pos, freq);
        Ok(())
    }

    /// Remove the antenna matching frequency and coordinate exactly.
    pub fn remove(&mut self, freq: char, x: i32, y: i32) -> Result<()> {
        if self.cells.is_empty() {
            return Err(Error::Empty);
        }
        let pos = Coord::new(x, y);
        match self.cells.get(&pos) {
            Some(&stored) if stored == freq => {
                self.cells.remove(&pos);
                Ok(())
            }
            _ => Err(Error::NotFound),
        }
    }

    /// Drop every antenna. Returns `false` when there was nothing to do.
    pub fn clear(&mut self) -> bool {
        if self.cells.is_empty() {
            return false;
        }
        self.cells.clear();
        true
    }

    /// Fold an ordered sequence of `(freq, x, y)` records through
    /// [`insert`](Self::insert), silently skipping any the invariants
    /// reject. Returns how many records were kept.
    pub fn extend_lossy<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = (char, i32, i32)>,
    {
        let mut kept = 0;
        for (freq, x, y) in records {
            match self.insert(freq, x, y) {
                Ok(()) => kept += 1,
                Err(err) => log::debug!("skipping record '{freq}' ({x}, {y}): {err}"),
            }
        }
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GRID_SIDE;

    #[test]
    fn insert_and_lookup() {
        let mut registry = AntennaRegistry::new();
        registry.insert('A', 3, 4).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.freq_at(Coord::new(3, 4)), Some('A'));
        assert_eq!(registry.freq_at(Coord::new(4, 3)), None);
    }

    #[test]
    fn duplicate_coordinate_is_rejected_without_mutation() {
        let mut registry = AntennaRegistry::new();
        registry.insert('A', 2, 2).unwrap();

        let err = registry.insert('B', 2, 2).unwrap_err();
        assert!(matches!(err, Error::Duplicate { x: 2, y: 2 }));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.freq_at(Coord::new(2, 2)), Some('A'));
    }

    #[test]
    fn out_of_bounds_is_always_rejected() {
        let mut registry = AntennaRegistry::new();
        for (x, y) in [(-1, 0), (GRID_SIDE, 0), (0, -1), (0, GRID_SIDE)] {
            let err = registry.insert('A', x, y).unwrap_err();
            assert!(matches!(err, Error::OutOfBounds { .. }));
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn bounds_check_precedes_duplicate_check() {
        let mut registry = AntennaRegistry::new();
        registry.insert('A', 0, 0).unwrap();
        // Out-of-bounds wins even though the coordinate is also free.
        let err = registry.insert('A', -1, -1).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { .. }));
    }

    #[test]
    fn insert_then_remove_round_trips() {
        let mut registry = AntennaRegistry::new();
        registry.insert('A', 1, 1).unwrap();
        registry.insert('B', 5, 5).unwrap();

        registry.insert('C', 7, 2).unwrap();
        registry.remove('C', 7, 2).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.freq_at(Coord::new(1, 1)), Some('A'));
        assert_eq!(registry.freq_at(Coord::new(5, 5)), Some('B'));
        assert!(!registry.contains(Coord::new(7, 2)));
    }

    #[test]
    fn remove_requires_exact_frequency_match() {
        let mut registry = AntennaRegistry::new();
        registry.insert('A', 1, 1).unwrap();

        assert!(matches!(registry.remove('B', 1, 1), Err(Error::NotFound)));
        assert!(matches!(registry.remove('A', 1, 2), Err(Error::NotFound)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn remove_from_empty_registry_reports_empty() {
        let mut registry = AntennaRegistry::new();
        assert!(matches!(registry.remove('A', 0, 0), Err(Error::Empty)));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut registry = AntennaRegistry::new();
        registry.insert('A', 0, 0).unwrap();

        assert!(registry.clear());
        assert!(!registry.clear());
        assert!(registry.is_empty());
    }

    #[test]
    fn lossy_fold_skips_rejects_and_keeps_the_rest() {
        let mut registry = AntennaRegistry::new();
        let kept = registry.extend_lossy([
            ('A', 1, 1),
            ('B', 1, 1),  // duplicate coordinate
            ('C', -3, 0), // out of bounds
            ('D', 2, 2),
        ]);

        assert_eq!(kept, 2);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.freq_at(Coord::new(1, 1)), Some('A'));
        assert_eq!(registry.freq_at(Coord::new(2, 2)), Some('D'));
    }
}

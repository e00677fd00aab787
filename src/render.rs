//! Dense grid projection of antennas and derived effects.
//!
//! One cell per grid coordinate: `.` for empty, `#` for a cell holding
//! only a derived effect, the frequency character for an antenna. An
//! antenna always wins the cell it occupies.

use std::fmt;

use crate::core::{Antenna, Coord, EffectSet};
use crate::GRID_SIDE;

const SIDE: usize = GRID_SIDE as usize;

/// Character painted on empty cells.
pub const EMPTY_CELL: char = '.';

/// Character painted on cells holding a derived effect only.
pub const EFFECT_CELL: char = '#';

/// A rendered `GRID_SIDE` × `GRID_SIDE` cell matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[char; SIDE]; SIDE],
}

impl Grid {
    /// Paint antennas over effects over empty cells.
    ///
    /// Effects go first and antennas overwrite them, which is what
    /// guarantees the precedence contract. Out-of-bounds points on
    /// either side are skipped, never an error.
    pub fn compose<I>(antennas: I, effects: Option<&EffectSet>) -> Self
    where
        I: IntoIterator<Item = Antenna>,
    {
        let mut cells = [[EMPTY_CELL; SIDE]; SIDE];

        if let Some(effects) = effects {
            for point in effects.iter().filter(|p| p.in_bounds()) {
                cells[point.y as usize][point.x as usize] = EFFECT_CELL;
            }
        }
        for antenna in antennas {
            if antenna.pos.in_bounds() {
                cells[antenna.pos.y as usize][antenna.pos.x as usize] = antenna.freq;
            }
        }

        Self { cells }
    }

    /// Cell content at `coord`, if it lies on the grid.
    pub fn cell(&self, coord: Coord) -> Option<char> {
        coord
            .in_bounds()
            .then(|| self.cells[coord.y as usize][coord.x as usize])
    }

    /// Rows top to bottom (`y = 0` first).
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.iter().map(|row| row.iter().collect())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

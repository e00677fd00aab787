//! Text-grid persistence: the rendered map, one row per line.
//!
//! The saved form is exactly what the renderer displays. Parsing
//! treats `.` and `#` as empty cells (effects are derived, never
//! authoritative) and any other character as an antenna whose
//! frequency is that character, at the cell's coordinate.

use std::fs;
use std::path::Path;

use crate::render::{Grid, EFFECT_CELL, EMPTY_CELL};
use crate::storage::PointRecord;
use crate::Result;

/// Render a grid into its saved text form.
pub fn format_grid(grid: &Grid) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        out.push_str(&row);
        out.push('\n');
    }
    out
}

/// Parse a saved grid back into antenna records, row by row.
pub fn parse_grid(text: &str) -> Vec<PointRecord> {
    let mut records = Vec::new();
    for (y, line) in text.lines().enumerate() {
        for (x, freq) in line.chars().enumerate() {
            if freq == EMPTY_CELL || freq == EFFECT_CELL || freq.is_whitespace() {
                continue;
            }
            records.push(PointRecord {
                freq,
                x: x as i32,
                y: y as i32,
            });
        }
    }
    records
}

/// Write the rendered grid to `path`.
pub fn save<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<()> {
    fs::write(path, format_grid(grid))?;
    Ok(())
}

/// Load antenna records from a saved grid at `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<PointRecord>> {
    let text = fs::read_to_string(&path)?;
    let records = parse_grid(&text);
    log::debug!(
        "loaded {} records from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}

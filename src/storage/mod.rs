//! Persistence collaborators: text grid and binary record stream.
//!
//! Loaders yield ordered `(freq, x, y)` records; callers fold them
//! through `extend_lossy` so registry and graph invariants stay in
//! charge of what actually enters the collections. Corrupt or
//! out-of-bounds records are dropped at fold time, never trusted.

pub mod binary;
pub mod text;

use serde::{Deserialize, Serialize};

use crate::core::Antenna;

/// One persisted antenna record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRecord {
    pub freq: char,
    pub x: i32,
    pub y: i32,
}

impl From<Antenna> for PointRecord {
    fn from(antenna: Antenna) -> Self {
        Self {
            freq: antenna.freq,
            x: antenna.pos.x,
            y: antenna.pos.y,
        }
    }
}

impl From<PointRecord> for (char, i32, i32) {
    fn from(record: PointRecord) -> Self {
        (record.freq, record.x, record.y)
    }
}

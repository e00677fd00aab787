//! Core antenna model: grid coordinates, the registry, and harmonic
//! effect derivation.

mod harmonics;
mod point;
mod registry;

pub use harmonics::{derive_effects, EffectSet};
pub use point::{Antenna, Coord};
pub use registry::AntennaRegistry;

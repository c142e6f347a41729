//! Traits describing the external collaborators the engine consumes.
//!
//! Terrain storage and random number generation live outside this crate;
//! the engine reaches them only through the narrow interfaces here, so the
//! rules stay pure and replayable.
mod rng;
mod terrain;

pub use rng::{PcgRng, RngOracle, mix_seed};
pub use terrain::{TerrainError, TerrainOracle, TerrainWindow};

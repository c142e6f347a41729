//! Deterministic movement and pursuit rules for grid-based creatures.
//!
//! `prowl-core` defines the move-point economy, the greedy steering rules,
//! and the pursuit simulation that composes them. All randomness flows
//! through the seedable [`env::RngOracle`], and terrain is consumed through
//! the narrow [`env::TerrainOracle`] interface, so the crate stays free of
//! map storage, rendering, and I/O concerns. Supporting crates depend on
//! the types re-exported here.
pub mod budget;
pub mod config;
pub mod env;
pub mod geometry;
pub mod pursuit;
pub mod state;
pub mod steer;
pub mod stepper;

pub use config::SimConfig;
pub use env::{PcgRng, RngOracle, TerrainError, TerrainOracle, TerrainWindow, mix_seed};
pub use geometry::{CompassDirection, DistanceMetric, Position, normalized_slope};
pub use pursuit::{PursuitOutcome, simulate_pursuit};
pub use state::{
    ActorId, ActorState, CreatureOracle, CreatureTemplate, CreatureTemplateBuilder, Gait, Roster,
    SpawnError,
};
pub use steer::{StepChoice, SteerError, next_step};
pub use stepper::{EngineError, TurnReport, run_turn};
